// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::error::ConfigError;

/// One of the two synchronized surfaces a minimap renders into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The large, detailed map display.
    Primary,
    /// The small full-extent display carrying the viewport indicator.
    Overview,
}

/// Fixed geometry of a minimap pair.
///
/// All lengths are in primary-view pixels; the overview is the primary view
/// shrunk by `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinimapConfig {
    /// Primary view width in pixels.
    pub width: f64,
    /// Primary view height in pixels.
    pub height: f64,
    /// Ratio of primary to overview pixel size; a scale of 5 makes the
    /// overview one fifth of the primary view.
    pub scale: f64,
    /// Inset reserved around projected content, applied to both views
    /// (scaled down in the overview).
    #[cfg_attr(feature = "serde", serde(default))]
    pub padding: f64,
}

impl MinimapConfig {
    /// Creates a config with zero padding.
    ///
    /// The result is not validated until it is handed to
    /// [`Minimap::new`](crate::Minimap::new) or [`MinimapConfig::validate`].
    #[must_use]
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
            padding: 0.0,
        }
    }

    /// Returns a copy with the given padding.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Checks the geometry, reporting the first rule it breaks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::NonPositiveDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.scale.is_finite() && self.scale > 1.0) {
            return Err(ConfigError::ScaleTooSmall(self.scale));
        }
        let room = self.width.min(self.height);
        if !self.padding.is_finite() || self.padding < 0.0 || self.padding * 2.0 >= room {
            return Err(ConfigError::InvalidPadding {
                padding: self.padding,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Size of the overview surface: the primary size divided by `scale`.
    #[must_use]
    pub fn overview_size(&self) -> Size {
        Size::new(self.width / self.scale, self.height / self.scale)
    }

    /// Size of the given surface in its own pixels.
    #[must_use]
    pub fn surface_size(&self, surface: Surface) -> Size {
        match surface {
            Surface::Primary => Size::new(self.width, self.height),
            Surface::Overview => self.overview_size(),
        }
    }

    /// Extent the geometry projector should fit content into for the primary view.
    #[must_use]
    pub fn primary_extent(&self) -> Rect {
        Rect::new(
            self.padding,
            self.padding,
            self.width - self.padding,
            self.height - self.padding,
        )
    }

    /// Extent for the overview: the primary extent scaled by `1 / scale`.
    #[must_use]
    pub fn overview_extent(&self) -> Rect {
        let p = self.primary_extent();
        let s = self.scale;
        Rect::new(p.x0 / s, p.y0 / s, p.x1 / s, p.y1 / s)
    }

    /// Projection extent for the given surface.
    #[must_use]
    pub fn extent(&self, surface: Surface) -> Rect {
        match surface {
            Surface::Primary => self.primary_extent(),
            Surface::Overview => self.overview_extent(),
        }
    }
}
