// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::config::MinimapConfig;

/// Smallest zoom factor: one fifth of the overview extent is visible.
pub const MIN_ZOOM: f64 = 0.2;

/// Largest zoom factor: the whole overview extent is visible.
pub const MAX_ZOOM: f64 = 1.0;

/// The single source of truth for what both views show.
///
/// `position` is the top-left corner of the visible window in overview pixels
/// and `zoom` is the fraction of the overview extent that window spans. The
/// state is read-only outside the crate; [`Minimap::move_map`] is the only
/// writer.
///
/// [`Minimap::move_map`]: crate::Minimap::move_map
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    config: MinimapConfig,
    position: Option<Point>,
    zoom: f64,
}

impl ViewportState {
    pub(crate) fn new(config: MinimapConfig) -> Self {
        Self {
            config,
            position: None,
            zoom: MAX_ZOOM,
        }
    }

    /// Fixed geometry this state was created with.
    #[must_use]
    pub fn config(&self) -> &MinimapConfig {
        &self.config
    }

    /// Top-left of the visible window in overview pixels.
    ///
    /// `None` until the first move has been committed.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Current zoom factor, always within [`MIN_ZOOM`]`..=`[`MAX_ZOOM`].
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Size of the full overview extent.
    #[must_use]
    pub fn overview_size(&self) -> Size {
        self.config.overview_size()
    }

    /// Size of the visible window at the current zoom, in overview pixels.
    #[must_use]
    pub fn visible_size(&self) -> Size {
        self.overview_size() * self.zoom
    }

    /// The visible window in overview coordinates, once positioned.
    #[must_use]
    pub fn visible_window(&self) -> Option<Rect> {
        self.position
            .map(|origin| Rect::from_origin_size(origin, self.visible_size()))
    }

    pub(crate) fn commit(&mut self, position: Point, zoom: f64) {
        debug_assert!(
            (MIN_ZOOM..=MAX_ZOOM).contains(&zoom),
            "zoom must be clamped before commit"
        );
        self.position = Some(position);
        self.zoom = zoom;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{MAX_ZOOM, ViewportState};
    use crate::MinimapConfig;

    #[test]
    fn fresh_state_is_zoomed_out_and_unpositioned() {
        let state = ViewportState::new(MinimapConfig::new(500.0, 300.0, 5.0));
        assert_eq!(state.zoom(), MAX_ZOOM);
        assert_eq!(state.position(), None);
        assert_eq!(state.visible_window(), None);
        assert_eq!(state.visible_size(), Size::new(100.0, 60.0));
    }

    #[test]
    fn commit_updates_window() {
        let mut state = ViewportState::new(MinimapConfig::new(500.0, 300.0, 5.0));
        state.commit(Point::new(25.0, 15.0), 0.5);
        assert_eq!(state.visible_window(), Some(Rect::new(25.0, 15.0, 75.0, 45.0)));
    }
}
