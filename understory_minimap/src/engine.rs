// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamp and transform math.
//!
//! Everything here is a pure function of the fixed [`MinimapConfig`] and a
//! (position, zoom) pair. [`Minimap::move_map`](crate::Minimap::move_map)
//! strings them together: clamp the proposal, commit it, then derive the two
//! render transforms with [`derive_frame`].

use core::fmt;
use core::time::Duration;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::MinimapConfig;
use crate::state::{MAX_ZOOM, MIN_ZOOM};

/// Transform applied to the primary view's feature layer.
///
/// Content is first scaled by `scale` and then translated by `translate`,
/// matching an SVG `translate(..)scale(..)` attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrimaryTransform {
    /// Translation in primary pixels.
    pub translate: Vec2,
    /// Uniform magnification, `1 / zoom`.
    pub scale: f64,
}

impl PrimaryTransform {
    /// The identity transform shown before anything has been committed.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    /// Returns the transform as a kurbo [`Affine`].
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }
}

impl fmt::Display for PrimaryTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({} {})scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

/// Everything a render sink needs after one committed move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Committed top-left of the visible window, in overview pixels.
    pub position: Point,
    /// Committed zoom factor.
    pub zoom: f64,
    /// The overview's indicator rectangle.
    pub indicator: Rect,
    /// The primary view's feature-layer transform.
    pub primary: PrimaryTransform,
    /// Transition length; zero means apply immediately.
    pub duration: Duration,
}

/// Clamps a zoom factor into [`MIN_ZOOM`]`..=`[`MAX_ZOOM`].
///
/// NaN is passed through unchanged; callers substitute a real value first.
#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Clamps one axis of the window's top-left corner.
///
/// A window that would overflow the far edge is pulled back to it, and only
/// afterwards is the result floored at zero. With that order a window wider
/// than the extent pins to the near edge.
#[must_use]
pub fn clamp_axis(proposed: f64, visible: f64, extent: f64) -> f64 {
    let v = if proposed + visible > extent {
        extent - visible
    } else {
        proposed
    };
    if v < 0.0 { 0.0 } else { v }
}

/// Size of the visible window at `zoom`, in overview pixels.
#[must_use]
pub fn visible_size(config: &MinimapConfig, zoom: f64) -> Size {
    config.overview_size() * zoom
}

/// Clamps a proposed top-left corner so the window stays inside the overview.
#[must_use]
pub fn clamp_position(config: &MinimapConfig, proposed: Point, zoom: f64) -> Point {
    let overview = config.overview_size();
    let visible = visible_size(config, zoom);
    Point::new(
        clamp_axis(proposed.x, visible.width, overview.width),
        clamp_axis(proposed.y, visible.height, overview.height),
    )
}

/// The overview indicator for a committed state.
#[must_use]
pub fn indicator_rect(config: &MinimapConfig, position: Point, zoom: f64) -> Rect {
    Rect::from_origin_size(position, visible_size(config, zoom))
}

/// The primary transform for a committed state.
///
/// The visible overview window, scaled up by `scale` and by `1 / zoom`, is
/// exactly what the primary view shows.
#[must_use]
pub fn primary_transform(config: &MinimapConfig, position: Point, zoom: f64) -> PrimaryTransform {
    PrimaryTransform {
        translate: Vec2::new(
            -position.x / zoom * config.scale,
            -position.y / zoom * config.scale,
        ),
        scale: 1.0 / zoom,
    }
}

/// Recovers the indicator rectangle from a primary transform.
///
/// This is the inverse of [`primary_transform`].
#[must_use]
pub fn indicator_from_primary(config: &MinimapConfig, transform: PrimaryTransform) -> Rect {
    let zoom = 1.0 / transform.scale;
    let position = Point::new(
        -transform.translate.x * zoom / config.scale,
        -transform.translate.y * zoom / config.scale,
    );
    indicator_rect(config, position, zoom)
}

/// Maps a point on the primary surface into overview coordinates.
#[must_use]
pub fn primary_to_overview(
    config: &MinimapConfig,
    position: Point,
    zoom: f64,
    point: Point,
) -> Point {
    position + point.to_vec2() * (zoom / config.scale)
}

/// Derives both render transforms for a committed state.
#[must_use]
pub fn derive_frame(
    config: &MinimapConfig,
    position: Point,
    zoom: f64,
    duration: Duration,
) -> Frame {
    Frame {
        position,
        zoom,
        indicator: indicator_rect(config, position, zoom),
        primary: primary_transform(config, position, zoom),
        duration,
    }
}
