// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture handlers: raw input in, proposed viewport change out.
//!
//! A handler reads the current [`ViewportState`] and returns a [`Proposal`].
//! It never writes state and never computes render transforms; the proposal
//! goes through [`Minimap::handle`](crate::Minimap::handle), which clamps and
//! commits it like any other [`move_map`](crate::Minimap::move_map) call.
//!
//! Pointer positions are always passed in explicitly, in the pixel space of
//! the [`Surface`] the event arrived on.

use core::time::Duration;

use kurbo::{Point, Vec2};

use crate::config::Surface;
use crate::engine::{self, clamp_zoom};
use crate::state::ViewportState;

/// Transition used when clicking the overview to jump somewhere.
pub const CLICK_TRANSITION: Duration = Duration::from_millis(300);

/// Zoom multiplier for one wheel step towards the content.
pub const ZOOM_IN_FACTOR: f64 = 0.8;

/// Zoom multiplier for one wheel step away from the content.
pub const ZOOM_OUT_FACTOR: f64 = 1.2;

/// Zoom used by the [`Jaunty`] affordance.
pub const JAUNTY_ZOOM: f64 = 0.5;

/// Fraction of the overview extent the [`Jaunty`] window is offset by.
pub const JAUNTY_OFFSET: f64 = 0.25;

/// A requested viewport change, before clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Proposal {
    /// Proposed top-left of the visible window, in overview pixels.
    pub position: Point,
    /// Proposed zoom; `None` keeps the current zoom.
    pub zoom: Option<f64>,
    /// Transition length; zero applies immediately.
    pub transition: Duration,
}

/// Something that turns an input event into a [`Proposal`].
pub trait GestureHandler {
    /// Computes the proposal for the given state.
    fn propose(&self, state: &ViewportState) -> Proposal;
}

fn current_position(state: &ViewportState) -> Point {
    state.position().unwrap_or(Point::ZERO)
}

/// A click on the overview, centring the window on the clicked point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickToCenter {
    /// Click position in overview pixels.
    pub point: Point,
}

impl GestureHandler for ClickToCenter {
    fn propose(&self, state: &ViewportState) -> Proposal {
        let visible = state.visible_size();
        Proposal {
            position: Point::new(
                self.point.x - visible.width / 2.0,
                self.point.y - visible.height / 2.0,
            ),
            zoom: None,
            transition: CLICK_TRANSITION,
        }
    }
}

/// One frame of pointer drag.
///
/// On the overview the indicator follows the pointer. On the primary view the
/// content follows the pointer, so the window moves the opposite way, scaled
/// into overview pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
    /// Pointer movement since the previous frame, in `surface` pixels.
    pub delta: Vec2,
    /// Surface being dragged.
    pub surface: Surface,
}

impl GestureHandler for Drag {
    fn propose(&self, state: &ViewportState) -> Proposal {
        let delta = match self.surface {
            Surface::Overview => self.delta,
            Surface::Primary => -self.delta * (state.zoom() / state.config().scale),
        };
        Proposal {
            position: current_position(state) + delta,
            zoom: None,
            transition: Duration::ZERO,
        }
    }
}

/// Which way a wheel step zooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    /// Magnify: show less of the extent.
    In,
    /// Show more of the extent.
    Out,
}

impl WheelDirection {
    /// Classifies a vertical wheel delta. Negative scrolls in; zero and
    /// positive scroll out.
    #[must_use]
    pub fn from_delta(delta_y: f64) -> Self {
        if delta_y < 0.0 { Self::In } else { Self::Out }
    }

    /// Multiplier applied to the current zoom.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::In => ZOOM_IN_FACTOR,
            Self::Out => ZOOM_OUT_FACTOR,
        }
    }
}

/// A wheel step, zooming about the cursor.
///
/// The new window is centred on the cursor at the new zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelZoom {
    /// Vertical wheel delta as reported by the platform.
    pub delta_y: f64,
    /// Cursor position in `surface` pixels.
    pub cursor: Point,
    /// Surface the wheel event arrived on.
    pub surface: Surface,
}

impl GestureHandler for WheelZoom {
    fn propose(&self, state: &ViewportState) -> Proposal {
        let zoom = clamp_zoom(state.zoom() * WheelDirection::from_delta(self.delta_y).factor());
        let centre = match self.surface {
            Surface::Overview => self.cursor,
            Surface::Primary => engine::primary_to_overview(
                state.config(),
                current_position(state),
                state.zoom(),
                self.cursor,
            ),
        };
        let visible = engine::visible_size(state.config(), zoom);
        Proposal {
            position: Point::new(
                centre.x - visible.width / 2.0,
                centre.y - visible.height / 2.0,
            ),
            zoom: Some(zoom),
            transition: Duration::ZERO,
        }
    }
}

/// One-off zoom and offset that shows off the indicator after populating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Jaunty;

impl GestureHandler for Jaunty {
    fn propose(&self, state: &ViewportState) -> Proposal {
        let overview = state.overview_size();
        Proposal {
            position: Point::new(
                overview.width * JAUNTY_OFFSET,
                overview.height * JAUNTY_OFFSET,
            ),
            zoom: Some(JAUNTY_ZOOM),
            transition: Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MinimapConfig;

    fn state() -> ViewportState {
        ViewportState::new(MinimapConfig::new(500.0, 300.0, 5.0))
    }

    #[test]
    fn click_centres_current_window() {
        let p = ClickToCenter {
            point: Point::new(100.0, 50.0),
        }
        .propose(&state());
        assert_eq!(p.position, Point::new(50.0, 20.0));
        assert_eq!(p.zoom, None);
        assert_eq!(p.transition, CLICK_TRANSITION);
    }

    #[test]
    fn overview_drag_adds_delta_to_current_position() {
        let mut s = state();
        s.commit(Point::new(10.0, 10.0), 0.5);
        let p = Drag {
            delta: Vec2::new(3.0, -2.0),
            surface: Surface::Overview,
        }
        .propose(&s);
        assert_eq!(p.position, Point::new(13.0, 8.0));
        assert_eq!(p.transition, Duration::ZERO);
    }

    #[test]
    fn primary_drag_moves_window_against_pointer() {
        let mut s = state();
        s.commit(Point::new(20.0, 20.0), 0.5);
        // 0.5 / 5 = 0.1 overview px per primary px.
        let p = Drag {
            delta: Vec2::new(40.0, -20.0),
            surface: Surface::Primary,
        }
        .propose(&s);
        assert!((p.position.x - 16.0).abs() < 1e-9, "x {}", p.position.x);
        assert!((p.position.y - 22.0).abs() < 1e-9, "y {}", p.position.y);
    }

    #[test]
    fn wheel_direction_follows_delta_sign() {
        assert_eq!(WheelDirection::from_delta(-1.0), WheelDirection::In);
        assert_eq!(WheelDirection::from_delta(0.0), WheelDirection::Out);
        assert_eq!(WheelDirection::from_delta(3.0), WheelDirection::Out);
    }

    #[test]
    fn wheel_in_centres_on_cursor_at_new_zoom() {
        let p = WheelZoom {
            delta_y: -1.0,
            cursor: Point::new(50.0, 30.0),
            surface: Surface::Overview,
        }
        .propose(&state());
        assert_eq!(p.zoom, Some(0.8));
        assert!((p.position.x - 10.0).abs() < 1e-9, "x {}", p.position.x);
        assert!((p.position.y - 6.0).abs() < 1e-9, "y {}", p.position.y);
    }

    #[test]
    fn wheel_out_at_full_extent_stays_clamped() {
        let p = WheelZoom {
            delta_y: 1.0,
            cursor: Point::new(50.0, 30.0),
            surface: Surface::Overview,
        }
        .propose(&state());
        assert_eq!(p.zoom, Some(1.0));
    }

    #[test]
    fn wheel_on_primary_maps_cursor_into_overview() {
        let mut s = state();
        s.commit(Point::new(25.0, 15.0), 0.5);
        let p = WheelZoom {
            delta_y: 1.0,
            // Centre of the primary view is the centre of the window: (50, 30).
            cursor: Point::new(250.0, 150.0),
            surface: Surface::Primary,
        }
        .propose(&s);
        let zoom = p.zoom.unwrap();
        assert!((zoom - 0.6).abs() < 1e-12, "0.5 * 1.2");
        assert!((p.position.x - (50.0 - 30.0)).abs() < 1e-9, "x {}", p.position.x);
        assert!((p.position.y - (30.0 - 18.0)).abs() < 1e-9, "y {}", p.position.y);
    }

    #[test]
    fn jaunty_proposes_quarter_offset_at_half_zoom() {
        let p = Jaunty.propose(&state());
        assert_eq!(p.position, Point::new(25.0, 15.0));
        assert_eq!(p.zoom, Some(0.5));
    }
}
