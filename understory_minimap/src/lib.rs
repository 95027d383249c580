// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_minimap --heading-base-level=0

//! Understory Minimap: a primary map view and a small overview, kept in sync.
//!
//! A minimap pairs a large, detailed view with a shrunken full-extent copy
//! that carries an indicator rectangle. This crate provides the headless
//! controller that keeps the two consistent:
//! - A single [`ViewportState`] (position + zoom) shared by both views.
//! - Clamp and transform math in [`engine`]: proposals are clamped into the
//!   overview and both render transforms are derived from the result.
//! - [`gesture`] handlers for click-to-center, drag, wheel zoom and the
//!   one-off "jaunty" affordance.
//! - Traits for the two external collaborators: a [`RenderSink`] that draws
//!   and a [`GeometryProjector`] that turns feature collections into paths.
//!
//! It does **not** parse feature collections, project geographic
//! coordinates, or draw anything. Hosts are expected to:
//! - Supply a [`GeometryProjector`] for their data format.
//! - Supply a [`RenderSink`] (see `understory_minimap_svg` for an SVG one).
//! - Forward pointer events to [`Minimap::handle`] or the drag helpers.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_minimap::gesture::ClickToCenter;
//! use understory_minimap::{Minimap, MinimapConfig, RecordingSink};
//!
//! // 500x300 primary view with a 100x60 overview.
//! let config = MinimapConfig::new(500.0, 300.0, 5.0);
//! let mut map = Minimap::new(config, RecordingSink::new()).unwrap();
//!
//! // Show half the extent, offset by a quarter.
//! map.jaunty();
//! assert_eq!(map.state().position(), Some(Point::new(25.0, 15.0)));
//!
//! // Clicking the overview centres the window on the click, clamped to the edge.
//! let frame = map.handle(&ClickToCenter { point: Point::new(95.0, 55.0) });
//! assert_eq!(frame.position, Point::new(50.0, 30.0));
//! ```
//!
//! ## Populating
//!
//! [`Minimap::populate`] asks the projector for paths fitted to each
//! surface's padded extent. Any `Fn(&C, Rect) -> Vec<BezPath>` is a projector:
//!
//! ```rust
//! use kurbo::{BezPath, Rect, Shape};
//! use understory_minimap::{Minimap, MinimapConfig, RecordingSink};
//!
//! let config = MinimapConfig::new(500.0, 300.0, 5.0).with_padding(20.0);
//! let mut map = Minimap::new(config, RecordingSink::new()).unwrap();
//!
//! let boxes = |count: &usize, extent: Rect| -> Vec<BezPath> {
//!     (0..*count).map(|_| extent.to_path(0.1)).collect()
//! };
//! map.populate(&3_usize, &boxes).jaunty();
//! ```
//!
//! ## Design notes
//!
//! - Zoom is the visible fraction of the overview: `1.0` shows everything and
//!   [`MIN_ZOOM`] shows a fifth.
//! - Positions are in overview pixels; the primary transform is derived, so
//!   the two views cannot disagree.
//! - Transitions are fire-and-forget. A newer move re-targets whatever the
//!   sink is animating; nothing is cancelled.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod drag;
pub mod engine;
pub mod gesture;

mod config;
mod error;
mod minimap;
mod projector;
mod sink;
mod state;

pub use config::{MinimapConfig, Surface};
pub use engine::{Frame, PrimaryTransform};
pub use error::ConfigError;
pub use minimap::Minimap;
pub use projector::GeometryProjector;
pub use sink::{RecordingSink, RenderSink, SinkCommand};
pub use state::{MAX_ZOOM, MIN_ZOOM, ViewportState};
