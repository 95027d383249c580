// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::time::Duration;

use kurbo::Point;
use tracing::{debug, trace};

use crate::config::{MinimapConfig, Surface};
use crate::drag::DragState;
use crate::engine::{self, Frame};
use crate::error::ConfigError;
use crate::gesture::{Drag, GestureHandler, Jaunty};
use crate::projector::GeometryProjector;
use crate::sink::RenderSink;
use crate::state::ViewportState;

/// A primary map view and its overview, kept in sync.
///
/// `Minimap` owns the [`ViewportState`] and a [`RenderSink`]. Every change,
/// whether from a gesture or from [`Minimap::move_map`], is clamped into the
/// valid range, committed, and pushed to both views through the sink.
#[derive(Debug)]
pub struct Minimap<S> {
    state: ViewportState,
    drag: DragState,
    sink: S,
}

impl<S: RenderSink> Minimap<S> {
    /// Creates a minimap over `config`, rendering into `sink`.
    ///
    /// The state starts fully zoomed out with no position; nothing is sent to
    /// the sink until the first move.
    pub fn new(config: MinimapConfig, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            width = config.width,
            height = config.height,
            scale = config.scale,
            padding = config.padding,
            "minimap created"
        );
        Ok(Self {
            state: ViewportState::new(config),
            drag: DragState::default(),
            sink,
        })
    }

    /// Current viewport state.
    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// The render sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the render sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the minimap, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Projects `collection` into both surfaces and hands the paths to the sink.
    ///
    /// The primary view is fitted to [`MinimapConfig::primary_extent`] and the
    /// overview to [`MinimapConfig::overview_extent`]. Returns `self` so calls
    /// can be chained, typically with [`Minimap::jaunty`].
    pub fn populate<C, P>(&mut self, collection: &C, projector: &P) -> &mut Self
    where
        C: ?Sized,
        P: GeometryProjector<C> + ?Sized,
    {
        for surface in [Surface::Primary, Surface::Overview] {
            let paths = projector.project(collection, self.state.config().extent(surface));
            debug!(?surface, features = paths.len(), "populated surface");
            self.sink.set_features(surface, paths);
        }
        self
    }

    /// Moves the visible window to `(x, y)` in overview pixels.
    ///
    /// `zoom` defaults to the current zoom and `transition` to an immediate
    /// change. Any input is accepted: zoom is clamped to
    /// [`MIN_ZOOM`](crate::MIN_ZOOM)`..=`[`MAX_ZOOM`](crate::MAX_ZOOM) and the
    /// window is clamped into the overview. NaN components keep their current
    /// value. Returns what was committed and sent to the sink.
    pub fn move_map(
        &mut self,
        x: f64,
        y: f64,
        zoom: Option<f64>,
        transition: Option<Duration>,
    ) -> Frame {
        let config = *self.state.config();
        let current = self.state.position().unwrap_or(Point::ZERO);

        let zoom = match zoom {
            Some(z) if !z.is_nan() => engine::clamp_zoom(z),
            _ => self.state.zoom(),
        };
        let proposed = Point::new(
            if x.is_nan() { current.x } else { x },
            if y.is_nan() { current.y } else { y },
        );
        let position = engine::clamp_position(&config, proposed, zoom);
        self.state.commit(position, zoom);

        let frame = engine::derive_frame(
            &config,
            position,
            zoom,
            transition.unwrap_or(Duration::ZERO),
        );
        trace!(
            x = position.x,
            y = position.y,
            zoom,
            duration = ?frame.duration,
            "viewport committed"
        );
        self.sink
            .set_overview_indicator(frame.indicator, frame.duration);
        self.sink
            .apply_primary_transform(frame.primary, frame.duration);
        frame
    }

    /// Applies a gesture's proposal through [`Minimap::move_map`].
    pub fn handle<G: GestureHandler + Debug>(&mut self, gesture: &G) -> Frame {
        let proposal = gesture.propose(&self.state);
        trace!(?gesture, ?proposal, "gesture");
        self.move_map(
            proposal.position.x,
            proposal.position.y,
            proposal.zoom,
            Some(proposal.transition),
        )
    }

    /// Zooms to half the extent, offset by a quarter, to show the indicator off.
    pub fn jaunty(&mut self) -> Frame {
        self.handle(&Jaunty)
    }

    /// Starts a pointer drag on `surface` at `pos` (in that surface's pixels).
    ///
    /// Dragging on the overview marks the indicator as selected until
    /// [`Minimap::drag_end`].
    pub fn drag_start(&mut self, surface: Surface, pos: Point) {
        if self.drag.surface() == Some(Surface::Overview) {
            self.sink.set_indicator_selected(false);
        }
        self.drag.start(surface, pos);
        if surface == Surface::Overview {
            self.sink.set_indicator_selected(true);
        }
    }

    /// Feeds a pointer position into the active drag.
    ///
    /// Returns `None` when no drag is active.
    pub fn drag_move(&mut self, pos: Point) -> Option<Frame> {
        let surface = self.drag.surface()?;
        let delta = self.drag.update(pos)?;
        Some(self.handle(&Drag { delta, surface }))
    }

    /// Ends the active drag, if any.
    pub fn drag_end(&mut self) {
        if self.drag.surface() == Some(Surface::Overview) {
            self.sink.set_indicator_selected(false);
        }
        self.drag.end();
    }
}
