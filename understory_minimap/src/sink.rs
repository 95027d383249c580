// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{BezPath, Rect};

use crate::config::Surface;
use crate::engine::PrimaryTransform;

/// Where a [`Minimap`](crate::Minimap) sends its output.
///
/// Both transform calls may be issued back to back with the same non-zero
/// `duration`; a sink should animate them together. A call that arrives while
/// an earlier transition is still running re-targets it: the newest call
/// always wins and nothing is cancelled explicitly.
pub trait RenderSink {
    /// Sets the primary view's feature-layer transform.
    fn apply_primary_transform(&mut self, transform: PrimaryTransform, duration: Duration);

    /// Moves and resizes the overview's indicator rectangle.
    fn set_overview_indicator(&mut self, rect: Rect, duration: Duration);

    /// Replaces the feature paths drawn into one surface.
    fn set_features(&mut self, surface: Surface, paths: Vec<BezPath>);

    /// Marks the indicator as being dragged.
    fn set_indicator_selected(&mut self, selected: bool) {
        let _ = selected;
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn apply_primary_transform(&mut self, transform: PrimaryTransform, duration: Duration) {
        (**self).apply_primary_transform(transform, duration);
    }

    fn set_overview_indicator(&mut self, rect: Rect, duration: Duration) {
        (**self).set_overview_indicator(rect, duration);
    }

    fn set_features(&mut self, surface: Surface, paths: Vec<BezPath>) {
        (**self).set_features(surface, paths);
    }

    fn set_indicator_selected(&mut self, selected: bool) {
        (**self).set_indicator_selected(selected);
    }
}

/// A single call received by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum SinkCommand {
    /// [`RenderSink::apply_primary_transform`].
    PrimaryTransform(PrimaryTransform, Duration),
    /// [`RenderSink::set_overview_indicator`].
    OverviewIndicator(Rect, Duration),
    /// [`RenderSink::set_features`].
    Features(Surface, Vec<BezPath>),
    /// [`RenderSink::set_indicator_selected`].
    IndicatorSelected(bool),
}

/// A sink that only records what it was told.
///
/// Useful for tests and for replaying a session into another backend.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    commands: Vec<SinkCommand>,
}

impl RecordingSink {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[SinkCommand] {
        &self.commands
    }

    /// Drains the recording.
    pub fn take(&mut self) -> Vec<SinkCommand> {
        core::mem::take(&mut self.commands)
    }

    /// The most recent primary transform, if any.
    #[must_use]
    pub fn last_primary(&self) -> Option<(PrimaryTransform, Duration)> {
        self.commands.iter().rev().find_map(|c| match c {
            SinkCommand::PrimaryTransform(t, d) => Some((*t, *d)),
            _ => None,
        })
    }

    /// The most recent indicator rectangle, if any.
    #[must_use]
    pub fn last_indicator(&self) -> Option<(Rect, Duration)> {
        self.commands.iter().rev().find_map(|c| match c {
            SinkCommand::OverviewIndicator(r, d) => Some((*r, *d)),
            _ => None,
        })
    }
}

impl RenderSink for RecordingSink {
    fn apply_primary_transform(&mut self, transform: PrimaryTransform, duration: Duration) {
        self.commands
            .push(SinkCommand::PrimaryTransform(transform, duration));
    }

    fn set_overview_indicator(&mut self, rect: Rect, duration: Duration) {
        self.commands
            .push(SinkCommand::OverviewIndicator(rect, duration));
    }

    fn set_features(&mut self, surface: Surface, paths: Vec<BezPath>) {
        self.commands.push(SinkCommand::Features(surface, paths));
    }

    fn set_indicator_selected(&mut self, selected: bool) {
        self.commands.push(SinkCommand::IndicatorSelected(selected));
    }
}
