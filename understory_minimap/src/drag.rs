// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag tracking: turn absolute pointer positions into per-move deltas.
//!
//! [`Minimap::drag_start`](crate::Minimap::drag_start),
//! [`Minimap::drag_move`](crate::Minimap::drag_move) and
//! [`Minimap::drag_end`](crate::Minimap::drag_end) drive a [`DragState`]
//! internally. It is public for hosts that receive absolute pointer positions
//! but want to feed [`Drag`](crate::gesture::Drag) gestures themselves.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_minimap::Surface;
//! use understory_minimap::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Surface::Overview, Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

use crate::config::Surface;

/// Tracks one drag across pointer-move events.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    surface: Option<Surface>,
    last_pos: Option<Point>,
}

impl DragState {
    /// Starts tracking a drag on `surface` from `pos`.
    pub fn start(&mut self, surface: Surface, pos: Point) {
        self.surface = Some(surface);
        self.last_pos = Some(pos);
    }

    /// Records a new pointer position, returning the delta since the last one.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.surface?;
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Surface the active drag started on.
    #[must_use]
    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }

    /// Ends the drag and forgets its positions.
    pub fn end(&mut self) {
        self.surface = None;
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.surface.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_without_start_is_ignored() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert!(!drag.is_dragging());
        assert_eq!(drag.surface(), None);
    }

    #[test]
    fn updates_yield_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Surface::Primary, Point::ZERO);

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::ZERO));
        assert_eq!(drag.surface(), Some(Surface::Primary));
    }

    #[test]
    fn end_resets() {
        let mut drag = DragState::default();
        drag.start(Surface::Overview, Point::new(1.0, 1.0));
        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(Point::new(2.0, 2.0)), None);
    }
}
