// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, Rect};

/// Turns a feature collection into drawable paths fitted to a pixel extent.
///
/// The minimap never looks inside `C`; decoding and projection math belong to
/// the implementor. [`Minimap::populate`](crate::Minimap::populate) calls this
/// once per surface with that surface's padded extent.
pub trait GeometryProjector<C: ?Sized> {
    /// Projects every feature of `collection` so the whole set fits `extent`.
    fn project(&self, collection: &C, extent: Rect) -> Vec<BezPath>;
}

impl<C: ?Sized, F> GeometryProjector<C> for F
where
    F: Fn(&C, Rect) -> Vec<BezPath>,
{
    fn project(&self, collection: &C, extent: Rect) -> Vec<BezPath> {
        self(collection, extent)
    }
}
