// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Reasons a [`MinimapConfig`](crate::MinimapConfig) is rejected.
///
/// Only construction can fail. Once a [`Minimap`](crate::Minimap) exists, every
/// pan/zoom request is clamped into range instead of being refused.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Width or height is zero, negative, or not finite.
    #[error("primary view dimensions must be finite and positive, got {width}x{height}")]
    NonPositiveDimension {
        /// Requested primary view width.
        width: f64,
        /// Requested primary view height.
        height: f64,
    },
    /// The overview would not be smaller than the primary view.
    #[error("scale must be a finite ratio greater than 1, got {0}")]
    ScaleTooSmall(f64),
    /// Padding is negative, not finite, or leaves no room for content.
    #[error("padding {padding} does not fit a {width}x{height} view")]
    InvalidPadding {
        /// Requested padding.
        padding: f64,
        /// Primary view width.
        width: f64,
        /// Primary view height.
        height: f64,
    },
}
