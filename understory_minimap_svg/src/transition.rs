// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated transitions for the SVG sink.

use core::time::Duration;

use kurbo::Rect;
use understory_minimap::PrimaryTransform;

/// Values that can be blended for an animated transition.
pub trait Lerp: Copy {
    /// Blends from `self` (at `t = 0`) to `other` (at `t = 1`).
    #[must_use]
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for PrimaryTransform {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            translate: self.translate.lerp(other.translate, t),
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

impl Lerp for Rect {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x0 + (other.x0 - self.x0) * t,
            self.y0 + (other.y0 - self.y0) * t,
            self.x1 + (other.x1 - self.x1) * t,
            self.y1 + (other.y1 - self.y1) * t,
        )
    }
}

/// Symmetric cubic easing, the usual default for UI transitions.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let u = t - 2.0;
        (u * u * u + 2.0) / 2.0
    }
}

/// An in-flight transition between two values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition<T> {
    /// Value shown when the transition started.
    pub from: T,
    /// Value shown when it finishes.
    pub to: T,
    /// Total length.
    pub duration: Duration,
    /// Time advanced so far.
    pub elapsed: Duration,
}

impl<T: Lerp> Transition<T> {
    /// Eased progress in `0..=1`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        ease_cubic_in_out(self.elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }

    /// Value at the current progress.
    #[must_use]
    pub fn value(&self) -> T {
        self.from.lerp(self.to, self.progress())
    }
}

/// A value that either sits still or is transitioning towards a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Animated<T> {
    value: T,
    transition: Option<Transition<T>>,
}

impl<T: Lerp> Animated<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            transition: None,
        }
    }

    /// What is on screen right now.
    pub(crate) fn current(&self) -> T {
        match &self.transition {
            Some(tr) => tr.value(),
            None => self.value,
        }
    }

    pub(crate) fn transition(&self) -> Option<&Transition<T>> {
        self.transition.as_ref()
    }

    /// Moves towards `to`.
    ///
    /// A zero duration jumps. Otherwise a new transition starts from whatever
    /// is currently shown, replacing any transition still running.
    /// Returns `true` if a running transition was replaced.
    pub(crate) fn retarget(&mut self, to: T, duration: Duration) -> bool {
        let replaced = self.transition.is_some();
        if duration.is_zero() {
            self.value = to;
            self.transition = None;
        } else {
            let from = self.current();
            self.value = from;
            self.transition = Some(Transition {
                from,
                to,
                duration,
                elapsed: Duration::ZERO,
            });
        }
        replaced
    }

    pub(crate) fn advance(&mut self, dt: Duration) {
        let Some(tr) = &mut self.transition else {
            return;
        };
        tr.elapsed = tr.elapsed.saturating_add(dt);
        if tr.elapsed >= tr.duration {
            self.value = tr.to;
            self.transition = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Rect, Vec2};
    use understory_minimap::PrimaryTransform;

    use super::{Animated, Lerp, ease_cubic_in_out};

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!(ease_cubic_in_out(0.25) < 0.25);
        assert!(ease_cubic_in_out(0.75) > 0.75);
    }

    #[test]
    fn transform_lerp_blends_translate_and_scale() {
        let a = PrimaryTransform::IDENTITY;
        let b = PrimaryTransform {
            translate: Vec2::new(-100.0, -50.0),
            scale: 3.0,
        };
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.translate, Vec2::new(-50.0, -25.0));
        assert_eq!(mid.scale, 2.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let mut a = Animated::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        a.retarget(Rect::new(5.0, 5.0, 15.0, 15.0), Duration::ZERO);
        assert_eq!(a.current(), Rect::new(5.0, 5.0, 15.0, 15.0));
        assert!(a.transition().is_none());
    }

    #[test]
    fn transition_runs_to_completion() {
        let mut a = Animated::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        a.retarget(Rect::new(20.0, 0.0, 30.0, 10.0), Duration::from_millis(300));
        assert_eq!(a.current(), Rect::new(0.0, 0.0, 10.0, 10.0));

        a.advance(Duration::from_millis(150));
        assert_eq!(a.current().x0, 10.0);

        a.advance(Duration::from_millis(200));
        assert!(a.transition().is_none());
        assert_eq!(a.current(), Rect::new(20.0, 0.0, 30.0, 10.0));
    }

    #[test]
    fn retarget_starts_from_what_is_shown() {
        let mut a = Animated::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        a.retarget(Rect::new(20.0, 0.0, 30.0, 10.0), Duration::from_millis(300));
        a.advance(Duration::from_millis(150));

        let replaced = a.retarget(Rect::new(0.0, 0.0, 10.0, 10.0), Duration::from_millis(300));
        assert!(replaced);
        let tr = a.transition().unwrap();
        assert_eq!(tr.from.x0, 10.0);
        assert_eq!(tr.elapsed, Duration::ZERO);
        assert_eq!(a.current().x0, 10.0);
    }
}
