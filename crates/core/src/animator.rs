//! Time-smoothed progress value.
//!
//! The animator holds a single interpolation segment from an anchor value to
//! a target. Retargeting replaces the segment, anchored at whatever value the
//! old segment shows at that instant, so the output never snaps.
//!
//! Time is passed in explicitly. The widget feeds it frame timestamps; tests
//! feed it synthetic instants.

use std::time::{Duration, Instant};

use hls_ring_types::{Easing, RingOptions};

use crate::constants::ANIMATION_SNAP_THRESHOLD;
use crate::easing;
use crate::progress::ProgressValue;

#[derive(Debug, Clone)]
pub struct ProgressAnimator {
    from: f64,
    target: f64,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ProgressAnimator {
    /// Create a settled animator showing `initial`
    pub fn new(initial: f64, duration: Duration, easing: Easing) -> Self {
        let initial = ProgressValue::new(initial).percent();
        Self {
            from: initial,
            target: initial,
            start: Instant::now(),
            duration,
            easing,
        }
    }

    pub fn from_options(options: &RingOptions, initial: f64) -> Self {
        Self::new(
            initial,
            Duration::from_millis(options.duration_ms),
            options.easing,
        )
    }

    /// Animate toward `target`, starting from the value shown at `now`.
    ///
    /// Re-sending the current target is a no-op, so repeated renders of the
    /// same value neither restart nor drift.
    pub fn retarget(&mut self, target: f64, now: Instant) {
        let target = ProgressValue::new(target).percent();
        if (target - self.target).abs() < ANIMATION_SNAP_THRESHOLD {
            return;
        }

        let current = self.value_at(now).percent();
        log::debug!(
            "ring retarget: {:.2} -> {:.2} (was heading to {:.2})",
            current,
            target,
            self.target
        );

        self.from = current;
        self.target = target;
        self.start = now;
    }

    /// Show `value` immediately without animating
    pub fn jump_to(&mut self, value: f64) {
        let value = ProgressValue::new(value).percent();
        self.from = value;
        self.target = value;
    }

    /// Interpolated value at `now`
    pub fn value_at(&self, now: Instant) -> ProgressValue {
        let t = self.linear_progress(now);
        if t >= 1.0 {
            return ProgressValue::new(self.target);
        }
        let eased = easing::apply(self.easing, t);
        ProgressValue::new(self.from + (self.target - self.from) * eased)
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.linear_progress(now) >= 1.0
    }

    pub fn target(&self) -> ProgressValue {
        ProgressValue::new(self.target)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the duration, continuing from the value shown at `now`.
    ///
    /// A running segment is split at `now` and the remaining distance is
    /// covered in `duration`.
    pub fn set_duration(&mut self, duration: Duration, now: Instant) {
        if duration == self.duration {
            return;
        }
        self.reanchor(now);
        self.duration = duration;
    }

    /// Change the curve, continuing from the value shown at `now`
    pub fn set_easing(&mut self, easing: Easing, now: Instant) {
        if easing == self.easing {
            return;
        }
        self.reanchor(now);
        self.easing = easing;
    }

    /// Start a fresh segment at `now` from the value shown then
    fn reanchor(&mut self, now: Instant) {
        if self.is_settled(now) {
            self.from = self.target;
        } else {
            self.from = self.value_at(now).percent();
        }
        self.start = now;
    }

    /// Elapsed share of the current segment, 0.0 to 1.0
    fn linear_progress(&self, now: Instant) -> f64 {
        if (self.target - self.from).abs() < ANIMATION_SNAP_THRESHOLD || self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}
