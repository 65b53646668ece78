//! Shared constants for the ring

use std::time::Duration;

/// Animation frame interval for smooth 60fps animations (16ms)
pub const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Default progress animation duration
pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);

/// Upper bound of a progress value
pub const MAX_PERCENT: f64 = 100.0;

/// Tolerance used when comparing animated percentages.
/// Expressed in percent points, so 0.001 is far below one pixel of arc.
pub const ANIMATION_SNAP_THRESHOLD: f64 = 0.001;
