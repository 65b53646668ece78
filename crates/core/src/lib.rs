//! hls-ring-core: Animation and geometry for the HLS progress ring.
//!
//! This crate contains everything that turns a 0-100 value into drawable
//! arcs: the time-smoothed [`ProgressAnimator`], the dash geometry of the
//! progress arc, and the fading tail segment. Nothing here touches Cairo or
//! GTK, so every piece is a plain function of its inputs.

pub mod animator;
pub mod constants;
pub mod easing;
mod error;
pub mod frame;
pub mod geometry;
mod progress;
pub mod tail;

pub use animator::ProgressAnimator;
pub use constants::{
    ANIMATION_FRAME_INTERVAL, ANIMATION_SNAP_THRESHOLD, DEFAULT_DURATION, MAX_PERCENT,
};
pub use error::RingError;
pub use frame::{compose_frame, RingFrame, RingLayout};
pub use geometry::ArcGeometry;
pub use progress::ProgressValue;
pub use tail::TailSegment;

// Re-export types used in signatures for convenience
pub use hls_ring_types::{Easing, OpacityStop, RingOptions, TailPolicy};
