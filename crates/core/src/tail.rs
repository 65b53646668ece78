//! Fading tail at the head of the progress arc.
//!
//! The tail is a second arc computed from the base geometry every frame. Its
//! head-side edge sits on the live arc head and its length is a function of
//! the drawn arc, so it shrinks with the arc instead of vanishing.

use hls_ring_types::{OpacityStop, TailPolicy};

use crate::geometry::ArcGeometry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailSegment {
    pub length: f64,
    /// Dash offset of the tail, `circumference - arc_length + length`
    pub offset: f64,
    /// Distance along the circle where the tail joins the body
    pub start: f64,
    /// Distance along the circle of the arc head
    pub end: f64,
}

impl TailSegment {
    /// Tail for `base`, or `None` when nothing is drawn
    pub fn compute(base: &ArcGeometry, tail_fraction: f64, policy: TailPolicy) -> Option<Self> {
        if base.is_empty() {
            return None;
        }

        let length = tail_length(base, tail_fraction, policy);
        if length <= 0.0 {
            return None;
        }

        let end = base.arc_length;
        Some(Self {
            length,
            offset: base.circumference - base.arc_length + length,
            start: end - length,
            end,
        })
    }

    /// Opacity at `t` along the tail, 0.0 at the body join and 1.0 at the head
    pub fn opacity_at(stops: &[OpacityStop], t: f64) -> f64 {
        OpacityStop::opacity_at(stops, t)
    }
}

/// Length of the tail for the drawn arc, never longer than the arc itself
pub fn tail_length(base: &ArcGeometry, tail_fraction: f64, policy: TailPolicy) -> f64 {
    let fraction = if tail_fraction.is_nan() {
        0.0
    } else {
        tail_fraction.clamp(0.0, 1.0)
    };
    let arc = base.arc_length.max(0.0);

    match policy {
        TailPolicy::FractionOfCircle => arc.min(base.circumference * fraction),
        TailPolicy::FractionOfArc => arc * fraction,
    }
}
