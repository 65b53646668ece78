//! One paintable frame of the ring.
//!
//! A frame bundles everything the renderer needs for one animation tick:
//! layout, the base arc, the tail and the numeral. It is rebuilt from scratch
//! on every tick, so a resize or an options change can never leave stale
//! geometry behind.

use hls_ring_types::RingOptions;

use crate::error::RingError;
use crate::geometry::{self, ArcGeometry};
use crate::progress::ProgressValue;
use crate::tail::TailSegment;

/// Placement of the ring inside its square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub size: f64,
    pub center: (f64, f64),
    pub radius: f64,
    pub stroke_width: f64,
}

impl RingLayout {
    pub fn from_options(options: &RingOptions) -> Self {
        let half = options.size / 2.0;
        Self {
            size: options.size,
            center: (half, half),
            radius: options.radius(),
            stroke_width: options.stroke_width,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RingFrame {
    pub value: ProgressValue,
    /// Rounded value for the numeral overlay
    pub numeral: String,
    /// Caption under the numeral
    pub label: Option<String>,
    pub layout: RingLayout,
    /// Whether the full-circle track is drawn
    pub track: bool,
    pub progress: Option<ArcGeometry>,
    pub tail: Option<TailSegment>,
    /// Set when the progress layers had to be dropped
    pub error: Option<RingError>,
}

impl RingFrame {
    /// Length of the solid body; the tail covers the rest up to the head
    pub fn body_length(&self) -> f64 {
        match (&self.progress, &self.tail) {
            (Some(_), Some(tail)) => tail.start,
            (Some(progress), None) => progress.arc_length,
            _ => 0.0,
        }
    }
}

/// Build the frame showing `value` with `options`
pub fn compose_frame(options: &RingOptions, value: ProgressValue) -> RingFrame {
    let layout = RingLayout::from_options(options);
    let track = layout.radius.is_finite() && layout.radius > 0.0;

    let (progress, tail, error) =
        match ArcGeometry::compute(layout.radius, layout.stroke_width, value.fraction()) {
            Ok(base) if base.is_empty() => (None, None, None),
            Ok(base) => {
                let tail = TailSegment::compute(
                    &base,
                    options.clamped_tail_fraction(),
                    options.tail_policy,
                );
                (Some(base), tail, None)
            }
            Err(err) => {
                // Reported once per options change by the host; this runs every frame
                log::debug!("{}; drawing track only", err);
                (None, None, Some(err))
            }
        };

    log::trace!(
        "ring frame: value={:.2} arc={:.2} tail={:.2}",
        value.percent(),
        progress.map(|p| p.arc_length).unwrap_or(0.0),
        tail.map(|t| t.length).unwrap_or(0.0)
    );

    RingFrame {
        value,
        numeral: value.numeral(),
        label: options.show_label.then(|| options.label.clone()),
        layout,
        track,
        progress,
        tail,
        error,
    }
}

/// Check `options` up front, for callers that want to report bad sizes once
pub fn validate_options(options: &RingOptions) -> Result<(), RingError> {
    geometry::validate(options.radius(), options.stroke_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(size: f64, stroke_width: f64) -> RingOptions {
        RingOptions {
            size,
            stroke_width,
            ..RingOptions::default()
        }
    }

    #[test]
    fn test_zero_value_draws_nothing() {
        let frame = compose_frame(&RingOptions::default(), ProgressValue::new(0.0));
        assert_eq!(frame.numeral, "0");
        assert!(frame.track);
        assert!(frame.progress.is_none());
        assert!(frame.tail.is_none());
        assert!(frame.error.is_none());
    }

    #[test]
    fn test_half_value() {
        let frame = compose_frame(&RingOptions::default(), ProgressValue::new(50.0));
        let progress = frame.progress.unwrap();
        assert_eq!(frame.layout.radius, 91.0);
        assert!((progress.circumference - 571.77).abs() < 0.01);
        assert!((progress.dash_offset - 285.88).abs() < 0.01);
        assert_eq!(frame.numeral, "50");
        assert_eq!(frame.label.as_deref(), Some("HLS"));
    }

    #[test]
    fn test_full_value_tail_at_end() {
        let frame = compose_frame(&RingOptions::default(), ProgressValue::new(100.0));
        let progress = frame.progress.unwrap();
        let tail = frame.tail.unwrap();
        assert!(progress.dash_offset.abs() < 1e-9);
        assert!((tail.length - progress.circumference * 0.10).abs() < 1e-9);
        assert_eq!(tail.end, progress.arc_length);
        assert_eq!(frame.body_length(), tail.start);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let over = compose_frame(&RingOptions::default(), ProgressValue::new(250.0));
        assert_eq!(over.numeral, "100");
        let under = compose_frame(&RingOptions::default(), ProgressValue::new(-3.0));
        assert_eq!(under.numeral, "0");
        assert!(under.progress.is_none());
    }

    #[test]
    fn test_degenerate_geometry_suppresses_progress() {
        // radius 50 with a 300px stroke
        let frame = compose_frame(&options(400.0, 300.0), ProgressValue::new(70.0));
        assert_eq!(frame.layout.radius, 50.0);
        assert!(frame.progress.is_none());
        assert!(frame.tail.is_none());
        assert!(matches!(
            frame.error,
            Some(RingError::DegenerateGeometry { .. })
        ));
        assert_eq!(frame.body_length(), 0.0);
        assert!(validate_options(&options(400.0, 300.0)).is_err());
    }

    #[test]
    fn test_stroke_wider_than_size_has_no_track() {
        let frame = compose_frame(&options(10.0, 30.0), ProgressValue::new(40.0));
        assert!(!frame.track);
        assert!(frame.progress.is_none());
    }

    #[test]
    fn test_frames_are_idempotent() {
        let opts = RingOptions::default();
        let a = compose_frame(&opts, ProgressValue::new(63.0));
        let b = compose_frame(&opts, ProgressValue::new(63.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_hidden_label() {
        let opts = RingOptions {
            show_label: false,
            ..RingOptions::default()
        };
        assert_eq!(compose_frame(&opts, ProgressValue::new(5.0)).label, None);
    }
}
