//! Ring configuration types

use serde::{Deserialize, Serialize};

use crate::color::OpacityStop;

/// How the tail length is derived from the drawn arc
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum TailPolicy {
    /// `min(arc_length, circumference * tail_fraction)`
    #[serde(rename = "circle")]
    #[default]
    FractionOfCircle,
    /// `arc_length * tail_fraction`
    #[serde(rename = "arc")]
    FractionOfArc,
}

/// Easing curve for the progress animation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum Easing {
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "ease_out_cubic")]
    #[default]
    EaseOutCubic,
    #[serde(rename = "ease_in_out_cubic")]
    EaseInOutCubic,
}

/// Progress ring configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RingOptions {
    // Geometry
    #[serde(default = "default_size")]
    pub size: f64, // Pixels, the ring is square
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64, // Pixels

    // Animation
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: Easing,

    // Tail fade
    #[serde(default = "default_tail_fraction")]
    pub tail_fraction: f64, // 0.0 to 1.0
    #[serde(default)]
    pub tail_policy: TailPolicy,
    #[serde(default = "OpacityStop::linear_fade")]
    pub opacity_stops: Vec<OpacityStop>,
    #[serde(default = "default_tail_steps")]
    pub tail_steps: u32, // Sub-arcs used to paint the ramp

    // Numeral overlay
    #[serde(default = "default_true")]
    pub show_label: bool,
    #[serde(default = "default_label")]
    pub label: String,
}

fn default_size() -> f64 {
    200.0
}

fn default_stroke_width() -> f64 {
    18.0
}

fn default_duration_ms() -> u64 {
    600
}

fn default_tail_fraction() -> f64 {
    0.10
}

fn default_tail_steps() -> u32 {
    24
}

fn default_true() -> bool {
    true
}

fn default_label() -> String {
    "HLS".to_string()
}

impl Default for RingOptions {
    fn default() -> Self {
        Self {
            size: default_size(),
            stroke_width: default_stroke_width(),
            duration_ms: default_duration_ms(),
            easing: Easing::default(),
            tail_fraction: default_tail_fraction(),
            tail_policy: TailPolicy::default(),
            opacity_stops: OpacityStop::linear_fade(),
            tail_steps: default_tail_steps(),
            show_label: default_true(),
            label: default_label(),
        }
    }
}

impl RingOptions {
    /// Radius of the stroke centerline so the stroke fits inside `size`
    pub fn radius(&self) -> f64 {
        (self.size - self.stroke_width) / 2.0
    }

    /// Tail fraction limited to 0.0..=1.0 (NaN counts as no tail)
    pub fn clamped_tail_fraction(&self) -> f64 {
        if self.tail_fraction.is_nan() {
            0.0
        } else {
            self.tail_fraction.clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_ring() {
        let options = RingOptions::default();
        assert_eq!(options.radius(), 91.0);
        assert_eq!(options.duration_ms, 600);
        assert_eq!(options.tail_fraction, 0.10);
        assert_eq!(options.easing, Easing::EaseOutCubic);
        assert_eq!(options.tail_policy, TailPolicy::FractionOfCircle);
    }

    #[test]
    fn test_partial_json() {
        let options: RingOptions =
            serde_json::from_str(r#"{"size":120,"tail_policy":"arc"}"#).unwrap();
        assert_eq!(options.size, 120.0);
        assert_eq!(options.stroke_width, 18.0);
        assert_eq!(options.tail_policy, TailPolicy::FractionOfArc);
        assert_eq!(options.label, "HLS");
    }

    #[test]
    fn test_clamped_tail_fraction() {
        let mut options = RingOptions::default();
        options.tail_fraction = 3.0;
        assert_eq!(options.clamped_tail_fraction(), 1.0);
        options.tail_fraction = f64::NAN;
        assert_eq!(options.clamped_tail_fraction(), 0.0);
    }
}
