//! Foundational color types used by the ring.
//!
//! Color and OpacityStop are the building blocks for the track, the
//! progress body and the fading tail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a hex color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("expected 6 or 8 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digits in {0:?}")]
    BadDigit(String),
}

/// RGBA color with alpha channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::BadLength(digits.len()));
        }

        let byte = |i: usize| {
            digits
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorParseError::BadDigit(s.to_string()))
        };
        let alpha = if digits.len() == 8 { byte(6)? } else { 255 };

        Ok(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, alpha))
    }

    /// Same color with its alpha multiplied by `factor`
    pub fn with_alpha_factor(&self, factor: f64) -> Self {
        Self {
            a: self.a * factor.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Linear interpolation between two colors, `t` in 0.0..=1.0
    pub fn lerp(&self, other: &Color, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Apply to Cairo context
    #[cfg(feature = "cairo")]
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        cr.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// Opacity stop along the tail (0.0 = where the tail joins the body, 1.0 = head)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OpacityStop {
    pub position: f64, // 0.0 to 1.0
    pub opacity: f64,  // 0.0 to 1.0
}

impl OpacityStop {
    pub fn new(position: f64, opacity: f64) -> Self {
        Self { position, opacity }
    }

    /// Full opacity fading linearly to transparent at the head
    pub fn linear_fade() -> Vec<OpacityStop> {
        vec![OpacityStop::new(0.0, 1.0), OpacityStop::new(1.0, 0.0)]
    }

    /// The five-stop ramp of the first shipped ring: holds, then drops late
    pub fn classic_ramp() -> Vec<OpacityStop> {
        vec![
            OpacityStop::new(0.0, 1.0),
            OpacityStop::new(0.70, 1.0),
            OpacityStop::new(0.92, 0.65),
            OpacityStop::new(0.98, 0.35),
            OpacityStop::new(1.0, 0.15),
        ]
    }

    /// Interpolated opacity at `t` (0.0 to 1.0).
    ///
    /// Stops are expected sorted by position. An empty slice means fully opaque.
    pub fn opacity_at(stops: &[OpacityStop], t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
            return 1.0;
        };

        if t <= first.position {
            return first.opacity.clamp(0.0, 1.0);
        }
        if t >= last.position {
            return last.opacity.clamp(0.0, 1.0);
        }

        for pair in stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t >= lo.position && t <= hi.position {
                let span = hi.position - lo.position;
                if span <= f64::EPSILON {
                    return hi.opacity.clamp(0.0, 1.0);
                }
                let local = (t - lo.position) / span;
                return (lo.opacity + (hi.opacity - lo.opacity) * local).clamp(0.0, 1.0);
            }
        }

        last.opacity.clamp(0.0, 1.0)
    }
}
