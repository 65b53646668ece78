//! Clamped progress percentage

use crate::constants::MAX_PERCENT;

/// A percentage in `0.0..=100.0`.
///
/// Out of range input is clamped, NaN becomes 0. Callers never see an error.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ProgressValue(f64);

impl ProgressValue {
    pub const ZERO: ProgressValue = ProgressValue(0.0);
    pub const FULL: ProgressValue = ProgressValue(MAX_PERCENT);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            log::debug!("progress value is NaN, using 0");
            return Self::ZERO;
        }
        let clamped = value.clamp(0.0, MAX_PERCENT);
        if clamped != value {
            log::debug!("progress value {} clamped to {}", value, clamped);
        }
        Self(clamped)
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// Normalized to 0.0..=1.0 for geometry
    pub fn fraction(self) -> f64 {
        self.0 / MAX_PERCENT
    }

    /// Rounded value shown in the numeral overlay
    pub fn numeral(self) -> String {
        format!("{}", self.0.round() as i64)
    }
}

impl From<f64> for ProgressValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
