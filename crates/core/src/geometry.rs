//! Stroke-dash geometry of the progress arc.
//!
//! The arc is stroked along a full circle with a dash pattern of
//! `(circumference, circumference)`; the dash offset hides the unfilled part.
//! The drawing surface is rotated by -90 degrees so the dash starts at
//! 12 o'clock and progress reads clockwise.

use std::f64::consts::PI;

use crate::error::RingError;

/// Rotation applied to the drawing surface so arcs start at 12 o'clock
pub const START_ROTATION: f64 = -PI / 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub circumference: f64,
    pub dash_array: (f64, f64),
    pub dash_offset: f64,
    /// Drawn length along the circle, `circumference - dash_offset`
    pub arc_length: f64,
}

impl ArcGeometry {
    /// Geometry for `fraction` (0.0 to 1.0) of a circle of `radius`.
    ///
    /// Fails when the stroke does not fit: `stroke_width >= 2 * radius`, or a
    /// radius that is not a positive finite number.
    pub fn compute(radius: f64, stroke_width: f64, fraction: f64) -> Result<Self, RingError> {
        validate(radius, stroke_width)?;

        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let circumference = circumference(radius);
        let dash_offset = dash_offset(circumference, fraction);

        Ok(Self {
            circumference,
            dash_array: (circumference, circumference),
            dash_offset,
            arc_length: circumference - dash_offset,
        })
    }

    /// Whether anything is drawn
    pub fn is_empty(&self) -> bool {
        self.arc_length <= 0.0
    }

    /// Sweep angle in radians for a length along this circle
    pub fn angle_for(&self, length: f64) -> f64 {
        if self.circumference <= 0.0 {
            return 0.0;
        }
        2.0 * PI * (length / self.circumference)
    }
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

pub fn dash_offset(circumference: f64, fraction: f64) -> f64 {
    circumference * (1.0 - fraction)
}

/// Reject geometry that would need a negative inner radius
pub fn validate(radius: f64, stroke_width: f64) -> Result<(), RingError> {
    let degenerate = !radius.is_finite()
        || !stroke_width.is_finite()
        || radius <= 0.0
        || stroke_width < 0.0
        || stroke_width >= 2.0 * radius;

    if degenerate {
        return Err(RingError::DegenerateGeometry {
            radius,
            stroke_width,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_ring_matches_shipped_size() {
        let geometry = ArcGeometry::compute(91.0, 18.0, 0.5).unwrap();
        assert!((geometry.circumference - 571.77).abs() < 0.01);
        assert!((geometry.dash_offset - 285.88).abs() < 0.01);
        assert_eq!(geometry.dash_array.0, geometry.circumference);
        assert_eq!(geometry.dash_array.1, geometry.circumference);
    }

    #[test]
    fn test_empty_and_full() {
        for radius in [1.0, 9.5, 91.0, 1000.0] {
            let empty = ArcGeometry::compute(radius, 1.0, 0.0).unwrap();
            assert_eq!(empty.dash_offset, empty.circumference);
            assert!(empty.is_empty());

            let full = ArcGeometry::compute(radius, 1.0, 1.0).unwrap();
            assert_eq!(full.dash_offset, 0.0);
            assert_eq!(full.arc_length, full.circumference);
        }
    }

    #[test]
    fn test_fraction_is_clamped() {
        let over = ArcGeometry::compute(50.0, 10.0, 1.7).unwrap();
        assert_eq!(over.dash_offset, 0.0);
        let nan = ArcGeometry::compute(50.0, 10.0, f64::NAN).unwrap();
        assert!(nan.is_empty());
    }

    #[test]
    fn test_recomputes_on_resize() {
        let small = ArcGeometry::compute(40.0, 8.0, 0.25).unwrap();
        let large = ArcGeometry::compute(80.0, 8.0, 0.25).unwrap();
        assert!((large.circumference - 2.0 * small.circumference).abs() < 1e-9);
        assert!((large.arc_length - 2.0 * small.arc_length).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_geometry() {
        assert_eq!(
            ArcGeometry::compute(50.0, 300.0, 0.5),
            Err(RingError::DegenerateGeometry {
                radius: 50.0,
                stroke_width: 300.0
            })
        );
        assert!(ArcGeometry::compute(50.0, 100.0, 0.5).is_err());
        assert!(ArcGeometry::compute(0.0, 0.0, 0.5).is_err());
        assert!(ArcGeometry::compute(-4.0, 1.0, 0.5).is_err());
        assert!(ArcGeometry::compute(f64::INFINITY, 1.0, 0.5).is_err());
    }

    #[test]
    fn test_angle_for() {
        let geometry = ArcGeometry::compute(10.0, 2.0, 1.0).unwrap();
        assert!((geometry.angle_for(geometry.circumference / 4.0) - PI / 2.0).abs() < 1e-12);
    }
}
