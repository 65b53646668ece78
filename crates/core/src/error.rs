//! Errors raised while computing ring geometry

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RingError {
    /// The stroke does not fit the radius, so there is no positive arc to draw.
    #[error("degenerate ring geometry: stroke width {stroke_width} does not fit radius {radius}")]
    DegenerateGeometry { radius: f64, stroke_width: f64 },
}
