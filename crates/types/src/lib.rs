//! hls-ring-types: Shared data types for the HLS progress ring.
//!
//! This crate contains pure data types (colors, palette tokens, ring options)
//! shared by the geometry core, the Cairo renderer and the application. The
//! Cairo convenience methods on [`Color`] are behind the `cairo` feature.

pub mod color;
pub mod palette;
pub mod ring;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ColorParseError, OpacityStop};
pub use palette::{Palette, PaletteKey};
pub use ring::{Easing, RingOptions, TailPolicy};
