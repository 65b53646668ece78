//! hls-ring: Animated HLS progress ring for GTK4
//!
//! This library provides the application layer around the ring crates:
//! - The [`ui::RingWidget`] GTK widget that animates the ring per display frame
//! - Configuration management for palette, ring options and window size

pub mod config;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use hls_ring_core::{ProgressAnimator, RingFrame};
pub use hls_ring_types::{Color, Palette, RingOptions, TailPolicy};
pub use ui::RingWidget;
