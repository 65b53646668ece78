//! hls-ring-render: Cairo rendering for the HLS progress ring.
//!
//! [`ring_display::render_ring`] paints a composed [`hls_ring_core::RingFrame`];
//! [`ring_display::render_static`] composes and paints a settled ring in one
//! call, for previews and exports.

pub mod pango_text;
pub mod ring_display;

pub use ring_display::{render_ring, render_static, TAIL_STEPS_MAX};
