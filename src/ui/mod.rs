//! UI components

mod ring_widget;
pub mod theme;

pub use ring_widget::RingWidget;
pub use theme::{apply_palette_color_scheme, load_css};
