//! Theme and CSS utilities for the application
//!
//! Handles:
//! - Loading application CSS styles derived from the palette
//! - Matching GTK's dark/light preference to the palette background

use gtk4::gdk::Display;
use gtk4::CssProvider;
use log::{info, warn};

use hls_ring_types::{Color, Palette};

/// CSS `rgba()` form of a color
fn css_rgba(color: &Color) -> String {
    let (r, g, b, _) = color.to_rgba8();
    format!("rgba({}, {}, {}, {:.3})", r, g, b, color.a.clamp(0.0, 1.0))
}

/// Stylesheet for the window chrome around the ring
pub fn palette_css(palette: &Palette) -> String {
    format!(
        "
        window.hls-ring {{
            background-color: {background};
        }}

        .hls-ring scale trough {{
            background-color: {hairline};
        }}

        .hls-ring scale highlight {{
            background-color: {accent};
        }}

        .hls-ring button {{
            color: {text};
        }}
        ",
        background = css_rgba(&palette.background),
        hairline = css_rgba(&palette.hairline),
        accent = css_rgba(&palette.accent),
        text = css_rgba(&palette.text_primary),
    )
}

/// Load application CSS styles
pub fn load_css(palette: &Palette) {
    let Some(display) = Display::default() else {
        warn!("No display available, skipping CSS");
        return;
    };

    let provider = CssProvider::new();
    provider.load_from_data(&palette_css(palette));

    gtk4::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

/// Relative luminance of a color, 0.0 (black) to 1.0 (white)
pub fn luminance(color: &Color) -> f64 {
    0.2126 * color.r + 0.7152 * color.g + 0.0722 * color.b
}

/// Ask GTK for the dark variant when the palette background is dark
pub fn apply_palette_color_scheme(palette: &Palette) {
    let prefer_dark = luminance(&palette.background) < 0.5;

    if let Some(settings) = gtk4::Settings::default() {
        settings.set_gtk_application_prefer_dark_theme(prefer_dark);
        info!(
            "Applied palette color scheme: {}",
            if prefer_dark { "dark" } else { "light" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_rgba() {
        assert_eq!(
            css_rgba(&Color::from_rgba8(10, 20, 30, 255)),
            "rgba(10, 20, 30, 1.000)"
        );
    }

    #[test]
    fn test_palette_css_mentions_tokens() {
        let css = palette_css(&Palette::default());
        assert!(css.contains("window.hls-ring"));
        assert!(css.contains(&css_rgba(&Palette::default().accent)));
    }

    #[test]
    fn test_default_palette_is_dark() {
        assert!(luminance(&Palette::default().background) < 0.5);
    }
}
