//! Design tokens consumed by the ring.
//!
//! The palette is read-only from the ring's point of view: colors are looked
//! up by semantic name and never mutated while rendering.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Semantic names understood by [`Palette::get`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PaletteKey {
    #[serde(rename = "accent")]
    Accent,
    #[serde(rename = "accent2")]
    Accent2,
    #[serde(rename = "hairline")]
    Hairline,
    #[serde(rename = "text_primary")]
    TextPrimary,
    #[serde(rename = "text_secondary")]
    TextSecondary,
    #[serde(rename = "background")]
    Background,
}

impl PaletteKey {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "accent" => Some(Self::Accent),
            "accent2" => Some(Self::Accent2),
            "hairline" => Some(Self::Hairline),
            "text_primary" | "textPrimary" => Some(Self::TextPrimary),
            "text_secondary" | "textSecondary" => Some(Self::TextSecondary),
            "background" => Some(Self::Background),
            _ => None,
        }
    }
}

/// Palette of design tokens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Palette {
    #[serde(default = "default_accent")]
    pub accent: Color,
    /// Secondary accent blended into the tail; the tail uses `accent` when unset
    #[serde(default)]
    pub accent2: Option<Color>,
    /// Track color
    #[serde(default = "default_hairline")]
    pub hairline: Color,
    #[serde(default = "default_text_primary")]
    pub text_primary: Color,
    #[serde(default = "default_text_secondary")]
    pub text_secondary: Color,
    #[serde(default = "default_background")]
    pub background: Color,
}

fn default_accent() -> Color {
    Color::from_rgba8(0x5b, 0xd6, 0xa8, 0xff)
}

fn default_hairline() -> Color {
    Color::from_rgba8(0x2a, 0x2f, 0x36, 0xff)
}

fn default_text_primary() -> Color {
    Color::from_rgba8(0xf2, 0xf4, 0xf7, 0xff)
}

fn default_text_secondary() -> Color {
    Color::from_rgba8(0x9a, 0xa3, 0xae, 0xff)
}

fn default_background() -> Color {
    Color::from_rgba8(0x12, 0x15, 0x19, 0xff)
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            accent2: None,
            hairline: default_hairline(),
            text_primary: default_text_primary(),
            text_secondary: default_text_secondary(),
            background: default_background(),
        }
    }
}

impl Palette {
    /// Look up a token by key. Only `Accent2` can be absent.
    pub fn color(&self, key: PaletteKey) -> Option<Color> {
        match key {
            PaletteKey::Accent => Some(self.accent),
            PaletteKey::Accent2 => self.accent2,
            PaletteKey::Hairline => Some(self.hairline),
            PaletteKey::TextPrimary => Some(self.text_primary),
            PaletteKey::TextSecondary => Some(self.text_secondary),
            PaletteKey::Background => Some(self.background),
        }
    }

    /// Look up a token by its semantic name
    pub fn get(&self, name: &str) -> Option<Color> {
        PaletteKey::from_name(name).and_then(|key| self.color(key))
    }

    /// Color at the head end of the tail
    pub fn tail_head_color(&self) -> Color {
        self.accent2.unwrap_or(self.accent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        let palette = Palette::default();
        assert_eq!(palette.get("accent"), Some(palette.accent));
        assert_eq!(palette.get("textPrimary"), Some(palette.text_primary));
        assert_eq!(palette.get("accent2"), None);
        assert_eq!(palette.get("nope"), None);
    }

    #[test]
    fn test_tail_head_falls_back_to_accent() {
        let mut palette = Palette::default();
        assert_eq!(palette.tail_head_color(), palette.accent);

        let violet = Color::from_rgba8(0x8b, 0x5c, 0xf6, 0xff);
        palette.accent2 = Some(violet);
        assert_eq!(palette.tail_head_color(), violet);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"accent":{"r":1.0,"g":0.0,"b":0.0,"a":1.0}}"#;
        let palette: Palette = serde_json::from_str(json).unwrap();
        assert_eq!(palette.accent, Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(palette.hairline, Palette::default().hairline);
    }
}
