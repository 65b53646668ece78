//! Pango-based text rendering for the numeral overlay
//!
//! Cairo's toy font API (select_font_face, show_text) keeps internal font
//! caches that grow without bound. Pango manages font resources properly and
//! integrates with fontconfig, so all ring text goes through here.

use cairo::Context;
use pango::{FontDescription, Weight as PangoWeight};
use pangocairo::functions::{create_layout, show_layout};
use std::cell::RefCell;
use std::collections::HashMap;

/// Logical size of a laid out string, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

/// Cache for FontDescription objects to avoid repeated allocations
struct FontDescriptionCache {
    cache: HashMap<FontKey, FontDescription>,
    max_entries: usize,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
struct FontKey {
    family: String,
    weight: i32,
    size_pango: i32, // Absolute size in Pango units (pixels * PANGO_SCALE)
}

fn weight_key(weight: PangoWeight) -> i32 {
    match weight {
        PangoWeight::Thin => 100,
        PangoWeight::Ultralight => 200,
        PangoWeight::Light => 300,
        PangoWeight::Semilight => 350,
        PangoWeight::Book => 380,
        PangoWeight::Normal => 400,
        PangoWeight::Medium => 500,
        PangoWeight::Semibold => 600,
        PangoWeight::Bold => 700,
        PangoWeight::Ultrabold => 800,
        PangoWeight::Heavy => 900,
        PangoWeight::Ultraheavy => 1000,
        _ => 400,
    }
}

impl FontDescriptionCache {
    fn new() -> Self {
        Self {
            cache: HashMap::new(),
            max_entries: 32,
        }
    }

    fn get_or_create(&mut self, family: &str, weight: PangoWeight, px: f64) -> FontDescription {
        let size_pango = (px * pango::SCALE as f64) as i32;
        let key = FontKey {
            family: family.to_string(),
            weight: weight_key(weight),
            size_pango,
        };

        if let Some(desc) = self.cache.get(&key) {
            return desc.clone();
        }

        // Ring sizes change on resize; drop everything rather than track usage
        if self.cache.len() >= self.max_entries {
            log::debug!("font cache full ({} entries), clearing", self.cache.len());
            self.cache.clear();
        }

        let mut desc = FontDescription::new();
        desc.set_family(family);
        desc.set_weight(weight);
        desc.set_absolute_size(size_pango as f64);

        self.cache.insert(key, desc.clone());
        desc
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.cache.len()
    }
}

thread_local! {
    static FONT_DESC_CACHE: RefCell<FontDescriptionCache> = RefCell::new(FontDescriptionCache::new());
}

/// Get a cached FontDescription with an absolute pixel size
pub fn font_description(family: &str, weight: PangoWeight, px: f64) -> FontDescription {
    FONT_DESC_CACHE.with(|cache| cache.borrow_mut().get_or_create(family, weight, px))
}

/// Measure `text` with `font`
pub fn text_size(cr: &Context, text: &str, font: &FontDescription) -> TextSize {
    let layout = create_layout(cr);
    layout.set_font_description(Some(font));
    layout.set_text(text);

    let (_ink, logical) = layout.extents();
    let scale = pango::SCALE as f64;
    TextSize {
        width: logical.width() as f64 / scale,
        height: logical.height() as f64 / scale,
    }
}

/// Draw `text` with the top of its logical box at `top`, horizontally
/// centered on `cx`. Returns the laid out size.
pub fn show_text_centered(
    cr: &Context,
    cx: f64,
    top: f64,
    text: &str,
    font: &FontDescription,
) -> TextSize {
    let layout = create_layout(cr);
    layout.set_font_description(Some(font));
    layout.set_text(text);

    let (_ink, logical) = layout.extents();
    let scale = pango::SCALE as f64;
    let size = TextSize {
        width: logical.width() as f64 / scale,
        height: logical.height() as f64 / scale,
    };

    cr.move_to(cx - size.width / 2.0, top);
    show_layout(cr, &layout);
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_key_hash() {
        let key1 = FontKey {
            family: "Sans".to_string(),
            weight: weight_key(PangoWeight::Heavy),
            size_pango: 28 * pango::SCALE,
        };
        let key2 = FontKey {
            family: "Sans".to_string(),
            weight: 900,
            size_pango: 28 * pango::SCALE,
        };
        assert_eq!(key1, key2);
    }

    #[test]
    fn test_cache_reuses_descriptions() {
        let mut cache = FontDescriptionCache::new();
        cache.get_or_create("Sans", PangoWeight::Bold, 28.0);
        cache.get_or_create("Sans", PangoWeight::Bold, 28.0);
        assert_eq!(cache.len(), 1);

        for px in 0..40 {
            cache.get_or_create("Sans", PangoWeight::Normal, 10.0 + px as f64);
        }
        assert!(cache.len() <= cache.max_entries);
    }
}
