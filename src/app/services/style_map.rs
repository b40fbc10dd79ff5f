use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::highlighting::Color as SyntectColor;

use crate::app::domain::theme::{Palette, Rgb};

/// Fixed style roles used by the markdown renderer. Their style chars
/// are stable ('A' onwards, in declaration order) so tests can assert
/// on rendered style strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    Body,
    Heading1,
    Heading2,
    Heading3,
    Strong,
    Emphasis,
    Link,
    Meta,
    Quote,
    Code,
}

const FIXED_ROLES: [StyleRole; 10] = [
    StyleRole::Body,
    StyleRole::Heading1,
    StyleRole::Heading2,
    StyleRole::Heading3,
    StyleRole::Strong,
    StyleRole::Emphasis,
    StyleRole::Link,
    StyleRole::Meta,
    StyleRole::Quote,
    StyleRole::Code,
];

// FLTK style chars run 'A'..'Z'; fixed roles take the first ten and
// syntect code colors fill the rest.
const MAX_STYLES: usize = 26;

impl StyleRole {
    pub fn style_char(self) -> char {
        let idx = FIXED_ROLES.iter().position(|r| *r == self).unwrap_or(0);
        (b'A' + idx as u8) as char
    }
}

/// Builds the `StyleTableEntry` table for a `TextDisplay`: one fixed
/// entry per role, colored from the active palette, plus dynamically
/// allocated entries for syntect code colors.
pub struct StyleMap {
    color_to_char: HashMap<(u8, u8, u8), char>,
    entries: Vec<StyleTableEntry>,
    code_font: Font,
    code_size: i32,
}

impl StyleMap {
    pub fn new(palette: &Palette, font: Font, font_size: i32) -> Self {
        let size = font_size;
        let bold = bold_of(font);
        let italic = italic_of(font);

        let entry = |rgb: Rgb, font: Font, size: i32| StyleTableEntry {
            color: to_fltk(rgb),
            font,
            size,
        };

        let entries = vec![
            // Order must match FIXED_ROLES
            entry(palette.text, font, size),
            entry(palette.text, bold, size + 10),
            entry(palette.text, bold, size + 5),
            entry(palette.text, bold, size + 2),
            entry(palette.text, bold, size),
            entry(palette.text, italic, size),
            entry(palette.link, font, size),
            entry(palette.block_quote_text, font, size - 2),
            entry(palette.block_quote_text, italic, size),
            entry(palette.syntax_punctuation, Font::Courier, size - 1),
        ];

        Self {
            color_to_char: HashMap::new(),
            entries,
            code_font: Font::Courier,
            code_size: size - 1,
        }
    }

    /// Get the style character for a syntect color, inserting a new
    /// entry if needed. Falls back to the plain code style once the
    /// table is full.
    pub fn get_or_insert(&mut self, color: SyntectColor) -> char {
        let key = (color.r, color.g, color.b);
        if let Some(&ch) = self.color_to_char.get(&key) {
            return ch;
        }

        let idx = self.entries.len();
        if idx >= MAX_STYLES {
            return StyleRole::Code.style_char();
        }
        let ch = (b'A' + idx as u8) as char;
        self.entries.push(StyleTableEntry {
            color: Color::from_rgb(color.r, color.g, color.b),
            font: self.code_font,
            size: self.code_size,
        });
        self.color_to_char.insert(key, ch);
        ch
    }

    /// Style table for FLTK's set_highlight_data.
    pub fn entries(&self) -> Vec<StyleTableEntry> {
        self.entries.clone()
    }
}

pub fn to_fltk(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}

fn bold_of(font: Font) -> Font {
    match font {
        Font::Helvetica => Font::HelveticaBold,
        Font::Times => Font::TimesBold,
        Font::Courier => Font::CourierBold,
        other => other,
    }
}

fn italic_of(font: Font) -> Font {
    match font {
        Font::Helvetica => Font::HelveticaItalic,
        Font::Times => Font::TimesItalic,
        Font::Courier => Font::CourierItalic,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::theme::DARK;

    #[test]
    fn test_role_chars_are_stable() {
        assert_eq!(StyleRole::Body.style_char(), 'A');
        assert_eq!(StyleRole::Heading1.style_char(), 'B');
        assert_eq!(StyleRole::Link.style_char(), 'G');
        assert_eq!(StyleRole::Code.style_char(), 'J');
    }

    #[test]
    fn test_fixed_entries_cover_roles() {
        let map = StyleMap::new(&DARK, Font::Helvetica, 16);
        assert_eq!(map.entries().len(), FIXED_ROLES.len());
    }

    #[test]
    fn test_dynamic_colors_allocate_after_fixed() {
        let mut map = StyleMap::new(&DARK, Font::Helvetica, 16);
        let c1 = SyntectColor { r: 10, g: 20, b: 30, a: 255 };
        let c2 = SyntectColor { r: 40, g: 50, b: 60, a: 255 };

        let ch1 = map.get_or_insert(c1);
        assert_eq!(ch1, 'K');
        // Same color reuses the same char
        assert_eq!(map.get_or_insert(c1), 'K');
        assert_eq!(map.get_or_insert(c2), 'L');
        assert_eq!(map.entries().len(), FIXED_ROLES.len() + 2);
    }

    #[test]
    fn test_table_overflow_falls_back_to_code_style() {
        let mut map = StyleMap::new(&DARK, Font::Helvetica, 16);
        for i in 0..MAX_STYLES as u8 {
            let _ = map.get_or_insert(SyntectColor { r: i, g: 0, b: 0, a: 255 });
        }
        let overflow = map.get_or_insert(SyntectColor { r: 200, g: 200, b: 200, a: 255 });
        assert_eq!(overflow, StyleRole::Code.style_char());
        assert_eq!(map.entries().len(), MAX_STYLES);
    }
}
