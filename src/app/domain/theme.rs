use fltk::app::Sender;

use crate::app::messages::Message;

/// One of the two palettes the app can render with.
///
/// There are exactly two; nothing in the app can select a third.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    pub fn opposite(&self) -> ThemeName {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemeName::Dark
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            ThemeName::Light => &LIGHT,
            ThemeName::Dark => &DARK,
        }
    }
}

/// Theme the app starts with on every launch. The chosen theme is
/// deliberately not persisted; it resets to this on restart.
pub const DEFAULT_THEME: ThemeName = ThemeName::Dark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Fixed bundle of named color tokens for one theme. Two constant
/// instances exist (LIGHT, DARK); they are never mutated.
pub struct Palette {
    pub background: Rgb,
    pub navigation_background: Rgb,
    pub text: Rgb,
    pub link: Rgb,
    pub link_hover: Rgb,
    pub link_tertiary: Rgb,
    pub border: Rgb,
    pub block_quote_background: Rgb,
    pub block_quote_border: Rgb,
    pub block_quote_text: Rgb,
    pub syntax_background: Rgb,
    pub syntax_punctuation: Rgb,
    pub syntax_comment: Rgb,
    pub syntax_string: Rgb,
    pub syntax_keyword: Rgb,
    pub toggle_slider: Rgb,
    pub toggle_circle: Rgb,
}

pub const DARK: Palette = Palette {
    background: Rgb(0x00, 0x00, 0x00),
    navigation_background: Rgb(0x0a, 0x0a, 0x0a),
    text: Rgb(0xf6, 0xf6, 0xf6),
    link: Rgb(0x32, 0x91, 0xff),
    link_hover: Rgb(0x4d, 0x97, 0xfe),
    link_tertiary: Rgb(0x9c, 0xa7, 0xad),
    border: Rgb(0x22, 0x22, 0x22),
    block_quote_background: Rgb(0x00, 0x00, 0x00),
    block_quote_border: Rgb(0x66, 0x66, 0x66),
    block_quote_text: Rgb(0x88, 0x88, 0x88),
    syntax_background: Rgb(0x14, 0x14, 0x14),
    syntax_punctuation: Rgb(0xf6, 0xf6, 0xf6),
    syntax_comment: Rgb(0x9c, 0xa7, 0xad),
    syntax_string: Rgb(0xa2, 0x89, 0x72),
    syntax_keyword: Rgb(0x67, 0xa1, 0xe2),
    toggle_slider: Rgb(0x22, 0x22, 0x22),
    toggle_circle: Rgb(0x88, 0x88, 0x88),
};

pub const LIGHT: Palette = Palette {
    background: Rgb(0xff, 0xff, 0xff),
    navigation_background: Rgb(0xfa, 0xfa, 0xfa),
    text: Rgb(0x37, 0x3b, 0x3f),
    link: Rgb(0x2c, 0x92, 0xdd),
    link_hover: Rgb(0x2a, 0x59, 0xb9),
    link_tertiary: Rgb(0x9c, 0xa7, 0xad),
    border: Rgb(0xe6, 0xe6, 0xe6),
    block_quote_background: Rgb(0xf6, 0xf6, 0xf6),
    block_quote_border: Rgb(0xe6, 0xe6, 0xe6),
    block_quote_text: Rgb(0x80, 0x8b, 0x91),
    syntax_background: Rgb(0xf6, 0xf6, 0xf6),
    syntax_punctuation: Rgb(0x37, 0x3b, 0x3f),
    syntax_comment: Rgb(0x9c, 0xa7, 0xad),
    syntax_string: Rgb(0xa2, 0x89, 0x72),
    syntax_keyword: Rgb(0x67, 0xa1, 0xe2),
    toggle_slider: Rgb(0xe6, 0xe6, 0xe6),
    toggle_circle: Rgb(0x80, 0x8b, 0x91),
};

/// Single source of truth for the active palette.
///
/// Owned by `AppState` for the lifetime of the session. Every write
/// broadcasts `Message::ThemeChanged` through the app channel so all
/// widgets restyle on the next dispatch.
pub struct ThemeStore {
    current: ThemeName,
    sender: Sender<Message>,
}

impl ThemeStore {
    pub fn new(sender: Sender<Message>) -> Self {
        Self {
            current: DEFAULT_THEME,
            sender,
        }
    }

    pub fn current(&self) -> ThemeName {
        self.current
    }

    pub fn palette(&self) -> &'static Palette {
        self.current.palette()
    }

    pub fn set(&mut self, next: ThemeName) {
        self.current = next;
        self.sender.send(Message::ThemeChanged(next));
    }

    /// Flip between the two palettes. Returns the new active theme.
    pub fn toggle(&mut self) -> ThemeName {
        self.set(self.current.opposite());
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ThemeStore {
        let (sender, _receiver) = fltk::app::channel::<Message>();
        ThemeStore::new(sender)
    }

    #[test]
    fn test_default_is_dark() {
        let store = store();
        assert_eq!(store.current(), ThemeName::Dark);
        assert_eq!(store.current(), DEFAULT_THEME);
    }

    #[test]
    fn test_set_then_read() {
        let mut store = store();
        store.set(ThemeName::Light);
        assert_eq!(store.current(), ThemeName::Light);
        store.set(ThemeName::Dark);
        assert_eq!(store.current(), ThemeName::Dark);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let mut store = store();
        let initial = store.current();
        store.toggle();
        assert_eq!(store.current(), initial.opposite());
        store.toggle();
        assert_eq!(store.current(), initial);
    }

    #[test]
    fn test_palette_follows_current() {
        let mut store = store();
        assert_eq!(store.palette().background, DARK.background);
        store.toggle();
        assert_eq!(store.palette().background, LIGHT.background);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(LIGHT.background, DARK.background);
        assert_ne!(LIGHT.toggle_slider, DARK.toggle_slider);
        // Accent tokens are shared between palettes
        assert_eq!(LIGHT.syntax_keyword, DARK.syntax_keyword);
    }
}
