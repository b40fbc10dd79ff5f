use crate::app::domain::settings::FontChoice;
use crate::app::domain::theme::ThemeName;

/// All messages that can be sent through the FLTK channel.
/// Nav bar clicks and menu callbacks send one of these; the dispatch
/// loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    GoHome,
    GoBlog,
    GoBack,
    OpenPost(String),

    // Theme
    ToggleDarkMode,
    ThemeChanged(ThemeName),

    // View
    SetFont(FontChoice),
    SetFontSize(u32),

    // Site
    ReloadContent,
    OpenExternal(String),

    // Help
    ShowAbout,
    Quit,
}
