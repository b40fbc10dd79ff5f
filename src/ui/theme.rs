use fltk::{
    app,
    browser::HoldBrowser,
    enums::{Color, Font},
    menu::MenuBar,
    prelude::*,
    text::TextDisplay,
    window::Window,
};

use crate::app::domain::settings::FontChoice;
use crate::app::domain::theme::{Palette, Rgb};

pub fn to_fltk(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}

pub fn base_font(choice: FontChoice) -> Font {
    match choice {
        FontChoice::Helvetica => Font::Helvetica,
        FontChoice::Times => Font::Times,
        FontChoice::Courier => Font::Courier,
    }
}

/// Push the palette tokens into every chrome widget. Page text colors
/// live in the style table, which the caller rebuilds separately.
pub fn apply_palette(
    window: &mut Window,
    menu: &mut MenuBar,
    browser: &mut HoldBrowser,
    display: &mut TextDisplay,
    palette: &Palette,
) {
    let background = to_fltk(palette.background);
    let text = to_fltk(palette.text);

    // Defaults for widgets that take no explicit colors (scrollbars,
    // dialogs)
    app::background(palette.background.0, palette.background.1, palette.background.2);
    app::background2(palette.background.0, palette.background.1, palette.background.2);
    app::foreground(palette.text.0, palette.text.1, palette.text.2);

    window.set_color(background);
    window.set_label_color(text);

    menu.set_color(to_fltk(palette.navigation_background));
    menu.set_text_color(text);
    menu.set_selection_color(to_fltk(palette.border)); // Hover color

    browser.set_color(background);
    browser.set_text_color(text);
    browser.set_selection_color(to_fltk(palette.border));

    display.set_color(background);
    display.set_text_color(text);

    window.redraw();
    menu.redraw();
    browser.redraw();
    display.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_font_mapping() {
        assert_eq!(base_font(FontChoice::Helvetica), Font::Helvetica);
        assert_eq!(base_font(FontChoice::Times), Font::Times);
        assert_eq!(base_font(FontChoice::Courier), Font::Courier);
    }

    #[test]
    fn test_rgb_conversion() {
        assert_eq!(to_fltk(Rgb(0x32, 0x91, 0xff)), Color::from_rgb(0x32, 0x91, 0xff));
    }
}
