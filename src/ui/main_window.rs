use fltk::{
    app::Sender,
    group::{Flex, Group, Wizard},
    menu::{MenuBar, MenuFlag},
    enums::Shortcut,
    prelude::*,
    window::Window,
};

use super::content_view::{BlogIndex, ContentView};
use super::nav_bar::{NavBar, NAV_BAR_HEIGHT};
use crate::app::domain::settings::{AppSettings, FontChoice};
use crate::app::domain::site::SiteProfile;
use crate::app::domain::theme::DEFAULT_THEME;
use crate::app::messages::Message;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub nav_bar: NavBar,
    pub wizard: Wizard,
    pub page_reader: Group,
    pub page_index: Group,
    pub content: ContentView,
    pub index: BlogIndex,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, "FerrisFolio");
    wind.set_xclass("FerrisFolio");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let nav_bar = NavBar::new(0, 30, 800, sender.clone());
    flex.fixed(&nav_bar.widget, NAV_BAR_HEIGHT);

    // Pages live in a wizard; routing flips the visible one. The
    // geometry matches the flex slot so grandchildren start laid out.
    let content_y = 30 + NAV_BAR_HEIGHT;
    let content_h = 600 - content_y;
    let mut wizard = Wizard::new(0, content_y, 800, content_h, None);

    let mut page_reader = Group::new(0, content_y, 800, content_h, None);
    let content = ContentView::new(0, content_y, 800, content_h);
    page_reader.resizable(&content.display);
    page_reader.end();

    let mut page_index = Group::new(0, content_y, 800, content_h, None);
    let index = BlogIndex::new(0, content_y, 800, content_h, sender.clone());
    page_index.resizable(&index.browser);
    page_index.end();

    wizard.end();

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        nav_bar,
        wizard,
        page_reader,
        page_index,
        content,
        index,
    }
}

pub fn build_menu(
    menu: &mut MenuBar,
    sender: &Sender<Message>,
    settings: &AppSettings,
    profile: &SiteProfile,
) {
    let s = sender;

    // Site
    menu.add("Site/Reload Content", Shortcut::Ctrl | 'r', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ReloadContent) });
    menu.add("Site/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Go
    menu.add("Go/Home", Shortcut::Ctrl | '1', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::GoHome) });
    menu.add("Go/Blog", Shortcut::Ctrl | '2', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::GoBlog) });
    menu.add("Go/Back", Shortcut::Ctrl | 'b', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::GoBack) });

    // View
    let dm_flag = if DEFAULT_THEME.is_dark() { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::Ctrl | 'd', dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
    menu.add("View/Font/Helvetica", Shortcut::None, font_flag(settings, FontChoice::Helvetica), { let s = *s; move |_| s.send(Message::SetFont(FontChoice::Helvetica)) });
    menu.add("View/Font/Times", Shortcut::None, font_flag(settings, FontChoice::Times), { let s = *s; move |_| s.send(Message::SetFont(FontChoice::Times)) });
    menu.add("View/Font/Courier", Shortcut::None, font_flag(settings, FontChoice::Courier), { let s = *s; move |_| s.send(Message::SetFont(FontChoice::Courier)) });
    menu.add("View/Font Size/Small (12)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(12)) });
    menu.add("View/Font Size/Medium (16)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(16)) });
    menu.add("View/Font Size/Large (20)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(20)) });

    // Links come from the site profile
    for link in &profile.links {
        let label = format!("Links/{}", link.label.replace('/', "\\/"));
        let url = link.url.clone();
        menu.add(&label, Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenExternal(url.clone())) });
    }

    // Help
    menu.add("Help/About FerrisFolio", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

fn font_flag(settings: &AppSettings, choice: FontChoice) -> MenuFlag {
    if settings.font == choice {
        MenuFlag::Radio | MenuFlag::Value
    } else {
        MenuFlag::Radio
    }
}
