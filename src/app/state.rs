use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use fltk::{
    app::Sender,
    enums::Font,
    group::{Flex, Group, Wizard},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::controllers::router::{Route, Router};
use super::domain::settings::{AppSettings, FontChoice};
use super::domain::theme::{ThemeName, ThemeStore};
use super::messages::Message;
use super::services::content::{self, SiteContent};
use super::services::render::{self, Highlighting};
use crate::ui::content_view::{BlogIndex, ContentView};
use crate::ui::main_window::MainWidgets;
use crate::ui::nav_bar::NavBar;
use crate::ui::theme::{apply_palette, base_font};
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

pub const MIN_FONT_SIZE: u32 = 8;
pub const MAX_FONT_SIZE: u32 = 48;

pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    pub flex: Flex,
    pub nav_bar: NavBar,
    pub wizard: Wizard,
    pub page_reader: Group,
    pub page_index: Group,
    pub content: ContentView,
    pub index: BlogIndex,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    pub theme: ThemeStore,
    pub router: Router,
    pub site: SiteContent,
    pub content_dir: PathBuf,
    pub highlighting: Highlighting,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        site: SiteContent,
        content_dir: PathBuf,
    ) -> Self {
        let theme = ThemeStore::new(sender.clone());

        Self {
            window: widgets.wind,
            menu: widgets.menu,
            flex: widgets.flex,
            nav_bar: widgets.nav_bar,
            wizard: widgets.wizard,
            page_reader: widgets.page_reader,
            page_index: widgets.page_index,
            content: widgets.content,
            index: widgets.index,
            sender,
            settings,
            theme,
            router: Router::new(),
            site,
            content_dir,
            highlighting: Highlighting::new(),
        }
    }

    fn font(&self) -> Font {
        base_font(self.settings.borrow().font)
    }

    fn font_size(&self) -> i32 {
        self.settings.borrow().font_size as i32
    }

    pub fn navigate(&mut self, route: Route) {
        self.router.go(route);
        self.show_current();
    }

    pub fn go_back(&mut self) {
        if self.router.back() {
            self.show_current();
        }
    }

    /// Render the current route into the visible page and sync the
    /// chrome (nav bar, window title) with it.
    pub fn show_current(&mut self) {
        let theme = self.theme.current();
        let font = self.font();
        let size = self.font_size();

        match self.router.current().clone() {
            Route::Home => {
                let doc = render::render_home(&self.site.profile, theme, font, size);
                self.content.show_doc(&doc);
                self.wizard.set_current_widget(&self.page_reader);
            }
            Route::Blog => {
                self.index.set_posts(&self.site.posts);
                self.index.set_text_attrs(font, size - 2);
                self.wizard.set_current_widget(&self.page_index);
            }
            Route::Post(slug) => match self.site.post(&slug) {
                Some(post) => {
                    let doc = render::render_post(post, theme, font, size, &self.highlighting);
                    self.content.show_doc(&doc);
                    self.wizard.set_current_widget(&self.page_reader);
                }
                None => {
                    // Post vanished (reload removed it); land on the index
                    eprintln!("Unknown post slug: {}", slug);
                    self.router.go(Route::Blog);
                    self.show_current();
                    return;
                }
            },
        }

        self.nav_bar.set_route(self.router.current());
        self.update_window_title();
    }

    /// Restyle every widget for the given theme and re-render the page
    /// so its style table picks up the new palette.
    pub fn apply_theme(&mut self, theme: ThemeName) {
        let palette = theme.palette();
        apply_palette(
            &mut self.window,
            &mut self.menu,
            &mut self.index.browser,
            &mut self.content.display,
            palette,
        );
        self.nav_bar.set_theme(theme);

        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, theme.is_dark());

        self.show_current();
    }

    pub fn set_font(&mut self, choice: FontChoice) {
        self.settings.borrow_mut().font = choice;
        self.save_settings();
        self.show_current();
    }

    pub fn set_font_size(&mut self, size: u32) {
        let size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self.settings.borrow_mut().font_size = size;
        self.save_settings();
        self.show_current();
    }

    /// Re-read site.toml and posts from disk. On failure the previous
    /// content stays up.
    pub fn reload_content(&mut self) {
        match content::load_site(&self.content_dir) {
            Ok(site) => {
                self.site = site;
                self.nav_bar.set_logo(&self.site.profile.logo);
                self.show_current();
            }
            Err(e) => eprintln!("Reload failed: {}", e),
        }
    }

    pub fn open_external(&self, url: &str) {
        if let Err(e) = open::that(url) {
            eprintln!("Failed to open {}: {}", url, e);
        }
    }

    pub fn update_window_title(&mut self) {
        let title = match self.router.current() {
            Route::Home => format!("{} - FerrisFolio", self.site.profile.name),
            Route::Blog => "Blog - FerrisFolio".to_string(),
            Route::Post(slug) => {
                let name = self
                    .site
                    .post(slug)
                    .map(|p| p.title.as_str())
                    .unwrap_or(slug.as_str());
                format!("{} - FerrisFolio", name)
            }
        };
        self.window.set_label(&title);
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings.borrow().save() {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}
