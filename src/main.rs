use std::cell::RefCell;
use std::env;
use std::rc::Rc;

use fltk::{app, prelude::*};

use ferris_folio::app::controllers::router::Route;
use ferris_folio::app::domain::settings::AppSettings;
use ferris_folio::app::domain::site::SiteProfile;
use ferris_folio::app::messages::Message;
use ferris_folio::app::services::content::{self, SiteContent};
use ferris_folio::app::state::AppState;
use ferris_folio::ui::dialogs::about::show_about_dialog;
use ferris_folio::ui::main_window::{build_main_window, build_menu};

fn main() {
    let fl_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = Rc::new(RefCell::new(AppSettings::load()));

    let cli_dir = env::args().nth(1);
    let content_dir = content::resolve_content_dir(cli_dir, &settings.borrow());
    let site = match content::load_site(&content_dir) {
        Ok(site) => site,
        Err(e) => {
            // Start with an empty site rather than refusing to launch
            eprintln!("{}", e);
            SiteContent {
                profile: SiteProfile::default(),
                posts: Vec::new(),
            }
        }
    };

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, &settings.borrow(), &site.profile);

    let mut state = AppState::new(widgets, sender, settings, site, content_dir);
    state.nav_bar.set_logo(&state.site.profile.logo);

    let initial = state.theme.current();
    state.apply_theme(initial);

    state.window.show();

    // Needs a valid HWND, so it runs after show()
    #[cfg(target_os = "windows")]
    ferris_folio::ui::theme::set_windows_titlebar_theme(&state.window, initial.is_dark());

    while fl_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::GoHome => state.navigate(Route::Home),
                Message::GoBlog => state.navigate(Route::Blog),
                Message::GoBack => state.go_back(),
                Message::OpenPost(slug) => state.navigate(Route::Post(slug)),
                Message::ToggleDarkMode => {
                    state.theme.toggle();
                }
                Message::ThemeChanged(theme) => state.apply_theme(theme),
                Message::SetFont(choice) => state.set_font(choice),
                Message::SetFontSize(size) => state.set_font_size(size),
                Message::ReloadContent => state.reload_content(),
                Message::OpenExternal(url) => state.open_external(&url),
                Message::ShowAbout => show_about_dialog(),
                Message::Quit => fl_app.quit(),
            }
        }
    }
}
