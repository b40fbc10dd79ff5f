pub mod content_view;
pub mod dialogs;
pub mod main_window;
pub mod nav_bar;
pub mod theme;
