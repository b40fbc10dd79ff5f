pub mod post;
pub mod settings;
pub mod site;
pub mod theme;
