pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod messages;
pub mod services;
pub mod state;
