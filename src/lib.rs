//! FerrisFolio: a desktop reader for a Markdown portfolio and blog.
//!
//! The binary wires an FLTK window to this library. Content loading,
//! routing, theming, and rendering all live here so they stay
//! testable without a display.

pub mod app;
pub mod ui;
