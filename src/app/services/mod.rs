pub mod content;
pub mod reading_time;
pub mod render;
pub mod style_map;
