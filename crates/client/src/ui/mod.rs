//! Presentation-independent shell model

pub mod navigation;

pub use navigation::{active_section, NavSection, APP_SUBTITLE, APP_TITLE};
