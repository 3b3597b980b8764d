//! UI components.

pub mod theme_switcher;
