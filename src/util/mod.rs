//! Browser platform bindings.

pub mod theme_dom;
