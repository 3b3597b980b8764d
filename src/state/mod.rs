//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. This app has exactly one domain: the theme preference.

pub mod theme;
