//! Routed pages.

pub mod home;
pub mod profile;
