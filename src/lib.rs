//! # theme-shell
//!
//! Leptos + WASM front-end shell: a navigation layout with client-side
//! routing, a profile page, and a persistent light/dark/auto theme
//! switcher.
//!
//! The one piece of real logic lives in [`state::theme`]: a small
//! controller that keeps the selected theme in sync with `localStorage`
//! and projects it onto `<html data-theme="...">` for the stylesheet to
//! pick up. Everything else is presentational wiring.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
