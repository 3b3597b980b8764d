//! Browser-backed theme platform.
//!
//! Persists the preference in `localStorage` and mirrors it onto the
//! `data-theme` attribute of the `<html>` element, which `style.css` keys
//! off to pick the active palette. Requires a browser environment; off
//! the `csr` feature every operation is inert so the crate still compiles
//! and tests natively.

use crate::state::theme::ThemePlatform;

#[cfg(feature = "csr")]
use crate::state::theme::STORAGE_KEY;

/// Attribute set on `document.documentElement`.
#[cfg(feature = "csr")]
const THEME_ATTRIBUTE: &str = "data-theme";

/// [`ThemePlatform`] backed by the real document and `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTheme;

impl ThemePlatform for DocumentTheme {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window()?;
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(value) = storage.get_item(STORAGE_KEY) {
                    return value;
                }
            }
            None
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn store(&self, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, value);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
        }
    }

    fn project(&self, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = doc.document_element() {
                    let _ = el.set_attribute(THEME_ATTRIBUTE, value);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
        }
    }
}
