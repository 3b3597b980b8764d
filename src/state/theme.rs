#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// `localStorage` key holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// User-selected appearance mode.
///
/// `Auto` is an opaque third variant from the controller's point of view:
/// resolving it against the system scheme is the stylesheet's job
/// (`prefers-color-scheme`), so the logic layer never inspects it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
    #[default]
    Auto,
}

impl ThemePreference {
    /// All variants, in the order the switcher displays them.
    pub const ALL: [Self; 3] = [Self::Dark, Self::Auto, Self::Light];

    /// String form used for both the storage value and the `data-theme`
    /// attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Auto => "auto",
        }
    }

    /// Parse a stored string, rejecting anything outside the three
    /// recognized forms.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Narrow platform seam the controller drives: durable key-value storage
/// plus the document attribute styling keys off. The browser
/// implementation is [`crate::util::theme_dom::DocumentTheme`]; tests use
/// an in-memory fake.
pub trait ThemePlatform {
    /// Read the persisted preference string, if any.
    fn load(&self) -> Option<String>;
    /// Persist the preference string under [`STORAGE_KEY`].
    fn store(&self, value: &str);
    /// Reflect the preference string onto the document root.
    fn project(&self, value: &str);
}

/// Owner of the current theme preference.
///
/// Holds the single in-memory copy of the preference and keeps storage and
/// the document projection in step with it. The projection is a derived
/// view, never read back; storage is written before the projection on
/// every change so a reload observes the value that was last shown.
#[derive(Clone, Debug)]
pub struct ThemeController<P> {
    preference: ThemePreference,
    platform: P,
}

impl<P: ThemePlatform> ThemeController<P> {
    /// Build the controller from persisted state and apply the initial
    /// projection.
    ///
    /// A missing entry is the normal first-visit state and yields `Auto`.
    /// An unrecognized entry also falls back to `Auto`, and the invalid
    /// value is overwritten so later loads start clean.
    pub fn initialize(platform: P) -> Self {
        let preference = match platform.load() {
            None => ThemePreference::default(),
            Some(raw) => match ThemePreference::parse(&raw) {
                Some(preference) => preference,
                None => {
                    let fallback = ThemePreference::default();
                    log::warn!("unrecognized stored theme {raw:?}, resetting to {fallback}");
                    platform.store(fallback.as_str());
                    fallback
                }
            },
        };
        platform.project(preference.as_str());
        Self {
            preference,
            platform,
        }
    }

    /// Switch to `next`, persisting and re-projecting before returning.
    ///
    /// This is the only mutation path; nothing else writes the storage
    /// entry or the document attribute.
    pub fn set_preference(&mut self, next: ThemePreference) {
        self.platform.store(next.as_str());
        self.platform.project(next.as_str());
        self.preference = next;
        log::debug!("theme preference set to {next}");
    }

    /// Current in-memory preference.
    pub fn current(&self) -> ThemePreference {
        self.preference
    }
}
