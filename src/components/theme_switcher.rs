//! Three-way theme selector (dark / auto / light).

use leptos::prelude::*;

use crate::state::theme::{ThemeController, ThemePreference};
use crate::util::theme_dom::DocumentTheme;

/// Option definition for the switcher.
struct ThemeOption {
    preference: ThemePreference,
    label: &'static str,
    title: &'static str,
}

const OPTIONS: &[ThemeOption] = &[
    ThemeOption { preference: ThemePreference::Dark, label: "D", title: "Dark" },
    ThemeOption { preference: ThemePreference::Auto, label: "A", title: "Auto" },
    ThemeOption { preference: ThemePreference::Light, label: "L", title: "Light" },
];

/// Radio group for the theme preference.
///
/// Exactly one option is checked, matching `ThemeController::current`.
/// Selecting an option routes through `set_preference`, which persists the
/// choice and re-projects `data-theme` before the handler returns.
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeController<DocumentTheme>>>();

    let options = OPTIONS
        .iter()
        .map(|opt| {
            let preference = opt.preference;
            let label = opt.label;
            let title = opt.title;

            let is_checked = move || theme.with(|c| c.current() == preference);
            let on_change = move |_| {
                theme.update(|c| c.set_preference(preference));
            };

            view! {
                <label class="theme-switcher__option" title=title>
                    <input
                        type="radio"
                        name="theme"
                        value=preference.as_str()
                        prop:checked=is_checked
                        on:change=on_change
                    />
                    <span>{label}</span>
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="theme-switcher">{options}</div> }
}
