//! System-wide theme preference: an explicit shared settings object with
//! subscriber notification via a Yew context, rather than ambient global
//! mutation.
//!
//! Init-on-load reads the persisted preference from localStorage and
//! falls back to the `prefers-color-scheme` media query; every change is
//! written back and mirrored as a `dark` class on the document root.

use web_sys::window;
use yew::prelude::*;

const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Reads the persisted preference, falling back to the environment.
fn detect_initial() -> Theme {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(saved)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::parse(&saved) {
                    return theme;
                }
            }
        }
        if let Ok(Some(query)) = window.match_media("(prefers-color-scheme: dark)") {
            if query.matches() {
                return Theme::Dark;
            }
        }
    }
    Theme::Light
}

/// Persists the preference and toggles the `dark` class on the root.
fn apply(theme: Theme) {
    if let Some(window) = window() {
        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            let classes = root.class_list();
            let result = if theme.is_dark() {
                classes.add_1("dark")
            } else {
                classes.remove_1("dark")
            };
            if result.is_err() {
                log::warn!("failed to update root theme class");
            }
        }
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                log::warn!("failed to persist theme preference");
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(detect_initial);

    use_effect_with(*theme, |theme| {
        apply(*theme);
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

/// Sun/moon button that flips the shared theme.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let Some(ctx) = use_context::<ThemeContext>() else {
        log::warn!("ThemeToggle rendered outside ThemeProvider");
        return html! {};
    };

    let onclick = {
        let toggle = ctx.toggle.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    let icon = if ctx.theme.is_dark() { "☀" } else { "☾" };
    let label = if ctx.theme.is_dark() {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    html! {
        <button
            {onclick}
            title={label}
            class="p-2 rounded-md text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors"
        >
            {icon}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_strings_round_trip() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }

    #[test]
    fn toggling_flips_between_the_two_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
