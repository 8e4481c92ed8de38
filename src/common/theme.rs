use serde::{Deserialize, Serialize};

use crate::common::storage::{get_local_storage, set_local_storage};

const THEME_KEY: &str = "theme";

/// Persisted light/dark preference. Cosmetic only, so every failure path
/// here falls back to a default instead of surfacing an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flip(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Persisted preference wins, then the system preference, then light.
pub fn initial_theme() -> Theme {
    resolve(get_local_storage(THEME_KEY).ok(), system_prefers_dark())
}

fn resolve(persisted: Option<Theme>, system_dark: bool) -> Theme {
    match persisted {
        Some(theme) => theme,
        None if system_dark => Theme::Dark,
        None => Theme::Light,
    }
}

fn system_prefers_dark() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Set the document-wide dark flag and persist the preference.
pub fn apply(theme: Theme) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = element.class_list();
        let _ = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
    }

    set_local_storage(THEME_KEY, theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_preference_wins_over_system() {
        assert_eq!(resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(resolve(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn system_preference_applies_when_nothing_persisted() {
        assert_eq!(resolve(None, true), Theme::Dark);
        assert_eq!(resolve(None, false), Theme::Light);
    }

    #[test]
    fn double_flip_round_trips() {
        assert_eq!(Theme::Light.flip().flip(), Theme::Light);
        assert_eq!(Theme::Dark.flip().flip(), Theme::Dark);
    }
}
