//! Display theme shared by both tools

use crate::store::{LocalStore, THEME_KEY};
use anyhow::Result;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Caption of the control that switches to the other theme
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀️ Світла тема",
            Theme::Light => "🌙 Темна тема",
        }
    }

    /// Restore the saved theme; anything unreadable means light
    pub fn load(store: &LocalStore) -> Self {
        store
            .get_item(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn save(self, store: &mut LocalStore) -> Result<()> {
        store.set_item(THEME_KEY, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme '{}'. Valid options are: light, dark", s)),
        }
    }
}
