//! UI preference state
//!
//! Language, theme and the hide-values toggle. Each preference is stored
//! under its own key and written as soon as it changes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PocketError, PocketResult};
use crate::models::Language;
use crate::storage::{KeyValueStore, KEY_HIDE_VALUES, KEY_LANGUAGE, KEY_THEME};

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the operating system setting
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" | "auto" => Some(Self::System),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of all UI preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
    /// Mask monetary values on screen
    pub hide_values: bool,
}

/// UI preference state backed by a key-value store
#[derive(Debug)]
pub struct PreferencesStore<'a> {
    kv: &'a dyn KeyValueStore,
    prefs: Preferences,
}

impl<'a> PreferencesStore<'a> {
    /// Create a store holding default preferences
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self {
            kv,
            prefs: Preferences::default(),
        }
    }

    /// Load every persisted preference
    ///
    /// Keys that were never written keep their defaults. The first read
    /// failure or undecodable value is returned as an error, and the store
    /// is left unchanged.
    pub fn hydrate(&mut self) -> PocketResult<Preferences> {
        let mut prefs = self.prefs;

        if let Some(raw) = self.kv.get(KEY_LANGUAGE)? {
            prefs.language = Language::parse(&raw).ok_or_else(|| corrupt(KEY_LANGUAGE, &raw))?;
        }
        if let Some(raw) = self.kv.get(KEY_THEME)? {
            prefs.theme = Theme::parse(&raw).ok_or_else(|| corrupt(KEY_THEME, &raw))?;
        }
        if let Some(raw) = self.kv.get(KEY_HIDE_VALUES)? {
            prefs.hide_values = raw
                .trim()
                .parse()
                .map_err(|_| corrupt(KEY_HIDE_VALUES, &raw))?;
        }

        self.prefs = prefs;
        tracing::debug!(prefs = ?self.prefs, "loaded preferences");
        Ok(self.prefs)
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn language(&self) -> Language {
        self.prefs.language
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    pub fn hide_values(&self) -> bool {
        self.prefs.hide_values
    }

    pub fn set_language(&mut self, language: Language) -> PocketResult<()> {
        self.kv.set(KEY_LANGUAGE, language.code())?;
        self.prefs.language = language;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> PocketResult<()> {
        self.kv.set(KEY_THEME, theme.as_str())?;
        self.prefs.theme = theme;
        Ok(())
    }

    pub fn set_hide_values(&mut self, hide: bool) -> PocketResult<()> {
        self.kv.set(KEY_HIDE_VALUES, if hide { "true" } else { "false" })?;
        self.prefs.hide_values = hide;
        Ok(())
    }

    /// Flip the hide-values toggle, returning the new value
    pub fn toggle_hide_values(&mut self) -> PocketResult<bool> {
        let hide = !self.prefs.hide_values;
        self.set_hide_values(hide)?;
        Ok(hide)
    }
}

fn corrupt(key: &str, raw: &str) -> PocketError {
    PocketError::Storage(format!("Corrupt value for {}: '{}'", key, raw))
}
