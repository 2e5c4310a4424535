//! Preference CLI commands

use clap::Subcommand;

use crate::error::{PocketError, PocketResult};
use crate::models::Language;
use crate::stores::{PreferencesStore, Theme};

/// Preference subcommands
#[derive(Subcommand)]
pub enum PrefsCommands {
    /// Show current preferences
    Show,
    /// Set the display language (en, pt-br)
    Language {
        language: String,
    },
    /// Set the color theme (light, dark, system)
    Theme {
        theme: String,
    },
    /// Toggle masking of monetary values
    HideValues,
}

/// Handle a preferences command
pub fn handle_prefs_command(prefs: &mut PreferencesStore, cmd: PrefsCommands) -> PocketResult<()> {
    match cmd {
        PrefsCommands::Show => {
            println!("Language:    {}", prefs.language());
            println!("Theme:       {}", prefs.theme());
            println!(
                "Hide values: {}",
                if prefs.hide_values() { "yes" } else { "no" }
            );
        }

        PrefsCommands::Language { language } => {
            let parsed = Language::parse(&language).ok_or_else(|| {
                PocketError::Validation(format!(
                    "Invalid language: '{}'. Valid languages: en, pt-br",
                    language
                ))
            })?;
            prefs.set_language(parsed)?;
            println!("Language set to {}", parsed);
        }

        PrefsCommands::Theme { theme } => {
            let parsed = Theme::parse(&theme).ok_or_else(|| {
                PocketError::Validation(format!(
                    "Invalid theme: '{}'. Valid themes: light, dark, system",
                    theme
                ))
            })?;
            prefs.set_theme(parsed)?;
            println!("Theme set to {}", parsed);
        }

        PrefsCommands::HideValues => {
            let hidden = prefs.toggle_hide_values()?;
            println!("Values are now {}", if hidden { "hidden" } else { "visible" });
        }
    }

    Ok(())
}
