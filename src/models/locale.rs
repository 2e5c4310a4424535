//! Display language and localized month names

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language the app is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pt-BR")]
    Portuguese,
}

const MONTHS_EN: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

impl Language {
    /// Language code used for persistence
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Portuguese => "pt-BR",
        }
    }

    /// Parse a language code, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "english" => Some(Self::English),
            "pt" | "pt-br" | "portuguese" => Some(Self::Portuguese),
            _ => None,
        }
    }

    /// Lowercase name of a month (1 = January); `None` outside 1..=12
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        let names = match self {
            Self::English => &MONTHS_EN,
            Self::Portuguese => &MONTHS_PT,
        };
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        names.get(index).copied()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(Language::English.month_name(6), Some("june"));
        assert_eq!(Language::Portuguese.month_name(3), Some("março"));
        assert_eq!(Language::English.month_name(0), None);
        assert_eq!(Language::English.month_name(13), None);
    }

    #[test]
    fn test_codes() {
        assert_eq!(Language::parse("PT-br"), Some(Language::Portuguese));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(serde_json::to_string(&Language::Portuguese).unwrap(), "\"pt-BR\"");
    }
}
