use std::str::FromStr;

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Language of the captions written in front of each rendered field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "el")]
    Greek,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greek => "el",
            Self::English => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "el" | "greek" => Ok(Self::Greek),
            "en" | "english" => Ok(Self::English),
            _ => Err(CoreError::UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("el".parse::<Locale>().unwrap(), Locale::Greek);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("english".parse::<Locale>().unwrap(), Locale::English);
    }

    #[test]
    fn rejects_unknown_locale() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownLocale(ref s) if s == "fr"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for locale in [Locale::Greek, Locale::English] {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }
}
