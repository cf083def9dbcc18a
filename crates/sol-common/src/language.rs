//! Display language selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display languages.
///
/// The language picks both the localized widget strings and the system
/// instruction a new provider session is seeded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    /// Resolve a language code, falling back to the default for anything
    /// unsupported. Region suffixes (`es-MX`, `en_US`) are ignored.
    pub fn from_code(code: &str) -> Self {
        Self::parse_code(code).unwrap_or_default()
    }

    fn parse_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    /// Strict parse; use [`Language::from_code`] for the lenient fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_code(s).ok_or_else(|| format!("unsupported language code '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_known_languages() {
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("es"), Language::Es);
        assert_eq!(Language::from_code("ES"), Language::Es);
        assert_eq!(Language::from_code(" es-MX "), Language::Es);
        assert_eq!(Language::from_code("en_US"), Language::En);
    }

    #[test]
    fn from_code_unsupported_falls_back_to_default() {
        assert_eq!(Language::from_code("fr"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("es".parse::<Language>(), Ok(Language::Es));
        let err = "de".parse::<Language>().unwrap_err();
        assert!(err.contains("de"));
    }

    #[test]
    fn code_and_display_agree() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string(), lang.code());
            assert_eq!(Language::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Language::Es).unwrap();
        assert_eq!(json, "\"es\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }
}
