//! Display languages and their number separators

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separators used when rendering amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub id: &'static str,
    pub decimal_separator: char,
    pub thousands_separator: char,
}

/// Chilean Spanish: `.` groups thousands, `,` marks decimals.
pub static ES_CL: NumberLocale = NumberLocale {
    id: "es-CL",
    decimal_separator: ',',
    thousands_separator: '.',
};

pub static EN_US: NumberLocale = NumberLocale {
    id: "en-US",
    decimal_separator: '.',
    thousands_separator: ',',
};

/// Language of user-facing text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "es", alias = "spanish")]
    Spanish,
    #[serde(rename = "en", alias = "english")]
    English,
}

impl Language {
    pub fn number_locale(self) -> &'static NumberLocale {
        match self {
            Language::Spanish => &ES_CL,
            Language::English => &EN_US,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
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

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "es-cl" | "spanish" => Ok(Language::Spanish),
            "en" | "en-us" | "english" => Ok(Language::English),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("EN-US".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"en\"");
        assert_eq!(serde_json::from_str::<Language>("\"spanish\"").unwrap(), Language::Spanish);
    }
}
