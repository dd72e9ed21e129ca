use serde::{Deserialize, Serialize};
use std::fmt;

/// The three UI locales the bot speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Sk,
    Ru,
}

impl LanguageCode {
    /// All supported codes, in menu order.
    pub const ALL: [LanguageCode; 3] = [LanguageCode::En, LanguageCode::Ru, LanguageCode::Sk];

    /// Parse a wire code. Accepts exactly "en", "sk", "ru" - nothing else.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "en" => Some(LanguageCode::En),
            "sk" => Some(LanguageCode::Sk),
            "ru" => Some(LanguageCode::Ru),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Sk => "sk",
            LanguageCode::Ru => "ru",
        }
    }

    /// Button label in the language itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Sk => "Slovenčina",
            LanguageCode::Ru => "Русский",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_supported_codes() {
        assert_eq!(LanguageCode::parse("en"), Some(LanguageCode::En));
        assert_eq!(LanguageCode::parse("sk"), Some(LanguageCode::Sk));
        assert_eq!(LanguageCode::parse("ru"), Some(LanguageCode::Ru));
        assert_eq!(LanguageCode::parse("EN"), None);
        assert_eq!(LanguageCode::parse("de"), None);
        assert_eq!(LanguageCode::parse(""), None);
        assert_eq!(LanguageCode::parse(" en"), None);
    }

    #[test]
    fn as_str_round_trips() {
        for code in LanguageCode::ALL {
            assert_eq!(LanguageCode::parse(code.as_str()), Some(code));
        }
    }
}
