//! The closed set of target languages.

use std::fmt;
use std::str::FromStr;

use crate::ui::Style;

/// A target language for translation.
///
/// `None` is an explicit choice meaning "do not translate".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetLanguage {
    None,
    English,
    Spanish,
    French,
    German,
    Chinese,
    Japanese,
    #[default]
    Vietnamese,
}

impl TargetLanguage {
    /// Every selectable language, in menu order.
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::English,
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Chinese,
        Self::Japanese,
        Self::Vietnamese,
    ];

    /// Short language code, `None` for the skip sentinel.
    pub const fn code(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Chinese => "zh-cn",
            Self::Japanese => "ja",
            Self::Vietnamese => "vi",
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
            Self::Vietnamese => "Vietnamese",
        }
    }

    /// Returns `true` when translation should be skipped.
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a language code or name is not in the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Invalid language code: '{0}'\n\n\
     Valid language codes: None, en, es, fr, de, zh-cn, ja, vi\n\
     Run 'tidy languages' to see all supported languages."
)]
pub struct InvalidLanguage(pub String);

impl FromStr for TargetLanguage {
    type Err = InvalidLanguage;

    /// Accepts a code (`vi`, `zh-cn`) or a display name (`Vietnamese`).
    ///
    /// Codes are matched exactly, except that `zh-CN` is accepted for Chinese.
    /// Names and `none` are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }
        if trimmed == "zh-CN" {
            return Ok(Self::Chinese);
        }

        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == trimmed || lang.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InvalidLanguage(s.to_string()))
    }
}

/// Prints the supported languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported target languages"));
    for lang in TargetLanguage::ALL {
        let marker = if lang == TargetLanguage::default() {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!(
            "  {:6} {}{marker}",
            Style::code(lang.code()),
            Style::secondary(lang.name())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_vietnamese() {
        assert_eq!(TargetLanguage::default(), TargetLanguage::Vietnamese);
        assert_eq!(TargetLanguage::default().code(), "vi");
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("en".parse(), Ok(TargetLanguage::English));
        assert_eq!("zh-cn".parse(), Ok(TargetLanguage::Chinese));
        assert_eq!("zh-CN".parse(), Ok(TargetLanguage::Chinese));
        assert_eq!("ja".parse(), Ok(TargetLanguage::Japanese));
        assert_eq!("vi".parse(), Ok(TargetLanguage::Vietnamese));
    }

    #[test]
    fn test_parse_names_case_insensitive() {
        assert_eq!("German".parse(), Ok(TargetLanguage::German));
        assert_eq!("spanish".parse(), Ok(TargetLanguage::Spanish));
        assert_eq!("FRENCH".parse(), Ok(TargetLanguage::French));
    }

    #[test]
    fn test_parse_none_sentinel() {
        assert_eq!("None".parse(), Ok(TargetLanguage::None));
        assert_eq!("none".parse(), Ok(TargetLanguage::None));
        assert!(TargetLanguage::None.is_none());
        assert!(!TargetLanguage::English.is_none());
    }

    #[test]
    fn test_parse_invalid() {
        assert!("ko".parse::<TargetLanguage>().is_err());
        assert!("".parse::<TargetLanguage>().is_err());
        assert!("EN".parse::<TargetLanguage>().is_err()); // codes are case sensitive

        let err = "xx".parse::<TargetLanguage>().unwrap_err();
        assert!(err.to_string().contains("Invalid language code: 'xx'"));
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in TargetLanguage::ALL.iter().enumerate() {
            for b in &TargetLanguage::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_round_trip_through_code() {
        for lang in TargetLanguage::ALL {
            assert_eq!(lang.code().parse(), Ok(lang));
        }
    }
}
