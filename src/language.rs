// src/language.rs

use crate::errors::RaseedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The languages the assistant can answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Es,
    Fr,
    Hi,
    De,
    Zh,
}

impl LanguageCode {
    /// Picker order.
    pub const ALL: [LanguageCode; 6] = [
        LanguageCode::En,
        LanguageCode::Es,
        LanguageCode::Fr,
        LanguageCode::Hi,
        LanguageCode::De,
        LanguageCode::Zh,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Es => "es",
            LanguageCode::Fr => "fr",
            LanguageCode::Hi => "hi",
            LanguageCode::De => "de",
            LanguageCode::Zh => "zh",
        }
    }

    /// English display name, used in the "<Name> selected." acknowledgment.
    pub fn name(self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Es => "Spanish",
            LanguageCode::Fr => "French",
            LanguageCode::Hi => "Hindi",
            LanguageCode::De => "German",
            LanguageCode::Zh => "Chinese",
        }
    }

    pub fn is_english(self) -> bool {
        self == LanguageCode::En
    }

    /// Comma separated list of every display name.
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|lang| lang.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Accepts either a code (`fr`) or an English name (`French`), ignoring case
/// and surrounding whitespace.
impl FromStr for LanguageCode {
    type Err = RaseedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LanguageCode::ALL
            .into_iter()
            .find(|lang| {
                lang.code().eq_ignore_ascii_case(wanted) || lang.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| RaseedError::UnsupportedLanguage(wanted.to_string()))
    }
}
