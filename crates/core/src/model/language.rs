use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Languages a word list can declare for its prompt and answer sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    French,
    English,
    Chinese,
    German,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::French,
        Language::English,
        Language::Chinese,
        Language::German,
    ];

    /// Looks up a language by its short code (`fr`, `en`, `cn`, `de`).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
            Language::Chinese => "cn",
            Language::German => "de",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Language::French => "French",
            Language::English => "English",
            Language::Chinese => "Chinese",
            Language::German => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::from_code(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown language code: {code}")))
    }
}
