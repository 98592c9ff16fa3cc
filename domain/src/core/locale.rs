//! Locale of prompts and user-facing fail-soft notices

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Korean,
    English,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Korean => "ko",
            Locale::English => "en",
        }
    }

    /// Shown as the fast result when the fast-tier call fails.
    pub fn degraded_fast_message(&self) -> &'static str {
        match self {
            Locale::Korean => "죄송합니다. 초기 응답 생성에 문제가 발생했습니다.",
            Locale::English => "Sorry, there was a problem generating the initial response.",
        }
    }

    /// Yielded as the only fragment when the deep stream fails before producing text.
    pub fn stream_fallback_notice(&self) -> &'static str {
        match self {
            Locale::Korean => "\n죄송합니다. 상세 답변 생성 중 오류가 발생했습니다.",
            Locale::English => "\nSorry, an error occurred while generating the detailed answer.",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ko" | "kr" | "korean" => Ok(Locale::Korean),
            "en" | "english" => Ok(Locale::English),
            other => Err(DomainError::UnknownLocale(other.to_string())),
        }
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
