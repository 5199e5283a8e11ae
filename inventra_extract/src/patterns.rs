//! Compiled pattern table shared by all extractors.
//!
//! Patterns are compiled once on first use and never mutated, so every
//! extractor can be shared across threads without coordination.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Optional "к." / "каб." marker, exactly three digits, optional hyphen and
/// one suffix letter. Group 1 is the whole token, group 2 the code itself.
pub const CABINET_PATTERN: &str = r"(?i)\b((?:(?:к\.|каб\.)\s*)?(\d{3}-?[А-ЯA-Zа-яa-z]?))\b";

/// Capitalized surname followed by at most two initials or capitalized words.
pub const PERSON_PATTERN: &str = r"\b[A-ZА-Я][a-zа-я]+(?:\s*[A-ZА-Я](?:\.|[a-zа-я]+)?){0,2}";

static CABINET_RE: OnceLock<Regex> = OnceLock::new();
static PERSON_RE: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
pub fn cabinet_pattern() -> &'static Regex {
    CABINET_RE.get_or_init(|| {
        Regex::new(CABINET_PATTERN).expect("Static cabinet pattern is guaranteed to be valid")
    })
}

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
pub fn person_pattern() -> &'static Regex {
    PERSON_RE.get_or_init(|| {
        Regex::new(PERSON_PATTERN).expect("Static person pattern is guaranteed to be valid")
    })
}

/// How a matched cabinet code is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinetMode {
    /// Captured digits and suffix exactly as written: `301a`, `301-a`.
    Raw,
    /// `к.` prefix, digits, upper-cased suffix: `к.301A`.
    #[default]
    Canonical,
}

impl CabinetMode {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Raw => "raw",
            Self::Canonical => "canonical",
        }
    }
}

impl std::str::FromStr for CabinetMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "canonical" => Ok(Self::Canonical),
            other => Err(format!("unknown cabinet mode: {other}")),
        }
    }
}

impl std::fmt::Display for CabinetMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_compile() {
        assert!(cabinet_pattern().is_match("к.301"));
        assert!(person_pattern().is_match("Иванов"));
    }

    #[test]
    fn cabinet_mode_parses_case_insensitively() {
        assert_eq!("RAW".parse::<CabinetMode>(), Ok(CabinetMode::Raw));
        assert_eq!("canonical".parse::<CabinetMode>(), Ok(CabinetMode::Canonical));
        assert!("upper".parse::<CabinetMode>().is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn cabinet_mode_serializes_lowercase() {
        let json = serde_json::to_string(&CabinetMode::Raw).expect("mode should serialize");
        assert_eq!(json, r#""raw""#);
    }
}
