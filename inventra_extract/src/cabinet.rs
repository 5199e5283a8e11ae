//! Room/cabinet code recognition.

use crate::patterns::{CabinetMode, cabinet_pattern};
use crate::span::{ExtractedSpan, Extraction};

/// Finds the leftmost cabinet token and renders it in the configured mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CabinetCodeExtractor {
    mode: CabinetMode,
}

impl CabinetCodeExtractor {
    #[must_use]
    pub const fn new(mode: CabinetMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn mode(&self) -> CabinetMode {
        self.mode
    }

    /// The matched span covers the marker too, so removing it from the text
    /// drops `к.301a`, not just `301a`.
    #[must_use]
    pub fn extract<'a>(&self, text: &'a str) -> Extraction<'a> {
        let Some(caps) = cabinet_pattern().captures(text) else {
            return Extraction::absent();
        };
        let (Some(token), Some(code)) = (caps.get(1), caps.get(2)) else {
            return Extraction::absent();
        };

        let value = match self.mode {
            CabinetMode::Raw => code.as_str().to_string(),
            CabinetMode::Canonical => canonicalize(code.as_str()),
        };

        Extraction::found(ExtractedSpan::from(token), value)
    }
}

/// `301-a` -> `к.301A`, `128` -> `к.128`.
fn canonicalize(code: &str) -> String {
    let digits: String = code.chars().take_while(|c| c.is_numeric()).collect();
    let suffix = code
        .chars()
        .last()
        .filter(|c| c.is_alphabetic())
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default();
    format!("к.{digits}{suffix}")
}
