//! Responsible-person name recognition.

use crate::patterns::person_pattern;
use crate::span::{ExtractedSpan, Extraction};

/// Finds the leftmost surname-like word with up to two trailing initials or
/// capitalized words.
///
/// Initials written before the surname without spaces (`И.И.Иванов`) are not
/// picked up; only the surname is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersonNameExtractor;

impl PersonNameExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn extract<'a>(&self, text: &'a str) -> Extraction<'a> {
        person_pattern().find(text).map_or_else(Extraction::absent, |m| {
            Extraction::found(ExtractedSpan::from(m), m.as_str().to_string())
        })
    }
}
