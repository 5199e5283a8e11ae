//! Splits a location string into cabinet code, responsible person and note.

use std::ops::Range;

use inventra_core::DecomposedLocation;
use tracing::debug;

use crate::cabinet::CabinetCodeExtractor;
use crate::patterns::CabinetMode;
use crate::person::PersonNameExtractor;

/// Runs both extractors over the same input and assembles the residual note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationDecomposer {
    cabinet: CabinetCodeExtractor,
    person: PersonNameExtractor,
}

impl Default for LocationDecomposer {
    fn default() -> Self {
        Self::new(CabinetMode::Canonical)
    }
}

impl LocationDecomposer {
    #[must_use]
    pub const fn new(mode: CabinetMode) -> Self {
        Self {
            cabinet: CabinetCodeExtractor::new(mode),
            person: PersonNameExtractor::new(),
        }
    }

    #[must_use]
    pub const fn cabinet_mode(&self) -> CabinetMode {
        self.cabinet.mode()
    }

    /// Never fails.
    ///
    /// When no cabinet code is found the whole input becomes the cabinet
    /// field and the note is empty. A missing person only yields `"Null"`.
    #[must_use]
    pub fn decompose(&self, text: &str) -> DecomposedLocation {
        let cabinet = self.cabinet.extract(text);
        let person = self.person.extract(text);

        if !cabinet.is_found() {
            debug!("No cabinet code in {text:?}, keeping whole text as location");
            return DecomposedLocation {
                cabinet_code: text.to_string(),
                responsible_person: person.into_value(),
                note: String::new(),
            };
        }

        let note = cut_ranges(text, [cabinet.range(), person.range()].into_iter().flatten());

        DecomposedLocation {
            cabinet_code: cabinet.into_value(),
            responsible_person: person.into_value(),
            note: note.trim().to_string(),
        }
    }
}

/// `text` without the given byte ranges. Only the matched positions are
/// cut; other occurrences of the same substring stay. Overlapping ranges
/// are merged.
fn cut_ranges(text: &str, ranges: impl Iterator<Item = Range<usize>>) -> String {
    let mut ranges: Vec<Range<usize>> = ranges.collect();
    ranges.sort_by_key(|range| range.start);

    let mut kept = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            kept.push_str(&text[cursor..range.start]);
        }
        cursor = cursor.max(range.end);
    }
    kept.push_str(&text[cursor..]);
    kept
}
