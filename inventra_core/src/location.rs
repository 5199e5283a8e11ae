//! Result types shared by every extraction path.

use serde::{Deserialize, Serialize};

/// Absence marker written into output records.
///
/// This is a plain string, not `Option::None`; downstream writers expect the
/// exact spelling.
pub const NULL: &str = "Null";

/// Three-field decomposition of one location string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposedLocation {
    /// Normalized cabinet code, or the whole input when no code was found.
    pub cabinet_code: String,
    /// Matched name, or [`NULL`].
    pub responsible_person: String,
    /// Input with the recognized spans removed and trimmed.
    pub note: String,
}

impl DecomposedLocation {
    #[must_use]
    pub fn has_person(&self) -> bool {
        self.responsible_person != NULL
    }

    /// Drops the note, keeping the two fields every backend can produce.
    #[must_use]
    pub fn into_fields(self) -> LocationFields {
        LocationFields {
            storage_place: self.cabinet_code,
            responsible_person: self.responsible_person,
        }
    }
}

/// The two logical fields every extraction backend yields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFields {
    pub storage_place: String,
    pub responsible_person: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn sentinel_survives_serialization() {
        let loc = DecomposedLocation {
            cabinet_code: "к.128".to_string(),
            responsible_person: NULL.to_string(),
            note: "интернет".to_string(),
        };

        let json = serde_json::to_string(&loc).expect("location should serialize");
        assert!(json.contains(r#""responsible_person":"Null""#));

        let back: DecomposedLocation =
            serde_json::from_str(&json).expect("valid JSON should deserialize");
        assert_eq!(back, loc);
        assert!(!back.has_person());
    }

    #[test]
    fn into_fields_keeps_cabinet_and_person() {
        let fields = DecomposedLocation {
            cabinet_code: "к.301A".to_string(),
            responsible_person: "Кравченко А.В.".to_string(),
            note: "расписка".to_string(),
        }
        .into_fields();

        assert_eq!(fields.storage_place, "к.301A");
        assert_eq!(fields.responsible_person, "Кравченко А.В.");
    }
}
