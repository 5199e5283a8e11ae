use async_trait::async_trait;
use inventra_core::{ExtractionBackend, LocationFields};

use crate::cabinet::CabinetCodeExtractor;
use crate::decomposer::LocationDecomposer;
use crate::patterns::CabinetMode;
use crate::person::PersonNameExtractor;

/// Deterministic backend built on the regex extractors.
///
/// Stand-alone field lookups render cabinet codes in raw mode; [`location`]
/// goes through the decomposer and uses its mode.
///
/// [`location`]: RuleBasedBackend::location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleBasedBackend {
    cabinet: CabinetCodeExtractor,
    person: PersonNameExtractor,
    decomposer: LocationDecomposer,
}

impl Default for RuleBasedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBasedBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cabinet: CabinetCodeExtractor::new(CabinetMode::Raw),
            person: PersonNameExtractor::new(),
            decomposer: LocationDecomposer::new(CabinetMode::Canonical),
        }
    }

    /// Override the mode used by [`ExtractionBackend::storage_place`].
    #[must_use]
    pub const fn with_cabinet_mode(mut self, mode: CabinetMode) -> Self {
        self.cabinet = CabinetCodeExtractor::new(mode);
        self
    }

    #[must_use]
    pub fn responsible_person_sync(&self, text: &str) -> String {
        self.person.extract(text).into_value()
    }

    #[must_use]
    pub fn storage_place_sync(&self, text: &str) -> String {
        self.cabinet.extract(text).into_value()
    }

    /// Cabinet code and responsible person from a full decomposition.
    #[must_use]
    pub fn location(&self, text: &str) -> LocationFields {
        self.decomposer.decompose(text).into_fields()
    }
}

#[async_trait]
impl ExtractionBackend for RuleBasedBackend {
    fn name(&self) -> &'static str {
        "rule"
    }

    async fn responsible_person(&self, text: &str) -> String {
        self.responsible_person_sync(text)
    }

    async fn storage_place(&self, text: &str) -> String {
        self.storage_place_sync(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn storage_place_uses_raw_mode() {
        let backend = RuleBasedBackend::new();
        assert_eq!(backend.storage_place("к.301a Кравченко А.В. расписка").await, "301a");
        assert_eq!(backend.storage_place("каб.128 интернет").await, "128");
        assert_eq!(backend.storage_place("Каб. 128 интернет").await, "128");
        assert_eq!(backend.storage_place("к. 12 номер кабинета должен содержать 3 цифры").await, "Null");
        assert_eq!(backend.storage_place("Нет номера кабинета").await, "Null");
        assert_eq!(backend.storage_place("К123 без раздеителя").await, "Null");
        assert_eq!(backend.storage_place("8960123 просто цифры").await, "Null");
    }

    #[tokio::test]
    async fn responsible_person_matches_names() {
        let backend = RuleBasedBackend::new();
        assert_eq!(backend.responsible_person("к.301 Ленин А.В. расписка").await, "Ленин А.В.");
        assert_eq!(backend.responsible_person("Иванов И.И.").await, "Иванов И.И.");
        assert_eq!(backend.responsible_person("не указано ответственное лицо").await, "Null");
        assert_eq!(backend.responsible_person("Иванов И. И.").await, "Иванов И. И.");
        assert_eq!(backend.responsible_person("И.И.Иванов").await, "Иванов");
    }

    #[test]
    fn location_goes_through_decomposer() {
        let fields = RuleBasedBackend::new().location("к.301a Кравченко А.В. расписка");
        assert_eq!(fields.storage_place, "к.301A");
        assert_eq!(fields.responsible_person, "Кравченко А.В.");

        let fields = RuleBasedBackend::new().location("склад");
        assert_eq!(fields.storage_place, "склад");
        assert_eq!(fields.responsible_person, "Null");
    }

    #[test]
    fn cabinet_mode_override() {
        let backend = RuleBasedBackend::new().with_cabinet_mode(CabinetMode::Canonical);
        assert_eq!(backend.storage_place_sync("к.301a"), "к.301A");
    }

    #[test]
    fn is_shareable_across_threads() {
        let backend = std::sync::Arc::new(RuleBasedBackend::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let backend = backend.clone();
                std::thread::spawn(move || backend.storage_place_sync("к.301a"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap_or_default(), "301a");
        }
    }
}
