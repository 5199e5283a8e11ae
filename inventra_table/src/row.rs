use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::columns::{COMPOSITE_DELIMITER, OLD_TABLE_STRUCTURE, PERSON_AND_PLACE};
use crate::error::{Result, TableError};

/// One row of the legacy export, keyed by old column names.
#[derive(Debug, Clone, Copy)]
pub struct InventoryRow<'a> {
    index: usize,
    cells: &'a Map<String, Value>,
}

impl<'a> InventoryRow<'a> {
    pub fn new(index: usize, value: &'a Value) -> Result<Self> {
        let cells = value
            .as_object()
            .ok_or(TableError::NotAnObject { row: index })?;
        Ok(Self { index, cells })
    }

    /// Legacy columns this row does not carry.
    #[must_use]
    pub fn missing_columns(&self) -> Vec<&'static str> {
        OLD_TABLE_STRUCTURE
            .into_iter()
            .filter(|column| !self.cells.contains_key(*column))
            .collect()
    }

    /// Cell text; a present but empty (`null`) cell reads as `""`.
    pub fn cell(&self, column: &'static str) -> Result<String> {
        self.cells
            .get(column)
            .map(render_cell)
            .ok_or(TableError::MissingColumn {
                row: self.index,
                column,
            })
    }

    /// Split "МОЛ/Место хранения" into the responsible official and the
    /// storage place.
    pub fn person_and_place(&self) -> Result<(String, String)> {
        let value = self.cell(PERSON_AND_PLACE)?;
        let mut parts = value.split(COMPOSITE_DELIMITER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(mol), Some(place), None) => Ok((mol.to_string(), place.to_string())),
            _ => Err(TableError::MalformedComposite {
                row: self.index,
                column: PERSON_AND_PLACE,
                value,
            }),
        }
    }
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A row of the transformed table. Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "Наименование")]
    pub name: String,
    #[serde(rename = "Инвентарный номер")]
    pub inventory_number: String,
    #[serde(rename = "МОЛ")]
    pub mol: String,
    #[serde(rename = "Место хранения")]
    pub storage_place: String,
    #[serde(rename = "Местонахождение")]
    pub location: String,
    #[serde(rename = "Ответственное лицо")]
    pub responsible_person: String,
    #[serde(rename = "Дата инвентарной карточки")]
    pub card_date: String,
    #[serde(rename = "Групповой учет")]
    pub group_accounting: String,
    #[serde(rename = "Код")]
    pub code: String,
    #[serde(rename = "Состояние")]
    pub condition: String,
    #[serde(rename = "Счет учета")]
    pub accounting_account: String,
    #[serde(rename = "КФО")]
    pub kfo: String,
    #[serde(rename = "КПС")]
    pub kps: String,
    #[serde(rename = "Вид имущества")]
    pub property_type: String,
    #[serde(rename = "Подразделение")]
    pub department: String,
    #[serde(rename = "Номер инвентарной карточки")]
    pub card_number: String,
    #[serde(rename = "Заметка")]
    pub note: String,
}

/// Transfer of an item to a new place, derived from its location string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRecord {
    pub identifier: String,
    pub new_location: String,
    pub responsible_person: String,
    pub description: String,
    pub transfer_time: String,
}

/// Placeholder transfer date; the export does not carry one.
pub const UNKNOWN_TRANSFER_TIME: &str = "00.00.0000";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::NEW_TABLE_STRUCTURE;
    use serde_json::json;

    #[test]
    fn cells_are_stringified() {
        let value = json!({ "Код": 1234, "Наименование": "Стол", "КФО": null, "Групповой учет": false });
        let row = InventoryRow::new(0, &value).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(row.cell("Код").ok(), Some("1234".to_string()));
        assert_eq!(row.cell("Наименование").ok(), Some("Стол".to_string()));
        assert_eq!(row.cell("КФО").ok(), Some(String::new()));
        assert_eq!(row.cell("Групповой учет").ok(), Some("false".to_string()));
        assert!(matches!(
            row.cell("Состояние"),
            Err(TableError::MissingColumn { row: 0, column: "Состояние" })
        ));
    }

    #[test]
    fn reports_missing_legacy_columns() {
        let value = json!({ "Код": "1", "Местонахождение": "к.128" });
        let row = InventoryRow::new(0, &value).unwrap_or_else(|e| panic!("{e}"));
        let missing = row.missing_columns();
        assert_eq!(missing.len(), 13);
        assert!(missing.contains(&"Ссылка"));
        assert!(!missing.contains(&"Код"));
    }

    #[test]
    fn non_object_row_is_rejected() {
        assert!(matches!(
            InventoryRow::new(3, &json!(["a", "b"])),
            Err(TableError::NotAnObject { row: 3 })
        ));
    }

    #[test]
    fn composite_column_splits_once() {
        let value = json!({ "МОЛ/Место хранения": "Сидоров С.С. - Склад №2" });
        let row = InventoryRow::new(0, &value).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            row.person_and_place().ok(),
            Some(("Сидоров С.С.".to_string(), "Склад №2".to_string()))
        );
    }

    #[test]
    fn composite_column_without_exactly_one_delimiter_is_malformed() {
        for raw in ["Сидоров С.С.", "a - b - c", ""] {
            let value = json!({ "МОЛ/Место хранения": raw });
            let row = InventoryRow::new(1, &value).unwrap_or_else(|e| panic!("{e}"));
            assert!(
                matches!(row.person_and_place(), Err(TableError::MalformedComposite { row: 1, .. })),
                "input: {raw}"
            );
        }
    }

    #[test]
    fn output_record_keys_follow_schema_order() {
        let record = OutputRecord {
            name: "n".into(),
            inventory_number: "i".into(),
            mol: "m".into(),
            storage_place: "s".into(),
            location: "l".into(),
            responsible_person: "r".into(),
            card_date: "d".into(),
            group_accounting: "g".into(),
            code: "c".into(),
            condition: "co".into(),
            accounting_account: "a".into(),
            kfo: "k".into(),
            kps: "kp".into(),
            property_type: "p".into(),
            department: "de".into(),
            card_number: "cn".into(),
            note: "no".into(),
        };

        let json = serde_json::to_string(&record).unwrap_or_default();
        let positions: Vec<usize> = NEW_TABLE_STRUCTURE
            .iter()
            .map(|col| json.find(&format!("\"{col}\":")).unwrap_or(usize::MAX))
            .collect();
        assert!(positions.iter().all(|&p| p != usize::MAX));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
