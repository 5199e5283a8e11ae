use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::{Result, TableError};

/// Read a JSON array of row objects.
pub fn read_rows(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)?;
    let rows = match serde_json::from_str(&content)? {
        Value::Array(rows) => rows,
        _ => return Err(TableError::NotAnArray),
    };
    info!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Write records as a pretty-printed JSON array.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
