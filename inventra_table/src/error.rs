use thiserror::Error;

pub type Result<T> = std::result::Result<T, TableError>;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("row {row}: expected an object keyed by column names")]
    NotAnObject { row: usize },

    #[error("row {row}: missing column {column:?}")]
    MissingColumn { row: usize, column: &'static str },

    #[error("row {row}: {column:?} value {value:?} does not split into two parts on \" - \"")]
    MalformedComposite {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("input must be a JSON array of rows")]
    NotAnArray,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
