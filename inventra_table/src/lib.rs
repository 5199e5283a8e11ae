#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Conversion of legacy inventory exports into the new table layout.

pub mod columns;
mod error;
mod io;
mod row;
mod transformer;

pub use error::{Result, TableError};
pub use io::{read_rows, write_records};
pub use row::{InventoryRow, MovementRecord, OutputRecord, UNKNOWN_TRANSFER_TIME};
pub use transformer::{Report, SkippedRow, TableTransformer, movements};
