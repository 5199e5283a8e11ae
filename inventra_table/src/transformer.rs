//! Legacy export → transformed table, and legacy export → movement records.
//!
//! Malformed rows are skipped: each one is logged, recorded in the report,
//! and the batch continues.

use std::time::Duration;

use inventra_core::{ExtractionBackend, NULL};
use inventra_extract::LocationDecomposer;
use rayon::prelude::*;
use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::columns::{
    ACCOUNTING_ACCOUNT, CARD_DATE, CARD_NUMBER, CODE, CONDITION, DEPARTMENT, GROUP_ACCOUNTING,
    INVENTORY_NUMBER, KFO, KPS, LOCATION, NAME, PROPERTY_TYPE,
};
use crate::error::{Result, TableError};
use crate::row::{InventoryRow, MovementRecord, OutputRecord, UNKNOWN_TRANSFER_TIME};

/// Rows that were dropped and why.
#[derive(Debug)]
pub struct SkippedRow {
    pub index: usize,
    pub reason: TableError,
}

#[derive(Debug)]
pub struct Report<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRow>,
}

impl<T> Report<T> {
    fn collect(outcomes: Vec<(usize, Result<Option<T>>)>) -> Self {
        let mut records = Vec::with_capacity(outcomes.len());
        let mut skipped = Vec::new();
        for (index, outcome) in outcomes {
            match outcome {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(reason) => {
                    warn!("Skipping row {index}: {reason}");
                    skipped.push(SkippedRow { index, reason });
                }
            }
        }
        Self { records, skipped }
    }
}

/// Builds the new-format table using an extraction backend for the
/// location-derived columns.
pub struct TableTransformer<B: ExtractionBackend> {
    backend: B,
    request_timeout: Duration,
}

impl<B: ExtractionBackend> TableTransformer<B> {
    pub const fn new(backend: B, request_timeout: Duration) -> Self {
        Self {
            backend,
            request_timeout,
        }
    }

    pub async fn transform(&self, rows: &[Value]) -> Report<OutputRecord> {
        info!(
            "Transforming {} rows with the {} backend",
            rows.len(),
            self.backend.name()
        );
        if let Some(Ok(first)) = rows.first().map(|value| InventoryRow::new(0, value)) {
            let missing = first.missing_columns();
            if !missing.is_empty() {
                warn!("Input lacks legacy columns: {}", missing.join(", "));
            }
        }

        let mut outcomes = Vec::with_capacity(rows.len());
        for (index, value) in rows.iter().enumerate() {
            outcomes.push((index, self.transform_row(index, value).await.map(Some)));
        }

        let report = Report::collect(outcomes);
        info!(
            "Transformed {} rows, skipped {}",
            report.records.len(),
            report.skipped.len()
        );
        report
    }

    async fn transform_row(&self, index: usize, value: &Value) -> Result<OutputRecord> {
        let row = InventoryRow::new(index, value)?;
        let (mol, storage_place) = row.person_and_place()?;
        let location_text = row.cell(LOCATION)?;

        let location = self
            .bounded(self.backend.storage_place(&location_text))
            .await;
        let responsible_person = self
            .bounded(self.backend.responsible_person(&location_text))
            .await;

        Ok(OutputRecord {
            name: row.cell(NAME)?,
            inventory_number: row.cell(INVENTORY_NUMBER)?,
            mol,
            storage_place,
            location,
            responsible_person,
            card_date: row.cell(CARD_DATE)?,
            group_accounting: row.cell(GROUP_ACCOUNTING)?,
            code: row.cell(CODE)?,
            condition: row.cell(CONDITION)?,
            accounting_account: row.cell(ACCOUNTING_ACCOUNT)?,
            kfo: row.cell(KFO)?,
            kps: row.cell(KPS)?,
            property_type: row.cell(PROPERTY_TYPE)?,
            department: row.cell(DEPARTMENT)?,
            card_number: row.cell(CARD_NUMBER)?,
            note: location_text,
        })
    }

    /// Backends impose no deadline; an expired call counts as "not found".
    async fn bounded(&self, call: impl Future<Output = String>) -> String {
        timeout(self.request_timeout, call).await.unwrap_or_else(|_| {
            warn!(
                "{} backend call exceeded {:?}",
                self.backend.name(),
                self.request_timeout
            );
            NULL.to_string()
        })
    }
}

/// Movement records for every row with a non-empty location.
///
/// Rows are decomposed in parallel; output keeps input order.
#[must_use]
pub fn movements(rows: &[Value], decomposer: &LocationDecomposer) -> Report<MovementRecord> {
    let outcomes: Vec<(usize, Result<Option<MovementRecord>>)> = rows
        .par_iter()
        .enumerate()
        .map(|(index, value)| (index, movement_for(index, value, decomposer)))
        .collect();

    let report = Report::collect(outcomes);
    info!(
        "Built {} movement records, skipped {} rows",
        report.records.len(),
        report.skipped.len()
    );
    report
}

fn movement_for(
    index: usize,
    value: &Value,
    decomposer: &LocationDecomposer,
) -> Result<Option<MovementRecord>> {
    let row = InventoryRow::new(index, value)?;
    let location_text = row.cell(LOCATION)?;
    if location_text.trim().is_empty() {
        return Ok(None);
    }

    let location = decomposer.decompose(&location_text);
    if !location.has_person() {
        debug!("Row {index}: no responsible person in {location_text:?}");
    }
    Ok(Some(MovementRecord {
        identifier: row.cell(CODE)?,
        new_location: location.cabinet_code,
        responsible_person: location.responsible_person,
        description: location.note,
        transfer_time: UNKNOWN_TRANSFER_TIME.to_string(),
    }))
}
