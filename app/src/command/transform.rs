use std::path::PathBuf;
use std::time::Duration;

use inventra_config::{BackendKind, Config};
use inventra_table::{TableTransformer, read_rows, write_records};
use tracing::info;

use super::build_backend;

/// Input parameters for the Transform command strategy.
#[derive(Debug, Clone)]
pub struct TransformInput {
    pub input: PathBuf,
    pub output: PathBuf,
    pub backend: Option<BackendKind>,
    pub model: Option<String>,
}

/// Strategy for converting a legacy export into the new table layout.
///
/// Rows that cannot be converted are skipped and listed at the end; the
/// output file is written even when some rows were skipped.
#[derive(Debug, Clone, Copy)]
pub struct TransformStrategy;

impl super::CommandStrategy for TransformStrategy {
    type Input = TransformInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let backend = build_backend(&config, input.backend, input.model.as_deref())?;
        let request_timeout = Duration::from_secs(config.extraction.request_timeout_secs);

        let rows = read_rows(&input.input)?;
        let report = TableTransformer::new(backend, request_timeout)
            .transform(&rows)
            .await;
        write_records(&input.output, &report.records)?;

        info!(
            "Done: {} rows written to {}",
            report.records.len(),
            input.output.display()
        );
        for skipped in &report.skipped {
            println!("skipped row {}: {}", skipped.index, skipped.reason);
        }
        Ok(())
    }
}
