use std::path::PathBuf;

use inventra_config::Config;
use inventra_extract::LocationDecomposer;
use inventra_table::{movements, read_rows, write_records};
use tracing::info;

/// Input parameters for the Movements command strategy.
#[derive(Debug, Clone)]
pub struct MovementsInput {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Strategy for turning the location column into movement records.
#[derive(Debug, Clone, Copy)]
pub struct MovementsStrategy;

impl super::CommandStrategy for MovementsStrategy {
    type Input = MovementsInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let decomposer = LocationDecomposer::new(config.extraction.cabinet_mode);
        info!("Rendering cabinet codes in {} mode", decomposer.cabinet_mode());

        let rows = read_rows(&input.input)?;
        let report = movements(&rows, &decomposer);
        write_records(&input.output, &report.records)?;

        for skipped in &report.skipped {
            println!("skipped row {}: {}", skipped.index, skipped.reason);
        }
        Ok(())
    }
}
