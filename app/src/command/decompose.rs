use inventra_config::Config;
use inventra_extract::{CabinetMode, LocationDecomposer};

/// Input parameters for the Decompose command strategy.
#[derive(Debug, Clone)]
pub struct DecomposeInput {
    pub text: String,
    /// Overrides `extraction.cabinet_mode` from config
    pub mode: Option<CabinetMode>,
}

/// Strategy for decomposing one location string.
///
/// Prints the cabinet code, responsible person and note as JSON.
#[derive(Debug, Clone, Copy)]
pub struct DecomposeStrategy;

impl super::CommandStrategy for DecomposeStrategy {
    type Input = DecomposeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mode = match input.mode {
            Some(mode) => mode,
            None => Config::load()?.extraction.cabinet_mode,
        };

        let location = LocationDecomposer::new(mode).decompose(&input.text);
        println!("{}", serde_json::to_string_pretty(&location)?);
        Ok(())
    }
}
