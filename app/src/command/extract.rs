use inventra_config::{BackendKind, Config};
use inventra_core::LocationFields;

use super::build_backend;

/// Input parameters for the Extract command strategy.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    pub text: String,
    /// Overrides `extraction.backend` from config
    pub backend: Option<BackendKind>,
    /// Overrides the provider's model for the model backend
    pub model: Option<String>,
}

/// Strategy for running a single extraction through a backend.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let backend = build_backend(&config, input.backend, input.model.as_deref())?;

        let fields = LocationFields {
            storage_place: backend.storage_place(&input.text).await,
            responsible_person: backend.responsible_person(&input.text).await,
        };
        println!("{}", serde_json::to_string_pretty(&fields)?);
        Ok(())
    }
}
