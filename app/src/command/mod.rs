//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input type, so
//! dispatch is resolved at compile time.

use std::sync::Arc;

use inventra_config::{BackendKind, Config, ProviderKind};
use inventra_core::{ExtractionBackend, LLMProvider};
use inventra_extract::RuleBasedBackend;
use inventra_providers::{ModelBackend, OllamaProvider, OpenAiProvider};
use tracing::info;

mod decompose;
mod extract;
mod info;
mod init;
mod movements;
mod transform;
mod version;

pub use decompose::{DecomposeInput, DecomposeStrategy};
pub use extract::{ExtractInput, ExtractStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use movements::{MovementsInput, MovementsStrategy};
pub use transform::{TransformInput, TransformStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Build the extraction backend selected on the command line or in config.
///
/// `model` overrides the provider's configured model for the model backend.
fn build_backend(
    config: &Config,
    requested: Option<BackendKind>,
    model: Option<&str>,
) -> anyhow::Result<Arc<dyn ExtractionBackend>> {
    let kind = requested.unwrap_or(config.extraction.backend);

    let backend: Arc<dyn ExtractionBackend> = match kind {
        BackendKind::Rule => Arc::new(RuleBasedBackend::new()),
        BackendKind::Model => match config.providers.active {
            ProviderKind::Ollama => {
                let ollama = &config.providers.ollama;
                Arc::new(model_backend(
                    OllamaProvider::new(ollama.model.clone())
                        .with_base_url(ollama.base_url.clone()),
                    model,
                ))
            }
            ProviderKind::Openai => {
                let openai = config.providers.openai.as_ref().ok_or_else(|| {
                    anyhow::anyhow!("providers.active is \"openai\" but providers.openai is missing")
                })?;
                Arc::new(model_backend(
                    OpenAiProvider::new(openai.api_key.clone(), openai.model.clone())
                        .with_base_url(openai.base_url.clone()),
                    model,
                ))
            }
        },
    };

    info!("Using {} extraction backend", backend.name());
    Ok(backend)
}

fn model_backend<P: LLMProvider>(provider: P, model: Option<&str>) -> ModelBackend<P> {
    let backend = ModelBackend::new(provider);
    let backend = match model {
        Some(model) => backend.with_model(model.to_string()),
        None => backend,
    };
    info!("Querying model {}", backend.model());
    backend
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_rule_backend() {
        let backend = build_backend(&Config::default(), None, None).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(backend.name(), "rule");
    }

    #[test]
    fn model_backend_on_request() {
        let backend = build_backend(&Config::default(), Some(BackendKind::Model), None)
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(backend.name(), "model");
    }

    #[test]
    fn openai_without_section_is_an_error() {
        let mut config = Config::default();
        config.providers.active = ProviderKind::Openai;
        assert!(build_backend(&config, Some(BackendKind::Model), None).is_err());
    }

    #[test]
    fn model_flag_overrides_configured_model() {
        let configured = Config::default().providers.ollama.model;

        let backend = model_backend(OllamaProvider::new(configured.clone()), None);
        assert_eq!(backend.model(), "llama2");

        let backend = model_backend(OllamaProvider::new(configured), Some("qwen2"));
        assert_eq!(backend.model(), "qwen2");
    }
}
