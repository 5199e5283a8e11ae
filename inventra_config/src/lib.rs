mod schema;

pub use schema::{
    BackendKind, Config, ExtractionConfig, OllamaConfig, OpenAiConfig, ProviderKind,
    ProvidersConfig,
};
