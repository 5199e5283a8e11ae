use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use inventra_extract::CabinetMode;

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Which backend to use and how to render cabinet codes.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default)]
    pub cabinet_mode: CabinetMode,
    /// Upper bound for a single backend call during table transformation.
    #[serde(default = "ExtractionConfig::default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            cabinet_mode: CabinetMode::default(),
            request_timeout_secs: Self::default_request_timeout_secs(),
        }
    }
}

impl ExtractionConfig {
    const fn default_request_timeout_secs() -> u64 {
        60
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Rule,
    Model,
}

impl std::str::FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rule" => Ok(Self::Rule),
            "model" => Ok(Self::Model),
            other => Err(format!("unknown backend: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Ollama,
    Openai,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub active: ProviderKind,
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai: Option<OpenAiConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OllamaConfig {
    #[serde(default = "OllamaConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "OllamaConfig::default_model")]
    pub model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            model: Self::default_model(),
        }
    }
}

impl OllamaConfig {
    fn default_base_url() -> String {
        "http://localhost:11434".to_string()
    }

    fn default_model() -> String {
        "llama2".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl Config {
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("inventra"))
    }

    /// Load `~/inventra/config.json`, or defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!(
                "No config at {}, using defaults (run 'inventra init' to create one)",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::from_json(&std::fs::read_to_string(&config_path)?)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Pick a backend: \"rule\" (regex, offline) or \"model\" (LLM)");
        println!("   2. For the model backend, make sure Ollama is running at the configured URL");
        println!("   3. Run 'inventra decompose \"к.301a Кравченко А.В. расписка\"' to try it out");
        println!();
        println!("🔧 Configuration options:");
        println!("   - extraction.cabinet_mode: raw (301a) or canonical (к.301A)");
        println!("   - extraction.request_timeout_secs: deadline for one backend call");
        println!("   - providers.active: ollama or openai");
        println!();
        Ok(())
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "extraction": {
    "backend": "rule",
    "cabinet_mode": "canonical",
    "request_timeout_secs": 60
  },
  "providers": {
    "active": "ollama",
    "ollama": {
      "base_url": "http://localhost:11434",
      "model": "llama2"
    }
  }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn template_parses() {
        let config = Config::from_json(CONFIG_TEMPLATE).expect("template should parse");
        assert_eq!(config.extraction.backend, BackendKind::Rule);
        assert_eq!(config.extraction.cabinet_mode, CabinetMode::Canonical);
        assert_eq!(config.extraction.request_timeout_secs, 60);
        assert_eq!(config.providers.active, ProviderKind::Ollama);
        assert!(config.providers.openai.is_none());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn missing_sections_use_defaults() {
        let config = Config::from_json("{}").expect("empty object should parse");
        assert_eq!(config.extraction.backend, BackendKind::Rule);
        assert_eq!(config.providers.ollama.base_url, "http://localhost:11434");
        assert_eq!(config.providers.ollama.model, "llama2");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn openai_section() {
        let config = Config::from_json(
            r#"{
                "extraction": { "backend": "model", "cabinet_mode": "raw" },
                "providers": {
                    "active": "openai",
                    "openai": { "base_url": "http://llm:8000/v1", "api_key": "k", "model": "qwen" }
                }
            }"#,
        )
        .expect("config should parse");
        assert_eq!(config.extraction.backend, BackendKind::Model);
        assert_eq!(config.extraction.cabinet_mode, CabinetMode::Raw);
        assert_eq!(config.providers.active, ProviderKind::Openai);
        assert_eq!(config.providers.openai.map(|o| o.model), Some("qwen".to_string()));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(Config::from_json(r#"{"extraction": {"backend": "spacy"}}"#).is_err());
        assert!("spacy".parse::<BackendKind>().is_err());
    }
}
