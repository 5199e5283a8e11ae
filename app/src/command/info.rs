use inventra_config::{BackendKind, Config, ProviderKind};

/// Strategy for displaying the effective configuration.
///
/// API keys are masked; the config path is shown even when the file does not
/// exist and defaults are in use.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let config = Config::load()?;

        println!("=== inventra Configuration ===\n");

        println!("Config file: {}", config_path.display());
        if !config_path.exists() {
            println!("  (not found, showing defaults)");
        }
        println!();

        println!("Extraction:");
        let backend = match config.extraction.backend {
            BackendKind::Rule => "rule",
            BackendKind::Model => "model",
        };
        println!("  Backend: {backend}");
        println!("  Cabinet Mode: {}", config.extraction.cabinet_mode);
        println!(
            "  Request Timeout: {}s",
            config.extraction.request_timeout_secs
        );
        println!();

        println!("Providers:");
        let active = match config.providers.active {
            ProviderKind::Ollama => "ollama",
            ProviderKind::Openai => "openai",
        };
        println!("  Active: {active}");
        println!("  Ollama:");
        println!("    URL: {}", config.providers.ollama.base_url);
        println!("    Model: {}", config.providers.ollama.model);
        match &config.providers.openai {
            Some(openai) => {
                println!("  OpenAI-compatible:");
                println!("    URL: {}", openai.base_url);
                println!("    Model: {}", openai.model);
                println!("    API Key: {}", mask_key(&openai.api_key));
            }
            None => println!("  OpenAI-compatible: (not set)"),
        }

        Ok(())
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_long_keys() {
        assert_eq!(mask_key("sk-1234567890abcd"), "sk-1...abcd");
    }

    #[test]
    fn hides_short_keys_entirely() {
        assert_eq!(mask_key("short"), "***");
        assert_eq!(mask_key(""), "***");
    }
}
