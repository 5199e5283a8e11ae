use async_trait::async_trait;
use inventra_core::{ExtractionBackend, LLMProvider, NULL, is_null};
use tracing::{debug, warn};

use crate::prompt::{Field, build_messages};

/// Extraction backend that asks a generative model for each field.
///
/// One request per call, no retry, no timeout. Transport errors and empty
/// replies come back as `"Null"`; callers that need a deadline wrap the call
/// themselves.
pub struct ModelBackend<P: LLMProvider> {
    provider: P,
    model: String,
}

impl<P: LLMProvider> ModelBackend<P> {
    pub fn new(provider: P) -> Self {
        let model = provider.get_default_model().to_string();
        Self { provider, model }
    }

    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    pub const fn provider(&self) -> &P {
        &self.provider
    }

    async fn ask(&self, text: &str, field: Field) -> String {
        let messages = build_messages(text, field);
        match self.provider.chat(&messages, &self.model).await {
            Ok(response) => {
                match &response.usage {
                    Some(usage) => debug!(
                        "Model reply for {:?} ({} prompt + {} completion tokens): {:?}",
                        field, usage.prompt_tokens, usage.completion_tokens, response.content
                    ),
                    None => debug!("Model reply for {:?}: {:?}", field, response.content),
                }
                normalize_reply(&response.content)
            }
            Err(e) => {
                warn!("Model request for {:?} failed: {e}", field);
                NULL.to_string()
            }
        }
    }
}

/// Reply text as the field value. Surrounding whitespace and one pair of
/// quotes are dropped; any spelling of the sentinel becomes `"Null"`.
fn normalize_reply(reply: &str) -> String {
    if is_null(reply) {
        return NULL.to_string();
    }
    let trimmed = reply.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}

#[async_trait]
impl<P: LLMProvider> ExtractionBackend for ModelBackend<P> {
    fn name(&self) -> &'static str {
        "model"
    }

    async fn responsible_person(&self, text: &str) -> String {
        self.ask(text, Field::ResponsiblePerson).await
    }

    async fn storage_place(&self, text: &str) -> String {
        self.ask(text, Field::StoragePlace).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventra_core::{ChatMessage, LLMResponse, Usage};

    struct Echo(&'static str);

    #[async_trait]
    impl LLMProvider for Echo {
        async fn chat(&self, _messages: &[ChatMessage], _model: &str) -> anyhow::Result<LLMResponse> {
            Ok(LLMResponse {
                content: self.0.to_string(),
                usage: None,
            })
        }

        fn get_default_model(&self) -> &'static str {
            "echo"
        }
    }

    struct Metered;

    #[async_trait]
    impl LLMProvider for Metered {
        async fn chat(&self, _messages: &[ChatMessage], _model: &str) -> anyhow::Result<LLMResponse> {
            Ok(LLMResponse {
                content: "к.128".to_string(),
                usage: Some(Usage {
                    prompt_tokens: 120,
                    completion_tokens: 3,
                    total_tokens: 123,
                }),
            })
        }

        fn get_default_model(&self) -> &'static str {
            "metered"
        }
    }

    struct Down;

    #[async_trait]
    impl LLMProvider for Down {
        async fn chat(&self, _messages: &[ChatMessage], _model: &str) -> anyhow::Result<LLMResponse> {
            anyhow::bail!("connection refused")
        }

        fn get_default_model(&self) -> &'static str {
            "down"
        }
    }

    #[tokio::test]
    async fn reply_is_used_verbatim() {
        let backend = ModelBackend::new(Echo("Кравченко А.В."));
        assert_eq!(backend.responsible_person("к.301 Кравченко А.В.").await, "Кравченко А.В.");
        assert_eq!(backend.model(), "echo");
    }

    #[tokio::test]
    async fn reply_with_token_usage_is_used() {
        let backend = ModelBackend::new(Metered);
        assert_eq!(backend.storage_place("каб.128 интернет").await, "к.128");
    }

    #[tokio::test]
    async fn transport_failure_becomes_sentinel() {
        let backend = ModelBackend::new(Down);
        assert_eq!(backend.storage_place("к.128").await, "Null");
        assert_eq!(backend.responsible_person("к.128").await, "Null");
    }

    #[tokio::test]
    async fn empty_reply_becomes_sentinel() {
        let backend = ModelBackend::new(Echo("  \n"));
        assert_eq!(backend.storage_place("к.128").await, "Null");
    }

    #[test]
    fn normalize_reply_strips_noise() {
        assert_eq!(normalize_reply("к.128\n"), "к.128");
        assert_eq!(normalize_reply("\"к.128\""), "к.128");
        assert_eq!(normalize_reply("NULL"), "Null");
        assert_eq!(normalize_reply("Иванов И. И."), "Иванов И. И.");
    }

    #[test]
    fn model_override() {
        let backend = ModelBackend::new(Echo("x")).with_model("qwen2".to_string());
        assert_eq!(backend.model(), "qwen2");
    }
}
