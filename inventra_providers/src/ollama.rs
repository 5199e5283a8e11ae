use async_trait::async_trait;
use inventra_core::{ChatMessage, LLMProvider, LLMResponse, Usage};
use reqwest::Client;
use serde_json::json;
use tracing::info;

/// Chat client for a local Ollama server.
pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaProvider {
    pub fn new(model: String) -> Self {
        info!("Creating OllamaProvider");
        Self {
            client: Client::new(),
            base_url: "http://localhost:11434".to_string(),
            model,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn parse_reply(response: &serde_json::Value) -> anyhow::Result<LLMResponse> {
        let content = response["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing message content"))?
            .to_string();

        let prompt_tokens = count(&response["prompt_eval_count"]);
        let completion_tokens = count(&response["eval_count"]);
        let usage = response.get("eval_count").is_some().then(|| Usage {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        });

        Ok(LLMResponse { content, usage })
    }
}

fn count(value: &serde_json::Value) -> u32 {
    u32::try_from(value.as_u64().unwrap_or(0)).unwrap_or(0)
}

#[async_trait]
impl LLMProvider for OllamaProvider {
    async fn chat(&self, messages: &[ChatMessage], model: &str) -> anyhow::Result<LLMResponse> {
        let request = json!({
            "model": model,
            "messages": messages,
            "stream": false,
            "options": { "temperature": 0 },
        });

        info!("Sending request to Ollama: model={}", model);

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        Self::parse_reply(&response)
    }

    fn get_default_model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn parses_chat_reply() {
        let reply = json!({
            "model": "llama2",
            "message": { "role": "assistant", "content": "к.128" },
            "done": true,
            "prompt_eval_count": 120,
            "eval_count": 4,
        });

        let parsed = OllamaProvider::parse_reply(&reply).expect("reply should parse");
        assert_eq!(parsed.content, "к.128");
        let usage = parsed.usage.expect("usage should be present");
        assert_eq!(usage.total_tokens, 124);
    }

    #[test]
    fn missing_content_is_an_error() {
        let reply = json!({ "error": "model 'llama2' not found" });
        assert!(OllamaProvider::parse_reply(&reply).is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let provider =
            OllamaProvider::new("llama2".to_string()).with_base_url("http://gpu:11434/".to_string());
        assert_eq!(provider.base_url, "http://gpu:11434");
        assert_eq!(provider.get_default_model(), "llama2");
    }
}
