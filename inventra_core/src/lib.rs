#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod location;
pub mod util;

pub use location::{DecomposedLocation, LocationFields, NULL};
pub use util::is_null;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LLMResponse {
    pub content: String,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[async_trait]
pub trait LLMProvider: Send + Sync {
    async fn chat(&self, messages: &[ChatMessage], model: &str) -> anyhow::Result<LLMResponse>;
    fn get_default_model(&self) -> &str;
}

/// Strategy that turns a free-text location string into the two target fields.
///
/// Both operations are total: absence, and any failure inside the backend,
/// is reported as the [`NULL`] sentinel rather than an error.
///
/// Model-backed implementations normalize the reply before returning it:
/// surrounding whitespace and one pair of double quotes are dropped, and an
/// empty reply or any casing of `null` becomes [`NULL`].
#[async_trait]
pub trait ExtractionBackend: Send + Sync {
    /// Name used in logs and reports.
    fn name(&self) -> &str;

    async fn responsible_person(&self, text: &str) -> String;

    async fn storage_place(&self, text: &str) -> String;
}

#[async_trait]
impl<T: ExtractionBackend + ?Sized> ExtractionBackend for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn responsible_person(&self, text: &str) -> String {
        (**self).responsible_person(text).await
    }

    async fn storage_place(&self, text: &str) -> String {
        (**self).storage_place(text).await
    }
}

#[async_trait]
impl<T: ExtractionBackend + ?Sized> ExtractionBackend for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn responsible_person(&self, text: &str) -> String {
        (**self).responsible_person(text).await
    }

    async fn storage_place(&self, text: &str) -> String {
        (**self).storage_place(text).await
    }
}
