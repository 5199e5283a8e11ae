#![warn(
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

mod model_backend;
mod ollama;
mod openai;
pub mod prompt;

pub use model_backend::ModelBackend;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;
