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

//! Rule-based extraction of cabinet codes and responsible persons from
//! inventory location strings.

pub mod cabinet;
pub mod decomposer;
pub mod patterns;
pub mod person;
mod rule_backend;
mod span;

pub use cabinet::CabinetCodeExtractor;
pub use decomposer::LocationDecomposer;
pub use patterns::CabinetMode;
pub use person::PersonNameExtractor;
pub use rule_backend::RuleBasedBackend;
pub use span::Extraction;
