//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems,
//! plus formatters for outgoing representations.

pub mod formatters;
pub mod openai;

// Re-exports
pub use openai::OpenAiProvider;
