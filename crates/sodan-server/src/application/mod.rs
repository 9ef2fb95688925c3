//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates the
//! persona catalog with the model provider.

mod advice_service;

pub use advice_service::AdviceService;
