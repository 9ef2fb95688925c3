//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Persona: Catalog entry (id, label, system template)
//! - Prompt: Role-tagged prompt sent to the model
//! - Advice: Per-submission request and response

mod advice;
mod persona;
mod prompt;

pub use advice::*;
pub use persona::*;
pub use prompt::*;
