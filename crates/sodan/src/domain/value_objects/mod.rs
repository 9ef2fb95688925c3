//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod message_role;
mod model_settings;
mod persona_id;
mod prompt_template;

pub use message_role::*;
pub use model_settings::*;
pub use persona_id::*;
pub use prompt_template::*;
