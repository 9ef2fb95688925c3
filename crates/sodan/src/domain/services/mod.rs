//! Domain Services
//!
//! Pure logic over domain entities.

mod advice_state;
mod persona_catalog;

pub use advice_state::*;
pub use persona_catalog::*;
