//! Sodan Data Models
//!
//! Request/response DTOs for the HTML form and the JSON API.

mod advice;

pub use advice::*;
