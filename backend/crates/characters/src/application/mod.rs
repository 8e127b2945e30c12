//! Application Layer
//!
//! Use cases and application services.

pub mod service;

// Re-exports
pub use service::{CharacterInput, CharacterService};
