//! Characters Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Character entity, draft validation, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every operation is scoped to the session user (`sub` claim); another
//! user's record is reported as not found.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::{CharacterInput, CharacterService};
pub use domain::{Character, CharacterDraft, CharacterRepository};
pub use error::{CharacterError, CharacterResult};
pub use infra::postgres::PgCharacterRepository;
pub use presentation::router::{characters_router, characters_router_generic};
