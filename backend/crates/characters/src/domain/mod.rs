//! Domain Layer
//!
//! Contains the character entity, draft validation and repository trait.

pub mod draft;
pub mod entity;
pub mod repository;

// Re-exports
pub use draft::CharacterDraft;
pub use entity::Character;
pub use repository::CharacterRepository;
