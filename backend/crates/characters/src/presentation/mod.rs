//! Presentation Layer
//!
//! HTTP handlers, DTOs, router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CharacterAppState;
pub use router::{characters_router, characters_router_generic};
