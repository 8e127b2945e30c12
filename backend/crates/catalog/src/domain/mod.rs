//! Domain Layer
//!
//! Reference entities, the upstream source trait and pure filtering rules.

pub mod entities;
pub mod services;
pub mod source;
pub mod value_objects;

pub use entities::{Background, Class, NamedText, Race, ResourceRef, Spell, Subclass};
pub use source::{CatalogSource, UpstreamRequest};
pub use value_objects::CatalogKey;
