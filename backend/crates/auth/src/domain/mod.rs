//! Domain Layer
//!
//! Session claims, route policy and the verifier trait.

pub mod claims;
pub mod policy;
pub mod verifier;

// Re-exports
pub use claims::SessionClaims;
pub use policy::{GateDecision, PathClass, RoutePolicy, decide};
pub use verifier::{SessionVerifier, Verification};
