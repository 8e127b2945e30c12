//! Auth (Session Gate) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session claims, route policy, verifier trait
//! - `application/` - Gate configuration and the gating service
//! - `infra/` - HS256 session credential
//! - `presentation/` - Middleware, extractors, session endpoints
//!
//! ## Features
//! - Path classification into protected / auth-only / public prefixes
//! - Redirects to sign-in or landing page (307, query string kept)
//! - Local JWT verification with sliding renewal of the session cookie
//! - `CurrentUser` extractor for user-scoped handlers
//!
//! ## Security Model
//! - Any verification failure counts as signed out (fail closed)
//! - Signatures checked in constant time
//! - The gate never writes persisted state

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::{GateConfig, GateOutcome, SessionGate};
pub use domain::{GateDecision, PathClass, SessionClaims, SessionVerifier, Verification};
pub use error::{AuthError, AuthResult};
pub use infra::jwt::JwtSessionVerifier;
pub use presentation::router::session_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod middleware {
    pub use crate::presentation::extractor::*;
    pub use crate::presentation::middleware::*;
}
