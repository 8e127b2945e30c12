//! Infrastructure Layer
//!
//! Session credential implementation.

pub mod jwt;

pub use jwt::JwtSessionVerifier;
