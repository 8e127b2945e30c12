//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by the catalog, auth and characters crates:
//! - Unified error type rendered as RFC 7807 problem details
//! - Typed ID wrappers for persisted records
//!
//! **Design Principle**: Only include things that every crate must agree on.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
