//! Application Layer
//!
//! Gate configuration and the request gating service.

pub mod config;
pub mod gate;

// Re-exports
pub use config::GateConfig;
pub use gate::{GateOutcome, SessionGate};
