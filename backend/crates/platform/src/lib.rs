//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, URL-safe Base64)
//! - Cookie parsing and Set-Cookie construction

pub mod cookie;
pub mod crypto;
