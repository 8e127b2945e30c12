//! Value Objects

use std::fmt;

use crate::error::{CatalogError, CatalogResult};

/// Maximum accepted key length
pub const MAX_KEY_LENGTH: usize = 128;

/// Catalog record key (e.g. `srd_wizard`)
///
/// Keys are interpolated into upstream paths, so only ASCII alphanumerics,
/// `_`, `-` and `.` are accepted, and a key made only of dots is refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogKey(String);

impl CatalogKey {
    pub fn parse(raw: &str) -> CatalogResult<Self> {
        let valid = !raw.is_empty()
            && raw.len() <= MAX_KEY_LENGTH
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !raw.chars().all(|c| c == '.');

        if !valid {
            return Err(CatalogError::InvalidKey(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
