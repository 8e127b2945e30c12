//! Upstream Source Trait
//!
//! Interface for reading raw catalog payloads. Implementations live in the
//! infrastructure layer (reqwest, freshness cache, test fakes).

use std::fmt;

use crate::error::CatalogResult;

/// One upstream GET: a path below the catalog base URL plus query pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    path: String,
    query: Vec<(&'static str, String)>,
}

impl UpstreamRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }
}

/// Canonical `path?k=v&k=v` form, used as the cache key
impl fmt::Display for UpstreamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for (i, (name, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{name}={value}")?;
        }
        Ok(())
    }
}

/// Raw catalog source
#[trait_variant::make(CatalogSource: Send)]
pub trait LocalCatalogSource {
    /// Perform one GET and return the decoded JSON body
    ///
    /// Non-success statuses must surface as `CatalogError::Upstream`.
    async fn fetch(&self, request: &UpstreamRequest) -> CatalogResult<serde_json::Value>;
}
