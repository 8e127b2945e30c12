//! reqwest-backed Catalog Source

use reqwest::Client;

use crate::application::config::CatalogConfig;
use crate::domain::source::{CatalogSource, UpstreamRequest};
use crate::error::{CatalogError, CatalogResult};

/// Client for the Open5e REST API
#[derive(Clone)]
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(config: &CatalogConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(
                    error = %err,
                    "Falling back to default HTTP client without timeout or user agent"
                );
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for a request, without the query string
    pub fn url_for(&self, request: &UpstreamRequest) -> String {
        format!("{}{}", self.base_url, request.path())
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self, request: &UpstreamRequest) -> CatalogResult<serde_json::Value> {
        let url = self.url_for(request);

        let response = self
            .client
            .get(&url)
            .query(request.query())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Upstream {
                status: status.as_u16(),
            });
        }

        let payload = response.json::<serde_json::Value>().await?;

        tracing::debug!(url = %url, request = %request, "Fetched Open5e payload");

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let config = CatalogConfig {
            base_url: "https://api.open5e.com/v2/".to_string(),
            ..CatalogConfig::default()
        };
        let source = HttpCatalogSource::new(&config);

        let request = UpstreamRequest::new("/classes/").with_query("limit", 100);
        assert_eq!(source.url_for(&request), "https://api.open5e.com/v2/classes/");
    }

    #[test]
    fn test_rejected_user_agent_falls_back_to_default_client() {
        let config = CatalogConfig {
            user_agent: "dnd\ncharacters".to_string(),
            ..CatalogConfig::default()
        };

        let source = HttpCatalogSource::new(&config);

        assert_eq!(
            source.url_for(&UpstreamRequest::new("/races/")),
            format!("{}/races/", CatalogConfig::default().base_url.trim_end_matches('/'))
        );
    }
}
