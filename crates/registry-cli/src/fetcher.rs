//! Registry page fetcher

use registry_core::config::RegistrySourceConfig;
use registry_core::{registry_url, RegistryError};
use reqwest::Client as HttpClient;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: registry returned {status} for {url}")]
    NotFound { url: String, status: u16 },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub struct RegistryFetcher {
    config: RegistrySourceConfig,
    http_client: HttpClient,
}

impl RegistryFetcher {
    pub fn new(config: RegistrySourceConfig) -> Result<Self, FetchError> {
        let http_client = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn page_url(&self, orgnr: &str) -> Result<String, FetchError> {
        Ok(registry_url(&self.config.base_url, orgnr)?)
    }

    /// Fetch the registry page HTML for a company
    pub async fn fetch_page(&self, orgnr: &str) -> Result<String, FetchError> {
        let url = self.page_url(orgnr)?;
        log::info!("Fetching registry page {}", url);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::NotFound {
                url,
                status: response.status().as_u16(),
            });
        }

        let html = response.text().await?;
        log::debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
