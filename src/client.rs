//! HTTP client for the disease.sh COVID-19 API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::DEFAULT_API_URL;
use crate::types::{CountryRecord, GlobalRecord};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Errors raised while talking to the statistics API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("{0}")]
    Other(String),
}

/// Thin async client over the `/countries` and `/all` endpoints
#[derive(Debug, Clone)]
pub struct DiseaseClient {
    http: Client,
    base_url: String,
}

impl DiseaseClient {
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("HTTP: GET {}", url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.json::<T>().await?)
    }

    /// Every country, in the order the API returns them
    pub async fn countries(&self) -> Result<Vec<CountryRecord>, ApiError> {
        self.get_json("countries").await
    }

    /// Worldwide totals
    pub async fn global(&self) -> Result<GlobalRecord, ApiError> {
        self.get_json("all").await
    }
}
