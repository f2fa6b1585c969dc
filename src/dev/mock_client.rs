/// Mock COVID-19 data clients for development and testing
use crate::client::ApiError;
use crate::data_provider::CovidDataProvider;
use crate::types::{CountryRecord, GlobalRecord};
use async_trait::async_trait;
use tracing::info;

use crate::fixtures;

/// Mock client that returns fixture data instead of making real API calls
#[derive(Debug, Default)]
pub struct MockClient;

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

#[async_trait]
impl CovidDataProvider for MockClient {
    async fn countries(&self) -> Result<Vec<CountryRecord>, ApiError> {
        info!("MockClient: Returning mock countries");
        Ok(fixtures::create_mock_countries())
    }

    async fn global(&self) -> Result<GlobalRecord, ApiError> {
        info!("MockClient: Returning mock global totals");
        Ok(fixtures::create_mock_global())
    }
}

/// Client whose every request fails with the same message
#[derive(Debug)]
pub struct FailingClient {
    message: String,
}

impl FailingClient {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl CovidDataProvider for FailingClient {
    async fn countries(&self) -> Result<Vec<CountryRecord>, ApiError> {
        Err(ApiError::Other(self.message.clone()))
    }

    async fn global(&self) -> Result<GlobalRecord, ApiError> {
        Err(ApiError::Other(self.message.clone()))
    }
}
