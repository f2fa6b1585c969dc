/// Trait for providing COVID-19 data, abstracting over the real API client and mock implementations
use async_trait::async_trait;

use crate::client::{ApiError, DiseaseClient};
use crate::types::{CountryRecord, GlobalRecord};

/// Trait for data providers, implemented by both DiseaseClient and MockClient
#[async_trait]
pub trait CovidDataProvider: Send + Sync {
    /// Get per-country statistics
    async fn countries(&self) -> Result<Vec<CountryRecord>, ApiError>;

    /// Get worldwide totals
    async fn global(&self) -> Result<GlobalRecord, ApiError>;
}

#[async_trait]
impl CovidDataProvider for DiseaseClient {
    async fn countries(&self) -> Result<Vec<CountryRecord>, ApiError> {
        DiseaseClient::countries(self).await
    }

    async fn global(&self) -> Result<GlobalRecord, ApiError> {
        DiseaseClient::global(self).await
    }
}
