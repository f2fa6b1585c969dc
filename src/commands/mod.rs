pub mod config;
pub mod countries;
pub mod global;

use anyhow::{Context, Result};

use crate::cache::fetch_snapshot;
use crate::data_provider::CovidDataProvider;
use crate::types::CovidSnapshot;

/// Fetch a fresh snapshot for a one-shot command
///
/// Commands always bypass the freshness cache.
pub async fn fetch(client: &dyn CovidDataProvider) -> Result<CovidSnapshot> {
    fetch_snapshot(client, true)
        .await
        .context("Failed to fetch COVID-19 data")
}
