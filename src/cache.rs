use crate::client::ApiError;
use crate::data_provider::CovidDataProvider;
use crate::types::CovidSnapshot;
use cached::proc_macro::cached;
use tracing::debug;

pub use cached::Cached;

/// How long a non-forced fetch may reuse the previous snapshot
pub const SNAPSHOT_LIFESPAN_SECS: u64 = 300;

/// Drop the cached snapshot so the next non-forced fetch hits the provider
#[cfg(test)]
pub async fn clear_snapshot_cache() {
    SNAPSHOT_CACHE.lock().await.cache_clear();
}

#[cfg(test)]
pub async fn snapshot_entries() -> usize {
    SNAPSHOT_CACHE.lock().await.cache_size()
}

/// Fetch countries and global totals concurrently, without caching
pub async fn fetch_snapshot_live(client: &dyn CovidDataProvider) -> Result<CovidSnapshot, ApiError> {
    let (countries, global) = tokio::try_join!(client.countries(), client.global())?;
    debug!("DATA: Fetched {} countries", countries.len());
    Ok(CovidSnapshot::new(countries, global))
}

#[allow(clippy::unused_unit)]
#[cached(
    name = "SNAPSHOT_CACHE",
    type = "cached::TimedSizedCache<(), CovidSnapshot>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(1, SNAPSHOT_LIFESPAN_SECS) }",
    convert = r#"{ () }"#,
    result = true
)]
pub async fn fetch_snapshot_cached(
    client: &dyn CovidDataProvider,
) -> Result<CovidSnapshot, ApiError> {
    fetch_snapshot_live(client).await
}

/// Fetch a snapshot, honoring the freshness window unless `force_sync` is set
///
/// A forced sync never reads the cache; a successful one replaces the cached snapshot.
pub async fn fetch_snapshot(
    client: &dyn CovidDataProvider,
    force_sync: bool,
) -> Result<CovidSnapshot, ApiError> {
    if !force_sync {
        return fetch_snapshot_cached(client).await;
    }

    debug!("DATA: Force sync, bypassing snapshot cache");
    let snapshot = fetch_snapshot_live(client).await?;
    SNAPSHOT_CACHE.lock().await.cache_set((), snapshot.clone());
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::{FailingClient, MockClient};

    #[tokio::test]
    async fn test_live_fetch_combines_both_endpoints() {
        let snapshot = fetch_snapshot_live(&MockClient::new()).await.unwrap();
        assert!(!snapshot.countries.is_empty());
        assert!(snapshot.global.cases > 0);
    }

    #[tokio::test]
    async fn test_live_fetch_propagates_failure() {
        let result = fetch_snapshot_live(&FailingClient::new("offline")).await;
        assert_eq!(result.unwrap_err().to_string(), "offline");
    }

    #[tokio::test]
    async fn test_forced_failure_does_not_read_cache() {
        // Even with a snapshot cached, a forced sync must hit the provider
        let _ = fetch_snapshot(&MockClient::new(), true).await;
        let result = fetch_snapshot(&FailingClient::new("boom"), true).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_clear_snapshot_cache() {
        let _ = fetch_snapshot(&MockClient::new(), true).await;
        clear_snapshot_cache().await;
        assert_eq!(snapshot_entries().await, 0);
    }

    #[tokio::test]
    async fn test_forced_success_fills_cache() {
        let snapshot = fetch_snapshot(&MockClient::new(), true).await.unwrap();
        assert!(snapshot_entries().await >= 1);
        assert!(!snapshot.countries.is_empty());
    }
}
