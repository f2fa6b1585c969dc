use std::sync::Arc;

use super::action::Action;
use super::component::Effect;
use crate::cache;
use crate::data_provider::CovidDataProvider;

/// Effect handler for data fetching operations
///
/// Each method returns an Effect that will dispatch the matching
/// *Loaded action when complete.
pub struct DataEffects {
    client: Arc<dyn CovidDataProvider>,
}

impl DataEffects {
    /// Create a new DataEffects handler with a data provider
    pub fn new(client: Arc<dyn CovidDataProvider>) -> Self {
        Self { client }
    }

    /// Fetch countries and global totals as one snapshot
    ///
    /// Errors are stringified; they surface in the header banner.
    pub fn fetch_snapshot(&self, force_sync: bool, reset_selection: bool) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = cache::fetch_snapshot(client.as_ref(), force_sync).await;
            Action::DataLoaded {
                result: result.map_err(|e| e.to_string()),
                reset_selection,
            }
        }))
    }
}
