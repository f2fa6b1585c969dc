//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules.
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.
//!
//! # Usage
//!
//! ```rust
//! #[cfg(test)]
//! mod tests {
//!     use crate::tui::testing::*;
//!
//!     #[test]
//!     fn test_example() {
//!         let state = loaded_state();
//!         // Reduce actions against state...
//!     }
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use ratatui::buffer::Buffer;

use crate::data_provider::CovidDataProvider;
use crate::dev::mock_client::MockClient;
use crate::fixtures::{create_mock_countries, create_mock_global, FIXTURE_UPDATED_MS};
use crate::types::CovidSnapshot;

use super::runtime::Runtime;
use super::state::AppState;

/// Creates an Arc-wrapped mock data provider for testing.
pub fn create_client() -> Arc<dyn CovidDataProvider> {
    Arc::new(MockClient::new())
}

/// Snapshot built from the fixture countries and global totals
pub fn mock_snapshot() -> CovidSnapshot {
    CovidSnapshot::new(create_mock_countries(), create_mock_global())
}

/// State as it looks after a successful mount with the default config
///
/// Selection is the default own list (`Hungary`), focus on the tab bar.
pub fn loaded_state() -> AppState {
    let mut state = AppState::default();
    let snapshot = mock_snapshot();
    state.data.countries = Arc::new(snapshot.countries);
    state.data.global = Arc::new(snapshot.global);
    state.data.last_sync = Utc.timestamp_millis_opt(FIXTURE_UPDATED_MS).single();
    state.panel.mounted = true;
    state.panel.selection = vec!["Hungary".to_string()];
    state.panel.selection_seeded = true;
    state
}

/// Let spawned effects finish and feed their actions back into the runtime
///
/// Returns once no action has arrived for several consecutive ticks.
pub async fn settle(runtime: &mut Runtime) {
    let mut idle_ticks = 0;
    for _ in 0..200 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        if runtime.process_actions() == 0 {
            idle_ticks += 1;
            if idle_ticks >= 5 {
                return;
            }
        } else {
            idle_ticks = 0;
        }
    }
}

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

/// Assert that some line of the buffer contains the given text
pub fn assert_buffer_contains(buf: &Buffer, needle: &str) {
    let lines = buffer_lines(buf);
    assert!(
        lines.iter().any(|line| line.contains(needle)),
        "Expected buffer to contain '{}', got:\n{}",
        needle,
        lines.join("\n")
    );
}
