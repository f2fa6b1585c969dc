pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod countries;
pub mod data_provider;
pub mod fixtures;
pub mod formatting;
pub mod locale;
pub mod panel;
pub mod tui;
pub mod types;

#[cfg(any(test, feature = "development"))]
pub mod dev;
