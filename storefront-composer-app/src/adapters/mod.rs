//! Platform-agnostic adapters for non-browser frontends (CLI, local preview).

mod log_notifier;

pub use log_notifier::LogNotifier;

#[cfg(feature = "json-store")]
mod json_catalog;

#[cfg(feature = "json-store")]
pub use json_catalog::JsonCatalogSource;

#[cfg(feature = "json-store")]
mod json_layout_store;

#[cfg(feature = "json-store")]
pub use json_layout_store::{JsonLayoutStore, DRAFT_FILE, PUBLISHED_FILE};
