//! Storefront Composer Core Library
//!
//! Core logic of the storefront layout composer:
//! - Section model and per-kind editors
//! - Drag-to-reorder engine
//! - Link resolution against the catalog
//! - Shopper preview navigation
//! - Draft save / publish
//!
//! Platform independent: catalog, persistence and notifications are reached
//! through traits, the host supplies the implementations.

pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::ComposerConfig;
pub use error::{CoreError, CoreResult};
pub use services::{ComposerContext, ComposerShell, LayoutPublishService, PreviewNavigator};
pub use traits::{CatalogSource, LayoutStore, Notifier};
