//! Collaborator abstraction trait definition

mod catalog_source;
mod layout_store;
mod notifier;

pub use catalog_source::{load_catalog, CatalogSource};
pub use layout_store::LayoutStore;
pub use notifier::Notifier;
