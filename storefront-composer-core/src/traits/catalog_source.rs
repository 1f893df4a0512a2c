//! Catalog collaborator abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Catalog, CatalogCategory, Product};

/// Read-only catalog service
///
/// Platform implementation:
/// - Admin web: REST-backed catalog cache owned by the surrounding screen
/// - App crate: `JsonCatalogSource` (catalog snapshot file)
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Get all products, in catalog order
    async fn get_all_products(&self) -> CoreResult<Vec<Product>>;

    /// Get the category tree
    async fn get_all_categories(&self) -> CoreResult<Vec<CatalogCategory>>;
}

/// Build a catalog snapshot from a source.
///
/// The composer resolves against the snapshot and never goes back to the
/// source on its own.
pub async fn load_catalog(source: &dyn CatalogSource) -> CoreResult<Catalog> {
    let products = source.get_all_products().await?;
    let categories = source.get_all_categories().await?;
    log::debug!(
        "Catalog loaded: {} products, {} categories",
        products.len(),
        categories.len()
    );
    Ok(Catalog::new(products, categories))
}
