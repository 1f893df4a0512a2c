//! Catalog source backed by a JSON snapshot file.
//!
//! The file holds a serialized `Catalog` (`{ "products": [...], "categories": [...] }`).
//! It is read once and cached; `reload()` drops the cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use storefront_composer_core::error::{CoreError, CoreResult};
use storefront_composer_core::traits::CatalogSource;
use storefront_composer_core::types::{Catalog, CatalogCategory, Product};

/// JSON file catalog source
pub struct JsonCatalogSource {
    path: PathBuf,
    cache: Arc<RwLock<Option<Catalog>>>,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Forget the cached snapshot so the next read hits the file again
    pub async fn reload(&self) {
        *self.cache.write().await = None;
    }

    async fn catalog(&self) -> CoreResult<Catalog> {
        if let Some(catalog) = self.cache.read().await.as_ref() {
            return Ok(catalog.clone());
        }

        let json = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CoreError::CatalogError(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        let catalog: Catalog = serde_json::from_str(&json).map_err(|e| {
            CoreError::CatalogError(format!("Invalid catalog file {}: {e}", self.path.display()))
        })?;
        log::debug!("Catalog file loaded: {}", self.path.display());

        *self.cache.write().await = Some(catalog.clone());
        Ok(catalog)
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn get_all_products(&self) -> CoreResult<Vec<Product>> {
        Ok(self.catalog().await?.products)
    }

    async fn get_all_categories(&self) -> CoreResult<Vec<CatalogCategory>> {
        Ok(self.catalog().await?.categories)
    }
}
