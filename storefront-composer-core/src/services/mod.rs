//! Composer services

mod composer;
pub mod editors;
mod link_resolver;
mod navigator;
mod preview;
mod publish_service;
mod reorder;

pub use composer::ComposerShell;
pub use link_resolver::{
    find_dangling_references, resolve_category_tree, resolve_product, resolve_products,
    DanglingReference, ResolvedCategory, ResolvedSubCategory,
};
pub use navigator::PreviewNavigator;
pub use preview::{
    active_category, render_category_detail, render_home, render_product_list, render_section,
    CategoryTab, CategoryTileView, EmptyState, FlashSaleCard, ScreenView, SectionBody,
    SectionView, TileView,
};
pub use publish_service::{validate_sections, LayoutPublishService};
pub use reorder::{move_item, DragGesture, HoverBounds, Move};

use std::sync::Arc;

use crate::config::ComposerConfig;
use crate::error::CoreResult;
use crate::traits::{load_catalog, CatalogSource, LayoutStore, Notifier};
use crate::types::Catalog;

/// Service context - holds every collaborator
///
/// The host builds this once and injects its platform implementations.
pub struct ComposerContext {
    /// Catalog collaborator
    pub catalog_source: Arc<dyn CatalogSource>,
    /// Save/publish boundary
    pub layout_store: Arc<dyn LayoutStore>,
    /// Notification channel
    pub notifier: Arc<dyn Notifier>,
    pub config: ComposerConfig,
}

impl ComposerContext {
    #[must_use]
    pub fn new(
        catalog_source: Arc<dyn CatalogSource>,
        layout_store: Arc<dyn LayoutStore>,
        notifier: Arc<dyn Notifier>,
        config: ComposerConfig,
    ) -> Self {
        Self {
            catalog_source,
            layout_store,
            notifier,
            config,
        }
    }

    /// Fetch a fresh catalog snapshot
    pub async fn load_catalog(&self) -> CoreResult<Catalog> {
        load_catalog(self.catalog_source.as_ref()).await
    }

    /// Empty composer shell using the context's configuration
    #[must_use]
    pub fn composer(&self) -> ComposerShell {
        ComposerShell::new(self.config.clone())
    }

    /// Publish service wired to the context's store and notifier
    #[must_use]
    pub fn publish_service(&self) -> LayoutPublishService {
        LayoutPublishService::new(
            Arc::clone(&self.layout_store),
            Arc::clone(&self.notifier),
            self.config.clone(),
        )
    }
}
