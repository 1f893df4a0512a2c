//! Platform-agnostic application bootstrap for the storefront layout composer.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter injection)
//! and `load_config` (JSON configuration file).

pub mod adapters;

use std::io::ErrorKind;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use storefront_composer_core::config::ComposerConfig;
use storefront_composer_core::error::{CoreError, CoreResult};
use storefront_composer_core::services::{
    ComposerContext, ComposerShell, LayoutPublishService, PreviewNavigator, ScreenView,
};
use storefront_composer_core::traits::{CatalogSource, LayoutStore, Notifier};
use storefront_composer_core::types::Catalog;

use adapters::LogNotifier;

/// Load composer configuration from a JSON file.
///
/// A missing file yields the defaults; an unreadable or invalid one is an error.
pub async fn load_config(path: &Path) -> CoreResult<ComposerConfig> {
    match tokio::fs::read_to_string(path).await {
        Ok(json) => ComposerConfig::from_json_str(&json),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("No config at {}, using defaults", path.display());
            Ok(ComposerConfig::default())
        }
        Err(e) => Err(CoreError::ConfigError(format!(
            "Failed to read {}: {e}",
            path.display()
        ))),
    }
}

/// Platform-agnostic application state.
///
/// Holds the context, the catalog snapshot and the single composer session.
/// Every frontend constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds all adapters)
    pub ctx: Arc<ComposerContext>,
    /// Save/publish service
    pub publish_service: LayoutPublishService,
    /// Catalog snapshot the composer resolves against
    pub catalog: RwLock<Catalog>,
    /// Layout being edited
    pub composer: RwLock<ComposerShell>,
    /// Shopper preview
    pub navigator: RwLock<PreviewNavigator>,
    /// Whether the startup sequence has completed
    pub startup_completed: AtomicBool,
}

impl AppState {
    /// Run the full startup sequence: catalog load → draft restore.
    ///
    /// A failing catalog aborts startup. A failing draft restore is logged and
    /// leaves an empty layout.
    pub async fn run_startup(&self) -> CoreResult<()> {
        self.refresh_catalog().await?;
        if let Err(e) = self.restore_draft().await {
            log::error!("Failed to restore draft: {e}");
        }
        self.startup_completed.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Replace the catalog snapshot with a fresh one from the source
    pub async fn refresh_catalog(&self) -> CoreResult<()> {
        let catalog = self.ctx.load_catalog().await?;
        log::info!(
            "Catalog ready: {} products, {} categories",
            catalog.products.len(),
            catalog.categories.len()
        );
        *self.catalog.write().await = catalog;
        Ok(())
    }

    /// Load the stored draft into the composer. Returns the section count.
    pub async fn restore_draft(&self) -> CoreResult<usize> {
        let sections = self.publish_service.load_draft().await?;
        let count = sections.len();
        self.composer.write().await.replace_sections(sections);
        self.navigator.write().await.reset();
        Ok(count)
    }

    /// Save the current layout as draft
    pub async fn save_draft(&self) -> CoreResult<()> {
        let composer = self.composer.read().await;
        self.publish_service.save_draft(composer.sections()).await
    }

    /// Publish the current layout
    pub async fn publish(&self) -> CoreResult<()> {
        let composer = self.composer.read().await;
        self.publish_service.publish(composer.sections()).await
    }

    /// Render the preview's current screen against the live layout
    pub async fn preview(&self) -> ScreenView {
        let composer = self.composer.read().await;
        let catalog = self.catalog.read().await;
        self.navigator
            .read()
            .await
            .render(composer.sections(), &catalog, &self.ctx.config)
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `catalog_source`: where products and categories come from
/// - `layout_store`: where drafts and published layouts go
///
/// # Optional
/// - `notifier`: defaults to `LogNotifier`
/// - `config`: defaults to `ComposerConfig::default()`
pub struct AppStateBuilder {
    catalog_source: Option<Arc<dyn CatalogSource>>,
    layout_store: Option<Arc<dyn LayoutStore>>,
    notifier: Option<Arc<dyn Notifier>>,
    config: Option<ComposerConfig>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog_source: None,
            layout_store: None,
            notifier: None,
            config: None,
        }
    }

    #[must_use]
    pub fn catalog_source(mut self, source: Arc<dyn CatalogSource>) -> Self {
        self.catalog_source = Some(source);
        self
    }

    #[must_use]
    pub fn layout_store(mut self, store: Arc<dyn LayoutStore>) -> Self {
        self.layout_store = Some(store);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn config(mut self, config: ComposerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing,
    /// `CoreError::ConfigError` if the configuration is out of range.
    pub fn build(self) -> CoreResult<AppState> {
        let catalog_source = self.catalog_source.ok_or_else(|| {
            CoreError::ValidationError("catalog_source is required".to_string())
        })?;
        let layout_store = self
            .layout_store
            .ok_or_else(|| CoreError::ValidationError("layout_store is required".to_string()))?;
        let notifier = self
            .notifier
            .unwrap_or_else(|| Arc::new(LogNotifier::new()));
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let ctx = Arc::new(ComposerContext::new(
            catalog_source,
            layout_store,
            notifier,
            config,
        ));
        let publish_service = ctx.publish_service();
        let composer = ctx.composer();

        Ok(AppState {
            ctx,
            publish_service,
            catalog: RwLock::new(Catalog::default()),
            composer: RwLock::new(composer),
            navigator: RwLock::new(PreviewNavigator::new()),
            startup_completed: AtomicBool::new(false),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
