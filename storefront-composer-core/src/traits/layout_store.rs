//! Layout persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Section;

/// Save/publish boundary
///
/// Platform implementation:
/// - Admin web: REST `PUT /storefront/layout` (draft) and `POST /storefront/layout/publish`
/// - App crate: `JsonLayoutStore` (`draft.json` / `published.json`)
#[async_trait]
pub trait LayoutStore: Send + Sync {
    /// Persist the working draft
    ///
    /// # Arguments
    /// * `sections` - ordered section sequence
    async fn save_draft(&self, sections: &[Section]) -> CoreResult<()>;

    /// Make the layout live for shoppers
    ///
    /// # Arguments
    /// * `sections` - ordered section sequence
    async fn publish(&self, sections: &[Section]) -> CoreResult<()>;

    /// Load the last saved draft
    ///
    /// # Returns
    /// * `Some(sections)` - a draft exists
    /// * `None` - nothing saved yet
    async fn load_draft(&self) -> CoreResult<Option<Vec<Section>>>;
}
