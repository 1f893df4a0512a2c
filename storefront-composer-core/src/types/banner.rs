//! Banner type definitions

use serde::{Deserialize, Serialize};

use super::catalog::ProductIdSet;
use super::link::LinkSource;

/// Banner display variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerVariant {
    #[default]
    Standard,
    Large,
    Small,
    Square,
}

/// Secondary banner shown on the screen reached from its parent banner.
///
/// Deliberately has no nested landing banner of its own, so a chain of
/// landing banners can never loop back to an ancestor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingBanner {
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Products listed when the landing banner is activated
    #[serde(default)]
    pub linked_product_ids: ProductIdSet,
}

impl LandingBanner {
    /// Whether the landing banner has an image to render
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image.trim().is_empty()
    }
}

/// Top-level banner inside a banner section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    /// Banner ID
    pub id: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Headline
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub variant: BannerVariant,
    #[serde(default)]
    pub linked_product_ids: ProductIdSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_banner: Option<LandingBanner>,
}

impl Banner {
    /// Create an empty banner with a fresh id
    #[must_use]
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            image: image.into(),
            title: title.into(),
            subtitle: None,
            variant: BannerVariant::default(),
            linked_product_ids: ProductIdSet::new(),
            landing_banner: None,
        }
    }
}

impl LinkSource for Banner {
    fn linked_product_ids(&self) -> &ProductIdSet {
        &self.linked_product_ids
    }

    fn landing_banner(&self) -> Option<&LandingBanner> {
        self.landing_banner.as_ref()
    }
}

impl LinkSource for LandingBanner {
    fn linked_product_ids(&self) -> &ProductIdSet {
        &self.linked_product_ids
    }
}
