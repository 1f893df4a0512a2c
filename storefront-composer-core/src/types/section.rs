//! Section type definitions
//!
//! A section is one ordered content block of the storefront layout. Its kind is
//! derived from the payload variant, so kind and payload can never disagree.
//! Ordering lives in the owning `Vec<Section>`, not on the section itself.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::banner::{Banner, LandingBanner};
use super::catalog::{ProductId, ProductIdSet};
use super::category::MainCategory;
use super::link::LinkSource;
use crate::error::CoreError;

/// Section kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Banner,
    CategoryGrid,
    ProductList,
    WellbeingGrid,
    LifestyleBanner,
    FlashSale,
    Stories,
}

impl SectionKind {
    /// All kinds, in palette order
    pub const ALL: [Self; 7] = [
        Self::Banner,
        Self::CategoryGrid,
        Self::ProductList,
        Self::WellbeingGrid,
        Self::LifestyleBanner,
        Self::FlashSale,
        Self::Stories,
    ];

    /// Wire name of the kind
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Banner => "banner",
            Self::CategoryGrid => "category-grid",
            Self::ProductList => "product-list",
            Self::WellbeingGrid => "wellbeing-grid",
            Self::LifestyleBanner => "lifestyle-banner",
            Self::FlashSale => "flash-sale",
            Self::Stories => "stories",
        }
    }

    /// Default heading shown for a freshly added section
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Banner => "Banners",
            Self::CategoryGrid => "Shop by Category",
            Self::ProductList => "Featured Products",
            Self::WellbeingGrid => "Wellbeing",
            Self::LifestyleBanner => "Lifestyle",
            Self::FlashSale => "Flash Sale",
            Self::Stories => "Stories",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Payloads =====

/// Banner carousel payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerSectionData {
    #[serde(default)]
    pub banners: Vec<Banner>,
}

/// Category grid payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGridData {
    #[serde(default)]
    pub categories: Vec<MainCategory>,
}

/// Product list layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductListLayout {
    #[default]
    Carousel,
    Grid,
}

/// Flat product list payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListData {
    #[serde(default)]
    pub linked_product_ids: ProductIdSet,
    #[serde(default)]
    pub layout: ProductListLayout,
}

impl LinkSource for ProductListData {
    fn linked_product_ids(&self) -> &ProductIdSet {
        &self.linked_product_ids
    }
}

/// Wellbeing grid tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellbeingTile {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub linked_product_ids: ProductIdSet,
}

impl WellbeingTile {
    #[must_use]
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            image: image.into(),
            linked_product_ids: ProductIdSet::new(),
        }
    }
}

impl LinkSource for WellbeingTile {
    fn linked_product_ids(&self) -> &ProductIdSet {
        &self.linked_product_ids
    }
}

/// Wellbeing grid payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellbeingGridData {
    #[serde(default)]
    pub tiles: Vec<WellbeingTile>,
}

/// Single full-width lifestyle banner payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleBannerData {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub linked_product_ids: ProductIdSet,
}

impl LinkSource for LifestyleBannerData {
    fn linked_product_ids(&self) -> &ProductIdSet {
        &self.linked_product_ids
    }
}

/// One product on flash sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashSaleItem {
    pub id: String,
    #[serde(default)]
    pub product_id: ProductId,
    /// Sale price overriding the catalog price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_limit: Option<u32>,
}

impl FlashSaleItem {
    #[must_use]
    pub fn new(product_id: impl Into<ProductId>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            product_id: product_id.into(),
            flash_price: None,
            stock_limit: None,
        }
    }
}

/// Flash sale payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashSaleData {
    #[serde(
        default,
        with = "crate::utils::datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<FlashSaleItem>,
}

/// Story bubble
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub linked_product_ids: ProductIdSet,
}

impl StoryItem {
    #[must_use]
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            image: image.into(),
            linked_product_ids: ProductIdSet::new(),
        }
    }
}

impl LinkSource for StoryItem {
    fn linked_product_ids(&self) -> &ProductIdSet {
        &self.linked_product_ids
    }
}

/// Stories payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoriesData {
    #[serde(default)]
    pub stories: Vec<StoryItem>,
}

/// Section payload, one variant per kind
#[derive(Debug, Clone, PartialEq)]
pub enum SectionData {
    Banner(BannerSectionData),
    CategoryGrid(CategoryGridData),
    ProductList(ProductListData),
    WellbeingGrid(WellbeingGridData),
    LifestyleBanner(LifestyleBannerData),
    FlashSale(FlashSaleData),
    Stories(StoriesData),
}

impl SectionData {
    /// Minimal valid payload for a new section of `kind`
    #[must_use]
    pub fn default_for(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Banner => Self::Banner(BannerSectionData::default()),
            SectionKind::CategoryGrid => Self::CategoryGrid(CategoryGridData::default()),
            SectionKind::ProductList => Self::ProductList(ProductListData::default()),
            SectionKind::WellbeingGrid => Self::WellbeingGrid(WellbeingGridData::default()),
            SectionKind::LifestyleBanner => Self::LifestyleBanner(LifestyleBannerData::default()),
            SectionKind::FlashSale => Self::FlashSale(FlashSaleData::default()),
            SectionKind::Stories => Self::Stories(StoriesData::default()),
        }
    }

    /// Kind of this payload
    #[must_use]
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Banner(_) => SectionKind::Banner,
            Self::CategoryGrid(_) => SectionKind::CategoryGrid,
            Self::ProductList(_) => SectionKind::ProductList,
            Self::WellbeingGrid(_) => SectionKind::WellbeingGrid,
            Self::LifestyleBanner(_) => SectionKind::LifestyleBanner,
            Self::FlashSale(_) => SectionKind::FlashSale,
            Self::Stories(_) => SectionKind::Stories,
        }
    }

    /// Every product id referenced anywhere in the payload
    #[must_use]
    pub fn referenced_product_ids(&self) -> Vec<&ProductId> {
        match self {
            Self::Banner(data) => data
                .banners
                .iter()
                .flat_map(|b| {
                    b.linked_product_ids.iter().chain(
                        b.landing_banner
                            .iter()
                            .flat_map(|l: &LandingBanner| l.linked_product_ids.iter()),
                    )
                })
                .collect(),
            Self::CategoryGrid(data) => data
                .categories
                .iter()
                .flat_map(|c| c.sub_categories.iter())
                .flat_map(|s| s.linked_product_ids.iter())
                .collect(),
            Self::ProductList(data) => data.linked_product_ids.iter().collect(),
            Self::WellbeingGrid(data) => data
                .tiles
                .iter()
                .flat_map(|t| t.linked_product_ids.iter())
                .collect(),
            Self::LifestyleBanner(data) => data.linked_product_ids.iter().collect(),
            Self::FlashSale(data) => data
                .items
                .iter()
                .map(|i| &i.product_id)
                .filter(|id| !id.is_empty())
                .collect(),
            Self::Stories(data) => data
                .stories
                .iter()
                .flat_map(|s| s.linked_product_ids.iter())
                .collect(),
        }
    }

    fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            Self::Banner(data) => serde_json::to_value(data),
            Self::CategoryGrid(data) => serde_json::to_value(data),
            Self::ProductList(data) => serde_json::to_value(data),
            Self::WellbeingGrid(data) => serde_json::to_value(data),
            Self::LifestyleBanner(data) => serde_json::to_value(data),
            Self::FlashSale(data) => serde_json::to_value(data),
            Self::Stories(data) => serde_json::to_value(data),
        }
    }

    fn from_value(kind: SectionKind, value: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match kind {
            SectionKind::Banner => Self::Banner(serde_json::from_value(value)?),
            SectionKind::CategoryGrid => Self::CategoryGrid(serde_json::from_value(value)?),
            SectionKind::ProductList => Self::ProductList(serde_json::from_value(value)?),
            SectionKind::WellbeingGrid => Self::WellbeingGrid(serde_json::from_value(value)?),
            SectionKind::LifestyleBanner => Self::LifestyleBanner(serde_json::from_value(value)?),
            SectionKind::FlashSale => Self::FlashSale(serde_json::from_value(value)?),
            SectionKind::Stories => Self::Stories(serde_json::from_value(value)?),
        })
    }
}

/// One content block of the layout.
///
/// `id` and kind are fixed at construction; only the title and payload can be
/// replaced, and only by the composer shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "SectionRecord", try_from = "SectionRecord")]
pub struct Section {
    id: String,
    title: Option<String>,
    data: SectionData,
}

impl Section {
    /// Create a section of `kind` with a default payload and a fresh id
    #[must_use]
    pub fn new(kind: SectionKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: Some(kind.default_title().to_string()),
            data: SectionData::default_for(kind),
        }
    }

    /// Build a section from known parts (fixtures, persisted drafts)
    #[must_use]
    pub fn from_parts(id: impl Into<String>, title: Option<String>, data: SectionData) -> Self {
        Self {
            id: id.into(),
            title,
            data,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> SectionKind {
        self.data.kind()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn data(&self) -> &SectionData {
        &self.data
    }

    pub(crate) fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Replace the payload. Callers must have checked the kind.
    pub(crate) fn replace_data(&mut self, data: SectionData) {
        debug_assert_eq!(self.kind(), data.kind());
        self.data = data;
    }
}

/// Section metadata update (supports partial update)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMetaUpdate {
    /// `Some(None)` clears the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
}

/// Section payload update (supports partial update)
///
/// One variant per kind. `None` fields keep the current value; the rest
/// replace it. `Some(None)` clears an optional field.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionDataPatch {
    Banner {
        banners: Option<Vec<Banner>>,
    },
    CategoryGrid {
        categories: Option<Vec<MainCategory>>,
    },
    ProductList {
        linked_product_ids: Option<ProductIdSet>,
        layout: Option<ProductListLayout>,
    },
    WellbeingGrid {
        tiles: Option<Vec<WellbeingTile>>,
    },
    LifestyleBanner {
        image: Option<String>,
        title: Option<String>,
        subtitle: Option<Option<String>>,
        linked_product_ids: Option<ProductIdSet>,
    },
    FlashSale {
        ends_at: Option<Option<DateTime<Utc>>>,
        items: Option<Vec<FlashSaleItem>>,
    },
    Stories {
        stories: Option<Vec<StoryItem>>,
    },
}

impl SectionDataPatch {
    /// Kind of payload this patch applies to
    #[must_use]
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Banner { .. } => SectionKind::Banner,
            Self::CategoryGrid { .. } => SectionKind::CategoryGrid,
            Self::ProductList { .. } => SectionKind::ProductList,
            Self::WellbeingGrid { .. } => SectionKind::WellbeingGrid,
            Self::LifestyleBanner { .. } => SectionKind::LifestyleBanner,
            Self::FlashSale { .. } => SectionKind::FlashSale,
            Self::Stories { .. } => SectionKind::Stories,
        }
    }
}

impl SectionData {
    /// Shallow-merge `patch` into a copy of this payload.
    ///
    /// # Errors
    /// `CoreError::SectionKindMismatch` when the patch targets another kind.
    pub fn merged(&self, patch: SectionDataPatch) -> Result<Self, CoreError> {
        let mut data = self.clone();
        match (&mut data, patch) {
            (Self::Banner(d), SectionDataPatch::Banner { banners }) => {
                if let Some(banners) = banners {
                    d.banners = banners;
                }
            }
            (Self::CategoryGrid(d), SectionDataPatch::CategoryGrid { categories }) => {
                if let Some(categories) = categories {
                    d.categories = categories;
                }
            }
            (
                Self::ProductList(d),
                SectionDataPatch::ProductList {
                    linked_product_ids,
                    layout,
                },
            ) => {
                if let Some(ids) = linked_product_ids {
                    d.linked_product_ids = ids;
                }
                if let Some(layout) = layout {
                    d.layout = layout;
                }
            }
            (Self::WellbeingGrid(d), SectionDataPatch::WellbeingGrid { tiles }) => {
                if let Some(tiles) = tiles {
                    d.tiles = tiles;
                }
            }
            (
                Self::LifestyleBanner(d),
                SectionDataPatch::LifestyleBanner {
                    image,
                    title,
                    subtitle,
                    linked_product_ids,
                },
            ) => {
                if let Some(image) = image {
                    d.image = image;
                }
                if let Some(title) = title {
                    d.title = title;
                }
                if let Some(subtitle) = subtitle {
                    d.subtitle = subtitle;
                }
                if let Some(ids) = linked_product_ids {
                    d.linked_product_ids = ids;
                }
            }
            (Self::FlashSale(d), SectionDataPatch::FlashSale { ends_at, items }) => {
                if let Some(ends_at) = ends_at {
                    d.ends_at = ends_at;
                }
                if let Some(items) = items {
                    d.items = items;
                }
            }
            (Self::Stories(d), SectionDataPatch::Stories { stories }) => {
                if let Some(stories) = stories {
                    d.stories = stories;
                }
            }
            (current, patch) => {
                return Err(CoreError::SectionKindMismatch {
                    expected: current.kind(),
                    actual: patch.kind(),
                });
            }
        }
        Ok(data)
    }
}

/// Wire shape of a section: `{ id, type, title, data }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectionRecord {
    id: String,
    #[serde(rename = "type")]
    kind: SectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

impl From<Section> for SectionRecord {
    fn from(section: Section) -> Self {
        let kind = section.kind();
        // payload structs are plain data; serializing them to a Value cannot fail
        let data = section.data.to_value().unwrap_or(serde_json::Value::Null);
        Self {
            id: section.id,
            kind,
            title: section.title,
            data,
        }
    }
}

impl TryFrom<SectionRecord> for Section {
    type Error = CoreError;

    fn try_from(record: SectionRecord) -> Result<Self, Self::Error> {
        let value = if record.data.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            record.data
        };
        let data = SectionData::from_value(record.kind, value)?;
        Ok(Self {
            id: record.id,
            title: record.title,
            data,
        })
    }
}
