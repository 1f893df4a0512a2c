//! Test helpers
//!
//! Mock collaborators and fixture factories.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{CatalogSource, LayoutStore, Notifier};
use crate::types::{
    Banner, BannerSectionData, Catalog, CatalogCategory, CatalogSubCategory, CategoryGridData,
    FlashSaleData, FlashSaleItem, LifestyleBannerData, MainCategory, Notification, Product,
    ProductIdSet, Section, SectionData, StoriesData, StoryItem,
};

// ===== MockLayoutStore =====

pub struct MockLayoutStore {
    draft: RwLock<Option<Vec<Section>>>,
    published: RwLock<Option<Vec<Section>>>,
    /// When set, save and publish fail with this message
    save_error: RwLock<Option<String>>,
}

impl MockLayoutStore {
    pub fn new() -> Self {
        Self {
            draft: RwLock::new(None),
            published: RwLock::new(None),
            save_error: RwLock::new(None),
        }
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }

    pub async fn draft(&self) -> Option<Vec<Section>> {
        self.draft.read().await.clone()
    }

    pub async fn published(&self) -> Option<Vec<Section>> {
        self.published.read().await.clone()
    }

    async fn check_error(&self) -> CoreResult<()> {
        match &*self.save_error.read().await {
            Some(msg) => Err(CoreError::StorageError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LayoutStore for MockLayoutStore {
    async fn save_draft(&self, sections: &[Section]) -> CoreResult<()> {
        self.check_error().await?;
        *self.draft.write().await = Some(sections.to_vec());
        Ok(())
    }

    async fn publish(&self, sections: &[Section]) -> CoreResult<()> {
        self.check_error().await?;
        *self.published.write().await = Some(sections.to_vec());
        Ok(())
    }

    async fn load_draft(&self) -> CoreResult<Option<Vec<Section>>> {
        Ok(self.draft.read().await.clone())
    }
}

// ===== RecordingNotifier =====

pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

// ===== MockCatalogSource =====

pub struct MockCatalogSource {
    catalog: Catalog,
    fail: bool,
}

impl MockCatalogSource {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            catalog: Catalog::default(),
            fail: true,
        }
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn get_all_products(&self) -> CoreResult<Vec<Product>> {
        if self.fail {
            return Err(CoreError::CatalogError("catalog offline".to_string()));
        }
        Ok(self.catalog.products.clone())
    }

    async fn get_all_categories(&self) -> CoreResult<Vec<CatalogCategory>> {
        if self.fail {
            return Err(CoreError::CatalogError("catalog offline".to_string()));
        }
        Ok(self.catalog.categories.clone())
    }
}

// ===== Fixtures =====

pub fn test_product(id: &str, name: &str, category_id: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        weight: "1 pc".to_string(),
        price,
        original_price: price,
        discount: None,
        image: format!("https://img/{id}.png"),
        category_id: category_id.to_string(),
    }
}

fn sub(id: &str, name: &str) -> CatalogSubCategory {
    CatalogSubCategory {
        id: id.to_string(),
        name: name.to_string(),
        image: String::new(),
    }
}

/// Two categories, four products. Catalog order: apple, milk, cheddar, oat milk.
pub fn test_catalog() -> Catalog {
    Catalog::new(
        vec![
            test_product("p-apple", "Apple", "sub-fruit", 0.5),
            test_product("p-milk", "Milk", "sub-milk", 1.2),
            test_product("p-cheddar", "Cheddar", "sub-cheese", 3.4),
            test_product("p-oat-milk", "Oat milk", "sub-milk", 2.1),
        ],
        vec![
            CatalogCategory {
                id: "cat-produce".to_string(),
                name: "Produce".to_string(),
                image: String::new(),
                sub_categories: vec![sub("sub-fruit", "Fruit")],
            },
            CatalogCategory {
                id: "cat-dairy".to_string(),
                name: "Dairy".to_string(),
                image: String::new(),
                sub_categories: vec![sub("sub-milk", "Milk"), sub("sub-cheese", "Cheese")],
            },
        ],
    )
}

pub fn product_ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

/// A layout that passes publish validation
pub fn complete_layout() -> Vec<Section> {
    let catalog = test_catalog();
    let mut banner = Banner::new("Fresh week", "https://img/fresh.png");
    banner.linked_product_ids.insert("p-apple".to_string());

    let categories = catalog
        .categories
        .iter()
        .map(|c| MainCategory::from_catalog(c, &catalog))
        .collect();

    vec![
        Section::from_parts(
            "s-banner",
            Some("Hero".to_string()),
            SectionData::Banner(BannerSectionData {
                banners: vec![banner],
            }),
        ),
        Section::from_parts(
            "s-grid",
            Some("Shop by Category".to_string()),
            SectionData::CategoryGrid(CategoryGridData { categories }),
        ),
        Section::from_parts(
            "s-lifestyle",
            None,
            SectionData::LifestyleBanner(LifestyleBannerData {
                image: "https://img/lifestyle.png".to_string(),
                title: "Slow mornings".to_string(),
                subtitle: None,
                linked_product_ids: ProductIdSet::from(["p-oat-milk".to_string()]),
            }),
        ),
        Section::from_parts(
            "s-flash",
            Some("Flash Sale".to_string()),
            SectionData::FlashSale(FlashSaleData {
                ends_at: None,
                items: vec![FlashSaleItem::new("p-cheddar")],
            }),
        ),
        Section::from_parts(
            "s-stories",
            None,
            SectionData::Stories(StoriesData {
                stories: vec![StoryItem::new("Breakfast", "https://img/story.png")],
            }),
        ),
    ]
}
