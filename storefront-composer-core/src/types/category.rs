//! Category grid hierarchy type definitions

use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, CatalogCategory, ProductIdSet};
use super::link::LinkSource;

/// Second-level category.
///
/// Ids are unique within the parent `MainCategory` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub linked_product_ids: ProductIdSet,
}

impl SubCategory {
    /// Create an unlinked subcategory with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            image: image.into(),
            linked_product_ids: ProductIdSet::new(),
        }
    }
}

impl LinkSource for SubCategory {
    fn linked_product_ids(&self) -> &ProductIdSet {
        &self.linked_product_ids
    }
}

/// Top-level category shown in a category grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainCategory {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sub_categories: Vec<SubCategory>,
}

impl MainCategory {
    /// Create an empty main category with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            image: image.into(),
            sub_categories: Vec::new(),
        }
    }

    /// Seed a grid entry from the catalog tree.
    ///
    /// Each subcategory links the catalog products whose `category_id` is the
    /// subcategory id. Ids are copied from the catalog.
    #[must_use]
    pub fn from_catalog(category: &CatalogCategory, catalog: &Catalog) -> Self {
        let sub_categories = category
            .sub_categories
            .iter()
            .map(|sub| SubCategory {
                id: sub.id.clone(),
                name: sub.name.clone(),
                image: sub.image.clone(),
                linked_product_ids: catalog
                    .products
                    .iter()
                    .filter(|p| p.category_id == sub.id)
                    .map(|p| p.id.clone())
                    .collect(),
            })
            .collect();

        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            image: category.image.clone(),
            sub_categories,
        }
    }

    /// Find a subcategory by id
    #[must_use]
    pub fn sub_category(&self, id: &str) -> Option<&SubCategory> {
        self.sub_categories.iter().find(|s| s.id == id)
    }
}
