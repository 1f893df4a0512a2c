//! Catalog entity type definitions
//!
//! Owned by the external catalog collaborator. The composer only references
//! these by id and never mutates them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Product identifier
pub type ProductId = String;

/// Set of linked product ids (order carries no meaning)
pub type ProductIdSet = BTreeSet<ProductId>;

/// Read-only catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Pack size, e.g. "500 g"
    pub weight: String,
    /// Selling price
    pub price: f64,
    /// Price before discount
    pub original_price: f64,
    /// Discount label percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Image URL
    pub image: String,
    /// Owning (sub)category id
    pub category_id: String,
}

/// Catalog subcategory node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSubCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// Catalog top-level category node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sub_categories: Vec<CatalogSubCategory>,
}

/// Snapshot of the canonical catalog, loaded once by the surrounding screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// All products, in catalog order
    #[serde(default)]
    pub products: Vec<Product>,
    /// Category tree
    #[serde(default)]
    pub categories: Vec<CatalogCategory>,
}

impl Catalog {
    /// Create a catalog snapshot
    #[must_use]
    pub fn new(products: Vec<Product>, categories: Vec<CatalogCategory>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Whether the catalog contains a product with the given id
    #[must_use]
    pub fn contains_product(&self, id: &str) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    /// Find a top-level catalog category
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&CatalogCategory> {
        self.categories.iter().find(|c| c.id == id)
    }
}
