//! Link resolution against the catalog
//!
//! Linked ids are resolved in catalog order, not in the order the caller
//! passes them. Ids that no longer exist are dropped without error.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{Catalog, MainCategory, Product, Section, SubCategory};

/// Resolve linked product ids to catalog products.
///
/// Output follows catalog order; unknown ids are omitted.
pub fn resolve_products<'a, I>(catalog: &Catalog, ids: I) -> Vec<Product>
where
    I: IntoIterator<Item = &'a String>,
{
    let wanted: HashSet<&str> = ids.into_iter().map(String::as_str).collect();
    if wanted.is_empty() {
        return Vec::new();
    }
    catalog
        .products
        .iter()
        .filter(|p| wanted.contains(p.id.as_str()))
        .cloned()
        .collect()
}

/// Resolve a single product id
pub fn resolve_product(catalog: &Catalog, id: &str) -> Option<Product> {
    catalog.products.iter().find(|p| p.id == id).cloned()
}

/// Subcategory with its products resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSubCategory {
    pub sub_category: SubCategory,
    pub products: Vec<Product>,
}

/// Main category with products resolved per subcategory
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCategory {
    pub id: String,
    pub name: String,
    pub image: String,
    pub sub_categories: Vec<ResolvedSubCategory>,
}

impl ResolvedCategory {
    /// Whether no subcategory resolved to any product
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sub_categories.iter().all(|s| s.products.is_empty())
    }
}

/// Resolve a category node. Pure; resolving the same node twice yields equal results.
pub fn resolve_category_tree(category: &MainCategory, catalog: &Catalog) -> ResolvedCategory {
    ResolvedCategory {
        id: category.id.clone(),
        name: category.name.clone(),
        image: category.image.clone(),
        sub_categories: category
            .sub_categories
            .iter()
            .map(|sub| ResolvedSubCategory {
                sub_category: sub.clone(),
                products: resolve_products(catalog, &sub.linked_product_ids),
            })
            .collect(),
    }
}

/// A linked id with no catalog counterpart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DanglingReference {
    pub section_id: String,
    pub product_id: String,
}

/// List every linked product id that the catalog no longer knows.
///
/// Informational only: rendering already skips these ids.
pub fn find_dangling_references(sections: &[Section], catalog: &Catalog) -> Vec<DanglingReference> {
    let known: HashSet<&str> = catalog.products.iter().map(|p| p.id.as_str()).collect();
    let mut dangling = Vec::new();
    for section in sections {
        let mut seen = HashSet::new();
        for id in section.data().referenced_product_ids() {
            if !known.contains(id.as_str()) && seen.insert(id.as_str()) {
                dangling.push(DanglingReference {
                    section_id: section.id().to_string(),
                    product_id: id.clone(),
                });
            }
        }
    }
    dangling
}
