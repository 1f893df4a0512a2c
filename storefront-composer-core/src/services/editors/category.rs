//! Category grid editor
//!
//! Two levels: main categories, and subcategories scoped to one main category.
//! Subcategory ids only need to be unique within their parent, so every
//! subcategory operation is addressed by `(main_id, sub_id)`.

use super::{toggle_link, update_by_id, SectionEditor};
use crate::types::{Catalog, CatalogCategory, CategoryGridData, MainCategory, SubCategory};

/// Editable fields, shared by main categories and subcategories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryField {
    Name(String),
    Image(String),
}

/// Category grid edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryGridEdit {
    Add(MainCategory),
    /// Removes the main category and every subcategory under it
    Remove {
        main_id: String,
    },
    Update {
        main_id: String,
        field: CategoryField,
    },
    AddSubCategory {
        main_id: String,
        sub_category: SubCategory,
    },
    RemoveSubCategory {
        main_id: String,
        sub_id: String,
    },
    UpdateSubCategory {
        main_id: String,
        sub_id: String,
        field: CategoryField,
    },
    ToggleLink {
        main_id: String,
        sub_id: String,
        product_id: String,
    },
}

/// Category grid editor
pub struct CategoryGridEditor;

impl SectionEditor for CategoryGridEditor {
    type Payload = CategoryGridData;
    type Item = MainCategory;
    type Field = CategoryField;

    fn items(payload: &CategoryGridData) -> &[MainCategory] {
        &payload.categories
    }

    fn with_items(_payload: &CategoryGridData, categories: Vec<MainCategory>) -> CategoryGridData {
        CategoryGridData { categories }
    }

    fn apply_field(category: &mut MainCategory, field: CategoryField) {
        match field {
            CategoryField::Name(name) => category.name = name,
            CategoryField::Image(image) => category.image = image,
        }
    }
}

impl CategoryGridEditor {
    /// Apply one edit
    #[must_use]
    pub fn apply(payload: &CategoryGridData, edit: CategoryGridEdit) -> CategoryGridData {
        match edit {
            CategoryGridEdit::Add(category) => Self::add(payload, category),
            CategoryGridEdit::Remove { main_id } => Self::remove(payload, &main_id),
            CategoryGridEdit::Update { main_id, field } => Self::update(payload, &main_id, field),
            CategoryGridEdit::AddSubCategory {
                main_id,
                sub_category,
            } => Self::add_sub_category(payload, &main_id, sub_category),
            CategoryGridEdit::RemoveSubCategory { main_id, sub_id } => {
                Self::remove_sub_category(payload, &main_id, &sub_id)
            }
            CategoryGridEdit::UpdateSubCategory {
                main_id,
                sub_id,
                field,
            } => Self::update_sub_category(payload, &main_id, &sub_id, field),
            CategoryGridEdit::ToggleLink {
                main_id,
                sub_id,
                product_id,
            } => Self::toggle_link(payload, &main_id, &sub_id, &product_id),
        }
    }

    /// Append a main category seeded from the catalog tree
    #[must_use]
    pub fn add_from_catalog(
        payload: &CategoryGridData,
        category: &CatalogCategory,
        catalog: &Catalog,
    ) -> CategoryGridData {
        Self::add(payload, MainCategory::from_catalog(category, catalog))
    }

    /// Append a subcategory under `main_id`. Duplicate ids within the parent are refused.
    #[must_use]
    pub fn add_sub_category(
        payload: &CategoryGridData,
        main_id: &str,
        sub_category: SubCategory,
    ) -> CategoryGridData {
        Self::modify(payload, main_id, |main| {
            if main.sub_category(&sub_category.id).is_some() {
                log::warn!(
                    "Refusing duplicate subcategory {} under {}",
                    sub_category.id,
                    main.id
                );
                return;
            }
            main.sub_categories.push(sub_category);
        })
    }

    /// Remove a subcategory from its parent only
    #[must_use]
    pub fn remove_sub_category(
        payload: &CategoryGridData,
        main_id: &str,
        sub_id: &str,
    ) -> CategoryGridData {
        Self::modify(payload, main_id, |main| {
            main.sub_categories.retain(|s| s.id != sub_id);
        })
    }

    /// Update one field of one subcategory
    #[must_use]
    pub fn update_sub_category(
        payload: &CategoryGridData,
        main_id: &str,
        sub_id: &str,
        field: CategoryField,
    ) -> CategoryGridData {
        Self::modify_sub(payload, main_id, sub_id, |sub| match field {
            CategoryField::Name(name) => sub.name = name,
            CategoryField::Image(image) => sub.image = image,
        })
    }

    /// Toggle a linked product on a subcategory
    #[must_use]
    pub fn toggle_link(
        payload: &CategoryGridData,
        main_id: &str,
        sub_id: &str,
        product_id: &str,
    ) -> CategoryGridData {
        Self::modify_sub(payload, main_id, sub_id, |sub| {
            sub.linked_product_ids = toggle_link(&sub.linked_product_ids, product_id);
        })
    }

    fn modify_sub<F>(payload: &CategoryGridData, main_id: &str, sub_id: &str, f: F) -> CategoryGridData
    where
        F: FnOnce(&mut SubCategory),
    {
        let Some(main) = payload.categories.iter().find(|c| c.id == main_id) else {
            log::debug!("Edit ignored, no category {main_id}");
            return payload.clone();
        };
        let Some(sub_categories) = update_by_id(&main.sub_categories, sub_id, f) else {
            log::debug!("Edit ignored, no subcategory {sub_id} under {main_id}");
            return payload.clone();
        };
        Self::modify(payload, main_id, |main| main.sub_categories = sub_categories)
    }
}
