//! Product list editor

use super::toggle_link;
use crate::types::{ProductListData, ProductListLayout};

/// Product list edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductListEdit {
    ToggleLink { product_id: String },
    SetLayout(ProductListLayout),
}

/// Product list editor. The "items" of this section are its linked products.
pub struct ProductListEditor;

impl ProductListEditor {
    /// Apply one edit
    #[must_use]
    pub fn apply(payload: &ProductListData, edit: ProductListEdit) -> ProductListData {
        match edit {
            ProductListEdit::ToggleLink { product_id } => Self::toggle_link(payload, &product_id),
            ProductListEdit::SetLayout(layout) => Self::set_layout(payload, layout),
        }
    }

    #[must_use]
    pub fn toggle_link(payload: &ProductListData, product_id: &str) -> ProductListData {
        ProductListData {
            linked_product_ids: toggle_link(&payload.linked_product_ids, product_id),
            layout: payload.layout,
        }
    }

    #[must_use]
    pub fn set_layout(payload: &ProductListData, layout: ProductListLayout) -> ProductListData {
        ProductListData {
            linked_product_ids: payload.linked_product_ids.clone(),
            layout,
        }
    }
}
