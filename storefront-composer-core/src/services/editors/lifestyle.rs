//! Lifestyle banner editor

use super::toggle_link;
use crate::types::LifestyleBannerData;

/// Editable lifestyle banner fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifestyleBannerField {
    Image(String),
    Title(String),
    Subtitle(Option<String>),
}

/// Lifestyle banner edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifestyleBannerEdit {
    Update(LifestyleBannerField),
    ToggleLink { product_id: String },
}

/// Lifestyle banner editor (a single banner, no item list)
pub struct LifestyleBannerEditor;

impl LifestyleBannerEditor {
    /// Apply one edit
    #[must_use]
    pub fn apply(payload: &LifestyleBannerData, edit: LifestyleBannerEdit) -> LifestyleBannerData {
        match edit {
            LifestyleBannerEdit::Update(field) => Self::update(payload, field),
            LifestyleBannerEdit::ToggleLink { product_id } => Self::toggle_link(payload, &product_id),
        }
    }

    #[must_use]
    pub fn update(payload: &LifestyleBannerData, field: LifestyleBannerField) -> LifestyleBannerData {
        let mut next = payload.clone();
        match field {
            LifestyleBannerField::Image(image) => next.image = image,
            LifestyleBannerField::Title(title) => next.title = title,
            LifestyleBannerField::Subtitle(subtitle) => next.subtitle = subtitle,
        }
        next
    }

    #[must_use]
    pub fn toggle_link(payload: &LifestyleBannerData, product_id: &str) -> LifestyleBannerData {
        LifestyleBannerData {
            linked_product_ids: toggle_link(&payload.linked_product_ids, product_id),
            ..payload.clone()
        }
    }
}
