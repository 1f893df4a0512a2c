//! Section editors
//!
//! Every editor is a set of pure functions from the current payload to a new
//! payload. Nothing is mutated in place; the composer shell swaps the whole
//! payload in one step. Only the list along the edited path is rebuilt.
//!
//! Linked-product toggling goes through the single [`toggle_link`] below,
//! whatever the target (banner, landing banner, subcategory, tile, ...).

mod banner;
mod category;
mod flash_sale;
mod lifestyle;
mod product_list;
mod stories;
mod wellbeing;

pub use banner::{BannerEdit, BannerEditor, BannerField, BannerLinkSlot};
pub use category::{CategoryField, CategoryGridEdit, CategoryGridEditor};
pub use flash_sale::{FlashSaleEdit, FlashSaleEditor, FlashSaleField};
pub use lifestyle::{LifestyleBannerEdit, LifestyleBannerEditor, LifestyleBannerField};
pub use product_list::{ProductListEdit, ProductListEditor};
pub use stories::{StoriesEdit, StoriesEditor, StoryField};
pub use wellbeing::{WellbeingGridEdit, WellbeingGridEditor, WellbeingTileField};

use crate::error::{CoreError, CoreResult};
use crate::types::{Identified, ProductIdSet, SectionData, SectionKind};

/// Toggle membership of `product_id`: remove it if linked, add it otherwise.
#[must_use]
pub fn toggle_link(linked: &ProductIdSet, product_id: &str) -> ProductIdSet {
    let mut next = linked.clone();
    if !next.remove(product_id) {
        next.insert(product_id.to_string());
    }
    next
}

/// Copy-on-write editor over a payload holding one list of items.
///
/// Implementors only describe where the list lives and how a field is applied;
/// add/remove/update are shared. Unknown ids leave the payload unchanged.
pub trait SectionEditor {
    type Payload: Clone;
    type Item: Clone + Identified;
    type Field;

    /// Items of the payload
    fn items(payload: &Self::Payload) -> &[Self::Item];

    /// New payload with `items` in place of the current list
    fn with_items(payload: &Self::Payload, items: Vec<Self::Item>) -> Self::Payload;

    /// Write one field of an item
    fn apply_field(item: &mut Self::Item, field: Self::Field);

    /// Append an item. Duplicate ids are refused.
    fn add(payload: &Self::Payload, item: Self::Item) -> Self::Payload {
        let items = Self::items(payload);
        if items.iter().any(|i| i.identity() == item.identity()) {
            log::warn!("Refusing to add duplicate item {}", item.identity());
            return payload.clone();
        }
        let mut next = items.to_vec();
        next.push(item);
        Self::with_items(payload, next)
    }

    /// Remove an item by id
    fn remove(payload: &Self::Payload, item_id: &str) -> Self::Payload {
        let items = Self::items(payload);
        if !items.iter().any(|i| i.identity() == item_id) {
            log::debug!("Remove ignored, no item {item_id}");
            return payload.clone();
        }
        let next = items
            .iter()
            .filter(|i| i.identity() != item_id)
            .cloned()
            .collect();
        Self::with_items(payload, next)
    }

    /// Update one field of one item
    fn update(payload: &Self::Payload, item_id: &str, field: Self::Field) -> Self::Payload {
        Self::modify(payload, item_id, |item| Self::apply_field(item, field))
    }

    /// Rewrite one item through `f`, leaving its siblings as they were
    fn modify<F>(payload: &Self::Payload, item_id: &str, f: F) -> Self::Payload
    where
        F: FnOnce(&mut Self::Item),
    {
        match update_by_id(Self::items(payload), item_id, f) {
            Some(items) => Self::with_items(payload, items),
            None => {
                log::debug!("Edit ignored, no item {item_id}");
                payload.clone()
            }
        }
    }
}

/// Copy `items`, applying `f` to the one with `id`. `None` when absent.
pub(crate) fn update_by_id<T, F>(items: &[T], id: &str, f: F) -> Option<Vec<T>>
where
    T: Clone + Identified,
    F: FnOnce(&mut T),
{
    let index = items.iter().position(|i| i.identity() == id)?;
    let mut next = items.to_vec();
    f(&mut next[index]);
    Some(next)
}

/// An edit addressed to one section, dispatched to the editor of its kind
#[derive(Debug, Clone, PartialEq)]
pub enum SectionEdit {
    Banner(BannerEdit),
    CategoryGrid(CategoryGridEdit),
    ProductList(ProductListEdit),
    WellbeingGrid(WellbeingGridEdit),
    LifestyleBanner(LifestyleBannerEdit),
    FlashSale(FlashSaleEdit),
    Stories(StoriesEdit),
}

impl SectionEdit {
    /// Kind of section this edit applies to
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

    /// Produce the edited payload. `data` itself is left untouched.
    pub fn apply(self, data: &SectionData) -> CoreResult<SectionData> {
        Ok(match (self, data) {
            (Self::Banner(edit), SectionData::Banner(d)) => {
                SectionData::Banner(BannerEditor::apply(d, edit))
            }
            (Self::CategoryGrid(edit), SectionData::CategoryGrid(d)) => {
                SectionData::CategoryGrid(CategoryGridEditor::apply(d, edit))
            }
            (Self::ProductList(edit), SectionData::ProductList(d)) => {
                SectionData::ProductList(ProductListEditor::apply(d, edit))
            }
            (Self::WellbeingGrid(edit), SectionData::WellbeingGrid(d)) => {
                SectionData::WellbeingGrid(WellbeingGridEditor::apply(d, edit))
            }
            (Self::LifestyleBanner(edit), SectionData::LifestyleBanner(d)) => {
                SectionData::LifestyleBanner(LifestyleBannerEditor::apply(d, edit))
            }
            (Self::FlashSale(edit), SectionData::FlashSale(d)) => {
                SectionData::FlashSale(FlashSaleEditor::apply(d, edit))
            }
            (Self::Stories(edit), SectionData::Stories(d)) => {
                SectionData::Stories(StoriesEditor::apply(d, edit))
            }
            (edit, data) => {
                return Err(CoreError::SectionKindMismatch {
                    expected: data.kind(),
                    actual: edit.kind(),
                })
            }
        })
    }
}
