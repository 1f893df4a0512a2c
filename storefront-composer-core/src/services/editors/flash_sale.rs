//! Flash sale editor

use chrono::{DateTime, Utc};

use super::SectionEditor;
use crate::types::{FlashSaleData, FlashSaleItem};

/// Editable flash sale item fields
#[derive(Debug, Clone, PartialEq)]
pub enum FlashSaleField {
    ProductId(String),
    FlashPrice(Option<f64>),
    StockLimit(Option<u32>),
}

/// Flash sale edit
#[derive(Debug, Clone, PartialEq)]
pub enum FlashSaleEdit {
    Add(FlashSaleItem),
    Remove { item_id: String },
    Update { item_id: String, field: FlashSaleField },
    SetEndsAt(Option<DateTime<Utc>>),
}

pub struct FlashSaleEditor;

impl SectionEditor for FlashSaleEditor {
    type Payload = FlashSaleData;
    type Item = FlashSaleItem;
    type Field = FlashSaleField;

    fn items(payload: &FlashSaleData) -> &[FlashSaleItem] {
        &payload.items
    }

    fn with_items(payload: &FlashSaleData, items: Vec<FlashSaleItem>) -> FlashSaleData {
        FlashSaleData {
            ends_at: payload.ends_at,
            items,
        }
    }

    fn apply_field(item: &mut FlashSaleItem, field: FlashSaleField) {
        match field {
            FlashSaleField::ProductId(product_id) => item.product_id = product_id,
            FlashSaleField::FlashPrice(price) => item.flash_price = price,
            FlashSaleField::StockLimit(limit) => item.stock_limit = limit,
        }
    }
}

impl FlashSaleEditor {
    /// Apply one edit
    #[must_use]
    pub fn apply(payload: &FlashSaleData, edit: FlashSaleEdit) -> FlashSaleData {
        match edit {
            FlashSaleEdit::Add(item) => Self::add(payload, item),
            FlashSaleEdit::Remove { item_id } => Self::remove(payload, &item_id),
            FlashSaleEdit::Update { item_id, field } => Self::update(payload, &item_id, field),
            FlashSaleEdit::SetEndsAt(ends_at) => FlashSaleData {
                ends_at,
                items: payload.items.clone(),
            },
        }
    }
}
