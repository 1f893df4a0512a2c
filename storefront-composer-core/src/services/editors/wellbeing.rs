//! Wellbeing grid editor

use super::{toggle_link, SectionEditor};
use crate::types::{WellbeingGridData, WellbeingTile};

/// Editable tile fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WellbeingTileField {
    Title(String),
    Image(String),
}

/// Wellbeing grid edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WellbeingGridEdit {
    Add(WellbeingTile),
    Remove { tile_id: String },
    Update { tile_id: String, field: WellbeingTileField },
    ToggleLink { tile_id: String, product_id: String },
}

pub struct WellbeingGridEditor;

impl SectionEditor for WellbeingGridEditor {
    type Payload = WellbeingGridData;
    type Item = WellbeingTile;
    type Field = WellbeingTileField;

    fn items(payload: &WellbeingGridData) -> &[WellbeingTile] {
        &payload.tiles
    }

    fn with_items(_payload: &WellbeingGridData, tiles: Vec<WellbeingTile>) -> WellbeingGridData {
        WellbeingGridData { tiles }
    }

    fn apply_field(tile: &mut WellbeingTile, field: WellbeingTileField) {
        match field {
            WellbeingTileField::Title(title) => tile.title = title,
            WellbeingTileField::Image(image) => tile.image = image,
        }
    }
}

impl WellbeingGridEditor {
    /// Apply one edit
    #[must_use]
    pub fn apply(payload: &WellbeingGridData, edit: WellbeingGridEdit) -> WellbeingGridData {
        match edit {
            WellbeingGridEdit::Add(tile) => Self::add(payload, tile),
            WellbeingGridEdit::Remove { tile_id } => Self::remove(payload, &tile_id),
            WellbeingGridEdit::Update { tile_id, field } => Self::update(payload, &tile_id, field),
            WellbeingGridEdit::ToggleLink {
                tile_id,
                product_id,
            } => Self::modify(payload, &tile_id, |tile| {
                tile.linked_product_ids = toggle_link(&tile.linked_product_ids, &product_id);
            }),
        }
    }
}
