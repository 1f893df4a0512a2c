//! Stories editor

use super::{toggle_link, SectionEditor};
use crate::types::{StoriesData, StoryItem};

/// Editable story fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryField {
    Title(String),
    Image(String),
}

/// Stories edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesEdit {
    Add(StoryItem),
    Remove { story_id: String },
    Update { story_id: String, field: StoryField },
    ToggleLink { story_id: String, product_id: String },
}

pub struct StoriesEditor;

impl SectionEditor for StoriesEditor {
    type Payload = StoriesData;
    type Item = StoryItem;
    type Field = StoryField;

    fn items(payload: &StoriesData) -> &[StoryItem] {
        &payload.stories
    }

    fn with_items(_payload: &StoriesData, stories: Vec<StoryItem>) -> StoriesData {
        StoriesData { stories }
    }

    fn apply_field(story: &mut StoryItem, field: StoryField) {
        match field {
            StoryField::Title(title) => story.title = title,
            StoryField::Image(image) => story.image = image,
        }
    }
}

impl StoriesEditor {
    /// Apply one edit
    #[must_use]
    pub fn apply(payload: &StoriesData, edit: StoriesEdit) -> StoriesData {
        match edit {
            StoriesEdit::Add(story) => Self::add(payload, story),
            StoriesEdit::Remove { story_id } => Self::remove(payload, &story_id),
            StoriesEdit::Update { story_id, field } => Self::update(payload, &story_id, field),
            StoriesEdit::ToggleLink {
                story_id,
                product_id,
            } => Self::modify(payload, &story_id, |story| {
                story.linked_product_ids = toggle_link(&story.linked_product_ids, &product_id);
            }),
        }
    }
}
