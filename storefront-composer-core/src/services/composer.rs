//! Composer shell
//!
//! Owns the one committed section sequence, the editing selection and the
//! in-flight drag gesture. Editors produce new payloads; the shell swaps them
//! in. The preview reads `sections()` directly.

use super::editors::SectionEdit;
use super::reorder::{move_item, DragGesture, HoverBounds, Move};
use crate::config::ComposerConfig;
use crate::error::{CoreError, CoreResult};
use crate::types::{Section, SectionDataPatch, SectionKind, SectionMetaUpdate};

/// Layout being composed
#[derive(Debug, Clone, Default)]
pub struct ComposerShell {
    sections: Vec<Section>,
    selected: Option<String>,
    drag: Option<DragGesture>,
    config: ComposerConfig,
}

impl ComposerShell {
    #[must_use]
    pub fn new(config: ComposerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start from existing sections
    #[must_use]
    pub fn with_sections(config: ComposerConfig, sections: Vec<Section>) -> Self {
        Self {
            sections,
            config,
            ..Self::default()
        }
    }

    /// Committed section sequence
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Section open in the editor panel
    #[must_use]
    pub fn selected(&self) -> Option<&Section> {
        self.selected.as_deref().and_then(|id| self.section(id))
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn drag(&self) -> Option<&DragGesture> {
        self.drag.as_ref()
    }

    fn section_mut(&mut self, id: &str) -> CoreResult<&mut Section> {
        self.sections
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| CoreError::SectionNotFound(id.to_string()))
    }

    /// Append a default section of `kind` and select it
    pub fn add_section(&mut self, kind: SectionKind) -> CoreResult<String> {
        if self.sections.len() >= self.config.max_sections {
            return Err(CoreError::SectionLimitReached(self.config.max_sections));
        }
        let section = Section::new(kind);
        let id = section.id().to_string();
        log::info!("Adding {kind} section {id}");
        self.sections.push(section);
        self.selected = Some(id.clone());
        Ok(id)
    }

    /// Remove a section. Returns `false` when no section has `id`.
    pub fn delete_section(&mut self, id: &str) -> bool {
        let Some(index) = self.sections.iter().position(|s| s.id() == id) else {
            log::debug!("Delete ignored, no section {id}");
            return false;
        };
        let removed = self.sections.remove(index);
        log::info!("Deleted {} section {id}", removed.kind());

        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        if self.drag.as_ref().is_some_and(|g| g.item_id() == id) {
            self.drag = None;
        }
        true
    }

    /// Open a section in the editor panel
    pub fn select_section(&mut self, id: &str) -> CoreResult<()> {
        if self.section(id).is_none() {
            return Err(CoreError::SectionNotFound(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Partially update section metadata
    pub fn update_section_meta(&mut self, id: &str, update: SectionMetaUpdate) -> CoreResult<()> {
        let section = self.section_mut(id)?;
        if let Some(title) = update.title {
            section.set_title(title);
        }
        Ok(())
    }

    /// Partially update a section payload. The kind cannot change.
    pub fn update_section_data(&mut self, id: &str, patch: SectionDataPatch) -> CoreResult<()> {
        let section = self.section_mut(id)?;
        let data = section.data().merged(patch)?;
        section.replace_data(data);
        Ok(())
    }

    /// Run one editor operation against a section
    pub fn edit_section(&mut self, id: &str, edit: SectionEdit) -> CoreResult<()> {
        let section = self.section_mut(id)?;
        let data = edit.apply(section.data())?;
        section.replace_data(data);
        Ok(())
    }

    /// Move a section from one index to another; out-of-range moves are ignored.
    ///
    /// A committed move ends any gesture in flight, keeping its hover moves.
    pub fn move_section(&mut self, from: usize, to: usize) -> bool {
        let moved = move_item(&mut self.sections, from, to);
        if !moved {
            log::debug!("Move {from} -> {to} ignored");
        } else if self.drag.take().is_some() {
            log::debug!("Drag superseded by move {from} -> {to}");
        }
        moved
    }

    /// Pick up the section at `index`, replacing any unfinished gesture
    pub fn begin_drag(&mut self, index: usize) -> bool {
        if let Some(stale) = self.drag.take() {
            stale.cancel(&mut self.sections);
        }
        self.drag = DragGesture::begin(&self.sections, index);
        self.drag.is_some()
    }

    /// Feed a hover event to the gesture in flight
    pub fn drag_hover(&mut self, hover_index: usize, pointer_y: f64, bounds: HoverBounds) -> Option<Move> {
        let gesture = self.drag.as_mut()?;
        gesture.hover(&mut self.sections, hover_index, pointer_y, bounds)
    }

    /// Drop the dragged section where it currently is
    pub fn end_drag(&mut self) -> Option<Move> {
        let moved = self.drag.take()?.finish();
        if let Some(m) = moved {
            log::debug!("Section dragged {} -> {}", m.from, m.to);
        }
        moved
    }

    /// Abort the gesture and restore the order it started from
    pub fn cancel_drag(&mut self) {
        if let Some(gesture) = self.drag.take() {
            gesture.cancel(&mut self.sections);
        }
    }

    /// Swap in a loaded layout. Selection and drag state are dropped.
    pub fn replace_sections(&mut self, sections: Vec<Section>) {
        log::info!("Loaded layout with {} sections", sections.len());
        self.sections = sections;
        self.selected = None;
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::editors::{BannerEdit, StoriesEdit};
    use crate::types::{
        Banner, ProductIdSet, ProductListData, ProductListLayout, SectionData, StoryItem,
    };

    fn kinds(shell: &ComposerShell) -> Vec<SectionKind> {
        shell.sections().iter().map(Section::kind).collect()
    }

    fn ids(shell: &ComposerShell) -> Vec<String> {
        shell.sections().iter().map(|s| s.id().to_string()).collect()
    }

    fn shell_with(kinds: &[SectionKind]) -> ComposerShell {
        let mut shell = ComposerShell::new(ComposerConfig::default());
        for kind in kinds {
            shell.add_section(*kind).unwrap();
        }
        shell.clear_selection();
        shell
    }

    #[test]
    fn compose_move_and_delete_scenario() {
        let mut shell = shell_with(&[SectionKind::Banner, SectionKind::CategoryGrid]);
        let grid_id = shell.sections()[1].id().to_string();

        let flash_id = shell.add_section(SectionKind::FlashSale).unwrap();
        assert!(!ids(&shell)[..2].contains(&flash_id));
        assert_eq!(
            kinds(&shell),
            vec![SectionKind::Banner, SectionKind::CategoryGrid, SectionKind::FlashSale]
        );
        assert_eq!(shell.selected_id(), Some(flash_id.as_str()));

        assert!(shell.move_section(2, 0));
        assert_eq!(
            kinds(&shell),
            vec![SectionKind::FlashSale, SectionKind::Banner, SectionKind::CategoryGrid]
        );

        assert!(shell.delete_section(&grid_id));
        assert_eq!(kinds(&shell), vec![SectionKind::FlashSale, SectionKind::Banner]);
        // deleting another section keeps the selection
        assert_eq!(shell.selected_id(), Some(flash_id.as_str()));
    }

    #[test]
    fn deleting_selected_section_clears_selection() {
        let mut shell = shell_with(&[SectionKind::Stories]);
        let id = shell.sections()[0].id().to_string();
        shell.select_section(&id).unwrap();

        assert!(shell.delete_section(&id));

        assert!(shell.selected().is_none());
        assert!(!shell.delete_section(&id));
    }

    #[test]
    fn section_limit_is_enforced() {
        let config = ComposerConfig {
            max_sections: 2,
            ..ComposerConfig::default()
        };
        let mut shell = ComposerShell::new(config);
        shell.add_section(SectionKind::Banner).unwrap();
        shell.add_section(SectionKind::Stories).unwrap();

        let err = shell.add_section(SectionKind::FlashSale).unwrap_err();

        assert!(matches!(err, CoreError::SectionLimitReached(2)));
        assert_eq!(shell.sections().len(), 2);
    }

    #[test]
    fn select_unknown_section_fails() {
        let mut shell = shell_with(&[SectionKind::Banner]);
        assert!(matches!(
            shell.select_section("nope"),
            Err(CoreError::SectionNotFound(_))
        ));
    }

    #[test]
    fn out_of_range_move_is_noop() {
        let mut shell = shell_with(&[SectionKind::Banner, SectionKind::Stories]);
        let before = ids(&shell);

        assert!(!shell.move_section(0, 5));
        assert!(!shell.move_section(1, 1));

        assert_eq!(ids(&shell), before);
    }

    #[test]
    fn meta_update_sets_and_clears_title() {
        let mut shell = shell_with(&[SectionKind::Banner]);
        let id = shell.sections()[0].id().to_string();

        shell
            .update_section_meta(
                &id,
                SectionMetaUpdate {
                    title: Some(Some("Hero".to_string())),
                },
            )
            .unwrap();
        assert_eq!(shell.section(&id).unwrap().title(), Some("Hero"));

        // untouched when the field is absent
        shell.update_section_meta(&id, SectionMetaUpdate::default()).unwrap();
        assert_eq!(shell.section(&id).unwrap().title(), Some("Hero"));

        shell
            .update_section_meta(&id, SectionMetaUpdate { title: Some(None) })
            .unwrap();
        assert!(shell.section(&id).unwrap().title().is_none());
    }

    #[test]
    fn data_update_requires_matching_kind() {
        let mut shell = shell_with(&[SectionKind::Banner]);
        let id = shell.sections()[0].id().to_string();

        let err = shell
            .update_section_data(&id, SectionDataPatch::Stories { stories: Some(vec![]) })
            .unwrap_err();
        assert!(matches!(err, CoreError::SectionKindMismatch { .. }));
        assert_eq!(
            shell.section(&id).unwrap().data(),
            &SectionData::default_for(SectionKind::Banner)
        );

        let banners = vec![Banner::new("Hero", "img")];
        shell
            .update_section_data(&id, SectionDataPatch::Banner { banners: Some(banners.clone()) })
            .unwrap();
        match shell.section(&id).unwrap().data() {
            SectionData::Banner(data) => assert_eq!(data.banners, banners),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn data_update_merges_only_given_fields() {
        let mut shell = shell_with(&[SectionKind::ProductList]);
        let id = shell.sections()[0].id().to_string();
        let linked = ProductIdSet::from(["p-apple".to_string(), "p-milk".to_string()]);
        shell
            .update_section_data(
                &id,
                SectionDataPatch::ProductList {
                    linked_product_ids: Some(linked.clone()),
                    layout: None,
                },
            )
            .unwrap();

        shell
            .update_section_data(
                &id,
                SectionDataPatch::ProductList {
                    linked_product_ids: None,
                    layout: Some(ProductListLayout::Grid),
                },
            )
            .unwrap();

        assert_eq!(
            shell.section(&id).unwrap().data(),
            &SectionData::ProductList(ProductListData {
                linked_product_ids: linked,
                layout: ProductListLayout::Grid,
            })
        );
        assert!(matches!(
            shell.update_section_data(
                "nope",
                SectionDataPatch::ProductList {
                    linked_product_ids: None,
                    layout: None,
                },
            ),
            Err(CoreError::SectionNotFound(_))
        ));
    }

    #[test]
    fn edits_go_through_section_editors() {
        let mut shell = shell_with(&[SectionKind::Stories]);
        let id = shell.sections()[0].id().to_string();
        let story = StoryItem::new("Morning", "img");

        shell
            .edit_section(&id, SectionEdit::Stories(StoriesEdit::Add(story.clone())))
            .unwrap();

        match shell.section(&id).unwrap().data() {
            SectionData::Stories(data) => assert_eq!(data.stories, vec![story]),
            other => panic!("unexpected payload {other:?}"),
        }

        let err = shell
            .edit_section(&id, SectionEdit::Banner(BannerEdit::Add(Banner::new("b", "i"))))
            .unwrap_err();
        assert!(matches!(err, CoreError::SectionKindMismatch { .. }));
        assert!(matches!(
            shell.edit_section("nope", SectionEdit::Stories(StoriesEdit::Add(StoryItem::new("x", "y")))),
            Err(CoreError::SectionNotFound(_))
        ));
    }

    #[test]
    fn drag_commits_on_drop() {
        let mut shell = shell_with(&[SectionKind::Banner, SectionKind::Stories, SectionKind::FlashSale]);
        let before = ids(&shell);
        let bounds = HoverBounds::new(0.0, 100.0);

        assert!(shell.begin_drag(0));
        // above the midpoint while moving down: nothing yet
        assert!(shell.drag_hover(1, 20.0, bounds).is_none());
        assert_eq!(shell.drag_hover(1, 60.0, bounds), Some(Move { from: 0, to: 1 }));
        assert_eq!(shell.drag_hover(2, 50.0, bounds), Some(Move { from: 1, to: 2 }));

        assert_eq!(shell.end_drag(), Some(Move { from: 0, to: 2 }));
        assert!(shell.drag().is_none());
        assert_eq!(ids(&shell), vec![before[1].clone(), before[2].clone(), before[0].clone()]);
    }

    #[test]
    fn cancelled_drag_restores_order() {
        let mut shell = shell_with(&[
            SectionKind::Banner,
            SectionKind::Stories,
            SectionKind::FlashSale,
            SectionKind::ProductList,
        ]);
        let id = shell.sections()[1].id().to_string();
        shell
            .edit_section(&id, SectionEdit::Stories(StoriesEdit::Add(StoryItem::new("Tea", "img"))))
            .unwrap();
        let before = shell.sections().to_vec();
        let bounds = HoverBounds::new(0.0, 40.0);

        shell.begin_drag(3);
        shell.drag_hover(2, 10.0, bounds);
        shell.drag_hover(1, 5.0, bounds);
        shell.drag_hover(0, 0.0, bounds);
        assert_ne!(shell.sections(), before.as_slice());

        shell.cancel_drag();

        assert_eq!(shell.sections(), before.as_slice());
        assert!(shell.drag().is_none());
    }

    #[test]
    fn move_during_drag_ends_gesture() {
        let mut shell = shell_with(&[SectionKind::Banner, SectionKind::Stories, SectionKind::FlashSale]);
        let before = ids(&shell);
        assert!(shell.begin_drag(0));

        assert!(shell.move_section(2, 0));
        let after_move = ids(&shell);
        assert_eq!(after_move, vec![before[2].clone(), before[0].clone(), before[1].clone()]);
        assert!(shell.drag().is_none());

        shell.cancel_drag();

        assert_eq!(ids(&shell), after_move);
    }

    #[test]
    fn ignored_move_keeps_gesture() {
        let mut shell = shell_with(&[SectionKind::Banner, SectionKind::Stories]);
        assert!(shell.begin_drag(1));

        assert!(!shell.move_section(0, 9));

        assert!(shell.drag().is_some());
    }

    #[test]
    fn deleting_dragged_section_drops_gesture() {
        let mut shell = shell_with(&[SectionKind::Banner, SectionKind::Stories]);
        let id = shell.sections()[0].id().to_string();
        shell.begin_drag(0);

        shell.delete_section(&id);

        assert!(shell.drag().is_none());
        assert!(shell.drag_hover(0, 0.0, HoverBounds::new(0.0, 10.0)).is_none());
        assert!(shell.end_drag().is_none());
    }

    #[test]
    fn begin_drag_out_of_range() {
        let mut shell = shell_with(&[SectionKind::Banner]);
        assert!(!shell.begin_drag(3));
        assert!(shell.drag().is_none());
    }

    #[test]
    fn replace_sections_drops_transient_state() {
        let mut shell = shell_with(&[SectionKind::Banner, SectionKind::Stories]);
        let id = shell.sections()[0].id().to_string();
        shell.select_section(&id).unwrap();
        shell.begin_drag(1);

        shell.replace_sections(vec![Section::new(SectionKind::FlashSale)]);

        assert_eq!(kinds(&shell), vec![SectionKind::FlashSale]);
        assert!(shell.selected().is_none());
        assert!(shell.drag().is_none());
    }
}
