//! Drag-to-reorder engine
//!
//! Turns a stream of hover events into discrete list moves. A move is only
//! committed once the pointer crosses the hovered item's vertical midpoint in
//! the direction of travel, so two similarly sized neighbours do not flip back
//! and forth on every pointer jitter.

use crate::types::Identified;

/// A committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

/// Vertical extent of the hovered item, in the pointer's coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverBounds {
    pub top: f64,
    pub bottom: f64,
}

impl HoverBounds {
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    fn half_height(self) -> f64 {
        (self.bottom - self.top) / 2.0
    }
}

/// Move the item at `from` to `to` as a single remove-and-insert.
///
/// Returns `false` without touching the list when `from == to` or either
/// index is out of bounds.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    let len = items.len();
    if from == to || from >= len || to >= len {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// In-flight drag gesture. Exists only between pointer-down and drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragGesture {
    item_id: String,
    origin_index: usize,
    current_index: usize,
}

impl DragGesture {
    /// Start dragging the item at `index`. `None` if the index is out of bounds.
    pub fn begin<T: Identified>(items: &[T], index: usize) -> Option<Self> {
        items.get(index).map(|item| Self {
            item_id: item.identity().to_string(),
            origin_index: index,
            current_index: index,
        })
    }

    /// Id of the dragged item
    #[must_use]
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// Index the drag started from
    #[must_use]
    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    /// Index the dragged item currently occupies
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether the dragged item still sits at the recorded index
    fn is_in_sync<T: Identified>(&self, items: &[T]) -> bool {
        items
            .get(self.current_index)
            .is_some_and(|item| item.identity() == self.item_id)
    }

    /// Handle a hover over the item at `hover_index`.
    ///
    /// `pointer_y` is the pointer position, `bounds` the hovered item's extent.
    /// Moving down commits once the pointer is at or past the midpoint, moving
    /// up once it is at or before it. A gesture whose recorded index no longer
    /// holds the dragged item (the list changed underneath it) commits nothing.
    pub fn hover<T: Identified>(
        &mut self,
        items: &mut Vec<T>,
        hover_index: usize,
        pointer_y: f64,
        bounds: HoverBounds,
    ) -> Option<Move> {
        let drag_index = self.current_index;
        if drag_index == hover_index || hover_index >= items.len() {
            return None;
        }
        if !self.is_in_sync(items) {
            log::debug!(
                "Ignoring hover for stale drag of {} at index {drag_index}",
                self.item_id
            );
            return None;
        }

        let offset = pointer_y - bounds.top;
        let middle = bounds.half_height();
        if drag_index < hover_index && offset < middle {
            return None;
        }
        if drag_index > hover_index && offset > middle {
            return None;
        }

        if !move_item(items, drag_index, hover_index) {
            return None;
        }
        self.current_index = hover_index;
        Some(Move {
            from: drag_index,
            to: hover_index,
        })
    }

    /// Drop: the current order becomes durable and the gesture is discarded
    pub fn finish(self) -> Option<Move> {
        (self.origin_index != self.current_index).then_some(Move {
            from: self.origin_index,
            to: self.current_index,
        })
    }

    /// Abort: put the dragged item back where it started.
    ///
    /// Hover commits only ever move the dragged item, so returning it to its
    /// origin restores the exact pre-gesture order.
    pub fn cancel<T: Identified>(self, items: &mut Vec<T>) {
        if self.is_in_sync(items) {
            move_item(items, self.current_index, self.origin_index);
        } else if let Some(pos) = items.iter().position(|i| i.identity() == self.item_id) {
            move_item(items, pos, self.origin_index.min(items.len() - 1));
        }
    }
}
