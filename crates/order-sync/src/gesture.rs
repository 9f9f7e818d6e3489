//! Drag Gesture State Machine
//!
//! Drag-start records a pending source index; drop reads and clears it, then
//! performs the move. Nothing here touches the network.

use crate::model::OrderedCollection;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging { source: usize },
}

/// Result of finishing a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: usize, to: usize },
    /// Same index, out of bounds, or no drag in progress. Not an error.
    NoOp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragGesture {
    state: GestureState,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    pub fn source(&self) -> Option<usize> {
        match self.state {
            GestureState::Dragging { source } => Some(source),
            GestureState::Idle => None,
        }
    }

    /// Start dragging the item at `source`. Only one pointer gesture exists,
    /// so a second start simply replaces the source.
    pub fn begin(&mut self, source: usize) {
        self.state = GestureState::Dragging { source };
    }

    /// Dropped outside any destination
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Drop on `destination`, moving the dragged item within `collection`
    pub fn drop_at(&mut self, destination: usize, collection: &mut OrderedCollection) -> MoveOutcome {
        let source = match std::mem::take(&mut self.state) {
            GestureState::Dragging { source } => source,
            GestureState::Idle => return MoveOutcome::NoOp,
        };
        if collection.move_item(source, destination) {
            MoveOutcome::Moved { from: source, to: destination }
        } else {
            MoveOutcome::NoOp
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderableItem;

    fn abc() -> OrderedCollection {
        ["a", "b", "c"].into_iter().map(|id| OrderableItem::new(id, id)).collect()
    }

    #[test]
    fn test_drag_and_drop_moves_item() {
        let mut items = abc();
        let mut gesture = DragGesture::new();
        gesture.begin(0);
        assert!(gesture.is_dragging());
        assert_eq!(gesture.drop_at(2, &mut items), MoveOutcome::Moved { from: 0, to: 2 });
        assert_eq!(items.ordered_ids(), vec!["b", "c", "a"]);
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut items = abc();
        let mut gesture = DragGesture::new();
        assert_eq!(gesture.drop_at(1, &mut items), MoveOutcome::NoOp);
        assert_eq!(items.ordered_ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_drop_on_self_returns_to_idle() {
        let mut items = abc();
        let mut gesture = DragGesture::new();
        gesture.begin(1);
        assert_eq!(gesture.drop_at(1, &mut items), MoveOutcome::NoOp);
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn test_drop_out_of_bounds_is_noop() {
        let mut items = abc();
        let mut gesture = DragGesture::new();
        gesture.begin(0);
        assert_eq!(gesture.drop_at(5, &mut items), MoveOutcome::NoOp);
        assert_eq!(items.ordered_ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_second_begin_replaces_source() {
        let mut items = abc();
        let mut gesture = DragGesture::new();
        gesture.begin(0);
        gesture.begin(2);
        assert_eq!(gesture.source(), Some(2));
        gesture.drop_at(0, &mut items);
        assert_eq!(items.ordered_ids(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_cancel_leaves_order_untouched() {
        let mut items = abc();
        let mut gesture = DragGesture::new();
        gesture.begin(0);
        gesture.cancel();
        assert_eq!(gesture.drop_at(2, &mut items), MoveOutcome::NoOp);
        assert_eq!(items.ordered_ids(), vec!["a", "b", "c"]);
    }
}
