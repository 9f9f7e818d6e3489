//! Orderable Items and Collections
//!
//! The normalized `{id, label}` unit and the local, index-ordered sequence
//! an operator rearranges between a load and a save.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single reorderable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderableItem {
    /// Stable identifier supplied by the backing store
    pub id: String,
    /// Display text
    pub label: String,
    /// Auxiliary badge text (e.g. "inactive"); never affects ordering
    pub extra: Option<String>,
    /// Numeric rank kept by the backing store, if any
    pub rank: Option<i64>,
}

impl OrderableItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            extra: None,
            rank: None,
        }
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    pub fn with_rank(mut self, rank: i64) -> Self {
        self.rank = Some(rank);
        self
    }
}

/// Comparator signature accepted for the initial sort
pub type ItemComparator = fn(&OrderableItem, &OrderableItem) -> Ordering;

/// Sort by stored rank; unranked items go last and keep their relative order
pub fn by_rank(a: &OrderableItem, b: &OrderableItem) -> Ordering {
    match (a.rank, b.rank) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive sort by label
pub fn by_label(a: &OrderableItem, b: &OrderableItem) -> Ordering {
    a.label.to_lowercase().cmp(&b.label.to_lowercase())
}

/// Ordered sequence of items; index 0 is first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedCollection {
    items: Vec<OrderableItem>,
}

impl OrderedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from mapped items. Ids must be unique, so a repeated id keeps
    /// its first occurrence.
    pub fn from_items(items: impl IntoIterator<Item = OrderableItem>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for item in items {
            if seen.insert(item.id.clone()) {
                kept.push(item);
            } else {
                log::warn!("Dropping duplicate item id {}", item.id);
            }
        }
        Self { items: kept }
    }

    /// Replace the whole contents (a reload never merges)
    pub fn replace(&mut self, other: OrderedCollection) {
        *self = other;
    }

    /// Stable sort with the caller's comparator
    pub fn sort_by(&mut self, compare: ItemComparator) {
        self.items.sort_by(compare);
    }

    /// Extract the item at `source` and reinsert it at `destination`.
    ///
    /// Returns `false` without touching anything when the indices are equal
    /// or either one is out of bounds.
    pub fn move_item(&mut self, source: usize, destination: usize) -> bool {
        let len = self.items.len();
        if source == destination || source >= len || destination >= len {
            return false;
        }
        let item = self.items.remove(source);
        self.items.insert(destination, item);
        true
    }

    /// Identifiers in current order, as sent to the write endpoint
    pub fn ordered_ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    pub fn ids(&self) -> HashSet<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&OrderableItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderableItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[OrderableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<OrderableItem> for OrderedCollection {
    fn from_iter<I: IntoIterator<Item = OrderableItem>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> OrderedCollection {
        OrderedCollection::from_items(vec![
            OrderableItem::new("a", "X"),
            OrderableItem::new("b", "Y"),
            OrderableItem::new("c", "Z"),
        ])
    }

    #[test]
    fn test_move_first_to_last() {
        let mut c = abc();
        assert!(c.move_item(0, 2));
        assert_eq!(c.ordered_ids(), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_last_to_first() {
        let mut c = abc();
        assert!(c.move_item(2, 0));
        assert_eq!(c.ordered_ids(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_move_is_extract_then_insert_not_swap() {
        let mut c = OrderedCollection::from_items(
            ["a", "b", "c", "d", "e"].map(|id| OrderableItem::new(id, id)),
        );
        assert!(c.move_item(1, 3));
        assert_eq!(c.ordered_ids(), vec!["a", "c", "d", "b", "e"]);
    }

    #[test]
    fn test_move_to_same_index_is_noop() {
        let mut c = abc();
        let before = c.ordered_ids();
        assert!(!c.move_item(1, 1));
        assert_eq!(c.ordered_ids(), before);
    }

    #[test]
    fn test_move_out_of_bounds_is_noop() {
        let mut c = abc();
        assert!(!c.move_item(0, 3));
        assert!(!c.move_item(7, 0));
        assert_eq!(c.ordered_ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_every_move_preserves_id_set() {
        let base = OrderedCollection::from_items(
            ["a", "b", "c", "d"].map(|id| OrderableItem::new(id, id)),
        );
        for s in 0..4 {
            for d in 0..4 {
                let mut c = base.clone();
                c.move_item(s, d);
                assert_eq!(c.ids(), base.ids());
                assert_eq!(c.len(), base.len());
                let moved = base.get(s).unwrap().id.clone();
                assert_eq!(c.position_of(&moved), Some(d));

                // Everything else keeps its relative order
                let rest_before: Vec<_> = base.ordered_ids().into_iter().filter(|id| *id != moved).collect();
                let rest_after: Vec<_> = c.ordered_ids().into_iter().filter(|id| *id != moved).collect();
                assert_eq!(rest_before, rest_after);
            }
        }
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let c = OrderedCollection::from_items(vec![
            OrderableItem::new("a", "first"),
            OrderableItem::new("b", "B"),
            OrderableItem::new("a", "second"),
        ]);
        assert_eq!(c.ordered_ids(), vec!["a", "b"]);
        assert_eq!(c.get(0).unwrap().label, "first");
    }

    #[test]
    fn test_sort_by_rank_puts_unranked_last() {
        let mut c = OrderedCollection::from_items(vec![
            OrderableItem::new("x", "X"),
            OrderableItem::new("b", "B").with_rank(2),
            OrderableItem::new("a", "A").with_rank(1),
            OrderableItem::new("y", "Y"),
        ]);
        c.sort_by(by_rank);
        assert_eq!(c.ordered_ids(), vec!["a", "b", "x", "y"]);
    }

    #[test]
    fn test_sort_by_label_ignores_case() {
        let mut c = OrderedCollection::from_items(vec![
            OrderableItem::new("1", "banana"),
            OrderableItem::new("2", "Apple"),
        ]);
        c.sort_by(by_label);
        assert_eq!(c.ordered_ids(), vec!["2", "1"]);
    }

    #[test]
    fn test_replace_discards_previous_contents() {
        let mut c = abc();
        c.replace(OrderedCollection::from_items(vec![OrderableItem::new("z", "Z")]));
        assert_eq!(c.ordered_ids(), vec!["z"]);
    }
}
