//! Local edit state for ordered collections.
//!
//! A draft's collections live in an [`EditableList`] while the editor works
//! on them. Nothing here touches the store: inserts, removals and reorders
//! only change the in-memory order, and a list's order is the rank each row
//! receives when the draft is saved.

use serde::{Deserialize, Serialize};

use crate::types::Rank;

/// A collection item with an "add" template.
pub trait NewItem {
    /// The item appended by the editor's "add" action. `position` is the
    /// index the item will occupy.
    fn new_item(position: usize) -> Self;
}

/// An ordered, locally editable list of collection rows.
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditableList<T> {
    items: Vec<T>,
}

impl<T> Default for EditableList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for EditableList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for EditableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> EditableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Append an item at the end.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Insert an item at `index`, clamped to the end of the list.
    pub fn insert(&mut self, index: usize, item: T) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// Remove and return the item at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Move the item at `from` so it ends up at `to`.
    ///
    /// Returns `false` (and changes nothing) when either index is out of range.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate items paired with the rank they will be saved with.
    pub fn ranked(&self) -> impl Iterator<Item = (Rank, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (rank_of(index), item))
    }
}

impl<T: NewItem> EditableList<T> {
    /// Append the item's "add" template and return a handle to it.
    pub fn push_new(&mut self) -> &mut T {
        let position = self.items.len();
        self.items.push(T::new_item(position));
        let last = self.items.len() - 1;
        &mut self.items[last]
    }
}

impl<'a, T> IntoIterator for &'a EditableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for EditableList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Convert a list index to a rank. Lists longer than `i32::MAX` saturate.
pub fn rank_of(index: usize) -> Rank {
    Rank::try_from(index).unwrap_or(Rank::MAX)
}

/// Returns `true` if `ranks` is exactly `0..ranks.len()` in order.
pub fn is_dense(ranks: &[Rank]) -> bool {
    ranks
        .iter()
        .enumerate()
        .all(|(index, rank)| *rank == rank_of(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(String);

    impl NewItem for Item {
        fn new_item(position: usize) -> Self {
            Item(format!("new-{position}"))
        }
    }

    fn list(names: &[&str]) -> EditableList<Item> {
        names.iter().map(|n| Item(n.to_string())).collect()
    }

    fn names(list: &EditableList<Item>) -> Vec<&str> {
        list.iter().map(|i| i.0.as_str()).collect()
    }

    #[test]
    fn test_push_new_uses_template_position() {
        let mut l = list(&["a"]);
        l.push_new().0.push('!');
        assert_eq!(names(&l), vec!["a", "new-1!"]);
    }

    #[test]
    fn test_insert_clamps_to_end() {
        let mut l = list(&["a", "b"]);
        l.insert(99, Item("z".into()));
        l.insert(0, Item("first".into()));
        assert_eq!(names(&l), vec!["first", "a", "b", "z"]);
    }

    #[test]
    fn test_remove_out_of_range_is_none() {
        let mut l = list(&["a"]);
        assert!(l.remove(3).is_none());
        assert_eq!(l.remove(0), Some(Item("a".into())));
        assert!(l.is_empty());
    }

    #[test]
    fn test_move_item_reorders() {
        let mut l = list(&["a", "b", "c"]);
        assert!(l.move_item(2, 0));
        assert_eq!(names(&l), vec!["c", "a", "b"]);
        assert!(l.move_item(0, 2));
        assert_eq!(names(&l), vec!["a", "b", "c"]);
        assert!(!l.move_item(0, 3));
    }

    #[test]
    fn test_ranked_follows_position() {
        let l = list(&["x", "y", "z"]);
        let ranks: Vec<Rank> = l.ranked().map(|(r, _)| r).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
        assert!(is_dense(&ranks));
    }

    #[test]
    fn test_is_dense_rejects_gaps_and_duplicates() {
        assert!(is_dense(&[]));
        assert!(!is_dense(&[0, 2]));
        assert!(!is_dense(&[0, 0]));
        assert!(!is_dense(&[1]));
    }

    #[test]
    fn test_serializes_as_array() {
        let l: EditableList<u8> = vec![1, 2].into();
        assert_eq!(serde_json::to_value(&l).unwrap(), serde_json::json!([1, 2]));
        let back: EditableList<u8> = serde_json::from_value(serde_json::json!([3])).unwrap();
        assert_eq!(back.as_slice(), &[3]);
    }
}
