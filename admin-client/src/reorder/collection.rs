//! Client-side ordering of one list page

use shared::models::Sequenced;
use shared::response::PagedList;

/// The renderable ordering of one page of entities.
///
/// Display order is vector order. After a `replace` the order is exactly
/// what the server sent; nothing here re-sorts by `seq_no`.
#[derive(Debug, Clone)]
pub struct OrderedCollection<E> {
    entries: Vec<E>,
    total: u64,
}

impl<E: Sequenced> OrderedCollection<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            total: 0,
        }
    }

    /// Wholesale replace with a freshly fetched list
    pub fn replace(&mut self, entities: Vec<E>) {
        self.total = entities.len() as u64;
        self.entries = entities;
    }

    /// Wholesale replace with a fetched page, keeping the server's total
    pub fn replace_page(&mut self, page: PagedList<E>) {
        self.entries = page.items;
        self.total = page.total;
    }

    /// Remove the entity at `source` and reinsert it at `destination`.
    ///
    /// A missing destination (drop outside any target), an equal index or an
    /// out-of-range source leaves the collection untouched. A destination past
    /// the end is treated as the last slot.
    pub fn move_local(&mut self, source: usize, destination: Option<usize>) -> &[E] {
        let Some(destination) = destination else {
            return &self.entries;
        };
        if source >= self.entries.len() {
            return &self.entries;
        }
        let destination = destination.min(self.entries.len() - 1);
        if source == destination {
            return &self.entries;
        }

        let entity = self.entries.remove(source);
        self.entries.insert(destination, entity);
        &self.entries
    }

    /// Assign `seq_no = index + 1` for optimistic rendering only
    pub fn renumber(&mut self) {
        for (index, entity) in self.entries.iter_mut().enumerate() {
            entity.set_seq_no(index as i32 + 1);
        }
    }

    /// Whether `seq_no` runs exactly `first..first + len` in display order.
    ///
    /// `first` is 1 for the first page; later pages start after the rows of
    /// the pages before them.
    pub fn is_contiguous_from(&self, first: i32) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(index, entity)| {
                i64::from(entity.seq_no()) == i64::from(first) + index as i64
            })
    }

    pub fn position_of(&self, id: i64) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.entries.get(index)
    }

    pub fn as_slice(&self) -> &[E] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<i64> {
        self.entries.iter().map(Sequenced::id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows matching the current filters across every page
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl<E: Sequenced> Default for OrderedCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Category, EntityStatus};

    fn cat(id: i64, name: &str, seq_no: i32) -> Category {
        Category {
            id,
            name: name.to_string(),
            seq_no,
            status: EntityStatus::Active,
            image: None,
        }
    }

    fn abc() -> OrderedCollection<Category> {
        let mut c = OrderedCollection::new();
        c.replace(vec![cat(1, "A", 1), cat(2, "B", 2), cat(3, "C", 3)]);
        c
    }

    fn names(c: &OrderedCollection<Category>) -> Vec<&str> {
        c.as_slice().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_replace_keeps_server_order() {
        let mut c = OrderedCollection::new();
        // Server order is trusted even when seq_no disagrees
        c.replace(vec![cat(2, "B", 2), cat(1, "A", 1)]);
        assert_eq!(names(&c), vec!["B", "A"]);
        assert!(!c.is_contiguous_from(1));

        let c = abc();
        assert!(c.is_contiguous_from(1));
        for (i, e) in c.as_slice().iter().enumerate() {
            assert_eq!(e.seq_no, i as i32 + 1);
        }
    }

    #[test]
    fn test_move_to_front() {
        let mut c = abc();
        c.move_local(2, Some(0));
        assert_eq!(names(&c), vec!["C", "A", "B"]);
        // Not renumbered yet
        assert!(!c.is_contiguous_from(1));

        c.renumber();
        assert!(c.is_contiguous_from(1));
        assert_eq!(c.get(0).unwrap().seq_no, 1);
        assert_eq!(c.position_of(3), Some(0));
    }

    #[test]
    fn test_contiguity_near_i32_max() {
        let mut c = OrderedCollection::new();
        c.replace(vec![cat(1, "A", i32::MAX - 1), cat(2, "B", i32::MAX)]);
        assert!(c.is_contiguous_from(i32::MAX - 1));
        assert!(!c.is_contiguous_from(i32::MAX));

        c.replace(vec![cat(1, "A", i32::MAX), cat(2, "B", i32::MAX)]);
        assert!(!c.is_contiguous_from(i32::MAX));
    }

    #[test]
    fn test_move_down() {
        let mut c = abc();
        c.move_local(0, Some(2));
        assert_eq!(names(&c), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_noop_moves_leave_collection_unchanged() {
        let mut c = abc();
        let before = c.as_slice().to_vec();

        c.move_local(1, Some(1));
        assert_eq!(c.as_slice(), before.as_slice());

        c.move_local(1, None);
        assert_eq!(c.as_slice(), before.as_slice());

        c.move_local(7, Some(0));
        assert_eq!(c.as_slice(), before.as_slice());
    }

    #[test]
    fn test_destination_past_end_clamps() {
        let mut c = abc();
        c.move_local(0, Some(99));
        assert_eq!(names(&c), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_replace_after_move_reconciles() {
        let mut c = abc();
        c.move_local(0, Some(1));
        c.renumber();

        // Server confirms A at index 1
        c.replace_page(PagedList::new(
            vec![cat(2, "B", 1), cat(1, "A", 2), cat(3, "C", 3)],
            3,
        ));
        assert_eq!(c.position_of(1), Some(1));
        assert_eq!(c.get(1).unwrap().seq_no, 2);
        assert_eq!(c.total(), 3);
    }

    #[test]
    fn test_page_total_is_kept() {
        let mut c: OrderedCollection<Category> = OrderedCollection::new();
        c.replace_page(PagedList::new(vec![cat(11, "K", 11)], 40));
        assert_eq!(c.len(), 1);
        assert_eq!(c.total(), 40);
        assert!(c.is_contiguous_from(11));
        assert_eq!(c.ids(), vec![11]);
    }
}
