//! Doubly linked list backed by an index arena, with stable `NodeId` handles.
//!
//! Stores list nodes in a slot vector and links them by index, enabling O(1)
//! removal and O(1) relocation of any node a caller holds a handle to. The
//! list itself imposes no ordering; callers that keep it sorted (the top-N
//! window does, by hit count) splice nodes with `insert_after` / `move_after`.
//!
//! ## Architecture
//!
//! ```text
//!   slots (Vec<Slot<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ NodeId │ Slot { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_0   │ { value: A, prev: None, next: Some(id_1) }  │
//!   │ id_1   │ { value: B, prev: Some(id_0), next: id_2 }  │
//!   │ id_2   │ { value: C, prev: Some(id_1), next: None }  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [id_0] ◄──► [id_1] ◄──► [id_2] ◄── tail
//! ```
//!
//! Freed slots go on a free list and are reused by later insertions, so a
//! long-lived list churns through a bounded number of slots.
//!
//! ## Operations
//! - `push_front(value)`: O(1), new node at the head
//! - `insert_after(anchor, value)`: O(1), new node spliced above `anchor`
//! - `move_after(id, dest)`: O(1), detach + re-splice an existing node
//! - `remove(id)`: O(1), detach + free slot
//! - `iter` / `iter_rev`: O(n) walk from either end
//!
//! `debug_validate_invariants()` is available in debug/test builds.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Arena-backed doubly linked list addressed by `NodeId`.
#[derive(Debug)]
pub struct RankList<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> RankList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty list with reserved slot capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `id` is currently a live node in this list.
    pub fn contains(&self, id: NodeId) -> bool {
        self.slots
            .get(id.0)
            .map(|slot| slot.value.is_some())
            .unwrap_or(false)
    }

    /// Returns the `NodeId` at the head of the list.
    pub fn front_id(&self) -> Option<NodeId> {
        self.head
    }

    /// Returns the `NodeId` at the tail of the list.
    pub fn back_id(&self) -> Option<NodeId> {
        self.tail
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.0).and_then(|slot| slot.value.as_ref())
    }

    /// Returns a mutable reference to a node value, if present.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(|slot| slot.value.as_mut())
    }

    /// Returns the id of the node after `id`, if any.
    pub fn next_id(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0).and_then(|slot| {
            slot.value.as_ref()?;
            slot.next
        })
    }

    /// Returns the id of the node before `id`, if any.
    pub fn prev_id(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0).and_then(|slot| {
            slot.value.as_ref()?;
            slot.prev
        })
    }

    /// Inserts a new node at the head and returns its `NodeId`.
    pub fn push_front(&mut self, value: T) -> NodeId {
        let id = self.allocate(value);
        self.attach_after(id, None);
        id
    }

    /// Inserts a new node immediately after `anchor` and returns its id.
    ///
    /// Returns `None` if `anchor` is not a live node.
    pub fn insert_after(&mut self, anchor: NodeId, value: T) -> Option<NodeId> {
        if !self.contains(anchor) {
            return None;
        }
        let id = self.allocate(value);
        self.attach_after(id, Some(anchor));
        Some(id)
    }

    /// Removes the node `id` from the list and returns its value.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        self.detach(id)?;
        let slot = self.slots.get_mut(id.0)?;
        let value = slot.value.take()?;
        self.free_list.push(id.0);
        self.len -= 1;
        Some(value)
    }

    /// Moves an existing node to the position immediately after `dest`.
    ///
    /// Returns `false` if either node is not live or `id == dest`.
    pub fn move_after(&mut self, id: NodeId, dest: NodeId) -> bool {
        if id == dest || !self.contains(id) || !self.contains(dest) {
            return false;
        }
        self.detach(id);
        self.attach_after(id, Some(dest));
        true
    }

    /// Clears the list and frees all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns an iterator from head to tail.
    pub fn iter(&self) -> RankListIter<'_, T> {
        RankListIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns an iterator from tail to head.
    pub fn iter_rev(&self) -> RankListRevIter<'_, T> {
        RankListRevIter {
            list: self,
            current: self.tail,
        }
    }

    fn allocate(&mut self, value: T) -> NodeId {
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Slot {
                value: Some(value),
                prev: None,
                next: None,
            };
            idx
        } else {
            self.slots.push(Slot {
                value: Some(value),
                prev: None,
                next: None,
            });
            self.slots.len() - 1
        };
        self.len += 1;
        NodeId(idx)
    }

    fn detach(&mut self, id: NodeId) -> Option<()> {
        let (prev, next) = {
            let slot = self.slots.get(id.0)?;
            slot.value.as_ref()?;
            (slot.prev, slot.next)
        };

        if let Some(prev_id) = prev {
            self.slots[prev_id.0].next = next;
        } else {
            self.head = next;
        }

        if let Some(next_id) = next {
            self.slots[next_id.0].prev = prev;
        } else {
            self.tail = prev;
        }

        let slot = &mut self.slots[id.0];
        slot.prev = None;
        slot.next = None;
        Some(())
    }

    // `anchor == None` attaches at the head.
    fn attach_after(&mut self, id: NodeId, anchor: Option<NodeId>) {
        let next = match anchor {
            Some(anchor_id) => self.slots[anchor_id.0].next,
            None => self.head,
        };

        {
            let slot = &mut self.slots[id.0];
            slot.prev = anchor;
            slot.next = next;
        }

        match anchor {
            Some(anchor_id) => self.slots[anchor_id.0].next = Some(id),
            None => self.head = Some(id),
        }

        match next {
            Some(next_id) => self.slots[next_id.0].prev = Some(id),
            None => self.tail = Some(id),
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len, 0);
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(id) = current {
            assert!(seen.insert(id));
            let slot = &self.slots[id.0];
            assert!(slot.value.is_some());
            assert_eq!(slot.prev, prev);
            if slot.next.is_none() {
                assert_eq!(self.tail, Some(id));
            }

            prev = Some(id);
            current = slot.next;
            count += 1;
            assert!(count <= self.len);
        }

        assert_eq!(count, self.len);
    }
}

impl<T> Default for RankList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RankListIter<'a, T> {
    list: &'a RankList<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for RankListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let slot = self.list.slots.get(id.0)?;
        self.current = slot.next;
        slot.value.as_ref()
    }
}

/// Iterator from tail to head.
pub struct RankListRevIter<'a, T> {
    list: &'a RankList<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for RankListRevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let slot = self.list.slots.get(id.0)?;
        self.current = slot.prev;
        slot.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_list_push_front_orders_lifo() {
        let mut list = RankList::new();
        list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["c", "b", "a"]);
        let rev: Vec<_> = list.iter_rev().copied().collect();
        assert_eq!(rev, vec!["a", "b", "c"]);
    }

    #[test]
    fn rank_list_insert_after_splices_in_place() {
        let mut list = RankList::new();
        let a = list.push_front("a");
        let b = list.insert_after(a, "b").unwrap();
        list.insert_after(a, "c");

        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["a", "c", "b"]);
        assert_eq!(list.back_id(), Some(b));
        list.debug_validate_invariants();
    }

    #[test]
    fn rank_list_insert_after_stale_anchor_fails() {
        let mut list = RankList::new();
        let a = list.push_front("a");
        list.remove(a);
        assert_eq!(list.insert_after(a, "b"), None);
        assert!(list.is_empty());
    }

    #[test]
    fn rank_list_remove_middle_and_ends() {
        let mut list = RankList::new();
        let c = list.push_front("c");
        let b = list.push_front("b");
        let a = list.push_front("a");

        assert_eq!(list.remove(b), Some("b"));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["a", "c"]);

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.front_id(), Some(c));
        assert_eq!(list.back_id(), Some(c));

        assert_eq!(list.remove(c), Some("c"));
        assert!(list.is_empty());
        assert_eq!(list.front_id(), None);
        assert_eq!(list.back_id(), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn rank_list_move_after_relocates_node() {
        let mut list = RankList::new();
        let c = list.push_front("c");
        let b = list.push_front("b");
        let a = list.push_front("a");

        assert!(list.move_after(a, c));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["b", "c", "a"]);
        assert_eq!(list.front_id(), Some(b));
        assert_eq!(list.back_id(), Some(a));

        // Moving after one's own predecessor is a real splice, not a no-op.
        assert!(list.move_after(a, b));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["b", "a", "c"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn rank_list_move_after_rejects_self_and_stale() {
        let mut list = RankList::new();
        let b = list.push_front("b");
        let a = list.push_front("a");

        assert!(!list.move_after(a, a));
        list.remove(b);
        assert!(!list.move_after(a, b));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["a"]);
    }

    #[test]
    fn rank_list_slot_reuse_after_remove() {
        let mut list = RankList::new();
        let a = list.push_front(1);
        list.push_front(2);
        list.remove(a);

        let c = list.push_front(3);
        assert_eq!(c.index(), a.index());
        assert_eq!(list.len(), 2);
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![3, 2]);
        list.debug_validate_invariants();
    }

    #[test]
    fn rank_list_neighbor_queries() {
        let mut list = RankList::new();
        let b = list.push_front("b");
        let a = list.push_front("a");

        assert_eq!(list.next_id(a), Some(b));
        assert_eq!(list.next_id(b), None);
        assert_eq!(list.prev_id(b), Some(a));
        assert_eq!(list.prev_id(a), None);

        list.remove(b);
        assert_eq!(list.next_id(b), None);
        assert_eq!(list.prev_id(b), None);
    }

    #[test]
    fn rank_list_clear_resets_state() {
        let mut list = RankList::new();
        list.push_front(1);
        list.push_front(2);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front_id(), None);
        assert_eq!(list.back_id(), None);
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn rank_list_get_mut_updates_value() {
        let mut list = RankList::new();
        let id = list.push_front(10);
        if let Some(value) = list.get_mut(id) {
            *value = 20;
        }
        assert_eq!(list.get(id), Some(&20));
    }
}
