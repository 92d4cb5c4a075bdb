//! Fixed-capacity entity pool
//!
//! Slots are allocated first-free in array order so that spawning is
//! deterministic. A full pool drops the spawn request without error.

use serde::{Deserialize, Serialize};

/// A fixed number of reusable slots, each empty or holding one active entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool<T> {
    slots: Vec<Option<T>>,
}

impl<T> Pool<T> {
    /// Create a pool with `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots }
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Place `item` in the first free slot.
    ///
    /// Returns the slot index, or `None` when every slot is taken (the item is
    /// dropped).
    pub fn spawn(&mut self, item: T) -> Option<usize> {
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(item);
        Some(index)
    }

    /// Free a slot, returning its occupant if there was one
    pub fn release(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Active entities with their slot index, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|item| (i, item)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| s.as_mut().map(|item| (i, item)))
    }

    /// Free every slot whose occupant fails the predicate
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        for slot in &mut self.slots {
            if slot.as_ref().is_some_and(|item| !keep(item)) {
                *slot = None;
            }
        }
    }

    /// Free every slot
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_uses_first_free_slot() {
        let mut pool = Pool::new(3);
        assert_eq!(pool.spawn('a'), Some(0));
        assert_eq!(pool.spawn('b'), Some(1));
        assert_eq!(pool.spawn('c'), Some(2));

        pool.release(1);
        assert_eq!(pool.spawn('d'), Some(1));
        assert_eq!(pool.get(1), Some(&'d'));
    }

    #[test]
    fn test_full_pool_drops_spawn() {
        let mut pool = Pool::new(2);
        pool.spawn(1);
        pool.spawn(2);
        assert!(pool.is_full());

        assert_eq!(pool.spawn(3), None);
        assert_eq!(pool.active_count(), 2);
        let items: Vec<i32> = pool.iter().map(|(_, v)| *v).collect();
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn test_release_empty_slot() {
        let mut pool: Pool<u32> = Pool::new(4);
        assert_eq!(pool.release(2), None);
        assert_eq!(pool.release(99), None);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_retain_frees_slots() {
        let mut pool = Pool::new(5);
        for i in 0..5 {
            pool.spawn(i);
        }
        pool.retain(|v| v % 2 == 0);
        assert_eq!(pool.active_count(), 3);
        assert!(pool.get(1).is_none());
        assert!(pool.get(3).is_none());
        // Freed slots are reused lowest first
        assert_eq!(pool.spawn(10), Some(1));
    }

    proptest! {
        #[test]
        fn prop_active_count_never_exceeds_capacity(
            capacity in 1usize..64,
            ops in proptest::collection::vec((any::<bool>(), 0usize..64), 0..300),
        ) {
            let mut pool = Pool::new(capacity);
            for (spawn, index) in ops {
                if spawn {
                    let _ = pool.spawn(index);
                } else {
                    pool.release(index);
                }
                prop_assert!(pool.active_count() <= pool.capacity());
            }
        }
    }
}
