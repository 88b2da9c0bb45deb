//! Slab allocator for tree nodes that link to each other through copyable handles.

use std::mem;
use std::ops::{Index, IndexMut};

/// A handle to a value stored in an `Arena<T>`.
///
/// Handles are a slot index paired with the generation the slot was allocated in, so a node can
/// refer to its parent without owning it, and a handle to a freed value never resolves to a
/// later value stored in the same slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    index: usize,
    generation: u64,
}

enum Slot<T> {
    Occupied { value: T, generation: u64 },
    Vacant(Option<usize>),
}

/// A typed arena that hands out `Handle`s instead of references.
///
/// Freed slots are threaded onto a free list and reused by later allocations, so a tree that
/// repeatedly inserts and deletes keys does not grow its backing storage. The arena is a single
/// `Vec` and uses no unsafe code.
///
/// # Examples
///
/// ```
/// use balanced_collections::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert_eq!(arena.get(x), None);
///
/// // the slot is reused, but the old handle stays dead
/// let y = arena.allocate(3);
/// assert_eq!(arena.get(x), None);
/// assert_eq!(arena[y], 3);
/// ```
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    generation: u64,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::new();
    /// assert!(arena.is_empty());
    /// ```
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
            generation: 0,
            len: 0,
        }
    }

    /// Stores a value in the arena and returns its handle. Vacant slots are reused before the
    /// arena grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;
        let generation = self.generation;
        let slot = Slot::Occupied { value, generation };
        match self.free_head {
            None => {
                self.slots.push(slot);
                Handle { index: self.slots.len() - 1, generation }
            },
            Some(index) => {
                match mem::replace(&mut self.slots[index], slot) {
                    Slot::Vacant(next) => self.free_head = next,
                    Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
                }
                Handle { index, generation }
            },
        }
    }

    /// Removes a value from the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is out of range, refers to a vacant slot, or refers to a value that was
    /// already freed and whose slot now holds a newer value.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(x), 0);
    /// ```
    pub fn free(&mut self, handle: Handle) -> T {
        match self.slots.get(handle.index) {
            None => panic!("Error: attempting to free a handle outside of the arena."),
            Some(Slot::Vacant(_)) => panic!("Error: attempting to free a vacant slot."),
            Some(Slot::Occupied { generation, .. }) if *generation != handle.generation => {
                panic!("Error: attempting to free a stale handle.")
            },
            Some(Slot::Occupied { .. }) => (),
        }

        let old_slot = mem::replace(&mut self.slots[handle.index], Slot::Vacant(self.free_head));
        self.free_head = Some(handle.index);
        self.generation += 1;
        self.len -= 1;
        match old_slot {
            Slot::Occupied { value, .. } => value,
            Slot::Vacant(_) => unreachable!("slot was checked to be occupied"),
        }
    }

    /// Returns an immutable reference to a value in the arena, or `None` if `handle` is out of
    /// range, vacant or stale.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.index) {
            Some(Slot::Occupied { value, generation }) if *generation == handle.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns a mutable reference to a value in the arena, or `None` if `handle` is out of
    /// range, vacant or stale.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.index) {
            Some(Slot::Occupied { value, generation }) if *generation == handle.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns the number of live values in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every value in the arena and releases its slots. Handles issued before the call
    /// never resolve again.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.generation += 1;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle does not refer to a live value.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle does not refer to a live value.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, Handle};

    #[test]
    #[should_panic]
    fn test_free_out_of_range() {
        let mut arena: Arena<u32> = Arena::new();
        arena.free(Handle { index: 0, generation: 0 });
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_slot() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.free(x);
        arena.free(x);
    }

    #[test]
    #[should_panic]
    fn test_free_stale_handle() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.free(x);
        arena.allocate(1);
        arena.free(x);
    }

    #[test]
    fn test_allocate_sequential() {
        let mut arena = Arena::new();
        assert_eq!(arena.allocate(0).index, 0);
        assert_eq!(arena.allocate(0).index, 1);
        assert_eq!(arena.allocate(0).index, 2);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_free_reuses_slots_last_in_first_out() {
        let mut arena = Arena::new();
        let a = arena.allocate(0);
        let b = arena.allocate(1);
        arena.allocate(2);

        assert_eq!(arena.free(a), 0);
        assert_eq!(arena.free(b), 1);
        assert_eq!(arena.len(), 1);

        assert_eq!(arena.allocate(3).index, b.index);
        assert_eq!(arena.allocate(4).index, a.index);
        assert_eq!(arena.allocate(5).index, 3);
    }

    #[test]
    fn test_get() {
        let mut arena = Arena::new();
        let x = arena.allocate(7);
        assert_eq!(arena.get(x), Some(&7));
        assert_eq!(arena.get(Handle { index: 1, generation: 0 }), None);
    }

    #[test]
    fn test_get_freed() {
        let mut arena = Arena::new();
        let x = arena.allocate(7);
        arena.free(x);
        assert_eq!(arena.get(x), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn test_get_stale_after_reuse() {
        let mut arena = Arena::new();
        let x = arena.allocate(1);
        arena.free(x);
        let y = arena.allocate(2);

        assert_eq!(x.index, y.index);
        assert_eq!(arena.get(x), None);
        assert_eq!(arena.get_mut(x), None);
        assert_eq!(arena.get(y), Some(&2));
    }

    #[test]
    #[should_panic]
    fn test_index_stale_after_reuse() {
        let mut arena = Arena::new();
        let x = arena.allocate(1);
        arena.free(x);
        arena.allocate(2);
        let _value = arena[x];
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        *arena.get_mut(x).unwrap() = 1;
        assert_eq!(arena[x], 1);
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new();
        let x = arena.allocate(0);
        arena.allocate(1);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(x), None);

        let y = arena.allocate(2);
        assert_eq!(y.index, 0);
        assert_eq!(arena.get(x), None);
        assert_eq!(arena.get(y), Some(&2));
    }
}
