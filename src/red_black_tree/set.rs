use crate::arena::Handle;
use crate::red_black_tree::tree::Tree;
use crate::search_tree::SearchTree;
use std::iter::FromIterator;
use std::vec;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black.
/// The root is black, no red node has a red child, and every path from a node down to an empty
/// position passes through the same number of black nodes, which keeps the height within twice
/// the optimum. Nodes are stored in an arena and keep a handle to their parent, so rebalancing
/// walks upwards from the modified position instead of recursing.
///
/// # Examples
/// ```
/// use balanced_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert_eq!(set.delete(&0), Some(0));
/// assert_eq!(set.delete(&1), None);
/// ```
pub struct RedBlackSet<T> {
    tree: Tree<T>,
}

impl<T> RedBlackSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackSet<T>`.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet { tree: Tree::new() }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set unchanged if the key
    /// already exists.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.search(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        self.tree.insert(key)
    }

    /// Deletes a key from the set. If the key exists in the set, it will return the removed key.
    /// Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.delete(&1), Some(1));
    /// assert_eq!(set.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &T) -> Option<T> {
        self.tree.remove(key)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.search(&0));
    /// assert!(set.search(&1));
    /// ```
    pub fn search(&self, key: &T) -> bool {
        self.tree.find(key).is_some()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the height of the underlying tree, which is zero for an empty set. Heights are
    /// not cached, so this visits every node.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = (0..1000).collect();
    /// assert!(set.height() <= 20);
    /// ```
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        self.tree.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        self.tree.ceil(key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.tree.first().map(|handle| self.tree.key(handle))
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.tree.last().map(|handle| self.tree.key(handle))
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            tree: &self.tree,
            current: self.tree.first(),
        }
    }
}

impl<T> SearchTree<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> bool {
        RedBlackSet::insert(self, key)
    }

    fn delete(&mut self, key: &T) -> bool {
        RedBlackSet::delete(self, key).is_some()
    }

    fn search(&self, key: &T) -> bool {
        RedBlackSet::search(self, key)
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn clear(&mut self) {
        RedBlackSet::clear(self)
    }

    fn height(&self) -> usize {
        self.tree.height()
    }

    fn min(&self) -> Option<&T> {
        RedBlackSet::min(self)
    }

    fn max(&self) -> Option<&T> {
        RedBlackSet::max(self)
    }

    fn keys(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T> IntoIterator for RedBlackSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = RedBlackSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            keys: self.tree.into_keys().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = RedBlackSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    keys: vec::IntoIter<T>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }
}

/// An iterator for `RedBlackSet<T>`.
///
/// This iterator follows in-order successors through the parent links and yields immutable
/// references.
pub struct RedBlackSetIter<'a, T>
where
    T: 'a,
{
    tree: &'a Tree<T>,
    current: Option<Handle>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.current?;
        let tree = self.tree;
        self.current = tree.successor(handle);
        Some(tree.key(handle))
    }
}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> Default for RedBlackSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackSet;
    use crate::red_black_tree::tree::tests::check;

    #[test]
    fn test_len_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert!(set.is_empty());
        assert_eq!(set.height(), 0);
    }

    #[test]
    fn test_min_max_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = RedBlackSet::new();
        assert!(set.insert(1));
        assert!(set.search(&1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = RedBlackSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        assert_eq!(set.delete(&1), Some(1));
        assert!(!set.search(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_delete_empty() {
        let mut set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.delete(&1), None);
    }

    #[test]
    fn test_delete_reuses_arena_slots() {
        let mut set: RedBlackSet<u32> = (0..64).collect();
        for key in 0..32 {
            set.delete(&key);
        }
        set.extend(100..132);
        assert_eq!(set.len(), 64);
        assert_eq!(set.tree.len(), 64);
        check(&set.tree);
    }

    #[test]
    fn test_sequential_inserts_stay_logarithmic() {
        let set: RedBlackSet<u32> = (0..1023).collect();
        assert!(set.height() <= 20);
        check(&set.tree);
    }

    #[test]
    fn test_min_max() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.floor(&0), None);
        assert_eq!(set.floor(&2), Some(&1));
        assert_eq!(set.floor(&4), Some(&3));
        assert_eq!(set.floor(&6), Some(&5));

        assert_eq!(set.ceil(&0), Some(&1));
        assert_eq!(set.ceil(&2), Some(&3));
        assert_eq!(set.ceil(&4), Some(&5));
        assert_eq!(set.ceil(&6), None);
    }

    #[test]
    fn test_clear() {
        let mut set: RedBlackSet<u32> = (0..10).collect();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.iter().next(), None);
    }

    #[test]
    fn test_into_iter() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
    }
}
