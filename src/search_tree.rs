//! The contract shared by the balanced search trees in this crate.

/// An ordered collection of distinct keys backed by a self-balancing binary search tree.
///
/// Implementations keep their balance invariant after every `insert` and `delete`, so all three
/// core operations run in `O(log n)`.
///
/// # Examples
/// ```
/// use balanced_collections::avl_tree::AvlSet;
/// use balanced_collections::red_black_tree::RedBlackSet;
/// use balanced_collections::SearchTree;
///
/// fn fill(tree: &mut dyn SearchTree<u32>) {
///     for key in 0..16 {
///         tree.insert(key);
///     }
///     tree.delete(&3);
/// }
///
/// let mut avl: AvlSet<u32> = AvlSet::new();
/// let mut red_black: RedBlackSet<u32> = RedBlackSet::new();
/// fill(&mut avl);
/// fill(&mut red_black);
///
/// assert_eq!(avl.keys(), red_black.keys());
/// assert!(!SearchTree::search(&avl, &3));
/// ```
pub trait SearchTree<T>
where
    T: Ord,
{
    /// Inserts a key. Returns `false`, leaving the tree untouched, if the key was already
    /// present.
    fn insert(&mut self, key: T) -> bool;

    /// Deletes a key. Returns `false` if the key was not present.
    fn delete(&mut self, key: &T) -> bool;

    /// Returns `true` if the key is present.
    fn search(&self, key: &T) -> bool;

    /// Returns the number of keys in the tree.
    fn len(&self) -> usize;

    /// Returns `true` if the tree holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every key.
    fn clear(&mut self);

    /// Returns the number of nodes on the longest root-to-leaf path.
    fn height(&self) -> usize;

    /// Returns the smallest key, or `None` if the tree is empty.
    fn min(&self) -> Option<&T>;

    /// Returns the largest key, or `None` if the tree is empty.
    fn max(&self) -> Option<&T>;

    /// Returns the keys in ascending order.
    fn keys(&self) -> Vec<&T>;
}
