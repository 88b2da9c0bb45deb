use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::search_tree::SearchTree;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
/// ```
/// use balanced_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
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
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet {
            tree: None,
            len: 0,
        }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set unchanged if the key
    /// already exists.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.search(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Deletes a key from the set. If the key exists in the set, it will return the removed key.
    /// Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.delete(&1), Some(1));
    /// assert_eq!(set.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &T) -> Option<T> {
        let ret = tree::remove(&mut self.tree, key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.search(&0));
    /// assert!(set.search(&1));
    /// ```
    pub fn search(&self, key: &T) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the underlying tree, which is zero for an empty set.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = (0..7).collect();
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        tree::floor(&self.tree, key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        tree::ceil(&self.tree, key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::first(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::last(&self.tree)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<'_, T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T> SearchTree<T> for AvlSet<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> bool {
        AvlSet::insert(self, key)
    }

    fn delete(&mut self, key: &T) -> bool {
        AvlSet::delete(self, key).is_some()
    }

    fn search(&self, key: &T) -> bool {
        AvlSet::search(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        AvlSet::clear(self)
    }

    fn height(&self) -> usize {
        AvlSet::height(self)
    }

    fn min(&self) -> Option<&T> {
        AvlSet::min(self)
    }

    fn max(&self) -> Option<&T> {
        AvlSet::max(self)
    }

    fn keys(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T> IntoIterator for AvlSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T>
where
    T: Ord,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a + Ord,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = *self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node { ref key, ref right, .. } = *node;
            self.current = right;
            key
        })
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for AvlSet<T>
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

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
