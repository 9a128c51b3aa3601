//! An ordered key-value map stored in an unbalanced Binary Search Tree. Inserting keys in
//! sorted order degrades it into a list, so every walk uses a loop or an explicit stack
//! instead of recursion.
//!
//! # Examples
//!
//! ```
//! use kvtree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(1, "one");
//! assert_eq!(tree.search(&1), Some(&"one"));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert(1, "uno");
//! assert_eq!(tree.search(&1), Some(&"uno"));
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&1), Some("uno"));
//! assert_eq!(tree.search(&1), None);
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::ops::Add;

use tracing::{debug, trace};

use crate::error::TreeError;
use crate::node::{self, Link, Node};

/// An ordered map from `K` to `V`. Keys are kept unique and in ascending order.
///
/// Equality (`==`) compares entries only. Use [`Tree::structural_eq`] to also compare shape.
pub struct Tree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

/// Copies node by node, so the clone has exactly the same shape.
impl<K, V> Clone for Tree<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: node::clone_subtree(self.root.as_deref()),
            len: self.len,
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> PartialEq for Tree<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.same_entries(other)
    }
}

impl<K: Eq, V: Eq> Eq for Tree<K, V> {}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree`. This is the identity of [`Tree::concat`].
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a single entry has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::tree::Tree;
    ///
    /// // Ascending inserts never branch left.
    /// let tree: Tree<_, _> = (0..5).map(|k| (k, ())).collect();
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        node::height(self.root.as_deref())
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value
    /// for an existing key overwrites its value in place and returns the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1, 2), None);
    /// assert_eq!(tree.insert(1, 3), Some(2));
    /// assert_eq!(tree.search(&1), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let link = node::seek(&mut self.root, &key);
        let replaced = match link {
            Some(node) => Some(mem::replace(&mut node.value, value)),
            None => {
                *link = Some(Node::new_boxed(key, value));
                self.len += 1;
                trace!(len = self.len, "inserted new key");
                None
            }
        };
        self.check_invariants();
        replaced
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has
    /// the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 0);
    ///
    /// // A zero value is still present.
    /// assert_eq!(tree.search(&1), Some(&0));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        node::find(self.root.as_deref(), key).map(|n| &n.value)
    }

    /// Whether the tree holds an entry for `key`.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        node::find(self.root.as_deref(), key).is_some()
    }

    /// Deletes the node containing the given key from the tree and returns its value. If the
    /// tree does not contain a node with the key, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.delete(&1), Some(2));
    /// assert_eq!(tree.delete(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    pub(crate) fn remove_entry(&mut self, key: &K) -> Option<(K, V)>
    where
        K: Ord,
    {
        let entry = node::unlink(node::seek(&mut self.root, key))?;
        self.len -= 1;
        trace!(len = self.len, "deleted key");
        self.check_invariants();
        Some(entry)
    }

    /// Like [`Tree::delete`] but reports why nothing was deleted.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::error::TreeError;
    /// use kvtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.try_delete(&1), Err(TreeError::EmptyTree));
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.try_delete(&3), Err(TreeError::KeyNotFound));
    /// assert_eq!(tree.try_delete(&1), Ok(2));
    /// ```
    pub fn try_delete(&mut self, key: &K) -> Result<V, TreeError>
    where
        K: Ord,
    {
        self.try_remove_entry(key).map(|(_, value)| value)
    }

    pub(crate) fn try_remove_entry(&mut self, key: &K) -> Result<(K, V), TreeError>
    where
        K: Ord,
    {
        if self.is_empty() {
            debug!("delete from an empty tree");
            return Err(TreeError::EmptyTree);
        }
        self.remove_entry(key).ok_or_else(|| {
            debug!(len = self.len, "delete of a missing key");
            TreeError::KeyNotFound
        })
    }

    /// The entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.root
            .as_deref()
            .map(node::min)
            .map(|n| (&n.key, &n.value))
    }

    /// The entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.root
            .as_deref()
            .map(node::max)
            .map(|n| (&n.key, &n.value))
    }

    /// A lazy iterator over the entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// All entries in ascending key order (left subtree, node, right subtree).
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::tree::Tree;
    ///
    /// let tree: Tree<_, _> = vec![(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
    /// assert_eq!(tree.in_order(), vec![(&1, &'a'), (&2, &'b'), (&3, &'c')]);
    /// ```
    pub fn in_order(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// All entries with each node ahead of its left then right subtree.
    pub fn pre_order(&self) -> Vec<(&K, &V)> {
        node::pre_order(self.root.as_deref())
            .into_iter()
            .map(|n| (&n.key, &n.value))
            .collect()
    }

    /// All entries with each node after its left then right subtree.
    pub fn post_order(&self) -> Vec<(&K, &V)> {
        node::post_order(self.root.as_deref())
            .into_iter()
            .map(|n| (&n.key, &n.value))
            .collect()
    }

    /// Builds a new tree from `f` applied to every entry, inserted in ascending order of the
    /// original keys. If `f` maps two entries onto the same key, the later one wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::tree::Tree;
    ///
    /// let tree: Tree<_, _> = vec![(1, "a"), (2, "b")].into_iter().collect();
    /// let mapped = tree.map(|k, v| (k * 10, v.to_uppercase()));
    ///
    /// assert_eq!(mapped.search(&20).map(String::as_str), Some("B"));
    /// // The original is untouched.
    /// assert_eq!(tree.search(&2), Some(&"b"));
    /// ```
    pub fn map<K2, V2, F>(&self, mut f: F) -> Tree<K2, V2>
    where
        K2: Ord,
        F: FnMut(&K, &V) -> (K2, V2),
    {
        self.iter().map(|(k, v)| f(k, v)).collect()
    }

    /// Builds a new tree from the entries for which `predicate` returns `true`.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        K: Ord + Clone,
        V: Clone,
        P: FnMut(&K, &V) -> bool,
    {
        self.iter()
            .filter(|(k, v)| predicate(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Folds every entry into an accumulator in ascending key order. An empty tree returns
    /// `init` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::tree::Tree;
    ///
    /// let tree: Tree<_, _> = vec![(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    /// let word = tree.fold(String::new(), |mut acc, (_, c)| {
    ///     acc.push(*c);
    ///     acc
    /// });
    /// assert_eq!(word, "abc");
    /// ```
    pub fn fold<'a, A, F>(&'a self, init: A, f: F) -> A
    where
        F: FnMut(A, (&'a K, &'a V)) -> A,
    {
        self.iter().fold(init, f)
    }

    /// Folds every entry into an accumulator seeded with the first entry, in ascending key
    /// order. An empty tree has nothing to seed with and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::tree::Tree;
    ///
    /// let tree: Tree<_, _> = vec![(1, 10), (2, 20), (3, 30)].into_iter().collect();
    /// let sums = tree.reduce(|(ks, vs), (k, v)| (ks + k, vs + v));
    /// assert_eq!(sums, Some((6, 60)));
    ///
    /// assert_eq!(Tree::<i32, i32>::new().reduce(|acc, _| acc), None);
    /// ```
    pub fn reduce<F>(&self, f: F) -> Option<(K, V)>
    where
        K: Clone,
        V: Clone,
        F: FnMut((K, V), (&K, &V)) -> (K, V),
    {
        let mut iter = self.iter();
        let (k, v) = iter.next()?;
        Some(iter.fold((k.clone(), v.clone()), f))
    }

    /// Combines two trees into one holding every entry of both. When both hold the same key,
    /// the value from `other` is kept.
    ///
    /// Both trees are consumed: their nodes are moved into the result rather than copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::tree::Tree;
    ///
    /// let a: Tree<_, _> = vec![(1, "a"), (2, "a")].into_iter().collect();
    /// let b: Tree<_, _> = vec![(2, "b"), (3, "b")].into_iter().collect();
    ///
    /// let both = a.concat(b);
    /// assert_eq!(both.in_order(), vec![(&1, &"a"), (&2, &"b"), (&3, &"b")]);
    /// ```
    pub fn concat(mut self, mut other: Self) -> Self
    where
        K: Ord,
    {
        let mut collisions = 0;
        let len = self.len + other.len;
        let root = node::merge(self.root.take(), other.root.take(), &mut collisions);
        let merged = Self {
            root,
            len: len - collisions,
        };
        trace!(len = merged.len, collisions, "concatenated trees");
        merged.check_invariants();
        merged
    }

    /// Whether both trees have the same shape and the same entry at every position.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::tree::Tree;
    ///
    /// let a: Tree<_, _> = vec![(1, ()), (2, ())].into_iter().collect();
    /// let b: Tree<_, _> = vec![(2, ()), (1, ())].into_iter().collect();
    ///
    /// assert!(a.same_entries(&b));
    /// assert!(!a.structural_eq(&b));
    /// ```
    pub fn structural_eq(&self, other: &Self) -> bool
    where
        K: PartialEq,
        V: PartialEq,
    {
        node::structural_eq(self.root.as_deref(), other.root.as_deref())
    }

    /// Whether both trees hold the same entries, regardless of shape.
    pub fn same_entries(&self, other: &Self) -> bool
    where
        K: PartialEq,
        V: PartialEq,
    {
        self.len == other.len && self.iter().eq(other.iter())
    }

    /// In tests (or with the `check_invariants` feature), assert that the keys are strictly
    /// ascending and the cached length is right. This walks the whole tree.
    fn check_invariants(&self)
    where
        K: Ord,
    {
        if cfg!(any(test, feature = "check_invariants")) {
            self.assert_ordered();
        }
    }

    fn assert_ordered(&self)
    where
        K: Ord,
    {
        let mut keys = self.iter().map(|(k, _)| k);
        if let Some(mut prev) = keys.next() {
            for key in keys {
                assert!(prev < key, "keys out of order");
                prev = key;
            }
        }
        assert_eq!(self.iter().count(), self.len);
    }
}

impl<K: Ord, V> Add for Tree<K, V> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Tree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for Tree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over a [`Tree`]. It holds the path of nodes whose left subtrees are
/// being visited, so its memory is bounded by the tree's height.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
