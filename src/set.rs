//! An ordered set of bare values, built on [`Tree`] with `()` for every value.
//!
//! Unlike [`Tree::delete`], removing a value that isn't there is an error.
//!
//! # Examples
//!
//! ```
//! use kvtree::error::TreeError;
//! use kvtree::set::Set;
//!
//! let mut set: Set<_> = vec![50, 30, 70, 20, 40, 60, 80].into_iter().collect();
//!
//! assert_eq!(set.pre_order(), vec![&50, &30, &20, &40, &70, &60, &80]);
//! assert_eq!(set.post_order(), vec![&20, &40, &30, &60, &80, &70, &50]);
//!
//! assert_eq!(set.remove(&30), Ok(30));
//! assert_eq!(set.remove(&30), Err(TreeError::KeyNotFound));
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::ops::Add;

use crate::error::TreeError;
use crate::tree::{self, Tree};

/// An ordered set of unique values.
pub struct Set<T> {
    tree: Tree<T, ()>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T> Set<T> {
    /// Generate a new, empty `Set`.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// Whether the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The number of values in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// See [`Tree::height`].
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Adds `value` to the set. Returns `false`, leaving the set unchanged, if it was already
    /// there.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        self.tree.insert(value, ()).is_none()
    }

    /// Whether `value` is in the set.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.tree.contains_key(value)
    }

    /// Removes `value` from the set and returns it.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the set is empty and [`TreeError::KeyNotFound`] if it
    /// doesn't hold `value`.
    pub fn remove(&mut self, value: &T) -> Result<T, TreeError>
    where
        T: Ord,
    {
        self.tree.try_remove_entry(value).map(|(value, ())| value)
    }

    /// The smallest value.
    pub fn min(&self) -> Option<&T> {
        self.tree.first().map(|(value, _)| value)
    }

    /// The largest value.
    pub fn max(&self) -> Option<&T> {
        self.tree.last().map(|(value, _)| value)
    }

    /// A lazy iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.tree.iter())
    }

    /// All values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// All values with each node ahead of its left then right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        self.tree.pre_order().into_iter().map(|(v, _)| v).collect()
    }

    /// All values with each node after its left then right subtree.
    pub fn post_order(&self) -> Vec<&T> {
        self.tree.post_order().into_iter().map(|(v, _)| v).collect()
    }

    /// Builds a new set from the values for which `predicate` returns `true`.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Ord + Clone,
        P: FnMut(&T) -> bool,
    {
        Self {
            tree: self.tree.filter(|value, _| predicate(value)),
        }
    }

    /// Folds every value into an accumulator in ascending order. An empty set returns `init`
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtree::set::Set;
    ///
    /// let set: Set<_> = vec![3, 1, 2].into_iter().collect();
    /// assert_eq!(set.fold(0, |acc, v| acc + v), 6);
    /// assert_eq!(set.fold(1, |acc, v| acc * v), 6);
    /// ```
    pub fn fold<'a, A, F>(&'a self, init: A, f: F) -> A
    where
        F: FnMut(A, &'a T) -> A,
    {
        self.iter().fold(init, f)
    }

    /// Folds every value into an accumulator seeded with the smallest value. An empty set
    /// returns `None`.
    pub fn reduce<F>(&self, f: F) -> Option<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let mut iter = self.iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, f))
    }

    /// The union of both sets. See [`Tree::concat`].
    pub fn concat(self, other: Self) -> Self
    where
        T: Ord,
    {
        Self {
            tree: self.tree.concat(other.tree),
        }
    }

    /// See [`Tree::structural_eq`].
    pub fn structural_eq(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.tree.structural_eq(&other.tree)
    }
}

impl<T: Ord> Add for Set<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().map(|value| (value, ())).collect(),
        }
    }
}

impl<T: Ord> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tree.extend(iter.into_iter().map(|value| (value, ())));
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over a [`Set`].
pub struct Iter<'a, T>(tree::Iter<'a, T, ()>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(value, _)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
