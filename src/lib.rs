//! This crate exposes an ordered key-value container backed by a Binary Search Tree,
//! along with a value-only set built on top of it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, the value
//! associated with it, and up to two child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Visiting the left subtree, then the subtree root, then the right subtree
//! yields every entry sorted by key. That ordered walk is what [`tree::Tree::map`],
//! [`tree::Tree::filter`] and [`tree::Tree::fold`] are defined over.
//!
//! The trees here never rebalance. Searching takes `O(height)`, and inserting
//! keys in sorted order makes the height equal to the number of entries.
//!
//! ## Combining trees
//!
//! [`tree::Tree::concat`] merges two trees node by node, keeping the right-hand
//! tree's value when both hold a key. With the empty tree as identity this
//! forms a monoid over the set of entries:
//!
//! ```
//! use kvtree::tree::Tree;
//!
//! let a: Tree<_, _> = vec![(1, 'a'), (2, 'a')].into_iter().collect();
//! let b: Tree<_, _> = vec![(2, 'b'), (3, 'b')].into_iter().collect();
//! let c: Tree<_, _> = vec![(3, 'c'), (4, 'c')].into_iter().collect();
//!
//! let left = (a.clone() + b.clone()) + c.clone();
//! let right = a + (b + c);
//! assert_eq!(left, right);
//! assert_eq!(Tree::new() + left.clone(), left);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
mod node;
pub mod set;
pub mod tree;

#[cfg(test)]
mod test;
