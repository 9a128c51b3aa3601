//! Property tests over the public API.

mod set;
mod tree;

use kvtree::tree::Tree;

/// Builds a tree by inserting every pair in order, so later pairs win.
pub(crate) fn build<K: Ord + Clone, V: Clone>(pairs: &[(K, V)]) -> Tree<K, V> {
    pairs.iter().cloned().collect()
}

/// Whether the in-order walk is strictly ascending, i.e. the tree is a valid BST.
pub(crate) fn is_ordered<K: Ord, V>(tree: &Tree<K, V>) -> bool {
    let keys: Vec<_> = tree.iter().map(|(k, _)| k).collect();
    keys.windows(2).all(|pair| pair[0] < pair[1])
}
