//! The owning node structure behind [`Tree`][crate::tree::Tree] and
//! [`Set`][crate::set::Set], and the algorithms that rewire links between nodes.
//!
//! Every walk here uses a loop or an explicit stack, so a tree that has degraded into a
//! list costs heap memory rather than call stack.

use std::cmp::Ordering;
use std::mem;

/// An optional, exclusively owned subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// Returns the link holding `key`, or the empty link where a node for `key` belongs.
pub(crate) fn seek<'a, K, V>(mut link: &'a mut Link<K, V>, key: &K) -> &'a mut Link<K, V>
where
    K: Ord,
{
    loop {
        let ordering = link.as_deref().map(|node| key.cmp(&node.key));
        link = match (ordering, link) {
            (Some(Ordering::Less), Some(node)) => &mut node.left,
            (Some(Ordering::Greater), Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

/// Shared counterpart of [`seek`] which only reports the node holding `key`.
pub(crate) fn find<'a, K, V>(mut node: Option<&'a Node<K, V>>, key: &K) -> Option<&'a Node<K, V>>
where
    K: Ord,
{
    while let Some(n) = node {
        node = match key.cmp(&n.key) {
            Ordering::Less => n.left.as_deref(),
            Ordering::Equal => return Some(n),
            Ordering::Greater => n.right.as_deref(),
        };
    }
    None
}

/// Removes the node at `link` and returns its entry, or `None` if `link` is empty.
///
/// A node with two children stays where it is and takes over the key and value of its
/// in-order successor. The successor has no left child, so detaching it from the right
/// subtree is the one child (or leaf) case.
pub(crate) fn unlink<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        if let Some(successor) = take_min(&mut node.right) {
            let Node { key, value, .. } = *successor;
            let key = mem::replace(&mut node.key, key);
            let value = mem::replace(&mut node.value, value);
            return Some((key, value));
        }
    }

    let mut node = link.take()?;
    *link = node.left.take().or_else(|| node.right.take());
    let Node { key, value, .. } = *node;
    Some((key, value))
}

/// Detaches the minimum node of the subtree at `link`, leaving its right child in its place.
pub(crate) fn take_min<K, V>(mut link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

pub(crate) fn min<K, V>(mut node: &Node<K, V>) -> &Node<K, V> {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    node
}

pub(crate) fn max<K, V>(mut node: &Node<K, V>) -> &Node<K, V> {
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    node
}

/// Splits a subtree into the nodes with keys below `pivot`, the entry at `pivot` (if any),
/// and the nodes with keys above `pivot`. Nodes are moved, never copied.
///
/// The walk follows the search path for `pivot`. Nodes above `pivot` hang off the open left
/// slot of the upper tree and nodes below it off the open right slot of the lower tree.
pub(crate) fn split<K, V>(link: Link<K, V>, pivot: &K) -> (Link<K, V>, Option<(K, V)>, Link<K, V>)
where
    K: Ord,
{
    let (mut lower, mut upper) = (None, None);
    let mut lower_slot = &mut lower;
    let mut upper_slot = &mut upper;
    let mut shared = None;

    let mut current = link;
    while let Some(mut node) = current {
        match pivot.cmp(&node.key) {
            Ordering::Less => {
                current = node.left.take();
                upper_slot = &mut upper_slot.insert(node).left;
            }
            Ordering::Greater => {
                current = node.right.take();
                lower_slot = &mut lower_slot.insert(node).right;
            }
            Ordering::Equal => {
                *lower_slot = node.left.take();
                *upper_slot = node.right.take();
                let Node { key, value, .. } = *node;
                shared = Some((key, value));
                break;
            }
        }
    }
    (lower, shared, upper)
}

/// A pending piece of [`merge`].
enum Step<K, V> {
    /// Merge these two subtrees and push the result.
    Merge(Link<K, V>, Link<K, V>),
    /// Pop the merged right then left subtrees and hang them off this node.
    Attach(Box<Node<K, V>>),
}

/// Merges two subtrees into one holding the union of their entries. When both hold the same
/// key the entry from `right` is kept. `collisions` is bumped once per shared key.
///
/// The roots are compared and the smaller one becomes the root of the result. The larger
/// root's subtree on the near side may hold keys on either side of the new root, so that
/// side is split at the new root's key before the halves are merged into place. Pending
/// merges live on a heap allocated stack, so list shaped trees don't exhaust the call stack.
pub(crate) fn merge<K, V>(left: Link<K, V>, right: Link<K, V>, collisions: &mut usize) -> Link<K, V>
where
    K: Ord,
{
    let mut steps = vec![Step::Merge(left, right)];
    let mut merged: Vec<Link<K, V>> = Vec::new();

    while let Some(step) = steps.pop() {
        let (mut a, mut b) = match step {
            Step::Merge(None, link) | Step::Merge(link, None) => {
                merged.push(link);
                continue;
            }
            Step::Merge(Some(a), Some(b)) => (a, b),
            Step::Attach(mut node) => {
                node.right = merged.pop().flatten();
                node.left = merged.pop().flatten();
                merged.push(Some(node));
                continue;
            }
        };

        let (root, left_pair, right_pair) = match a.key.cmp(&b.key) {
            Ordering::Less => {
                let (lower, shared, upper) = split(b.left.take(), &a.key);
                if let Some((_, value)) = shared {
                    *collisions += 1;
                    a.value = value;
                }
                b.left = upper;
                let left_pair = (a.left.take(), lower);
                let right_pair = (a.right.take(), Some(b));
                (a, left_pair, right_pair)
            }
            Ordering::Greater => {
                let (lower, shared, upper) = split(a.left.take(), &b.key);
                if shared.is_some() {
                    *collisions += 1;
                }
                a.left = upper;
                let left_pair = (lower, b.left.take());
                let right_pair = (Some(a), b.right.take());
                (b, left_pair, right_pair)
            }
            Ordering::Equal => {
                *collisions += 1;
                let left_pair = (a.left.take(), b.left.take());
                let right_pair = (a.right.take(), b.right.take());
                (b, left_pair, right_pair)
            }
        };

        // The left merge is popped first, so its result sits below the right one.
        steps.push(Step::Attach(root));
        steps.push(Step::Merge(right_pair.0, right_pair.1));
        steps.push(Step::Merge(left_pair.0, left_pair.1));
    }
    merged.pop().flatten()
}

/// Copies a subtree node by node, keeping its shape.
pub(crate) fn clone_subtree<K, V>(root: Option<&Node<K, V>>) -> Link<K, V>
where
    K: Clone,
    V: Clone,
{
    let mut cloned = None;
    let mut stack: Vec<(&Node<K, V>, &mut Link<K, V>)> = Vec::new();
    if let Some(root) = root {
        stack.push((root, &mut cloned));
    }
    while let Some((source, slot)) = stack.pop() {
        let node = slot.insert(Node::new_boxed(source.key.clone(), source.value.clone()));
        let Node { left, right, .. } = &mut **node;
        if let Some(source_left) = source.left.as_deref() {
            stack.push((source_left, left));
        }
        if let Some(source_right) = source.right.as_deref() {
            stack.push((source_right, right));
        }
    }
    cloned
}

/// Nodes in self, left, right order.
pub(crate) fn pre_order<K, V>(root: Option<&Node<K, V>>) -> Vec<&Node<K, V>> {
    let mut visited = Vec::new();
    let mut stack: Vec<_> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visited.push(node);
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }
    visited
}

/// Nodes in left, right, self order. Built as self, right, left and then reversed.
pub(crate) fn post_order<K, V>(root: Option<&Node<K, V>>) -> Vec<&Node<K, V>> {
    let mut visited = Vec::new();
    let mut stack: Vec<_> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visited.push(node);
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    visited.reverse();
    visited
}

/// The number of nodes on the longest path from `root` down to a leaf.
pub(crate) fn height<K, V>(root: Option<&Node<K, V>>) -> usize {
    let mut tallest = 0;
    let mut stack: Vec<_> = root.into_iter().map(|node| (node, 1)).collect();
    while let Some((node, depth)) = stack.pop() {
        tallest = tallest.max(depth);
        stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
        stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
    }
    tallest
}

/// Whether both subtrees have the same shape and equal entries at every position.
pub(crate) fn structural_eq<K, V>(a: Option<&Node<K, V>>, b: Option<&Node<K, V>>) -> bool
where
    K: PartialEq,
    V: PartialEq,
{
    let mut stack = vec![(a, b)];
    while let Some(pair) = stack.pop() {
        match pair {
            (None, None) => {}
            (Some(a), Some(b)) if a.key == b.key && a.value == b.value => {
                stack.push((a.left.as_deref(), b.left.as_deref()));
                stack.push((a.right.as_deref(), b.right.as_deref()));
            }
            _ => return false,
        }
    }
    true
}

/// Drops a subtree one node at a time. The derived drop glue of a `Box<Node>` recurses into
/// both children, which overflows the stack on a list shaped tree.
pub(crate) fn dismantle<K, V>(root: Link<K, V>) {
    let mut stack: Vec<_> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
