//! Errors reported by the fail-fast operations of [`Tree`][crate::tree::Tree] and
//! [`Set`][crate::set::Set].

use thiserror::Error;

/// Why a fail-fast delete could not remove anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The tree had no entries at all.
    #[error("cannot delete from an empty tree")]
    EmptyTree,
    /// The tree had entries but none with the requested key.
    #[error("key not found in tree")]
    KeyNotFound,
}
