//! Compressed prefix tree (radix tree)
//!
//! Chains of single-child nodes are collapsed into nodes holding
//! multi-unit prefixes:
//! - Insertion splits a node when a new key diverges mid-prefix
//! - Removal detaches emptied nodes and folds single-child remnants
//! - Walks visit keys in sorted order, optionally bounded to a prefix

mod node;
mod tree;

pub use tree::{RadixTree, Walk};
