//! Character trie storing ranked words.
//!
//! All nodes live in a single arena owned by a [`TrieStore`](store::TrieStore);
//! nodes refer to their children by [`NodeId`](node::NodeId) index rather than
//! by pointer. The root is always index 0.
//!
//! # Architecture
//!
//! - [`node`] -- node layout: sorted edge list plus optional terminal rank
//! - [`store`] -- path creation, walking, rank updates
//! - [`walk`] -- depth-bounded collection of the words below a node

pub mod node;
pub mod store;
pub mod walk;

pub use node::{NodeId, TrieNode};
pub use store::TrieStore;

/// Error type for trie mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The arena cannot address another node.
    #[error("trie node capacity exceeded: at most {max} nodes can be stored")]
    CapacityExceeded { max: usize },
}

/// Maximum number of nodes a single store can hold.
pub const MAX_NODES: usize = u32::MAX as usize;
