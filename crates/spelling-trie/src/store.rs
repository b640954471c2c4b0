// Arena-backed trie store
//
// Words arrive here already canonicalized; the store treats them as plain
// character sequences. Nodes are created lazily the first time a path is
// inserted and are never freed: removing a word only rewrites its terminal
// marker to the tombstone rank 0.

use spelling_core::Rank;

use crate::node::{NodeId, TrieNode};
use crate::{MAX_NODES, StoreError};

/// Owner of every node of one trie.
#[derive(Debug, Clone)]
pub struct TrieStore {
    nodes: Vec<TrieNode>,
    /// Number of nodes whose terminal rank is non-zero.
    live_words: usize,
}

impl TrieStore {
    /// Create a store holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            live_words: 0,
        }
    }

    /// Borrow the node at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this store.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    /// Walk `word` from the root, returning the node where it ends.
    ///
    /// Stops at the first character without a matching child.
    pub fn find(&self, word: &str) -> Option<NodeId> {
        self.find_from(NodeId::ROOT, word)
    }

    /// Walk `suffix` starting at `start`.
    pub fn find_from(&self, start: NodeId, suffix: &str) -> Option<NodeId> {
        let mut current = start;
        for c in suffix.chars() {
            current = self.node(current).child(c)?;
        }
        Some(current)
    }

    /// The raw terminal marker for `word` (tombstones included).
    pub fn terminal(&self, word: &str) -> Option<Rank> {
        self.find(word).and_then(|id| self.node(id).terminal())
    }

    /// The rank of `word` if it is a live stored word.
    pub fn rank(&self, word: &str) -> Option<Rank> {
        self.find(word).and_then(|id| self.node(id).word_rank())
    }

    /// Returns `true` if `word` is a live stored word.
    pub fn contains(&self, word: &str) -> bool {
        self.rank(word).is_some()
    }

    /// Walk `word` from the root, creating missing nodes along the way.
    pub fn ensure_path(&mut self, word: &str) -> Result<NodeId, StoreError> {
        let mut current = NodeId::ROOT;
        for c in word.chars() {
            current = match self.node(current).child(c) {
                Some(next) => next,
                None => {
                    let next = self.alloc()?;
                    self.nodes[current.index()].insert_edge(c, next);
                    next
                }
            };
        }
        Ok(current)
    }

    /// Set the terminal rank of `word` to exactly `rank`, overwriting any
    /// previous value. A rank of 0 tombstones the word.
    pub fn set_rank(&mut self, word: &str, rank: Rank) -> Result<NodeId, StoreError> {
        let id = self.ensure_path(word)?;
        self.write_terminal(id, rank);
        Ok(id)
    }

    /// Add one to the terminal rank of `word`, treating an absent marker or
    /// a tombstone as 0. Returns the new rank.
    pub fn increment_rank(&mut self, word: &str) -> Result<Rank, StoreError> {
        let id = self.ensure_path(word)?;
        let rank = self
            .node(id)
            .terminal()
            .unwrap_or(0)
            .saturating_add(1);
        self.write_terminal(id, rank);
        Ok(rank)
    }

    /// Tombstone `word` if it is a live word. Returns `true` if it was.
    ///
    /// Never allocates: a word that is not stored leaves the trie untouched.
    pub fn tombstone(&mut self, word: &str) -> bool {
        match self.find(word) {
            Some(id) if self.node(id).is_word() => {
                self.write_terminal(id, 0);
                true
            }
            _ => false,
        }
    }

    /// Total number of nodes, including the root and tombstoned paths.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live (non-tombstoned) words.
    pub fn word_count(&self) -> usize {
        self.live_words
    }

    /// Returns `true` if no live word is stored.
    pub fn is_empty(&self) -> bool {
        self.live_words == 0
    }

    fn write_terminal(&mut self, id: NodeId, rank: Rank) {
        let node = &mut self.nodes[id.index()];
        let was_word = node.is_word();
        node.set_terminal(rank);
        match (was_word, rank > 0) {
            (false, true) => self.live_words += 1,
            (true, false) => self.live_words -= 1,
            _ => {}
        }
    }

    fn alloc(&mut self) -> Result<NodeId, StoreError> {
        let index = self.nodes.len();
        if index > MAX_NODES {
            return Err(StoreError::CapacityExceeded { max: MAX_NODES });
        }
        self.nodes.push(TrieNode::default());
        Ok(NodeId::from_index(index))
    }
}

impl Default for TrieStore {
    fn default() -> Self {
        Self::new()
    }
}
