// Trie node layout

use spelling_core::Rank;

/// Index of a node within its store's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node of every store.
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index <= crate::MAX_NODES);
        NodeId(index as u32)
    }

    /// Position of this node in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single trie node.
///
/// Edges are kept sorted by character so that child lookup is a binary
/// search. Most nodes have only a handful of children, which keeps the
/// edge list short and contiguous.
///
/// The terminal marker is tri-state:
/// - `None`: the path is only a prefix of stored words
/// - `Some(0)`: a removed word (tombstone)
/// - `Some(rank)`: a stored word
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    edges: Vec<(char, NodeId)>,
    terminal: Option<Rank>,
}

impl TrieNode {
    /// Return the child reached through `c`, if any.
    pub fn child(&self, c: char) -> Option<NodeId> {
        self.edges
            .binary_search_by_key(&c, |&(label, _)| label)
            .ok()
            .map(|pos| self.edges[pos].1)
    }

    /// All outgoing edges, sorted by character.
    pub fn edges(&self) -> &[(char, NodeId)] {
        &self.edges
    }

    /// The raw terminal marker.
    pub fn terminal(&self) -> Option<Rank> {
        self.terminal
    }

    /// The rank of the word ending here, if it is a live (non-tombstoned) word.
    pub fn word_rank(&self) -> Option<Rank> {
        self.terminal.filter(|&rank| rank > 0)
    }

    /// Returns `true` if a live word ends at this node.
    pub fn is_word(&self) -> bool {
        self.word_rank().is_some()
    }

    pub(crate) fn set_terminal(&mut self, rank: Rank) {
        self.terminal = Some(rank);
    }

    /// Add an edge, keeping the list sorted. The caller guarantees that no
    /// edge for `c` exists yet.
    pub(crate) fn insert_edge(&mut self, c: char, child: NodeId) {
        match self.edges.binary_search_by_key(&c, |&(label, _)| label) {
            Ok(pos) => self.edges[pos].1 = child,
            Err(pos) => self.edges.insert(pos, (c, child)),
        }
    }
}
