// Depth-bounded subtree walk
//
// Collects every live word within `depth` characters below a start node.
// Traversal uses an explicit stack so that very deep tries cannot overflow
// the call stack.

use spelling_core::RankedWord;

use crate::node::NodeId;
use crate::store::TrieStore;

/// One pending node on the traversal stack.
struct Frame {
    node: NodeId,
    /// The word spelled by the path to `node`.
    word: String,
    /// How many more character levels may be descended from `node`.
    remaining: usize,
}

impl TrieStore {
    /// Collect the live words found 1 to `depth` characters below `start`.
    ///
    /// `prefix` is the word spelled by the path to `start`; it is prepended
    /// to every collected word. The word ending at `start` itself is not
    /// included. With `depth == 0` nothing is collected.
    ///
    /// Results are in traversal order; callers sort as needed.
    pub fn collect_words(&self, start: NodeId, prefix: &str, depth: usize) -> Vec<RankedWord> {
        let mut results = Vec::new();
        let mut stack = vec![Frame {
            node: start,
            word: prefix.to_string(),
            remaining: depth,
        }];

        while let Some(frame) = stack.pop() {
            if frame.remaining == 0 {
                continue;
            }
            let node = self.node(frame.node);

            // Words one level down are reported before descending further.
            for &(c, child) in node.edges() {
                if let Some(rank) = self.node(child).word_rank() {
                    let mut word = frame.word.clone();
                    word.push(c);
                    results.push(RankedWord::new(word, rank));
                }
            }

            // Push in reverse so children are expanded in edge order.
            for &(c, child) in node.edges().iter().rev() {
                let mut word = frame.word.clone();
                word.push(c);
                stack.push(Frame {
                    node: child,
                    word,
                    remaining: frame.remaining - 1,
                });
            }
        }

        results
    }
}
