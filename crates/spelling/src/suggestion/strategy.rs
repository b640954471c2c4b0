// Two-round edit-distance suggestion strategy

use spelling_core::RankedWord;
use spelling_core::alphabet::EDIT_ALPHABET;
use tracing::{debug, trace};

use super::generators::{Deletion, EditGenerator, Insertion, Substitution, Transposition};
use super::status::{SuggestionList, SuggestionStatus};
use crate::lexicon::Lexicon;

/// Ordered list of edit generators plus the suggestion procedure built on
/// top of them.
///
/// A suggestion run has two rounds:
///
/// 1. every generator is applied once to the misspelled word (edit distance 1);
/// 2. if round one found fewer words than the limit, every generator is
///    applied again to each word round one found (edit distance 2).
///
/// Each round's hits are stably sorted by rank, highest first. Round one
/// hits always precede round two hits in the final list; duplicates keep
/// their first position.
///
/// All candidate checks of one run share a single cost budget.
pub struct SuggestionStrategy {
    generators: Vec<Box<dyn EditGenerator>>,
}

impl SuggestionStrategy {
    pub fn new(generators: Vec<Box<dyn EditGenerator>>) -> Self {
        Self { generators }
    }

    /// Apply every generator once to `status`'s word.
    pub fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        for generator in &self.generators {
            if status.should_abort() {
                break;
            }
            generator.generate(lexicon, status);
        }
    }

    /// All single-edit hits for `word`, in generation order, duplicates kept.
    ///
    /// Returns the hits together with the number of candidate checks spent.
    pub fn edits(&self, lexicon: &dyn Lexicon, word: &str, max_cost: usize) -> (Vec<RankedWord>, usize) {
        let chars: Vec<char> = word.chars().collect();
        let mut status = SuggestionStatus::new(&chars, max_cost);
        self.generate(lexicon, &mut status);
        let cost = status.cost();
        (status.into_found(), cost)
    }

    /// Ranked correction candidates for `word`, at most `limit` of them.
    ///
    /// `word` must already be canonical. `limit` must be non-zero.
    pub fn suggest(
        &self,
        lexicon: &dyn Lexicon,
        word: &str,
        limit: usize,
        max_cost: usize,
    ) -> Vec<RankedWord> {
        let (mut edit1, spent) = self.edits(lexicon, word, max_cost);
        let mut budget = max_cost - spent.min(max_cost);

        let mut edit2 = Vec::new();
        if edit1.len() < limit {
            for hit in &edit1 {
                if budget == 0 {
                    trace!(word, "suggestion budget exhausted in second round");
                    break;
                }
                let (found, spent) = self.edits(lexicon, &hit.word, budget);
                budget -= spent.min(budget);
                edit2.extend(found);
            }
        }

        // Stable sorts: equal ranks keep generation order.
        edit1.sort_by(|a, b| b.rank.cmp(&a.rank));
        edit2.sort_by(|a, b| b.rank.cmp(&a.rank));

        let mut list = SuggestionList::new(limit);
        list.extend(edit1);
        list.extend(edit2);
        let suggestions = list.into_words();

        debug!(
            word,
            cost = max_cost - budget,
            suggestions = suggestions.len(),
            "generated suggestions"
        );
        suggestions
    }
}

impl Default for SuggestionStrategy {
    /// Deletion, transposition, substitution and insertion over the
    /// standard edit alphabet, in that order.
    fn default() -> Self {
        Self::new(vec![
            Box::new(Deletion),
            Box::new(Transposition),
            Box::new(Substitution {
                alphabet: EDIT_ALPHABET.to_vec(),
            }),
            Box::new(Insertion {
                alphabet: EDIT_ALPHABET.to_vec(),
            }),
        ])
    }
}
