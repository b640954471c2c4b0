// Edit generators: each applies one class of single-character edit to a
// word and keeps the candidates the lexicon accepts.

use spelling_core::RankedWord;
use spelling_core::normalize::is_numeric;

use super::status::SuggestionStatus;
use crate::lexicon::Lexicon;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// One class of edit operation.
///
/// Implementations walk the word tracked by `status`, build every candidate
/// of their class in a fixed order, and pass each one to
/// [`check_candidate`].
pub trait EditGenerator: Send + Sync {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>);
}

/// Check one candidate buffer and record it if it is a known word or a
/// number.
///
/// Candidates are trimmed before the check, so an edit that puts a space at
/// either end of the word is looked up (and reported) without it. Numbers
/// are accepted with rank 0 without consulting the lexicon, the same answer
/// a lookup gives for them. A candidate that trims to nothing is never
/// reported.
pub fn check_candidate(lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>, buffer: &[char]) {
    if status.should_abort() {
        return;
    }
    status.charge();
    let candidate: String = buffer.iter().collect();
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return;
    }
    let rank = if is_numeric(trimmed) {
        Some(0)
    } else {
        lexicon.rank_of(trimmed)
    };
    if let Some(rank) = rank {
        let word = if trimmed.len() == candidate.len() {
            candidate
        } else {
            trimmed.to_string()
        };
        status.add_found(RankedWord::new(word, rank));
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Remove each character in turn, left to right.
pub struct Deletion;

impl EditGenerator for Deletion {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let mut buffer = Vec::with_capacity(word.len());
        for i in 0..word.len() {
            if status.should_abort() {
                break;
            }
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            check_candidate(lexicon, status, &buffer);
        }
    }
}

// ---------------------------------------------------------------------------
// Transposition
// ---------------------------------------------------------------------------

/// Swap each pair of adjacent characters, left to right.
///
/// Equal neighbours are still swapped; the resulting candidate is the word
/// itself.
pub struct Transposition;

impl EditGenerator for Transposition {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        if word.len() < 2 {
            return;
        }
        let mut buffer = word.to_vec();
        for i in 0..word.len() - 1 {
            if status.should_abort() {
                break;
            }
            buffer.swap(i, i + 1);
            check_candidate(lexicon, status, &buffer);
            buffer.swap(i, i + 1);
        }
    }
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace each position with every alphabet character.
///
/// Positions are the outer loop, alphabet order the inner one. Replacing a
/// character with itself is not skipped.
pub struct Substitution {
    pub alphabet: Vec<char>,
}

impl EditGenerator for Substitution {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let mut buffer = word.to_vec();
        for i in 0..word.len() {
            let original = buffer[i];
            for &c in &self.alphabet {
                if status.should_abort() {
                    return;
                }
                buffer[i] = c;
                check_candidate(lexicon, status, &buffer);
            }
            buffer[i] = original;
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert every alphabet character at each of the `len + 1` gaps.
pub struct Insertion {
    pub alphabet: Vec<char>,
}

impl EditGenerator for Insertion {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let mut buffer = Vec::with_capacity(word.len() + 1);
        for i in 0..=word.len() {
            for &c in &self.alphabet {
                if status.should_abort() {
                    return;
                }
                buffer.clear();
                buffer.extend_from_slice(&word[..i]);
                buffer.push(c);
                buffer.extend_from_slice(&word[i..]);
                check_candidate(lexicon, status, &buffer);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spelling_core::Rank;
    use spelling_core::alphabet::EDIT_ALPHABET;

    /// Accepts a fixed list of words; records every word it is asked about.
    struct MockLexicon {
        words: Vec<(String, Rank)>,
        asked: std::cell::RefCell<Vec<String>>,
    }

    impl MockLexicon {
        fn new(words: &[(&str, Rank)]) -> Self {
            Self {
                words: words.iter().map(|&(w, r)| (w.to_string(), r)).collect(),
                asked: Default::default(),
            }
        }

        fn asked(&self) -> Vec<String> {
            self.asked.borrow().clone()
        }
    }

    impl Lexicon for MockLexicon {
        fn rank_of(&self, word: &str) -> Option<Rank> {
            self.asked.borrow_mut().push(word.to_string());
            self.words.iter().find(|(w, _)| w == word).map(|&(_, r)| r)
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run(generator: &dyn EditGenerator, lexicon: &MockLexicon, word: &str) -> Vec<RankedWord> {
        let word = chars(word);
        let mut status = SuggestionStatus::new(&word, 1_000);
        generator.generate(lexicon, &mut status);
        status.into_found()
    }

    fn alphabet() -> Vec<char> {
        EDIT_ALPHABET.to_vec()
    }

    // --- Deletion ---

    #[test]
    fn deletion_tries_each_position_in_order() {
        let lexicon = MockLexicon::new(&[]);
        run(&Deletion, &lexicon, "abc");
        assert_eq!(lexicon.asked(), vec!["bc", "ac", "ab"]);
    }

    #[test]
    fn deletion_finds_word() {
        let lexicon = MockLexicon::new(&[("hell", 400)]);
        let found = run(&Deletion, &lexicon, "helll");
        // Each of the three trailing 'l' deletions yields "hell".
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|f| f == &RankedWord::new("hell", 400)));
    }

    #[test]
    fn deletion_accepts_numbers_without_lexicon() {
        let lexicon = MockLexicon::new(&[]);
        let found = run(&Deletion, &lexicon, "1,000");
        assert_eq!(found, vec![RankedWord::new("1000", 0)]);
        assert!(!lexicon.asked().contains(&"1000".to_string()));
    }

    #[test]
    fn deleting_only_char_checks_nothing() {
        let lexicon = MockLexicon::new(&[]);
        let found = run(&Deletion, &lexicon, "a");
        assert!(found.is_empty());
        assert!(lexicon.asked().is_empty());
    }

    // --- Transposition ---

    #[test]
    fn transposition_swaps_neighbours() {
        let lexicon = MockLexicon::new(&[]);
        run(&Transposition, &lexicon, "abc");
        assert_eq!(lexicon.asked(), vec!["bac", "acb"]);
    }

    #[test]
    fn transposition_of_equal_letters_yields_word() {
        let lexicon = MockLexicon::new(&[("hell", 400)]);
        let found = run(&Transposition, &lexicon, "hell");
        assert_eq!(found, vec![RankedWord::new("hell", 400)]);
    }

    #[test]
    fn transposition_needs_two_chars() {
        let lexicon = MockLexicon::new(&[]);
        run(&Transposition, &lexicon, "a");
        assert!(lexicon.asked().is_empty());
    }

    // --- Substitution ---

    #[test]
    fn substitution_checks_len_times_alphabet() {
        let lexicon = MockLexicon::new(&[]);
        run(&Substitution { alphabet: alphabet() }, &lexicon, "ab");
        // Space substitutions at either end are trimmed to one character.
        assert_eq!(lexicon.asked().len(), 2 * EDIT_ALPHABET.len());
        assert_eq!(lexicon.asked()[0], "ab");
        assert_eq!(lexicon.asked()[1], "bb");
    }

    #[test]
    fn substitution_finds_word() {
        let lexicon = MockLexicon::new(&[("yell", 100)]);
        let found = run(&Substitution { alphabet: alphabet() }, &lexicon, "hell");
        assert_eq!(found, vec![RankedWord::new("yell", 100)]);
    }

    // --- Insertion ---

    #[test]
    fn insertion_covers_every_gap() {
        let lexicon = MockLexicon::new(&[]);
        let word = chars("ab");
        let mut status = SuggestionStatus::new(&word, 1_000);
        Insertion { alphabet: alphabet() }.generate(&lexicon, &mut status);
        assert_eq!(status.cost(), 3 * EDIT_ALPHABET.len());
        assert_eq!(lexicon.asked()[0], "aab");
    }

    #[test]
    fn insertion_of_space_at_end_is_trimmed() {
        let lexicon = MockLexicon::new(&[("hell", 400)]);
        let found = run(&Insertion { alphabet: vec![' '] }, &lexicon, "hell");
        // Leading and trailing spaces trim back to the word itself.
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].word, "hell");
    }

    #[test]
    fn insertion_of_hyphen_and_space() {
        let lexicon = MockLexicon::new(&[("wilkes-barre", 50), ("cape cod", 60)]);
        let found = run(&Insertion { alphabet: alphabet() }, &lexicon, "wilkesbarre");
        assert_eq!(found, vec![RankedWord::new("wilkes-barre", 50)]);
        let found = run(&Insertion { alphabet: alphabet() }, &lexicon, "capecod");
        assert_eq!(found, vec![RankedWord::new("cape cod", 60)]);
    }

    // --- Budget ---

    #[test]
    fn generators_stop_when_budget_spent() {
        let lexicon = MockLexicon::new(&[]);
        let word = chars("abcdef");
        let mut status = SuggestionStatus::new(&word, 5);
        Substitution { alphabet: alphabet() }.generate(&lexicon, &mut status);
        assert_eq!(status.cost(), 5);
        Insertion { alphabet: alphabet() }.generate(&lexicon, &mut status);
        assert_eq!(status.cost(), 5);
        assert_eq!(lexicon.asked().len(), 5);
    }

    #[test]
    fn all_space_candidate_is_not_checked() {
        let lexicon = MockLexicon::new(&[]);
        let word = chars("a");
        let mut status = SuggestionStatus::new(&word, 100);
        Substitution { alphabet: vec![' '] }.generate(&lexicon, &mut status);
        assert_eq!(status.cost(), 1);
        assert!(lexicon.asked().is_empty());
    }
}
