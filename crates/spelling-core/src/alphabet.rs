// Character set for generated edits
//
// Substitutions and insertions only ever introduce characters from this
// set. Words containing other characters can still be stored and found by
// exact lookup, but are only reachable as suggestions through deletions and
// transpositions.

/// Characters tried at every position by the substitution and insertion
/// generators, in the order they are tried.
pub const EDIT_ALPHABET: [char; 29] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '\'', '-', ' ',
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_letters_and_separators() {
        assert_eq!(EDIT_ALPHABET.len(), 29);
        assert!(('a'..='z').all(|c| EDIT_ALPHABET.contains(&c)));
        assert_eq!(&EDIT_ALPHABET[26..], &['\'', '-', ' ']);
    }

    #[test]
    fn uppercase_and_digits_are_not_edit_chars() {
        for c in ['A', '7', '!', '\u{00E4}'] {
            assert!(!EDIT_ALPHABET.contains(&c));
        }
    }
}
