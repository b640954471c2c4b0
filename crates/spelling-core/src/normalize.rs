// Word canonicalization and numeric detection
//
// Every trie operation keys on the canonical form of a word: surrounding
// whitespace trimmed, letters lower-cased. Inner whitespace, hyphens and
// apostrophes are kept as-is, so "cape cod" and "cape-cod" stay distinct.

/// Return the canonical form of `raw`: trimmed and lower-cased.
pub fn canonicalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns `true` if `word` reads as a number.
///
/// Numbers are never stored in the dictionary; a lookup of one is always
/// reported as found. Accepted forms, after trimming:
/// - the empty string (coerces to zero)
/// - decimal literals with optional sign, fraction and exponent:
///   `42`, `-3.5`, `.5`, `7.`, `1e3`, `+2E-4`
/// - unsigned hexadecimal, octal and binary integers: `0x1f`, `0o17`, `0b101`
///
/// Spelled-out values such as `infinity` or `nan` are words, not numbers.
pub fn is_numeric(word: &str) -> bool {
    let s = word.trim();
    if s.is_empty() {
        return true;
    }
    if let Some((radix, digits)) = split_radix_prefix(s) {
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }
    is_decimal_literal(s)
}

/// Split a `0x` / `0o` / `0b` prefix off an integer literal.
fn split_radix_prefix(s: &str) -> Option<(u32, &str)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

/// Match `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }
    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_trims_and_lowercases() {
        assert_eq!(canonicalize("  Hello "), "hello");
        assert_eq!(canonicalize("WILKES-Barre"), "wilkes-barre");
    }

    #[test]
    fn canonicalize_keeps_inner_whitespace() {
        assert_eq!(canonicalize(" Cape Cod\n"), "cape cod");
    }

    #[test]
    fn canonicalize_lowercases_non_ascii() {
        assert_eq!(canonicalize("ÄITI"), "äiti");
    }

    #[test]
    fn decimal_integers_are_numeric() {
        assert!(is_numeric("42"));
        assert!(is_numeric("-7"));
        assert!(is_numeric("+0"));
        assert!(is_numeric(" 12 "));
    }

    #[test]
    fn fractions_and_exponents_are_numeric() {
        assert!(is_numeric("3.14"));
        assert!(is_numeric(".5"));
        assert!(is_numeric("7."));
        assert!(is_numeric("1e3"));
        assert!(is_numeric("2.5e-4"));
        assert!(is_numeric("-1E+10"));
    }

    #[test]
    fn radix_literals_are_numeric() {
        assert!(is_numeric("0x1f"));
        assert!(is_numeric("0o17"));
        assert!(is_numeric("0b101"));
        assert!(!is_numeric("0x"));
        assert!(!is_numeric("0b102"));
        assert!(!is_numeric("0xzz"));
    }

    #[test]
    fn empty_string_is_numeric() {
        assert!(is_numeric(""));
        assert!(is_numeric("   "));
    }

    #[test]
    fn words_are_not_numeric() {
        assert!(!is_numeric("hello"));
        assert!(!is_numeric("infinity"));
        assert!(!is_numeric("nan"));
        assert!(!is_numeric("1st"));
        assert!(!is_numeric("1.2.3"));
        assert!(!is_numeric("."));
        assert!(!is_numeric("-"));
        assert!(!is_numeric("1e"));
        assert!(!is_numeric("--1"));
    }
}
