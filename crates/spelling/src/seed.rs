// Building a dictionary from word lists
//
// Three input shapes are accepted:
// - a text blob of alternating `word rank` tokens
// - a plain list of words, each counted once
// - a line-oriented word list: one `word rank` or bare `word` per line,
//   blank lines and `#` comments skipped

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::dictionary::Dictionary;
use crate::error::SeedError;

impl Dictionary {
    /// Build a dictionary from alternating `word rank` tokens separated by
    /// whitespace, e.g. `"hello 500 help 200"`.
    pub fn from_text(text: &str) -> Result<Self, SeedError> {
        let mut dict = Self::new();
        dict.load_text(text)?;
        Ok(dict)
    }

    /// Build a dictionary in which each word is inserted with an implicit
    /// rank; a word listed twice ends up with rank 2.
    pub fn from_words<I, S>(words: I) -> Result<Self, SeedError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        dict.load_words(words)?;
        Ok(dict)
    }

    /// Build a dictionary from a line-oriented word list.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, SeedError> {
        let mut dict = Self::new();
        dict.load_reader(reader)?;
        Ok(dict)
    }

    /// Build a dictionary from a line-oriented word list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dict = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), words = dict.len(), "loaded word list");
        Ok(dict)
    }

    /// Insert alternating `word rank` tokens. Returns the number of pairs read.
    pub fn load_text(&mut self, text: &str) -> Result<usize, SeedError> {
        let mut tokens = text.split_whitespace();
        let mut count = 0;
        while let Some(word) = tokens.next() {
            let rank = tokens.next().ok_or_else(|| SeedError::MissingRank {
                word: word.to_string(),
            })?;
            self.insert_raw(Some(word), Some(rank))?;
            count += 1;
        }
        debug!(pairs = count, "loaded word/rank text");
        Ok(count)
    }

    /// Insert each word with an implicit rank. Returns the number of words read.
    pub fn load_words<I, S>(&mut self, words: I) -> Result<usize, SeedError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0;
        for word in words {
            self.insert(word.as_ref(), None)?;
            count += 1;
        }
        Ok(count)
    }

    /// Insert every entry of a line-oriented word list. Returns the number
    /// of entries read.
    ///
    /// The rank is the last whitespace-separated token of a line, so words
    /// may contain inner spaces (`cape cod 12`). A line holding a single
    /// token is a word with an implicit rank.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<usize, SeedError> {
        let mut count = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            let (word, rank) = match entry.rsplit_once(char::is_whitespace) {
                Some((word, rank)) => (word, Some(rank)),
                None => (entry, None),
            };
            self.insert_raw(Some(word), rank)
                .map_err(|source| SeedError::Parse {
                    line: index + 1,
                    source,
                })?;
            count += 1;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DictionaryError;

    #[test]
    fn text_blob_pairs() {
        let dict = Dictionary::from_text("hello 500\nhelp 200  yell 100").unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.rank("hello"), Some(500));
        assert_eq!(dict.rank("yell"), Some(100));
    }

    #[test]
    fn empty_text_is_empty_dictionary() {
        let dict = Dictionary::from_text("   ").unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn text_blob_missing_rank() {
        let err = Dictionary::from_text("hello 500 help").err().unwrap();
        assert!(matches!(err, SeedError::MissingRank { ref word } if word == "help"));
    }

    #[test]
    fn text_blob_bad_rank() {
        let err = Dictionary::from_text("hello many").err().unwrap();
        assert!(matches!(
            err,
            SeedError::Dictionary(DictionaryError::InvalidRank(_))
        ));
    }

    #[test]
    fn words_get_implicit_ranks() {
        let dict = Dictionary::from_words(["wilkes-barre", "philadelphia", "wilkes-barre"]).unwrap();
        assert_eq!(dict.rank("wilkes-barre"), Some(2));
        assert_eq!(dict.rank("philadelphia"), Some(1));
    }

    #[test]
    fn reader_skips_comments_and_blank_lines() {
        let text = "# sample\n\nhello 500\n  cape cod 12  \nhyannis\n";
        let dict = Dictionary::from_reader(text.as_bytes()).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.rank("cape cod"), Some(12));
        assert_eq!(dict.rank("hyannis"), Some(1));
    }

    #[test]
    fn reader_reports_line_of_bad_rank() {
        let text = "hello 500\n# comment\nhelp -3\n";
        let err = Dictionary::from_reader(text.as_bytes()).err().unwrap();
        match err {
            SeedError::Parse { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(source, DictionaryError::InvalidRank(_)));
            }
            other => panic!("expected Parse, got: {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Dictionary::from_path("/nonexistent/spelling/words.txt").err().unwrap();
        assert!(matches!(err, SeedError::Io(_)));
    }
}
