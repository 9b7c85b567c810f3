//! `word_list` — load and preprocess the dictionary for the anagram search.
//!
//! This module reads a word list from a file, or from an in-memory string;
//! the latter keeps the parsing testable without touching the filesystem.
//!
//! The output is a `WordList` containing a flat `Vec<String>` of lowercase
//! words in their source order. Order matters: together with the sorted trie
//! edges it makes the whole search deterministic for a given input file.
//!
//! The parsing logic:
//! - Each line holds one word; surrounding whitespace is trimmed.
//! - Words are normalized to lowercase.
//! - Empty lines are skipped, as are words longer than `max_len` (a word
//!   longer than the anagram's letter count can never participate).
//! - With `ascii_only`, words containing non-ASCII characters are skipped;
//!   with `alpha_only`, words containing non-alphabetic characters are.
//!   Callers derive both flags from the anagram phrase itself: a pure-ASCII
//!   pure-alphabetic phrase can never be rearranged into anything else.
//! - Duplicates are dropped, first occurrence wins.

use log::debug;

use crate::letter_pool::LetterPool;

/// A processed, ready-to-index word list.
///
/// The `words` vector contains all surviving words (filtered, normalized,
/// deduplicated) in source order.
#[derive(Debug, Clone)]
pub struct WordList {
    /// Lowercase words, e.g. `["a", "act", "cat", ...]`.
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// # Arguments
    /// * `contents`   — Raw file contents, one word per line.
    /// * `max_len`    — Words with more characters than this are skipped.
    /// * `ascii_only` — Skip words with non-ASCII characters.
    /// * `alpha_only` — Skip words with non-alphabetic characters.
    pub fn parse_from_str(
        contents: &str,
        max_len: usize,
        ascii_only: bool,
        alpha_only: bool,
    ) -> WordList {
        let mut seen = std::collections::HashSet::new();
        let words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let word = raw_line.trim().to_lowercase();

                if word.is_empty() || word.chars().count() > max_len {
                    return None;
                }
                if ascii_only && !word.is_ascii() {
                    return None;
                }
                if alpha_only && !word.chars().all(char::is_alphabetic) {
                    return None;
                }
                // First occurrence wins; later duplicates are dropped.
                if !seen.insert(word.clone()) {
                    return None;
                }

                Some(word)
            })
            .collect();

        WordList { words }
    }

    /// Convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        max_len: usize,
        ascii_only: bool,
        alpha_only: bool,
    ) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!(
                    "failed to read word list from '{}': {}",
                    path_ref.display(),
                    e
                ),
            )
        })?;

        Ok(Self::parse_from_str(&data, max_len, ascii_only, alpha_only))
    }

    /// Drop every word the pool cannot spell. A word that needs a letter the
    /// anagram lacks (or more copies than it has) can never appear in any
    /// arrangement, so removing it up front shrinks the trie.
    pub fn retain_usable(&mut self, pool: &LetterPool) {
        let before = self.words.len();
        self.words.retain(|w| pool.covers(w));
        debug!(
            "kept {}/{} words usable with letters '{}'",
            self.words.len(),
            before,
            pool.letters()
        );
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
