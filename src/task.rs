//! `task` — load the search task: one anagram phrase plus the MD5 digests
//! to hunt for.
//!
//! Task file format: the first line is the anagram phrase; every following
//! non-empty line is one target digest. Digest lines are trimmed, lowercased
//! and validated as 32 hex characters. Duplicate digests are dropped, first
//! occurrence wins.

use std::collections::HashSet;

use crate::errors::TaskError;

/// A parsed task: the phrase to rearrange and the digests to match.
#[derive(Debug, Clone)]
pub struct Task {
    /// The anagram phrase exactly as written in the file (trimmed). Display
    /// form; normalization happens when the letter pool is built from it.
    pub phrase: String,
    /// Lowercase 32-hex target digests, deduplicated, in file order.
    pub digests: Vec<String>,
}

impl Task {
    /// Parse a task from an in-memory string.
    ///
    /// # Errors
    ///
    /// * [`TaskError::MissingPhrase`] — first line absent or blank.
    /// * [`TaskError::InvalidDigest`] — a non-empty digest line is not
    ///   32 hex characters (the line number is reported).
    /// * [`TaskError::NoTargets`] — no digest lines at all.
    pub fn parse_from_str(contents: &str) -> Result<Task, TaskError> {
        let mut lines = contents.lines().enumerate();

        let phrase = match lines.next() {
            Some((_, first)) if !first.trim().is_empty() => first.trim().to_string(),
            _ => return Err(TaskError::MissingPhrase),
        };

        let mut digests = Vec::new();
        let mut seen = HashSet::new();
        for (idx, raw_line) in lines {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            let digest = line.to_lowercase();
            if digest.len() != 32 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(TaskError::InvalidDigest {
                    line: idx + 1,
                    text: line.to_string(),
                });
            }
            if seen.insert(digest.clone()) {
                digests.push(digest);
            }
        }

        if digests.is_empty() {
            return Err(TaskError::NoTargets);
        }

        Ok(Task { phrase, digests })
    }

    /// Convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// [`TaskError::Io`] if the file cannot be read, plus everything
    /// [`parse_from_str`](Self::parse_from_str) can return.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Task, TaskError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| TaskError::Io {
            path: path_ref.display().to_string(),
            source: e,
        })?;
        Self::parse_from_str(&data)
    }

    /// Number of spaces in the phrase, the default separator budget.
    pub fn space_count(&self) -> usize {
        self.phrase.matches(' ').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST_A: &str = "d077f244def8a70e5ea758bd8352fcd8";
    const DIGEST_B: &str = "316c9c3ed45a83ee318b1f859d9b8b79";

    #[test]
    fn test_parse_phrase_and_digests() {
        let input = format!("poultry outwits ants\n{DIGEST_A}\n{DIGEST_B}\n");
        let task = Task::parse_from_str(&input).unwrap();

        assert_eq!(task.phrase, "poultry outwits ants");
        assert_eq!(task.digests, vec![DIGEST_A, DIGEST_B]);
    }

    #[test]
    fn test_parse_skips_blank_digest_lines() {
        let input = format!("abc\n\n{DIGEST_A}\n\n\n{DIGEST_B}\n\n");
        let task = Task::parse_from_str(&input).unwrap();

        assert_eq!(task.digests.len(), 2);
    }

    #[test]
    fn test_parse_lowercases_digests() {
        let input = format!("abc\n{}\n", DIGEST_A.to_uppercase());
        let task = Task::parse_from_str(&input).unwrap();

        assert_eq!(task.digests, vec![DIGEST_A]);
    }

    #[test]
    fn test_parse_deduplicates_digests() {
        let input = format!("abc\n{DIGEST_A}\n{DIGEST_B}\n{DIGEST_A}\n");
        let task = Task::parse_from_str(&input).unwrap();

        assert_eq!(task.digests, vec![DIGEST_A, DIGEST_B]);
    }

    #[test]
    fn test_parse_trims_phrase_and_digests() {
        let input = format!("  a cat  \n  {DIGEST_A}  \n");
        let task = Task::parse_from_str(&input).unwrap();

        assert_eq!(task.phrase, "a cat");
        assert_eq!(task.digests, vec![DIGEST_A]);
    }

    #[test]
    fn test_parse_empty_input_is_missing_phrase() {
        assert!(matches!(
            Task::parse_from_str(""),
            Err(TaskError::MissingPhrase)
        ));
    }

    #[test]
    fn test_parse_blank_first_line_is_missing_phrase() {
        let input = format!("   \n{DIGEST_A}\n");
        assert!(matches!(
            Task::parse_from_str(&input),
            Err(TaskError::MissingPhrase)
        ));
    }

    #[test]
    fn test_parse_phrase_without_digests_is_no_targets() {
        assert!(matches!(
            Task::parse_from_str("a cat\n\n"),
            Err(TaskError::NoTargets)
        ));
    }

    #[test]
    fn test_parse_rejects_short_digest() {
        let err = Task::parse_from_str("abc\ndeadbeef\n").unwrap_err();
        match err {
            TaskError::InvalidDigest { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "deadbeef");
            }
            other => panic!("expected InvalidDigest, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_hex_digest() {
        let input = format!("abc\n{DIGEST_A}\nzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz\n");
        let err = Task::parse_from_str(&input).unwrap_err();
        assert!(matches!(err, TaskError::InvalidDigest { line: 3, .. }));
    }

    #[test]
    fn test_space_count() {
        let input = format!("poultry outwits ants\n{DIGEST_A}\n");
        let task = Task::parse_from_str(&input).unwrap();
        assert_eq!(task.space_count(), 2);

        let input = format!("cat\n{DIGEST_A}\n");
        let task = Task::parse_from_str(&input).unwrap();
        assert_eq!(task.space_count(), 0);
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let err = Task::load_from_path("no/such/task.txt").unwrap_err();
        match err {
            TaskError::Io { path, .. } => assert_eq!(path, "no/such/task.txt"),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
