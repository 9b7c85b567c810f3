//! Error types for loading and validating task files.

/// Errors produced while loading a task file (anagram phrase + target
/// digests).
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The task file could not be read at all.
    #[error("failed to read task from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The first line (the anagram phrase) is missing or blank.
    #[error("task file is missing the anagram phrase on its first line")]
    MissingPhrase,

    /// The file names a phrase but no target digests to search for.
    #[error("task file lists no target digests")]
    NoTargets,

    /// A digest line is not 32 hex characters. Such a line can never match
    /// an MD5 output, so it is rejected up front rather than burying a typo
    /// in an unwinnable search.
    #[error("invalid target digest on line {line}: \"{text}\" (expected 32 hex characters)")]
    InvalidDigest { line: usize, text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_digest_message_names_line_and_text() {
        let err = TaskError::InvalidDigest {
            line: 3,
            text: "not-a-digest".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("not-a-digest"));
        assert!(msg.contains("32 hex"));
    }

    #[test]
    fn test_io_error_message_names_path() {
        let err = TaskError::Io {
            path: "missing/task.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing/task.txt"));
    }
}
