//! Error types for `diceware-core`.

use thiserror::Error;

/// Broad classification of a [`GeneratorError`].
///
/// Every error is a precondition violation surfaced to the caller before any
/// output is produced; none of them is worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required collaborator (word source, randomness source) was not supplied.
    NullReference,
    /// Structurally invalid input (empty pool, too few distinct words, bad option).
    InvalidArgument,
    /// A requested passphrase length is negative.
    InvalidSize,
    /// Reading a word list from the filesystem failed.
    Io,
}

/// Errors produced by word-pool construction and passphrase selection.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// No word collection was given to the builder.
    #[error("word list must be supplied")]
    MissingWords,

    /// No randomness source was given to the builder.
    #[error("random source must be supplied")]
    MissingRandomSource,

    /// The word collection contained no words.
    #[error("word list must not be empty")]
    EmptyPool,

    /// A negative (or unrepresentable) number of words was requested.
    #[error("number of words to select must not be negative")]
    InvalidSize,

    /// More distinct words were requested than the pool holds.
    #[error("requested {requested} distinct words, but the pool only holds {available}")]
    InsufficientWords {
        /// Number of words asked for.
        requested: usize,
        /// Number of distinct words in the pool.
        available: usize,
    },

    /// Separator name not recognised.
    #[error("unknown separator '{0}', expected one of: hyphen, space, dot, underscore, none")]
    UnknownSeparator(String),

    /// Passphrase options could not be parsed.
    #[error("invalid passphrase options: {0}")]
    Options(String),

    /// A word source had an unexpected shape.
    #[error("invalid word source: {0}")]
    WordSource(String),

    /// I/O error while reading a word list.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    /// Returns the [`ErrorKind`] this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingWords | Self::MissingRandomSource => ErrorKind::NullReference,
            Self::EmptyPool
            | Self::InsufficientWords { .. }
            | Self::UnknownSeparator(_)
            | Self::Options(_)
            | Self::WordSource(_) => ErrorKind::InvalidArgument,
            Self::InvalidSize => ErrorKind::InvalidSize,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(GeneratorError::MissingWords.kind(), ErrorKind::NullReference);
        assert_eq!(
            GeneratorError::MissingRandomSource.kind(),
            ErrorKind::NullReference
        );
        assert_eq!(GeneratorError::EmptyPool.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            GeneratorError::InsufficientWords {
                requested: 4,
                available: 3
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(GeneratorError::InvalidSize.kind(), ErrorKind::InvalidSize);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(GeneratorError::from(io).kind(), ErrorKind::Io);
    }

    #[test]
    fn insufficient_words_message_names_both_sizes() {
        let err = GeneratorError::InsufficientWords {
            requested: 4,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "requested 4 distinct words, but the pool only holds 3"
        );
    }
}
