//! Error types for locale tag handling.

use thiserror::Error;

/// A locale tag that does not follow the BCP-47 language tag grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// The tag was empty.
    #[error("invalid locale tag: tag is empty")]
    Empty,

    /// The tag contains a character outside `[A-Za-z0-9-]`, such as the `_`
    /// of POSIX-style `de_DE`.
    #[error("invalid locale tag \"{tag}\": unexpected character '{character}'")]
    UnexpectedCharacter { tag: String, character: char },

    /// The subtags do not form a valid language tag.
    #[error("invalid locale tag \"{tag}\": {reason}")]
    Malformed { tag: String, reason: String },
}
