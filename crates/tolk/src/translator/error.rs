//! Error types for adding translations.

use thiserror::Error;

use crate::locale::TagError;

/// An error that rejected an [`add_resource`](crate::Translator::add_resource)
/// call. The translator is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// The locale tag the resources were added under is malformed.
    #[error(transparent)]
    Tag(#[from] TagError),

    /// A key holding text contains a character outside `[A-Za-z0-9_-]`.
    #[error("only a-Z, 0-9, minus sign and underscore allowed: \"{key}\"")]
    InvalidKey { key: String },

    /// A key holding nested translations contains a character outside
    /// `[A-Za-z0-9-]`.
    #[error("only a-Z, minus sign and 0-9 allowed: \"{key}\"")]
    InvalidBranchKey { key: String },
}
