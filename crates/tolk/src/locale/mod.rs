//! Locale canonicalization, maximization and plural classification.
//!
//! Tags are validated against the BCP-47 grammar, maximized with
//! likely-subtag data and rendered in the short (`language[-script]`) and
//! long (`short-region`) forms translations are keyed by.

mod data;
mod error;
mod model;
mod plural;

pub use data::{IcuLocaleData, LocaleData};
pub use error::TagError;
pub use model::{Locale, LocaleInput, validate_language_tag};
pub use plural::{CardinalRules, PluralClassifier};
