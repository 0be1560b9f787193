//! Text-level parsing of translated strings.
//!
//! This module provides `{{name}}` substitution, applied to every
//! translation, and the `[[name|...]]` token scanner that plugins use to find
//! the parts of a text they format.

mod interpolate;
mod placeholder;

pub use interpolate::interpolate;
pub use placeholder::{Placeholder, parse_placeholders};
