use std::collections::HashMap;

use bon::Builder;
use serde::Deserialize;

use super::Value;

/// Per-call options for [`Translator::translate`](crate::Translator::translate).
///
/// # Example
///
/// ```
/// use tolk::{TranslateOptions, replace};
///
/// let options = TranslateOptions::builder()
///     .context("female")
///     .count(2)
///     .replace(replace! { "name" => "Ada" })
///     .build();
///
/// assert_eq!(options.context.as_deref(), Some("female"));
/// assert_eq!(options.count, Some(2));
/// assert_eq!(options.replace["name"].to_string(), "Ada");
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct TranslateOptions {
    /// Grammatical context appended to the key as `key_<context>`.
    ///
    /// An empty context is treated as no context.
    #[builder(into)]
    pub context: Option<String>,

    /// Count used to pick exact-count and plural-category variants.
    ///
    /// When set, a `count` replacement holding the decimal count is injected
    /// before substitution, overriding any caller-supplied `count`.
    pub count: Option<i64>,

    /// Values for `{{name}}` placeholders, keyed by name.
    #[builder(default)]
    pub replace: HashMap<String, Value>,
}

/// Construction-time configuration of a [`Translator`](crate::Translator).
///
/// Options can be assembled in code through the builder or deserialized from
/// a configuration document; absent fields take their defaults.
///
/// # Example
///
/// ```
/// use tolk::TranslatorOptions;
///
/// let options = TranslatorOptions::builder().default_locale("de").build();
/// assert_eq!(options.default_locale, "de");
/// assert_eq!(options.fallback, "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Deserialize)]
#[builder(on(String, into))]
#[serde(default, rename_all = "camelCase")]
pub struct TranslatorOptions {
    /// Locale the translator starts with.
    #[builder(default = "en-US".to_string())]
    pub default_locale: String,

    /// Locale searched when neither tier of the active locale has a match.
    #[builder(default = "en".to_string())]
    pub fallback: String,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        TranslatorOptions::builder().build()
    }
}
