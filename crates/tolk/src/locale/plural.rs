//! CLDR plural category resolution.
//!
//! Different languages have different plural rules - English has "one" and
//! "other", while Russian has "one", "few", "many", and "other", and Arabic
//! uses all six categories: "zero", "one", "two", "few", "many", "other".

use icu_locale_core::Locale as IcuLocale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};
use tracing::warn;

use crate::locale::Locale;

/// Maps a count to a plural category tag.
///
/// Any `Fn(i64) -> &'static str` is a classifier, which keeps test doubles
/// short.
pub trait PluralClassifier {
    /// Returns one of "zero", "one", "two", "few", "many", "other".
    fn category(&self, count: i64) -> &'static str;
}

impl<F> PluralClassifier for F
where
    F: Fn(i64) -> &'static str,
{
    fn category(&self, count: i64) -> &'static str {
        self(count)
    }
}

/// Cardinal plural rules for one locale.
///
/// Negative counts are classified by their absolute value. When no rules are
/// available for the locale every count is "other".
///
/// # Example
///
/// ```
/// use tolk::{CardinalRules, Locale, PluralClassifier};
///
/// let russian = CardinalRules::new(&"ru".parse::<Locale>().unwrap());
/// assert_eq!(russian.category(1), "one");
/// assert_eq!(russian.category(2), "few");
/// assert_eq!(russian.category(5), "many");
/// ```
pub struct CardinalRules {
    rules: Option<PluralRules>,
}

impl CardinalRules {
    /// Build the rules for `locale`.
    pub fn new(locale: &Locale) -> Self {
        let id = IcuLocale::from(locale.language_id());
        let rules = match PluralRules::try_new(id.into(), PluralRuleType::Cardinal.into()) {
            Ok(rules) => Some(rules),
            Err(error) => {
                warn!(locale = %locale, %error, "no plural rules for locale");
                None
            }
        };
        Self { rules }
    }
}

impl PluralClassifier for CardinalRules {
    fn category(&self, count: i64) -> &'static str {
        self.rules
            .as_ref()
            .map_or("other", |rules| category_str(rules.category_for(count)))
    }
}

/// Translate a `PluralCategory` enum to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}
