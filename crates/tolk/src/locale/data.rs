//! The locale database a translator consults.

use icu_locale::LocaleExpander;
use icu_locale_core::LanguageIdentifier;

use crate::locale::{CardinalRules, Locale, PluralClassifier};

/// Likely-subtag and plural-rule data.
///
/// [`IcuLocaleData`] is the default. Supply another implementation through
/// [`Translator::with_locale_data`](crate::Translator::with_locale_data) to
/// pin the data in tests or to support private-use languages.
pub trait LocaleData {
    /// Returns `id` with its likely script and region filled in.
    ///
    /// Subtags already present must be left alone. Return `id` unchanged when
    /// nothing is known about the language.
    fn maximize(&self, id: &LanguageIdentifier) -> LanguageIdentifier;

    /// Builds a cardinal plural classifier for `locale`.
    fn plural_classifier(&self, locale: &Locale) -> Box<dyn PluralClassifier>;
}

/// Locale data compiled into the binary by ICU4X.
pub struct IcuLocaleData {
    expander: LocaleExpander,
}

impl IcuLocaleData {
    /// Create locale data covering every language CLDR knows about.
    pub fn new() -> Self {
        Self {
            expander: LocaleExpander::new_extended(),
        }
    }
}

impl Default for IcuLocaleData {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleData for IcuLocaleData {
    fn maximize(&self, id: &LanguageIdentifier) -> LanguageIdentifier {
        let mut maximized = id.clone();
        self.expander.maximize(&mut maximized);
        maximized
    }

    fn plural_classifier(&self, locale: &Locale) -> Box<dyn PluralClassifier> {
        Box::new(CardinalRules::new(locale))
    }
}
