//! The maximized locale a translator resolves against.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use icu_locale_core::subtags::{Language, Region, Script};
use icu_locale_core::{LanguageIdentifier, Locale as IcuLocale};
use tracing::warn;

use crate::locale::{LocaleData, TagError};

/// Checks that `tag` is a well-formed language tag and returns its canonical
/// form.
///
/// Casing is normalized per subtag, so `"DE"` becomes `"de"` and `"de-de"`
/// becomes `"de-DE"`. Underscores and any other non-hyphen separators are
/// rejected.
///
/// # Example
///
/// ```
/// use tolk::validate_language_tag;
///
/// assert_eq!(validate_language_tag("DE-de").unwrap(), "de-DE");
/// assert!(validate_language_tag("de_DE").is_err());
/// ```
pub fn validate_language_tag(tag: &str) -> Result<String, TagError> {
    parse_tag(tag).map(|locale| locale.to_string())
}

/// Parses a tag into an ICU locale, rejecting separators ICU would tolerate.
pub(crate) fn parse_tag(tag: &str) -> Result<IcuLocale, TagError> {
    if tag.is_empty() {
        return Err(TagError::Empty);
    }
    if let Some(character) = tag.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
        return Err(TagError::UnexpectedCharacter {
            tag: tag.to_string(),
            character,
        });
    }
    IcuLocale::from_str(tag).map_err(|e| TagError::Malformed {
        tag: tag.to_string(),
        reason: e.to_string(),
    })
}

/// A language with optional script and region.
///
/// Locales held by a [`Translator`](crate::Translator) are always maximized:
/// the region is filled in from likely-subtag data when the input lacks one,
/// and a script is kept only when the input named one. A locale whose region
/// cannot be determined is still usable; [`long`](Self::long) then equals
/// [`short`](Self::short).
///
/// # Example
///
/// ```
/// use tolk::Locale;
///
/// let locale: Locale = "az-Cyrl-AZ".parse().unwrap();
/// assert_eq!(locale.short(), "az-Cyrl");
/// assert_eq!(locale.long(), "az-Cyrl-AZ");
/// assert_eq!(locale.region(), Some("AZ"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: Language,
    script: Option<Script>,
    region: Option<Region>,
}

impl Locale {
    /// Create a locale from its subtags, without maximizing.
    pub fn new(language: Language, script: Option<Script>, region: Option<Region>) -> Self {
        Self {
            language,
            script,
            region,
        }
    }

    /// Maximize `id` with `data`.
    ///
    /// Emits a warning when no region could be derived.
    pub(crate) fn maximize(id: &LanguageIdentifier, data: &dyn LocaleData) -> Self {
        let maximized = data.maximize(id);
        let locale = Self {
            language: maximized.language,
            script: id.script.map(|script| maximized.script.unwrap_or(script)),
            region: id.region.or(maximized.region),
        };
        if !locale.is_complete() {
            warn!(
                locale = %locale.long(),
                "locale \"{}\" incomplete and can result in unexpected lookups",
                locale.long()
            );
        }
        locale
    }

    /// The language subtag, e.g. `"de"`.
    pub fn language(&self) -> &str {
        self.language.as_str()
    }

    /// The script subtag, e.g. `"Cyrl"`, if one was requested.
    pub fn script(&self) -> Option<&str> {
        self.script.as_ref().map(Script::as_str)
    }

    /// The region subtag, e.g. `"DE"`.
    pub fn region(&self) -> Option<&str> {
        self.region.as_ref().map(Region::as_str)
    }

    /// Language plus script: `"de"`, `"uz-Cyrl"`.
    pub fn short(&self) -> String {
        match &self.script {
            Some(script) => format!("{}-{}", self.language, script),
            None => self.language.to_string(),
        }
    }

    /// Short form plus region: `"de-DE"`, `"uz-Cyrl-UZ"`.
    ///
    /// Equals [`short`](Self::short) when the region is unknown.
    pub fn long(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.short(), region),
            None => self.short(),
        }
    }

    /// Whether both language and region are known.
    pub fn is_complete(&self) -> bool {
        self.region.is_some() && self.language() != "und"
    }

    /// Convert to an ICU language identifier.
    pub fn language_id(&self) -> LanguageIdentifier {
        LanguageIdentifier::from((self.language, self.script, self.region))
    }
}

impl From<&LanguageIdentifier> for Locale {
    fn from(id: &LanguageIdentifier) -> Self {
        Self::new(id.language, id.script, id.region)
    }
}

impl FromStr for Locale {
    type Err = TagError;

    /// Parse a tag as-is. No subtags are added.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag(s).map(|locale| Locale::from(&locale.id))
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.long())
    }
}

/// Anything a translator can switch its locale to.
///
/// Implemented for tag strings, ICU identifiers and [`Locale`].
pub trait LocaleInput {
    /// Validate and convert into a language identifier.
    fn to_language_id(&self) -> Result<LanguageIdentifier, TagError>;
}

impl LocaleInput for str {
    fn to_language_id(&self) -> Result<LanguageIdentifier, TagError> {
        parse_tag(self).map(|locale| locale.id)
    }
}

impl LocaleInput for String {
    fn to_language_id(&self) -> Result<LanguageIdentifier, TagError> {
        self.as_str().to_language_id()
    }
}

impl LocaleInput for LanguageIdentifier {
    fn to_language_id(&self) -> Result<LanguageIdentifier, TagError> {
        Ok(self.clone())
    }
}

impl LocaleInput for IcuLocale {
    fn to_language_id(&self) -> Result<LanguageIdentifier, TagError> {
        Ok(self.id.clone())
    }
}

impl LocaleInput for Locale {
    fn to_language_id(&self) -> Result<LanguageIdentifier, TagError> {
        Ok(self.language_id())
    }
}
