//! Key resolution across locale tiers.
//!
//! The Translator struct provides the user-facing API for selecting a locale,
//! adding translations and plugins, and resolving keys to text.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::slice;

use icu_locale_core::LanguageIdentifier;
use tracing::{debug, trace};

use crate::locale::{
    IcuLocaleData, Locale, LocaleData, LocaleInput, PluralClassifier, TagError,
    validate_language_tag,
};
use crate::parser::interpolate;
use crate::translator::ResourceError;
use crate::translator::notifier::{Listener, Notifier, Unsubscribe};
use crate::translator::plugins::{GLOBAL, Plugin, PluginRegistry};
use crate::translator::store::{ResourceStore, flatten};
use crate::types::{Resource, TranslateOptions, TranslatorOptions, Value};

/// Resolves translation keys for one active locale.
///
/// A translator owns its translations, plugins and listeners; separate
/// translators share nothing. Lookups search the long form of the active
/// locale (`de-CH`), then its short form (`de`), then the fallback locale.
/// A key with no translation in any of them resolves to itself.
///
/// # Example
///
/// ```
/// use tolk::{TranslateOptions, Translator, TranslatorOptions, resources};
///
/// let mut translator = Translator::new(TranslatorOptions::default()).unwrap();
/// translator
///     .add_resource("en", resources! {
///         "item" => "{{count}} items",
///         "item_1" => "{{count}} item",
///     })
///     .unwrap();
///
/// let one = TranslateOptions::builder().count(1).build();
/// let five = TranslateOptions::builder().count(5).build();
/// assert_eq!(translator.translate("item", one), "1 item");
/// assert_eq!(translator.translate("item", five), "5 items");
/// assert_eq!(translator.t("missing"), "missing");
/// ```
pub struct Translator {
    /// The active, maximized locale.
    locale: Locale,

    /// The maximized fallback locale, used for its plural rules.
    fallback: Locale,

    /// The canonical fallback tag as configured, used for lookups.
    fallback_tag: String,

    /// Plural rules for the active and the fallback locale.
    plurals: Plurals,

    /// Likely-subtag and plural data.
    data: Box<dyn LocaleData>,

    resources: ResourceStore,
    plugins: PluginRegistry,
    notifier: Notifier,
}

/// Classifiers for both locales a lookup can use.
struct Plurals {
    active: Box<dyn PluralClassifier>,
    fallback: Box<dyn PluralClassifier>,
}

impl Plurals {
    fn new(data: &dyn LocaleData, active: &Locale, fallback: &Locale) -> Self {
        Self {
            active: data.plural_classifier(active),
            fallback: data.plural_classifier(fallback),
        }
    }
}

impl Translator {
    /// Create a translator backed by ICU4X compiled data.
    ///
    /// Fails if the default or the fallback locale is not a valid tag.
    pub fn new(options: TranslatorOptions) -> Result<Self, TagError> {
        Self::with_locale_data(options, IcuLocaleData::new())
    }

    /// Create a translator starting in `tag`, with the default fallback.
    pub fn with_locale(tag: impl Into<String>) -> Result<Self, TagError> {
        Self::new(TranslatorOptions::builder().default_locale(tag).build())
    }

    /// Create a translator that takes likely subtags and plural rules from
    /// `data`.
    pub fn with_locale_data(
        options: TranslatorOptions,
        data: impl LocaleData + 'static,
    ) -> Result<Self, TagError> {
        let fallback_tag = validate_language_tag(&options.fallback)?;
        let fallback = Locale::maximize(&options.fallback.to_language_id()?, &data);
        let locale = Locale::maximize(&options.default_locale.to_language_id()?, &data);
        let plurals = Plurals::new(&data, &locale, &fallback);

        Ok(Self {
            locale,
            fallback,
            fallback_tag,
            plurals,
            data: Box::new(data),
            resources: ResourceStore::new(),
            plugins: PluginRegistry::new(),
            notifier: Notifier::default(),
        })
    }

    // =========================================================================
    // Locale Management
    // =========================================================================

    /// The active locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Language plus script of the active locale, e.g. `"de"`.
    pub fn short(&self) -> String {
        self.locale.short()
    }

    /// Short form plus region of the active locale, e.g. `"de-DE"`.
    pub fn long(&self) -> String {
        self.locale.long()
    }

    /// Region of the active locale, e.g. `"DE"`.
    pub fn region(&self) -> Option<&str> {
        self.locale.region()
    }

    /// Script of the active locale, if one was requested, e.g. `"Cyrl"`.
    pub fn script(&self) -> Option<&str> {
        self.locale.script()
    }

    /// The fallback locale tag, e.g. `"en"`.
    pub fn fallback(&self) -> &str {
        &self.fallback_tag
    }

    /// Change the active locale.
    ///
    /// The locale is maximized, so `"de"` becomes `de-DE`. Listeners run only
    /// if the long form changed.
    ///
    /// # Example
    ///
    /// ```
    /// use tolk::Translator;
    ///
    /// let mut translator = Translator::with_locale("en-US").unwrap();
    /// translator.set_locale("de").unwrap();
    /// assert_eq!(translator.short(), "de");
    /// assert_eq!(translator.long(), "de-DE");
    /// assert!(translator.set_locale("de_DE").is_err());
    /// ```
    pub fn set_locale<L: LocaleInput + ?Sized>(&mut self, locale: &L) -> Result<(), TagError> {
        let id = locale.to_language_id()?;
        let previous = self.long();
        self.replace_locale(&id);
        if self.long() != previous {
            debug!(from = %previous, to = %self.locale, "locale changed");
            self.notifier.trigger();
        }
        Ok(())
    }

    /// Change the active locale by language and return the short form.
    ///
    /// Passing `None` or an empty tag only reads the short form. The locale is
    /// replaced, and listeners run, only when `language` differs from the
    /// current language subtag.
    #[deprecated(note = "use `set_locale` and `short` instead")]
    pub fn language(&mut self, language: Option<&str>) -> Result<String, TagError> {
        if let Some(tag) = language.filter(|tag| !tag.is_empty()) {
            let id = tag.to_language_id()?;
            if id.to_string() != self.locale.language() {
                self.replace_locale(&id);
                debug!(to = %self.locale, "language changed");
                self.notifier.trigger();
            }
        }
        Ok(self.short())
    }

    /// Install a new active locale and the plural rules that go with it.
    fn replace_locale(&mut self, id: &LanguageIdentifier) {
        self.locale = Locale::maximize(id, &*self.data);
        self.plurals = Plurals::new(&*self.data, &self.locale, &self.fallback);
    }

    // =========================================================================
    // Translations and Plugins
    // =========================================================================

    /// All translations, keyed by `"<tag>.<path>"` (read-only).
    pub fn resources(&self) -> &ResourceStore {
        &self.resources
    }

    /// All plugins (read-only).
    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }

    /// Add a tree of translations for a locale tag.
    ///
    /// Nested keys are joined with dots. Keys holding text may use ASCII
    /// letters, digits, `_` and `-`; keys holding nested trees may not use
    /// `_`. On error nothing is added. Existing keys are overwritten.
    ///
    /// # Example
    ///
    /// ```
    /// use tolk::{ResourceError, Translator, resources};
    ///
    /// let mut translator = Translator::with_locale("de").unwrap();
    /// translator
    ///     .add_resource("de", resources! { "menu" => resources! { "open" => "Öffnen" } })
    ///     .unwrap();
    /// assert_eq!(translator.t("menu.open"), "Öffnen");
    ///
    /// let error = translator
    ///     .add_resource("de", resources! { "string_one" => resources! { "two" => "zwei" } })
    ///     .unwrap_err();
    /// assert_eq!(error, ResourceError::InvalidBranchKey { key: "string_one".to_string() });
    /// ```
    pub fn add_resource(
        &mut self,
        tag: &str,
        tree: impl Into<Resource>,
    ) -> Result<(), ResourceError> {
        let tag = validate_language_tag(tag)?;
        let entries = flatten(&tag, &tree.into())?;
        debug!(locale = %tag, entries = entries.len(), "adding translations");
        self.resources.merge(entries);
        self.notifier.trigger();
        Ok(())
    }

    /// Add a plugin that runs for every locale.
    pub fn add_plugin(&mut self, plugin: impl Plugin + 'static) {
        self.register_plugin(GLOBAL.to_string(), Box::new(plugin));
    }

    /// Add a plugin that runs while the active locale's long or short form
    /// is `tag`. The tag `"global"` registers for every locale.
    pub fn add_locale_plugin(
        &mut self,
        tag: &str,
        plugin: impl Plugin + 'static,
    ) -> Result<(), TagError> {
        let tag = if tag == GLOBAL {
            tag.to_string()
        } else {
            validate_language_tag(tag)?
        };
        self.register_plugin(tag, Box::new(plugin));
        Ok(())
    }

    fn register_plugin(&mut self, tag: String, plugin: Box<dyn Plugin>) {
        debug!(locale = %tag, "adding plugin");
        self.plugins.insert(tag, plugin);
        self.notifier.trigger();
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Register a listener for locale, translation and plugin changes.
    ///
    /// Registering the same `Rc` again is a no-op; the returned handle still
    /// removes it.
    pub fn listen(&self, listener: Listener) -> Unsubscribe {
        self.notifier.listen(listener)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.notifier.len()
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Translate `key` with no options.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, TranslateOptions::default())
    }

    /// Translate `key`.
    ///
    /// Candidate keys are tried from most to least specific:
    /// `key[_context]_<count>`, `key[_context]_<plural category>`,
    /// `key[_context]`, and `key` itself when a context was given. All
    /// candidates are tried under the long form of the active locale before
    /// the short form, and only then under the fallback locale with the
    /// fallback's plural rules.
    ///
    /// Empty translations count as missing. The text found has its `{{name}}`
    /// placeholders replaced and is passed through the plugins of the active
    /// locale's long form, short form and the global plugins, in that order.
    /// Plugins are told the locale tag the text came from: the fallback tag if
    /// it came from the fallback, otherwise the long form.
    pub fn translate(&self, key: &str, mut options: TranslateOptions) -> String {
        if let Some(count) = options.count {
            options
                .replace
                .insert("count".to_string(), Value::String(count.to_string()));
        }

        let tiers = self.tiers();
        let found = self
            .search(&tiers, &candidates(key, &options, &*self.plurals.active))
            .map(|text| (text, self.long()))
            .or_else(|| {
                let fallback = slice::from_ref(&self.fallback_tag);
                let text =
                    self.search(fallback, &candidates(key, &options, &*self.plurals.fallback))?;
                trace!(key, fallback = %self.fallback_tag, "translated from fallback");
                Some((text, self.fallback_tag.clone()))
            });

        let Some((text, resolved)) = found else {
            debug!(key, locale = %self.locale, "no translation found");
            return key.to_string();
        };

        let mut text = interpolate(text, &options.replace);
        for plugin in self.plugins.chain(&tiers) {
            if let Some(transformed) = plugin.apply(&text, &options, &resolved, self) {
                text = transformed;
            }
        }
        text
    }

    /// The long and short form of the active locale, without duplicates.
    fn tiers(&self) -> Vec<String> {
        let long = self.long();
        let short = self.short();
        if long == short {
            vec![long]
        } else {
            vec![long, short]
        }
    }

    /// First non-empty translation found, tier-major and candidate-minor.
    fn search(&self, tiers: &[String], candidates: &[String]) -> Option<&str> {
        tiers.iter().find_map(|tag| {
            candidates.iter().find_map(|candidate| {
                self.resources
                    .lookup(tag, candidate)
                    .filter(|text| !text.is_empty())
            })
        })
    }
}

/// Lookup keys for `key`, most specific first.
fn candidates(
    key: &str,
    options: &TranslateOptions,
    plurals: &dyn PluralClassifier,
) -> Vec<String> {
    let context = options.context.as_deref().filter(|c| !c.is_empty());
    let base = match context {
        Some(context) => format!("{key}_{context}"),
        None => key.to_string(),
    };

    let mut candidates = Vec::with_capacity(4);
    if let Some(count) = options.count {
        candidates.push(format!("{base}_{count}"));
        candidates.push(format!("{base}_{}", plurals.category(count)));
    }
    candidates.push(base);
    if context.is_some() {
        candidates.push(key.to_string());
    }
    candidates
}

impl Debug for Translator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Translator")
            .field("locale", &self.locale.long())
            .field("fallback", &self.fallback_tag)
            .field("resources", &self.resources.len())
            .field("plugins", &self.plugins)
            .field("listeners", &self.notifier.len())
            .finish_non_exhaustive()
    }
}
