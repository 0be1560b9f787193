//! Post-processing plugins run on translated text.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::translator::Translator;
use crate::types::TranslateOptions;

/// Registry key for plugins that run for every locale.
pub const GLOBAL: &str = "global";

/// A post-processing step applied to translated text.
///
/// Plugins receive the text produced so far, the options of the call, the
/// locale tag the text was found under and the translator itself. Returning
/// `None` passes the text on unchanged.
///
/// Any closure with the matching signature is a plugin:
///
/// ```
/// use tolk::{TranslateOptions, Translator, TranslatorOptions, resources};
///
/// let mut translator = Translator::new(TranslatorOptions::default()).unwrap();
/// translator.add_resource("en", resources! { "shout" => "hey" }).unwrap();
/// translator.add_plugin(
///     |text: &str, _: &TranslateOptions, _: &str, _: &Translator| Some(text.to_uppercase()),
/// );
///
/// assert_eq!(translator.t("shout"), "HEY");
/// ```
pub trait Plugin {
    /// Transform `text`, or return `None` to leave it as is.
    fn apply(
        &self,
        text: &str,
        options: &TranslateOptions,
        locale: &str,
        translator: &Translator,
    ) -> Option<String>;
}

impl<F> Plugin for F
where
    F: Fn(&str, &TranslateOptions, &str, &Translator) -> Option<String>,
{
    fn apply(
        &self,
        text: &str,
        options: &TranslateOptions,
        locale: &str,
        translator: &Translator,
    ) -> Option<String> {
        self(text, options, locale, translator)
    }
}

/// Plugins grouped by locale tag.
///
/// Within a tag, plugins run in the order they were added. Tags are stored
/// as given; callers canonicalize them first.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: BTreeMap<String, Vec<Box<dyn Plugin>>>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plugins registered under `tag`, in registration order.
    pub fn get(&self, tag: &str) -> &[Box<dyn Plugin>] {
        self.plugins.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Number of plugins registered under `tag`.
    pub fn count(&self, tag: &str) -> usize {
        self.get(tag).len()
    }

    /// The plugins for `tiers`, then the global plugins.
    pub fn chain<'a>(&'a self, tiers: &'a [String]) -> impl Iterator<Item = &'a dyn Plugin> {
        tiers
            .iter()
            .map(String::as_str)
            .chain([GLOBAL])
            .flat_map(|tag| self.get(tag))
            .map(|plugin| &**plugin)
    }

    /// Append a plugin to `tag`'s list.
    pub(crate) fn insert(&mut self, tag: String, plugin: Box<dyn Plugin>) {
        self.plugins.entry(tag).or_default().push(plugin);
    }
}

impl Debug for PluginRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_map()
            .entries(self.plugins.iter().map(|(tag, plugins)| (tag, plugins.len())))
            .finish()
    }
}
