pub mod locale;
pub mod parser;
pub mod translator;
pub mod types;

pub use locale::{
    CardinalRules, IcuLocaleData, Locale, LocaleData, LocaleInput, PluralClassifier, TagError,
    validate_language_tag,
};
pub use parser::{Placeholder, interpolate, parse_placeholders};
pub use translator::{
    GLOBAL, Listener, Plugin, PluginRegistry, ResourceError, ResourceStore, Translator,
    Unsubscribe,
};
pub use types::{Resource, TranslateOptions, TranslatorOptions, Value};

/// Creates a `HashMap<String, Value>` of placeholder values.
///
/// Values are converted via `Into<Value>`, so you can pass integers, floats,
/// strings or `chrono` dates directly.
///
/// # Example
///
/// ```
/// use tolk::replace;
///
/// let r = replace! { "count" => 3, "name" => "Alice" };
/// assert_eq!(r.len(), 2);
/// assert_eq!(r["count"].as_number(), Some(3));
/// assert_eq!(r["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! replace {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}

/// Creates a translation tree from key-value pairs.
///
/// Values are converted via `Into<Resource>`: strings become text and a
/// nested `resources!` becomes a subtree. Children keep the order written.
///
/// # Example
///
/// ```
/// use tolk::{Resource, resources};
///
/// let tree = resources! {
///     "title" => "Settings",
///     "menu" => resources! { "open" => "Open" },
/// };
/// let branch = tree.as_branch().unwrap();
/// assert_eq!(branch["title"].as_text(), Some("Settings"));
/// assert!(branch["menu"].as_branch().is_some());
/// ```
#[macro_export]
macro_rules! resources {
    {} => {
        $crate::Resource::empty()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        [
            $(
                ($key.to_string(), ::std::convert::Into::<$crate::Resource>::into($value)),
            )+
        ]
        .into_iter()
        .collect::<$crate::Resource>()
    };
}
