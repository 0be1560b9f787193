//! The translator and the state it resolves keys against.
//!
//! A [`Translator`] owns a flat store of translations, a registry of
//! post-processing plugins and a set of change listeners. Translations are
//! added as nested trees and flattened to `"<tag>.<path>"` keys.

mod engine;
mod error;
mod notifier;
mod plugins;
mod store;

pub use engine::Translator;
pub use error::ResourceError;
pub use notifier::{Listener, Unsubscribe};
pub use plugins::{GLOBAL, Plugin, PluginRegistry};
pub use store::ResourceStore;
