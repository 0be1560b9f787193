//! Flat storage for translated text.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::translator::ResourceError;
use crate::types::Resource;

/// Translations keyed by `"<locale tag>.<dotted.path>"`.
///
/// Entries are only ever added; a later entry for the same key replaces the
/// earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceStore {
    entries: BTreeMap<String, String>,
}

impl ResourceStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a translation by its full key, e.g. `"de.sub.title"`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Get the translation stored for `path` under locale `tag`.
    pub fn lookup(&self, tag: &str, path: &str) -> Option<&str> {
        self.get(&format!("{tag}.{path}"))
    }

    /// Check if a full key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored translations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no translations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, text)| (key.as_str(), text.as_str()))
    }

    /// Insert flattened entries, replacing existing keys.
    pub(crate) fn merge(&mut self, entries: BTreeMap<String, String>) {
        self.entries.extend(entries);
    }
}

/// Flatten `tree` into `"<tag>.<path>"` entries.
///
/// Fails on the first key, in document order, with characters not allowed
/// for its node kind.
/// Nothing is returned on failure, so callers never see a partial tree.
pub(crate) fn flatten(
    tag: &str,
    tree: &Resource,
) -> Result<BTreeMap<String, String>, ResourceError> {
    let mut entries = BTreeMap::new();
    if let Resource::Branch(children) = tree {
        flatten_into(tag, children, &mut entries)?;
    }
    Ok(entries)
}

fn flatten_into(
    base: &str,
    children: &IndexMap<String, Resource>,
    entries: &mut BTreeMap<String, String>,
) -> Result<(), ResourceError> {
    for (key, node) in children {
        let path = format!("{base}.{key}");
        match node {
            Resource::Text(text) => {
                if !is_text_key(key) {
                    return Err(ResourceError::InvalidKey { key: key.clone() });
                }
                entries.insert(path, text.clone());
            }
            Resource::Branch(grandchildren) => {
                if !is_branch_key(key) {
                    return Err(ResourceError::InvalidBranchKey { key: key.clone() });
                }
                flatten_into(&path, grandchildren, entries)?;
            }
        }
    }
    Ok(())
}

/// Keys of text entries: ASCII letters, digits, `_` and `-`.
fn is_text_key(key: &str) -> bool {
    key.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Keys of nested trees: ASCII letters, digits and `-`.
fn is_branch_key(key: &str) -> bool {
    key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
