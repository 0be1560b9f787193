use std::collections::BTreeMap;
use std::fmt::{Formatter, Result as FmtResult};

use indexmap::IndexMap;
use serde::de::{Deserializer, Error as DeError, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

/// A node of a nested translation tree.
///
/// Leaves hold translated text; branches hold named children. Trees are
/// flattened into dotted keys when added to a translator, so
/// `{"sub": {"title": "Hi"}}` added for `en` becomes `en.sub.title`.
///
/// Trees can be built in code with the [`resources!`](crate::resources)
/// macro or deserialized from any serde format. While deserializing, values
/// that are neither strings nor maps (numbers, booleans, nulls, arrays) are
/// dropped.
///
/// # Example
///
/// ```
/// use tolk::{Resource, resources};
///
/// let tree: Resource = serde_json::from_str(r#"{"hello": "Hello", "answer": 42}"#).unwrap();
/// assert_eq!(tree, resources! { "hello" => "Hello" });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// Translated text.
    Text(String),

    /// Named child nodes, in document order.
    Branch(IndexMap<String, Resource>),
}

impl Resource {
    /// Returns an empty branch.
    pub fn empty() -> Resource {
        Resource::Branch(IndexMap::new())
    }

    /// Get the text of a leaf node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Resource::Text(text) => Some(text),
            Resource::Branch(_) => None,
        }
    }

    /// Get the children of a branch node.
    pub fn as_branch(&self) -> Option<&IndexMap<String, Resource>> {
        match self {
            Resource::Text(_) => None,
            Resource::Branch(children) => Some(children),
        }
    }
}

impl Default for Resource {
    fn default() -> Self {
        Resource::empty()
    }
}

impl From<&str> for Resource {
    fn from(text: &str) -> Self {
        Resource::Text(text.to_string())
    }
}

impl From<String> for Resource {
    fn from(text: String) -> Self {
        Resource::Text(text)
    }
}

impl From<IndexMap<String, Resource>> for Resource {
    fn from(children: IndexMap<String, Resource>) -> Self {
        Resource::Branch(children)
    }
}

/// Children end up in key order.
impl From<BTreeMap<String, Resource>> for Resource {
    fn from(children: BTreeMap<String, Resource>) -> Self {
        Resource::Branch(children.into_iter().collect())
    }
}

impl<K, V> FromIterator<(K, V)> for Resource
where
    K: Into<String>,
    V: Into<Resource>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Resource::Branch(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(NodeVisitor)?
            .ok_or_else(|| D::Error::custom("expected a string or a map of translations"))
    }
}

/// A tree position that may hold an unsupported value.
struct Node(Option<Resource>);

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor).map(Node)
    }
}

/// Accepts strings and maps, and yields `None` for every other value.
struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Option<Resource>;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(formatter, "a string or a map of translations")
    }

    fn visit_str<E: DeError>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(Resource::Text(v.to_string())))
    }

    fn visit_string<E: DeError>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(Resource::Text(v)))
    }

    fn visit_bool<E: DeError>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_i64<E: DeError>(self, _: i64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_u64<E: DeError>(self, _: u64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_f64<E: DeError>(self, _: f64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: DeError>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: DeError>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut children = IndexMap::new();
        while let Some(key) = map.next_key::<String>()? {
            if let Node(Some(child)) = map.next_value()? {
                children.insert(key, child);
            }
        }
        Ok(Some(Resource::Branch(children)))
    }
}
