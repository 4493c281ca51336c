//! Map features and their tags.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Geometry class of a feature.
///
/// Only `LinearSegment` participates in logical-entity dedup: a long way is
/// usually delivered as several segments sharing one logical id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Point,
    LinearSegment,
    Area,
    Relation,
}

impl FeatureKind {
    pub fn is_linear_segment(self) -> bool {
        matches!(self, FeatureKind::LinearSegment)
    }
}

/// Tag mapping of a feature.
///
/// Keeps insertion order so that anything derived from iteration (flag
/// instructions in particular) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(IndexMap<String, String>);

impl Tags {
    /// Create an empty tag mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, returning the previous value for the key if any.
    ///
    /// Re-inserting an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Tags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A map feature as supplied by the host.
///
/// `id` names this physical element; `logical_id` is shared by every element
/// that makes up the same real-world entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub id: i64,
    pub logical_id: i64,
    pub kind: FeatureKind,
    #[serde(default)]
    pub tags: Tags,
}

impl Feature {
    /// Create a feature with no tags.
    pub fn new(id: i64, logical_id: i64, kind: FeatureKind) -> Self {
        Self {
            id,
            logical_id,
            kind,
            tags: Tags::new(),
        }
    }

    /// Shorthand for a point whose logical id equals its id.
    pub fn point(id: i64) -> Self {
        Self::new(id, id, FeatureKind::Point)
    }

    /// Shorthand for one segment of the linear entity `logical_id`.
    pub fn segment(id: i64, logical_id: i64) -> Self {
        Self::new(id, logical_id, FeatureKind::LinearSegment)
    }

    /// Shorthand for an area whose logical id equals its id.
    pub fn area(id: i64) -> Self {
        Self::new(id, id, FeatureKind::Area)
    }

    /// Shorthand for a relation whose logical id equals its id.
    pub fn relation(id: i64) -> Self {
        Self::new(id, id, FeatureKind::Relation)
    }

    /// Builder-style tag insertion.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key, value);
        self
    }

    /// Replace the whole tag mapping.
    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }
}
