//! Structured header block.
//!
//! [`HeaderMap`] keeps header names exactly as they appeared on the wire (no
//! case folding) and maps each one to every value seen for it, in arrival order.
//! Names iterate in the order they were first inserted.
//!
//! The `Content-Type` value is tracked out of band through
//! [`HeaderMap::set_content_type`] and is only merged into the entries when the
//! map is encoded.

use std::collections::HashMap;

use indexmap::IndexMap;

/// Canonical header name used when the content type is merged at encode time.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Ordered multimap from raw header name to its values.
///
/// Lookups are exact-match. Equality compares entries regardless of their
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: IndexMap<String, Vec<String>>,
    content_type: Option<String>,
}

impl HeaderMap {
    /// Creates an empty map without a content type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the values stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Appends `values` to the sequence under `name`, creating it on first use.
    pub fn append<N, I>(&mut self, name: N, values: I)
    where
        N: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.entries.entry(name.into()).or_default().extend(values.into_iter().map(Into::into));
    }

    /// Replaces the values under `name`, returning the previous ones.
    ///
    /// An existing entry keeps its position; a new one goes last.
    pub fn insert<N, I>(&mut self, name: N, values: I) -> Option<Vec<String>>
    where
        N: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.entries.insert(name.into(), values.into_iter().map(Into::into).collect())
    }

    /// Removes the entry under `name`, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.entries.shift_remove(name)
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn set_content_type<S: Into<String>>(&mut self, content_type: S) {
        self.content_type = Some(content_type.into());
    }

    pub fn clear_content_type(&mut self) -> Option<String> {
        self.content_type.take()
    }

    /// Returns an independent copy of the entries.
    ///
    /// The copy does not include the out-of-band content type.
    pub fn to_map(&self) -> HashMap<String, Vec<String>> {
        self.entries.iter().map(|(name, values)| (name.clone(), values.clone())).collect()
    }
}

impl<N, I> FromIterator<(N, I)> for HeaderMap
where
    N: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut map = HeaderMap::new();
        for (name, values) in iter {
            map.append(name, values);
        }
        map
    }
}
