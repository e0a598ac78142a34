//! Metadata pairs and records.
//!
//! A record is the ordered list of `{key, value}` string pairs attached to
//! one configurable entity (a provider integration, a tool, an endpoint).
//! Keys are unique within a record: writing a key that already exists
//! replaces the earlier entry.

mod key;

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::MetadataError;

pub use self::key::MetadataKey;

/// One configuration key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataPair {
    pub key: MetadataKey,
    pub value: String,
}

impl MetadataPair {
    pub fn new(key: impl Into<MetadataKey>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered, key-unique list of metadata pairs.
///
/// Serializes as a JSON array of `{"key": .., "value": ..}` objects, the
/// same shape the backend SDK carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<MetadataPair>", into = "Vec<MetadataPair>")]
pub struct MetadataRecord {
    pairs: Vec<MetadataPair>,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a record from its JSON array form.
    pub fn from_json(raw: &str) -> Result<Self, MetadataError> {
        serde_json::from_str(raw).map_err(|e| MetadataError::InvalidInput(e.to_string()))
    }

    /// Read a record from `reader`. Blank input is an empty record.
    pub fn from_reader(mut reader: impl Read) -> crate::Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        if raw.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(Self::from_json(&raw)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetadataPair> {
        self.pairs.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &MetadataKey> {
        self.pairs.iter().map(|p| &p.key)
    }

    pub fn get(&self, key: &MetadataKey) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| &p.key == key)
            .map(|p| p.value.as_str())
    }

    pub fn contains(&self, key: &MetadataKey) -> bool {
        self.get(key).is_some()
    }

    /// Write `value` for `key`.
    ///
    /// An existing entry is updated where it stands; a new key is appended.
    pub fn upsert(&mut self, key: impl Into<MetadataKey>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|p| p.key == key) {
            Some(existing) => existing.value = value,
            None => self.pairs.push(MetadataPair { key, value }),
        }
    }

    /// Copy-on-write variant of [`upsert`](Self::upsert).
    pub fn with_value(&self, key: impl Into<MetadataKey>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.upsert(key, value);
        next
    }

    pub fn remove(&mut self, key: &MetadataKey) -> Option<String> {
        let idx = self.pairs.iter().position(|p| &p.key == key)?;
        Some(self.pairs.remove(idx).value)
    }

    /// Pairs whose wire key starts with `prefix`, in record order.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a MetadataPair> {
        self.pairs.iter().filter(move |p| p.key.has_prefix(prefix))
    }

    /// Keep only the pairs whose key satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&MetadataKey) -> bool) {
        self.pairs.retain(|p| keep(&p.key));
    }

    /// Append a pair, replacing and removing any earlier entry for its key.
    fn push_latest(&mut self, pair: MetadataPair) {
        self.pairs.retain(|p| p.key != pair.key);
        self.pairs.push(pair);
    }
}

impl From<Vec<MetadataPair>> for MetadataRecord {
    fn from(pairs: Vec<MetadataPair>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<MetadataRecord> for Vec<MetadataPair> {
    fn from(record: MetadataRecord) -> Self {
        record.pairs
    }
}

impl FromIterator<MetadataPair> for MetadataRecord {
    fn from_iter<I: IntoIterator<Item = MetadataPair>>(iter: I) -> Self {
        let mut record = Self::new();
        record.extend(iter);
        record
    }
}

impl Extend<MetadataPair> for MetadataRecord {
    fn extend<I: IntoIterator<Item = MetadataPair>>(&mut self, iter: I) {
        for pair in iter {
            self.push_latest(pair);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MetadataRecord
where
    K: Into<MetadataKey>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| MetadataPair::new(k, v))
            .collect()
    }
}

impl IntoIterator for MetadataRecord {
    type Item = MetadataPair;
    type IntoIter = std::vec::IntoIter<MetadataPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a MetadataRecord {
    type Item = &'a MetadataPair;
    type IntoIter = std::slice::Iter<'a, MetadataPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
