use super::signature::normalize_member_key;
use std::collections::HashMap;

/// Normalized signature key to trimmed description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocIndex {
    entries: HashMap<String, String>,
}

impl DocIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Fails with the normalized key, leaving the index
    /// untouched, when that key is already present.
    pub(crate) fn try_insert(&mut self, raw_key: &str, description: &str) -> Result<(), String> {
        let key = normalize_member_key(raw_key);
        if self.entries.contains_key(&key) {
            return Err(key);
        }
        self.entries.insert(key, description.trim().to_string());
        Ok(())
    }

    /// Build an index from `(member name, description)` pairs.
    ///
    /// Fails with the normalized key of the first entry that collides with
    /// an earlier one.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut index = DocIndex::new();
        for (key, description) in entries {
            index.try_insert(key.as_ref(), description.as_ref())?;
        }
        Ok(index)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Description for `key`, empty when undocumented.
    pub fn describe(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries ordered by key.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
