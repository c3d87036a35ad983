//! Static allow-lists mapping caller-facing keys to trusted SQL expressions.
//!
//! Both halves of an entry are `&'static str`. Request data can select an
//! entry by key but can never contribute text to an expression.

/// One allow-listed column: the key a caller sends and the expression spliced into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowListEntry {
    pub key: &'static str,
    pub expression: &'static str,
}

impl AllowListEntry {
    pub const fn new(key: &'static str, expression: &'static str) -> Self {
        Self { key, expression }
    }
}

/// Ordered, immutable set of allow-listed columns for one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowList {
    entries: &'static [AllowListEntry],
}

impl AllowList {
    /// Allow-list that accepts nothing (reports without dynamic filters).
    pub const EMPTY: AllowList = AllowList { entries: &[] };

    pub const fn new(entries: &'static [AllowListEntry]) -> Self {
        Self { entries }
    }

    /// Look up an entry by its caller-facing key (case-sensitive).
    pub fn get(&self, key: &str) -> Option<&'static AllowListEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in definition order, used in error responses.
    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.key).collect()
    }

    pub fn entries(&self) -> &'static [AllowListEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First key that appears more than once, if any.
    pub fn duplicate_key(&self) -> Option<&'static str> {
        self.entries
            .iter()
            .enumerate()
            .find(|(i, entry)| self.entries[..*i].iter().any(|prev| prev.key == entry.key))
            .map(|(_, entry)| entry.key)
    }
}
