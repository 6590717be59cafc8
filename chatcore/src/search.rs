//! Substring search and first-letter sectioning over in-memory entries.
//!
//! Entries are never modified. Filtering keeps the original order and
//! grouping keeps first-seen order, both for the groups and inside them.

use std::collections::HashMap;

use log::{debug, warn};

use crate::error::SearchError;

/// Anything that can be listed in a searchable, sectioned list.
pub trait Searchable {
    fn display_name(&self) -> &str;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Section key for a display name: its literal first character.
///
/// No case folding is applied, so `"alice"` and `"Alice"` land in different
/// sections. Returns `None` for an empty name.
pub fn group_key(display_name: &str) -> Option<char> {
    display_name.chars().next()
}

/// Returns the entries whose display name contains `query`, ignoring case.
///
/// An empty query matches everything.
pub fn filter<'a, T: Searchable>(entries: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return entries.iter().collect();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.display_name().to_lowercase().contains(&needle))
        .collect()
}

/// Entries sharing one section key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryGroup<'a, T> {
    pub key: char,
    pub entries: Vec<&'a T>,
}

struct GroupBuilder<'a, T> {
    groups: Vec<EntryGroup<'a, T>>,
    slots: HashMap<char, usize>,
}

impl<'a, T> GroupBuilder<'a, T> {
    fn new() -> Self {
        Self {
            groups: Vec::new(),
            slots: HashMap::new(),
        }
    }

    fn push(&mut self, key: char, entry: &'a T) {
        let slot = *self.slots.entry(key).or_insert_with(|| {
            self.groups.push(EntryGroup {
                key,
                entries: Vec::new(),
            });
            self.groups.len() - 1
        });
        self.groups[slot].entries.push(entry);
    }

    fn finish(self) -> Vec<EntryGroup<'a, T>> {
        self.groups
    }
}

/// Partitions `entries` by [`group_key`], in first-seen order.
///
/// Fails on the first entry with an empty display name rather than inventing
/// a section for it.
pub fn group<'a, T, I>(entries: I) -> Result<Vec<EntryGroup<'a, T>>, SearchError>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut builder = GroupBuilder::new();
    for (position, entry) in entries.into_iter().enumerate() {
        let key = group_key(entry.display_name())
            .ok_or(SearchError::EmptyDisplayName { position })?;
        builder.push(key, entry);
    }
    Ok(builder.finish())
}

/// A fixed list of entries, checked once so that every later grouping succeeds.
#[derive(Debug, Clone)]
pub struct SearchIndex<T> {
    entries: Vec<T>,
}

impl<T: Searchable> SearchIndex<T> {
    /// Builds an index, rejecting any entry with an empty display name.
    pub fn new(entries: impl Into<Vec<T>>) -> Result<Self, SearchError> {
        let entries = entries.into();
        if let Some(position) = entries
            .iter()
            .position(|entry| entry.display_name().is_empty())
        {
            warn!(target: "Search", "Rejecting index: empty display name at position {position}");
            return Err(SearchError::EmptyDisplayName { position });
        }
        debug!(target: "Search", "Indexed {} entries", entries.len());
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn filter(&self, query: &str) -> Vec<&T> {
        filter(&self.entries, query)
    }

    /// Filtered entries split into sections.
    pub fn grouped(&self, query: &str) -> Vec<EntryGroup<'_, T>> {
        let mut builder = GroupBuilder::new();
        for entry in self.filter(query) {
            // Empty names were rejected in `new`.
            if let Some(key) = group_key(entry.display_name()) {
                builder.push(key, entry);
            }
        }
        builder.finish()
    }

    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.entries.iter().find(|entry| predicate(entry))
    }
}
