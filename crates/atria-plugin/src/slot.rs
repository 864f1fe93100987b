// SPDX-FileCopyrightText: 2026 Atria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-slot storage: plugin entries, registration options, and ordering.
//!
//! A [`PluginSet`] holds every contribution made to one named slot, in
//! insertion order. Ordering by explicit sort keys is applied once, when
//! the owning registry hands the slot to its consumer for the first time.

use atria_core::AtriaError;

/// Metadata attached to one plugin contribution.
///
/// Both fields are optional: a bare `register` call contributes an
/// anonymous entry that enumerates in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginOptions {
    /// Identifier unique within the slot, for point lookup and duplicate
    /// rejection.
    pub key: Option<String>,
    /// Explicit ordering key. Entries without one rank as 0.
    pub sort: Option<i64>,
}

impl PluginOptions {
    /// Options with no key and no explicit sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a lookup key, unique within the target slot.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Attach an explicit sort key.
    pub fn with_sort(mut self, sort: i64) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// One producer's contribution to a slot: an opaque payload plus the
/// options it was registered with.
#[derive(Debug, Clone)]
pub struct PluginEntry<T> {
    plugin: T,
    key: Option<String>,
    sort: Option<i64>,
}

impl<T> PluginEntry<T> {
    pub(crate) fn new(plugin: T, options: PluginOptions) -> Self {
        Self {
            plugin,
            key: options.key,
            sort: options.sort,
        }
    }

    /// The payload supplied by the producer.
    pub fn plugin(&self) -> &T {
        &self.plugin
    }

    /// The lookup key, if the producer supplied one.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Effective ordering key: the explicit sort value, or 0.
    pub fn sort_key(&self) -> i64 {
        self.sort.unwrap_or(0)
    }

    pub(crate) fn has_explicit_sort(&self) -> bool {
        self.sort.is_some()
    }
}

/// All contributions for one named slot.
///
/// Entries stay in insertion order until the first enumerating read; a
/// set where at least one entry carries an explicit sort key is then
/// stable-sorted by ascending effective key, exactly once. Whether
/// sorting is needed is computed from the entries themselves rather than
/// tracked as registration-time state.
#[derive(Debug)]
pub struct PluginSet<T> {
    entries: Vec<PluginEntry<T>>,
}

impl<T> PluginSet<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, rejecting a key already present in this set.
    pub(crate) fn push(&mut self, slot: &str, entry: PluginEntry<T>) -> Result<(), AtriaError> {
        if let Some(key) = entry.key() {
            if self.contains_key(key) {
                return Err(AtriaError::DuplicateKey {
                    slot: slot.to_string(),
                    key: key.to_string(),
                });
            }
        }
        self.entries.push(entry);
        Ok(())
    }

    pub(crate) fn sort_for_consume(&mut self) {
        if self.entries.iter().any(PluginEntry::has_explicit_sort) {
            // Vec::sort_by_key is stable: equal keys keep insertion order.
            self.entries.sort_by_key(PluginEntry::sort_key);
        }
    }

    /// The payload registered under `key`, if any.
    pub fn plugin_by_key(&self, key: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|e| e.key() == Some(key))
            .map(PluginEntry::plugin)
    }

    fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key() == Some(key))
    }

    /// Number of entries in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been contributed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> PluginSet<T> {
    /// A fresh copy of the payloads in current set order.
    pub(crate) fn payloads(&self) -> Vec<T> {
        self.entries.iter().map(|e| e.plugin.clone()).collect()
    }
}
