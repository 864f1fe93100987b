// SPDX-FileCopyrightText: 2026 Atria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of named plugin slots.
//!
//! The `PluginRegistry` mediates between many producers that contribute
//! entries to named slots and the consumer that enumerates a slot. The
//! contract is register-before-read: the first enumerating read of a
//! slot name permanently closes that name to further registration, so a
//! consumer can never observe two different lists for the same slot.

use std::collections::{HashMap, HashSet};

use atria_core::{AtriaError, SlotState};
use tracing::{debug, trace};

use crate::slot::{PluginEntry, PluginOptions, PluginSet};

/// Registry of plugin slots for one extension-point family.
///
/// The payload type `T` is opaque to the registry; each component family
/// constructs a registry typed to the contribution shape it expects and
/// passes it to producer modules during setup. All operations are
/// synchronous. The registry contains no interior locking; wrap it in a
/// `Mutex` or `RwLock` to share it across threads.
pub struct PluginRegistry<T> {
    slots: HashMap<String, PluginSet<T>>,
    consumed: HashSet<String>,
}

impl<T> PluginRegistry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            consumed: HashSet::new(),
        }
    }

    /// Register a plugin with default options (no key, no explicit sort).
    pub fn register(&mut self, slot: &str, plugin: T) -> Result<(), AtriaError> {
        self.register_with(slot, plugin, PluginOptions::new())
    }

    /// Register a plugin with explicit options.
    ///
    /// Creates the slot on first use. Fails with
    /// [`AtriaError::AlreadyConsumed`] once the slot has been enumerated
    /// and with [`AtriaError::DuplicateKey`] when `options.key` collides
    /// with an existing entry in the same slot.
    pub fn register_with(
        &mut self,
        slot: &str,
        plugin: T,
        options: PluginOptions,
    ) -> Result<(), AtriaError> {
        if slot.is_empty() {
            return Err(AtriaError::EmptySlotName);
        }
        if self.consumed.contains(slot) {
            return Err(AtriaError::AlreadyConsumed {
                slot: slot.to_string(),
            });
        }

        trace!(slot = %slot, key = ?options.key, sort = ?options.sort, "registering plugin");

        let set = self
            .slots
            .entry(slot.to_string())
            .or_insert_with(PluginSet::new);
        set.push(slot, PluginEntry::new(plugin, options))
    }

    /// The payload registered under `key` in `slot`, if any.
    ///
    /// A point lookup does not consume the slot: keyed reads may be
    /// interleaved with ongoing registration. Only enumeration locks.
    pub fn plugin_by_key(&self, slot: &str, key: &str) -> Option<&T> {
        self.slots.get(slot).and_then(|set| set.plugin_by_key(key))
    }

    /// Lifecycle state of `slot`.
    pub fn slot_state(&self, slot: &str) -> SlotState {
        if self.consumed.contains(slot) {
            SlotState::Locked
        } else if self.slots.contains_key(slot) {
            SlotState::Open
        } else {
            SlotState::Unregistered
        }
    }

    /// Number of entries currently registered in `slot`.
    pub fn slot_len(&self, slot: &str) -> usize {
        self.slots.get(slot).map_or(0, PluginSet::len)
    }

    /// Number of slots that have received at least one registration.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no slot has received a registration.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T: Clone> PluginRegistry<T> {
    /// Enumerate the plugins registered in `slot`, in final order.
    ///
    /// The first call for a given name locks that name against further
    /// registration, whether or not anything was registered, and applies
    /// the one-time stable sort by ascending sort key when at least one
    /// entry carries an explicit one. An unknown slot yields an empty
    /// vector.
    ///
    /// Every call returns a freshly allocated copy of the payloads, so
    /// repeated calls agree element-wise but never alias, and mutating
    /// the returned vector cannot disturb the registry.
    pub fn plugins(&mut self, slot: &str) -> Vec<T> {
        let first_read = self.consumed.insert(slot.to_string());

        match self.slots.get_mut(slot) {
            Some(set) => {
                if first_read {
                    set.sort_for_consume();
                    debug!(slot = %slot, count = set.len(), "slot consumed; registration closed");
                }
                set.payloads()
            }
            None => {
                if first_read {
                    debug!(slot = %slot, "empty slot consumed; registration closed");
                }
                Vec::new()
            }
        }
    }
}

impl<T> Default for PluginRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
