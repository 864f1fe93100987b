// SPDX-FileCopyrightText: 2026 Atria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builder for pre-seeded plugin registries.
//!
//! `RegistryHarness` records seed registrations and replays them against
//! a fresh registry on `build()`, so each test owns an isolated instance
//! instead of sharing process-wide state. Contract violations in the
//! seeds (duplicate keys, empty slot names) surface as build errors.

use atria_core::AtriaError;
use atria_plugin::{PluginOptions, PluginRegistry};

/// Replace a registry with a pristine instance.
///
/// This is the test-only counterpart of "reset": every slot returns to
/// the unregistered state, as if it had never existed. Production code
/// must never need this; a registry's slots are meant to lock exactly
/// once per process.
pub fn reset_registry<T>(registry: &mut PluginRegistry<T>) {
    *registry = PluginRegistry::new();
}

/// Builder collecting seed registrations for a test registry.
pub struct RegistryHarness<T> {
    seeds: Vec<(String, T, PluginOptions)>,
}

impl<T> RegistryHarness<T> {
    /// Create an empty harness.
    pub fn new() -> Self {
        Self { seeds: Vec::new() }
    }

    /// Seed an anonymous plugin into `slot`.
    pub fn with_plugin(mut self, slot: &str, plugin: T) -> Self {
        self.seeds
            .push((slot.to_string(), plugin, PluginOptions::new()));
        self
    }

    /// Seed a keyed plugin into `slot`.
    pub fn with_keyed_plugin(mut self, slot: &str, key: &str, plugin: T) -> Self {
        self.seeds
            .push((slot.to_string(), plugin, PluginOptions::new().with_key(key)));
        self
    }

    /// Seed a plugin with an explicit sort key into `slot`.
    pub fn with_sorted_plugin(mut self, slot: &str, sort: i64, plugin: T) -> Self {
        self.seeds
            .push((slot.to_string(), plugin, PluginOptions::new().with_sort(sort)));
        self
    }

    /// Seed a plugin with full options into `slot`.
    pub fn with_plugin_options(mut self, slot: &str, plugin: T, options: PluginOptions) -> Self {
        self.seeds.push((slot.to_string(), plugin, options));
        self
    }

    /// Build a fresh registry and replay the seeds in recorded order.
    pub fn build(self) -> Result<PluginRegistry<T>, AtriaError> {
        let mut registry = PluginRegistry::new();
        for (slot, plugin, options) in self.seeds {
            registry.register_with(&slot, plugin, options)?;
        }
        Ok(registry)
    }
}

impl<T> Default for RegistryHarness<T> {
    fn default() -> Self {
        Self::new()
    }
}
