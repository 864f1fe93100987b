// SPDX-FileCopyrightText: 2026 Atria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Atria component framework.

use thiserror::Error;

/// The primary error type used across Atria extension-point operations.
///
/// Every variant represents a contract violation by the integrating
/// application (wrong module load order, colliding contribution keys).
/// There is no transient failure mode: the same call sequence fails the
/// same way every run, so callers are expected to let these propagate
/// during startup rather than catch and retry.
#[derive(Debug, Error)]
pub enum AtriaError {
    /// Registration attempted on a slot that has already been read.
    #[error("slot '{slot}' already consumed: plugins must be registered before the first read")]
    AlreadyConsumed { slot: String },

    /// Registration attempted with a key already present in the slot.
    #[error("duplicate plugin key '{key}' in slot '{slot}'")]
    DuplicateKey { slot: String, key: String },

    /// Slot names identify extension points and must not be empty.
    #[error("slot name must not be empty")]
    EmptySlotName,
}
