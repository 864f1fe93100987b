// SPDX-FileCopyrightText: 2026 Atria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal cloneable payload for exercising registries in tests.

/// A stand-in for whatever contribution shape a component family defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockPlugin {
    /// Label identifying the contribution in assertions.
    pub label: String,
}

impl MockPlugin {
    /// Create a mock payload with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}
