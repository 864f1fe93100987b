// SPDX-FileCopyrightText: 2026 Atria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Atria extension-point crates.

use strum::{Display, EnumString};

/// Lifecycle state of a plugin slot.
///
/// A slot is `Unregistered` until the first contribution arrives, `Open`
/// while contributions are accepted, and `Locked` once an enumerating
/// read has happened. Keyed point lookups never change the state.
///
/// A name can move straight from `Unregistered` to `Locked`: reading a
/// slot nobody contributed to still closes it to late registrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum SlotState {
    Unregistered,
    Open,
    Locked,
}
