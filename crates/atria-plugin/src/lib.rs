// SPDX-FileCopyrightText: 2026 Atria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin slot registry for Atria component extension points.
//!
//! Components expose named slots (for example `"menu"` or
//! `"toolbar:overflow"`) that independent modules fill with ordered,
//! optionally keyed contributions during setup. The component enumerates
//! a slot exactly when it needs the final list; that first read locks
//! the slot, so late registrants fail loudly instead of silently missing
//! an earlier consumer.
//!
//! # Usage
//!
//! ```
//! use atria_plugin::{PluginOptions, PluginRegistry};
//!
//! let mut registry = PluginRegistry::new();
//! registry.register("menu", "copy").unwrap();
//! registry
//!     .register_with("menu", "paste", PluginOptions::new().with_sort(-10))
//!     .unwrap();
//!
//! // Explicit sort keys rank before the implicit 0.
//! assert_eq!(registry.plugins("menu"), vec!["paste", "copy"]);
//!
//! // The read above closed the slot.
//! assert!(registry.register("menu", "cut").is_err());
//! ```

pub mod registry;
pub mod slot;

pub use atria_core::{AtriaError, SlotState};
pub use registry::PluginRegistry;
pub use slot::{PluginEntry, PluginOptions, PluginSet};
