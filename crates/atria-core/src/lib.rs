// SPDX-FileCopyrightText: 2026 Atria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Atria component framework extension points.
//!
//! This crate provides the error type and lifecycle vocabulary shared by
//! the registry crate and its test utilities. Component crates consume
//! the registry through `atria-plugin`; they only see this crate through
//! the re-exported [`AtriaError`] in their `Result` types.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AtriaError;
pub use types::SlotState;
