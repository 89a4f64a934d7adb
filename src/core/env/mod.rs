// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write BTreeMap<String, String>)
//! Sources: Env::capture(), Env::from_map(), Env::new()
//! Ops: set/get/remove/prepend_path/append_path/path_entries
//! ```
//!
//! - **Case-sensitive keys**: unix semantics, `PATH != path`
//! - **Copy-on-write**: Clones share data until modified
//! - **Snapshot-based**: the resolver never touches `std::env` after capture

pub mod container;
pub mod types;

#[cfg(test)]
mod tests;
