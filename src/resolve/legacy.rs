// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compatibility shim for legacy resolution.
//!
//! ```text
//! apply(base, config) --> Env
//!   <prefix>/bin already in PATH?  yes: base unchanged
//!                                  no:  prepend it
//! ```
//!
//! Hosts and flags that opt out of enhanced resolution get the
//! inherited environment back almost untouched. The legacy helper
//! profile itself belongs to the package manager's std-env layer, not
//! to this engine; the one thing guaranteed here is that the package
//! manager's own binaries are reachable.

use tracing::debug;

use crate::config::KegConfig;
use crate::core::env::container::Env;

/// Applies the legacy PATH adjustment to a snapshot of the inherited
/// environment. No reset, no category construction.
#[must_use]
pub fn apply(base: &Env, config: &KegConfig) -> Env {
    let mut env = base.clone();
    let bin = config.bin_dir();
    let bin_str = bin.to_string_lossy();

    if env.path_entries().iter().any(|e| *e == bin_str) {
        debug!(bin = %bin_str, "Legacy environment: bin directory already on PATH");
        return env;
    }

    debug!(bin = %bin_str, "Legacy environment: prepending bin directory");
    env.prepend_path(&bin);
    env
}
