// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Table of retired option names and what to do when one shows up.
//!
//! ```text
//! lookup(name) --> Disposition
//!   Noop          old formula DSL tweak, accepted and ignored
//!   WarnRedirect  still honored, warn with the replacement
//! ```
//!
//! Formulas and operator environments written against older releases
//! keep working: the names stay recognized, the behavior is decided
//! here instead of scattered through resolution.

use tracing::{debug, warn};

/// What happens when a retired option is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Accepted and ignored; superseded resolution covers it.
    Noop,

    /// Still honored this release; the warning names the replacement.
    WarnRedirect {
        replacement: &'static str,
    },
}

/// A retired option name and its disposition.
#[derive(Debug, Clone, Copy)]
pub struct Deprecation {
    pub name: &'static str,
    pub disposition: Disposition,
}

/// Every name retired from the build environment surface.
///
/// The `KEG_USE_*` variables still select a compiler; the rest are
/// formula DSL tweaks that per-category path construction and the
/// compiler shims made meaningless.
pub const DEPRECATIONS: &[Deprecation] = &[
    Deprecation {
        name: "KEG_USE_CLANG",
        disposition: Disposition::WarnRedirect {
            replacement: "KEG_CC=clang",
        },
    },
    Deprecation {
        name: "KEG_USE_LLVM",
        disposition: Disposition::WarnRedirect {
            replacement: "KEG_CC=llvm",
        },
    },
    Deprecation {
        name: "KEG_USE_GCC",
        disposition: Disposition::WarnRedirect {
            replacement: "KEG_CC=gcc",
        },
    },
    Deprecation {
        name: "m32",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "m64",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "gcc_4_0_1",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "fast",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "O4",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "O3",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "O2",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "Os",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "Og",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "O1",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "libxml2",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "minimal_optimization",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "no_optimization",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "enable_warnings",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "x11",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "set_cpu_flags",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "macosxsdk",
        disposition: Disposition::Noop,
    },
    Deprecation {
        name: "remove_macosxsdk",
        disposition: Disposition::Noop,
    },
];

/// Looks up a retired option by exact name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Deprecation> {
    DEPRECATIONS.iter().find(|d| d.name == name)
}

/// Reports use of a retired option per its disposition and returns it,
/// or `None` for names this table does not know.
pub fn note_use(name: &str) -> Option<Disposition> {
    let deprecation = lookup(name)?;
    match deprecation.disposition {
        Disposition::Noop => {
            debug!(option = name, "Ignoring retired build environment tweak");
        }
        Disposition::WarnRedirect { replacement } => {
            warn!("{name} is deprecated, use {replacement} instead");
        }
    }
    Some(deprecation.disposition)
}
