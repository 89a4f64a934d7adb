// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compiler front end selection.
//!
//! ```text
//! precedence, first match wins:
//!   1. CLI override (--use-gcc / --use-llvm / --use-clang)
//!   2. KEG_CC typed value (clang | gcc | llvm | llvm-gcc)
//!   3. deprecated KEG_USE_CLANG / KEG_USE_LLVM / KEG_USE_GCC
//!   4. clang
//! ```
//!
//! Selection never fails a build. An unrecognized `KEG_CC` warns and
//! falls through; the deprecated booleans still work but warn with
//! their replacement.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use super::deprecated;
use crate::config::KegConfig;
use crate::error::ConfigError;

/// Compiler front end fed to the shims through `KEG_CC`.
///
/// Distinct from the invocation names (`CC=cc`): the kind only decides
/// which real compiler the shim execs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompilerKind {
    #[default]
    Clang,
    Gcc,
    LlvmGcc,
}

impl fmt::Display for CompilerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clang => write!(f, "clang"),
            Self::Gcc => write!(f, "gcc"),
            Self::LlvmGcc => write!(f, "llvm-gcc"),
        }
    }
}

impl FromStr for CompilerKind {
    type Err = ConfigError;

    /// Case-sensitive on purpose: `KEG_CC=Clang` is a typo, not a
    /// request.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clang" => Ok(Self::Clang),
            "gcc" => Ok(Self::Gcc),
            "llvm" | "llvm-gcc" => Ok(Self::LlvmGcc),
            _ => Err(ConfigError::InvalidValue {
                key: "cc".to_string(),
                message: format!("unrecognized compiler '{s}'"),
            }),
        }
    }
}

/// Resolves the compiler for one invocation.
#[must_use]
pub fn select(config: &KegConfig, cli_override: Option<CompilerKind>) -> CompilerKind {
    if let Some(kind) = cli_override {
        debug!(compiler = %kind, "Compiler forced by command line");
        return kind;
    }

    if let Some(cc) = config.cc.as_deref() {
        match cc.parse::<CompilerKind>() {
            Ok(kind) => {
                debug!(compiler = %kind, "Compiler selected by KEG_CC");
                return kind;
            }
            Err(_) => {
                warn!("KEG_CC={cc} is not a recognized compiler, falling back");
            }
        }
    }

    let deprecated_requests = [
        (config.use_clang.is_some(), "KEG_USE_CLANG", CompilerKind::Clang),
        (config.use_llvm.is_some(), "KEG_USE_LLVM", CompilerKind::LlvmGcc),
        (config.use_gcc.is_some(), "KEG_USE_GCC", CompilerKind::Gcc),
    ];
    for (present, name, kind) in deprecated_requests {
        if present {
            deprecated::note_use(name);
            return kind;
        }
    }

    CompilerKind::default()
}
