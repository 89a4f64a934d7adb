// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `resolve` command.
//!
//! ```text
//! kegenv resolve [DEPS...]
//!   --use-clang | --use-gcc | --use-llvm   (mutually exclusive)
//!   --env {std|super}   --x11   --build-bottle   --universal
//!   --verbose-build     --json
//! ```

use clap::{Args, ValueEnum};

use crate::resolve::Invocation;
use crate::resolve::compiler::CompilerKind;

/// Requested environment flavor, `--env=std` opts out of enhanced
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvFlavor {
    Std,
    Super,
}

/// Arguments for the resolve command.
#[derive(Debug, Clone, Default, Args)]
pub struct ResolveArgs {
    /// Build-time dependency names, in formula order.
    #[arg(value_name = "DEPS")]
    pub deps: Vec<String>,

    /// Force the clang front end, wins over KEG_CC.
    #[arg(long = "use-clang", conflicts_with_all = ["use_gcc", "use_llvm"])]
    pub use_clang: bool,

    /// Force the gcc front end, wins over KEG_CC.
    #[arg(long = "use-gcc", conflicts_with_all = ["use_clang", "use_llvm"])]
    pub use_gcc: bool,

    /// Force the llvm-gcc front end, wins over KEG_CC.
    #[arg(long = "use-llvm", conflicts_with_all = ["use_clang", "use_gcc"])]
    pub use_llvm: bool,

    /// Environment flavor; std skips enhanced resolution entirely.
    #[arg(long = "env", value_name = "FLAVOR", value_enum)]
    pub env: Option<EnvFlavor>,

    /// Configure the compiler shims for a redistributable bottle build.
    #[arg(long = "build-bottle")]
    pub build_bottle: bool,

    /// Include X11 search paths.
    #[arg(long = "x11")]
    pub x11: bool,

    /// Mark the environment for a universal binary build.
    #[arg(long = "universal")]
    pub universal: bool,

    /// Propagate verbosity into the build (VERBOSE=1).
    #[arg(long = "verbose-build")]
    pub verbose_build: bool,

    /// Print the environment as JSON instead of KEY=VALUE lines.
    #[arg(long = "json")]
    pub json: bool,
}

impl ResolveArgs {
    /// Compiler forced on the command line, if any.
    #[must_use]
    pub const fn compiler_override(&self) -> Option<CompilerKind> {
        if self.use_clang {
            Some(CompilerKind::Clang)
        } else if self.use_gcc {
            Some(CompilerKind::Gcc)
        } else if self.use_llvm {
            Some(CompilerKind::LlvmGcc)
        } else {
            None
        }
    }

    /// Converts the parsed arguments into a resolver invocation.
    #[must_use]
    pub fn to_invocation(&self) -> Invocation {
        Invocation::builder()
            .deps(self.deps.clone())
            .x11(self.x11)
            .maybe_compiler_override(self.compiler_override())
            .std_env(self.env == Some(EnvFlavor::Std))
            .build_bottle(self.build_bottle)
            .verbose(self.verbose_build)
            .build()
    }
}
