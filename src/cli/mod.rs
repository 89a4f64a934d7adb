// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for kegenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! kegenv [global options] <command>
//! resolve [deps...]     resolve and print the build environment
//! mode                  print the toolchain mode decision
//! options               print effective KEG_* configuration
//! version
//! ```

pub mod global;
pub mod resolve;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::resolve::ResolveArgs;
use clap::{Parser, Subcommand};

/// Keg Build Environment Resolver - Rust Port
#[derive(Debug, Parser)]
#[command(
    name = "kegenv",
    author,
    version,
    about = "Keg Build Environment Resolver",
    long_about = "kegenv Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Computes the minimal deterministic build environment for one\n\
                  source package: toolchain mode, compiler selection, SDK\n\
                  discovery and per-category search path lists. The result is\n\
                  printed for the subprocess launcher; the calling process\n\
                  environment is never modified.",
    after_help = "CONFIGURATION:\n\n\
                  kegenv reads its configuration from KEG_* environment\n\
                  variables captured at startup: KEG_PREFIX, KEG_REPOSITORY,\n\
                  KEG_CC, KEG_MAKE_JOBS and the deprecated KEG_USE_CLANG,\n\
                  KEG_USE_LLVM and KEG_USE_GCC. DEVELOPER_DIR overrides the\n\
                  developer directory discovery chain. Run `kegenv options`\n\
                  to see the effective values."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the environment.
    Options,

    /// Prints the toolchain mode decision and each gating check.
    Mode,

    /// Resolves and prints the build environment for a dependency list.
    Resolve(ResolveArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
