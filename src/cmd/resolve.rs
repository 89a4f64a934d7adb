// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolve command implementation for kegenv.
//!
//! Runs one resolution over the captured environment and prints the
//! result for the subprocess launcher: sorted `KEY=VALUE` lines, or a
//! JSON document carrying the mode and compiler alongside the
//! variables. Nothing is written back into the process environment.

use serde::Serialize;
use tracing::info;

use crate::cli::resolve::ResolveArgs;
use crate::config::KegConfig;
use crate::core::env::container::Env;
use crate::core::host::HostProfile;
use crate::error::Result;
use crate::resolve::compiler::CompilerKind;
use crate::resolve::mode::ToolchainMode;
use crate::resolve::{Resolver, flags};

/// JSON shape of one resolution.
#[derive(Debug, Serialize)]
struct ResolutionReport {
    #[serde(flatten)]
    mode: ToolchainMode,
    compiler: Option<CompilerKind>,
    env: std::collections::BTreeMap<String, String>,
}

/// Main handler for the resolve command.
///
/// # Errors
///
/// Returns an error when the host requires an SDK and none is found,
/// or when JSON serialization fails.
pub fn run_resolve_command(
    args: &ResolveArgs,
    base: &Env,
    profile: &HostProfile,
    config: &KegConfig,
) -> Result<()> {
    let invocation = args.to_invocation();
    let mut resolution = Resolver::new(base, profile, config, &invocation).resolve()?;

    // Universal builds are marked after assembly by re-encoding the
    // shim flag string
    if args.universal && resolution.mode.is_enhanced() {
        flags::add_universal_flag(&mut resolution.env);
    }

    info!(
        mode = %resolution.mode,
        deps = invocation.deps().len(),
        "Resolved build environment"
    );

    if args.json {
        let report = ResolutionReport {
            mode: resolution.mode,
            compiler: resolution.compiler,
            env: resolution.env.to_map(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (key, value) in resolution.env.iter() {
            println!("{key}={value}");
        }
    }

    Ok(())
}
