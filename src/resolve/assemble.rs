// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Final environment assembly for enhanced resolution.
//!
//! ```text
//! assemble(base, ...) --> Env
//!   1. reset build-relevant and known-problematic keys
//!   2. precondition: IDE-only host must have an SDK (fatal)
//!   3. CC/LD/CXX invocation names, MAKEFLAGS parallelism
//!   4. six search path categories (unset when empty)
//!   5. KEG_CC, KEG_CCCFG, KEG_SDKROOT + CMAKE_FRAMEWORK_PATH (SDK mode)
//!   6. VERBOSE passthrough
//! ```
//!
//! The base snapshot is never mutated; assembly starts from a clone
//! every time, so identical inputs give identical output and nothing
//! leaks between package builds.

use tracing::debug;

use super::Invocation;
use super::compiler::CompilerKind;
use super::flags::CompilerConfigFlags;
use super::mode::ToolchainMode;
use super::paths::{PathContext, SearchPathCategory, build_paths};
use crate::config::KegConfig;
use crate::core::env::container::Env;
use crate::core::host::HostProfile;
use crate::core::xcode::SdkInfo;
use crate::error::{Result, SdkError};

/// Build-relevant keys a prior environment must not leak through.
pub const RESET_KEYS: &[&str] = &[
    "CC",
    "CXX",
    "CPP",
    "OBJC",
    "MAKE",
    "CFLAGS",
    "CXXFLAGS",
    "OBJCFLAGS",
    "OBJCXXFLAGS",
    "LDFLAGS",
    "CPPFLAGS",
    "MACOSX_DEPLOYMENT_TARGET",
    "SDKROOT",
    "CMAKE_PREFIX_PATH",
    "CMAKE_INCLUDE_PATH",
    "CMAKE_FRAMEWORK_PATH",
];

/// Ambient variables with a record of breaking build tools.
pub const PROBLEM_KEYS: &[&str] = &[
    // make targets that cd around misbehave under CDPATH
    "CDPATH",
    // can break CMake's compiler probes
    "GREP_OPTIONS",
    // autotools does not like this
    "CLICOLOR_FORCE",
];

/// Assembles the complete build environment for one invocation.
///
/// # Errors
///
/// Fails before producing any environment when the host builds against
/// an SDK but none was found.
#[allow(clippy::too_many_arguments)]
pub fn assemble(
    base: &Env,
    profile: &HostProfile,
    config: &KegConfig,
    invocation: &Invocation,
    mode: &ToolchainMode,
    sdk: Option<&SdkInfo>,
    compiler: CompilerKind,
) -> Result<Env> {
    let mut env = base.clone();

    for key in RESET_KEYS {
        env.remove(key);
    }
    for key in PROBLEM_KEYS {
        env.remove(key);
    }

    // Nothing may be written past this point if the SDK is missing
    if profile.sdk_without_clt() {
        let info = sdk.ok_or(SdkError::DeveloperDirNotFound)?;
        if info.sdk_path.is_none() {
            return Err(SdkError::SdkNotFound {
                developer_dir: info.developer_dir.clone(),
            }
            .into());
        }
    }

    // Generic driver names; the selected kind only reaches the shims
    // through KEG_CC
    env.set("CC", "cc");
    env.set("LD", "cc");
    env.set("CXX", "c++");

    if env.get("MAKEFLAGS").is_none() {
        let jobs = config.make_jobs(profile.cpu_count);
        env.set("MAKEFLAGS", format!("-j{jobs}"));
    }

    let policy_dir = match mode {
        ToolchainMode::Enhanced { policy_dir } => Some(policy_dir.as_path()),
        ToolchainMode::Legacy => None,
    };
    let ctx = PathContext {
        deps: invocation.deps(),
        config,
        profile,
        policy_dir,
        sdk,
        x11: invocation.x11(),
    };

    for category in SearchPathCategory::ALL {
        let var = category.env_var();
        env.remove(var);
        if let Some(value) = build_paths(category, &ctx).export() {
            env.set(var, value);
        }
    }

    env.set("KEG_CC", compiler.to_string());
    env.set(
        "KEG_CCCFG",
        CompilerConfigFlags::from_context(profile, invocation.build_bottle()).encode(),
    );

    if profile.sdk_without_clt()
        && let Some(sdk_path) = sdk.and_then(|s| s.sdk_path.as_deref())
    {
        env.set("KEG_SDKROOT", sdk_path.to_string_lossy());
        env.set(
            "CMAKE_FRAMEWORK_PATH",
            sdk_path
                .join("System")
                .join("Library")
                .join("Frameworks")
                .to_string_lossy(),
        );
    }

    if invocation.verbose() {
        env.set("VERBOSE", "1");
    }

    debug!(vars = env.len(), compiler = %compiler, "Assembled build environment");
    Ok(env)
}
