// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Toolchain mode decision.
//!
//! ```text
//! ModeDecision::decide(profile, config, invocation)
//!   xcode-select path valid        --+
//!   IDE installation recognized    --+--> all true: Enhanced { policy_dir }
//!   usable policy directory child  --+    any false: Legacy
//!   --env=std not requested        --+
//! ```
//!
//! Pure and synchronous; every fact is already in hand when this runs.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::Invocation;
use crate::config::KegConfig;
use crate::core::host::HostProfile;
use crate::core::host::version::XcodeVersion;

/// How the build environment gets resolved for this invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ToolchainMode {
    /// Full resolution through the curated policy directory.
    Enhanced { policy_dir: PathBuf },

    /// Compatibility PATH prepend only.
    Legacy,
}

impl ToolchainMode {
    #[must_use]
    pub const fn is_enhanced(&self) -> bool {
        matches!(self, Self::Enhanced { .. })
    }
}

impl fmt::Display for ToolchainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enhanced { .. } => write!(f, "super"),
            Self::Legacy => write!(f, "std"),
        }
    }
}

/// The mode plus the outcome of each gating check, kept for operator
/// diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct ModeDecision {
    pub xcode_select_valid: bool,
    pub xcode_installed: bool,
    pub policy_dir: Option<PathBuf>,
    pub std_env_requested: bool,
    pub mode: ToolchainMode,
}

impl ModeDecision {
    /// Decides the toolchain mode for one invocation.
    #[must_use]
    pub fn decide(profile: &HostProfile, config: &KegConfig, invocation: &Invocation) -> Self {
        let xcode_select_valid = profile.xcode_select_valid();
        let xcode_installed = profile.xcode_installed();
        let policy_dir = usable_policy_dir(&config.policy_env_dir(), profile.xcode_version);
        let std_env_requested = invocation.std_env();

        let mode = match &policy_dir {
            Some(dir) if xcode_select_valid && xcode_installed && !std_env_requested => {
                ToolchainMode::Enhanced {
                    policy_dir: dir.clone(),
                }
            }
            _ => ToolchainMode::Legacy,
        };
        debug!(%mode, "Decided toolchain mode");

        Self {
            xcode_select_valid,
            xcode_installed,
            policy_dir,
            std_env_requested,
            mode,
        }
    }

    /// Format the decision for display, deterministic order.
    #[must_use]
    pub fn format_report(&self) -> Vec<String> {
        let policy = self
            .policy_dir
            .as_ref()
            .map_or_else(String::new, |p| p.display().to_string());

        vec![
            format!("xcode_select_valid = {}", self.xcode_select_valid),
            format!("xcode_installed    = {}", self.xcode_installed),
            format!("policy_dir         = {policy}"),
            format!("std_env_requested  = {}", self.std_env_requested),
            format!("mode               = {}", self.mode),
        ]
    }
}

/// Picks the policy directory child for the installed IDE: children
/// are named by the newest toolchain version they support, so the
/// winner is the largest name not newer than the IDE itself.
///
/// Comparison is numeric per component. Children with unparseable
/// names are skipped.
pub(super) fn usable_policy_dir(
    env_dir: &Path,
    xcode_version: Option<XcodeVersion>,
) -> Option<PathBuf> {
    let xcode_version = xcode_version?;

    let entries = std::fs::read_dir(env_dir).ok()?;
    entries
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let version: XcodeVersion = entry.file_name().to_str()?.parse().ok()?;
            (version <= xcode_version).then(|| (version, entry.path()))
        })
        .max_by_key(|(version, _)| *version)
        .map(|(_, path)| path)
}
