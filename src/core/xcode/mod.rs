// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Developer directory and SDK discovery.
//!
//! ```text
//! SdkInfo::locate(base, profile)
//!   developer_dir: DEVELOPER_DIR --> xcode-select --> /Applications
//!                  --> mdfind (Spotlight), first validated wins
//!   validation:    <dir>/usr/bin/xcrun executable, not the stub at
//!                  /usr/bin/xcrun
//!   sdk_path:      <dev>/Platforms/MacOSX.platform/Developer/SDKs/
//!                  MacOSX<maj.min>.sdk  or  /Developer/SDKs/...
//! ```
//!
//! Discovery exhaustion for the developer directory is fatal; a missing
//! SDK is reported later by the assembler, and only when the host
//! actually needs one.

use crate::core::env::container::Env;
use crate::core::host::version::MacOsVersion;
use crate::core::host::{self, HostProfile};
use crate::error::{Result, SdkError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Where the IDE lands when installed the ordinary way.
const DEFAULT_DEVELOPER_DIR: &str = "/Applications/Xcode.app/Contents/Developer";

/// The pre-4.3 SDK location outside any app bundle.
const LEGACY_SDK_ROOT: &str = "/Developer/SDKs";

/// Spotlight query matching IDE app bundles wherever they were dragged.
const MDFIND_QUERY: &str = "kMDItemCFBundleIdentifier == 'com.apple.dt.Xcode'";

/// Global cache for the standard developer directory chain.
static DEVELOPER_DIR: OnceLock<std::result::Result<PathBuf, String>> = OnceLock::new();

/// Global cache for the SDK path lookup.
static SDK_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Discovered developer directory and, when present, the matching OS SDK.
///
/// The SDK may legitimately be absent: hosts with the standalone
/// command line tools build against `/` and never reference one.
#[derive(Debug, Clone)]
pub struct SdkInfo {
    /// Validated developer directory.
    pub developer_dir: PathBuf,

    /// SDK matching the host OS release, if one exists on disk.
    pub sdk_path: Option<PathBuf>,
}

impl SdkInfo {
    /// Runs developer directory and SDK discovery for the host.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::DeveloperDirNotFound` when every candidate in
    /// the fallback chain fails validation.
    pub fn locate(base: &Env, profile: &HostProfile) -> Result<Self> {
        let developer_dir = developer_dir(base)?;
        let sdk_path = sdk_path(&developer_dir, profile.os_version);
        Ok(Self {
            developer_dir,
            sdk_path,
        })
    }
}

/// Finds the developer directory, memoized.
///
/// A `DEVELOPER_DIR` carried in the captured environment is honored
/// first and bypasses the cache, mirroring how an operator override
/// should behave. The remaining chain (`xcode-select`, the default
/// install location, Spotlight) runs at most once per process.
///
/// # Errors
///
/// Returns `SdkError::DeveloperDirNotFound` when no candidate validates.
pub fn developer_dir(base: &Env) -> Result<PathBuf> {
    if let Some(dir) = base.get("DEVELOPER_DIR") {
        let candidate = PathBuf::from(dir);
        if is_valid_developer_dir(&candidate) {
            trace!(dir = %candidate.display(), "Using DEVELOPER_DIR override");
            return Ok(candidate);
        }
        debug!(
            dir = %candidate.display(),
            "DEVELOPER_DIR failed validation, trying discovery chain"
        );
    }

    DEVELOPER_DIR
        .get_or_init(|| locate_developer_dir().map_err(|e| e.to_string()))
        .clone()
        .map_err(|e| anyhow::anyhow!(e))
}

fn locate_developer_dir() -> Result<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    if let Some(selected) = host::xcode_select_path() {
        candidates.push(selected);
    }
    candidates.push(PathBuf::from(DEFAULT_DEVELOPER_DIR));
    candidates.extend(
        mdfind_xcode_bundles()
            .into_iter()
            .map(|app| app.join("Contents").join("Developer")),
    );

    first_valid_candidate(&candidates).ok_or_else(|| SdkError::DeveloperDirNotFound.into())
}

/// Returns the first candidate that passes developer directory
/// validation, in the order given.
fn first_valid_candidate(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|c| is_valid_developer_dir(c))
        .cloned()
}

/// A developer directory is usable when it carries its own executable
/// `usr/bin/xcrun`. The system `/usr/bin/xcrun` is a forwarding stub
/// and proves nothing about the directory that claims it.
fn is_valid_developer_dir(dir: &Path) -> bool {
    let xcrun = dir.join("usr").join("bin").join("xcrun");
    if xcrun == Path::new("/usr/bin/xcrun") {
        return false;
    }
    host::is_executable(&xcrun)
}

/// App bundles Spotlight knows about, newest-indexed first.
fn mdfind_xcode_bundles() -> Vec<PathBuf> {
    let program = which::which("mdfind").unwrap_or_else(|_| PathBuf::from("/usr/bin/mdfind"));

    let output = Command::new(&program)
        .arg(MDFIND_QUERY)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout)
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(PathBuf::from)
            .collect(),
        Ok(out) => {
            debug!(code = ?out.status.code(), "mdfind exited non-zero");
            Vec::new()
        }
        Err(e) => {
            debug!(error = %e, "mdfind unavailable");
            Vec::new()
        }
    }
}

/// Finds the SDK for the OS release under the developer directory,
/// memoized. Returns `None` when no SDK directory exists.
pub fn sdk_path(developer_dir: &Path, os_version: MacOsVersion) -> Option<PathBuf> {
    SDK_PATH
        .get_or_init(|| {
            let path = locate_sdk_path(developer_dir, os_version);
            debug!(path = ?path, "Located SDK");
            path
        })
        .clone()
}

/// First existing SDK directory for the release, checking the bundled
/// platform location then the pre-4.3 standalone location.
pub fn locate_sdk_path(developer_dir: &Path, os_version: MacOsVersion) -> Option<PathBuf> {
    let sdk_name = format!("MacOSX{}.sdk", os_version.sdk_component());

    let candidates = [
        developer_dir
            .join("Platforms")
            .join("MacOSX.platform")
            .join("Developer")
            .join("SDKs")
            .join(&sdk_name),
        Path::new(LEGACY_SDK_ROOT).join(&sdk_name),
    ];

    candidates.into_iter().find(|p| p.is_dir())
}

#[cfg(test)]
mod tests;
