// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host toolchain discovery.
//!
//! ```text
//! HostProfile::detect() --> probes (memoized per process)
//!   sw_vers -productVersion   --> os_version
//!   available_parallelism     --> cpu_count
//!   /usr/bin/{clang,lldb}     --> clt_installed
//!   xcode-select -print-path  --> xcode_select_path
//!   xcodebuild -version       --> xcode_version (regex)
//!   /usr/X11, /opt/X11 scan   --> x11_prefix
//!
//! derived: xcode_select_valid(), xcode_installed(), sdk_without_clt()
//! ```
//!
//! Probes run external commands at most once per process; resolution
//! code receives the collected `HostProfile` and stays deterministic.

pub mod version;


use crate::error::{ProbeError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;
use tracing::{debug, trace};
use version::{MacOsVersion, XcodeVersion};

/// Roots where an X11 distribution may live. A candidate is usable
/// when its `include` child is a directory.
const X11_ROOTS: &[&str] = &["/usr/X11", "/opt/X11"];

/// Global cache for the OS version probe.
static OS_VERSION: OnceLock<std::result::Result<MacOsVersion, String>> = OnceLock::new();

/// Global cache for the command line tools probe.
static CLT_INSTALLED: OnceLock<bool> = OnceLock::new();

/// Global cache for the selected developer directory probe.
static XCODE_SELECT_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global cache for the IDE version probe.
static XCODE_VERSION: OnceLock<Option<XcodeVersion>> = OnceLock::new();

/// Global cache for the X11 prefix scan.
static X11_PREFIX: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Facts about the build host gathered once per process.
///
/// Tests construct this directly; the binary fills it via [`detect`](Self::detect).
#[derive(Debug, Clone)]
pub struct HostProfile {
    /// OS release from `sw_vers -productVersion`.
    pub os_version: MacOsVersion,

    /// Logical CPU count for default make parallelism.
    pub cpu_count: usize,

    /// Whether the standalone command line tools are present.
    pub clt_installed: bool,

    /// Output of `xcode-select -print-path`, if any.
    pub xcode_select_path: Option<PathBuf>,

    /// IDE version from `xcodebuild -version`, if an IDE is found.
    pub xcode_version: Option<XcodeVersion>,

    /// Usable X11 prefix, if one is installed.
    pub x11_prefix: Option<PathBuf>,
}

impl HostProfile {
    /// Probes the live host. Each probe is memoized process-wide, so
    /// repeated calls never re-run external commands.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS version cannot be determined. All
    /// other probes degrade to absent values.
    pub fn detect() -> Result<Self> {
        Ok(Self {
            os_version: os_version()?,
            cpu_count: cpu_count(),
            clt_installed: clt_installed(),
            xcode_select_path: xcode_select_path(),
            xcode_version: xcode_version(),
            x11_prefix: x11_prefix(),
        })
    }

    /// Whether `xcode-select` points somewhere usable. The bare root
    /// `/` is what a wiped or never-run `xcode-select` reports and is
    /// never a valid developer directory.
    #[must_use]
    pub fn xcode_select_valid(&self) -> bool {
        self.xcode_select_path
            .as_deref()
            .is_some_and(|p| p != Path::new("/"))
    }

    /// Whether an IDE installation was recognized.
    #[must_use]
    pub const fn xcode_installed(&self) -> bool {
        self.xcode_version.is_some()
    }

    /// Whether builds must reference an SDK explicitly: the installed
    /// IDE no longer bundles command line tool paths and the standalone
    /// tools are absent.
    #[must_use]
    pub fn sdk_without_clt(&self) -> bool {
        self.xcode_version
            .is_some_and(|v| v >= XcodeVersion::SDK_REQUIRED)
            && !self.clt_installed
    }
}

/// OS release version, memoized.
///
/// # Errors
///
/// Returns an error if `sw_vers` cannot be run or its output does not
/// parse as a version.
pub fn os_version() -> Result<MacOsVersion> {
    OS_VERSION
        .get_or_init(|| os_version_impl().map_err(|e| e.to_string()))
        .clone()
        .map_err(|e| anyhow::anyhow!(e))
}

fn os_version_impl() -> Result<MacOsVersion> {
    let output = run_probe("sw_vers", "/usr/bin/sw_vers", &["-productVersion"])?;
    let version = output.parse::<MacOsVersion>()?;
    debug!(%version, "Detected OS version");
    Ok(version)
}

/// Logical CPU count, with a small fixed fallback when the host will
/// not say.
#[must_use]
pub fn cpu_count() -> usize {
    std::thread::available_parallelism().map_or(4, std::num::NonZeroUsize::get)
}

/// Whether the standalone command line tools are installed, memoized.
///
/// Presence means `/usr/bin/clang` and `/usr/bin/lldb` are executable
/// without any IDE involvement.
pub fn clt_installed() -> bool {
    *CLT_INSTALLED.get_or_init(|| {
        let installed = is_executable("/usr/bin/clang") && is_executable("/usr/bin/lldb");
        debug!(installed, "Probed command line tools");
        installed
    })
}

/// The developer directory reported by `xcode-select -print-path`,
/// memoized. Absent when the command fails or prints nothing.
pub fn xcode_select_path() -> Option<PathBuf> {
    XCODE_SELECT_PATH
        .get_or_init(|| {
            let path = run_probe("xcode-select", "/usr/bin/xcode-select", &["-print-path"])
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from);
            debug!(path = ?path, "Probed xcode-select path");
            path
        })
        .clone()
}

/// The IDE version extracted from `xcodebuild -version`, memoized.
/// Absent when no IDE is installed or the output is unrecognizable.
pub fn xcode_version() -> Option<XcodeVersion> {
    *XCODE_VERSION.get_or_init(|| {
        let output = run_probe("xcodebuild", "/usr/bin/xcodebuild", &["-version"]).ok()?;
        let version = parse_xcodebuild_version(&output);
        debug!(version = ?version, "Probed IDE version");
        version
    })
}

/// Extracts the version from `xcodebuild -version` output, whose first
/// line reads `Xcode <version>`.
fn parse_xcodebuild_version(output: &str) -> Option<XcodeVersion> {
    let re = regex::Regex::new(r"Xcode (\d+(?:\.\d+){0,2})").ok()?;
    re.captures(output)?.get(1)?.as_str().parse().ok()
}

/// First usable X11 prefix among the standard roots, memoized.
pub fn x11_prefix() -> Option<PathBuf> {
    X11_PREFIX
        .get_or_init(|| {
            let prefix = X11_ROOTS
                .iter()
                .map(PathBuf::from)
                .find(|p| p.join("include").is_dir());
            debug!(prefix = ?prefix, "Probed X11 prefix");
            prefix
        })
        .clone()
}

/// Whether the path names an executable regular file.
pub(crate) fn is_executable(path: impl AsRef<Path>) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path.as_ref())
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Runs a probe command, preferring PATH lookup with a fixed fallback
/// location, and returns trimmed stdout.
fn run_probe(name: &str, fallback: &str, args: &[&str]) -> Result<String> {
    let program = which::which(name).unwrap_or_else(|_| PathBuf::from(fallback));
    trace!(program = %program.display(), ?args, "Running probe");

    let output = Command::new(&program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| ProbeError::CommandFailed {
            command: name.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(ProbeError::CommandFailed {
            command: name.to_string(),
            message: format!("exit code {:?}", output.status.code()),
        }
        .into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
