// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered search path construction per category.
//!
//! ```text
//! build_paths(category, ctx) --> PathList --> export()
//!
//! priority order within every category:
//!   dependency entries -> global prefix entries -> X11 entries
//!   -> system / SDK entries
//!
//! export(): dedup (first occurrence wins) -> keep existing
//! directories -> join ':' -> None when nothing is left
//! ```
//!
//! A path that does not exist is not an error. Missing directories are
//! filtered at export, so optional dependencies and bare hosts degrade
//! to shorter lists.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::KegConfig;
use crate::core::host::HostProfile;
use crate::core::host::version::MacOsVersion;
use crate::core::xcode::SdkInfo;

/// The search path categories of the assembled environment, each
/// exported through its own variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchPathCategory {
    Binary,
    PkgConfig,
    CmakePrefix,
    CmakeInclude,
    CmakeLibrary,
    Aclocal,
}

impl SearchPathCategory {
    pub const ALL: [Self; 6] = [
        Self::Binary,
        Self::PkgConfig,
        Self::CmakePrefix,
        Self::CmakeInclude,
        Self::CmakeLibrary,
        Self::Aclocal,
    ];

    /// The environment variable this category exports to.
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Binary => "PATH",
            Self::PkgConfig => "PKG_CONFIG_PATH",
            Self::CmakePrefix => "CMAKE_PREFIX_PATH",
            Self::CmakeInclude => "CMAKE_INCLUDE_PATH",
            Self::CmakeLibrary => "CMAKE_LIBRARY_PATH",
            Self::Aclocal => "ACLOCAL_PATH",
        }
    }
}

/// An ordered list of candidate directories for one category.
#[derive(Debug, Clone, Default)]
pub struct PathList {
    entries: Vec<PathBuf>,
}

impl PathList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(path.into());
    }

    pub fn extend<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.entries.extend(paths.into_iter().map(Into::into));
    }

    /// Candidate entries in priority order, duplicates and all.
    #[must_use]
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Entries that survive export: first occurrence wins, only
    /// existing directories remain, order preserved.
    #[must_use]
    pub fn existing_entries(&self) -> Vec<PathBuf> {
        let mut seen = BTreeSet::new();
        self.entries
            .iter()
            .filter(|p| seen.insert(p.as_path()))
            .filter(|p| p.is_dir())
            .cloned()
            .collect()
    }

    /// The exported colon-joined value, or `None` when no entry
    /// survives (the variable is then left unset).
    #[must_use]
    pub fn export(&self) -> Option<String> {
        let entries = self.existing_entries();
        if entries.is_empty() {
            return None;
        }
        Some(
            entries
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(":"),
        )
    }
}

/// Everything path construction reads. Borrowed from the resolver for
/// the duration of one assembly.
#[derive(Debug, Clone, Copy)]
pub struct PathContext<'a> {
    pub deps: &'a [String],
    pub config: &'a KegConfig,
    pub profile: &'a HostProfile,
    /// Policy directory when resolving enhanced, absent otherwise.
    pub policy_dir: Option<&'a Path>,
    /// Discovery result, present once the resolver has run it.
    pub sdk: Option<&'a SdkInfo>,
    /// Whether the build asked for X11.
    pub x11: bool,
}

impl PathContext<'_> {
    fn sdk_mode(&self) -> bool {
        self.profile.sdk_without_clt()
    }

    fn sdk_path(&self) -> Option<&Path> {
        self.sdk.and_then(|s| s.sdk_path.as_deref())
    }

    /// Root for paths that live inside the SDK on IDE-only hosts and
    /// directly under `/` when the command line tools are installed.
    fn sdk_or_root(&self) -> PathBuf {
        if self.sdk_mode()
            && let Some(sdk) = self.sdk_path()
        {
            return sdk.to_path_buf();
        }
        PathBuf::from("/")
    }

    /// The X11 install to draw paths from, when the build asked for
    /// one. Hosts without a standalone install may still carry X11
    /// inside the SDK.
    fn x11_prefix(&self) -> Option<PathBuf> {
        if !self.x11 {
            return None;
        }
        if let Some(prefix) = &self.profile.x11_prefix {
            return Some(prefix.clone());
        }
        let candidate = self.sdk_path()?.join("usr").join("X11");
        candidate.join("include").is_dir().then_some(candidate)
    }

    /// The opt directory of one dependency.
    fn dep_opt(&self, dep: &str) -> PathBuf {
        self.config.opt_dir().join(dep)
    }
}

/// Builds the candidate list for one category.
#[must_use]
pub fn build_paths(category: SearchPathCategory, ctx: &PathContext<'_>) -> PathList {
    match category {
        SearchPathCategory::Binary => binary_paths(ctx),
        SearchPathCategory::PkgConfig => pkg_config_paths(ctx),
        SearchPathCategory::CmakePrefix => cmake_prefix_paths(ctx),
        SearchPathCategory::CmakeInclude => cmake_include_paths(ctx),
        SearchPathCategory::CmakeLibrary => cmake_library_paths(ctx),
        SearchPathCategory::Aclocal => aclocal_paths(ctx),
    }
}

fn binary_paths(ctx: &PathContext<'_>) -> PathList {
    let mut list = PathList::new();

    if let Some(policy) = ctx.policy_dir {
        list.push(policy);
    }

    // IDE-only hosts need the bundled toolchain binaries early, the
    // system stubs would otherwise shadow them
    if ctx.sdk_mode()
        && let Some(sdk) = ctx.sdk
    {
        list.push(sdk.developer_dir.join("usr").join("bin"));
        list.push(
            sdk.developer_dir
                .join("Toolchains")
                .join("XcodeDefault.xctoolchain")
                .join("usr")
                .join("bin"),
        );
    }

    for dep in ctx.deps {
        list.push(ctx.dep_opt(dep).join("bin"));
    }
    list.push(ctx.config.bin_dir());

    if let Some(x11) = ctx.x11_prefix() {
        list.push(x11.join("bin"));
    }

    list.extend(["/usr/bin", "/bin", "/usr/sbin", "/sbin"]);
    list
}

fn pkg_config_paths(ctx: &PathContext<'_>) -> PathList {
    let mut list = PathList::new();

    // All lib/pkgconfig entries precede all share/pkgconfig entries;
    // compiled .pc files win over arch-independent ones across deps
    for dep in ctx.deps {
        list.push(ctx.dep_opt(dep).join("lib").join("pkgconfig"));
    }
    for dep in ctx.deps {
        list.push(ctx.dep_opt(dep).join("share").join("pkgconfig"));
    }

    list.push(ctx.config.prefix.join("lib").join("pkgconfig"));
    list.push(ctx.config.prefix.join("share").join("pkgconfig"));

    if let Some(x11) = ctx.x11_prefix() {
        list.push(x11.join("lib").join("pkgconfig"));
        list.push(x11.join("share").join("pkgconfig"));
    }

    // 10.8 stopped shipping some .pc files, the repository carries
    // curated replacements
    if ctx.profile.os_version.release() >= MacOsVersion::MOUNTAIN_LION {
        list.push(ctx.config.pkgconfig_override_dir());
    }

    list
}

fn cmake_prefix_paths(ctx: &PathContext<'_>) -> PathList {
    let mut list = PathList::new();

    for dep in ctx.deps {
        list.push(ctx.dep_opt(dep));
    }

    // The prefix goes ahead of everything the package manager does
    // not own
    list.push(ctx.config.prefix.clone());

    if ctx.sdk_mode()
        && let Some(sdk) = ctx.sdk_path()
    {
        list.push(sdk.join("usr"));
    }

    list
}

fn cmake_include_paths(ctx: &PathContext<'_>) -> PathList {
    let mut list = PathList::new();
    let sdk_or_root = ctx.sdk_or_root();

    if let Some(x11) = ctx.x11_prefix() {
        list.push(x11.join("include").join("freetype2"));
    }

    if !ctx.deps.iter().any(|d| d == "libxml2") {
        list.push(sdk_or_root.join("usr").join("include").join("libxml2"));
    }

    if ctx.sdk_mode()
        && let Some(sdk) = ctx.sdk_path()
    {
        list.push(sdk.join("usr").join("include").join("apache2"));
        list.push(
            sdk.join("System")
                .join("Library")
                .join("Frameworks")
                .join("Python.framework")
                .join("Versions")
                .join("Current")
                .join("include")
                .join("python2.7"),
        );
    }

    if ctx.x11_prefix().is_none() {
        list.push(
            sdk_or_root
                .join("System")
                .join("Library")
                .join("Frameworks")
                .join("OpenGL.framework")
                .join("Versions")
                .join("Current")
                .join("Headers"),
        );
    }

    if let Some(x11) = ctx.x11_prefix() {
        list.push(x11.join("include"));
    }

    list
}

fn cmake_library_paths(ctx: &PathContext<'_>) -> PathList {
    let mut list = PathList::new();

    if ctx.x11_prefix().is_none() {
        list.push(
            ctx.sdk_or_root()
                .join("System")
                .join("Library")
                .join("Frameworks")
                .join("OpenGL.framework")
                .join("Versions")
                .join("Current")
                .join("Libraries"),
        );
    }

    if let Some(x11) = ctx.x11_prefix() {
        list.push(x11.join("lib"));
    }

    list
}

fn aclocal_paths(ctx: &PathContext<'_>) -> PathList {
    let mut list = PathList::new();

    for dep in ctx.deps {
        list.push(ctx.dep_opt(dep).join("share").join("aclocal"));
    }
    list.push(ctx.config.prefix.join("share").join("aclocal"));

    // Fixed location: XQuartz installs its macros here regardless of
    // which prefix won the scan
    if ctx.x11 {
        list.push("/opt/X11/share/aclocal");
    }

    list
}
