// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for kegenv.
//!
//! # Sources
//!
//! ```text
//! captured Env --> config::Environment (prefix KEG) --> KegConfig
//!
//! KEG_PREFIX=/usr/local      → prefix = "/usr/local"
//! KEG_REPOSITORY=/repo       → repository = "/repo"
//! KEG_CC=gcc                 → cc = "gcc"
//! KEG_MAKE_JOBS=8            → make_jobs = "8"
//! KEG_USE_CLANG=1            → use_clang = "1" (deprecated, presence)
//! ```
//!
//! Configuration is read from the environment snapshot handed to the
//! resolver, never from the live process environment, so a resolver
//! run is reproducible from its inputs. Unknown `KEG_*` variables are
//! ignored; a parent build may legitimately leave its own behind.


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::env::container::Env;
use crate::error::{ConfigError, Result};

/// Package manager configuration relevant to environment resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KegConfig {
    /// Installation prefix all kegs link into.
    pub prefix: PathBuf,

    /// Repository checkout carrying curated environment data.
    /// Defaults to the prefix.
    pub repository: Option<PathBuf>,

    /// Typed compiler request (`clang`, `gcc`, `llvm`, `llvm-gcc`).
    pub cc: Option<String>,

    /// Deprecated compiler request, presence means requested.
    pub use_clang: Option<String>,

    /// Deprecated compiler request, presence means requested.
    pub use_llvm: Option<String>,

    /// Deprecated compiler request, presence means requested.
    pub use_gcc: Option<String>,

    /// Requested make parallelism; non-numeric values fall back to the
    /// host CPU count.
    pub make_jobs: Option<String>,
}

impl Default for KegConfig {
    fn default() -> Self {
        Self {
            prefix: PathBuf::from("/usr/local"),
            repository: None,
            cc: None,
            use_clang: None,
            use_llvm: None,
            use_gcc: None,
            make_jobs: None,
        }
    }
}

impl KegConfig {
    /// Loads configuration from a captured environment snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if a `KEG_*` variable cannot be deserialized
    /// into the configuration structure.
    pub fn from_env(base: &Env) -> Result<Self> {
        let vars: config::Map<String, String> = base
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();

        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix("KEG").source(Some(vars)))
            .build()
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;

        let config = cfg
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;

        Ok(config)
    }

    /// Repository checkout, falling back to the prefix.
    #[must_use]
    pub fn repository(&self) -> &Path {
        self.repository.as_deref().unwrap_or(&self.prefix)
    }

    /// Directory of per-keg opt symlinks (`<prefix>/opt`).
    #[must_use]
    pub fn opt_dir(&self) -> PathBuf {
        self.prefix.join("opt")
    }

    /// Linked binary directory (`<prefix>/bin`).
    #[must_use]
    pub fn bin_dir(&self) -> PathBuf {
        self.prefix.join("bin")
    }

    /// Curated environment policy directory whose children are named
    /// by the toolchain version they support.
    #[must_use]
    pub fn policy_env_dir(&self) -> PathBuf {
        self.repository().join("Library").join("ENV")
    }

    /// Curated pkg-config replacements for .pc files the OS stopped
    /// shipping.
    #[must_use]
    pub fn pkgconfig_override_dir(&self) -> PathBuf {
        self.repository().join("Library").join("Keg").join("pkgconfig")
    }

    /// Effective make parallelism: the configured value when it parses
    /// to at least one job, otherwise the given CPU count.
    #[must_use]
    pub fn make_jobs(&self, cpu_count: usize) -> usize {
        self.make_jobs
            .as_deref()
            .and_then(|j| j.parse::<usize>().ok())
            .filter(|&j| j >= 1)
            .unwrap_or(cpu_count)
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let fmt_opt = |v: &Option<String>| v.clone().unwrap_or_default();

        let mut options = BTreeMap::new();
        options.insert("cc".to_string(), fmt_opt(&self.cc));
        options.insert("make_jobs".to_string(), fmt_opt(&self.make_jobs));
        options.insert("prefix".to_string(), self.prefix.display().to_string());
        options.insert(
            "repository".to_string(),
            self.repository().display().to_string(),
        );
        options.insert("use_clang".to_string(), fmt_opt(&self.use_clang));
        options.insert("use_gcc".to_string(), fmt_opt(&self.use_gcc));
        options.insert("use_llvm".to_string(), fmt_opt(&self.use_llvm));

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
