// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and copy-on-write implementation.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write)
//! data: Option<Arc<EnvData>> + owned flag
//! clone shares Arc until copy_for_write()
//!
//! Env::capture() snapshots the process environment once; resolution
//! only ever reads and transforms that snapshot, never std::env.
//! ```

use super::types::{EnvData, EnvFlags};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// A set of environment variables with copy-on-write semantics.
///
/// This struct provides efficient cloning by sharing data between copies
/// until a modification is made.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone)]
pub struct Env {
    data: Option<Arc<EnvData>>,
    /// Whether we own the data exclusively (for copy-on-write)
    owned: bool,
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: None,
            owned: false,
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        let data = EnvData::from_vars(vars);
        Self {
            data: Some(Arc::new(data)),
            owned: true,
        }
    }

    /// Captures the current process environment.
    #[must_use]
    pub fn capture() -> Self {
        Self::from_map(std::env::vars().collect())
    }

    /// Sets an environment variable.
    ///
    /// # Arguments
    /// * `key` - The variable name
    /// * `value` - The variable value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set_with_flags(key, value, EnvFlags::Replace)
    }

    /// Sets an environment variable with specific flags.
    pub fn set_with_flags(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        flags: EnvFlags,
    ) -> &mut Self {
        self.copy_for_write();
        let key = key.into();
        let value = value.into();

        if let Some(ref mut data) = self.data {
            // SAFETY: We know we own the data exclusively after copy_for_write
            let data = Arc::make_mut(data);

            match flags {
                EnvFlags::Replace => {
                    data.vars_mut().insert(key, value);
                }
                EnvFlags::Append => {
                    if let Some(existing) = data.vars_mut().get_mut(&key) {
                        existing.push_str(&value);
                    } else {
                        data.vars_mut().insert(key, value);
                    }
                }
                EnvFlags::Prepend => {
                    if let Some(existing) = data.vars_mut().get_mut(&key) {
                        let mut new_value = value;
                        new_value.push_str(existing);
                        *existing = new_value;
                    } else {
                        data.vars_mut().insert(key, value);
                    }
                }
            }
        }

        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.vars().get(key).map(std::string::String::as_str))
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.copy_for_write();
        if let Some(ref mut data) = self.data {
            let data = Arc::make_mut(data);
            data.vars_mut().remove(key);
        }
        self
    }

    /// Prepends a path to the PATH environment variable.
    pub fn prepend_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.modify_path(path, EnvFlags::Prepend)
    }

    /// Appends a path to the PATH environment variable.
    pub fn append_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.modify_path(path, EnvFlags::Append)
    }

    /// Modifies the PATH environment variable.
    fn modify_path(&mut self, path: impl AsRef<Path>, flags: EnvFlags) -> &mut Self {
        let path_str = path.as_ref().to_string_lossy();

        match flags {
            EnvFlags::Prepend => {
                if let Some(current) = self.get("PATH") {
                    let new_path = format!("{path_str}:{current}");
                    self.set("PATH", new_path);
                } else {
                    self.set("PATH", path_str.into_owned());
                }
            }
            EnvFlags::Append => {
                if let Some(current) = self.get("PATH") {
                    let new_path = format!("{current}:{path_str}");
                    self.set("PATH", new_path);
                } else {
                    self.set("PATH", path_str.into_owned());
                }
            }
            EnvFlags::Replace => {
                self.set("PATH", path_str.into_owned());
            }
        }

        self
    }

    /// Returns the entries of the PATH variable, split on ':'.
    ///
    /// Empty entries are dropped.
    #[must_use]
    pub fn path_entries(&self) -> Vec<String> {
        self.get("PATH")
            .map(|p| {
                p.split(':')
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.data
            .as_ref()
            .map(|d| d.vars().clone())
            .unwrap_or_default()
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .iter()
            .flat_map(|d| d.vars().iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().is_none_or(|d| d.vars().is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.vars().len())
    }

    /// Ensures we have exclusive ownership of the data for modification.
    pub fn copy_for_write(&mut self) {
        if self.owned {
            return;
        }

        match &self.data {
            Some(data) => {
                self.data = Some(Arc::new((**data).clone()));
            }
            None => {
                self.data = Some(Arc::new(EnvData::new()));
            }
        }

        self.owned = true;
    }
}
