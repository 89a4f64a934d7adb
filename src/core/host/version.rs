// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version types for OS releases and IDE installations.
//!
//! ```text
//! MacOsVersion: major.minor[.patch], toolchain gates compare release()
//!   LION = 10.7, MOUNTAIN_LION = 10.8
//! XcodeVersion: up to 3 numeric components, SDK_REQUIRED = 4.3
//!   numeric tuple ordering ("4.10" > "4.9")
//! ```

use crate::error::ProbeError;
use std::fmt;
use std::str::FromStr;

/// An OS release version as reported by `sw_vers -productVersion`.
///
/// Ordering is numeric per component; a missing patch level sorts
/// below an explicit `.0`. Toolchain gates must compare on
/// [`release()`](Self::release) so that `10.8.4` still counts as the
/// `10.8` named release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacOsVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl MacOsVersion {
    /// 10.7, the last release whose IDE bundled command line tool paths.
    pub const LION: Self = Self::release_of(10, 7);

    /// 10.8, the release that stopped shipping several .pc files and
    /// whose sed rejects non-unicode input.
    pub const MOUNTAIN_LION: Self = Self::release_of(10, 8);

    const fn release_of(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// The named release this version belongs to (patch level dropped).
    #[must_use]
    pub const fn release(self) -> Self {
        Self::release_of(self.major, self.minor)
    }

    /// The `major.minor` form used in SDK directory names.
    #[must_use]
    pub fn sdk_component(self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl FromStr for MacOsVersion {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut parts = s.split('.');

        let parse = |part: Option<&str>| -> Option<u32> { part.and_then(|p| p.parse().ok()) };

        let major = parse(parts.next()).ok_or_else(|| ProbeError::VersionParse {
            output: s.to_string(),
        })?;
        let minor = parse(parts.next()).ok_or_else(|| ProbeError::VersionParse {
            output: s.to_string(),
        })?;
        let patch = match parts.next() {
            None => None,
            Some(p) => Some(p.parse().map_err(|_| ProbeError::VersionParse {
                output: s.to_string(),
            })?),
        };

        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for MacOsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

/// An IDE version as reported by `xcodebuild -version` or carried in
/// the name of an environment policy directory.
///
/// Missing components are zero, so `"4.3"` and `"4.3.0"` are equal and
/// ordering is numeric per component ("4.10" > "4.9").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XcodeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl XcodeVersion {
    /// 4.3, the first release that dropped `/Developer` and requires an
    /// explicit SDK reference when the command line tools are absent.
    pub const SDK_REQUIRED: Self = Self {
        major: 4,
        minor: 3,
        patch: 0,
    };

    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for XcodeVersion {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ProbeError::VersionParse {
                output: s.to_string(),
            });
        }

        let mut components = [0u32; 3];
        for (i, part) in s.split('.').enumerate() {
            if i >= 3 {
                break;
            }
            components[i] = part.parse().map_err(|_| ProbeError::VersionParse {
                output: s.to_string(),
            })?;
        }

        Ok(Self {
            major: components[0],
            minor: components[1],
            patch: components[2],
        })
    }
}

impl fmt::Display for XcodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patch == 0 {
            write!(f, "{}.{}", self.major, self.minor)
        } else {
            write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
        }
    }
}
