// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compiler shim configuration flags carried in `KEG_CCCFG`.
//!
//! The compiler shims in the policy directory read this variable as a
//! character set, so encoding must be order-stable for reproducible
//! builds.

use bitflags::bitflags;

use crate::core::env::container::Env;
use crate::core::host::HostProfile;
use crate::core::host::version::MacOsVersion;

bitflags! {
    /// Behavior toggles for the compiler shims.
    ///
    /// Encoded as single characters, one per flag, in the fixed order
    /// `b`, `s`, `a`, `u`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CompilerConfigFlags: u8 {
        /// `b`: building a redistributable bottle, keep flags generic.
        const BOTTLE = 0x01;

        /// `s`: feed sed unicode-clean input, its 10.8 build rejects
        /// anything else.
        const UNICODE_SED_FIX = 0x02;

        /// `a`: rewrite the tool path autoconf bakes in, broken on
        /// exactly 10.8.
        const AUTOCONF_PATH_FIX = 0x04;

        /// `u`: build universal binaries.
        const UNIVERSAL = 0x08;
    }
}

impl CompilerConfigFlags {
    /// Flags derived from the host release and the build request.
    #[must_use]
    pub fn from_context(profile: &HostProfile, build_bottle: bool) -> Self {
        let release = profile.os_version.release();
        let mut flags = Self::empty();

        if build_bottle {
            flags |= Self::BOTTLE;
        }
        if release >= MacOsVersion::MOUNTAIN_LION {
            flags |= Self::UNICODE_SED_FIX;
        }
        if release == MacOsVersion::MOUNTAIN_LION {
            flags |= Self::AUTOCONF_PATH_FIX;
        }

        flags
    }

    /// Encodes the set in the fixed order `b`, `s`, `a`, `u`.
    #[must_use]
    pub fn encode(self) -> String {
        let mut out = String::new();
        if self.contains(Self::BOTTLE) {
            out.push('b');
        }
        if self.contains(Self::UNICODE_SED_FIX) {
            out.push('s');
        }
        if self.contains(Self::AUTOCONF_PATH_FIX) {
            out.push('a');
        }
        if self.contains(Self::UNIVERSAL) {
            out.push('u');
        }
        out
    }

    /// Parses an encoded set, accepting any character order and
    /// ignoring characters no shim understands.
    #[must_use]
    pub fn parse(encoded: &str) -> Self {
        let mut flags = Self::empty();
        for c in encoded.chars() {
            match c {
                'b' => flags |= Self::BOTTLE,
                's' => flags |= Self::UNICODE_SED_FIX,
                'a' => flags |= Self::AUTOCONF_PATH_FIX,
                'u' => flags |= Self::UNIVERSAL,
                _ => {}
            }
        }
        flags
    }
}

/// Marks an already assembled environment as a universal build by
/// re-encoding `KEG_CCCFG` with the universal flag set. Idempotent.
pub fn add_universal_flag(env: &mut Env) {
    let flags = CompilerConfigFlags::parse(env.get("KEG_CCCFG").unwrap_or(""))
        | CompilerConfigFlags::UNIVERSAL;
    env.set("KEG_CCCFG", flags.encode());
}
