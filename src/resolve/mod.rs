// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build environment resolution.
//!
//! ```text
//! Resolver::new(base, profile, config, invocation).resolve()
//!        |
//!        v
//!   mode::ModeDecision ----> Legacy:   legacy::apply (PATH prepend)
//!        |
//!        v Enhanced
//!   xcode::SdkInfo (IDE-only hosts)    compiler::select
//!        |                                  |
//!        +-----------------+----------------+
//!                          v
//!                 assemble::assemble
//!            paths  flags  reset  MAKEFLAGS
//!                          |
//!                          v
//!               Resolution { mode, compiler, env }
//! ```
//!
//! One resolver per invocation. The mode and compiler are decided
//! fresh every time so per-invocation flags are honored; only host
//! probes and SDK discovery are memoized at process scope.

pub mod assemble;
pub mod compiler;
pub mod deprecated;
pub mod flags;
pub mod legacy;
pub mod mode;
pub mod paths;


use bon::Builder;

use crate::config::KegConfig;
use crate::core::env::container::Env;
use crate::core::host::HostProfile;
use crate::core::xcode::SdkInfo;
use crate::error::Result;
use compiler::CompilerKind;
use mode::{ModeDecision, ToolchainMode};

/// Everything one build invocation asks for.
///
/// All flags are explicit typed fields; an absent flag is `false` or
/// `None`, never a magically empty string.
#[derive(Debug, Clone, Default, Builder)]
pub struct Invocation {
    /// Build-time dependency names, in formula order.
    #[builder(default)]
    deps: Vec<String>,

    /// Whether the build asked for X11.
    #[builder(default)]
    x11: bool,

    /// Compiler forced on the command line, wins over configuration.
    compiler_override: Option<CompilerKind>,

    /// Explicit opt-out of enhanced resolution (`--env=std`).
    #[builder(default)]
    std_env: bool,

    /// Building a redistributable bottle.
    #[builder(default)]
    build_bottle: bool,

    /// Propagate verbosity into the build.
    #[builder(default)]
    verbose: bool,
}

impl Invocation {
    #[must_use]
    pub fn deps(&self) -> &[String] {
        &self.deps
    }

    #[must_use]
    pub const fn x11(&self) -> bool {
        self.x11
    }

    #[must_use]
    pub const fn compiler_override(&self) -> Option<CompilerKind> {
        self.compiler_override
    }

    #[must_use]
    pub const fn std_env(&self) -> bool {
        self.std_env
    }

    #[must_use]
    pub const fn build_bottle(&self) -> bool {
        self.build_bottle
    }

    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }
}

/// The outcome of one resolution, handed as-is to the subprocess
/// launcher. Nothing here ever writes back into the process
/// environment.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// How the environment was resolved.
    pub mode: ToolchainMode,

    /// Selected compiler front end; absent in legacy mode, where the
    /// shims never run.
    pub compiler: Option<CompilerKind>,

    /// The assembled environment.
    pub env: Env,
}

/// Per-invocation resolver over a captured environment snapshot.
pub struct Resolver<'a> {
    base: &'a Env,
    profile: &'a HostProfile,
    config: &'a KegConfig,
    invocation: &'a Invocation,
    /// Injected discovery result; tests and hosts that already ran
    /// discovery pass one in, everyone else gets the memoized chain.
    sdk: Option<SdkInfo>,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub const fn new(
        base: &'a Env,
        profile: &'a HostProfile,
        config: &'a KegConfig,
        invocation: &'a Invocation,
    ) -> Self {
        Self {
            base,
            profile,
            config,
            invocation,
            sdk: None,
        }
    }

    /// Supplies an already-located SDK, bypassing discovery.
    #[must_use]
    pub fn with_sdk(mut self, sdk: SdkInfo) -> Self {
        self.sdk = Some(sdk);
        self
    }

    /// Runs the full resolution for this invocation.
    ///
    /// Legacy mode never reaches SDK discovery or path construction;
    /// it is a single PATH prepend over the base snapshot.
    ///
    /// # Errors
    ///
    /// Fails only when the host builds against an SDK and none can be
    /// found; everything else degrades in place.
    pub fn resolve(&self) -> Result<Resolution> {
        let decision = ModeDecision::decide(self.profile, self.config, self.invocation);
        let mode = decision.mode;

        if !mode.is_enhanced() {
            return Ok(Resolution {
                mode,
                compiler: None,
                env: legacy::apply(self.base, self.config),
            });
        }

        let sdk = self.sdk_for_host()?;
        let compiler = compiler::select(self.config, self.invocation.compiler_override());
        let env = assemble::assemble(
            self.base,
            self.profile,
            self.config,
            self.invocation,
            &mode,
            sdk.as_ref(),
            compiler,
        )?;

        Ok(Resolution {
            mode,
            compiler: Some(compiler),
            env,
        })
    }

    /// Runs SDK discovery, but only on hosts that need an explicit SDK
    /// reference. Hosts with the command line tools build against `/`.
    fn sdk_for_host(&self) -> Result<Option<SdkInfo>> {
        if !self.profile.sdk_without_clt() {
            return Ok(self.sdk.clone());
        }
        match &self.sdk {
            Some(sdk) => Ok(Some(sdk.clone())),
            None => SdkInfo::locate(self.base, self.profile).map(Some),
        }
    }
}
