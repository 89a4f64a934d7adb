// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for kegenv.

use crate::config::KegConfig;
use crate::core::host::HostProfile;
use crate::resolve::Invocation;
use crate::resolve::mode::ModeDecision;

/// Display current configuration options.
pub fn run_options_command(config: &KegConfig) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display the toolchain mode decision with each gating check.
pub fn run_mode_command(profile: &HostProfile, config: &KegConfig) {
    let invocation = Invocation::builder().build();
    let decision = ModeDecision::decide(profile, config, &invocation);
    for line in decision.format_report() {
        println!("{line}");
    }
}
