// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Env::capture() --> Command Dispatch
//!   Resolve | Mode | Options | Version
//! ```
//!
//! Resolution is single-threaded and synchronous by design; there is
//! no runtime to spin up.

use std::process::ExitCode;

use kegenv::cli::global::GlobalOptions;
use kegenv::cli::{self, Command};
use kegenv::cmd::config::{run_mode_command, run_options_command};
use kegenv::cmd::resolve::run_resolve_command;
use kegenv::config::KegConfig;
use kegenv::core::env::container::Env;
use kegenv::core::host::HostProfile;
use kegenv::logging::init_logging;
use kegenv::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => load_config().map(|(_, config)| run_options_command(&config)),
        Some(Command::Mode) => load_config().and_then(|(_, config)| {
            let profile = HostProfile::detect()?;
            run_mode_command(&profile, &config);
            Ok(())
        }),
        Some(Command::Resolve(args)) => load_config().and_then(|(base, config)| {
            let profile = HostProfile::detect()?;
            run_resolve_command(args, &base, &profile, &config)
        }),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// Captures the process environment once and reads the `KEG_*`
/// configuration out of the snapshot.
fn load_config() -> kegenv::error::Result<(Env, KegConfig)> {
    let base = Env::capture();
    let config = KegConfig::from_env(&base).map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })?;
    Ok((base, config))
}
