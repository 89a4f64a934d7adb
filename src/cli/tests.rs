// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::resolve::EnvFlavor;
use crate::cli::{Cli, Command};
use crate::resolve::compiler::CompilerKind;
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["kegenv", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));

    let cli = Cli::try_parse_from(["kegenv", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from(["kegenv", "-l", "5", "--log-file", "/tmp/kegenv.log", "mode"])
        .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.log_file.as_deref(),
        Some(std::path::Path::new("/tmp/kegenv.log"))
    );
    assert!(matches!(cli.command, Some(Command::Mode)));
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["kegenv", "-l", "7", "mode"]).is_err());
}

#[test]
fn test_parse_resolve_deps_in_order() {
    let cli = Cli::try_parse_from(["kegenv", "resolve", "openssl", "zlib", "readline"]).unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(args.deps, ["openssl", "zlib", "readline"]);
    assert!(!args.x11);
    assert_eq!(args.compiler_override(), None);
}

#[test]
fn test_parse_resolve_compiler_flags_conflict() {
    let result = Cli::try_parse_from(["kegenv", "resolve", "--use-gcc", "--use-clang"]);
    assert!(result.is_err());

    let cli = Cli::try_parse_from(["kegenv", "resolve", "--use-llvm", "openssl"]).unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(args.compiler_override(), Some(CompilerKind::LlvmGcc));
}

#[test]
fn test_parse_resolve_env_flavor() {
    let cli = Cli::try_parse_from(["kegenv", "resolve", "--env", "std"]).unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(args.env, Some(EnvFlavor::Std));
    assert!(args.to_invocation().std_env());

    assert!(Cli::try_parse_from(["kegenv", "resolve", "--env", "fancy"]).is_err());
}

#[test]
fn test_resolve_args_to_invocation() {
    let cli = Cli::try_parse_from([
        "kegenv",
        "resolve",
        "--x11",
        "--build-bottle",
        "--verbose-build",
        "--use-gcc",
        "openssl",
    ])
    .unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };

    let invocation = args.to_invocation();
    assert_eq!(invocation.deps(), ["openssl"]);
    assert!(invocation.x11());
    assert!(invocation.build_bottle());
    assert!(invocation.verbose());
    assert!(!invocation.std_env());
    assert_eq!(invocation.compiler_override(), Some(CompilerKind::Gcc));
}
