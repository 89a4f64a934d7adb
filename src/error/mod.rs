// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            KegEnvError (~24 bytes)
//!                  |
//!        +---------+---------+--------+
//!        v         v         v        v
//!       Sdk      Config    Probe   Io/Other
//!       Box       Box       Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Sdk     DeveloperDirNotFound, SdkNotFound   (fatal, build aborts)
//!   Config  InvalidValue, ParseError
//!   Probe   CommandFailed, VersionParse
//!
//! Everything else degrades in place: compiler selection falls back to
//! the default with a warning, optional path entries are silently
//! omitted when their directory is missing.
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`KegEnvError`].
pub type KegEnvResult<T> = std::result::Result<T, KegEnvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum KegEnvError {
    /// SDK or developer directory discovery failed (fatal).
    #[error("sdk error: {0}")]
    Sdk(#[from] Box<SdkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Host probe error.
    #[error("probe error: {0}")]
    Probe(#[from] Box<ProbeError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for KegEnvError {
                fn from(err: $error) -> Self {
                    KegEnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    SdkError => Sdk,
    ConfigError => Config,
    ProbeError => Probe,
    std::io::Error => Io,
}

// --- SDK Errors ---

/// SDK and developer directory discovery errors.
///
/// These are the only unrecoverable conditions in the resolver: a host
/// operating without command-line tools cannot build anything unless a
/// usable SDK is found.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Every candidate in the developer directory fallback chain failed
    /// validation.
    #[error(
        "no usable developer directory found (checked DEVELOPER_DIR, xcode-select, the default install location and the metadata index)"
    )]
    DeveloperDirNotFound,

    /// A developer directory was found but contains no OS SDK.
    #[error("no OS SDK found under developer directory {developer_dir}")]
    SdkNotFound { developer_dir: PathBuf },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to deserialize the configuration sources.
    #[error("failed to parse configuration: {message}")]
    ParseError { message: String },
}

// --- Probe Errors ---

/// Host probe errors.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// A probe command could not be run or exited non-zero.
    #[error("probe command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// A version string could not be extracted from probe output.
    #[error("could not parse version from: {output}")]
    VersionParse { output: String },
}
