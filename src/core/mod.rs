// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment capture and host discovery.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!    env       host      xcode
//!     |         |          |
//!    Env   HostProfile  SdkInfo
//!  EnvFlags MacOsVersion developer_dir()
//!           XcodeVersion sdk_path()
//! ```

pub mod env;
pub mod host;
pub mod xcode;
