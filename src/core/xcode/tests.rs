// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for developer directory and SDK discovery.

use super::{first_valid_candidate, is_valid_developer_dir, locate_sdk_path};
use crate::core::host::version::MacOsVersion;
use std::path::{Path, PathBuf};

/// Lays out `<root>/usr/bin/xcrun` with the executable bit set.
fn make_developer_dir(root: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let bin = root.join("usr").join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    let xcrun = bin.join("xcrun");
    std::fs::write(&xcrun, "#!/bin/sh\n").unwrap();
    let mut perms = std::fs::metadata(&xcrun).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&xcrun, perms).unwrap();
}

#[test]
fn test_developer_dir_validation() {
    let dir = tempfile::tempdir().unwrap();

    // Nothing there yet
    assert!(!is_valid_developer_dir(dir.path()));

    make_developer_dir(dir.path());
    assert!(is_valid_developer_dir(dir.path()));
}

#[test]
fn test_developer_dir_validation_requires_executable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    make_developer_dir(dir.path());

    let xcrun = dir.path().join("usr").join("bin").join("xcrun");
    let mut perms = std::fs::metadata(&xcrun).unwrap().permissions();
    perms.set_mode(0o644);
    std::fs::set_permissions(&xcrun, perms).unwrap();

    assert!(!is_valid_developer_dir(dir.path()));
}

#[test]
fn test_developer_dir_validation_rejects_system_stub() {
    // The root filesystem resolves to the forwarding stub location
    assert!(!is_valid_developer_dir(Path::new("/")));
}

#[test]
fn test_first_valid_candidate_order() {
    let bad = tempfile::tempdir().unwrap();
    let good_a = tempfile::tempdir().unwrap();
    let good_b = tempfile::tempdir().unwrap();
    make_developer_dir(good_a.path());
    make_developer_dir(good_b.path());

    let candidates = vec![
        bad.path().to_path_buf(),
        good_a.path().to_path_buf(),
        good_b.path().to_path_buf(),
    ];

    assert_eq!(
        first_valid_candidate(&candidates),
        Some(good_a.path().to_path_buf()),
        "first passing candidate wins"
    );

    assert_eq!(first_valid_candidate(&[]), None);
    assert_eq!(
        first_valid_candidate(std::slice::from_ref(&candidates[0])),
        None
    );
}

#[test]
fn test_locate_sdk_path_platform_location() {
    let dev = tempfile::tempdir().unwrap();
    let version: MacOsVersion = "10.8.2".parse().unwrap();

    assert_eq!(locate_sdk_path(dev.path(), version), None);

    let sdk = dev
        .path()
        .join("Platforms")
        .join("MacOSX.platform")
        .join("Developer")
        .join("SDKs")
        .join("MacOSX10.8.sdk");
    std::fs::create_dir_all(&sdk).unwrap();

    assert_eq!(
        locate_sdk_path(dev.path(), version),
        Some(sdk),
        "SDK name uses major.minor even when the host reports a patch level"
    );
}

#[test]
fn test_locate_sdk_path_ignores_wrong_release() {
    let dev = tempfile::tempdir().unwrap();
    let sdk = dev
        .path()
        .join("Platforms")
        .join("MacOSX.platform")
        .join("Developer")
        .join("SDKs")
        .join("MacOSX10.7.sdk");
    std::fs::create_dir_all(&sdk).unwrap();

    let version: MacOsVersion = "10.8".parse().unwrap();
    assert_eq!(locate_sdk_path(dev.path(), version), None);
}

#[test]
fn test_sdk_info_fields() {
    let info = super::SdkInfo {
        developer_dir: PathBuf::from("/Applications/Xcode.app/Contents/Developer"),
        sdk_path: None,
    };
    assert!(info.sdk_path.is_none());
    assert!(info.developer_dir.ends_with("Contents/Developer"));
}
