// kegenv: Keg Build Environment Resolver - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use crate::core::env::container::Env;
use crate::core::env::types::EnvFlags;
use std::collections::BTreeMap;

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("foo"), None, "keys are case-sensitive");
    assert_eq!(env.get("NOTEXIST"), None);
}

#[test]
fn test_env_flags() {
    let mut env = Env::new();
    env.set("KEY", "initial");
    assert_eq!(env.get("KEY"), Some("initial"));

    env.set_with_flags("KEY", "_appended", EnvFlags::Append);
    assert_eq!(env.get("KEY"), Some("initial_appended"));

    env.set_with_flags("KEY", "prepended_", EnvFlags::Prepend);
    assert_eq!(env.get("KEY"), Some("prepended_initial_appended"));

    env.set_with_flags("KEY", "replaced", EnvFlags::Replace);
    assert_eq!(env.get("KEY"), Some("replaced"));
}

#[test]
fn test_env_path_manipulation() {
    let mut env = Env::new();
    env.set("PATH", "/usr/bin");

    env.prepend_path("/usr/local/bin");
    assert_eq!(env.get("PATH"), Some("/usr/local/bin:/usr/bin"));

    env.append_path("/opt/bin");
    assert_eq!(env.get("PATH"), Some("/usr/local/bin:/usr/bin:/opt/bin"));
}

#[test]
fn test_env_path_entries() {
    let mut env = Env::new();
    assert!(env.path_entries().is_empty());

    env.set("PATH", "/usr/local/bin:/usr/bin::/bin");
    assert_eq!(
        env.path_entries(),
        vec!["/usr/local/bin", "/usr/bin", "/bin"],
        "empty entries are dropped"
    );
}

#[test]
fn test_env_copy_on_write() {
    let mut env1 = Env::new();
    env1.set("KEY1", "value1");

    // Clone shares data initially
    let mut env2 = env1.clone();

    // Modifying env2 triggers copy-on-write, doesn't affect env1
    env2.set("KEY2", "value2");

    assert_eq!(env1.get("KEY1"), Some("value1"));
    assert_eq!(env1.get("KEY2"), None);
    assert_eq!(env2.get("KEY1"), Some("value1"));
    assert_eq!(env2.get("KEY2"), Some("value2"));
}

#[test]
fn test_env_capture() {
    // Behavioral test - PATH should exist
    let env = Env::capture();
    assert!(
        env.get("PATH").is_some(),
        "PATH should exist in current environment"
    );
}

#[test]
fn test_env_from_map() {
    let mut map = BTreeMap::new();
    map.insert("KEY1".to_string(), "value1".to_string());
    map.insert("KEY2".to_string(), "value2".to_string());

    let env = Env::from_map(map);

    assert_eq!(env.get("KEY1"), Some("value1"));
    assert_eq!(env.get("KEY2"), Some("value2"));
    assert_eq!(env.len(), 2);
}

#[test]
fn test_env_to_map_deterministic_order() {
    let mut env = Env::new();
    env.set("ZED", "z");
    env.set("ALPHA", "a");
    env.set("MID", "m");

    let keys: Vec<_> = env.to_map().into_keys().collect();
    assert_eq!(keys, vec!["ALPHA", "MID", "ZED"]);
}

#[test]
fn test_env_remove() {
    let mut env = Env::new();
    env.set("KEY1", "value1");
    env.set("KEY2", "value2");

    env.remove("KEY1");
    assert_eq!(env.get("KEY1"), None);
    assert_eq!(env.get("KEY2"), Some("value2"));
    assert_eq!(env.len(), 1);

    // Removing an absent key is a no-op
    env.remove("KEY1");
    assert_eq!(env.len(), 1);
}
