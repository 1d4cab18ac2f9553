mod helpers;

use helpers::{run_cli, EnvGuard, CONFIG_KEYS};
use serial_test::serial;
use std::fs;

fn cfg_json() -> serde_json::Value {
    let r = run_cli(&["cfg"]);
    assert_eq!(r.code, 0, "stderr: {}", r.stderr);
    serde_json::from_str(&r.stdout).unwrap()
}

#[test]
#[serial]
fn defaults_are_reported_with_their_source() {
    let _env = EnvGuard::clear(CONFIG_KEYS);
    let v = cfg_json();
    assert_eq!(v["starting_stack"]["value"], 10_000);
    assert_eq!(v["small_blind"]["value"], 10);
    assert_eq!(v["seed"]["value"], serde_json::Value::Null);
    assert_eq!(v["p1"]["source"], "default");
}

#[test]
#[serial]
fn file_values_are_overridden_by_environment() {
    let _clear = EnvGuard::clear(CONFIG_KEYS);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pokerbots.toml");
    fs::write(&path, "small_blind = 25\nrounds = 40\np1 = \"call\"\n").unwrap();
    let _env = EnvGuard::apply(&[
        ("POKERBOTS_CONFIG", path.to_str().unwrap()),
        ("POKERBOTS_ROUNDS", "7"),
    ]);

    let v = cfg_json();
    assert_eq!(v["small_blind"]["value"], 25);
    assert_eq!(v["small_blind"]["source"], "file");
    assert_eq!(v["rounds"]["value"], 7);
    assert_eq!(v["rounds"]["source"], "env");
    assert_eq!(v["p1"]["value"], "call");
    assert_eq!(v["p2"]["source"], "default");
}

#[test]
#[serial]
fn malformed_environment_value_fails() {
    let _clear = EnvGuard::clear(CONFIG_KEYS);
    let _env = EnvGuard::apply(&[("POKERBOTS_SEED", "abc")]);
    let r = run_cli(&["cfg"]);
    assert_eq!(r.code, 2);
    assert!(r.stderr.contains("Invalid seed"));
}

#[test]
#[serial]
fn unparsable_config_file_fails() {
    let _clear = EnvGuard::clear(CONFIG_KEYS);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "small_blind = \"lots\"\n").unwrap();
    let _env = EnvGuard::apply(&[("POKERBOTS_CONFIG", path.to_str().unwrap())]);
    let r = run_cli(&["cfg"]);
    assert_eq!(r.code, 2);
    assert!(r.stderr.contains("Configuration error"));
}
