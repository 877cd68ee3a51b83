//! Tests that run the built `jobcell` binary.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

fn jobcell(envs: &[(&str, &str)], args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jobcell"))
        .env_clear()
        .envs(envs.iter().copied())
        .args(args)
        .output()
        .expect("failed to run jobcell")
}

fn base_env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("GITHUB_WORKSPACE", "/work"),
        ("USER", "runner"),
        ("HOSTNAME_FOR_TEST", "ci-box"),
    ]
}

fn parse(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn emits_document() {
    let out = jobcell(&base_env(), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let doc = parse(&out);
    assert_eq!(doc["ociVersion"], "1.0.0");
    assert_eq!(doc["hostname"], "ci-box");
    assert_eq!(doc["process"]["cwd"], "/work");
    assert_eq!(doc["process"]["args"], serde_json::json!(["/bin/bash", "/entrypoint.sh"]));
    assert_eq!(doc["mounts"].as_array().map(Vec::len), Some(7));
    assert_eq!(doc["root"], serde_json::json!({"path": "rootfs", "readonly": false}));

    let env = doc["process"]["env"].as_array().unwrap();
    assert!(env.contains(&Value::from("HOME=/home/runner")));
    assert!(env.contains(&Value::from("HOSTNAME_FOR_TEST=ci-box")));
}

#[test]
fn missing_workspace_exits_one() {
    let out = jobcell(&[("USER", "runner"), ("HOSTNAME_FOR_TEST", "h")], &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("GITHUB_WORKSPACE"));
}

#[test]
fn missing_user_exits_one() {
    let out = jobcell(&[("GITHUB_WORKSPACE", "/work"), ("HOSTNAME_FOR_TEST", "h")], &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("USER"));
}

#[test]
fn unreadable_env_file_exits_one() {
    let out = jobcell(&base_env(), &["/definitely/not/here.env"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("/definitely/not/here.env"));
}

#[test]
fn env_file_lines_appended() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("extra.env");
    std::fs::write(&file, "FOO=bar\n\nBADLINE\nBAZ=qux").unwrap();

    let out = jobcell(&base_env(), &[file.to_str().unwrap()]);
    assert!(out.status.success());

    let doc = parse(&out);
    let env: Vec<&str> = doc["process"]["env"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(env[env.len() - 2..], ["FOO=bar", "BAZ=qux"]);
    assert!(!env.contains(&"BADLINE"));
}

#[test]
fn baseline_ignores_env_file() {
    let out = jobcell(&base_env(), &["--profile", "baseline", "/definitely/not/here.env"]);
    assert!(out.status.success());
    let doc = parse(&out);
    let env = doc["process"]["env"].as_array().unwrap();
    assert!(env.last().and_then(Value::as_str).is_some_and(|e| e.starts_with("HOME=")));
}

#[test]
fn tool_cache_mounted() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().to_str().unwrap();
    let mut envs: Vec<(&str, &str)> = base_env();
    envs.push(("RUNNER_TOOL_CACHE", cache));

    let out = jobcell(&envs, &[]);
    assert!(out.status.success());
    let doc = parse(&out);
    assert_eq!(doc["mounts"].as_array().map(Vec::len), Some(8));
    assert_eq!(doc["mounts"][7]["options"], serde_json::json!(["rbind", "ro"]));
    assert!(Path::new(cache).is_dir());
}

#[test]
fn identical_output_across_runs() {
    let first = jobcell(&base_env(), &[]);
    let second = jobcell(&base_env(), &[]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn extra_positional_exits_one() {
    let out = jobcell(&base_env(), &["a.env", "b.env"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}

#[test]
fn bad_flags_exit_one() {
    for args in [&["--profile", "full"][..], &["--no-such-flag"][..]] {
        let out = jobcell(&base_env(), args);
        assert_eq!(out.status.code(), Some(1), "args: {args:?}");
        assert!(out.stdout.is_empty(), "args: {args:?}");
    }
}

#[test]
fn help_exits_zero() {
    let out = jobcell(&base_env(), &["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("--profile"));
}
