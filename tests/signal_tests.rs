//! Signal handling integration tests
//!
//! The wrapper must exit with the conventional signal-derived codes
//! while the wrapped tool is still running.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use tempfile::TempDir;

fn claude_beep_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_claude-beep"))
}

/// Write a fake `claude` script and return a PATH with it at the front.
fn fake_claude(script_body: &str) -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("claude");
    fs::write(&path, format!("#!/bin/sh\n{}\n", script_body)).expect("write script");

    let mut perms = fs::metadata(&path).expect("script metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod script");

    let path_var = format!(
        "{}:{}",
        dir.path().display(),
        std::env::var("PATH").unwrap_or_default()
    );
    (dir, path_var)
}

fn run_and_signal(signal: &str) -> Option<i32> {
    let (_dir, path) = fake_claude("sleep 5");

    let mut child = claude_beep_bin()
        .args(["-s", "-n"])
        .env("PATH", &path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn wrapper");

    // Give the wrapper time to install its handlers and launch the child.
    thread::sleep(Duration::from_millis(800));

    let killed = Command::new("kill")
        .args([signal, &child.id().to_string()])
        .status()
        .expect("send signal");
    assert!(killed.success(), "kill {} failed", signal);

    child.wait().expect("wait for wrapper").code()
}

#[test]
fn interrupt_exits_with_130() {
    assert_eq!(run_and_signal("-INT"), Some(130));
}

#[test]
fn terminate_exits_with_143() {
    assert_eq!(run_and_signal("-TERM"), Some(143));
}
