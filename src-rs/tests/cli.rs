use std::process::{Command, Output};

fn manager(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_n8n-manager"));
    cmd.args(args)
        .env_remove("N8N_BASE_URL")
        .env_remove("N8N_API_KEY")
        .env_remove("N8N_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("run n8n-manager")
}

#[test]
fn missing_base_url_exits_non_zero() {
    let out = manager(&["list"], &[("N8N_API_KEY", "secret")]);
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Error: Environment variable N8N_BASE_URL not set."));
}

#[test]
fn missing_api_key_exits_non_zero() {
    let out = manager(&["list"], &[("N8N_BASE_URL", "http://127.0.0.1:1")]);
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("N8N_API_KEY"));
}

#[test]
fn api_failure_still_exits_zero() {
    let out = manager(
        &["get", "42"],
        &[("N8N_BASE_URL", "http://127.0.0.1:1/"), ("N8N_API_KEY", "secret")],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Error getting workflow: request failed"));
}

#[test]
fn usage_error_exits_non_zero() {
    let out = manager(&["update", "42"], &[]);
    assert!(!out.status.success());
}
