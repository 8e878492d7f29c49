use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tasklist-{nanos}-{file_name}"))
}

fn run_session_with_config(input: &str, config_path: &Path) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_tasklist");

    let mut child = Command::new(exe)
        .env("TASKLIST_CONFIG_PATH", config_path)
        .env("TASKLIST_ID_MODE", "sequential")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn interactive session");

    {
        let stdin = child.stdin.as_mut().expect("stdin");
        stdin
            .write_all(input.as_bytes())
            .expect("failed to write to stdin");
    }

    child
        .wait_with_output()
        .expect("failed to read interactive output")
}

fn run_session(input: &str) -> std::process::Output {
    let config_path = temp_path("cli-json-config.json");
    let output = run_session_with_config(input, &config_path);
    std::fs::remove_file(&config_path).ok();
    output
}

#[test]
fn add_json_prints_the_full_task() {
    let output = run_session("add \"demo\" --json\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"text\":\"demo\""));
    assert!(stdout.contains("\"completed\":false"));
    assert!(stdout.contains("\"id\":0"));
    assert!(stdout.contains("\"created_date\""));
    assert!(stdout.contains("\"created_time\""));
}

#[test]
fn list_json_prints_an_array() {
    let output = run_session("add \"a\"\nadd \"b\"\nlist all --json\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|line| line.starts_with('['))
        .expect("array output");
    let parsed: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
    let items = parsed.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["text"], "a");
    assert_eq!(items[1]["text"], "b");
}

#[test]
fn search_json_respects_the_filter() {
    let output = run_session("add \"write spec\"\nadd \"buy milk\"\nsearch spec --json\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|line| line.starts_with('['))
        .expect("array output");
    let parsed: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
    let items = parsed.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["text"], "write spec");
}

#[test]
fn clear_json_reports_deleted_count() {
    let output = run_session("add \"a\"\nclear --json\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("{\"deleted\":1}"));
}

#[test]
fn theme_persists_across_sessions() {
    let config_path = temp_path("cli-theme-config.json");

    let output = run_session_with_config("theme dark\nexit\n", &config_path);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Theme set to dark"));

    let saved = std::fs::read_to_string(&config_path).expect("config written");
    std::fs::remove_file(&config_path).ok();
    let parsed: serde_json::Value = serde_json::from_str(&saved).expect("valid JSON");
    assert_eq!(parsed["theme"], "dark");
}

#[test]
fn unknown_theme_is_rejected() {
    let output = run_session("theme oceanic\nexit\n");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input - unknown theme 'oceanic'"));
}

#[test]
fn one_shot_mode_runs_a_single_command() {
    let exe = env!("CARGO_BIN_EXE_tasklist");
    let config_path = temp_path("cli-oneshot-config.json");

    let output = Command::new(exe)
        .args(["add", "demo", "--json"])
        .env("TASKLIST_CONFIG_PATH", &config_path)
        .env("TASKLIST_ID_MODE", "sequential")
        .output()
        .expect("failed to run one-shot command");

    std::fs::remove_file(&config_path).ok();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"text\":\"demo\""));
}
