use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_store_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("taskboard-{nanos}-{name}"))
}

fn run_interactive(store_dir: &PathBuf, input: &str) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_taskboard");

    let mut child = Command::new(exe)
        .env("TASKBOARD_STORE_DIR", store_dir)
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

#[test]
fn interactive_help_shows_usage() {
    let store_dir = temp_store_dir("interactive-help");
    let output = run_interactive(&store_dir, "help\nexit\n");
    std::fs::remove_dir_all(&store_dir).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage") || stdout.contains("USAGE"));
}

#[test]
fn interactive_invalid_command_prints_error() {
    let store_dir = temp_store_dir("interactive-invalid");
    let output = run_interactive(&store_dir, "nope\nexit\n");
    std::fs::remove_dir_all(&store_dir).ok();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
}

#[test]
fn interactive_draft_then_add_submits_draft() {
    let store_dir = temp_store_dir("interactive-draft");
    let output = run_interactive(&store_dir, "draft \"Buy milk\"\nadd\nexit\n");
    std::fs::remove_dir_all(&store_dir).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Draft: Buy milk"));
    assert!(stdout.contains("Added task: Buy milk (1)"));
}

#[test]
fn interactive_add_resets_draft() {
    let store_dir = temp_store_dir("interactive-draft-reset");
    let output = run_interactive(&store_dir, "draft \"Buy milk\"\nadd\nadd\nexit\n");
    std::fs::remove_dir_all(&store_dir).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Added task: Buy milk (1)"));
    assert!(stdout.contains("Added task:  (2)"));
}

#[test]
fn interactive_delete_updates_list_and_store() {
    let store_dir = temp_store_dir("interactive-delete");
    let output = run_interactive(
        &store_dir,
        "add \"first task\"\nadd \"second task\"\ndelete 0\nlist --json\nexit\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json_line = stdout
        .lines()
        .find(|line| line.starts_with('['))
        .expect("json list output");
    let parsed: serde_json::Value = serde_json::from_str(json_line).expect("json output");
    let tasks = parsed.as_array().expect("json array");

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["position"], 0);
    assert_eq!(tasks[0]["id"], 2);
    assert_eq!(tasks[0]["title"], "second task");

    let stored: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(store_dir.join("tasks.json")).unwrap(),
    )
    .unwrap();
    std::fs::remove_dir_all(&store_dir).ok();

    let stored_tasks = stored.as_array().unwrap();
    assert_eq!(stored_tasks.len(), 1);
    assert_eq!(stored_tasks[0]["id"], 2);
}

#[test]
fn interactive_out_of_range_delete_keeps_session_going() {
    let store_dir = temp_store_dir("interactive-delete-oob");
    let output = run_interactive(&store_dir, "delete 9\nadd \"still works\"\nexit\n");
    std::fs::remove_dir_all(&store_dir).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No task at index 9"));
    assert!(stdout.contains("Added task: still works (1)"));
}
