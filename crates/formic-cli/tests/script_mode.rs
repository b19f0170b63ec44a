//! Runs the `formic` binary against command scripts.

use std::io::Write;
use std::process::Command;

fn run_script(script: &str, extra: &[&str]) -> (bool, String) {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(script.as_bytes()).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_formic"))
        .arg("--script")
        .arg(file.path())
        .args(extra)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    (output.status.success(), String::from_utf8(output.stdout).unwrap())
}

#[test]
fn starvation_scenario() {
    let (ok, out) = run_script(
        "create 0 0 Aggressive\nresource 0 food 50\ntick 31\nsummary 0\nquit\n",
        &["--no-seed"],
    );
    assert!(ok);
    assert!(out.contains("with id 0"), "{out}");
    assert!(out.contains("Food stock: 150"), "{out}");
    assert!(out.contains("Simulating 31 ticks."), "{out}");
    assert!(out.contains("Tick 30: the queen of colony 0 (Aggressive) has perished"), "{out}");
    assert!(out.contains("Queen Alive: No"), "{out}");
}

#[test]
fn seed_colonies_exist_by_default() {
    let (ok, out) = run_script("summary 1\n", &[]);
    assert!(ok);
    assert!(out.contains("Type:        Harvester"), "{out}");
    assert!(out.contains("Location:    (10, 20)"), "{out}");
}

#[test]
fn bad_commands_are_reported_and_exit_is_clean() {
    let (ok, out) = run_script("r 99 food 5\nfly\nspawn 0 drone\nquit\n", &[]);
    assert!(ok);
    assert!(out.contains("invalid colony id: 99"), "{out}");
    assert!(out.contains("unknown command: fly"), "{out}");
    assert!(out.contains("invalid insect category: drone"), "{out}");
}

#[test]
fn json_mode() {
    let (ok, out) = run_script("summary 0\n", &["--json"]);
    assert!(ok);
    let reply: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(reply["reply"], "summary");
    assert_eq!(reply["snapshot"]["kind"], "Aggressive");
    assert_eq!(reply["snapshot"]["food_stock"], 100);
}

#[test]
fn missing_script_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_formic"))
        .args(["--script", "/nonexistent/formic-script.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
