//! Integration tests for the pathtrace CLI
//!
//! These tests run the pathtrace binary against small graph files and check
//! output shape, exit codes and error envelopes.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Get a Command for pathtrace with config lookups pointed at `config_dir`
fn pathtrace(config_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("pathtrace");
    cmd.env("PATHTRACE_CONFIG_DIR", config_dir.path());
    cmd.env_remove("PATHTRACE_LOG");
    cmd.env_remove("PATHTRACE_LOG_LEVEL");
    cmd
}

fn classroom_graph() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/classroom.json")
}

fn write_graph(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pathtrace"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("replay"));
}

#[test]
fn test_version_flag() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathtrace"));
}

#[test]
fn test_no_command_prints_hint() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("pathtrace"))
        .stdout(predicate::str::contains("--help"));
}

// ============================================================================
// Exit codes and error envelopes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .args(["--format", "yaml", "nodes"])
        .arg(classroom_graph())
        .assert()
        .code(2);
}

#[test]
fn test_missing_start_is_usage_error() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .arg("run")
        .arg(classroom_graph())
        .assert()
        .code(2);
}

#[test]
fn test_usage_error_json_envelope() {
    let config_dir = tempdir().unwrap();
    let output = pathtrace(&config_dir)
        .args(["--format", "json", "run"])
        .arg(classroom_graph())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["code"], 2);
    assert_eq!(envelope["error"]["type"], "usage_error");
}

#[test]
fn test_missing_graph_file_exit_code_3() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .args(["run", "/nonexistent/graph.json", "--start", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_unknown_start_node_exit_code_3() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .arg("run")
        .arg(classroom_graph())
        .args(["--start", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: Z"));
}

#[test]
fn test_unknown_start_node_json_envelope() {
    let config_dir = tempdir().unwrap();
    let output = pathtrace(&config_dir)
        .args(["--format", "json", "run"])
        .arg(classroom_graph())
        .args(["--start", "Z"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["type"], "node_not_found");
    assert_eq!(envelope["error"]["message"], "node not found: Z");
}

#[test]
fn test_malformed_graph_exit_code_3() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "broken.json", "{ \"nodes\": [");

    pathtrace(&dir)
        .args(["nodes"])
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph"));
}

#[test]
fn test_self_loop_rejected() {
    let dir = tempdir().unwrap();
    let file = write_graph(
        &dir,
        "loop.json",
        r#"{"nodes": [{"id": "A"}], "edges": [{"source": "A", "target": "A", "weight": 1}]}"#,
    );

    pathtrace(&dir)
        .arg("run")
        .arg(&file)
        .args(["--start", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("self-loop"));
}

#[test]
fn test_negative_weight_rejected() {
    let dir = tempdir().unwrap();
    let file = write_graph(
        &dir,
        "negative.json",
        r#"{"nodes": [{"id": "A"}, {"id": "B"}], "edges": [{"source": "A", "target": "B", "weight": -1}]}"#,
    );

    pathtrace(&dir)
        .arg("run")
        .arg(&file)
        .args(["--start", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid weight -1"));
}

#[test]
fn test_edge_to_undeclared_node_rejected() {
    let dir = tempdir().unwrap();
    let file = write_graph(
        &dir,
        "dangling.json",
        r#"{"nodes": [{"id": "A"}], "edges": [{"source": "A", "target": "B", "weight": 1}]}"#,
    );

    pathtrace(&dir)
        .arg("nodes")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown node 'B'"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .args(["--quiet", "run"])
        .arg(classroom_graph())
        .args(["--start", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// nodes
// ============================================================================

#[test]
fn test_nodes_human_lists_declaration_order() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .arg("nodes")
        .arg(classroom_graph())
        .assert()
        .success()
        .stdout("A\nB\nC\nD\nE\nF\nG\n");
}

#[test]
fn test_nodes_json() {
    let config_dir = tempdir().unwrap();
    let output = pathtrace(&config_dir)
        .args(["--format", "json", "nodes"])
        .arg(classroom_graph())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["count"], 7);
    assert_eq!(json["edges"], 9);
    assert_eq!(json["nodes"][2]["id"], "C");
    assert_eq!(json["nodes"][2]["degree"], 4);
    assert_eq!(json["nodes"][6]["degree"], 0);
}

#[test]
fn test_nodes_empty_graph() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, "empty.json", r#"{"nodes": []}"#);

    pathtrace(&dir)
        .arg("nodes")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No nodes found"));
}

#[test]
fn test_nodes_accepts_integer_ids() {
    let dir = tempdir().unwrap();
    let file = write_graph(
        &dir,
        "numeric.json",
        r#"{"nodes": [{"id": 1}, {"id": 2}], "edges": [{"source": 1, "target": 2, "weight": 3}]}"#,
    );

    pathtrace(&dir)
        .arg("nodes")
        .arg(&file)
        .assert()
        .success()
        .stdout("1\n2\n");
}

#[test]
fn test_nodes_accepts_float_ids() {
    let dir = tempdir().unwrap();
    let file = write_graph(
        &dir,
        "floats.json",
        r#"{"nodes": [{"id": 1.0}, {"id": 2.5}], "edges": [{"source": 1, "target": 2.5, "weight": 3}]}"#,
    );

    pathtrace(&dir)
        .arg("nodes")
        .arg(&file)
        .assert()
        .success()
        .stdout("1\n2.5\n");
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_json_trace_and_distances() {
    let config_dir = tempdir().unwrap();
    let output = pathtrace(&config_dir)
        .args(["--format", "json", "run"])
        .arg(classroom_graph())
        .args(["--start", "A"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["start"], "A");

    let trace = json["trace"].as_array().unwrap();
    assert_eq!(trace.len(), 9);
    assert_eq!(
        trace[0],
        serde_json::json!({"node": "B", "distance": 4.0, "previous": "A"})
    );
    assert_eq!(
        trace[2],
        serde_json::json!({"node": "B", "distance": 3.0, "previous": "C"})
    );

    assert_eq!(json["distances"]["A"], 0.0);
    assert_eq!(json["distances"]["F"], 12.0);
    assert!(json["distances"]["G"].is_null());
    assert_eq!(json["previous"]["F"], "E");
    assert!(json["previous"]["A"].is_null());
    assert!(json["previous"]["G"].is_null());
}

#[test]
fn test_run_from_isolated_node_has_empty_trace() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .arg("run")
        .arg(classroom_graph())
        .args(["--start", "G"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"))
        .stdout(predicate::str::contains("  G: 0.00 (start)"))
        .stdout(predicate::str::contains("  A: ∞"));
}

#[test]
fn test_run_quiet_omits_headers() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .args(["--quiet", "run"])
        .arg(classroom_graph())
        .args(["--start", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dijkstra from").not())
        .stdout(predicate::str::contains("  1. B = 4.00 (from A)"));
}

#[test]
fn test_run_tie_break_prefers_smaller_id() {
    let dir = tempdir().unwrap();
    let file = write_graph(
        &dir,
        "diamond.json",
        r#"{
            "nodes": [{"id": "S"}, {"id": "B"}, {"id": "A"}, {"id": "T"}],
            "edges": [
                {"source": "S", "target": "B", "weight": 1},
                {"source": "S", "target": "A", "weight": 1},
                {"source": "A", "target": "T", "weight": 1},
                {"source": "B", "target": "T", "weight": 1}
            ]
        }"#,
    );

    pathtrace(&dir)
        .args(["--format", "records", "run"])
        .arg(&file)
        .args(["--start", "S"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "S 1 A 1.00 from=S\nS 2 B 1.00 from=S\nS 3 T 2.00 from=A\n",
        ));
}

// ============================================================================
// path
// ============================================================================

#[test]
fn test_path_human() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .arg("path")
        .arg(classroom_graph())
        .args(["--start", "A", "--to", "F"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "A -> C -> B -> D -> E -> F (distance 12.00)\n",
        ));
}

#[test]
fn test_path_unreachable() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .arg("path")
        .arg(classroom_graph())
        .args(["--start", "A", "--to", "G"])
        .assert()
        .success()
        .stdout("No path from A to G\n");
}

#[test]
fn test_path_json_unreachable() {
    let config_dir = tempdir().unwrap();
    let output = pathtrace(&config_dir)
        .args(["--format", "json", "path"])
        .arg(classroom_graph())
        .args(["--start", "A", "--to", "G"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert!(json["distance"].is_null());
    assert_eq!(json["path"], serde_json::json!([]));
}

#[test]
fn test_path_unknown_target_exit_code_3() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .arg("path")
        .arg(classroom_graph())
        .args(["--start", "A", "--to", "Q"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: Q"));
}

// ============================================================================
// replay
// ============================================================================

#[test]
fn test_replay_human() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .arg("replay")
        .arg(classroom_graph())
        .args(["--start", "A", "--interval-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaying 9 steps from A"))
        .stdout(predicate::str::contains(
            "Step 1/9: B = 4.00 (from A) [neighbors: B, C]",
        ))
        .stdout(predicate::str::contains(
            "Step 9/9: F = 12.00 (from E) [neighbors: C, D, F]",
        ))
        .stdout(predicate::str::contains("Replay complete (9 steps)"));
}

#[test]
fn test_replay_json_lines() {
    let config_dir = tempdir().unwrap();
    let output = pathtrace(&config_dir)
        .args(["--format", "json", "replay"])
        .arg(classroom_graph())
        .args(["--start", "A", "--interval-ms", "0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0]["index"], 0);
    assert_eq!(lines[0]["step"]["node"], "B");
    assert_eq!(lines[0]["highlighted"], serde_json::json!(["B", "C"]));
    assert_eq!(lines[9], serde_json::json!({"done": true, "steps": 9}));
}

#[test]
fn test_replay_empty_trace_completes() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .args(["--format", "records", "replay"])
        .arg(classroom_graph())
        .args(["--start", "G"])
        .assert()
        .success()
        .stdout("H pathtrace=1 records=1 mode=replay start=G steps=0\nC done steps=0\n");
}

#[test]
fn test_replay_interval_from_config() {
    let config_dir = tempdir().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[replay]\ninterval_ms = 0\n",
    )
    .unwrap();

    let started = std::time::Instant::now();
    pathtrace(&config_dir)
        .args(["--format", "records", "replay"])
        .arg(classroom_graph())
        .args(["--start", "A"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("C done steps=9"));

    // Nine frames at the default 2000ms would take at least 16 seconds
    assert!(started.elapsed() < std::time::Duration::from_secs(10));
}

#[test]
fn test_replay_interval_flag_overrides_config() {
    let config_dir = tempdir().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[replay]\ninterval_ms = 60000\n",
    )
    .unwrap();

    pathtrace(&config_dir)
        .args(["--format", "records", "replay"])
        .arg(classroom_graph())
        .args(["--start", "A", "--interval-ms", "0"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("C done steps=9"));
}

#[test]
fn test_replay_records_quote_ids_with_commas() {
    let dir = tempdir().unwrap();
    let file = write_graph(
        &dir,
        "commas.json",
        r#"{
            "nodes": [{"id": "S"}, {"id": "a,b"}, {"id": "c"}],
            "edges": [
                {"source": "S", "target": "a,b", "weight": 1},
                {"source": "S", "target": "c", "weight": 2},
                {"source": "a,b", "target": "c", "weight": 1}
            ]
        }"#,
    );

    pathtrace(&dir)
        .args(["--format", "records", "replay"])
        .arg(&file)
        .args(["--start", "S", "--interval-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "F 1 \"a,b\" 1.00 from=S highlight=\"a,b\",c\n",
        ));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_defaults() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("# defaults"))
        .stdout(predicate::str::contains("precision = 2"))
        .stdout(predicate::str::contains("interval_ms = 2000"));
}

#[test]
fn test_config_file_changes_display() {
    let config_dir = tempdir().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[display]\nprecision = 0\nunreachable = \"inf\"\n",
    )
    .unwrap();

    pathtrace(&config_dir)
        .args(["--format", "records", "run"])
        .arg(classroom_graph())
        .args(["--start", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("D F 12 from=E\n"))
        .stdout(predicate::str::contains("D G inf\n"));
}

#[test]
fn test_explicit_config_path_must_exist() {
    let config_dir = tempdir().unwrap();
    pathtrace(&config_dir)
        .args(["--config", "/nonexistent/pathtrace.toml", "config"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_invalid_config_precision_exit_code_2() {
    let config_dir = tempdir().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[display]\nprecision = 40\n",
    )
    .unwrap();

    pathtrace(&config_dir)
        .arg("config")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("display.precision"));
}
