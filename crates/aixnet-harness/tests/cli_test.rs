//! Integration test: the `harness` binary end to end.
//!
//! Run: cargo test -p aixnet-harness --test cli_test

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use aixnet_harness::FixtureSet;
use aixnet_harness::structured_log::{ArtifactIndex, validate_log_file, validate_log_line};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn fixture_dir() -> PathBuf {
    workspace_root().join("tests/conformance/fixtures")
}

fn unique_tmp_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("aixnet-cli-{tag}-{}-{nanos}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn harness(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_harness"))
        .args(args)
        .env_remove("AIXNET_LOG")
        .env_remove("AIXNET_LOG_LEVEL")
        .env("AIXNET_RUN_ID", "cli-test")
        .output()
        .expect("harness should execute")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are utf-8")
}

#[test]
fn call_evaluates_helper_on_dotted_quad() {
    let output = harness(&["call", "IN_CLASSC", "192.168.0.1"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "1 (0x1)\n");

    let output = harness(&["call", "XER_LENGTH", "0xff"]);
    assert_eq!(stdout(&output), "127 (0x7f)\n");
}

#[test]
fn call_rejects_constants_and_bad_arguments() {
    assert!(!harness(&["call", "IPPROTO_TCP", "1"]).status.success());
    assert!(!harness(&["call", "IN_CLASSA", "300.1.1.1"]).status.success());
}

#[test]
fn lookup_prints_constant_and_fails_on_unknown_name() {
    let output = harness(&["lookup", "IPPROTO_TCP"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "IPPROTO_TCP = 6 (0x6) [enumerant] netinet/in.h\n"
    );

    let output = harness(&["lookup", "IPPROTO_SCTP"]);
    assert!(!output.status.success(), "unknown symbol must exit non-zero");
    assert!(stdout(&output).is_empty());
}

#[test]
fn classify_prints_class_and_parts() {
    let output = harness(&["classify", "127.0.0.1"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "127.0.0.1 (0x7f000001): class A, net 0x7f, host 0x1, loopback\n"
    );
}

#[test]
fn list_json_filters_by_header() {
    let output = harness(&["list", "--header", "in", "--format", "json"]);
    assert!(output.status.success());
    let rows: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rows.len(), 41);
    assert!(rows.iter().all(|r| r["header"] == "netinet/in.h"));
    assert_eq!(rows[0]["name"], "IPPROTO_IP");

    assert!(!harness(&["list", "--header", "sys/socket.h"]).status.success());
}

#[test]
fn verify_writes_reports_log_and_artifact_index() {
    let dir = unique_tmp_dir("verify");
    let report = dir.join("out/conformance.md");
    let log = dir.join("run.jsonl");

    let output = harness(&[
        "verify",
        "--fixture",
        path_str(&fixture_dir()),
        "--report",
        path_str(&report),
        "--timestamp",
        "2026-10-18T00:00:00.000Z",
        "--log",
        path_str(&log),
        "--log-level",
        "debug",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let markdown = std::fs::read_to_string(&report).unwrap();
    assert!(markdown.starts_with("# aixnet Conformance Report"));
    assert!(markdown.contains("- Failed: 0"));
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("out/conformance.json")).unwrap())
            .unwrap();
    assert_eq!(json["summary"]["failed"], 0);
    assert_eq!(json["timestamp"], "2026-10-18T00:00:00.000Z");

    let (lines, errors) = validate_log_file(&log).unwrap();
    assert!(errors.is_empty(), "{errors:?}");
    assert!(lines > json["summary"]["total"].as_u64().unwrap() as usize);
    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("fixture-verify::cli-test::001"));
    assert!(content.contains("\"event\":\"verify_complete\""));

    let index: ArtifactIndex =
        serde_json::from_str(&std::fs::read_to_string(dir.join("run.artifacts.json")).unwrap())
            .unwrap();
    assert_eq!(index.run_id, "cli-test");
    let kinds: Vec<_> = index.artifacts.iter().map(|a| a.kind.as_str()).collect();
    assert_eq!(kinds, ["report_markdown", "report_json"]);
    assert!(index.artifacts.iter().all(|a| a.sha256.len() == 64));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn verify_with_json_report_path_keeps_both_reports() {
    let dir = unique_tmp_dir("json-report");
    let report = dir.join("r.json");
    let log = dir.join("run.jsonl");

    let output = harness(&[
        "verify",
        "--fixture",
        path_str(&fixture_dir()),
        "--report",
        path_str(&report),
        "--log",
        path_str(&log),
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let markdown = std::fs::read_to_string(&report).unwrap();
    assert!(markdown.starts_with("# aixnet Conformance Report"));
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("r.report.json")).unwrap())
            .unwrap();
    assert_eq!(json["title"], "aixnet Conformance Report");

    let index: ArtifactIndex =
        serde_json::from_str(&std::fs::read_to_string(dir.join("run.artifacts.json")).unwrap())
            .unwrap();
    assert_eq!(index.artifacts.len(), 2);
    assert_ne!(index.artifacts[0].path, index.artifacts[1].path);

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn verify_exits_non_zero_on_tampered_fixture() {
    let dir = unique_tmp_dir("tampered");
    let mut set = FixtureSet::from_file(&fixture_dir().join("netinet_in_h.v1.json")).unwrap();
    let case = set
        .cases
        .iter_mut()
        .find(|c| c.symbol == "IPPROTO_UDP")
        .unwrap();
    case.expected_output = "18".to_string();
    std::fs::write(dir.join("netinet_in_h.v1.json"), set.to_json().unwrap()).unwrap();
    let report = dir.join("report.md");

    let output = harness(&[
        "verify",
        "--fixture",
        path_str(&dir),
        "--report",
        path_str(&report),
    ]);
    assert!(!output.status.success(), "tampered fixture must fail");
    assert!(stderr(&output).contains("failed=1"), "{}", stderr(&output));
    let markdown = std::fs::read_to_string(&report).unwrap();
    assert!(markdown.contains("### ipproto_udp_value"));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn verify_reports_parse_errors_when_no_fixture_loads() {
    let dir = unique_tmp_dir("malformed");
    std::fs::write(
        dir.join("broken.json"),
        r#"{"version":"v1","family":"all","captured_at":"x","cases":[{"name":"a"}]}"#,
    )
    .unwrap();

    let output = harness(&["verify", "--fixture", path_str(&dir)]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("broken.json"), "{err}");
    assert!(err.contains("missing field"), "{err}");

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn capture_round_trips_and_logs_to_stdout() {
    let dir = unique_tmp_dir("capture");
    let out = dir.join("nh.json");

    let output = harness(&[
        "capture",
        "--output",
        path_str(&out),
        "--header",
        "nh",
        "--timestamp",
        "2026-10-18T00:00:00.000Z",
        "--log",
        "-",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let set = FixtureSet::from_file(&out).unwrap();
    assert_eq!(set.family, "net/nh.h");
    assert_eq!(set.captured_at, "2026-10-18T00:00:00.000Z");
    assert!(set.cases.iter().all(|c| c.input.is_some()));

    let log = stdout(&output);
    let lines: Vec<_> = log.lines().collect();
    assert_eq!(lines.len(), 1);
    let entry = validate_log_line(lines[0], 1).expect("stdout log line validates");
    assert_eq!(entry.event, "fixture_captured");
    assert_eq!(entry.trace_id, "fixture-capture::cli-test::001");
    // No artifact index for a stdout log.
    assert!(!Path::new("-.artifacts.json").exists());

    let verify = harness(&["verify", "--fixture", path_str(&dir)]);
    assert!(verify.status.success(), "{}", stderr(&verify));

    let _ = std::fs::remove_dir_all(dir);
}
