// Runs the checked-in fixture sets end to end: loading, rendering, the
// JSONL log and the artifact index.

use std::path::{Path, PathBuf};
use std::process::Command;

use tstreaming_harness::structured_log::{ArtifactIndex, LogEmitter, sha256_hex, validate_log_file};
use tstreaming_harness::{FixtureSet, TestRunner, VerificationSummary, fixtures};

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tstreaming-harness-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn load_all() -> Vec<FixtureSet> {
    fixtures::fixture_paths(&fixture_dir())
        .unwrap()
        .iter()
        .map(|path| {
            FixtureSet::from_file(path)
                .unwrap_or_else(|e| panic!("Invalid fixture {}: {}", path.display(), e))
        })
        .collect()
}

#[test]
fn every_checked_in_fixture_passes() {
    let sets = load_all();
    assert!(sets.len() >= 2);

    let runner = TestRunner::new("fixture-test");
    let results: Vec<_> = sets.iter().flat_map(|set| runner.run(set)).collect();
    let summary = VerificationSummary::from_results(results);
    let failures: Vec<_> = summary
        .results
        .iter()
        .filter(|r| !r.passed)
        .map(|r| format!("{} [{}]: {}", r.case_name, r.formatter, r.diff.as_deref().unwrap_or("")))
        .collect();
    assert!(summary.all_passed(), "Failing cases:\n{}", failures.join("\n"));
    for r in &summary.results {
        assert_eq!(r.reported_count, r.expected.len(), "{}", r.case_name);
    }
}

#[test]
fn case_names_are_unique_per_set() {
    for set in load_all() {
        let mut names: Vec<_> = set.cases.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len(), "duplicate case names in {}", set.family);
    }
}

#[test]
fn logged_run_produces_valid_jsonl_and_index() {
    let log_path = scratch("verify.jsonl");
    let sets = load_all();
    let cases: usize = sets.iter().map(|s| s.cases.len()).sum();

    let mut emitter = LogEmitter::to_file(&log_path, "fixture-test", "run-1").unwrap();
    let runner = TestRunner::new("fixture-test");
    for set in &sets {
        runner.run_logged(set, &mut emitter).unwrap();
    }
    emitter.flush().unwrap();
    drop(emitter);

    let (lines, errors) = validate_log_file(&log_path).unwrap();
    assert_eq!(lines, cases);
    assert!(errors.is_empty(), "{errors:?}");

    let mut index = ArtifactIndex::new("run-1");
    index.add_file(&log_path, "log").unwrap();
    let entry = &index.artifacts[0];
    assert_eq!(entry.sha256, sha256_hex(&std::fs::read(&log_path).unwrap()));
    assert_eq!(entry.size_bytes, Some(std::fs::metadata(&log_path).unwrap().len()));
}

#[test]
fn cli_render_prints_formatted_value() {
    let output = Command::new(env!("CARGO_BIN_EXE_harness"))
        .args([
            "render",
            "--formatter",
            r#"{"kind":"align","width":6,"pad":".","inner":{"kind":"hex"}}"#,
            "--value",
            "255",
            "--type",
            "u16",
        ])
        .output()
        .expect("failed to run harness");
    assert!(
        output.status.success(),
        "render failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.starts_with(b"00FF.."));
}

#[test]
fn cli_verify_writes_report() {
    let report = scratch("report.md");
    let output = Command::new(env!("CARGO_BIN_EXE_harness"))
        .arg("verify")
        .arg("--fixture")
        .arg(fixture_dir())
        .arg("--report")
        .arg(&report)
        .output()
        .expect("failed to run harness");
    assert!(
        output.status.success(),
        "verify failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let md = std::fs::read_to_string(&report).unwrap();
    assert!(md.contains("- Failed: 0"));
    assert!(report.with_extension("json").exists());

    let index_path = report.with_extension("index.json");
    let index: ArtifactIndex =
        serde_json::from_str(&std::fs::read_to_string(&index_path).unwrap()).unwrap();
    let entry = index
        .artifacts
        .iter()
        .find(|a| a.kind == "report")
        .expect("report listed in the artifact index");
    assert_eq!(entry.sha256, sha256_hex(md.as_bytes()));
    assert!(index.artifacts.iter().any(|a| a.kind == "report_json"));
}

fn render_with_line_ending(ending: &str) -> Vec<u8> {
    let output = Command::new(env!("CARGO_BIN_EXE_harness"))
        .args(["render", "--formatter", "hex", "--value", "10", "--type", "u8"])
        .env("TSTREAMING_LINE_ENDING", ending)
        .output()
        .expect("failed to run harness");
    assert!(
        output.status.success(),
        "render failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    output.stdout
}

#[test]
fn cli_line_ending_comes_from_environment() {
    assert_eq!(render_with_line_ending("lf"), b"0A\n");
    assert_eq!(render_with_line_ending("CR"), b"0A\r");
    assert_eq!(render_with_line_ending("crlf"), b"0A\r\n");
    assert_eq!(render_with_line_ending("bogus"), b"0A\r\n");
}

#[test]
fn cli_rejects_mismatched_input() {
    let output = Command::new(env!("CARGO_BIN_EXE_harness"))
        .args(["render", "--formatter", "hex", "--value", "abc", "--type", "str"])
        .output()
        .expect("failed to run harness");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("integer"));
}
