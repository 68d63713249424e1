//! CLI entrypoint for the tstreaming conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tstreaming_core::{IoPrint, Print};
use tstreaming_harness::structured_log::{self, ArtifactIndex, LogEmitter, LogLevel};
use tstreaming_harness::{
    ConformanceReport, FixtureSet, FixtureValue, FormatSpec, Rendered, TestRunner,
    VerificationSummary, fixtures,
};

/// Conformance tooling for tstreaming formatters.
#[derive(Debug, Parser)]
#[command(name = "tstreaming-harness")]
#[command(about = "Conformance testing harness for tstreaming formatters")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the formatters against fixture files.
    Verify {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixture: PathBuf,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Output report path (markdown; a JSON twin is written next to it).
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Render one value with one formatter and print it to stdout.
    Render {
        /// Formatter kind (`hex`) or a full JSON description.
        #[arg(long)]
        formatter: String,
        /// Value: a JSON literal, or a full `{"type":..,"value":..}` object.
        #[arg(long)]
        value: String,
        /// Input type when `--value` is a bare literal.
        #[arg(long = "type", default_value = "u32")]
        value_type: String,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        /// Log file path.
        #[arg(long)]
        path: PathBuf,
    },
}

fn parse_formatter(text: &str) -> Result<FormatSpec, serde_json::Error> {
    let text = text.trim();
    if text.starts_with('{') {
        serde_json::from_str(text)
    } else {
        serde_json::from_value(serde_json::json!({ "kind": text }))
    }
}

fn parse_value(text: &str, value_type: &str) -> Result<FixtureValue, serde_json::Error> {
    let text = text.trim();
    if text.starts_with('{') {
        return serde_json::from_str(text);
    }
    let literal = match value_type {
        "str" | "char" => serde_json::Value::String(text.to_string()),
        _ => serde_json::from_str::<serde_json::Value>(text)
            .unwrap_or_else(|_| serde_json::Value::String(text.to_string())),
    };
    serde_json::from_value(serde_json::json!({ "type": value_type, "value": literal }))
}

fn run_id() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("run-{secs}")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            log,
            report,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let mut fixture_sets = Vec::new();
            for path in fixtures::fixture_paths(&fixture)? {
                match FixtureSet::from_file(&path) {
                    Ok(set) => fixture_sets.push(set),
                    Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
                }
            }
            if fixture_sets.is_empty() {
                return Err(format!("No loadable fixtures in {}", fixture.display()).into());
            }

            let run_id = run_id();
            let runner = TestRunner::new("fixture-verify");
            let mut emitter = match &log {
                Some(path) => Some(LogEmitter::to_file(path, &runner.campaign, &run_id)?),
                None => None,
            };
            if let Some(emitter) = emitter.as_mut() {
                emitter.emit(LogLevel::Info, "verify_start")?;
            }

            let mut results = Vec::new();
            for set in &fixture_sets {
                match emitter.as_mut() {
                    Some(emitter) => results.extend(runner.run_logged(set, emitter)?),
                    None => results.extend(runner.run(set)),
                }
            }

            let summary = VerificationSummary::from_results(results);
            let report_doc = ConformanceReport {
                title: String::from("tstreaming Conformance Report"),
                line_ending: format!("{:?}", tstreaming_core::line_ending()),
                timestamp: structured_log::now_utc(),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            let mut index = ArtifactIndex::new(&run_id);
            if let Some(report_path) = &report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
                index.add_file(report_path, "report")?;
                index.add_file(&json_path, "report_json")?;
            }

            if let Some(mut emitter) = emitter {
                emitter.emit(LogLevel::Info, "verify_end")?;
                emitter.flush()?;
            }
            if let Some(log_path) = &log {
                index.add_file(log_path, "log")?;
            }

            // The index sits next to the log, or next to the report without one.
            let index_path = log
                .as_ref()
                .or(report.as_ref())
                .map(|path| path.with_extension("index.json"));
            if let Some(index_path) = index_path {
                std::fs::write(&index_path, index.to_json()?)?;
                eprintln!("Wrote artifact index to {}", index_path.display());
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Render {
            formatter,
            value,
            value_type,
        } => {
            let spec = parse_formatter(&formatter)?;
            let value = parse_value(&value, &value_type)?;
            let rendered = Rendered::new(&spec, &value)?;
            let mut out = IoPrint::new(std::io::stdout().lock());
            let n = out.print(&rendered);
            out.println();
            out.flush()?;
            eprintln!("{spec}: {n} bytes");
        }
        Command::ValidateLog { path } => {
            let (lines, errors) = structured_log::validate_log_file(&path)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!(
                "Validated {lines} lines in {}: {} errors",
                path.display(),
                errors.len()
            );
            if !errors.is_empty() {
                return Err("Log validation failed".into());
            }
        }
    }

    Ok(())
}
