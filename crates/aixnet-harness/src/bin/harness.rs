//! CLI entrypoint for the aixnet harness.

use std::path::{Path, PathBuf};
use std::time::Instant;

use aixnet_core::table::{self, Header};
use aixnet_harness::args::parse_u32_arg;
use aixnet_harness::report::json_sibling;
use aixnet_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, now_utc,
};
use aixnet_harness::verify::VerificationSummary;
use aixnet_harness::{ConformanceReport, FixtureSet, HarnessConfig, HarnessError, TestRunner};
use aixnet_harness::{capture, render};
use clap::{Parser, Subcommand, ValueEnum};

/// Inspect and verify the AIX/PowerPC constant table.
#[derive(Debug, Parser)]
#[command(name = "aixnet-harness")]
#[command(about = "Lookup and conformance tooling for the aixnet constant table")]
struct Cli {
    /// Structured JSONL log path, or `-` for stdout (overrides AIXNET_LOG).
    #[arg(long, global = true)]
    log: Option<PathBuf>,
    /// Minimum log level (overrides AIXNET_LOG_LEVEL).
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Plain,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the constant table.
    List {
        /// Restrict to one header (`machine`, `nh`, `in`, or a path).
        #[arg(long)]
        header: Option<String>,
        #[arg(long, value_enum, default_value = "plain")]
        format: Format,
    },
    /// Print one constant or helper.
    Lookup { name: String },
    /// Evaluate a helper on a 32-bit argument.
    Call {
        name: String,
        /// Decimal, `0x` hex, or a dotted-quad IPv4 address.
        arg: String,
    },
    /// Print the class, network and host parts of an IPv4 address.
    Classify { addr: String },
    /// Capture the current table as a fixture file.
    Capture {
        /// Output path for fixture JSON.
        #[arg(long)]
        output: PathBuf,
        /// Restrict to one header.
        #[arg(long)]
        header: Option<String>,
        /// Fixed capture timestamp for reproducible output.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Verify the table against captured fixtures.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown). A JSON report is written alongside.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
}

fn parse_header(raw: Option<&str>) -> Result<Option<Header>, HarnessError> {
    raw.map(|h| {
        Header::from_str_loose(h).ok_or_else(|| HarnessError::InvalidArgument {
            raw: h.to_string(),
            reason: "expected machine, nh, in, or a header path".to_string(),
        })
    })
    .transpose()
}

fn open_log(config: &HarnessConfig, campaign: &str) -> Result<Option<LogEmitter>, HarnessError> {
    let Some(path) = &config.log_path else {
        return Ok(None);
    };
    let emitter = if config.log_is_stdout() {
        LogEmitter::to_stdout(campaign, &config.run_id)
    } else {
        LogEmitter::to_file(path, campaign, &config.run_id)?
    };
    Ok(Some(emitter.with_min_level(config.log_level)))
}

fn write_artifact_index(
    config: &HarnessConfig,
    campaign: &str,
    files: &[(&Path, &str)],
) -> Result<Option<PathBuf>, HarnessError> {
    // A stdout log has no directory to sit in.
    let Some(log_path) = config.log_path.as_ref().filter(|_| !config.log_is_stdout()) else {
        return Ok(None);
    };
    let mut index = ArtifactIndex::new(&config.run_id, campaign);
    for (path, kind) in files {
        index.add_file(path, *kind)?;
    }
    let index_path = log_path.with_extension("artifacts.json");
    std::fs::write(&index_path, index.to_json()?)?;
    Ok(Some(index_path))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = HarnessConfig::from_env().with_overrides(cli.log, cli.log_level.as_deref());

    match cli.command {
        Command::List { header, format } => {
            let header = parse_header(header.as_deref())?;
            let constants: Vec<_> = match header {
                Some(h) => table::by_header(h).collect(),
                None => table::constants().iter().collect(),
            };
            match format {
                Format::Plain => print!("{}", render::render_table(constants)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&constants)?),
            }
        }
        Command::Lookup { name } => {
            let symbol = table::resolve(&name)?;
            println!("{}", render::render_symbol(symbol));
        }
        Command::Call { name, arg } => {
            let value = parse_u32_arg(&arg)?;
            let result = table::call(&name, value)?;
            println!("{result} ({result:#x})");
        }
        Command::Classify { addr } => {
            let value = parse_u32_arg(&addr)?;
            println!("{}", render::render_classification(value));
        }
        Command::Capture {
            output,
            header,
            timestamp,
        } => {
            let header = parse_header(header.as_deref())?;
            let set = capture::capture_fixture_set(header, &timestamp.unwrap_or_else(now_utc));
            if let Some(parent) = output.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, set.to_json()?)?;
            eprintln!(
                "Captured {} cases ({}) to {}",
                set.cases.len(),
                set.family,
                output.display()
            );

            if let Some(mut log) = open_log(&config, "fixture-capture")? {
                log.emit_entry(
                    LogEntry::new(String::new(), LogLevel::Info, "fixture_captured")
                        .with_outcome(Outcome::Pass)
                        .with_artifacts(vec![output.display().to_string()])
                        .with_details(serde_json::json!({
                            "family": set.family,
                            "cases": set.cases.len(),
                        })),
                )?;
                log.flush()?;
                write_artifact_index(&config, "fixture-capture", &[(&output, "fixture")])?;
            }
        }
        Command::Verify {
            fixture,
            report,
            timestamp,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let started = Instant::now();
            let (fixture_sets, skipped) =
                FixtureSet::load_dir(&fixture).inspect_err(|err| eprintln!("{err}"))?;
            for (path, err) in &skipped {
                eprintln!("Skipping {}: {err}", path.display());
            }

            let runner = TestRunner::new("fixture-verify");
            let mut log = open_log(&config, &runner.campaign)?;
            let mut results = Vec::new();
            for set in &fixture_sets {
                match log.as_mut() {
                    Some(log) => results.extend(runner.run_logged(set, log)?),
                    None => results.extend(runner.run(set)),
                }
            }

            // Stable ordering for reproducible report hashing.
            results.sort_by(|a, b| {
                a.header
                    .cmp(&b.header)
                    .then_with(|| a.symbol.cmp(&b.symbol))
                    .then_with(|| a.case_name.cmp(&b.case_name))
            });

            let report_doc = ConformanceReport {
                title: String::from("aixnet Conformance Report"),
                families: fixture_sets.iter().map(|s| s.family.clone()).collect(),
                timestamp: timestamp.unwrap_or_else(now_utc),
                summary: VerificationSummary::from_results(results),
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            let mut artifacts = Vec::new();
            if let Some(report_path) = &report {
                if let Some(parent) = report_path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    std::fs::create_dir_all(parent)?;
                }
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(report_path, report_doc.to_markdown())?;
                let json_path = json_sibling(report_path);
                std::fs::write(&json_path, report_doc.to_json())?;
                artifacts.push((report_path.clone(), "report_markdown"));
                artifacts.push((json_path, "report_json"));
            }

            if let Some(log) = log.as_mut() {
                let outcome = if report_doc.summary.all_passed() {
                    Outcome::Pass
                } else {
                    Outcome::Fail
                };
                log.emit_entry(
                    LogEntry::new(String::new(), LogLevel::Info, "verify_complete")
                        .with_outcome(outcome)
                        .with_duration_ms(started.elapsed().as_millis() as u64)
                        .with_artifacts(
                            artifacts
                                .iter()
                                .map(|(p, _)| p.display().to_string())
                                .collect(),
                        )
                        .with_details(serde_json::json!({
                            "total": report_doc.summary.total,
                            "passed": report_doc.summary.passed,
                            "failed": report_doc.summary.failed,
                            "skipped_files": skipped.len(),
                        })),
                )?;
                log.flush()?;
                let files: Vec<(&Path, &str)> =
                    artifacts.iter().map(|(p, k)| (p.as_path(), *k)).collect();
                write_artifact_index(&config, &runner.campaign, &files)?;
            }

            if !report_doc.summary.all_passed() {
                return Err(HarnessError::VerificationFailed {
                    failed: report_doc.summary.failed,
                    total: report_doc.summary.total,
                }
                .into());
            }
        }
    }

    Ok(())
}
