// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Xtask utilities for Snapmatrix: runs snapshot suites and integrates Kompari.

use clap::Parser;
use kompari::DirDiffConfig;
use kompari_tasks::args::Command as KompariCommand;
use kompari_tasks::{Actions, Args, Task};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::process::Command;

const SUITES: &[&str] = &["list_item", "locales", "dimensions", "content", "smoke"];
/// Suite used by Kompari commands when `--suite` is not given.
const DEFAULT_REPORT_SUITE: &str = "list_item";

const MODE_VAR: &str = "SNAPMATRIX_TEST";
const CASE_VAR: &str = "SNAPMATRIX_CASE";
const LABELS_VAR: &str = "SNAPMATRIX_LABELS";

struct ActionsImpl {
    suite: String,
}

#[derive(Copy, Clone, Debug)]
enum SnapshotTestMode {
    Verify,
    Record,
    GenerateAll,
}

impl SnapshotTestMode {
    fn env_value(self) -> Option<&'static str> {
        match self {
            Self::Verify => None,
            Self::Record => Some("record"),
            Self::GenerateAll => Some("generate-all"),
        }
    }
}

/// What a `snapshots test` invocation runs.
#[derive(Clone, Debug, Default)]
struct TestSelection {
    suite: Option<String>,
    case: Option<String>,
    labels: Vec<String>,
}

impl TestSelection {
    fn labels_value(&self) -> Option<String> {
        (!self.labels.is_empty()).then(|| self.labels.join(","))
    }
}

impl Actions for ActionsImpl {
    fn generate_all_tests(&self) -> kompari::Result<()> {
        run_generate_all(&self.suite)
    }
}

fn clean_dir(dir: &Path) -> kompari::Result<()> {
    std::fs::create_dir_all(dir)?;
    for path in kompari::list_image_dir(dir)? {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

fn kompari_args_first(arg: &str) -> bool {
    matches!(
        arg,
        "report" | "review" | "clean" | "dead-snapshots" | "size-check"
    )
}

fn parse_suite_value(value: &str) -> Option<String> {
    let value = value.strip_prefix("checked_in_").unwrap_or(value);
    SUITES.contains(&value).then(|| value.to_string())
}

fn strip_suite_flag(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut suite = None;
    let mut remaining = Vec::with_capacity(args.len());

    let mut i = 0_usize;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--suite" || arg == "-s" {
            if let Some(value) = args.get(i + 1) {
                if let Some(s) = parse_suite_value(value) {
                    suite = Some(s);
                } else {
                    warn!("unknown suite `{value}`; expected one of {SUITES:?}");
                    remaining.push(arg.clone());
                    remaining.push(value.clone());
                }
                i += 2;
                continue;
            }
        } else if let Some(value) = arg.strip_prefix("--suite=")
            && let Some(s) = parse_suite_value(value)
        {
            suite = Some(s);
            i += 1;
            continue;
        }

        remaining.push(arg.clone());
        i += 1;
    }

    (suite, remaining)
}

fn tests_path() -> PathBuf {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or_else(|| Path::new(".."));
    root.join("snapmatrix_snapshot_tests").join("tests")
}

fn run_kompari_for_suite(suite: &str, raw_kompari_args: Vec<String>) -> kompari::Result<()> {
    // Kompari expects its own argv; we pass through the kompari args after removing
    // any xtask-only flags like `--suite`.
    let mut argv = Vec::with_capacity(raw_kompari_args.len() + 1);
    argv.push("xtask".to_string());
    argv.extend(raw_kompari_args);
    let args = Args::parse_from(argv);
    snapshots_command(suite, args)
}

fn run_generate_all(suite: &str) -> kompari::Result<()> {
    let selection = TestSelection {
        suite: Some(suite.to_string()),
        ..TestSelection::default()
    };
    run_snapshot_tests(SnapshotTestMode::GenerateAll, &selection, Vec::new()).map(|_| ())
}

/// Runs the snapshot test target and returns whether it succeeded.
fn run_snapshot_tests(
    mode: SnapshotTestMode,
    selection: &TestSelection,
    extra_args: Vec<String>,
) -> kompari::Result<bool> {
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let mut cmd = Command::new(cargo);
    cmd.args(["test", "-p", "snapmatrix_snapshot_tests", "--test", "snapshots"]);
    cmd.env_remove(MODE_VAR)
        .env_remove(CASE_VAR)
        .env_remove(LABELS_VAR);

    if let Some(value) = mode.env_value() {
        cmd.env(MODE_VAR, value);
    }
    if let Some(case) = &selection.case {
        cmd.env(CASE_VAR, case);
    }
    if let Some(labels) = selection.labels_value() {
        cmd.env(LABELS_VAR, labels);
    }

    cmd.arg("--");
    cmd.arg("--include-ignored");
    match &selection.suite {
        Some(suite) => {
            cmd.args([format!("checked_in_{suite}").as_str(), "--exact"]);
        }
        None => {
            cmd.arg("checked_in_");
        }
    }
    cmd.args(extra_args);

    info!(
        "running snapshots: suite={} mode={mode:?} case={:?} labels={:?}",
        selection.suite.as_deref().unwrap_or("all"),
        selection.case,
        selection.labels_value()
    );
    let status = cmd.status()?;
    if !status.success() {
        warn!("snapshot tests exited with {status}");
    }
    Ok(status.success())
}

fn snapshots_command(suite: &str, args: Args) -> kompari::Result<()> {
    let tests_path = tests_path();
    let snapshots_path = tests_path.join("snapshots").join(suite);
    let current_path = tests_path.join("current").join(suite);

    std::fs::create_dir_all(&snapshots_path)?;
    std::fs::create_dir_all(&current_path)?;

    let mut diff_config = DirDiffConfig::new(snapshots_path, current_path);
    diff_config.set_ignore_right_missing(true);

    match &args.command {
        KompariCommand::Report(_) | KompariCommand::Review(_) => {
            clean_dir(diff_config.right_path())?;
            run_generate_all(suite)?;
            let diff = diff_config.create_diff()?;
            if diff.results().is_empty() {
                println!("No snapshot differences found in `{suite}`.");
            }
        }
        KompariCommand::Clean | KompariCommand::DeadSnapshots(_) | KompariCommand::SizeCheck(_) => {
        }
    }

    let mut task = Task::new(
        diff_config,
        Box::new(ActionsImpl {
            suite: suite.to_string(),
        }),
    );
    task.set_report_output_path(tests_path.join(format!("report-{suite}.html")));
    task.run(&args)?;
    Ok(())
}

const USAGE: &str = "\
Usage: cargo xtask snapshots [--suite <name>] <kompari-subcommand> [args...]
       cargo xtask snapshots [--suite <name>] test [--record|--generate-all] [--case <pattern>]
                             [--smoke|--full|--label <label>|--not-label <label>] [-- <test args...>]";

/// Parses the arguments after `snapshots [--suite <name>] test`.
fn run_test_command(suite: Option<String>, args: &[String]) -> kompari::Result<()> {
    let mut mode = SnapshotTestMode::Verify;
    let mut record_seen = false;
    let mut generate_all_seen = false;
    let mut selection = TestSelection {
        suite,
        ..TestSelection::default()
    };
    let mut extra_args = Vec::<String>::new();

    let mut i = 0_usize;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--" {
            extra_args.extend_from_slice(&args[i + 1..]);
            break;
        }

        match arg.as_str() {
            "--record" | "--accept" | "--bless" => {
                record_seen = true;
                mode = SnapshotTestMode::Record;
                i += 1;
                continue;
            }
            "--generate-all" => {
                generate_all_seen = true;
                mode = SnapshotTestMode::GenerateAll;
                i += 1;
                continue;
            }
            "--smoke" => {
                selection.labels.push("smoke".to_string());
                i += 1;
                continue;
            }
            "--full" => {
                selection.labels.clear();
                i += 1;
                continue;
            }
            "--case" | "-c" | "--label" | "--not-label" => {
                if let Some(value) = args.get(i + 1) {
                    match arg.as_str() {
                        "--case" | "-c" => selection.case = Some(value.clone()),
                        "--label" => selection.labels.push(value.clone()),
                        _ => selection.labels.push(format!("!{value}")),
                    }
                    i += 2;
                    continue;
                }
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--case=") {
                    selection.case = Some(value.to_string());
                    i += 1;
                    continue;
                }
            }
        }

        extra_args.push(arg.clone());
        i += 1;
    }

    if record_seen && generate_all_seen {
        eprintln!("`--record` and `--generate-all` are mutually exclusive.");
        return Ok(());
    }

    if !run_snapshot_tests(mode, &selection, extra_args)? {
        std::process::exit(1);
    }
    Ok(())
}

fn main() -> kompari::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // - `cargo xtask snapshots [--suite <name>] test ...` runs suites.
    // - `cargo xtask snapshots [--suite <name>] <kompari-subcommand> ...` and
    //   `cargo xtask report|review|...` run Kompari against one suite's directories.
    let raw = std::env::args().collect::<Vec<_>>();
    let first = raw.get(1).map(String::as_str);

    if let Some(arg1) = first {
        if arg1 == "snapshots" {
            let (suite, remaining) = strip_suite_flag(&raw[2..]);
            if remaining.is_empty() {
                eprintln!("{USAGE}\n\nSuites: {}", SUITES.join(", "));
                return Ok(());
            }

            if remaining[0] == "test" {
                return run_test_command(suite, &remaining[1..]);
            }

            let suite = suite.unwrap_or_else(|| DEFAULT_REPORT_SUITE.to_string());
            return run_kompari_for_suite(&suite, remaining);
        }

        if kompari_args_first(arg1) {
            let (suite, remaining) = strip_suite_flag(&raw[1..]);
            let suite = suite.unwrap_or_else(|| DEFAULT_REPORT_SUITE.to_string());
            return run_kompari_for_suite(&suite, remaining);
        }
    }

    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    struct Cli {
        #[clap(subcommand)]
        command: CliCommand,
    }

    #[expect(
        clippy::enum_variant_names,
        reason = "One subcommand per suite directory."
    )]
    #[derive(Parser, Debug)]
    enum CliCommand {
        SnapshotsListItem(Args),
        SnapshotsLocales(Args),
        SnapshotsDimensions(Args),
        SnapshotsContent(Args),
        SnapshotsSmoke(Args),
    }

    let cli = Cli::parse();
    match cli.command {
        CliCommand::SnapshotsListItem(args) => snapshots_command("list_item", args),
        CliCommand::SnapshotsLocales(args) => snapshots_command("locales", args),
        CliCommand::SnapshotsDimensions(args) => snapshots_command("dimensions", args),
        CliCommand::SnapshotsContent(args) => snapshots_command("content", args),
        CliCommand::SnapshotsSmoke(args) => snapshots_command("smoke", args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn suite_flag_is_stripped() {
        let (suite, rest) = strip_suite_flag(&strings(&["--suite", "locales", "test", "--smoke"]));
        assert_eq!(suite.as_deref(), Some("locales"));
        assert_eq!(rest, ["test", "--smoke"]);

        let (suite, rest) = strip_suite_flag(&strings(&["--suite=checked_in_smoke", "report"]));
        assert_eq!(suite.as_deref(), Some("smoke"));
        assert_eq!(rest, ["report"]);
    }

    #[test]
    fn unknown_suites_pass_through() {
        let (suite, rest) = strip_suite_flag(&strings(&["--suite", "nope", "test"]));
        assert_eq!(suite, None);
        assert_eq!(rest, ["--suite", "nope", "test"]);
    }

    #[test]
    fn labels_join_into_one_filter() {
        let selection = TestSelection {
            labels: strings(&["smoke", "!slow"]),
            ..TestSelection::default()
        };
        assert_eq!(selection.labels_value().as_deref(), Some("smoke,!slow"));
        assert_eq!(TestSelection::default().labels_value(), None);
    }
}
