// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for snapshot integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]

use std::path::Path;

use snapmatrix::{Mode, Report, RunConfig, Suite};
use snapmatrix_snapshot_tests::helper::run_suite_with;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn run(suite: &Suite, root: &Path, mode: Mode) -> Report {
    let config = RunConfig::new(root).with_mode(mode);
    run_suite_with(suite, config).expect("run suite")
}

/// Records every case of `suite` under `root`, then verifies against what was recorded.
pub(crate) fn record_then_verify(suite: &Suite, root: &Path) -> Report {
    let recorded = run(suite, root, Mode::Record);
    assert_eq!(recorded.len(), suite.len(), "every case is recorded");
    assert!(
        recorded.is_success(),
        "recording `{}` failed: {recorded}",
        suite.name()
    );
    run(suite, root, Mode::Verify)
}

pub(crate) fn assert_no_snapshot_failures(reports: &[Report]) {
    let failures: Vec<String> = reports
        .iter()
        .flat_map(|r| {
            r.failures()
                .map(move |e| format!("{}/{}: {}", r.suite(), e.test_name, e.outcome))
        })
        .collect();
    if failures.is_empty() {
        return;
    }

    eprintln!(
        "Snapshot failures (use `SNAPMATRIX_TEST=record` to record; `cargo xtask report` to view diffs):"
    );
    for failure in &failures {
        eprintln!("  - {failure}");
    }
    panic!("snapshot failures: {}", failures.len());
}
