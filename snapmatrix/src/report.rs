// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-case outcomes and the report a run produces.

use core::fmt;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::{Label, Mode};

/// The result of checking one capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The capture matched its reference, within tolerance.
    Passed,
    /// Record mode: the capture was written as the new reference.
    Recorded {
        /// The reference image written.
        reference: PathBuf,
    },
    /// The capture differs from its reference.
    Mismatch {
        /// Human-readable description of the difference.
        detail: String,
        /// Pixels that differ, when the sizes match.
        different_pixels: Option<u64>,
        /// Where the capture was written for review.
        current: PathBuf,
        /// Where the diff image was written, when one could be produced.
        diff: Option<PathBuf>,
    },
    /// There is no reference image to compare against.
    MissingBaseline {
        /// The reference image that was looked for.
        expected: PathBuf,
        /// Where the capture was written for review.
        current: PathBuf,
    },
    /// The component could not be brought into a capturable state.
    RenderFailed {
        /// The render error.
        message: String,
    },
}

/// Discriminant of [`Outcome`], used for summaries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutcomeKind {
    /// See [`Outcome::Passed`].
    Passed,
    /// See [`Outcome::Recorded`].
    Recorded,
    /// See [`Outcome::Mismatch`].
    Mismatch,
    /// See [`Outcome::MissingBaseline`].
    MissingBaseline,
    /// See [`Outcome::RenderFailed`].
    RenderFailed,
}

impl OutcomeKind {
    /// Lower-case name used in summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Recorded => "recorded",
            Self::Mismatch => "mismatch",
            Self::MissingBaseline => "missing baseline",
            Self::RenderFailed => "render failed",
        }
    }
}

impl Outcome {
    /// The outcome without its payload.
    #[must_use]
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Passed => OutcomeKind::Passed,
            Self::Recorded { .. } => OutcomeKind::Recorded,
            Self::Mismatch { .. } => OutcomeKind::Mismatch,
            Self::MissingBaseline { .. } => OutcomeKind::MissingBaseline,
            Self::RenderFailed { .. } => OutcomeKind::RenderFailed,
        }
    }

    /// Returns `true` for mismatches, missing baselines and render failures.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::Mismatch { .. } | Self::MissingBaseline { .. } | Self::RenderFailed { .. }
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => f.write_str("passed"),
            Self::Recorded { reference } => write!(f, "recorded `{}`", reference.display()),
            Self::Mismatch {
                detail,
                current,
                diff,
                ..
            } => {
                write!(f, "mismatch (wrote `{}`", current.display())?;
                if let Some(diff) = diff {
                    write!(f, ", diff `{}`", diff.display())?;
                }
                write!(f, "): {detail}")
            }
            Self::MissingBaseline { expected, current } => write!(
                f,
                "missing baseline `{}` (wrote current `{}`)",
                expected.display(),
                current.display()
            ),
            Self::RenderFailed { message } => write!(f, "render failed: {message}"),
        }
    }
}

/// One report line: which case ran and how it went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The case's unique name.
    pub test_name: String,
    /// The case's labels.
    pub labels: BTreeSet<Label>,
    /// The outcome.
    pub outcome: Outcome,
}

/// The outcome of running one suite.
#[derive(Clone, Debug)]
pub struct Report {
    suite: String,
    mode: Mode,
    entries: Vec<Entry>,
}

impl Report {
    pub(crate) fn new(suite: &str, mode: Mode) -> Self {
        Self {
            suite: suite.to_string(),
            mode,
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Name of the suite that ran.
    #[must_use]
    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// Mode the suite ran in.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Entries, in execution order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries, one per selected case.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no case was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Test names, in execution order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.test_name.as_str())
    }

    /// Looks up the entry for a test name.
    #[must_use]
    pub fn get(&self, test_name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.test_name == test_name)
    }

    /// Entries whose outcome is a failure, in run order.
    pub fn failures(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(|e| e.outcome.is_failure())
    }

    /// Returns `true` if no entry failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Number of entries per outcome kind, in [`OutcomeKind`] order, omitting zeros.
    #[must_use]
    pub fn summary(&self) -> Vec<(OutcomeKind, usize)> {
        let mut counts: Vec<(OutcomeKind, usize)> = Vec::new();
        for entry in &self.entries {
            let kind = entry.outcome.kind();
            match counts.iter_mut().find(|(k, _)| *k == kind) {
                Some((_, n)) => *n += 1,
                None => counts.push((kind, 1)),
            }
        }
        counts.sort_by_key(|(k, _)| *k);
        counts
    }

    /// Panics with one line per failing case.
    #[track_caller]
    pub fn assert_success(&self) {
        if self.is_success() {
            return;
        }
        let mut message = format!(
            "snapshot failures in suite `{}` (use `SNAPMATRIX_TEST=record` to re-record; `cargo xtask report` to view diffs):",
            self.suite
        );
        for entry in self.failures() {
            message.push_str(&format!("\n  - {}: {}", entry.test_name, entry.outcome));
        }
        panic!("{message}");
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {} case(s)", self.suite, self.mode, self.len())?;
        for (kind, n) in self.summary() {
            write!(f, ", {n} {}", kind.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, outcome: Outcome) -> Entry {
        Entry {
            test_name: name.to_string(),
            labels: BTreeSet::new(),
            outcome,
        }
    }

    fn mixed() -> Report {
        let mut report = Report::new("list_item", Mode::Verify);
        report.push(entry("A", Outcome::Passed));
        report.push(entry(
            "B",
            Outcome::MissingBaseline {
                expected: "snapshots/list_item/B.png".into(),
                current: "current/list_item/B.png".into(),
            },
        ));
        report.push(entry("C", Outcome::Passed));
        report.push(entry(
            "D",
            Outcome::RenderFailed {
                message: "layout did not settle".into(),
            },
        ));
        report
    }

    #[test]
    fn summary_counts_each_kind() {
        let report = mixed();
        assert_eq!(
            report.summary(),
            [
                (OutcomeKind::Passed, 2),
                (OutcomeKind::MissingBaseline, 1),
                (OutcomeKind::RenderFailed, 1),
            ]
        );
        assert_eq!(
            report.to_string(),
            "list_item [verify]: 4 case(s), 2 passed, 1 missing baseline, 1 render failed"
        );
    }

    #[test]
    fn failures_are_listed_in_order() {
        let report = mixed();
        assert!(!report.is_success());
        let failed: Vec<_> = report.failures().map(|e| e.test_name.as_str()).collect();
        assert_eq!(failed, ["B", "D"]);
    }

    #[test]
    #[should_panic(expected = "missing baseline `snapshots/list_item/B.png`")]
    fn assert_success_names_failures() {
        mixed().assert_success();
    }

    #[test]
    fn recorded_is_not_a_failure() {
        let mut report = Report::new("s", Mode::Record);
        report.push(entry(
            "A",
            Outcome::Recorded {
                reference: "snapshots/s/A.png".into(),
            },
        ));
        assert!(report.is_success());
        report.assert_success();
    }
}
