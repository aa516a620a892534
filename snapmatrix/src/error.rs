// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

/// Errors raised while building suites, configuring a run, or touching the reference store.
///
/// Per-case failures (a pixel mismatch, a missing reference, a render that failed) are not
/// errors; they are reported as [`Outcome`](crate::Outcome)s so one bad case never aborts
/// the rest of the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two cases in one suite share a name, and would share a reference image.
    #[error("suite `{suite}` declares `{name}` more than once; test names must be unique")]
    DuplicateTestName {
        /// The suite being built.
        suite: String,
        /// The repeated name.
        name: String,
    },
    /// A test name that cannot be used as a file stem.
    #[error("invalid test name `{0}`: use ASCII letters, digits, `_`, `-` or `.`")]
    InvalidTestName(String),
    /// A suite name that cannot be used as a directory name.
    #[error("invalid suite name `{0}`: use ASCII letters, digits, `_` or `-`")]
    InvalidSuiteName(String),
    /// A suite was built without any cases.
    #[error("suite `{0}` has no cases")]
    EmptySuite(String),
    /// Name patterns were given but matched nothing.
    #[error("case filter matched no cases in suite `{suite}`.\n  filter: {patterns:?}\n  available: {available:?}")]
    NoCasesMatched {
        /// The suite being filtered.
        suite: String,
        /// The patterns that were applied.
        patterns: Vec<String>,
        /// Every name the suite declares.
        available: Vec<String>,
    },
    /// An unrecognized `SNAPMATRIX_TEST` value.
    #[error("unknown snapshot mode `{0}` (expected `verify`, `record`, `accept`, `bless` or `generate-all`)")]
    InvalidMode(String),
    /// An unrecognized filtering policy.
    #[error("unknown filter policy `{0}` (expected `smoke` or `full`)")]
    InvalidPolicy(String),
    /// Reading or writing a file failed.
    #[error("i/o error at `{}`: {source}", path.display())]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A stored reference image could not be decoded.
    #[error("failed to decode reference image `{}`: {source}", path.display())]
    DecodeReference {
        /// The reference image.
        path: PathBuf,
        /// The decoder error.
        #[source]
        source: kompari::image::ImageError,
    },
    /// A suite data file could not be parsed.
    #[error("failed to parse suite file `{}`: {source}", path.display())]
    SuiteFile {
        /// The data file, or `<inline>` for parsed strings.
        path: PathBuf,
        /// The parser error.
        #[source]
        source: ron::error::SpannedError,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
