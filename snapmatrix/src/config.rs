// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run configuration.
//!
//! Snapshot runs are configured through the environment so that `cargo test` and the
//! `xtask` wrapper share one mechanism:
//!
//! | variable | values |
//! |---|---|
//! | `SNAPMATRIX_TEST` | unset or `verify`; `record` (`accept`, `bless`); `generate-all` |
//! | `SNAPMATRIX_CASE` | name globs, comma or whitespace separated |
//! | `SNAPMATRIX_LABELS` | label filter, e.g. `smoke` or `!smoke` |

use core::fmt;
use core::str::FromStr;
use std::path::{Path, PathBuf};

use crate::select::parse_patterns;
use crate::{Error, LabelFilter, Result, Selection};

/// Environment variable selecting the [`Mode`].
pub const MODE_VAR: &str = "SNAPMATRIX_TEST";
/// Environment variable holding name patterns.
pub const CASE_VAR: &str = "SNAPMATRIX_CASE";
/// Environment variable holding a label filter expression.
pub const LABELS_VAR: &str = "SNAPMATRIX_LABELS";

/// Whether a run compares against references or replaces them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Compare each capture with its reference. References are never modified.
    #[default]
    Verify,
    /// Write each capture as the new reference instead of comparing.
    Record,
    /// Verify, and additionally write every capture to the `current` directory.
    GenerateAll,
}

impl Mode {
    /// The canonical `SNAPMATRIX_TEST` value for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::Record => "record",
            Self::GenerateAll => "generate-all",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("verify") {
            Ok(Self::Verify)
        } else if ["record", "accept", "bless"]
            .iter()
            .any(|m| s.eq_ignore_ascii_case(m))
        {
            Ok(Self::Record)
        } else if s.eq_ignore_ascii_case("generate-all") || s.eq_ignore_ascii_case("generate_all") {
            Ok(Self::GenerateAll)
        } else {
            Err(Error::InvalidMode(s.to_string()))
        }
    }
}

/// Everything a [`Runner`](crate::Runner) needs besides the suite itself.
#[derive(Clone, Debug)]
pub struct RunConfig {
    mode: Mode,
    selection: Selection,
    root: PathBuf,
}

impl RunConfig {
    /// A verify-mode, unfiltered configuration storing images under `root`.
    ///
    /// `root` holds the `snapshots/`, `current/` and `diffs/` directories.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            mode: Mode::Verify,
            selection: Selection::default(),
            root: root.into(),
        }
    }

    /// Reads mode and selection from the environment.
    pub fn from_env(root: impl Into<PathBuf>) -> Result<Self> {
        let var = |name: &str| std::env::var(name).ok();
        Self::from_vars(root, var(MODE_VAR), var(CASE_VAR), var(LABELS_VAR))
    }

    /// Builds a configuration from raw variable values, as [`from_env`](Self::from_env)
    /// would see them.
    pub fn from_vars(
        root: impl Into<PathBuf>,
        mode: Option<String>,
        cases: Option<String>,
        labels: Option<String>,
    ) -> Result<Self> {
        let mode = match mode {
            Some(raw) => raw.parse()?,
            None => Mode::Verify,
        };
        let patterns = cases.as_deref().map(parse_patterns).unwrap_or_default();
        let labels = labels
            .as_deref()
            .map(LabelFilter::parse)
            .unwrap_or_default();
        Ok(Self {
            mode,
            selection: Selection::default()
                .with_patterns(patterns)
                .with_labels(labels),
            root: root.into(),
        })
    }

    /// Replaces the run mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the case selection.
    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// The run mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Which cases take part.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Directory holding `snapshots/`, `current/` and `diffs/`.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Label;

    #[test]
    fn mode_aliases() {
        assert_eq!("".parse::<Mode>().unwrap(), Mode::Verify);
        assert_eq!("Verify".parse::<Mode>().unwrap(), Mode::Verify);
        assert_eq!("record".parse::<Mode>().unwrap(), Mode::Record);
        assert_eq!("ACCEPT".parse::<Mode>().unwrap(), Mode::Record);
        assert_eq!("bless".parse::<Mode>().unwrap(), Mode::Record);
        assert_eq!("generate-all".parse::<Mode>().unwrap(), Mode::GenerateAll);
        assert!(matches!("overwrite".parse::<Mode>(), Err(Error::InvalidMode(_))));
    }

    #[test]
    fn vars_default_to_unfiltered_verify() {
        let config = RunConfig::from_vars("tests", None, None, None).unwrap();
        assert_eq!(config.mode(), Mode::Verify);
        assert!(config.selection().is_unfiltered());
        assert_eq!(config.root(), Path::new("tests"));
    }

    #[test]
    fn vars_are_parsed() {
        let config = RunConfig::from_vars(
            "tests",
            Some("record".into()),
            Some("DARK_*, LIGHT_SMALL".into()),
            Some("!smoke".into()),
        )
        .unwrap();
        assert_eq!(config.mode(), Mode::Record);
        assert_eq!(config.selection().patterns(), ["DARK_*", "LIGHT_SMALL"]);
        assert_eq!(
            config.selection().labels(),
            &LabelFilter::excluding(Label::smoke())
        );
    }

    #[test]
    fn bad_mode_is_an_error() {
        assert!(RunConfig::from_vars("tests", Some("yes".into()), None, None).is_err());
    }
}
