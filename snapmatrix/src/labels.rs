// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labels and label filters.
//!
//! Cases are tagged with a set of [`Label`]s when they are registered in a suite. A
//! [`LabelFilter`] is an include/exclude predicate over those sets, evaluated before any
//! case is rendered; it changes which cases run, never how a comparison behaves.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A string tag attached to a case.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Label(String);

impl Label {
    const SMOKE: &'static str = "smoke";

    /// Creates a label. Surrounding whitespace is trimmed and the name is lower-cased.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_ascii_lowercase())
    }

    /// The conventional label for the small, representative subset run on every change.
    #[must_use]
    pub fn smoke() -> Self {
        Self(Self::SMOKE.to_string())
    }

    /// The normalized name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

/// Selects cases by label.
///
/// `include` is any-of (an empty include list admits everything) and `exclude` is
/// none-of. Exclusion wins over inclusion.
///
/// ```rust
/// use snapmatrix::{Label, LabelFilter};
/// use std::collections::BTreeSet;
///
/// let smoke: BTreeSet<Label> = [Label::smoke()].into();
/// let untagged = BTreeSet::new();
///
/// assert!(LabelFilter::only(Label::smoke()).matches(&smoke));
/// assert!(!LabelFilter::only(Label::smoke()).matches(&untagged));
/// assert!(LabelFilter::excluding(Label::smoke()).matches(&untagged));
/// assert!(LabelFilter::all().matches(&untagged));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelFilter {
    include: Vec<Label>,
    exclude: Vec<Label>,
}

impl LabelFilter {
    /// Admits every case.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Admits only cases carrying `label`.
    #[must_use]
    pub fn only(label: Label) -> Self {
        Self {
            include: vec![label],
            exclude: Vec::new(),
        }
    }

    /// Admits only cases not carrying `label`.
    #[must_use]
    pub fn excluding(label: Label) -> Self {
        Self {
            include: Vec::new(),
            exclude: vec![label],
        }
    }

    /// Adds a label to the include list.
    #[must_use]
    pub fn include(mut self, label: Label) -> Self {
        self.include.push(label);
        self
    }

    /// Adds a label to the exclude list.
    #[must_use]
    pub fn exclude(mut self, label: Label) -> Self {
        self.exclude.push(label);
        self
    }

    /// Returns `true` if the filter admits everything.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Evaluates the filter against the labels of one case.
    #[must_use]
    pub fn matches(&self, labels: &BTreeSet<Label>) -> bool {
        if self.exclude.iter().any(|l| labels.contains(l)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|l| labels.contains(l))
    }

    /// Parses a filter expression such as `smoke`, `!smoke` or `smoke, not:slow`.
    ///
    /// Terms are separated by commas or whitespace; a `!` or `not:` prefix excludes.
    /// An empty expression is unfiltered.
    #[must_use]
    pub fn parse(expr: &str) -> Self {
        let mut filter = Self::default();
        for term in expr
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
        {
            if let Some(name) = term.strip_prefix('!').or_else(|| term.strip_prefix("not:")) {
                if !name.is_empty() {
                    filter.exclude.push(Label::new(name));
                }
            } else {
                filter.include.push(Label::new(term));
            }
        }
        filter
    }
}

impl fmt::Display for LabelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unfiltered() {
            return f.write_str("*");
        }
        let terms: Vec<String> = self
            .include
            .iter()
            .map(ToString::to_string)
            .chain(self.exclude.iter().map(|l| format!("!{l}")))
            .collect();
        f.write_str(&terms.join(","))
    }
}

/// The two conventional run policies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Policy {
    /// A small, fast, representative subset, run on every change.
    Smoke,
    /// The complete configuration matrix, run on a slower cadence.
    Full,
}

impl Policy {
    /// The label filter implementing this policy.
    #[must_use]
    pub fn filter(self) -> LabelFilter {
        match self {
            Self::Smoke => LabelFilter::only(Label::smoke()),
            Self::Full => LabelFilter::all(),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smoke" => Ok(Self::Smoke),
            "full" => Ok(Self::Full),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}
