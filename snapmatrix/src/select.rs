// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case selection: name globs and label filters, applied before anything is rendered.

use std::collections::BTreeSet;

use crate::{Label, LabelFilter};

/// Matches `text` against a pattern where `*` stands for any run of characters.
#[must_use]
pub fn matches_glob(pattern: &str, text: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    if !pattern.contains('*') {
        return pattern == text;
    }

    let mut remainder = text;
    let mut first_part = true;
    for part in pattern.split('*') {
        if part.is_empty() {
            continue;
        }
        match remainder.find(part) {
            Some(idx) => {
                if first_part && !pattern.starts_with('*') && idx != 0 {
                    return false;
                }
                remainder = &remainder[idx + part.len()..];
            }
            None => return false,
        }
        first_part = false;
    }
    if pattern.ends_with('*') {
        true
    } else {
        // The last literal part must sit at the very end of `text`; `find` may have
        // consumed an earlier occurrence, so check the suffix directly.
        let last = pattern.rsplit('*').next().unwrap_or_default();
        remainder.is_empty() || text.ends_with(last)
    }
}

/// Splits a pattern list on commas and whitespace.
#[must_use]
pub fn parse_patterns(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Which cases of a suite take part in a run.
///
/// A case is selected when it matches any of the name patterns (or there are none) and
/// the label filter admits its labels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    patterns: Vec<String>,
    labels: LabelFilter,
}

impl Selection {
    /// Restricts the selection to names matching any of `patterns`.
    #[must_use]
    pub fn with_patterns<S: Into<String>>(mut self, patterns: impl IntoIterator<Item = S>) -> Self {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts the selection by label.
    #[must_use]
    pub fn with_labels(mut self, labels: LabelFilter) -> Self {
        self.labels = labels;
        self
    }

    /// Name patterns; empty means every name.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// The label filter.
    #[must_use]
    pub fn labels(&self) -> &LabelFilter {
        &self.labels
    }

    /// Returns `true` if nothing is filtered out.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.patterns.is_empty() && self.labels.is_unfiltered()
    }

    /// Returns `true` if `name` passes the name patterns.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.patterns.is_empty() || self.patterns.iter().any(|p| matches_glob(p, name))
    }

    /// Returns `true` if a case with this name and these labels is selected.
    #[must_use]
    pub fn matches(&self, name: &str, labels: &BTreeSet<Label>) -> bool {
        self.matches_name(name) && self.labels.matches(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glob_literals_and_wildcards() {
        assert!(matches_glob("*", "anything"));
        assert!(matches_glob("DARK_SMALL", "DARK_SMALL"));
        assert!(!matches_glob("DARK_SMALL", "DARK_SMALLER"));
        assert!(matches_glob("DARK_*", "DARK_HUGE"));
        assert!(!matches_glob("DARK_*", "LIGHT_HUGE"));
        assert!(matches_glob("*_HUGE", "LIGHT_HUGE"));
        assert!(!matches_glob("*_HUGE", "LIGHT_HUGE_2"));
        assert!(matches_glob("D*_*E", "DARK_HUGE"));
        assert!(matches_glob("*A*", "DARK"));
        assert!(!matches_glob("L*", "DARK"));
    }

    #[test]
    fn glob_suffix_after_repeated_part() {
        assert!(matches_glob("*_A", "X_A_B_A"));
        assert!(matches_glob("X*A", "XAA"));
    }

    #[test]
    fn pattern_lists() {
        assert_eq!(parse_patterns("a, b\tc,,"), ["a", "b", "c"]);
        assert!(parse_patterns(" , ").is_empty());
    }

    #[test]
    fn selection_combines_names_and_labels() {
        let smoke: BTreeSet<Label> = [Label::smoke()].into();
        let none = BTreeSet::new();

        let all = Selection::default();
        assert!(all.is_unfiltered());
        assert!(all.matches("X", &none));

        let sel = Selection::default()
            .with_patterns(["DARK_*"])
            .with_labels(LabelFilter::only(Label::smoke()));
        assert!(sel.matches("DARK_SMALL", &smoke));
        assert!(!sel.matches("DARK_SMALL", &none));
        assert!(!sel.matches("LIGHT_SMALL", &smoke));
    }
}
