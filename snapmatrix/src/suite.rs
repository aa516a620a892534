// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suites: ordered, validated collections of cases sharing a reference-image namespace.

use std::collections::{BTreeSet, HashSet};

use crate::item::validate_test_name;
use crate::select::Selection;
use crate::{Error, Label, Result, TestItem};

/// A registered test item together with its labels and comparison tolerance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Case {
    item: TestItem,
    labels: BTreeSet<Label>,
    max_diff_pixels: u64,
}

impl Case {
    /// The name the case's reference image is stored under.
    #[must_use]
    pub fn name(&self) -> &str {
        self.item.test_name()
    }

    /// The configuration rendered for this case.
    #[must_use]
    pub fn item(&self) -> &TestItem {
        &self.item
    }

    /// Labels attached at registration.
    #[must_use]
    pub fn labels(&self) -> &BTreeSet<Label> {
        &self.labels
    }

    /// Number of pixels allowed to differ before the comparison fails.
    #[must_use]
    pub fn max_diff_pixels(&self) -> u64 {
        self.max_diff_pixels
    }
}

/// A validated suite.
///
/// Cases keep their declaration order. Every case name is a valid file stem and unique
/// within the suite.
#[derive(Clone, Debug)]
pub struct Suite {
    name: String,
    cases: Vec<Case>,
}

impl Suite {
    /// The suite name, also the reference-image directory name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All cases, in declaration order.
    #[must_use]
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Always `false` for a built suite; provided for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Case names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.cases.iter().map(Case::name)
    }

    /// Looks up a case by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.name() == name)
    }

    /// Applies a selection, preserving declaration order.
    ///
    /// Fails with [`Error::NoCasesMatched`] if name patterns were given and none matched.
    /// A label filter that admits nothing yields an empty list.
    pub fn select(&self, selection: &Selection) -> Result<Vec<&Case>> {
        if !selection.patterns().is_empty()
            && !self.cases.iter().any(|c| selection.matches_name(c.name()))
        {
            return Err(Error::NoCasesMatched {
                suite: self.name.clone(),
                patterns: selection.patterns().to_vec(),
                available: self.names().map(str::to_string).collect(),
            });
        }
        Ok(self
            .cases
            .iter()
            .filter(|c| selection.matches(c.name(), c.labels()))
            .collect())
    }
}

/// Builder for [`Suite`].
///
/// Validation is deferred to [`build`](Self::build) so that a suite can be declared as one
/// expression; the whole suite fails if any case is invalid.
#[derive(Debug)]
pub struct SuiteBuilder {
    name: String,
    cases: Vec<Case>,
    tolerances: Vec<(String, u64)>,
}

impl SuiteBuilder {
    /// Starts a suite named `name`, which is also its reference-image directory.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
            tolerances: Vec::new(),
        }
    }

    /// Registers an unlabeled case.
    #[must_use]
    pub fn case(self, item: TestItem) -> Self {
        self.labeled(item, [])
    }

    /// Registers a case carrying the [`smoke`](Label::smoke) label.
    #[must_use]
    pub fn smoke(self, item: TestItem) -> Self {
        self.labeled(item, [Label::smoke()])
    }

    /// Registers a case with the given labels.
    #[must_use]
    pub fn labeled(mut self, item: TestItem, labels: impl IntoIterator<Item = Label>) -> Self {
        self.cases.push(Case {
            item,
            labels: labels.into_iter().collect(),
            max_diff_pixels: 0,
        });
        self
    }

    /// Registers several unlabeled cases.
    #[must_use]
    pub fn cases(mut self, items: impl IntoIterator<Item = TestItem>) -> Self {
        for item in items {
            self = self.case(item);
        }
        self
    }

    /// Allows up to `max_diff_pixels` differing pixels for the named case.
    ///
    /// Applied at build time, so it may precede the case's registration.
    #[must_use]
    pub fn tolerance(mut self, name: impl Into<String>, max_diff_pixels: u64) -> Self {
        self.tolerances.push((name.into(), max_diff_pixels));
        self
    }

    /// Validates and builds the suite.
    pub fn build(self) -> Result<Suite> {
        let Self {
            name,
            mut cases,
            tolerances,
        } = self;

        let valid_suite_name = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));
        if !valid_suite_name {
            return Err(Error::InvalidSuiteName(name));
        }
        if cases.is_empty() {
            return Err(Error::EmptySuite(name));
        }

        let mut seen = HashSet::with_capacity(cases.len());
        for case in &cases {
            validate_test_name(case.name())?;
            if !seen.insert(case.name()) {
                return Err(Error::DuplicateTestName {
                    suite: name,
                    name: case.name().to_string(),
                });
            }
        }

        for (case_name, max_diff_pixels) in tolerances {
            match cases.iter().position(|c| c.name() == case_name) {
                Some(idx) => cases[idx].max_diff_pixels = max_diff_pixels,
                None => {
                    return Err(Error::NoCasesMatched {
                        suite: name,
                        patterns: vec![case_name],
                        available: cases.iter().map(|c| c.name().to_string()).collect(),
                    });
                }
            }
        }

        Ok(Suite { name, cases })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FontScale, LabelFilter, StringId, Theme};

    fn item(name: &str) -> TestItem {
        TestItem::new(name, Theme::Dark, FontScale::Normal, [StringId::Title])
    }

    #[test]
    fn keeps_declaration_order() {
        let suite = SuiteBuilder::new("order")
            .case(item("C"))
            .smoke(item("A"))
            .case(item("B"))
            .build()
            .unwrap();
        assert_eq!(suite.names().collect::<Vec<_>>(), ["C", "A", "B"]);
        assert_eq!(suite.len(), 3);
    }

    #[test]
    fn duplicate_names_fail_the_whole_suite() {
        let err = SuiteBuilder::new("dup")
            .case(item("DARK_SMALL"))
            .smoke(item("DARK_HUGE"))
            .case(item("DARK_SMALL"))
            .build()
            .unwrap_err();
        match err {
            Error::DuplicateTestName { suite, name } => {
                assert_eq!(suite, "dup");
                assert_eq!(name, "DARK_SMALL");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_bad_names_and_empty_suites() {
        assert!(matches!(
            SuiteBuilder::new("a/b").case(item("X")).build(),
            Err(Error::InvalidSuiteName(_))
        ));
        assert!(matches!(
            SuiteBuilder::new("empty").build(),
            Err(Error::EmptySuite(_))
        ));
        assert!(matches!(
            SuiteBuilder::new("s").case(item("../escape")).build(),
            Err(Error::InvalidTestName(_))
        ));
    }

    #[test]
    fn tolerances_apply_by_name() {
        let suite = SuiteBuilder::new("tol")
            .tolerance("B", 12)
            .case(item("A"))
            .case(item("B"))
            .build()
            .unwrap();
        assert_eq!(suite.get("A").unwrap().max_diff_pixels(), 0);
        assert_eq!(suite.get("B").unwrap().max_diff_pixels(), 12);

        assert!(matches!(
            SuiteBuilder::new("tol").tolerance("Z", 1).case(item("A")).build(),
            Err(Error::NoCasesMatched { .. })
        ));
    }

    #[test]
    fn select_by_label_and_pattern() {
        let suite = SuiteBuilder::new("sel")
            .smoke(item("DARK_SMALL"))
            .case(item("DARK_HUGE"))
            .smoke(item("LIGHT_HUGE"))
            .build()
            .unwrap();

        let smoke = Selection::default().with_labels(LabelFilter::only(Label::smoke()));
        let names: Vec<_> = suite.select(&smoke).unwrap().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["DARK_SMALL", "LIGHT_HUGE"]);

        let huge_smoke = smoke.with_patterns(["*_HUGE"]);
        let names: Vec<_> = suite
            .select(&huge_smoke)
            .unwrap()
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, ["LIGHT_HUGE"]);

        let nothing = Selection::default().with_patterns(["LIGHT_SMALL"]);
        assert!(matches!(
            suite.select(&nothing),
            Err(Error::NoCasesMatched { .. })
        ));

        let no_label = Selection::default().with_labels(LabelFilter::only(Label::new("rtl")));
        assert!(suite.select(&no_label).unwrap().is_empty());
    }
}
