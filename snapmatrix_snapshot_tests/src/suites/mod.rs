// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declared suites.
//!
//! Each suite owns one reference-image directory and runs in one test function.

use std::path::{Path, PathBuf};

use snapmatrix::{Result, Selection, StringId, Suite, file};

mod content;
mod dimensions;
mod list_item;
mod locales;

pub use content::content;
pub use dimensions::dimensions;
pub use list_item::list_item;
pub use locales::locales;

/// Content long enough to wrap at every width.
const LONG_CONTENT: [StringId; 3] = [StringId::Title, StringId::Description, StringId::Status];

/// Where data-file suites live.
#[must_use]
pub fn suites_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("suites")
}

/// The suite declared in `suites/smoke.ron`.
pub fn smoke() -> Result<Suite> {
    file::load_suite(suites_dir().join("smoke.ron"))
}

/// Every declared suite, in a stable order.
pub fn all() -> Result<Vec<Suite>> {
    Ok(vec![
        list_item()?,
        locales()?,
        dimensions()?,
        content()?,
        smoke()?,
    ])
}

/// Looks a suite up by name.
pub fn by_name(name: &str) -> Result<Option<Suite>> {
    Ok(all()?.into_iter().find(|s| s.name() == name))
}

/// Returns `true` if any case of any declared suite matches one of the name `patterns`.
///
/// A pattern list applies to every suite, so one suite matching nothing is expected; no
/// suite matching at all means the patterns are wrong.
pub fn any_case_matches(patterns: &[String]) -> Result<bool> {
    let selection = Selection::default().with_patterns(patterns.iter().cloned());
    Ok(all()?
        .iter()
        .any(|suite| suite.names().any(|name| selection.matches_name(name))))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use snapmatrix::{Label, LabelFilter, Selection};

    use super::*;

    #[test]
    fn suite_names_are_distinct() {
        let suites = all().unwrap();
        let names: HashSet<&str> = suites.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), suites.len());
    }

    #[test]
    fn every_suite_has_smoke_cases() {
        let smoke = Selection::default().with_labels(LabelFilter::only(Label::smoke()));
        for suite in all().unwrap() {
            let selected = suite.select(&smoke).unwrap();
            assert!(!selected.is_empty(), "`{}` has no smoke cases", suite.name());
            assert!(selected.len() < suite.len(), "`{}` is all smoke", suite.name());
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(by_name("locales").unwrap().unwrap().name(), "locales");
        assert!(by_name("nope").unwrap().is_none());
    }

    #[test]
    fn patterns_are_checked_across_suites() {
        let patterns = |p: &[&str]| p.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert!(any_case_matches(&patterns(&["DARK_HUGE"])).unwrap());
        assert!(any_case_matches(&patterns(&["nope", "EN_*"])).unwrap());
        assert!(!any_case_matches(&patterns(&["DARK_HUGEE"])).unwrap());
    }
}
