// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The parameterized runner.

use core::fmt::Display;

use kompari::Image;
use log::{debug, info, warn};

use crate::{Entry, Outcome, ReferenceStore, Report, Result, RunConfig, Suite, TestItem};

/// Runs suites under one [`RunConfig`].
///
/// Cases run sequentially, in declaration order. Each selected case is rendered exactly
/// once and produces exactly one report entry, named after the case.
#[derive(Clone, Debug)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    /// Creates a runner for `config`.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// The configuration every run uses.
    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Renders every selected case of `suite` and checks it against the reference store.
    ///
    /// A render error is recorded as [`Outcome::RenderFailed`] for that case and the run
    /// continues. Errors from the store (unwritable directories, undecodable references)
    /// and selections matching no name abort the run.
    pub fn run<F, E>(&self, suite: &Suite, mut render: F) -> Result<Report>
    where
        F: FnMut(&TestItem) -> Result<Image, E>,
        E: Display,
    {
        let selection = self.config.selection();
        let cases = suite.select(selection)?;
        let mode = self.config.mode();
        let store = ReferenceStore::new(self.config.root(), suite.name());

        if cases.is_empty() {
            warn!(
                "suite `{}`: label filter `{}` selected none of {} case(s)",
                suite.name(),
                selection.labels(),
                suite.len()
            );
        }
        info!(
            "suite `{}` [{mode}]: running {} of {} case(s)",
            suite.name(),
            cases.len(),
            suite.len()
        );

        let mut report = Report::new(suite.name(), mode);
        for case in cases {
            debug!("rendering {}", case.item());
            let outcome = match render(case.item()) {
                Ok(image) => store.check(case.name(), &image, case.max_diff_pixels(), mode)?,
                Err(e) => Outcome::RenderFailed {
                    message: e.to_string(),
                },
            };
            if outcome.is_failure() {
                warn!("`{}`: {outcome}", case.name());
            }
            report.push(Entry {
                test_name: case.name().to_string(),
                labels: case.labels().clone(),
                outcome,
            });
        }

        info!("{report}");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use kompari::image::{ImageBuffer, Rgba};

    use super::*;
    use crate::{
        FontScale, Label, LabelFilter, Mode, OutcomeKind, Selection, StringId, SuiteBuilder,
        Theme,
    };

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn suite() -> Suite {
        SuiteBuilder::new("list_item")
            .smoke(TestItem::new(
                "DARK_SMALL",
                Theme::Dark,
                FontScale::Small,
                [StringId::Title],
            ))
            .case(TestItem::new(
                "DARK_HUGE",
                Theme::Dark,
                FontScale::Huge,
                [StringId::Title],
            ))
            .build()
            .unwrap()
    }

    fn render(item: &TestItem) -> Result<Image, String> {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "font scale factors are at most 1.3"
        )]
        let shade = (item.font_scale().factor() * 100.0) as u8;
        Ok(ImageBuffer::from_pixel(6, 3, Rgba([shade, shade, shade, 255])))
    }

    #[test]
    fn every_item_is_rendered_once() {
        init_logger();
        let dir = tempfile::tempdir().unwrap();
        let runner = Runner::new(RunConfig::new(dir.path()).with_mode(Mode::Record));
        let calls = RefCell::new(Vec::new());
        let report = runner
            .run(&suite(), |item| {
                calls.borrow_mut().push(item.test_name().to_string());
                render(item)
            })
            .unwrap();

        assert_eq!(calls.into_inner(), ["DARK_SMALL", "DARK_HUGE"]);
        assert_eq!(report.names().collect::<Vec<_>>(), ["DARK_SMALL", "DARK_HUGE"]);
        assert!(
            report
                .entries()
                .iter()
                .all(|e| e.outcome.kind() == OutcomeKind::Recorded),
            "{report}"
        );

        let verify = Runner::new(RunConfig::new(dir.path()));
        let report = verify.run(&suite(), render).unwrap();
        assert_eq!(report.len(), 2);
        assert!(report.is_success(), "{report}");
        assert_eq!(report.summary(), [(OutcomeKind::Passed, 2)]);
    }

    #[test]
    fn render_errors_do_not_stop_the_run() {
        init_logger();
        let dir = tempfile::tempdir().unwrap();
        let runner = Runner::new(RunConfig::new(dir.path()).with_mode(Mode::Record));
        let report = runner
            .run(&suite(), |item| {
                if item.font_scale() == FontScale::Small {
                    Err("view never laid out".to_string())
                } else {
                    render(item)
                }
            })
            .unwrap();
        assert_eq!(
            report.get("DARK_SMALL").unwrap().outcome,
            Outcome::RenderFailed {
                message: "view never laid out".into()
            }
        );
        assert_eq!(report.get("DARK_HUGE").unwrap().outcome.kind(), OutcomeKind::Recorded);
    }

    #[test]
    fn smoke_filter_runs_only_labeled_cases() {
        init_logger();
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::new(dir.path())
            .with_mode(Mode::Record)
            .with_selection(Selection::default().with_labels(LabelFilter::only(Label::smoke())));
        let report = Runner::new(config).run(&suite(), render).unwrap();
        assert_eq!(report.names().collect::<Vec<_>>(), ["DARK_SMALL"]);
        assert!(!dir.path().join("snapshots/list_item/DARK_HUGE.png").exists());
    }

    #[test]
    fn unmatched_patterns_abort() {
        init_logger();
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::new(dir.path())
            .with_selection(Selection::default().with_patterns(["LIGHT_*"]));
        assert!(Runner::new(config).run(&suite(), render).is_err());
    }
}
