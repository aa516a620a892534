// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=snapmatrix --heading-base-level=0

//! Snapmatrix: parameterized image snapshot tests.
//!
//! A snapshot test renders a UI component and compares the capture against a stored
//! reference ("golden") image. This crate holds the parts of that convention which are
//! worth sharing between suites; capture, pixel comparison and PNG I/O are delegated to
//! the component's renderer and to [`kompari`].
//!
//! ## Core Concepts
//!
//! - [`TestItem`]: an immutable bundle of configuration (theme, font scale, locale, view
//!   width, content) plus the unique name its reference image is stored under.
//! - [`Suite`]: an ordered, validated collection of cases sharing one reference-image
//!   namespace. Duplicate names are rejected when the suite is built.
//! - [`Label`] / [`LabelFilter`]: string tags attached to cases at registration time, and
//!   the include/exclude predicate that selects a subset of them (e.g. `smoke`).
//! - [`Runner`]: invokes a render function once per selected case and checks each capture
//!   against the [`ReferenceStore`], producing a [`Report`].
//!
//! ```rust
//! use snapmatrix::{
//!     FontScale, Label, LabelFilter, Selection, StringId, SuiteBuilder, TestItem, Theme,
//! };
//!
//! let suite = SuiteBuilder::new("list_item")
//!     .smoke(TestItem::new("DARK_SMALL", Theme::Dark, FontScale::Small, [StringId::Title]))
//!     .case(TestItem::new("DARK_HUGE", Theme::Dark, FontScale::Huge, [StringId::Title]))
//!     .build()
//!     .unwrap();
//!
//! let smoke = Selection::default().with_labels(LabelFilter::only(Label::smoke()));
//! let names: Vec<_> = suite.select(&smoke).unwrap().iter().map(|c| c.name()).collect();
//! assert_eq!(names, ["DARK_SMALL"]);
//! ```
//!
//! ## Modes
//!
//! The run mode comes from `SNAPMATRIX_TEST` (see [`RunConfig::from_env`]):
//!
//! - unset / `verify`: compare against the stored references; a missing reference is its
//!   own failure kind, distinct from a pixel mismatch.
//! - `record` (also `accept`, `bless`): write every capture as the new reference.
//! - `generate-all`: verify, and also write every capture to the `current` directory so
//!   that a report can be produced.
//!
//! `SNAPMATRIX_CASE` restricts a run by name (supports `*` globs) and `SNAPMATRIX_LABELS`
//! by label (`smoke`, `!smoke`).

pub mod config;
mod error;
pub mod file;
pub mod item;
pub mod labels;
pub mod matrix;
pub mod report;
pub mod runner;
pub mod select;
pub mod store;
pub mod suite;

pub use config::{Mode, RunConfig};
pub use error::{Error, Result};
pub use item::{FontScale, Locale, StringId, TestItem, Theme, ViewWidth};
pub use labels::{Label, LabelFilter, Policy};
pub use matrix::Matrix;
pub use report::{Entry, Outcome, OutcomeKind, Report};
pub use runner::Runner;
pub use select::Selection;
pub use store::ReferenceStore;
pub use suite::{Case, Suite, SuiteBuilder};

/// Re-exported so that render functions can build captures without naming `kompari`.
pub use kompari::Image;
