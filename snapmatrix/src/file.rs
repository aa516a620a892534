// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suites declared in RON data files.
//!
//! ```ron
//! (
//!     name: "smoke",
//!     cases: [
//!         (name: "DARK_SMALL", theme: Dark, font_scale: Small, content: [Title, Subtitle], labels: ["smoke"]),
//!         (name: "DARK_HUGE_DE", theme: Dark, font_scale: Huge, locale: DeDe, content: [Title]),
//!         (name: "WIDE", width: Expanded, content: [Description], max_diff_pixels: 4),
//!     ],
//! )
//! ```
//!
//! Omitted axes take their defaults. Files go through [`SuiteBuilder`], so they are
//! validated exactly like suites declared in code.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    Error, FontScale, Label, Locale, Result, StringId, Suite, SuiteBuilder, TestItem, Theme,
    ViewWidth,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SuiteFile {
    name: String,
    cases: Vec<CaseEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseEntry {
    name: String,
    #[serde(default)]
    theme: Theme,
    #[serde(default)]
    font_scale: FontScale,
    #[serde(default)]
    locale: Locale,
    #[serde(default)]
    width: ViewWidth,
    content: Vec<StringId>,
    #[serde(default)]
    labels: Vec<Label>,
    #[serde(default)]
    max_diff_pixels: u64,
}

/// Parses a suite from RON source.
pub fn parse_suite(source: &str) -> Result<Suite> {
    parse_at(source, PathBuf::from("<inline>"))
}

/// Reads and parses a suite file.
pub fn load_suite(path: impl AsRef<Path>) -> Result<Suite> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_at(&source, path.to_path_buf())
}

fn parse_at(source: &str, path: PathBuf) -> Result<Suite> {
    let file: SuiteFile =
        ron::from_str(source).map_err(|source| Error::SuiteFile { path, source })?;

    let mut builder = SuiteBuilder::new(file.name);
    for entry in file.cases {
        let item = TestItem::new(entry.name, entry.theme, entry.font_scale, entry.content)
            .with_locale(entry.locale)
            .with_width(entry.width);
        let name = item.test_name().to_string();
        builder = builder.labeled(item, entry.labels);
        if entry.max_diff_pixels > 0 {
            builder = builder.tolerance(name, entry.max_diff_pixels);
        }
    }
    builder.build()
}
