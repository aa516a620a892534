// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=snapmatrix_snapshot_tests --heading-base-level=0

//! Development-only snapshot suites for the `snapmatrix_view` list item.
//!
//! This crate declares the suites and the helper that renders a [`TestItem`] into a
//! Kompari image. Reference images live in `tests/snapshots/<suite>/<test_name>.png`.
//!
//! ## Suites
//!
//! - `list_item`: theme × font scale (`DARK_SMALL`, `DARK_HUGE`, …)
//! - `locales`: every locale at the compact width with long content
//! - `dimensions`: every view width with long content
//! - `content`: title only, title and subtitle, everything
//! - `smoke`: declared in `suites/smoke.ron`
//!
//! ## Run tests
//!
//! The tests that compare against the checked-in references (`checked_in_*`) are
//! `#[ignore]`d, so a plain `cargo test` only runs the record-then-verify tests in a
//! temporary directory. CI must pass `--include-ignored`, as `xtask` does:
//!
//! - All suites: `cargo test -p snapmatrix_snapshot_tests --test snapshots -- --include-ignored`
//!
//! Equivalent `xtask` wrapper:
//! - All suites: `cargo xtask snapshots test`
//! - One suite: `cargo xtask snapshots --suite list_item test`
//!
//! ## Record / regenerate
//!
//! Record current output as the reference images:
//! - `cargo xtask snapshots test --record`
//! - `cargo xtask snapshots --suite locales test --record`
//!
//! Generate `tests/current/<suite>/*.png` for review:
//! - `cargo xtask snapshots test --generate-all`
//!
//! ## Filter cases
//!
//! By name, with `SNAPMATRIX_CASE` (supports `*` globs), exposed by `xtask` as `--case`:
//!
//! - Single case: `cargo xtask snapshots test --case DARK_HUGE`
//! - Prefix: `cargo xtask snapshots test --case 'DARK_*'`
//! - Multiple patterns (comma/whitespace-separated): `cargo xtask snapshots test --case 'DARK_*,LIGHT_*'`
//!
//! By label, with `SNAPMATRIX_LABELS`, exposed as `--smoke`, `--full`, `--label` and
//! `--not-label`:
//!
//! - Smoke cases only: `cargo xtask snapshots test --smoke`
//! - Everything else: `cargo xtask snapshots test --not-label smoke`
//!
//! ## Review diffs with `xtask`
//!
//! `xtask` runs the snapshot tests and produces a Kompari HTML report:
//! - `cargo xtask report`
//! - `cargo xtask snapshots --suite locales report`
//!
//! [`TestItem`]: snapmatrix::TestItem

#![allow(
    missing_docs,
    reason = "development-only crate; suites are self-documenting via test names"
)]

pub mod helper;
pub mod suites;
