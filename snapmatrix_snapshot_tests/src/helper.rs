// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering a [`TestItem`] and running suites against the checked-in references.

use std::path::{Path, PathBuf};

use kompari::Image;
use kompari::image::ImageBuffer;
use snapmatrix::{Report, RunConfig, Runner, Suite, TestItem};
use snapmatrix_view::{HostContext, ListItemView, ViewError};

/// Why a [`TestItem`] could not be turned into an image.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error(transparent)]
    View(#[from] ViewError),
    #[error("capture of {width}x{height} has {len} bytes")]
    Buffer { width: u32, height: u32, len: usize },
}

/// Inflates, settles and captures the view for `item`.
///
/// Every configuration axis of the item reaches the view through its [`HostContext`], so
/// two items differing only in, say, font scale produce different captures.
pub fn snapshot(item: &TestItem) -> Result<Image, SnapshotError> {
    let ctx = HostContext::new(item.theme(), item.font_scale(), item.locale(), item.width());
    let mut view = ListItemView::inflate(ctx, item.content());
    view.settle(ListItemView::DEFAULT_LAYOUT_PASSES)?;
    let bitmap = view.capture()?;
    let (width, height) = (bitmap.width(), bitmap.height());
    log::debug!("{}: {width}x{height}", item.test_name());
    let len = bitmap.data().len();
    ImageBuffer::from_raw(width, height, bitmap.into_data()).ok_or(SnapshotError::Buffer {
        width,
        height,
        len,
    })
}

/// The directory holding `snapshots/`, `current/` and `diffs/`.
#[must_use]
pub fn tests_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

/// Runs `suite` under the environment's [`RunConfig`], storing images under `root`.
pub fn run_suite(suite: &Suite, root: impl Into<PathBuf>) -> snapmatrix::Result<Report> {
    let config = RunConfig::from_env(root)?;
    run_suite_with(suite, config)
}

/// Runs `suite` under an explicit configuration.
pub fn run_suite_with(suite: &Suite, config: RunConfig) -> snapmatrix::Result<Report> {
    Runner::new(config).run(suite, snapshot)
}

#[cfg(test)]
mod tests {
    use snapmatrix::{FontScale, StringId, Theme};

    use super::*;

    #[test]
    fn snapshot_matches_view_width() {
        let item = TestItem::new("DARK_HUGE", Theme::Dark, FontScale::Huge, [StringId::Title]);
        let image = snapshot(&item).unwrap();
        assert_eq!(image.width(), 320);
        assert!(image.height() > 0);
    }

    #[test]
    fn font_scale_reaches_the_view() {
        let content = [StringId::Title, StringId::Description];
        let small = snapshot(&TestItem::new("S", Theme::Dark, FontScale::Small, content)).unwrap();
        let huge = snapshot(&TestItem::new("H", Theme::Dark, FontScale::Huge, content)).unwrap();
        assert!(
            huge.height() > small.height(),
            "{} <= {}",
            huge.height(),
            small.height()
        );
    }
}
