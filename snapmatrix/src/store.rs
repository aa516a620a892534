// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The on-disk reference image store.
//!
//! Layout under the store root, for suite `<suite>` and case `<name>`:
//!
//! - `snapshots/<suite>/<name>.png`: the reference. Written only in record mode.
//! - `current/<suite>/<name>.png`: the latest capture, written when verification fails
//!   and, in generate-all mode, for every case.
//! - `diffs/<suite>/<name>.png`: differing pixels in red over the dimmed reference.
//!
//! The `snapshots`/`current` pair is what `kompari` diffs when producing a report.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use kompari::image::{ImageBuffer, Rgba};
use kompari::{Image, ImageDifference, SizeOptimizationLevel, compare_images, image_to_png};
use log::{debug, warn};

use crate::{Error, Mode, Outcome, Result};

/// Reference images of one suite.
#[derive(Clone, Debug)]
pub struct ReferenceStore {
    snapshots: PathBuf,
    current: PathBuf,
    diffs: PathBuf,
}

impl ReferenceStore {
    /// Opens the store for `suite` under `root`. Nothing is created until an image is
    /// written.
    #[must_use]
    pub fn new(root: &Path, suite: &str) -> Self {
        Self {
            snapshots: root.join("snapshots").join(suite),
            current: root.join("current").join(suite),
            diffs: root.join("diffs").join(suite),
        }
    }

    /// Where the reference image for `name` lives.
    #[must_use]
    pub fn reference_path(&self, name: &str) -> PathBuf {
        self.snapshots.join(format!("{name}.png"))
    }

    /// Where the latest capture of `name` is written for review.
    #[must_use]
    pub fn current_path(&self, name: &str) -> PathBuf {
        self.current.join(format!("{name}.png"))
    }

    /// Where the diff image for `name` is written.
    #[must_use]
    pub fn diff_path(&self, name: &str) -> PathBuf {
        self.diffs.join(format!("{name}.png"))
    }

    /// Loads a reference image, or `None` if it does not exist.
    pub fn load_reference(&self, name: &str) -> Result<Option<Image>> {
        let path = self.reference_path(name);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::io(path, e)),
        };
        let image = kompari::image::load_from_memory(&bytes)
            .map_err(|source| Error::DecodeReference {
                path: path.clone(),
                source,
            })?
            .into_rgba8();
        Ok(Some(image))
    }

    /// Records `image` as the reference for `name`, or checks it against the existing one.
    ///
    /// Verification never modifies the reference. A missing reference is reported as
    /// [`Outcome::MissingBaseline`], never as a mismatch.
    pub fn check(
        &self,
        name: &str,
        image: &Image,
        max_diff_pixels: u64,
        mode: Mode,
    ) -> Result<Outcome> {
        if mode == Mode::Record {
            let reference = self.reference_path(name);
            write_png(&reference, image, SizeOptimizationLevel::High)?;
            debug!("recorded `{}`", reference.display());
            return Ok(Outcome::Recorded { reference });
        }

        let Some(expected) = self.load_reference(name)? else {
            let current = self.write_current(name, image)?;
            return Ok(Outcome::MissingBaseline {
                expected: self.reference_path(name),
                current,
            });
        };

        let (detail, different_pixels) = match compare_images(&expected, image) {
            ImageDifference::None => return self.passed(name, image, mode),
            ImageDifference::Content {
                n_different_pixels, ..
            } if n_different_pixels <= max_diff_pixels => {
                debug!("`{name}`: {n_different_pixels} pixel(s) differ, within tolerance");
                return self.passed(name, image, mode);
            }
            ImageDifference::Content {
                n_different_pixels, ..
            } => (
                format!("{n_different_pixels} pixel(s) differ (tolerance {max_diff_pixels})"),
                Some(n_different_pixels),
            ),
            other => (format!("{other:?}"), None),
        };

        let current = self.write_current(name, image)?;
        let diff = match diff_image(&expected, image) {
            Some(diff) => {
                let path = self.diff_path(name);
                write_png(&path, &diff, SizeOptimizationLevel::Fast)?;
                Some(path)
            }
            None => None,
        };
        Ok(Outcome::Mismatch {
            detail,
            different_pixels,
            current,
            diff,
        })
    }

    fn passed(&self, name: &str, image: &Image, mode: Mode) -> Result<Outcome> {
        if mode == Mode::GenerateAll {
            self.write_current(name, image)?;
        }
        let stale = self.diff_path(name);
        match fs::remove_file(&stale) {
            Ok(()) => debug!("removed stale diff `{}`", stale.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("could not remove stale diff `{}`: {e}", stale.display()),
        }
        Ok(Outcome::Passed)
    }

    fn write_current(&self, name: &str, image: &Image) -> Result<PathBuf> {
        let path = self.current_path(name);
        write_png(&path, image, SizeOptimizationLevel::Fast)?;
        Ok(path)
    }
}

fn write_png(path: &Path, image: &Image, level: SizeOptimizationLevel) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    fs::write(path, image_to_png(image, level)).map_err(|e| Error::io(path, e))
}

/// Paints differing pixels red over a dimmed copy of `expected`.
///
/// Returns `None` when the sizes differ, since there is no pixel correspondence.
fn diff_image(expected: &Image, actual: &Image) -> Option<Image> {
    if expected.dimensions() != actual.dimensions() {
        return None;
    }
    let (width, height) = expected.dimensions();
    let diff: Image = ImageBuffer::from_fn(width, height, |x, y| {
        let e = expected.get_pixel(x, y);
        if e == actual.get_pixel(x, y) {
            let [r, g, b, _] = e.0;
            let luma = (u16::from(r) * 3 + u16::from(g) * 6 + u16::from(b)) / 10;
            #[expect(
                clippy::cast_possible_truncation,
                reason = "luma is at most 255, so a quarter of it fits in a u8"
            )]
            let dimmed = 192 + (luma / 4) as u8;
            Rgba([dimmed, dimmed, dimmed, 255])
        } else {
            Rgba([255, 0, 0, 255])
        }
    });
    Some(diff)
}
