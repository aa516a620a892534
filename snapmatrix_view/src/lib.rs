// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=snapmatrix_view --heading-base-level=0

//! Snapmatrix View: the component under test.
//!
//! A deliberately small list-item view: a tinted surface, an accent badge showing the
//! title's initial, a title line and wrapped body lines. It exists so that snapshot suites
//! have something real to render across themes, font scales, locales and widths.
//!
//! Text uses a built-in 5×7 bitmap font (drawn in capitals) instead of system fonts, so
//! captures depend only on the renderer.
//!
//! ```rust
//! use snapmatrix::{FontScale, Locale, StringId, Theme, ViewWidth};
//! use snapmatrix_view::{HostContext, ListItemView};
//!
//! let ctx = HostContext::new(Theme::Dark, FontScale::Huge, Locale::EnUs, ViewWidth::Compact);
//! let mut view = ListItemView::inflate(ctx, &[StringId::Title, StringId::Subtitle]);
//! let height = view.settle(ListItemView::DEFAULT_LAYOUT_PASSES).unwrap().height;
//! let bitmap = view.capture().unwrap();
//! assert_eq!(bitmap.width(), 320);
//! assert_eq!(bitmap.height(), height);
//! ```

mod font;
mod layout;
mod palette;
pub mod strings;
mod view;

use snapmatrix::{FontScale, Locale, Theme, ViewWidth};

pub use font::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph, text_width};
pub use layout::{Layout, TextBlock};
pub use palette::{Palette, palette};
pub use view::{Bitmap, ListItemView};

/// The configuration a view is inflated in: the analogue of a themed hosting context with
/// a font-scale override applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HostContext {
    /// Selects the [`Palette`].
    pub theme: Theme,
    /// Multiplies every text size.
    pub font_scale: FontScale,
    /// Language strings are resolved in.
    pub locale: Locale,
    /// Fixed view width.
    pub width: ViewWidth,
}

impl HostContext {
    /// Creates a context from its four axes.
    #[must_use]
    pub fn new(theme: Theme, font_scale: FontScale, locale: Locale, width: ViewWidth) -> Self {
        Self {
            theme,
            font_scale,
            locale,
            width,
        }
    }
}

impl Default for HostContext {
    fn default() -> Self {
        Self::new(
            Theme::default(),
            FontScale::default(),
            Locale::default(),
            ViewWidth::default(),
        )
    }
}

/// Reasons a view cannot be captured.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// Consecutive layout passes kept disagreeing.
    #[error("layout did not settle within {passes} pass(es)")]
    LayoutUnstable {
        /// The pass budget that was exhausted.
        passes: usize,
    },
    /// `capture` was called before `settle`.
    #[error("view captured before layout settled")]
    NotLaidOut,
    /// The content does not fit in a renderable surface.
    #[error("view height {height}px exceeds the renderable maximum")]
    TooTall {
        /// The measured height.
        height: u32,
    },
}
