// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test items: the configuration bundle a single snapshot is taken under.
//!
//! Every axis is a closed enum so that the set of configurations a suite can express is
//! known up front, and so that suite data files can name them directly.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Font scaling presets, mirroring the accessibility text-size steps of mobile platforms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FontScale {
    /// 0.85×
    Small,
    /// 1.0×
    #[default]
    Normal,
    /// 1.15×
    Large,
    /// 1.3×
    Huge,
}

impl FontScale {
    /// All presets, smallest first.
    pub const ALL: [Self; 4] = [Self::Small, Self::Normal, Self::Large, Self::Huge];

    /// The multiplier applied to text size.
    #[must_use]
    pub const fn factor(self) -> f32 {
        match self {
            Self::Small => 0.85,
            Self::Normal => 1.0,
            Self::Large => 1.15,
            Self::Huge => 1.3,
        }
    }

    /// Upper-case name used when deriving test names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "SMALL",
            Self::Normal => "NORMAL",
            Self::Large => "LARGE",
            Self::Huge => "HUGE",
        }
    }
}

/// Visual themes the component can be hosted in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
    /// Maximum contrast, no tinted surfaces.
    HighContrast,
}

impl Theme {
    /// All themes.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::HighContrast];

    /// Upper-case name used when deriving test names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "LIGHT",
            Self::Dark => "DARK",
            Self::HighContrast => "HIGH_CONTRAST",
        }
    }
}

/// Locales with string resources.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    /// `en-US`
    #[default]
    EnUs,
    /// `de-DE`
    DeDe,
    /// `es-ES`
    EsEs,
    /// `en-XA`, a pseudo-locale that pads and brackets every string to expose
    /// truncation and layout that cannot absorb longer translations.
    Pseudo,
}

impl Locale {
    /// All locales.
    pub const ALL: [Self; 4] = [Self::EnUs, Self::DeDe, Self::EsEs, Self::Pseudo];

    /// BCP 47 tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::DeDe => "de-DE",
            Self::EsEs => "es-ES",
            Self::Pseudo => "en-XA",
        }
    }

    /// Upper-case name used when deriving test names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "EN_US",
            Self::DeDe => "DE_DE",
            Self::EsEs => "ES_ES",
            Self::Pseudo => "EN_XA",
        }
    }
}

/// Fixed rendering widths a capture is scoped to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ViewWidth {
    /// 320 px
    #[default]
    Compact,
    /// 480 px
    Medium,
    /// 720 px
    Expanded,
}

impl ViewWidth {
    /// All widths, narrowest first.
    pub const ALL: [Self; 3] = [Self::Compact, Self::Medium, Self::Expanded];

    /// Width in pixels.
    #[must_use]
    pub const fn px(self) -> u16 {
        match self {
            Self::Compact => 320,
            Self::Medium => 480,
            Self::Expanded => 720,
        }
    }

    /// Upper-case name used when deriving test names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "COMPACT",
            Self::Medium => "MEDIUM",
            Self::Expanded => "EXPANDED",
        }
    }
}

/// Identifiers of the text resources a view can be populated with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StringId {
    /// Short heading.
    Title,
    /// One-line supporting text.
    Subtitle,
    /// Multi-sentence text that wraps at narrow widths.
    Description,
    /// Call to action.
    Action,
    /// Status line with digits.
    Status,
    /// Placeholder shown when there is nothing to list.
    Empty,
}

/// One snapshot configuration.
///
/// `TestItem`s are immutable once constructed. The name is the key the reference image is
/// stored under, so it must be unique within a suite; [`SuiteBuilder::build`] enforces this.
///
/// [`SuiteBuilder::build`]: crate::SuiteBuilder::build
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TestItem {
    test_name: String,
    theme: Theme,
    font_scale: FontScale,
    locale: Locale,
    width: ViewWidth,
    content: Vec<StringId>,
}

impl TestItem {
    /// Creates an item in the default locale and width.
    #[must_use]
    pub fn new(
        test_name: impl Into<String>,
        theme: Theme,
        font_scale: FontScale,
        content: impl IntoIterator<Item = StringId>,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            theme,
            font_scale,
            locale: Locale::default(),
            width: ViewWidth::default(),
            content: content.into_iter().collect(),
        }
    }

    /// Returns the item with a different locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the item with a different rendering width.
    #[must_use]
    pub fn with_width(mut self, width: ViewWidth) -> Self {
        self.width = width;
        self
    }

    /// The unique name of this item's reference image.
    #[must_use]
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// Color theme the item is rendered in.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Font scale applied to the hosting context.
    #[must_use]
    pub fn font_scale(&self) -> FontScale {
        self.font_scale
    }

    /// Locale text resources are resolved in.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Fixed rendering width.
    #[must_use]
    pub fn width(&self) -> ViewWidth {
        self.width
    }

    /// Text resources, in display order.
    #[must_use]
    pub fn content(&self) -> &[StringId] {
        &self.content
    }
}

impl fmt::Display for TestItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {}, {}px)",
            self.test_name,
            self.theme.as_str(),
            self.font_scale.as_str(),
            self.locale.tag(),
            self.width.px()
        )
    }
}

/// Checks that `name` can be used as a reference image file stem.
pub fn validate_test_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidTestName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_only_touch_their_axis() {
        let item = TestItem::new("X", Theme::Dark, FontScale::Huge, [StringId::Title])
            .with_locale(Locale::DeDe)
            .with_width(ViewWidth::Expanded);
        assert_eq!(item.test_name(), "X");
        assert_eq!(item.theme(), Theme::Dark);
        assert_eq!(item.font_scale(), FontScale::Huge);
        assert_eq!(item.locale(), Locale::DeDe);
        assert_eq!(item.width(), ViewWidth::Expanded);
        assert_eq!(item.content(), &[StringId::Title]);
    }

    #[test]
    fn font_scales_are_ordered_by_factor() {
        let factors: Vec<f32> = FontScale::ALL.iter().map(|s| s.factor()).collect();
        assert!(
            factors.windows(2).all(|w| w[0] < w[1]),
            "factors not increasing: {factors:?}"
        );
    }

    #[test]
    fn test_names_must_be_file_stems() {
        assert!(validate_test_name("DARK_SMALL").is_ok());
        assert!(validate_test_name("list-item.v2").is_ok());
        for bad in ["", ".hidden", "a/b", "a\\b", "with space", "ümlaut"] {
            assert!(
                matches!(validate_test_name(bad), Err(Error::InvalidTestName(_))),
                "`{bad}` should be rejected"
            );
        }
    }

    #[test]
    fn display_names_every_axis() {
        let item = TestItem::new("DARK_HUGE", Theme::Dark, FontScale::Huge, Vec::<StringId>::new());
        assert_eq!(item.to_string(), "DARK_HUGE (DARK, HUGE, en-US, 320px)");
    }
}
