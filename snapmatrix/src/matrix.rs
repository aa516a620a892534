// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cartesian expansion of configuration axes into named test items.

use crate::{FontScale, Locale, StringId, TestItem, Theme, ViewWidth};

/// Expands configuration axes into [`TestItem`]s.
///
/// Items are produced theme-major, then font scale, locale, width and content, each axis
/// in the order given. Names join the upper-case values of every axis that has more than
/// one value, so a theme × font scale matrix yields `DARK_SMALL`, `DARK_HUGE`, … and
/// adding a second width appends `_COMPACT` / `_EXPANDED`. When every axis has a single
/// value the name is the theme's.
///
/// ```rust
/// use snapmatrix::{FontScale, Matrix, StringId, Theme};
///
/// let items = Matrix::new([StringId::Title])
///     .themes([Theme::Dark])
///     .font_scales([FontScale::Small, FontScale::Huge])
///     .items();
/// let names: Vec<_> = items.iter().map(|i| i.test_name()).collect();
/// assert_eq!(names, ["DARK_SMALL", "DARK_HUGE"]);
/// ```
#[derive(Clone, Debug)]
pub struct Matrix {
    themes: Vec<Theme>,
    font_scales: Vec<FontScale>,
    locales: Vec<Locale>,
    widths: Vec<ViewWidth>,
    contents: Vec<(String, Vec<StringId>)>,
}

impl Matrix {
    /// A single-configuration matrix showing `content` with every axis at its default.
    #[must_use]
    pub fn new(content: impl IntoIterator<Item = StringId>) -> Self {
        Self {
            themes: vec![Theme::default()],
            font_scales: vec![FontScale::default()],
            locales: vec![Locale::default()],
            widths: vec![ViewWidth::default()],
            contents: vec![("CONTENT".to_string(), content.into_iter().collect())],
        }
    }

    /// Sets the theme axis. An empty iterator means the default theme.
    #[must_use]
    pub fn themes(mut self, themes: impl IntoIterator<Item = Theme>) -> Self {
        self.themes = non_empty(themes, Theme::default());
        self
    }

    /// Sets the font scale axis.
    #[must_use]
    pub fn font_scales(mut self, scales: impl IntoIterator<Item = FontScale>) -> Self {
        self.font_scales = non_empty(scales, FontScale::default());
        self
    }

    /// Sets the locale axis.
    #[must_use]
    pub fn locales(mut self, locales: impl IntoIterator<Item = Locale>) -> Self {
        self.locales = non_empty(locales, Locale::default());
        self
    }

    /// Sets the view width axis.
    #[must_use]
    pub fn widths(mut self, widths: impl IntoIterator<Item = ViewWidth>) -> Self {
        self.widths = non_empty(widths, ViewWidth::default());
        self
    }

    /// Replaces the content axis with named content variants.
    ///
    /// Variant names become part of test names, upper-cased. An empty iterator leaves the
    /// content axis unchanged.
    #[must_use]
    pub fn contents<N, C>(mut self, variants: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<String>,
        C: IntoIterator<Item = StringId>,
    {
        let variants: Vec<(String, Vec<StringId>)> = variants
            .into_iter()
            .map(|(name, content)| {
                (
                    name.into().to_ascii_uppercase(),
                    content.into_iter().collect(),
                )
            })
            .collect();
        if !variants.is_empty() {
            self.contents = variants;
        }
        self
    }

    /// Number of items [`items`](Self::items) will produce.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
            * self.font_scales.len()
            * self.locales.len()
            * self.widths.len()
            * self.contents.len()
    }

    /// Always `false`: every axis has at least one value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expands the matrix.
    #[must_use]
    pub fn items(&self) -> Vec<TestItem> {
        let mut items = Vec::with_capacity(self.len());
        for &theme in &self.themes {
            for &scale in &self.font_scales {
                for &locale in &self.locales {
                    for &width in &self.widths {
                        for (variant, content) in &self.contents {
                            let mut parts: Vec<&str> = Vec::new();
                            if self.themes.len() > 1 {
                                parts.push(theme.as_str());
                            }
                            if self.font_scales.len() > 1 {
                                parts.push(scale.as_str());
                            }
                            if self.locales.len() > 1 {
                                parts.push(locale.as_str());
                            }
                            if self.widths.len() > 1 {
                                parts.push(width.as_str());
                            }
                            if self.contents.len() > 1 {
                                parts.push(variant);
                            }
                            if parts.is_empty() {
                                parts.push(theme.as_str());
                            }
                            items.push(
                                TestItem::new(parts.join("_"), theme, scale, content.clone())
                                    .with_locale(locale)
                                    .with_width(width),
                            );
                        }
                    }
                }
            }
        }
        items
    }
}

fn non_empty<T: Copy>(values: impl IntoIterator<Item = T>, fallback: T) -> Vec<T> {
    let values: Vec<T> = values.into_iter().collect();
    if values.is_empty() {
        vec![fallback]
    } else {
        values
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn theme_by_scale_names() {
        let items = Matrix::new([StringId::Title, StringId::Subtitle])
            .themes([Theme::Light, Theme::Dark])
            .font_scales([FontScale::Small, FontScale::Huge])
            .items();
        let names: Vec<_> = items.iter().map(TestItem::test_name).collect();
        assert_eq!(names, ["LIGHT_SMALL", "LIGHT_HUGE", "DARK_SMALL", "DARK_HUGE"]);
        assert!(
            items
                .iter()
                .all(|i| i.content() == [StringId::Title, StringId::Subtitle]),
            "content is shared by every item"
        );
    }

    #[test]
    fn single_configuration_uses_theme_name() {
        let items = Matrix::new([StringId::Title]).themes([Theme::Dark]).items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].test_name(), "DARK");
    }

    #[test]
    fn every_axis_contributes_and_names_stay_unique() {
        let matrix = Matrix::new(Vec::<StringId>::new())
            .themes(Theme::ALL)
            .font_scales(FontScale::ALL)
            .locales([Locale::EnUs, Locale::Pseudo])
            .widths([ViewWidth::Compact, ViewWidth::Expanded])
            .contents([("short", vec![StringId::Title]), ("long", vec![StringId::Description])]);
        let items = matrix.items();
        assert_eq!(items.len(), matrix.len());
        assert_eq!(items.len(), 3 * 4 * 2 * 2 * 2);
        let names: HashSet<_> = items.iter().map(TestItem::test_name).collect();
        assert_eq!(names.len(), items.len());
        assert_eq!(items[0].test_name(), "LIGHT_SMALL_EN_US_COMPACT_SHORT");
        assert_eq!(items[1].content(), [StringId::Description]);
    }

    #[test]
    fn empty_axes_fall_back_to_defaults() {
        let matrix = Matrix::new([StringId::Title])
            .themes(Vec::<Theme>::new())
            .font_scales(Vec::<FontScale>::new());
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.items()[0].theme(), Theme::Light);
    }
}
