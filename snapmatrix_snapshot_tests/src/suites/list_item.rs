// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use snapmatrix::{FontScale, Matrix, Result, StringId, Suite, SuiteBuilder, Theme};

/// The list item under every theme and font scale, with a title and subtitle.
///
/// The smallest and largest dark-theme scales are the smoke cases: they bound the
/// layout range on the theme most likely to regress.
pub fn list_item() -> Result<Suite> {
    let items = Matrix::new([StringId::Title, StringId::Subtitle])
        .themes(Theme::ALL)
        .font_scales(FontScale::ALL)
        .items();

    let mut builder = SuiteBuilder::new("list_item");
    for item in items {
        let smoke = matches!(item.test_name(), "DARK_SMALL" | "DARK_HUGE");
        builder = if smoke {
            builder.smoke(item)
        } else {
            builder.case(item)
        };
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_theme_and_scale() {
        let suite = list_item().unwrap();
        assert_eq!(suite.len(), Theme::ALL.len() * FontScale::ALL.len());
        assert!(suite.get("DARK_SMALL").is_some());
        assert!(suite.get("HIGH_CONTRAST_LARGE").is_some());
        assert_eq!(suite.names().next(), Some("LIGHT_SMALL"));
    }
}
