// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use snapmatrix::{Matrix, Result, StringId, Suite, SuiteBuilder, Theme};

/// How the item grows with its content, in both main themes.
pub fn content() -> Result<Suite> {
    let items = Matrix::new([StringId::Title])
        .themes([Theme::Light, Theme::Dark])
        .contents([
            ("title", vec![StringId::Title]),
            ("subtitle", vec![StringId::Title, StringId::Subtitle]),
            (
                "full",
                vec![
                    StringId::Title,
                    StringId::Subtitle,
                    StringId::Description,
                    StringId::Action,
                    StringId::Status,
                ],
            ),
            ("empty", vec![StringId::Empty]),
        ])
        .items();

    let mut builder = SuiteBuilder::new("content");
    for item in items {
        builder = if item.test_name() == "LIGHT_FULL" {
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
    fn variants_are_named_after_content() {
        let suite = content().unwrap();
        assert_eq!(suite.len(), 8);
        assert_eq!(suite.get("DARK_FULL").unwrap().item().content().len(), 5);
        assert_eq!(
            suite.get("LIGHT_TITLE").unwrap().item().content(),
            [StringId::Title]
        );
    }
}
