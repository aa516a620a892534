// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use snapmatrix::{Label, Locale, Matrix, Result, Suite, SuiteBuilder, ViewWidth};

use super::LONG_CONTENT;

/// Long content in every locale at the narrowest width, where expansion shows first.
pub fn locales() -> Result<Suite> {
    let items = Matrix::new(LONG_CONTENT)
        .locales(Locale::ALL)
        .widths([ViewWidth::Compact])
        .items();

    let mut builder = SuiteBuilder::new("locales");
    for item in items {
        builder = if item.locale() == Locale::Pseudo {
            builder.labeled(item, [Label::smoke(), Label::new("expansion")])
        } else {
            builder.case(item)
        };
    }
    builder.build()
}
