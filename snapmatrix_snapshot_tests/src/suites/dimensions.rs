// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use snapmatrix::{Matrix, Result, Suite, SuiteBuilder, ViewWidth};

use super::LONG_CONTENT;

/// Long content at every view width.
pub fn dimensions() -> Result<Suite> {
    let items = Matrix::new(LONG_CONTENT).widths(ViewWidth::ALL).items();

    let mut builder = SuiteBuilder::new("dimensions");
    for item in items {
        builder = match item.width() {
            ViewWidth::Compact => builder.smoke(item),
            _ => builder.case(item),
        };
    }
    builder.build()
}
