// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use snapmatrix::Theme;

/// Colors a view is drawn with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    /// Behind the item.
    pub background: Color,
    /// The item's card.
    pub surface: Color,
    /// Title text.
    pub primary_text: Color,
    /// Body text.
    pub secondary_text: Color,
    /// Badge fill.
    pub accent: Color,
    /// Badge initial.
    pub on_accent: Color,
    /// Rule under the text.
    pub divider: Color,
}

/// The palette for `theme`.
#[must_use]
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            background: Color::from_rgba8(242, 242, 247, 255),
            surface: Color::from_rgba8(255, 255, 255, 255),
            primary_text: Color::from_rgba8(28, 27, 31, 255),
            secondary_text: Color::from_rgba8(96, 93, 102, 255),
            accent: Color::from_rgba8(103, 80, 164, 255),
            on_accent: Color::from_rgba8(255, 255, 255, 255),
            divider: Color::from_rgba8(202, 196, 208, 255),
        },
        Theme::Dark => Palette {
            background: Color::from_rgba8(16, 16, 20, 255),
            surface: Color::from_rgba8(36, 35, 41, 255),
            primary_text: Color::from_rgba8(230, 225, 229, 255),
            secondary_text: Color::from_rgba8(202, 196, 208, 255),
            accent: Color::from_rgba8(208, 188, 255, 255),
            on_accent: Color::from_rgba8(56, 30, 114, 255),
            divider: Color::from_rgba8(73, 69, 79, 255),
        },
        Theme::HighContrast => Palette {
            background: Color::from_rgba8(0, 0, 0, 255),
            surface: Color::from_rgba8(0, 0, 0, 255),
            primary_text: Color::from_rgba8(255, 255, 255, 255),
            secondary_text: Color::from_rgba8(255, 255, 0, 255),
            accent: Color::from_rgba8(255, 255, 255, 255),
            on_accent: Color::from_rgba8(0, 0, 0, 255),
            divider: Color::from_rgba8(255, 255, 255, 255),
        },
    }
}
