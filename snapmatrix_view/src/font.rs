// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 5×7 bitmap font.
//!
//! Each glyph is seven rows; bit 4 of a row is the leftmost column. Letters are drawn in
//! capitals. Characters without a glyph draw as a hollow box so that missing coverage is
//! visible in snapshots rather than silently dropped.

/// Glyph width in dots.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in dots.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance in dots, including one dot of spacing.
pub(crate) const ADVANCE: u32 = GLYPH_WIDTH + 1;
/// Line height in dots, including two dots of leading.
pub(crate) const LINE_HEIGHT: u32 = GLYPH_HEIGHT + 2;

type Glyph = [u8; 7];

const MISSING: Glyph = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

const LETTERS: [Glyph; 26] = [
    [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

const DIGITS: [Glyph; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

fn punctuation(c: char) -> Option<Glyph> {
    Some(match c {
        ' ' => [0; 7],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '\'' => [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '"' => [0x0A, 0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        '[' => [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E],
        ']' => [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        '&' => [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D],
        '%' => [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        _ => return None,
    })
}

/// Returns the rows of the glyph drawn for `c`, or `None` if `c` falls back to the
/// missing-glyph box.
#[must_use]
pub fn glyph(c: char) -> Option<[u8; 7]> {
    let c = c.to_ascii_uppercase();
    match c {
        'A'..='Z' => Some(LETTERS[(u32::from(c) - u32::from('A')) as usize]),
        '0'..='9' => Some(DIGITS[(u32::from(c) - u32::from('0')) as usize]),
        _ => punctuation(c),
    }
}

/// The rows actually drawn for `c`.
pub(crate) fn rows(c: char) -> [u8; 7] {
    glyph(c).unwrap_or(MISSING)
}

/// Width in pixels of `text` set at `dot` pixels per font dot, without trailing spacing.
#[must_use]
pub fn text_width(text: &str, dot: f64) -> f64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "view text is far shorter than u32::MAX characters"
    )]
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0.0;
    }
    f64::from(n * ADVANCE - 1) * dot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_rows_fit_five_columns() {
        let all = LETTERS.iter().chain(DIGITS.iter());
        for g in all {
            assert!(g.iter().all(|row| *row < 0x20), "row wider than 5 dots: {g:?}");
            assert!(g.iter().any(|row| *row != 0), "blank glyph: {g:?}");
        }
    }

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), Some(LETTERS[25]));
        assert_eq!(glyph('7'), Some(DIGITS[7]));
    }

    #[test]
    fn unknown_chars_draw_a_box() {
        assert_eq!(glyph('~'), None);
        assert_eq!(glyph('ü'), None);
        assert_eq!(rows('ü'), MISSING);
        assert_eq!(rows(' '), [0; 7]);
    }

    #[test]
    fn glyphs_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for c in ('A'..='Z').chain('0'..='9') {
            assert!(seen.insert(rows(c)), "duplicate glyph for {c}");
        }
    }

    #[test]
    fn widths() {
        assert_eq!(text_width("", 2.0), 0.0);
        assert_eq!(text_width("A", 2.0), 10.0);
        assert_eq!(text_width("AB", 1.0), 11.0);
    }
}
