// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement and placement for [`ListItemView`](crate::ListItemView).

use crate::font::{ADVANCE, GLYPH_HEIGHT, LINE_HEIGHT, text_width};

pub(crate) const PADDING: f64 = 16.0;
pub(crate) const BADGE_DIAMETER: f64 = 40.0;
const BLOCK_GAP: f64 = 6.0;
/// Pixels per font dot at 1.0× for the title and for body text.
const TITLE_DOT: f64 = 3.0;
const BODY_DOT: f64 = 2.0;

/// One run of wrapped text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    /// Wrapped lines, top to bottom.
    pub lines: Vec<String>,
    /// Left edge.
    pub x: f64,
    /// Top edge of the first line.
    pub y: f64,
    /// Pixels per font dot.
    pub dot: f64,
    /// Whether this is the title block.
    pub title: bool,
}

impl TextBlock {
    /// Height in pixels, excluding the leading under the last line.
    #[must_use]
    pub fn height(&self) -> f64 {
        match self.lines.len() {
            0 => 0.0,
            n => (f64::from(LINE_HEIGHT) * (n as f64 - 1.0) + f64::from(GLYPH_HEIGHT)) * self.dot,
        }
    }
}

/// A measured and placed view.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// View width in pixels.
    pub width: u32,
    /// Measured height in pixels.
    pub height: u32,
    /// Placed text, title first.
    pub blocks: Vec<TextBlock>,
}

impl Layout {
    /// Lays out `texts` (title first) in a view `width` pixels wide.
    pub(crate) fn measure(width: u32, font_scale: f32, texts: &[String]) -> Self {
        let scale = f64::from(font_scale);
        let text_left = PADDING * 2.0 + BADGE_DIAMETER;
        let available = (f64::from(width) - text_left - PADDING).max(0.0);

        let mut y = PADDING;
        let mut blocks = Vec::with_capacity(texts.len());
        for (i, text) in texts.iter().enumerate() {
            let title = i == 0;
            let dot = (if title { TITLE_DOT } else { BODY_DOT }) * scale;
            let lines = wrap(text, available, dot);
            let block = TextBlock {
                lines,
                x: text_left,
                y,
                dot,
                title,
            };
            y += block.height() + BLOCK_GAP;
            blocks.push(block);
        }
        if !blocks.is_empty() {
            y -= BLOCK_GAP;
        }

        let content_bottom = y.max(PADDING + BADGE_DIAMETER);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "height is positive and checked against u16 before rendering"
        )]
        let height = (content_bottom + PADDING).ceil() as u32;
        Self {
            width,
            height,
            blocks,
        }
    }
}

/// Greedy word wrap. Words wider than `available` are broken between characters.
pub(crate) fn wrap(text: &str, available: f64, dot: f64) -> Vec<String> {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a line holds a few hundred glyphs at most"
    )]
    let per_line = if dot > 0.0 {
        // Advance includes a trailing spacing dot that the last glyph does not need.
        (((available / dot) + 1.0) / f64::from(ADVANCE)).floor().max(1.0) as usize
    } else {
        usize::MAX
    };

    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let line_len = line.chars().count();
            let word_len = word.chars().count();
            let needed = if line.is_empty() {
                word_len
            } else {
                line_len + 1 + word_len
            };
            if needed <= per_line {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                break;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                continue;
            }
            // An empty line still cannot hold the word: break it.
            let split = word
                .char_indices()
                .nth(per_line)
                .map_or(word.len(), |(idx, _)| idx);
            lines.push(word[..split].to_string());
            word = &word[split..];
            if word.is_empty() {
                break;
            }
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    debug_assert!(
        lines.iter().all(|l| text_width(l, dot) <= available.max(text_width("W", dot))),
        "wrapped line exceeds available width"
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_fits_words_greedily() {
        // 6 dots per char at dot=1.0; 35px holds 6 chars.
        let lines = wrap("aa bb cc dd", 35.0, 1.0);
        assert_eq!(lines, ["aa bb", "cc dd"]);
    }

    #[test]
    fn wrap_breaks_long_words() {
        let lines = wrap("abcdefghij", 17.0, 1.0);
        assert_eq!(lines, ["abc", "def", "ghi", "j"]);
    }

    #[test]
    fn wrap_collapses_whitespace() {
        assert_eq!(wrap("  a \n b  ", 1000.0, 1.0), ["a b"]);
        assert!(wrap("   ", 1000.0, 1.0).is_empty());
    }

    #[test]
    fn larger_font_scale_is_taller() {
        let texts = vec![
            "Notifications".to_string(),
            "Alerts, sounds and badges".to_string(),
        ];
        let small = Layout::measure(320, 0.85, &texts);
        let huge = Layout::measure(320, 1.3, &texts);
        assert!(huge.height > small.height, "{} <= {}", huge.height, small.height);
        assert!(huge.blocks[1].lines.len() >= small.blocks[1].lines.len());
    }

    #[test]
    fn narrow_views_wrap_more() {
        let texts = vec![
            "Title".to_string(),
            "Choose which apps can send you alerts. Quiet hours silence everything.".to_string(),
        ];
        let compact = Layout::measure(320, 1.0, &texts);
        let expanded = Layout::measure(720, 1.0, &texts);
        assert!(compact.blocks[1].lines.len() > expanded.blocks[1].lines.len());
        assert!(compact.height > expanded.height);
    }

    #[test]
    fn empty_content_keeps_badge_height() {
        let layout = Layout::measure(320, 1.0, &[]);
        assert_eq!(f64::from(layout.height), PADDING * 2.0 + BADGE_DIAMETER);
    }
}
