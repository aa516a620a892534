// Copyright 2026 the Snapmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use log::debug;
use peniko::Color;
use snapmatrix::StringId;
use vello_cpu::kurbo::{Circle, Rect, RoundedRect, Shape};
use vello_cpu::{Pixmap, RenderContext, RenderMode, RenderSettings};

use crate::font::{ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, LINE_HEIGHT, rows};
use crate::layout::{BADGE_DIAMETER, Layout, PADDING, TextBlock};
use crate::palette::{Palette, palette};
use crate::{HostContext, ViewError, strings};

const TOLERANCE: f64 = 0.1;
const CORNER_RADIUS: f64 = 12.0;
const INSET: f64 = 4.0;

/// A captured view: straight-alpha RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u16,
    height: u16,
    data: Vec<u8>,
}

impl Bitmap {
    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Pixel bytes, four per pixel.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the bitmap, returning its pixel bytes.
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// The pixel at `(x, y)`, if in bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = ((y * self.width() + x) as usize) * 4;
        let p = self.data.get(i..i + 4)?;
        Some([p[0], p[1], p[2], p[3]])
    }
}

/// A list item: accent badge, title, and body lines.
///
/// Views go through three steps, mirroring how a UI test drives a real widget:
/// [`inflate`](Self::inflate) binds content in a [`HostContext`], [`settle`](Self::settle)
/// runs layout until it is stable, and [`capture`](Self::capture) renders it.
#[derive(Clone, Debug)]
pub struct ListItemView {
    ctx: HostContext,
    texts: Vec<String>,
    layout: Option<Layout>,
}

impl ListItemView {
    /// Layout passes allowed by default before giving up.
    pub const DEFAULT_LAYOUT_PASSES: usize = 4;

    /// Binds `content` (title first) to a new view hosted in `ctx`.
    #[must_use]
    pub fn inflate(ctx: HostContext, content: &[StringId]) -> Self {
        let texts = content
            .iter()
            .map(|&id| strings::resolve(ctx.locale, id).into_owned())
            .collect();
        Self {
            ctx,
            texts,
            layout: None,
        }
    }

    /// The context the view was inflated in.
    #[must_use]
    pub fn context(&self) -> &HostContext {
        &self.ctx
    }

    /// Resolved text, title first.
    #[must_use]
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// The settled layout, if any.
    #[must_use]
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Runs layout passes until two consecutive passes agree.
    ///
    /// Any change to the view's inputs invalidates the previous layout, so a settled view
    /// needs at least two passes: one to measure and one to confirm.
    pub fn settle(&mut self, max_passes: usize) -> Result<&Layout, ViewError> {
        let mut previous: Option<Layout> = None;
        for pass in 1..=max_passes {
            let next = Layout::measure(
                u32::from(self.ctx.width.px()),
                self.ctx.font_scale.factor(),
                &self.texts,
            );
            if previous.as_ref() == Some(&next) {
                debug!(
                    "layout settled after {pass} passes: {}x{}",
                    next.width, next.height
                );
                let layout: &Layout = self.layout.insert(next);
                return Ok(layout);
            }
            previous = Some(next);
        }
        self.layout = None;
        Err(ViewError::LayoutUnstable { passes: max_passes })
    }

    /// Renders the settled view.
    pub fn capture(&self) -> Result<Bitmap, ViewError> {
        let layout = self.layout.as_ref().ok_or(ViewError::NotLaidOut)?;
        let width = u16::try_from(layout.width).map_err(|_| ViewError::TooTall {
            height: layout.height,
        })?;
        let height = u16::try_from(layout.height).map_err(|_| ViewError::TooTall {
            height: layout.height,
        })?;

        let settings = RenderSettings {
            // u8 pipeline output keeps captures stable regardless of which pipelines other
            // crates in the build enable.
            render_mode: RenderMode::OptimizeSpeed,
            ..RenderSettings::default()
        };
        let mut ctx = RenderContext::new_with(width, height, settings);
        let colors = palette(self.ctx.theme);
        draw(&mut ctx, layout, &colors);

        let mut pixmap = Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let unpremul = pixmap.take_unpremultiplied();
        let mut data = Vec::with_capacity(unpremul.len() * 4);
        for p in unpremul {
            data.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
        debug!("captured {width}x{height} ({:?})", self.ctx);
        Ok(Bitmap {
            width,
            height,
            data,
        })
    }
}

fn draw(ctx: &mut RenderContext, layout: &Layout, colors: &Palette) {
    let w = f64::from(layout.width);
    let h = f64::from(layout.height);

    ctx.set_paint(colors.background);
    ctx.fill_rect(&Rect::new(0.0, 0.0, w, h));

    ctx.set_paint(colors.surface);
    let card = RoundedRect::new(INSET, INSET, w - INSET, h - INSET, CORNER_RADIUS);
    ctx.fill_path(&card.to_path(TOLERANCE));

    let radius = BADGE_DIAMETER / 2.0;
    let center = (PADDING + radius, PADDING + radius);
    ctx.set_paint(colors.accent);
    ctx.fill_path(&Circle::new(center, radius).to_path(TOLERANCE));

    let initial = layout
        .blocks
        .first()
        .and_then(|b| b.lines.first())
        .and_then(|l| l.chars().next());
    if let Some(initial) = initial {
        let dot = 3.0;
        let x = center.0 - f64::from(GLYPH_WIDTH) * dot / 2.0;
        let y = center.1 - f64::from(GLYPH_HEIGHT) * dot / 2.0;
        draw_glyph(ctx, initial, x, y, dot, colors.on_accent);
    }

    for block in &layout.blocks {
        draw_block(ctx, block, colors);
    }

    if let Some(last) = layout.blocks.last() {
        let y = (last.y + last.height() + PADDING / 2.0).min(h - INSET - 2.0);
        ctx.set_paint(colors.divider);
        ctx.fill_rect(&Rect::new(last.x, y, w - PADDING, y + 1.0));
    }
}

fn draw_block(ctx: &mut RenderContext, block: &TextBlock, colors: &Palette) {
    let color = if block.title {
        colors.primary_text
    } else {
        colors.secondary_text
    };
    for (row, line) in block.lines.iter().enumerate() {
        let y = block.y + f64::from(LINE_HEIGHT) * row as f64 * block.dot;
        for (col, c) in line.chars().enumerate() {
            let x = block.x + f64::from(ADVANCE) * col as f64 * block.dot;
            draw_glyph(ctx, c, x, y, block.dot, color);
        }
    }
}

fn draw_glyph(ctx: &mut RenderContext, c: char, x: f64, y: f64, dot: f64, color: Color) {
    ctx.set_paint(color);
    for (r, bits) in rows(c).iter().enumerate() {
        let top = y + r as f64 * dot;
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                let left = x + f64::from(col) * dot;
                ctx.fill_rect(&Rect::new(left, top, left + dot, top + dot));
            }
        }
    }
}
