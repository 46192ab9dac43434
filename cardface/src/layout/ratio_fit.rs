// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrapping text so that its glyph cells approach a target aspect ratio.
//!
//! The cell size that fills a box depends on the number of lines, the number of lines
//! depends on where text wraps, and where text wraps depends on the cell size. Instead of
//! solving for that fixed point, the wrap width is refined a fixed number of times:
//!
//! 1. Start from the length of the longest `\n`-separated line.
//! 2. Wrap at the current width and count lines `L`.
//! 3. The cells this produces have ratio `L * width / wrap / height`; scale the wrap width by
//!    the square root of that ratio over the target.
//!
//! After [`REFINEMENT_ROUNDS`] rounds the final line count sizes the cells.

use super::LayoutBox;
use crate::glyph::{draw_char, StrokeRenderer};
use crate::Rgb8;

/// How many times the wrap width is refined. This is a fixed budget, not a convergence test.
pub const REFINEMENT_ROUNDS: usize = 24;

/// Cells shorter than this are unreadable and collapse to a single pixel.
const MIN_CELL_HEIGHT: f32 = 5.0;

/// The geometry chosen for one ratio-fitted block of text.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RatioFit {
    /// The number of characters after which a line wraps. May be fractional: a line wraps
    /// once the characters already placed on it reach this count.
    pub wrap_width: f32,
    /// The number of lines the text occupies at [`RatioFit::wrap_width`].
    pub line_count: usize,
    /// Width of every character cell.
    pub cell_width: f32,
    /// Height of every character cell.
    pub cell_height: f32,
    /// How far below the top of the box the first line starts.
    pub offset_y: f32,
    /// How many refinement rounds were run.
    pub rounds: usize,
}

impl RatioFit {
    /// Chooses the wrap width and cell size for `text` in `layout_box`.
    ///
    /// `target_aspect` is the desired cell width divided by cell height. Returns `None` for
    /// empty text.
    pub fn plan(text: &str, layout_box: &LayoutBox, target_aspect: f32) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        debug_assert!(target_aspect > 0.0, "aspect ratio must be positive");
        let target_aspect = target_aspect.max(f32::EPSILON);
        // Zero-area boxes still get a finite ratio.
        let width = layout_box.width.max(1.0);
        let height = layout_box.height.max(1.0);

        let longest = text
            .split('\n')
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let mut wrap_width = longest.max(1) as f32;
        let mut rounds = 0;
        for _ in 0..REFINEMENT_ROUNDS {
            let lines = WrappedLines::new(text, wrap_width).count() as f32;
            let effective = lines * width / wrap_width / height;
            wrap_width *= (effective / target_aspect).sqrt();
            rounds += 1;
        }

        let line_count = WrappedLines::new(text, wrap_width).count();
        let lines = line_count as f32;
        let mut cell_height = (layout_box.height - (lines - 1.0) * layout_box.line_spacing) / lines;
        if cell_height.is_nan() || cell_height < MIN_CELL_HEIGHT {
            cell_height = 1.0;
        }
        let cell_width = (cell_height * target_aspect).max(1.0);

        let mut offset_y = 0.0;
        if layout_box.width / target_aspect < layout_box.height {
            let used = lines * cell_height + (lines - 1.0) * layout_box.line_spacing;
            offset_y = (layout_box.height - used).max(0.0);
        }

        log::trace!(
            "ratio fit: {line_count} lines wrapping at {wrap_width:.2}, cells {cell_width:.1}x{cell_height:.1}"
        );
        Some(Self {
            wrap_width,
            line_count,
            cell_width,
            cell_height,
            offset_y,
            rounds,
        })
    }

    /// The lines `text` breaks into at this fit's wrap width.
    pub fn lines<'a>(&self, text: &'a str) -> WrappedLines<'a> {
        WrappedLines::new(text, self.wrap_width)
    }

    /// Draws `text` with this fit's geometry.
    ///
    /// `text` should be the string the fit was planned for.
    pub fn render<R: StrokeRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        text: &str,
        layout_box: &LayoutBox,
        color: Rgb8,
    ) {
        let mut y = layout_box.y + self.offset_y;
        for line in self.lines(text) {
            let mut x = layout_box.x;
            for ch in line.chars() {
                draw_char(renderer, ch, x, y, self.cell_width, self.cell_height, color);
                x += self.cell_width + layout_box.spacing;
            }
            y += self.cell_height + layout_box.line_spacing;
        }
    }
}

/// Draws `text` wrapped on `\n` and at a refined character count, with cells approaching
/// `target_aspect` (width over height).
///
/// See [`RatioFit::plan`] for how the geometry is chosen. An empty string draws nothing.
pub fn layout_ratio_fit<R: StrokeRenderer + ?Sized>(
    renderer: &mut R,
    text: &str,
    layout_box: &LayoutBox,
    target_aspect: f32,
    color: Rgb8,
) {
    if let Some(fit) = RatioFit::plan(text, layout_box, target_aspect) {
        fit.render(renderer, text, layout_box, color);
    }
}

/// Iterator over the lines of a string wrapped at a character count.
///
/// A line ends at every `\n` (which is consumed) and before any character that would
/// follow `wrap_width` characters already on the line. A line never ends empty because of
/// the width alone, so every character lands on some line.
#[derive(Clone, Debug)]
pub struct WrappedLines<'a> {
    rest: Option<&'a str>,
    wrap_width: f32,
}

impl<'a> WrappedLines<'a> {
    /// Wraps `text` after `wrap_width` characters.
    pub fn new(text: &'a str, wrap_width: f32) -> Self {
        Self {
            rest: Some(text),
            wrap_width,
        }
    }
}

impl<'a> Iterator for WrappedLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        let mut placed = 0_usize;
        for (idx, ch) in rest.char_indices() {
            if ch == '\n' {
                self.rest = Some(&rest[idx + 1..]);
                return Some(&rest[..idx]);
            }
            if placed > 0 && placed as f32 >= self.wrap_width {
                self.rest = Some(&rest[idx..]);
                return Some(&rest[..idx]);
            }
            placed += 1;
        }
        self.rest = None;
        Some(rest)
    }
}

impl core::iter::FusedIterator for WrappedLines<'_> {}
