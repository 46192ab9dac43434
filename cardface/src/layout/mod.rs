// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placing strings of glyphs into boxes.
//!
//! Three strategies are available, from least to most general:
//!
//! - [`layout_line`]: one line, every character stretched to an equal share of the box.
//! - [`layout_breaking`]: lines split only on `\n`, sized so the longest line and all lines
//!   together fill the box.
//! - [`layout_ratio_fit`]: lines split on `\n` and additionally wrapped after a character
//!   count chosen so that glyph cells approach a target width/height ratio.
//!
//! Every `char` occupies one cell. Wrapping never looks at word boundaries.

mod fixed;
mod ratio_fit;

pub use fixed::{layout_breaking, layout_line};
pub use ratio_fit::{layout_ratio_fit, RatioFit, WrappedLines, REFINEMENT_ROUNDS};

/// Where text may be painted, and how far apart its cells are.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LayoutBox {
    /// Left edge, in pixels.
    pub x: f32,
    /// Top edge, in pixels.
    pub y: f32,
    /// Width, in pixels.
    pub width: f32,
    /// Height, in pixels.
    pub height: f32,
    /// Horizontal gap between neighbouring character cells.
    pub spacing: f32,
    /// Vertical gap between neighbouring lines.
    pub line_spacing: f32,
}

impl LayoutBox {
    /// Creates a box without any spacing.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            spacing: 0.0,
            line_spacing: 0.0,
        }
    }

    /// Sets the gap between character cells.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the gap between lines.
    #[must_use]
    pub const fn with_line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    /// The right edge, in pixels.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The bottom edge, in pixels.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Splits `total` into `count` equal cells separated by `gap`, never going below one pixel.
fn cell_extent(total: f32, count: usize, gap: f32) -> f32 {
    let count = count.max(1) as f32;
    // `f32::max` also maps NaN to the floor.
    ((total - (count - 1.0) * gap) / count).max(1.0)
}
