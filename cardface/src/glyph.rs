// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterizing stroke glyphs into pixel cells.

#![allow(
    clippy::cast_possible_truncation,
    reason = "cell coordinates are small and truncate towards the cell origin"
)]

use cardface_font::Point;

use crate::{Canvas, Rgb8};

/// A surface that glyph strokes can be drawn onto.
///
/// [`Canvas`] is the real target; layout code is generic over this trait so that glyph
/// placement can be inspected without rasterizing.
pub trait StrokeRenderer {
    /// Draws a straight line between two pixel positions, both inclusive.
    fn draw_stroke(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb8);
}

impl StrokeRenderer for Canvas {
    #[inline]
    fn draw_stroke(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb8) {
        self.draw_line(x1, y1, x2, y2, color);
    }
}

/// Draws `ch` into the cell whose top-left corner is `(x, y)`.
///
/// Glyph space is flipped on the way: normalized `y = 0` lands on the bottom edge of the
/// cell. Characters without a glyph (anything outside `' '..='~'`) draw nothing.
pub fn draw_char<R: StrokeRenderer + ?Sized>(
    renderer: &mut R,
    ch: char,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Rgb8,
) {
    let Some(glyph) = cardface_font::glyph(ch) else {
        return;
    };
    let project = |p: Point| {
        (
            (x + width * p.x) as i32,
            (y + height * (1.0 - p.y)) as i32,
        )
    };
    for stroke in glyph.strokes() {
        let (x1, y1) = project(stroke.start);
        let (x2, y2) = project(stroke.end);
        renderer.draw_stroke(x1, y1, x2, y2, color);
    }
}
