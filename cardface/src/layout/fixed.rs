// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layouts whose line structure is fixed by the input.

use smallvec::SmallVec;

use super::{cell_extent, LayoutBox};
use crate::glyph::{draw_char, StrokeRenderer};
use crate::Rgb8;

/// Draws `text` as a single line filling `layout_box`.
///
/// Every character gets the same cell: the full box height, and an equal share of the box
/// width after [`LayoutBox::spacing`] gaps are taken out. An empty string draws nothing.
pub fn layout_line<R: StrokeRenderer + ?Sized>(
    renderer: &mut R,
    text: &str,
    layout_box: &LayoutBox,
    color: Rgb8,
) {
    let len = text.chars().count();
    if len == 0 {
        return;
    }
    let cell_width = cell_extent(layout_box.width, len, layout_box.spacing);
    let mut x = layout_box.x;
    for ch in text.chars() {
        draw_char(
            renderer,
            ch,
            x,
            layout_box.y,
            cell_width,
            layout_box.height,
            color,
        );
        x += cell_width + layout_box.spacing;
    }
}

/// Draws `text` as one line per `\n`-separated segment.
///
/// All lines share one height, sized so that the lines plus [`LayoutBox::line_spacing`]
/// gaps fill the box. All cells share one width, sized so that the longest line fills the
/// box; shorter lines stay left-aligned.
pub fn layout_breaking<R: StrokeRenderer + ?Sized>(
    renderer: &mut R,
    text: &str,
    layout_box: &LayoutBox,
    color: Rgb8,
) {
    if text.is_empty() {
        return;
    }
    let lines: SmallVec<[&str; 8]> = text.split('\n').collect();
    let longest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let line_height = cell_extent(layout_box.height, lines.len(), layout_box.line_spacing);
    let cell_width = cell_extent(layout_box.width, longest, layout_box.spacing);

    let mut y = layout_box.y;
    for line in lines {
        let mut x = layout_box.x;
        for ch in line.chars() {
            draw_char(renderer, ch, x, y, cell_width, line_height, color);
            x += cell_width + layout_box.spacing;
        }
        y += line_height + layout_box.line_spacing;
    }
}
