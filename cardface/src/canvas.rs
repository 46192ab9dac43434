// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed-size pixel grid cards are painted on.

use alloc::vec;
use alloc::vec::Vec;

use crate::Rgb8;

/// A card-sized grid of RGB pixels.
///
/// The origin is the top-left corner and `y` grows downwards. All drawing primitives clip
/// per pixel: coordinates outside the grid are silently dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<Rgb8>,
}

impl core::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &Self::WIDTH)
            .field("height", &Self::HEIGHT)
            .finish_non_exhaustive()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Rgb8::BLACK)
    }
}

impl Canvas {
    /// The width of every canvas, in pixels.
    pub const WIDTH: u32 = 375;
    /// The height of every canvas, in pixels.
    pub const HEIGHT: u32 = 523;

    const LEN: usize = Self::WIDTH as usize * Self::HEIGHT as usize;

    /// Creates a canvas filled with `background`.
    pub fn new(background: Rgb8) -> Self {
        Self {
            pixels: vec![background; Self::LEN],
        }
    }

    /// Builds a canvas from row-major pixels.
    ///
    /// Returns `None` unless exactly `WIDTH * HEIGHT` pixels are given.
    pub fn from_pixels(pixels: Vec<Rgb8>) -> Option<Self> {
        (pixels.len() == Self::LEN).then_some(Self { pixels })
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// The pixels as packed `RGB` bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// The pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb8> {
        Self::index(x as i64, y as i64).map(|idx| self.pixels[idx])
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Rgb8) {
        self.pixels.fill(color);
    }

    /// Fills the rectangle with corners `(x1, y1)` and `(x2, y2)`, both inclusive.
    ///
    /// The corners may be given in any order.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb8) {
        let (x_min, x_max) = (x1.min(x2).max(0), x1.max(x2).min(Self::WIDTH as i32 - 1));
        let (y_min, y_max) = (y1.min(y2).max(0), y1.max(y2).min(Self::HEIGHT as i32 - 1));
        if x_min > x_max || y_min > y_max {
            return;
        }
        let width = Self::WIDTH as usize;
        for y in y_min as usize..=y_max as usize {
            let row = y * width;
            self.pixels[row + x_min as usize..=row + x_max as usize].fill(color);
        }
    }

    /// Draws a one pixel wide line between two points, both inclusive.
    ///
    /// This is integer Bresenham: one pixel per step along the dominant axis, with the other
    /// coordinate rounded half up. The walk always starts at the lexicographically smaller
    /// endpoint, so swapping the endpoints paints exactly the same pixels. Only the steps
    /// that land on the canvas are visited, however far away the endpoints are.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb8) {
        self.stroke(
            (i64::from(x1), i64::from(y1)),
            (i64::from(x2), i64::from(y2)),
            color,
        );
    }

    /// Draws a band of `width` parallel lines centered on the line between two points.
    ///
    /// Mostly horizontal lines are thickened vertically and mostly vertical lines
    /// horizontally. A `width` of zero or less draws a single line.
    pub fn draw_thick_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: i32,
        color: Rgb8,
    ) {
        let (x1, y1, x2, y2) = (
            i64::from(x1),
            i64::from(y1),
            i64::from(x2),
            i64::from(y2),
        );
        let width = i64::from(width.max(1));
        let horizontal = (x2 - x1).abs() >= (y2 - y1).abs();
        let first = -((width - 1) / 2);
        for offset in first..first + width {
            if horizontal {
                self.stroke((x1, y1 + offset), (x2, y2 + offset), color);
            } else {
                self.stroke((x1 + offset, y1), (x2 + offset, y2), color);
            }
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "the rounded shift never exceeds the minor extent, which came from an i64"
    )]
    fn stroke(&mut self, a: (i64, i64), b: (i64, i64), color: Rgb8) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        if Self::entirely_outside(start, end) {
            return;
        }
        let (dx, dy) = (end.0 - start.0, end.1 - start.1);
        let x_major = dx.abs() >= dy.abs();
        let (major, minor, d_major, d_minor, major_len) = if x_major {
            (start.0, start.1, dx, dy, i64::from(Self::WIDTH))
        } else {
            (start.1, start.0, dy, dx, i64::from(Self::HEIGHT))
        };
        let steps = d_major.abs();
        if steps == 0 {
            self.put(start.0, start.1, color);
            return;
        }

        // Steps whose major coordinate is on the canvas.
        let (lo, hi) = if d_major > 0 {
            (-major, major_len - 1 - major)
        } else {
            (major - (major_len - 1), major)
        };
        let rise = i128::from(d_minor.abs());
        let run = i128::from(steps);
        for step in lo.max(0)..=hi.min(steps) {
            // round(step * rise / run), ties up; i128 keeps the product exact.
            let shift = (2 * i128::from(step) * rise + run) / (2 * run);
            let (u, v) = (
                major + d_major.signum() * step,
                minor + d_minor.signum() * shift as i64,
            );
            if x_major {
                self.put(u, v, color);
            } else {
                self.put(v, u, color);
            }
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "coordinates are checked against the canvas size first"
    )]
    fn index(x: i64, y: i64) -> Option<usize> {
        if (0..Self::WIDTH as i64).contains(&x) && (0..Self::HEIGHT as i64).contains(&y) {
            Some(y as usize * Self::WIDTH as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    fn put(&mut self, x: i64, y: i64, color: Rgb8) {
        if let Some(idx) = Self::index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Whether both endpoints lie beyond the same canvas edge.
    fn entirely_outside(a: (i64, i64), b: (i64, i64)) -> bool {
        let (w, h) = (Self::WIDTH as i64, Self::HEIGHT as i64);
        (a.0 < 0 && b.0 < 0) || (a.1 < 0 && b.1 < 0) || (a.0 >= w && b.0 >= w) || (a.1 >= h && b.1 >= h)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;

    use super::Canvas;
    use crate::Rgb8;

    const INK: Rgb8 = Rgb8::new(200, 10, 10);

    fn painted(canvas: &Canvas) -> BTreeSet<(i32, i32)> {
        let mut set = BTreeSet::new();
        for y in 0..Canvas::HEIGHT as i32 {
            for x in 0..Canvas::WIDTH as i32 {
                if canvas.pixel(x, y) == Some(INK) {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    #[test]
    fn fill_sets_every_pixel() {
        let mut canvas = Canvas::default();
        canvas.fill(INK);
        assert!(canvas.pixels().iter().all(|&p| p == INK));
        assert_eq!(canvas.pixels().len(), 375 * 523);
    }

    #[test]
    fn fill_rect_is_inclusive_and_clipped() {
        let mut canvas = Canvas::default();
        canvas.fill_rect(-10, -10, 2, 1, INK);
        let set = painted(&canvas);
        assert_eq!(set.len(), 3 * 2, "only the on-canvas part is painted");
        assert!(set.contains(&(0, 0)) && set.contains(&(2, 1)));

        let mut swapped = Canvas::default();
        swapped.fill_rect(2, 1, -10, -10, INK);
        assert_eq!(canvas, swapped, "corner order does not matter");

        let mut outside = Canvas::default();
        outside.fill_rect(400, 600, 500, 700, INK);
        assert_eq!(outside, Canvas::default());
    }

    #[test]
    fn line_is_symmetric_under_endpoint_swap() {
        let cases = [
            (0, 0, 374, 522),
            (374, 0, 0, 522),
            (10, 300, 200, 17),
            (-50, 40, 420, 61),
            (5, 5, 5, 90),
            (7, 3, 100, 3),
            (3, 8, 4, 200),
        ];
        for (x1, y1, x2, y2) in cases {
            let mut forward = Canvas::default();
            forward.draw_line(x1, y1, x2, y2, INK);
            let mut backward = Canvas::default();
            backward.draw_line(x2, y2, x1, y1, INK);
            assert_eq!(
                painted(&forward),
                painted(&backward),
                "line ({x1},{y1})-({x2},{y2}) depends on direction"
            );
        }
    }

    #[test]
    fn line_covers_both_endpoints() {
        let mut canvas = Canvas::default();
        canvas.draw_line(3, 4, 40, 17, INK);
        let set = painted(&canvas);
        assert!(set.contains(&(3, 4)) && set.contains(&(40, 17)));
        // One pixel per column along the dominant axis.
        assert_eq!(set.len(), 38);
    }

    #[test]
    fn degenerate_line_is_one_pixel() {
        let mut canvas = Canvas::default();
        canvas.draw_line(9, 9, 9, 9, INK);
        assert_eq!(painted(&canvas).into_iter().collect::<Vec<_>>(), [(9, 9)]);
    }

    #[test]
    fn far_away_line_is_ignored() {
        let mut canvas = Canvas::default();
        canvas.draw_line(i32::MIN, -5, i32::MAX, -1, INK);
        assert_eq!(canvas, Canvas::default());
    }

    /// Every step of the full Bresenham walk, kept when it lands on the canvas.
    fn full_walk(a: (i64, i64), b: (i64, i64)) -> BTreeSet<(i32, i32)> {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let (dx, dy) = (end.0 - start.0, end.1 - start.1);
        let x_major = dx.abs() >= dy.abs();
        let (steps, rise) = if x_major {
            (dx.abs(), dy.abs())
        } else {
            (dy.abs(), dx.abs())
        };
        let on_canvas = |(x, y): (i64, i64)| {
            (0..i64::from(Canvas::WIDTH)).contains(&x) && (0..i64::from(Canvas::HEIGHT)).contains(&y)
        };
        let mut set = BTreeSet::new();
        let (mut x, mut y) = start;
        let mut acc = steps;
        for _ in 0..=steps {
            if on_canvas((x, y)) {
                set.insert((x as i32, y as i32));
            }
            if x_major {
                x += dx.signum();
            } else {
                y += dy.signum();
            }
            acc += 2 * rise;
            while steps > 0 && acc >= 2 * steps {
                acc -= 2 * steps;
                if x_major {
                    y += dy.signum();
                } else {
                    x += dx.signum();
                }
            }
        }
        set
    }

    #[test]
    fn line_matches_full_walk() {
        let segments = [
            ((-1500, -700), (1600, 1200)),
            ((400, -1400), (-20, 900)),
            ((-300, 260), (700, 261)),
            ((187, -1000), (190, 1500)),
            ((10, 10), (11, 500)),
            ((-800, 900), (900, -800)),
            ((50, 50), (50, 50)),
        ];
        for (a, b) in segments {
            let mut canvas = Canvas::default();
            canvas.draw_line(a.0, a.1, b.0, b.1, INK);
            assert_eq!(
                painted(&canvas),
                full_walk(
                    (i64::from(a.0), i64::from(a.1)),
                    (i64::from(b.0), i64::from(b.1))
                ),
                "line {a:?}-{b:?}"
            );
        }
    }

    #[test]
    fn far_reaching_line_matches_its_visible_part() {
        let cases = [
            ((-1_000_000_000, 10, 1_000_000_000, 12), (0, 11, 374, 11)),
            (
                (-1_000_000_000, -1_000_000_000, 1_000_000_000, 1_000_000_000),
                (0, 0, 374, 374),
            ),
            ((5, -1_000_000_000, 7, 1_000_000_000), (6, 0, 6, 522)),
            ((i32::MIN, 100, i32::MAX, 100), (0, 100, 374, 100)),
        ];
        for ((x1, y1, x2, y2), (cx1, cy1, cx2, cy2)) in cases {
            let mut long = Canvas::default();
            long.draw_line(x1, y1, x2, y2, INK);
            long.draw_line(x2, y2, x1, y1, INK);
            let mut clipped = Canvas::default();
            clipped.draw_line(cx1, cy1, cx2, cy2, INK);
            assert_eq!(long, clipped, "line ({x1},{y1})-({x2},{y2})");
        }
    }

    #[test]
    fn thick_line_survives_extreme_coordinates() {
        let mut canvas = Canvas::default();
        canvas.draw_thick_line(-2_000_000_000, 10, 2_000_000_000, 10, 3, INK);
        let set = painted(&canvas);
        assert_eq!(set.len(), 3 * Canvas::WIDTH as usize);
        assert!(set.iter().all(|&(_, y)| (9..=11).contains(&y)));

        let mut canvas = Canvas::default();
        canvas.draw_thick_line(0, i32::MAX, 10, i32::MAX, 3, INK);
        canvas.draw_thick_line(i32::MIN, 0, i32::MIN, 10, 5, INK);
        assert_eq!(canvas, Canvas::default(), "bands beyond an edge stay invisible");

        let mut canvas = Canvas::default();
        canvas.draw_thick_line(i32::MIN, i32::MIN, i32::MAX, i32::MAX, 4, INK);
        assert!(painted(&canvas).contains(&(100, 100)));
    }

    #[test]
    fn thick_line_offsets_across_dominant_axis() {
        let mut horizontal = Canvas::default();
        horizontal.draw_thick_line(10, 50, 60, 55, 3, INK);
        let set = painted(&horizontal);
        assert!(set.contains(&(10, 49)) && set.contains(&(10, 50)) && set.contains(&(10, 51)));
        assert!(!set.contains(&(9, 50)), "no horizontal spread");

        let mut vertical = Canvas::default();
        vertical.draw_thick_line(100, 10, 102, 80, 3, INK);
        let set = painted(&vertical);
        assert!(set.contains(&(99, 10)) && set.contains(&(100, 10)) && set.contains(&(101, 10)));
        assert!(!set.contains(&(100, 9)), "no vertical spread");
    }

    #[test]
    fn thick_line_clamps_width() {
        let mut thin = Canvas::default();
        thin.draw_line(20, 20, 80, 40, INK);
        for width in [-3, 0, 1] {
            let mut thick = Canvas::default();
            thick.draw_thick_line(20, 20, 80, 40, width, INK);
            assert_eq!(thick, thin, "width {width} draws a single line");
        }
    }

    #[test]
    fn from_pixels_checks_length() {
        assert!(Canvas::from_pixels(Vec::new()).is_none());
        let canvas = Canvas::new(INK);
        let copy = Canvas::from_pixels(canvas.pixels().to_vec()).unwrap();
        assert_eq!(copy, canvas);
        assert_eq!(copy.as_bytes().len(), 375 * 523 * 3);
    }
}
