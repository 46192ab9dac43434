// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `cardface_font` packages the stroke font that Cardface draws every card with.
//!
//! Each printable ASCII character (`' '` through `'~'`) is described by a [`Glyph`]: up to
//! [`MAX_STROKES`] straight line segments in a unit square, with `y = 0` at the bottom of the
//! glyph and `y = 1` at its top. The table is immutable data; look glyphs up with [`glyph`].
//!
//! ## Example
//!
//! ```
//! use cardface_font::{glyph, Point};
//!
//! let l = glyph('L').unwrap();
//! let mut strokes = l.strokes();
//! let stem = strokes.next().unwrap();
//! assert_eq!(stem.start, Point::new(0.0, 1.0));
//! assert_eq!(stem.end, Point::new(0.0, 0.0));
//!
//! assert!(glyph('\n').is_none());
//! assert_eq!(glyph(' ').unwrap().strokes().count(), 0);
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

mod table;

use core::ops::RangeInclusive;

/// The number of stroke slots every glyph has.
pub const MAX_STROKES: usize = 5;

/// The range of characters the font covers.
pub const PRINTABLE: RangeInclusive<char> = ' '..='~';

/// A point in glyph space.
///
/// Both coordinates lie in `[0, 1]`; `y` grows upwards.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal position, `0` at the left edge of the glyph cell.
    pub x: f32,
    /// Vertical position, `0` at the bottom edge of the glyph cell.
    pub y: f32,
}

impl Point {
    /// The origin, bottom-left corner of the cell.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One straight segment of a glyph.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    /// Where the pen goes down.
    pub start: Point,
    /// Where the pen comes up.
    pub end: Point,
}

impl Stroke {
    /// Marker filling the slots a glyph does not use.
    pub const UNUSED: Self = Self::new(Point::ORIGIN, Point::ORIGIN);

    /// Creates a new stroke.
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Whether this slot is the [`Stroke::UNUSED`] marker.
    pub fn is_unused(&self) -> bool {
        *self == Self::UNUSED
    }
}

/// The vector description of one character.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Glyph {
    slots: [Stroke; MAX_STROKES],
}

impl Glyph {
    /// A glyph that draws nothing.
    pub const EMPTY: Self = Self {
        slots: [Stroke::UNUSED; MAX_STROKES],
    };

    /// Builds a glyph from up to [`MAX_STROKES`] strokes, padding the rest with
    /// [`Stroke::UNUSED`].
    ///
    /// Passing more than [`MAX_STROKES`] strokes fails to compile when used in a constant.
    pub const fn from_strokes<const N: usize>(strokes: [Stroke; N]) -> Self {
        assert!(N <= MAX_STROKES, "a glyph has at most five strokes");
        let mut slots = [Stroke::UNUSED; MAX_STROKES];
        let mut i = 0;
        while i < N {
            slots[i] = strokes[i];
            i += 1;
        }
        Self { slots }
    }

    /// All stroke slots, including unused ones.
    pub fn slots(&self) -> &[Stroke; MAX_STROKES] {
        &self.slots
    }

    /// The strokes that actually draw something.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> + '_ {
        self.slots.iter().filter(|stroke| !stroke.is_unused())
    }
}

/// Returns the glyph for `ch`, or `None` when `ch` is outside [`PRINTABLE`].
#[inline]
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    if !PRINTABLE.contains(&ch) {
        return None;
    }
    table::GLYPHS.get(ch as usize - *PRINTABLE.start() as usize)
}
