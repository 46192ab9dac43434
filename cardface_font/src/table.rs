// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The glyph table, indexed by `codepoint - 32`.
//!
//! Lowercase letters use an x-height of `0.6`; descenders are folded above the baseline.

use crate::{Glyph, Point, Stroke};

const fn s(x0: f32, y0: f32, x1: f32, y1: f32) -> Stroke {
    Stroke::new(Point::new(x0, y0), Point::new(x1, y1))
}

pub(crate) static GLYPHS: [Glyph; 95] = [
    // ' '
    Glyph::EMPTY,
    // '!'
    Glyph::from_strokes([s(0.5, 1.0, 0.5, 0.3), s(0.5, 0.1, 0.5, 0.0)]),
    // '"'
    Glyph::from_strokes([s(0.35, 1.0, 0.35, 0.75), s(0.65, 1.0, 0.65, 0.75)]),
    // '#'
    Glyph::from_strokes([
        s(0.35, 1.0, 0.25, 0.0),
        s(0.75, 1.0, 0.65, 0.0),
        s(0.0, 0.7, 1.0, 0.7),
        s(0.0, 0.3, 1.0, 0.3),
    ]),
    // '$'
    Glyph::from_strokes([
        s(1.0, 0.85, 0.0, 0.65),
        s(0.0, 0.65, 1.0, 0.35),
        s(1.0, 0.35, 0.0, 0.15),
        s(0.5, 1.0, 0.5, 0.0),
    ]),
    // '%'
    Glyph::from_strokes([s(1.0, 1.0, 0.0, 0.0), s(0.15, 1.0, 0.15, 0.7), s(0.85, 0.3, 0.85, 0.0)]),
    // '&'
    Glyph::from_strokes([
        s(1.0, 0.0, 0.2, 0.8),
        s(0.2, 0.8, 0.5, 1.0),
        s(0.5, 1.0, 0.7, 0.8),
        s(0.7, 0.8, 0.0, 0.2),
        s(0.0, 0.2, 0.3, 0.0),
    ]),
    // '\''
    Glyph::from_strokes([s(0.5, 1.0, 0.5, 0.75)]),
    // '('
    Glyph::from_strokes([s(0.7, 1.0, 0.4, 0.75), s(0.4, 0.75, 0.4, 0.25), s(0.4, 0.25, 0.7, 0.0)]),
    // ')'
    Glyph::from_strokes([s(0.3, 1.0, 0.6, 0.75), s(0.6, 0.75, 0.6, 0.25), s(0.6, 0.25, 0.3, 0.0)]),
    // '*'
    Glyph::from_strokes([s(0.5, 0.8, 0.5, 0.2), s(0.2, 0.65, 0.8, 0.35), s(0.2, 0.35, 0.8, 0.65)]),
    // '+'
    Glyph::from_strokes([s(0.5, 0.8, 0.5, 0.2), s(0.2, 0.5, 0.8, 0.5)]),
    // ','
    Glyph::from_strokes([s(0.55, 0.15, 0.4, 0.0)]),
    // '-'
    Glyph::from_strokes([s(0.2, 0.5, 0.8, 0.5)]),
    // '.'
    Glyph::from_strokes([s(0.5, 0.1, 0.5, 0.0)]),
    // '/'
    Glyph::from_strokes([s(1.0, 1.0, 0.0, 0.0)]),
    // '0'
    Glyph::from_strokes([
        s(0.0, 0.0, 0.0, 1.0),
        s(0.0, 1.0, 1.0, 1.0),
        s(1.0, 1.0, 1.0, 0.0),
        s(1.0, 0.0, 0.0, 0.0),
        s(0.0, 0.0, 1.0, 1.0),
    ]),
    // '1'
    Glyph::from_strokes([s(0.5, 0.0, 0.5, 1.0), s(0.5, 1.0, 0.25, 0.75), s(0.25, 0.0, 0.75, 0.0)]),
    // '2'
    Glyph::from_strokes([
        s(0.0, 1.0, 1.0, 1.0),
        s(1.0, 1.0, 1.0, 0.5),
        s(1.0, 0.5, 0.0, 0.5),
        s(0.0, 0.5, 0.0, 0.0),
        s(0.0, 0.0, 1.0, 0.0),
    ]),
    // '3'
    Glyph::from_strokes([
        s(0.0, 1.0, 1.0, 1.0),
        s(1.0, 1.0, 1.0, 0.0),
        s(1.0, 0.0, 0.0, 0.0),
        s(0.3, 0.5, 1.0, 0.5),
    ]),
    // '4'
    Glyph::from_strokes([s(0.0, 1.0, 0.0, 0.5), s(0.0, 0.5, 1.0, 0.5), s(0.75, 1.0, 0.75, 0.0)]),
    // '5'
    Glyph::from_strokes([
        s(0.9, 1.0, 0.0, 1.0),
        s(0.0, 1.0, 0.0, 0.55),
        s(0.0, 0.55, 1.0, 0.45),
        s(1.0, 0.45, 1.0, 0.0),
        s(1.0, 0.0, 0.0, 0.0),
    ]),
    // '6'
    Glyph::from_strokes([
        s(1.0, 1.0, 0.0, 1.0),
        s(0.0, 1.0, 0.0, 0.0),
        s(0.0, 0.0, 1.0, 0.0),
        s(1.0, 0.0, 1.0, 0.5),
        s(1.0, 0.5, 0.0, 0.5),
    ]),
    // '7'
    Glyph::from_strokes([s(0.0, 1.0, 1.0, 1.0), s(1.0, 1.0, 0.3, 0.0)]),
    // '8'
    Glyph::from_strokes([
        s(0.0, 0.0, 0.0, 1.0),
        s(0.0, 1.0, 1.0, 1.0),
        s(1.0, 1.0, 1.0, 0.0),
        s(1.0, 0.0, 0.0, 0.0),
        s(0.0, 0.5, 1.0, 0.5),
    ]),
    // '9'
    Glyph::from_strokes([
        s(1.0, 0.5, 0.0, 0.5),
        s(0.0, 0.5, 0.0, 1.0),
        s(0.0, 1.0, 1.0, 1.0),
        s(1.0, 1.0, 1.0, 0.0),
        s(1.0, 0.0, 0.0, 0.0),
    ]),
    // ':'
    Glyph::from_strokes([s(0.5, 0.7, 0.5, 0.6), s(0.5, 0.2, 0.5, 0.1)]),
    // ';'
    Glyph::from_strokes([s(0.5, 0.7, 0.5, 0.6), s(0.55, 0.2, 0.4, 0.0)]),
    // '<'
    Glyph::from_strokes([s(1.0, 1.0, 0.0, 0.5), s(0.0, 0.5, 1.0, 0.0)]),
    // '='
    Glyph::from_strokes([s(0.1, 0.65, 0.9, 0.65), s(0.1, 0.35, 0.9, 0.35)]),
    // '>'
    Glyph::from_strokes([s(0.0, 1.0, 1.0, 0.5), s(1.0, 0.5, 0.0, 0.0)]),
    // '?'
    Glyph::from_strokes([
        s(0.0, 1.0, 1.0, 1.0),
        s(1.0, 1.0, 1.0, 0.6),
        s(1.0, 0.6, 0.5, 0.4),
        s(0.5, 0.4, 0.5, 0.25),
        s(0.5, 0.1, 0.5, 0.0),
    ]),
    // '@'
    Glyph::from_strokes([
        s(1.0, 0.0, 0.0, 0.0),
        s(0.0, 0.0, 0.0, 1.0),
        s(0.0, 1.0, 1.0, 1.0),
        s(1.0, 1.0, 1.0, 0.3),
        s(1.0, 0.3, 0.4, 0.6),
    ]),
    // 'A'
    Glyph::from_strokes([s(0.0, 0.0, 0.5, 1.0), s(0.5, 1.0, 1.0, 0.0), s(0.25, 0.5, 0.75, 0.5)]),
    // 'B'
    Glyph::from_strokes([
        s(0.0, 0.0, 0.0, 1.0),
        s(0.0, 1.0, 0.8, 0.75),
        s(0.8, 0.75, 0.0, 0.5),
        s(0.0, 0.5, 1.0, 0.25),
        s(1.0, 0.25, 0.0, 0.0),
    ]),
    // 'C'
    Glyph::from_strokes([s(1.0, 1.0, 0.0, 1.0), s(0.0, 1.0, 0.0, 0.0), s(0.0, 0.0, 1.0, 0.0)]),
    // 'D'
    Glyph::from_strokes([
        s(0.0, 0.0, 0.0, 1.0),
        s(0.0, 1.0, 0.6, 1.0),
        s(0.6, 1.0, 1.0, 0.5),
        s(1.0, 0.5, 0.6, 0.0),
        s(0.6, 0.0, 0.0, 0.0),
    ]),
    // 'E'
    Glyph::from_strokes([
        s(1.0, 1.0, 0.0, 1.0),
        s(0.0, 1.0, 0.0, 0.0),
        s(0.0, 0.0, 1.0, 0.0),
        s(0.0, 0.5, 0.7, 0.5),
    ]),
    // 'F'
    Glyph::from_strokes([s(1.0, 1.0, 0.0, 1.0), s(0.0, 1.0, 0.0, 0.0), s(0.0, 0.5, 0.7, 0.5)]),
    // 'G'
    Glyph::from_strokes([
        s(1.0, 1.0, 0.0, 1.0),
        s(0.0, 1.0, 0.0, 0.0),
        s(0.0, 0.0, 1.0, 0.0),
        s(1.0, 0.0, 1.0, 0.5),
        s(1.0, 0.5, 0.5, 0.5),
    ]),
    // 'H'
    Glyph::from_strokes([s(0.0, 0.0, 0.0, 1.0), s(1.0, 0.0, 1.0, 1.0), s(0.0, 0.5, 1.0, 0.5)]),
    // 'I'
    Glyph::from_strokes([s(0.5, 0.0, 0.5, 1.0), s(0.2, 1.0, 0.8, 1.0), s(0.2, 0.0, 0.8, 0.0)]),
    // 'J'
    Glyph::from_strokes([s(1.0, 1.0, 1.0, 0.0), s(1.0, 0.0, 0.0, 0.0), s(0.0, 0.0, 0.0, 0.3)]),
    // 'K'
    Glyph::from_strokes([s(0.0, 0.0, 0.0, 1.0), s(1.0, 1.0, 0.0, 0.5), s(0.0, 0.5, 1.0, 0.0)]),
    // 'L'
    Glyph::from_strokes([s(0.0, 1.0, 0.0, 0.0), s(0.0, 0.0, 1.0, 0.0)]),
    // 'M'
    Glyph::from_strokes([
        s(0.0, 0.0, 0.0, 1.0),
        s(0.0, 1.0, 0.5, 0.5),
        s(0.5, 0.5, 1.0, 1.0),
        s(1.0, 1.0, 1.0, 0.0),
    ]),
    // 'N'
    Glyph::from_strokes([s(0.0, 0.0, 0.0, 1.0), s(0.0, 1.0, 1.0, 0.0), s(1.0, 0.0, 1.0, 1.0)]),
    // 'O'
    Glyph::from_strokes([
        s(0.0, 0.0, 0.0, 1.0),
        s(0.0, 1.0, 1.0, 1.0),
        s(1.0, 1.0, 1.0, 0.0),
        s(1.0, 0.0, 0.0, 0.0),
    ]),
    // 'P'
    Glyph::from_strokes([
        s(0.0, 0.0, 0.0, 1.0),
        s(0.0, 1.0, 1.0, 1.0),
        s(1.0, 1.0, 1.0, 0.5),
        s(1.0, 0.5, 0.0, 0.5),
    ]),
    // 'Q'
    Glyph::from_strokes([
        s(0.0, 0.0, 0.0, 1.0),
        s(0.0, 1.0, 1.0, 1.0),
        s(1.0, 1.0, 1.0, 0.0),
        s(1.0, 0.0, 0.0, 0.0),
        s(0.6, 0.4, 1.0, 0.0),
    ]),
    // 'R'
    Glyph::from_strokes([
        s(0.0, 0.0, 0.0, 1.0),
        s(0.0, 1.0, 1.0, 1.0),
        s(1.0, 1.0, 1.0, 0.5),
        s(1.0, 0.5, 0.0, 0.5),
        s(0.4, 0.5, 1.0, 0.0),
    ]),
    // 'S'
    Glyph::from_strokes([
        s(1.0, 1.0, 0.0, 1.0),
        s(0.0, 1.0, 0.0, 0.5),
        s(0.0, 0.5, 1.0, 0.5),
        s(1.0, 0.5, 1.0, 0.0),
        s(1.0, 0.0, 0.0, 0.0),
    ]),
    // 'T'
    Glyph::from_strokes([s(0.0, 1.0, 1.0, 1.0), s(0.5, 1.0, 0.5, 0.0)]),
    // 'U'
    Glyph::from_strokes([s(0.0, 1.0, 0.0, 0.0), s(0.0, 0.0, 1.0, 0.0), s(1.0, 0.0, 1.0, 1.0)]),
    // 'V'
    Glyph::from_strokes([s(0.0, 1.0, 0.5, 0.0), s(0.5, 0.0, 1.0, 1.0)]),
    // 'W'
    Glyph::from_strokes([
        s(0.0, 1.0, 0.25, 0.0),
        s(0.25, 0.0, 0.5, 0.6),
        s(0.5, 0.6, 0.75, 0.0),
        s(0.75, 0.0, 1.0, 1.0),
    ]),
    // 'X'
    Glyph::from_strokes([s(0.0, 0.0, 1.0, 1.0), s(0.0, 1.0, 1.0, 0.0)]),
    // 'Y'
    Glyph::from_strokes([s(0.0, 1.0, 0.5, 0.5), s(1.0, 1.0, 0.5, 0.5), s(0.5, 0.5, 0.5, 0.0)]),
    // 'Z'
    Glyph::from_strokes([s(0.0, 1.0, 1.0, 1.0), s(1.0, 1.0, 0.0, 0.0), s(0.0, 0.0, 1.0, 0.0)]),
    // '['
    Glyph::from_strokes([s(0.7, 1.0, 0.3, 1.0), s(0.3, 1.0, 0.3, 0.0), s(0.3, 0.0, 0.7, 0.0)]),
    // '\\'
    Glyph::from_strokes([s(0.0, 1.0, 1.0, 0.0)]),
    // ']'
    Glyph::from_strokes([s(0.3, 1.0, 0.7, 1.0), s(0.7, 1.0, 0.7, 0.0), s(0.7, 0.0, 0.3, 0.0)]),
    // '^'
    Glyph::from_strokes([s(0.2, 0.7, 0.5, 1.0), s(0.5, 1.0, 0.8, 0.7)]),
    // '_'
    Glyph::from_strokes([s(0.0, 0.0, 1.0, 0.0)]),
    // '`'
    Glyph::from_strokes([s(0.35, 1.0, 0.6, 0.8)]),
    // 'a'
    Glyph::from_strokes([
        s(0.0, 0.6, 1.0, 0.6),
        s(1.0, 0.6, 1.0, 0.0),
        s(1.0, 0.0, 0.0, 0.0),
        s(0.0, 0.0, 0.0, 0.3),
        s(0.0, 0.3, 1.0, 0.3),
    ]),
    // 'b'
    Glyph::from_strokes([
        s(0.0, 1.0, 0.0, 0.0),
        s(0.0, 0.0, 1.0, 0.0),
        s(1.0, 0.0, 1.0, 0.6),
        s(1.0, 0.6, 0.0, 0.6),
    ]),
    // 'c'
    Glyph::from_strokes([s(1.0, 0.6, 0.0, 0.6), s(0.0, 0.6, 0.0, 0.0), s(0.0, 0.0, 1.0, 0.0)]),
    // 'd'
    Glyph::from_strokes([
        s(1.0, 1.0, 1.0, 0.0),
        s(1.0, 0.0, 0.0, 0.0),
        s(0.0, 0.0, 0.0, 0.6),
        s(0.0, 0.6, 1.0, 0.6),
    ]),
    // 'e'
    Glyph::from_strokes([
        s(0.0, 0.3, 1.0, 0.3),
        s(1.0, 0.3, 1.0, 0.6),
        s(1.0, 0.6, 0.0, 0.6),
        s(0.0, 0.6, 0.0, 0.0),
        s(0.0, 0.0, 1.0, 0.0),
    ]),
    // 'f'
    Glyph::from_strokes([
        s(0.4, 0.0, 0.4, 0.9),
        s(0.4, 0.9, 0.5, 1.0),
        s(0.5, 1.0, 0.9, 1.0),
        s(0.1, 0.6, 0.7, 0.6),
    ]),
    // 'g'
    Glyph::from_strokes([
        s(1.0, 0.6, 0.0, 0.6),
        s(0.0, 0.6, 0.0, 0.25),
        s(0.0, 0.25, 1.0, 0.25),
        s(1.0, 0.6, 1.0, 0.0),
        s(1.0, 0.0, 0.0, 0.0),
    ]),
    // 'h'
    Glyph::from_strokes([s(0.0, 1.0, 0.0, 0.0), s(0.0, 0.6, 1.0, 0.6), s(1.0, 0.6, 1.0, 0.0)]),
    // 'i'
    Glyph::from_strokes([s(0.5, 0.6, 0.5, 0.0), s(0.5, 0.85, 0.5, 0.75)]),
    // 'j'
    Glyph::from_strokes([s(0.6, 0.6, 0.6, 0.0), s(0.6, 0.0, 0.2, 0.0), s(0.6, 0.85, 0.6, 0.75)]),
    // 'k'
    Glyph::from_strokes([s(0.0, 1.0, 0.0, 0.0), s(0.8, 0.6, 0.0, 0.3), s(0.0, 0.3, 0.8, 0.0)]),
    // 'l'
    Glyph::from_strokes([s(0.5, 1.0, 0.5, 0.0), s(0.5, 0.0, 0.8, 0.0)]),
    // 'm'
    Glyph::from_strokes([
        s(0.0, 0.0, 0.0, 0.6),
        s(0.0, 0.6, 1.0, 0.6),
        s(1.0, 0.6, 1.0, 0.0),
        s(0.5, 0.6, 0.5, 0.0),
    ]),
    // 'n'
    Glyph::from_strokes([s(0.0, 0.0, 0.0, 0.6), s(0.0, 0.6, 1.0, 0.6), s(1.0, 0.6, 1.0, 0.0)]),
    // 'o'
    Glyph::from_strokes([
        s(0.0, 0.0, 0.0, 0.6),
        s(0.0, 0.6, 1.0, 0.6),
        s(1.0, 0.6, 1.0, 0.0),
        s(1.0, 0.0, 0.0, 0.0),
    ]),
    // 'p'
    Glyph::from_strokes([
        s(0.0, 0.0, 0.0, 0.6),
        s(0.0, 0.6, 1.0, 0.6),
        s(1.0, 0.6, 1.0, 0.25),
        s(1.0, 0.25, 0.0, 0.25),
    ]),
    // 'q'
    Glyph::from_strokes([
        s(1.0, 0.0, 1.0, 0.6),
        s(1.0, 0.6, 0.0, 0.6),
        s(0.0, 0.6, 0.0, 0.25),
        s(0.0, 0.25, 1.0, 0.25),
    ]),
    // 'r'
    Glyph::from_strokes([s(0.0, 0.0, 0.0, 0.6), s(0.0, 0.4, 0.4, 0.6), s(0.4, 0.6, 1.0, 0.6)]),
    // 's'
    Glyph::from_strokes([
        s(1.0, 0.6, 0.0, 0.6),
        s(0.0, 0.6, 0.0, 0.3),
        s(0.0, 0.3, 1.0, 0.3),
        s(1.0, 0.3, 1.0, 0.0),
        s(1.0, 0.0, 0.0, 0.0),
    ]),
    // 't'
    Glyph::from_strokes([s(0.4, 1.0, 0.4, 0.0), s(0.4, 0.0, 0.9, 0.0), s(0.1, 0.6, 0.8, 0.6)]),
    // 'u'
    Glyph::from_strokes([s(0.0, 0.6, 0.0, 0.0), s(0.0, 0.0, 1.0, 0.0), s(1.0, 0.0, 1.0, 0.6)]),
    // 'v'
    Glyph::from_strokes([s(0.0, 0.6, 0.5, 0.0), s(0.5, 0.0, 1.0, 0.6)]),
    // 'w'
    Glyph::from_strokes([
        s(0.0, 0.6, 0.25, 0.0),
        s(0.25, 0.0, 0.5, 0.4),
        s(0.5, 0.4, 0.75, 0.0),
        s(0.75, 0.0, 1.0, 0.6),
    ]),
    // 'x'
    Glyph::from_strokes([s(0.0, 0.0, 1.0, 0.6), s(0.0, 0.6, 1.0, 0.0)]),
    // 'y'
    Glyph::from_strokes([s(0.0, 0.6, 0.5, 0.3), s(1.0, 0.6, 0.2, 0.0)]),
    // 'z'
    Glyph::from_strokes([s(0.0, 0.6, 1.0, 0.6), s(1.0, 0.6, 0.0, 0.0), s(0.0, 0.0, 1.0, 0.0)]),
    // '{'
    Glyph::from_strokes([
        s(0.7, 1.0, 0.5, 0.9),
        s(0.5, 0.9, 0.5, 0.6),
        s(0.5, 0.6, 0.3, 0.5),
        s(0.3, 0.5, 0.5, 0.4),
        s(0.5, 0.4, 0.7, 0.0),
    ]),
    // '|'
    Glyph::from_strokes([s(0.5, 1.0, 0.5, 0.0)]),
    // '}'
    Glyph::from_strokes([
        s(0.3, 1.0, 0.5, 0.9),
        s(0.5, 0.9, 0.5, 0.6),
        s(0.5, 0.6, 0.7, 0.5),
        s(0.7, 0.5, 0.5, 0.4),
        s(0.5, 0.4, 0.3, 0.0),
    ]),
    // '~'
    Glyph::from_strokes([s(0.0, 0.4, 0.3, 0.6), s(0.3, 0.6, 0.7, 0.4), s(0.7, 0.4, 1.0, 0.6)]),
];
