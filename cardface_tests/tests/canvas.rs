// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas primitives, checked across the whole raster.

use cardface::{Canvas, Rgb8};

use crate::test_name;
use crate::util::{painted, TestEnv};

const CENTER: (i32, i32) = (187, 261);

const SPOKES: [(i32, i32); 12] = [
    (150, 40),
    (40, 150),
    (-40, 150),
    (-150, 40),
    (-150, -40),
    (-40, -150),
    (40, -150),
    (150, -40),
    (100, 100),
    (0, 120),
    (120, 0),
    (7, 3),
];

#[test]
fn canvas_line_symmetric_in_every_octant() {
    let mut env = TestEnv::new(test_name!());
    let mut star = Canvas::default();

    for (dx, dy) in SPOKES {
        let (x1, y1) = CENTER;
        let (x2, y2) = (x1 + dx, y1 + dy);
        let mut forward = Canvas::default();
        forward.draw_line(x1, y1, x2, y2, Rgb8::WHITE);
        let mut backward = Canvas::default();
        backward.draw_line(x2, y2, x1, y1, Rgb8::WHITE);
        assert_eq!(forward, backward, "spoke ({dx}, {dy}) depends on direction");

        let set = painted(&forward, Rgb8::BLACK);
        assert!(set.contains(&(x1, y1)) && set.contains(&(x2, y2)));
        assert_eq!(set.len() as i32, dx.abs().max(dy.abs()) + 1, "spoke ({dx}, {dy})");

        star.draw_line(x1, y1, x2, y2, Rgb8::WHITE);
    }

    env.check_canvas(&star);
}

#[test]
fn canvas_lines_clip_at_every_edge() {
    let mut env = TestEnv::new(test_name!());
    let mut canvas = Canvas::default();
    let right = Canvas::WIDTH as i32 - 1;
    let bottom = Canvas::HEIGHT as i32 - 1;

    // Diagonals that start and end far outside.
    canvas.draw_line(-200, -200, 600, 600, Rgb8::WHITE);
    canvas.draw_line(right + 300, -300, -300, right + 300, Rgb8::WHITE);
    assert_eq!(canvas.pixel(0, 0), Some(Rgb8::WHITE));
    assert_eq!(canvas.pixel(100, 100), Some(Rgb8::WHITE));

    // Lines hugging the edges stay on them.
    let mut edges = Canvas::default();
    edges.draw_line(-10, 0, right + 10, 0, Rgb8::WHITE);
    edges.draw_line(right, -10, right, bottom + 10, Rgb8::WHITE);
    let set = painted(&edges, Rgb8::BLACK);
    assert_eq!(set.len(), Canvas::WIDTH as usize + Canvas::HEIGHT as usize - 1);
    assert!(set.iter().all(|&(x, y)| y == 0 || x == right));

    env.with_name("diagonals").check_canvas(&canvas);
    env.with_name("edges").check_canvas(&edges);
}

#[test]
fn canvas_thick_lines_form_bands() {
    let mut env = TestEnv::new(test_name!());
    let mut canvas = Canvas::default();

    canvas.draw_thick_line(20, 40, 300, 40, 5, Rgb8::WHITE);
    let band = painted(&canvas, Rgb8::BLACK);
    assert_eq!(band.len(), 281 * 5);
    assert!(band.iter().all(|&(_, y)| (38..=42).contains(&y)));

    // Even widths lean towards the positive side.
    let mut even = Canvas::default();
    even.draw_thick_line(200, 100, 200, 400, 4, Rgb8::WHITE);
    let columns: std::collections::BTreeSet<i32> =
        painted(&even, Rgb8::BLACK).into_iter().map(|(x, _)| x).collect();
    assert_eq!(columns.into_iter().collect::<Vec<_>>(), [199, 200, 201, 202]);

    canvas.draw_thick_line(200, 100, 200, 400, 4, Rgb8::new(255, 0, 0));
    env.check_canvas(&canvas);
}

#[test]
fn canvas_fill_rect_accepts_any_corner_order() {
    let mut a = Canvas::default();
    a.fill_rect(10, 20, 30, 40, Rgb8::WHITE);
    let mut b = Canvas::default();
    b.fill_rect(30, 40, 10, 20, Rgb8::WHITE);
    let mut c = Canvas::default();
    c.fill_rect(30, 20, 10, 40, Rgb8::WHITE);
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(painted(&a, Rgb8::BLACK).len(), 21 * 21);
}
