// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole cards.

use cardface::farbfeld::{FarbfeldHeader, HEADER_LEN};
use cardface::{decode_farbfeld, BorderPalette, CardEntry, Canvas, ErrorKind};

use crate::test_name;
use crate::util::TestEnv;

fn assert_border(canvas: &Canvas, env: &TestEnv, expected: cardface::Rgb8) {
    let regions = env.composer().regions();
    for y in 0..Canvas::HEIGHT as i32 {
        for x in 0..Canvas::WIDTH as i32 {
            if regions.in_border(x, y) {
                assert_eq!(canvas.pixel(x, y), Some(expected), "border pixel ({x}, {y})");
            }
        }
    }
}

#[test]
fn compose_bolt_end_to_end() {
    let env = TestEnv::new(test_name!());
    let bolt = cardface_dev::bolt();

    let path = env
        .composer()
        .render_to_file(&bolt, env.output_dir())
        .unwrap();
    assert!(path.ends_with("Bolt.ff"));

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 16 + 375 * 523 * 8);
    assert_eq!(
        FarbfeldHeader::parse(&bytes[..HEADER_LEN]).unwrap(),
        FarbfeldHeader {
            width: 375,
            height: 523
        }
    );
    let canvas = decode_farbfeld(&bytes).unwrap();
    assert_border(&canvas, &env, BorderPalette::default().red);
}

#[test]
fn compose_border_follows_cost() {
    let mut env = TestEnv::new(test_name!());
    let palette = BorderPalette::default();
    for (cost, expected) in [
        ("1R", palette.red),
        ("WU", palette.gold),
        ("", palette.gray),
        ("2W", palette.white),
        ("U", palette.blue),
        ("BB", palette.black),
        ("3G", palette.green),
        ("1W/B", palette.gold),
    ] {
        assert_eq!(env.composer().border_color(cost), expected, "{cost:?}");
        let entry = CardEntry::new(format!("Cost {cost}"), cost, "Test", "");
        let case = format!("cost_{}", cost.replace('/', "_"));
        let canvas = env.with_name(&case).render(&entry);
        assert_border(&canvas, &env, expected);
    }
}

#[test]
fn compose_samples() {
    let mut env = TestEnv::new(test_name!());
    for sample in cardface_dev::samples() {
        let expected = env.composer().border_color(&sample.cost);
        let name = sample.display_name().replace(' ', "_");
        let canvas = env.with_name(&name).render(&sample);
        assert_eq!(canvas.pixel(0, 0), Some(expected), "{name}");
    }
}

#[test]
fn compose_stats_drawn_only_when_present() {
    let mut env = TestEnv::new(test_name!());
    let stats = env.composer().regions().stats;
    let frame = env.composer().style().frame;
    let inside = |canvas: &Canvas| {
        (stats.y0..=stats.y1)
            .flat_map(|y| (stats.x0..=stats.x1).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) != Some(frame))
            .count()
    };

    let bolt = env.with_name("none").render(&cardface_dev::bolt());
    assert_eq!(inside(&bolt), 0);
    let knight = env.with_name("power").render(&cardface_dev::hybrid_knight());
    assert_eq!(inside(&knight), stats.width() as usize * stats.height() as usize);
    let walker = env.with_name("loyalty").render(&cardface_dev::night_scholar());
    assert_eq!(inside(&walker), stats.width() as usize * stats.height() as usize);
    assert_ne!(knight, walker);
}

#[test]
fn compose_render_cards_continues_after_failure() {
    let env = TestEnv::new(test_name!());
    let dir = env.output_dir();
    // A directory where the card's file should go cannot be opened as a file.
    let blocked = dir.join("Blocked.ff");
    std::fs::create_dir_all(&blocked).unwrap();
    let entries = [
        cardface_dev::bolt(),
        CardEntry::new("Blocked", "U", "Instant", ""),
        cardface_dev::iron_idol(),
    ];

    let results = env.composer().render_cards(&entries, &dir);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap(), &dir.join("Bolt.ff"));
    let err = results[1].as_ref().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Open);
    assert_eq!(err.path(), Some(blocked.as_path()));
    assert!(blocked.is_dir());
    assert!(results[2].as_ref().unwrap().exists());
}

#[test]
fn compose_names_with_separators_stay_in_dir() {
    let env = TestEnv::new(test_name!());
    let dir = env.output_dir();
    let entries = [
        CardEntry::new("Fire // Ice", "1R", "Instant", "Fire deals 2 damage."),
        CardEntry::new("/Rooted", "W", "Sorcery", ""),
    ];

    let results = env.composer().render_cards(&entries, &dir);
    assert_eq!(results[0].as_ref().unwrap(), &dir.join("Fire __ Ice.ff"));
    assert_eq!(results[1].as_ref().unwrap(), &dir.join("_Rooted.ff"));
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 2);
    for (entry, result) in entries.iter().zip(&results) {
        let written = decode_farbfeld(&std::fs::read(result.as_ref().unwrap()).unwrap()).unwrap();
        assert_eq!(written, env.composer().compose(entry));
    }
}

#[test]
fn compose_same_name_overwrites() {
    let env = TestEnv::new(test_name!());
    let dir = env.output_dir();
    let first = CardEntry::new("Twin", "G", "Sorcery", "First.");
    let second = CardEntry::new("Twin\n", "R", "Instant", "Second.");
    assert_eq!(first.file_name(), second.file_name());

    env.composer().render_to_file(&first, &dir).unwrap();
    let path = env.composer().render_to_file(&second, &dir).unwrap();

    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);
    let written = decode_farbfeld(&std::fs::read(path).unwrap()).unwrap();
    assert_eq!(written, env.composer().compose(&second));
}

#[test]
fn compose_default_render_matches_composer() {
    let bolt = cardface_dev::bolt();
    assert_eq!(
        cardface::render_card(&bolt),
        cardface::CardComposer::new().compose(&bolt)
    );
}
