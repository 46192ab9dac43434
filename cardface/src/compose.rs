// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Laying out a whole card.
//!
//! A card is painted back to front: the frame, the title bar with name and cost, the art
//! placeholder, the type line, the rules box, the optional stat box, and finally the border
//! ring. Text may spill out of its box, so the border goes last to keep its pixels clean.

#![allow(
    clippy::cast_possible_truncation,
    reason = "region fractions are rounded to pixels on a 375x523 canvas"
)]

use alloc::vec::Vec;
use std::path::{Path, PathBuf};

use crate::farbfeld::save_farbfeld;
use crate::layout::{layout_line, LayoutBox, RatioFit};
use crate::{CardEntry, Canvas, ColorIdentity, Error, ManaColor, Rgb8};

/// The fixed border colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BorderPalette {
    /// Border of white cards.
    pub white: Rgb8,
    /// Border of blue cards.
    pub blue: Rgb8,
    /// Border of black cards.
    pub black: Rgb8,
    /// Border of red cards.
    pub red: Rgb8,
    /// Border of green cards.
    pub green: Rgb8,
    /// Border of cards with two or more colors.
    pub gold: Rgb8,
    /// Border of colorless cards.
    pub gray: Rgb8,
}

impl BorderPalette {
    /// The constant for a single color.
    pub const fn color(&self, color: ManaColor) -> Rgb8 {
        match color {
            ManaColor::White => self.white,
            ManaColor::Blue => self.blue,
            ManaColor::Black => self.black,
            ManaColor::Red => self.red,
            ManaColor::Green => self.green,
        }
    }

    /// The border for a color identity.
    ///
    /// A single color gets its own constant, any mix gets gold, and no color gets gray.
    pub fn border_for(&self, identity: ColorIdentity) -> Rgb8 {
        if identity.len() > 1 {
            return self.gold;
        }
        // Scanned in WUBRG order; with one color the last match is the only match.
        identity
            .iter()
            .last()
            .map_or(self.gray, |color| self.color(color))
    }
}

impl Default for BorderPalette {
    fn default() -> Self {
        Self {
            white: Rgb8::new(236, 232, 214),
            blue: Rgb8::new(26, 110, 178),
            black: Rgb8::new(40, 36, 38),
            red: Rgb8::new(200, 44, 36),
            green: Rgb8::new(24, 120, 64),
            gold: Rgb8::new(212, 170, 60),
            gray: Rgb8::new(150, 150, 155),
        }
    }
}

/// A horizontal band of the card, as fractions of the canvas height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Band {
    /// Top edge, from 0 (top of the canvas) to 1.
    pub top: f32,
    /// Bottom edge, from 0 to 1.
    pub bottom: f32,
}

impl Band {
    /// Creates a band.
    pub const fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// The first and last pixel rows of the band.
    fn rows(self) -> (i32, i32) {
        let height = Canvas::HEIGHT as f32;
        let top = (self.top * height).round() as i32;
        let bottom = (self.bottom * height).round() as i32 - 1;
        (top, bottom.max(top))
    }
}

/// Colors, proportions and spacing of a card.
///
/// The default reproduces the standard frame: a border ring, a title bar over the art,
/// the type line below the art, and the rules box filling most of the rest.
#[derive(Clone, Debug, PartialEq)]
pub struct CardStyle {
    /// Border colors by color identity.
    pub palette: BorderPalette,
    /// Background inside the border.
    pub frame: Rgb8,
    /// Fill of the title bar, type line and stat box.
    pub bar: Rgb8,
    /// Fill of the art placeholder.
    pub art: Rgb8,
    /// Outline of the art placeholder.
    pub art_outline: Rgb8,
    /// Fill of the rules box.
    pub text_box: Rgb8,
    /// Color of all text.
    pub ink: Rgb8,
    /// Thickness of the border ring, as a fraction of the canvas width.
    pub border_width: f32,
    /// Gap between the border and the regions, as a fraction of the canvas width.
    pub inset: f32,
    /// Title bar.
    pub title: Band,
    /// Art placeholder.
    pub art_band: Band,
    /// Type line.
    pub type_line: Band,
    /// Rules box.
    pub rules: Band,
    /// Stat box.
    pub stats: Band,
    /// Width of the stat box, as a fraction of the canvas width.
    pub stats_width: f32,
    /// Thickness of the art outline in pixels.
    pub outline_width: i32,
    /// Pixels between a region's edge and its text.
    pub padding: f32,
    /// Horizontal gap between characters, in pixels.
    pub char_spacing: f32,
    /// Vertical gap between rules lines, in pixels.
    pub line_spacing: f32,
    /// Width over height of characters in single-line labels.
    pub label_aspect: f32,
    /// Target width over height of rules text characters.
    pub rules_aspect: f32,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            palette: BorderPalette::default(),
            frame: Rgb8::new(58, 52, 48),
            bar: Rgb8::new(222, 214, 196),
            art: Rgb8::new(120, 132, 144),
            art_outline: Rgb8::new(20, 20, 24),
            text_box: Rgb8::new(245, 240, 225),
            ink: Rgb8::BLACK,
            border_width: 0.045,
            inset: 0.02,
            title: Band::new(0.050, 0.105),
            art_band: Band::new(0.115, 0.555),
            type_line: Band::new(0.565, 0.620),
            rules: Band::new(0.630, 0.905),
            stats: Band::new(0.915, 0.960),
            stats_width: 0.22,
            outline_width: 3,
            padding: 4.0,
            char_spacing: 1.0,
            line_spacing: 2.0,
            label_aspect: 0.6,
            rules_aspect: 0.6,
        }
    }
}

/// An axis-aligned pixel rectangle, both corners inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Left column.
    pub x0: i32,
    /// Top row.
    pub y0: i32,
    /// Right column.
    pub x1: i32,
    /// Bottom row.
    pub y1: i32,
}

impl Rect {
    /// Creates a rectangle from inclusive corners.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width in pixels.
    pub const fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    /// Height in pixels.
    pub const fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    /// Whether `(x, y)` lies inside.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    fn fill(&self, canvas: &mut Canvas, color: Rgb8) {
        canvas.fill_rect(self.x0, self.y0, self.x1, self.y1, color);
    }

    /// The area left for text after `padding` on every side.
    fn text_box(&self, padding: f32) -> LayoutBox {
        LayoutBox::new(
            self.x0 as f32 + padding,
            self.y0 as f32 + padding,
            (self.width() as f32 - 2.0 * padding).max(0.0),
            (self.height() as f32 - 2.0 * padding).max(0.0),
        )
    }
}

/// Where every part of a card goes for a given [`CardStyle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CardRegions {
    /// Thickness of the border ring in pixels.
    pub border: i32,
    /// Title bar with name and cost.
    pub title: Rect,
    /// Art placeholder.
    pub art: Rect,
    /// Type line.
    pub type_line: Rect,
    /// Rules box.
    pub rules: Rect,
    /// Stat box, bottom right.
    pub stats: Rect,
}

impl CardRegions {
    /// Places every region for `style`.
    pub fn new(style: &CardStyle) -> Self {
        let width = Canvas::WIDTH as f32;
        let border = ((style.border_width * width).round() as i32).max(0);
        let inset = (style.inset * width).round() as i32;
        let left = border + inset;
        let right = Canvas::WIDTH as i32 - 1 - border - inset;
        let band = |band: Band| {
            let (top, bottom) = band.rows();
            Rect::new(left, top, right, bottom)
        };
        let stats_width = (style.stats_width * width).round() as i32;
        let (stats_top, stats_bottom) = style.stats.rows();
        Self {
            border,
            title: band(style.title),
            art: band(style.art_band),
            type_line: band(style.type_line),
            rules: band(style.rules),
            stats: Rect::new((right - stats_width + 1).max(left), stats_top, right, stats_bottom),
        }
    }

    /// Whether `(x, y)` lies in the border ring.
    pub fn in_border(&self, x: i32, y: i32) -> bool {
        let inner = Rect::new(
            self.border,
            self.border,
            Canvas::WIDTH as i32 - 1 - self.border,
            Canvas::HEIGHT as i32 - 1 - self.border,
        );
        let canvas = Rect::new(0, 0, Canvas::WIDTH as i32 - 1, Canvas::HEIGHT as i32 - 1);
        canvas.contains(x, y) && !inner.contains(x, y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Align {
    Start,
    Center,
    End,
}

/// Renders [`CardEntry`] values onto canvases and into files.
#[derive(Clone, Debug, Default)]
pub struct CardComposer {
    style: CardStyle,
}

impl CardComposer {
    /// A composer with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// A composer with a custom style.
    pub fn with_style(style: CardStyle) -> Self {
        Self { style }
    }

    /// The style in use.
    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    /// The region layout for the current style.
    pub fn regions(&self) -> CardRegions {
        CardRegions::new(&self.style)
    }

    /// The border color for a mana cost.
    pub fn border_color(&self, cost: &str) -> Rgb8 {
        self.style
            .palette
            .border_for(ColorIdentity::from_cost(cost))
    }

    /// Paints `entry` onto a fresh canvas.
    pub fn compose(&self, entry: &CardEntry) -> Canvas {
        let style = &self.style;
        let regions = self.regions();
        let identity = entry.mana_cost().colors();
        let border = style.palette.border_for(identity);
        log::debug!(
            "composing {:?}: identity {identity}, border {border:?}",
            entry.display_name()
        );

        let mut canvas = Canvas::new(style.frame);

        // Title bar: the cost takes the space it needs on the right, the name gets the rest.
        regions.title.fill(&mut canvas, style.bar);
        let title = regions.title.text_box(style.padding);
        let cost_width = self.label(&mut canvas, &entry.cost, title, Align::End);
        let name_box = LayoutBox {
            width: (title.width - cost_width - 2.0 * style.padding).max(0.0),
            ..title
        };
        self.label(&mut canvas, entry.display_name(), name_box, Align::Start);

        self.paint_art(&mut canvas, regions.art);

        regions.type_line.fill(&mut canvas, style.bar);
        self.label(
            &mut canvas,
            &entry.type_line,
            regions.type_line.text_box(style.padding),
            Align::Start,
        );

        regions.rules.fill(&mut canvas, style.text_box);
        let rules_box = regions
            .rules
            .text_box(style.padding)
            .with_spacing(style.char_spacing)
            .with_line_spacing(style.line_spacing);
        if let Some(fit) = RatioFit::plan(&entry.text, &rules_box, style.rules_aspect) {
            log::debug!(
                "rules text: {} lines, cells {:.1}x{:.1}",
                fit.line_count,
                fit.cell_width,
                fit.cell_height
            );
            fit.render(&mut canvas, &entry.text, &rules_box, style.ink);
        }

        if let Some(stats) = entry.stats() {
            let rect = regions.stats;
            rect.fill(&mut canvas, style.bar);
            for (x1, y1, x2, y2) in [
                (rect.x0, rect.y0, rect.x1, rect.y0),
                (rect.x1, rect.y0, rect.x1, rect.y1),
                (rect.x1, rect.y1, rect.x0, rect.y1),
                (rect.x0, rect.y1, rect.x0, rect.y0),
            ] {
                canvas.draw_line(x1, y1, x2, y2, style.ink);
            }
            self.label(&mut canvas, &stats, rect.text_box(style.padding), Align::Center);
        }

        paint_border(&mut canvas, regions.border, border);
        canvas
    }

    /// Renders `entry` into `dir`, named after the card, and returns the written path.
    ///
    /// A file with the same name is replaced.
    pub fn render_to_file(&self, entry: &CardEntry, dir: impl AsRef<Path>) -> Result<PathBuf, Error> {
        let path = dir.as_ref().join(entry.file_name());
        let canvas = self.compose(entry);
        save_farbfeld(&canvas, &path)?;
        log::info!("rendered {}", path.display());
        Ok(path)
    }

    /// Renders every entry into `dir`, one file each, in order.
    ///
    /// A failure is logged and returned in its slot; the remaining entries are still
    /// rendered.
    pub fn render_cards<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a CardEntry>,
        dir: impl AsRef<Path>,
    ) -> Vec<Result<PathBuf, Error>> {
        let dir = dir.as_ref();
        entries
            .into_iter()
            .map(|entry| {
                let result = self.render_to_file(entry, dir);
                if let Err(err) = &result {
                    log::warn!("skipping {:?}: {err}", entry.display_name());
                }
                result
            })
            .collect()
    }

    /// Draws a one-line label sized from the box height, and returns the width it used.
    ///
    /// Characters keep [`CardStyle::label_aspect`] unless the box is too narrow, in which
    /// case they are squeezed to fit.
    fn label(&self, canvas: &mut Canvas, text: &str, layout_box: LayoutBox, align: Align) -> f32 {
        let len = text.chars().count();
        if len == 0 {
            return 0.0;
        }
        let spacing = self.style.char_spacing;
        let natural =
            len as f32 * layout_box.height * self.style.label_aspect + (len - 1) as f32 * spacing;
        let width = natural.min(layout_box.width).max(0.0);
        let x = match align {
            Align::Start => layout_box.x,
            Align::Center => layout_box.x + (layout_box.width - width) / 2.0,
            Align::End => layout_box.right() - width,
        };
        let label_box = LayoutBox::new(x, layout_box.y, width, layout_box.height).with_spacing(spacing);
        layout_line(canvas, text, &label_box, self.style.ink);
        width
    }

    fn paint_art(&self, canvas: &mut Canvas, rect: Rect) {
        let style = &self.style;
        rect.fill(canvas, style.art);
        let half = style.outline_width / 2;
        let (x0, y0, x1, y1) = (rect.x0 + half, rect.y0 + half, rect.x1 - half, rect.y1 - half);
        canvas.draw_thick_line(x0, y0, x1, y0, style.outline_width, style.art_outline);
        canvas.draw_thick_line(x1, y0, x1, y1, style.outline_width, style.art_outline);
        canvas.draw_thick_line(x1, y1, x0, y1, style.outline_width, style.art_outline);
        canvas.draw_thick_line(x0, y1, x0, y0, style.outline_width, style.art_outline);
        canvas.draw_line(x0, y0, x1, y1, style.art_outline);
        canvas.draw_line(x0, y1, x1, y0, style.art_outline);
    }
}

fn paint_border(canvas: &mut Canvas, width: i32, color: Rgb8) {
    if width <= 0 {
        return;
    }
    let right = Canvas::WIDTH as i32 - 1;
    let bottom = Canvas::HEIGHT as i32 - 1;
    canvas.fill_rect(0, 0, right, width - 1, color);
    canvas.fill_rect(0, bottom - width + 1, right, bottom, color);
    canvas.fill_rect(0, 0, width - 1, bottom, color);
    canvas.fill_rect(right - width + 1, 0, right, bottom, color);
}

/// Paints `entry` with the default style.
pub fn render_card(entry: &CardEntry) -> Canvas {
    CardComposer::new().compose(entry)
}

/// Renders every entry into `dir` with the default style.
///
/// See [`CardComposer::render_cards`].
pub fn render_cards<'a>(
    entries: impl IntoIterator<Item = &'a CardEntry>,
    dir: impl AsRef<Path>,
) -> Vec<Result<PathBuf, Error>> {
    CardComposer::new().render_cards(entries, dir)
}

#[cfg(test)]
mod tests {
    use super::{Band, BorderPalette, CardComposer, CardStyle, Rect};
    use crate::{CardEntry, Canvas, ColorIdentity, ManaColor, Rgb8};

    #[test]
    fn border_follows_color_identity() {
        let composer = CardComposer::new();
        let palette = BorderPalette::default();
        assert_eq!(composer.border_color("1R"), palette.red);
        assert_eq!(composer.border_color("WU"), palette.gold);
        assert_eq!(composer.border_color(""), palette.gray);
        assert_eq!(composer.border_color("3"), palette.gray);
        assert_eq!(composer.border_color("GGG"), palette.green);
        assert_eq!(composer.border_color("2W/B"), palette.gold);
    }

    #[test]
    fn each_single_color_has_its_constant() {
        let palette = BorderPalette::default();
        for color in ManaColor::ALL {
            let identity = ColorIdentity::COLORLESS.with(color);
            assert_eq!(palette.border_for(identity), palette.color(color));
        }
    }

    #[test]
    fn regions_stay_inside_border() {
        let regions = CardComposer::new().regions();
        assert_eq!(regions.border, 17);
        let inner = Rect::new(
            regions.border,
            regions.border,
            Canvas::WIDTH as i32 - 1 - regions.border,
            Canvas::HEIGHT as i32 - 1 - regions.border,
        );
        let all = [regions.title, regions.art, regions.type_line, regions.rules, regions.stats];
        for rect in all {
            assert!(rect.width() > 0 && rect.height() > 0, "{rect:?} is empty");
            assert!(inner.contains(rect.x0, rect.y0), "{rect:?} starts in the border");
            assert!(inner.contains(rect.x1, rect.y1), "{rect:?} ends in the border");
        }
        // Stacked top to bottom without overlap.
        for pair in all.windows(2) {
            assert!(pair[0].y1 < pair[1].y0, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
        assert!(regions.art.height() > regions.rules.height());
    }

    #[test]
    fn band_rows_round_to_pixels() {
        assert_eq!(Band::new(0.0, 1.0).rows(), (0, 522));
        assert_eq!(Band::new(0.5, 0.5).rows(), (262, 262), "empty bands keep one row");
    }

    #[test]
    fn border_ring_is_painted_over_text() {
        // A rules text that overflows its box horizontally.
        let entry = CardEntry::new("W", "W", "W", "WWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWW\nW");
        let composer = CardComposer::new();
        let canvas = composer.compose(&entry);
        let regions = composer.regions();
        let border = BorderPalette::default().white;
        for y in 0..Canvas::HEIGHT as i32 {
            for x in 0..Canvas::WIDTH as i32 {
                if regions.in_border(x, y) {
                    assert_eq!(canvas.pixel(x, y), Some(border), "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn stat_box_only_with_stats() {
        let composer = CardComposer::new();
        let stats = composer.regions().stats;
        let bar = composer.style().bar;
        let plain = composer.compose(&CardEntry::new("Bolt", "R", "Instant", ""));
        assert_eq!(plain.pixel(stats.x0 + 2, stats.y0 + 2), Some(composer.style().frame));

        let bear = CardEntry::new("Bear", "1G", "Creature", "").with_power_toughness("2", "2");
        let canvas = composer.compose(&bear);
        assert_eq!(canvas.pixel(stats.x0, stats.y0), Some(composer.style().ink));
        assert_eq!(canvas.pixel(stats.x0 + 1, stats.y0 + 1), Some(bar));
    }

    #[test]
    fn custom_style_is_used() {
        let style = CardStyle {
            border_width: 0.0,
            frame: Rgb8::new(1, 2, 3),
            ..CardStyle::default()
        };
        let composer = CardComposer::with_style(style);
        assert_eq!(composer.regions().border, 0);
        let canvas = composer.compose(&CardEntry::default());
        assert_eq!(canvas.pixel(0, 0), Some(Rgb8::new(1, 2, 3)));
    }
}
