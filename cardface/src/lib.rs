// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cardface renders card-game entries onto a fixed-size raster and writes them out as
//! [farbfeld] images.
//!
//! Text is drawn with a built-in stroke font (see [`cardface_font`]): every printable ASCII
//! character is up to five straight lines in a unit square, rasterized with a plain
//! Bresenham line. There is no anti-aliasing and no kerning.
//!
//! The pieces, from the bottom up:
//!
//! - [`Canvas`]: the 375x523 RGB pixel grid and its drawing primitives.
//! - [`draw_char`]: one glyph into one cell.
//! - [`layout`]: strings into boxes, including the ratio-fitting layout for rules text.
//! - [`CardComposer`]: a whole [`CardEntry`] onto a canvas, with a border colored by the
//!   mana cost.
//! - [`farbfeld`]: encoding canvases to files and back.
//!
//! ```no_run
//! use cardface::{CardEntry, CardComposer};
//!
//! let bolt = CardEntry::new("Bolt", "R", "Instant", "Deal 3 damage.");
//! let path = CardComposer::new().render_to_file(&bolt, "cards")?;
//! assert!(path.ends_with("Bolt.ff"));
//! # Ok::<(), cardface::Error>(())
//! ```
//!
//! ## Features
//!
//! - `png`: Enables `save_png` and `write_png` through the [`png`](https://docs.rs/png) crate.
//!
//! [farbfeld]: https://tools.suckless.org/farbfeld/

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

extern crate alloc;

mod canvas;
mod card;
mod color;
mod compose;
mod error;
mod glyph;
mod impl_bytemuck;
#[cfg(feature = "png")]
mod png_export;

pub mod farbfeld;
pub mod layout;

pub use cardface_font;

pub use canvas::Canvas;
pub use card::{CardEntry, ColorIdentity, ManaColor, ManaCost};
pub use color::Rgb8;
pub use compose::{
    render_card, render_cards, Band, BorderPalette, CardComposer, CardRegions, CardStyle, Rect,
};
pub use error::{Error, ErrorKind};
pub use farbfeld::{decode_farbfeld, encode_farbfeld, save_farbfeld, write_farbfeld};
pub use glyph::{draw_char, StrokeRenderer};
pub use layout::{layout_breaking, layout_line, layout_ratio_fit, LayoutBox, RatioFit};

#[cfg(feature = "png")]
pub use png_export::{save_png, write_png};
