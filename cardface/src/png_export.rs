// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! PNG export, for viewers that do not read farbfeld.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{Canvas, Error};

fn encode_error(path: Option<&Path>, err: png::EncodingError) -> Error {
    match err {
        png::EncodingError::IoError(err) => Error::write(path, err),
        other => Error::encode(path, other.into()),
    }
}

fn encode<W: Write>(canvas: &Canvas, writer: W, path: Option<&Path>) -> Result<(), Error> {
    let mut encoder = png::Encoder::new(writer, Canvas::WIDTH, Canvas::HEIGHT);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|err| encode_error(path, err))?;
    writer
        .write_image_data(canvas.as_bytes())
        .map_err(|err| encode_error(path, err))?;
    writer.finish().map_err(|err| encode_error(path, err))
}

/// Writes `canvas` as an 8-bit RGB PNG to `writer`.
pub fn write_png<W: Write>(canvas: &Canvas, writer: W) -> Result<(), Error> {
    encode(canvas, writer, None)
}

/// Writes `canvas` as a PNG file at `path`, replacing any existing file.
pub fn save_png(canvas: &Canvas, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|err| Error::open(path, err))?;
    encode(canvas, BufWriter::new(file), Some(path))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
