// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading and writing the [farbfeld] image format.
//!
//! A farbfeld file is the 8-byte magic `farbfeld`, the width and height as big-endian `u32`,
//! then every pixel row-major as four big-endian `u16` channels (RGBA). Canvas channels are
//! 8-bit, so each is widened by repeating its byte, and alpha is always `0xFFFF`.
//!
//! [farbfeld]: https://tools.suckless.org/farbfeld/

use alloc::vec::Vec;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::{Canvas, Error, Rgb8};

/// The magic every farbfeld file starts with.
pub const MAGIC: [u8; 8] = *b"farbfeld";

/// The length of the header: magic, width and height.
pub const HEADER_LEN: usize = 16;

const BYTES_PER_PIXEL: usize = 8;

/// The dimensions stored in a farbfeld header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FarbfeldHeader {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FarbfeldHeader {
    /// The header describing a [`Canvas`].
    pub const CANVAS: Self = Self {
        width: Canvas::WIDTH,
        height: Canvas::HEIGHT,
    };

    /// Reads the header at the start of `bytes`.
    pub fn parse(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < MAGIC.len() || bytes[..MAGIC.len()] != MAGIC {
            // A short prefix of the magic is still a farbfeld stream, just cut off.
            if bytes.len() < MAGIC.len() && MAGIC.starts_with(bytes) {
                return Err(Error::truncated(HEADER_LEN, bytes.len()));
            }
            return Err(Error::invalid_magic());
        }
        let Some(header) = bytes.get(..HEADER_LEN) else {
            return Err(Error::truncated(HEADER_LEN, bytes.len()));
        };
        let word = |at: usize| u32::from_be_bytes([header[at], header[at + 1], header[at + 2], header[at + 3]]);
        Ok(Self {
            width: word(8),
            height: word(12),
        })
    }

    /// The header bytes.
    pub fn to_bytes(self) -> [u8; HEADER_LEN] {
        let mut bytes = [0; HEADER_LEN];
        bytes[..8].copy_from_slice(&MAGIC);
        bytes[8..12].copy_from_slice(&self.width.to_be_bytes());
        bytes[12..].copy_from_slice(&self.height.to_be_bytes());
        bytes
    }

    /// The size of a whole file with these dimensions.
    pub fn file_len(self) -> usize {
        HEADER_LEN + self.width as usize * self.height as usize * BYTES_PER_PIXEL
    }
}

fn encode_pixel(pixel: Rgb8) -> [u8; BYTES_PER_PIXEL] {
    let Rgb8 { r, g, b } = pixel;
    [r, r, g, g, b, b, 0xFF, 0xFF]
}

/// Writes `canvas` as farbfeld to `writer`.
///
/// The writer is not buffered here; wrap unbuffered sinks in a [`BufWriter`].
pub fn write_farbfeld<W: Write>(canvas: &Canvas, mut writer: W) -> io::Result<()> {
    writer.write_all(&FarbfeldHeader::CANVAS.to_bytes())?;
    for &pixel in canvas.pixels() {
        writer.write_all(&encode_pixel(pixel))?;
    }
    writer.flush()
}

/// Encodes `canvas` as farbfeld in memory.
pub fn encode_farbfeld(canvas: &Canvas) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(FarbfeldHeader::CANVAS.file_len());
    bytes.extend_from_slice(&FarbfeldHeader::CANVAS.to_bytes());
    bytes.extend(canvas.pixels().iter().flat_map(|&pixel| encode_pixel(pixel)));
    bytes
}

/// Writes `canvas` as a farbfeld file at `path`, replacing any existing file.
///
/// If the file cannot be created nothing is written and [`ErrorKind::Open`] is returned.
/// A failure after that leaves whatever was flushed so far and returns
/// [`ErrorKind::Write`]. The file is closed on every path.
///
/// [`ErrorKind::Open`]: crate::ErrorKind::Open
/// [`ErrorKind::Write`]: crate::ErrorKind::Write
pub fn save_farbfeld(canvas: &Canvas, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|err| Error::open(path, err))?;
    write_farbfeld(canvas, BufWriter::new(file)).map_err(|err| Error::write(Some(path), err))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Decodes a farbfeld image back into a [`Canvas`].
///
/// Only card-sized images are accepted. Alpha is ignored and each channel keeps its high
/// byte.
pub fn decode_farbfeld(bytes: &[u8]) -> Result<Canvas, Error> {
    let header = FarbfeldHeader::parse(bytes)?;
    if header != FarbfeldHeader::CANVAS {
        return Err(Error::unsupported_size(header.width, header.height));
    }
    let Some(data) = bytes.get(HEADER_LEN..header.file_len()) else {
        return Err(Error::truncated(header.file_len(), bytes.len()));
    };
    let pixels = data
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|px| Rgb8::new(px[0], px[2], px[4]))
        .collect();
    Canvas::from_pixels(pixels).ok_or_else(|| Error::truncated(header.file_len(), bytes.len()))
}
