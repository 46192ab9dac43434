// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use std::io;
use std::path::{Path, PathBuf};

type Source = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Error type for writing and reading card images.
///
/// Carries a non-exhaustive [`ErrorKind`] plus whatever context was available: the file
/// involved, byte counts for malformed input, and the underlying cause.
#[derive(Debug)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The file being written or read, if any.
    path: Option<PathBuf>,

    /// For [`ErrorKind::Truncated`], the number of bytes required.
    expected: usize,

    /// For [`ErrorKind::Truncated`], the number of bytes present.
    found: usize,

    /// For [`ErrorKind::UnsupportedSize`], the width and height found.
    size: (u32, u32),

    /// The lower-level error, if any.
    source: Option<Source>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The file involved, if the error came from the filesystem.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: None,
            expected: 0,
            found: 0,
            size: (0, 0),
            source: None,
        }
    }

    pub(crate) fn open(path: &Path, source: io::Error) -> Self {
        Self {
            path: Some(path.to_path_buf()),
            source: Some(Box::new(source)),
            ..Self::new(ErrorKind::Open)
        }
    }

    pub(crate) fn write(path: Option<&Path>, source: io::Error) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            source: Some(Box::new(source)),
            ..Self::new(ErrorKind::Write)
        }
    }

    #[cfg(feature = "png")]
    pub(crate) fn encode(path: Option<&Path>, source: Source) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            source: Some(source),
            ..Self::new(ErrorKind::Encode)
        }
    }

    pub(crate) fn invalid_magic() -> Self {
        Self::new(ErrorKind::InvalidMagic)
    }

    pub(crate) fn truncated(expected: usize, found: usize) -> Self {
        Self {
            expected,
            found,
            ..Self::new(ErrorKind::Truncated)
        }
    }

    pub(crate) fn unsupported_size(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..Self::new(ErrorKind::UnsupportedSize)
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::Open => write!(f, "cannot open {}", self.display_path()),
            ErrorKind::Write => write!(f, "failed writing {}", self.display_path()),
            ErrorKind::Encode => write!(f, "failed encoding {}", self.display_path()),
            ErrorKind::InvalidMagic => f.write_str("not a farbfeld image: bad magic"),
            ErrorKind::Truncated => write!(
                f,
                "truncated farbfeld image: need {} bytes, found {}",
                self.expected, self.found
            ),
            ErrorKind::UnsupportedSize => {
                write!(f, "unsupported image size {}x{}", self.size.0, self.size.1)
            }
        }
    }
}

impl Error {
    fn display_path(&self) -> alloc::borrow::Cow<'_, str> {
        match &self.path {
            Some(path) => path.to_string_lossy(),
            None => "image".into(),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn core::error::Error + 'static))
    }
}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The destination file could not be created. Nothing was written.
    Open,

    /// Writing image data failed part way.
    Write,

    /// The PNG encoder rejected the image.
    Encode,

    /// The data does not start with the farbfeld magic.
    InvalidMagic,

    /// The data ends before the header or the pixels it announces.
    Truncated,

    /// The image is not the size of a card canvas.
    UnsupportedSize,
}
