// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Binary PPM (`P6`) reader.
//!
//! ```text
//! P6 <ws> width <ws> height <ws> maxval <ws-run> <width * height RGB triplets>
//! ```
//!
//! Header tokens may be separated by any whitespace run and by `#` comments that run to
//! the end of the line. Only `maxval == 255` (one byte per sample) is supported. The
//! whole whitespace run after `maxval` is skipped before the pixel data starts.
//!
//! More info:
//! - <https://netpbm.sourceforge.net/doc/ppm.html>

use crate::{
    InlineString, MalformedInputKind, RgbColor, TermGlyphError, TermGlyphResult,
    try_allocate_buffer,
};
use std::io::{BufRead, Read};

pub const PPM_MAGIC: &[u8; 2] = b"P6";
pub const SUPPORTED_MAX_VALUE: u32 = 255;
pub const BYTES_PER_PIXEL: usize = 3;

/// A decoded bitmap. The dimensions are never zero and `samples` always holds exactly
/// `width * height` RGB triplets, row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpmImage {
    width: usize,
    height: usize,
    samples: Vec<u8>,
}

impl PpmImage {
    /// Builds an image from raw RGB samples. Samples past `width * height` triplets are
    /// dropped, the same way [`PpmImage::parse`] ignores trailing bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero, or the sample count overflows `usize`
    ///   ([`MalformedInputKind::InvalidDimensions`])
    /// - `samples` is too short ([`MalformedInputKind::TruncatedPixelData`])
    pub fn try_new(
        width: usize,
        height: usize,
        mut samples: Vec<u8>,
    ) -> TermGlyphResult<Self> {
        let expected = sample_count(width, height)?;
        if samples.len() < expected {
            return Err(MalformedInputKind::TruncatedPixelData {
                expected,
                found: samples.len(),
            }
            .into());
        }
        samples.truncate(expected);
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Reads one `P6` bitmap from `reader`. Bytes after the pixel data are left unread.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The magic is not `P6`, or a header field is missing or not a decimal number
    /// - The max value is not 255, or the dimensions are unusable
    /// - There are fewer pixel bytes than the dimensions need
    /// - Reading fails ([`TermGlyphError::Io`])
    /// - The pixel buffer can't be allocated
    pub fn parse(reader: &mut impl BufRead) -> TermGlyphResult<Self> {
        let mut magic = [0_u8; 2];
        let found = read_up_to(reader, &mut magic)?;
        if &magic[..found] != PPM_MAGIC {
            return Err(MalformedInputKind::BadMagic {
                found: String::from_utf8_lossy(&magic[..found]).as_ref().into(),
            }
            .into());
        }

        let width = read_header_number(reader, "width")?;
        let height = read_header_number(reader, "height")?;
        let max_value = read_header_number(reader, "maxval")?;
        if max_value != SUPPORTED_MAX_VALUE {
            return Err(MalformedInputKind::UnsupportedMaxValue { found: max_value }.into());
        }

        let width = usize::try_from(width).unwrap_or(usize::MAX);
        let height = usize::try_from(height).unwrap_or(usize::MAX);
        let expected = sample_count(width, height)?;

        skip_whitespace(reader)?;

        let mut samples = try_allocate_buffer(expected)?;
        reader
            .by_ref()
            .take(u64::try_from(expected).unwrap_or(u64::MAX))
            .read_to_end(&mut samples)
            .map_err(|source| TermGlyphError::Io { source })?;

        Self::try_new(width, height, samples)
    }

    /// # Errors
    ///
    /// Same as [`PpmImage::parse`].
    pub fn from_bytes(bytes: &[u8]) -> TermGlyphResult<Self> {
        let mut reader = bytes;
        Self::parse(&mut reader)
    }

    #[must_use]
    pub fn width(&self) -> usize { self.width }

    #[must_use]
    pub fn height(&self) -> usize { self.height }

    #[must_use]
    pub fn samples(&self) -> &[u8] { &self.samples }

    pub fn pixels(&self) -> impl Iterator<Item = RgbColor> + '_ {
        self.samples
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|it| RgbColor::new(it[0], it[1], it[2]))
    }

    /// Each row's pixels, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = RgbColor> + '_> + '_ {
        self.samples
            .chunks_exact(self.width * BYTES_PER_PIXEL)
            .map(|row| {
                row.chunks_exact(BYTES_PER_PIXEL)
                    .map(|it| RgbColor::new(it[0], it[1], it[2]))
            })
    }
}

/// Number of sample bytes a `width` by `height` image holds.
fn sample_count(width: usize, height: usize) -> TermGlyphResult<usize> {
    let invalid =
        || TermGlyphError::from(MalformedInputKind::InvalidDimensions { width, height });
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    width
        .checked_mul(height)
        .and_then(|it| it.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(invalid)
}

/// Whitespace as C's `isspace` sees it, which includes vertical tab and form feed.
fn is_header_whitespace(it: u8) -> bool {
    matches!(it, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn peek(reader: &mut impl BufRead) -> TermGlyphResult<Option<u8>> {
    let buffer = reader
        .fill_buf()
        .map_err(|source| TermGlyphError::Io { source })?;
    Ok(buffer.first().copied())
}

fn read_up_to(reader: &mut impl BufRead, dst: &mut [u8]) -> TermGlyphResult<usize> {
    let mut count = 0;
    for slot in dst.iter_mut() {
        let Some(it) = peek(reader)? else { break };
        *slot = it;
        reader.consume(1);
        count += 1;
    }
    Ok(count)
}

fn skip_whitespace(reader: &mut impl BufRead) -> TermGlyphResult<()> {
    while peek(reader)?.is_some_and(is_header_whitespace) {
        reader.consume(1);
    }
    Ok(())
}

/// Skips whitespace and comments, then reads one decimal header field.
fn read_header_number(reader: &mut impl BufRead, name: &'static str) -> TermGlyphResult<u32> {
    let missing = || TermGlyphError::from(MalformedInputKind::MissingHeaderToken { name });

    loop {
        match peek(reader)? {
            None => return Err(missing()),
            Some(it) if is_header_whitespace(it) => reader.consume(1),
            Some(b'#') => loop {
                let Some(it) = peek(reader)? else {
                    return Err(missing());
                };
                reader.consume(1);
                if it == b'\n' {
                    break;
                }
            },
            Some(_) => break,
        }
    }

    let mut token = InlineString::new();
    while let Some(it) = peek(reader)? {
        if is_header_whitespace(it) || it == b'#' {
            break;
        }
        token.push(char::from(it));
        reader.consume(1);
    }

    let invalid = || {
        TermGlyphError::from(MalformedInputKind::InvalidHeaderToken {
            name,
            found: token.clone(),
        })
    };
    if !token.bytes().all(|it| it.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse::<u32>().map_err(|_| invalid())
}
