// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parser for one `printf` conversion: `%[flags][width][.precision][length]conversion`.
//!
//! | Part        | Accepted                                   |
//! |-------------|--------------------------------------------|
//! | flags       | `-` `+` space `0` `#`, any order, repeated |
//! | width       | decimal digits, or `*`                     |
//! | precision   | `.` then decimal digits (empty means 0), or `.*` |
//! | length      | `hh h l ll j z t L q`, parsed and ignored  |
//! | conversion  | `d i u o x X c s f F e E g G p %`          |

use crate::{TermGlyphError, TermGlyphResult};

pub const SUPPORTED_CONVERSIONS: &[u8] = b"diuoxXcsfFeEgGp%";

const LENGTH_MODIFIERS: &[u8] = b"hljztLq";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionFlags {
    /// `-`
    pub left_justify: bool,
    /// `+`
    pub force_sign: bool,
    /// ` `
    pub space_sign: bool,
    /// `0`
    pub zero_pad: bool,
    /// `#`
    pub alternate: bool,
}

/// A width or precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Fixed(usize),
    /// `*`: taken from the next argument.
    FromArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSpec {
    pub flags: ConversionFlags,
    pub width: Option<Count>,
    pub precision: Option<Count>,
    pub conversion: u8,
    /// Bytes from the `%` through the conversion character.
    pub len: usize,
}

impl ConversionSpec {
    #[must_use]
    pub fn is_literal_percent(&self) -> bool { self.conversion == b'%' }
}

/// Parses the conversion at the start of `bytes`, which must begin with `%`. `offset`
/// is where `bytes` starts in the whole format, for error reporting.
///
/// # Errors
///
/// Returns [`TermGlyphError::InvalidScalarFormat`] if the conversion is incomplete,
/// unsupported, or its width or precision overflows.
pub fn parse_conversion_spec(bytes: &[u8], offset: usize) -> TermGlyphResult<ConversionSpec> {
    debug_assert_eq!(bytes.first(), Some(&b'%'));
    let mut index = 1;

    let mut flags = ConversionFlags::default();
    while let Some(it) = bytes.get(index) {
        match it {
            b'-' => flags.left_justify = true,
            b'+' => flags.force_sign = true,
            b' ' => flags.space_sign = true,
            b'0' => flags.zero_pad = true,
            b'#' => flags.alternate = true,
            _ => break,
        }
        index += 1;
    }

    let width = parse_count(bytes, &mut index, offset)?;

    let precision = if bytes.get(index) == Some(&b'.') {
        index += 1;
        Some(parse_count(bytes, &mut index, offset)?.unwrap_or(Count::Fixed(0)))
    } else {
        None
    };

    while bytes
        .get(index)
        .is_some_and(|it| LENGTH_MODIFIERS.contains(it))
    {
        index += 1;
    }

    let Some(&conversion) = bytes.get(index) else {
        return Err(TermGlyphError::invalid_scalar_format(
            offset,
            "truncated conversion spec",
        ));
    };
    if !SUPPORTED_CONVERSIONS.contains(&conversion) {
        return Err(TermGlyphError::invalid_scalar_format(
            offset,
            &format!("unsupported conversion {:?}", char::from(conversion)),
        ));
    }

    Ok(ConversionSpec {
        flags,
        width,
        precision,
        conversion,
        len: index + 1,
    })
}

fn parse_count(
    bytes: &[u8],
    index: &mut usize,
    offset: usize,
) -> TermGlyphResult<Option<Count>> {
    if bytes.get(*index) == Some(&b'*') {
        *index += 1;
        return Ok(Some(Count::FromArg));
    }

    let mut acc: Option<usize> = None;
    while let Some(digit) = bytes.get(*index).filter(|it| it.is_ascii_digit()) {
        let value = acc
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|it| it.checked_add(usize::from(digit - b'0')))
            .ok_or_else(|| {
                TermGlyphError::invalid_scalar_format(offset, "width or precision overflows")
            })?;
        acc = Some(value);
        *index += 1;
    }
    Ok(acc.map(Count::Fixed))
}
