// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The default [`ScalarFormatEngine`], following C `printf` semantics over typed
//! arguments.
//!
//! Widths and precisions count bytes, not terminal columns. Integers are formatted from
//! [`FormatArg::Int`], [`FormatArg::UInt`], [`FormatArg::Char`] (its code point) or
//! [`FormatArg::Rgb`] (its packed `0xRRGGBB` value). Floating point conversions also take
//! integers. Anything else is reported as [`TermGlyphError::InvalidScalarFormat`]
//! rather than reinterpreted.

use crate::{
    ConversionFlags, ConversionSpec, Count, FormatArg, InlineString, ScalarFormatEngine,
    TermGlyphError, TermGlyphResult, parse_conversion_spec,
};
use std::io::Write;

pub const DEFAULT_FLOAT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, Default)]
pub struct PrintfEngine;

impl PrintfEngine {
    /// Formats `resolved` into a new buffer without touching any sink.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A conversion is malformed or unsupported
    /// - An argument is missing or does not fit its conversion
    /// - The output buffer can't be grown
    pub fn format_to_vec(&self, resolved: &[u8], args: &[FormatArg]) -> TermGlyphResult<Vec<u8>> {
        let mut acc = Vec::with_capacity(resolved.len());
        let mut args = ArgQueue { args, position: 0 };

        let mut read = 0;
        while read < resolved.len() {
            let run_end = resolved[read..]
                .iter()
                .position(|it| *it == b'%')
                .map_or(resolved.len(), |it| read + it);
            acc.extend_from_slice(&resolved[read..run_end]);
            read = run_end;
            if read == resolved.len() {
                break;
            }

            let spec = parse_conversion_spec(&resolved[read..], read)?;
            let conversion = Conversion {
                spec,
                text: &resolved[read..read + spec.len],
                offset: read,
            };
            conversion.render_into(&mut acc, &mut args)?;
            read += spec.len;
        }

        Ok(acc)
    }
}

impl ScalarFormatEngine for PrintfEngine {
    fn write_formatted(
        &mut self,
        sink: &mut dyn Write,
        resolved: &[u8],
        args: &[FormatArg],
    ) -> TermGlyphResult<usize> {
        let formatted = self.format_to_vec(resolved, args)?;
        sink.write_all(&formatted)
            .map_err(|source| TermGlyphError::UnderlyingWriteFailure { source })?;
        Ok(formatted.len())
    }
}

struct ArgQueue<'a> {
    args: &'a [FormatArg],
    position: usize,
}

impl<'a> ArgQueue<'a> {
    fn next(&mut self, conversion: &Conversion<'_>) -> TermGlyphResult<&'a FormatArg> {
        let arg = self.args.get(self.position).ok_or_else(|| {
            conversion.error(&format!("missing argument for '{}'", conversion.text()))
        })?;
        self.position += 1;
        Ok(arg)
    }

    /// The value of a `*` width or precision.
    fn next_count(&mut self, conversion: &Conversion<'_>) -> TermGlyphResult<i64> {
        match self.next(conversion)? {
            FormatArg::Int(it) => Ok(*it),
            FormatArg::UInt(it) => Ok(i64::try_from(*it).unwrap_or(i64::MAX)),
            other => Err(conversion.error(&format!(
                "'*' in '{}' needs an integer, got {}",
                conversion.text(),
                other.kind_name()
            ))),
        }
    }
}

struct Conversion<'a> {
    spec: ConversionSpec,
    text: &'a [u8],
    offset: usize,
}

impl Conversion<'_> {
    fn text(&self) -> std::borrow::Cow<'_, str> { String::from_utf8_lossy(self.text) }

    fn error(&self, reason: &str) -> TermGlyphError {
        TermGlyphError::invalid_scalar_format(self.offset, reason)
    }

    fn mismatch(&self, arg: &FormatArg) -> TermGlyphError {
        self.error(&format!("'{}' cannot format {}", self.text(), arg.kind_name()))
    }

    fn render_into(&self, acc: &mut Vec<u8>, args: &mut ArgQueue<'_>) -> TermGlyphResult<()> {
        if self.spec.is_literal_percent() {
            acc.push(b'%');
            return Ok(());
        }

        let mut flags = self.spec.flags;
        let width = match self.spec.width {
            None => 0,
            Some(Count::Fixed(it)) => it,
            Some(Count::FromArg) => {
                let value = args.next_count(self)?;
                if value < 0 {
                    flags.left_justify = true;
                }
                usize::try_from(value.unsigned_abs()).unwrap_or(usize::MAX)
            }
        };
        let precision = match self.spec.precision {
            None => None,
            Some(Count::Fixed(it)) => Some(it),
            // A negative precision counts as none at all.
            Some(Count::FromArg) => usize::try_from(args.next_count(self)?).ok(),
        };

        let arg = args.next(self)?;
        let field = match self.spec.conversion {
            b'd' | b'i' => {
                let value = signed_value(arg).ok_or_else(|| self.mismatch(arg))?;
                let digits = apply_integer_precision(value.unsigned_abs().to_string(), precision);
                Field {
                    prefix: sign_prefix(value < 0, &flags),
                    body: digits.into_bytes(),
                    zero_pad_allowed: precision.is_none(),
                }
            }
            conversion @ (b'u' | b'o' | b'x' | b'X') => {
                let value = unsigned_value(arg).ok_or_else(|| self.mismatch(arg))?;
                unsigned_field(conversion, value, precision, &flags)
            }
            b'c' => Field::text(char_bytes(arg).ok_or_else(|| self.mismatch(arg))?),
            b's' => {
                let mut buffer = [0_u8; 4];
                let text: &str = match arg {
                    FormatArg::Str(it) => it.as_str(),
                    FormatArg::Char(it) => it.encode_utf8(&mut buffer),
                    other => return Err(self.mismatch(other)),
                };
                let text = match precision {
                    Some(max) => truncate_at_char_boundary(text, max),
                    None => text,
                };
                Field::text(text.as_bytes().to_vec())
            }
            b'p' => {
                let value = match arg {
                    FormatArg::UInt(it) => *it,
                    #[allow(clippy::cast_sign_loss)]
                    FormatArg::Int(it) => *it as u64,
                    other => return Err(self.mismatch(other)),
                };
                Field::text(format!("{value:#x}").into_bytes())
            }
            conversion => {
                let value = float_value(arg).ok_or_else(|| self.mismatch(arg))?;
                float_field(conversion, value, precision, &flags)
            }
        };

        field.write_into(acc, &flags, width)
    }
}

/// A converted value, before padding to the field width.
struct Field {
    /// Sign or radix prefix. Zero padding goes between this and the body.
    prefix: InlineString,
    body: Vec<u8>,
    zero_pad_allowed: bool,
}

impl Field {
    fn text(body: Vec<u8>) -> Self {
        Self {
            prefix: InlineString::new(),
            body,
            zero_pad_allowed: false,
        }
    }

    fn write_into(
        &self,
        acc: &mut Vec<u8>,
        flags: &ConversionFlags,
        width: usize,
    ) -> TermGlyphResult<()> {
        let content = self.prefix.len() + self.body.len();
        let fill = width.saturating_sub(content);
        acc.try_reserve(content + fill)
            .map_err(|_| TermGlyphError::AllocationFailure {
                requested: content + fill,
            })?;

        if flags.left_justify {
            acc.extend_from_slice(self.prefix.as_bytes());
            acc.extend_from_slice(&self.body);
            acc.extend(std::iter::repeat_n(b' ', fill));
        } else if flags.zero_pad && self.zero_pad_allowed {
            acc.extend_from_slice(self.prefix.as_bytes());
            acc.extend(std::iter::repeat_n(b'0', fill));
            acc.extend_from_slice(&self.body);
        } else {
            acc.extend(std::iter::repeat_n(b' ', fill));
            acc.extend_from_slice(self.prefix.as_bytes());
            acc.extend_from_slice(&self.body);
        }
        Ok(())
    }
}

fn sign_prefix(negative: bool, flags: &ConversionFlags) -> InlineString {
    let mut acc = InlineString::new();
    if negative {
        acc.push('-');
    } else if flags.force_sign {
        acc.push('+');
    } else if flags.space_sign {
        acc.push(' ');
    }
    acc
}

fn signed_value(arg: &FormatArg) -> Option<i128> {
    match arg {
        FormatArg::Int(it) => Some(i128::from(*it)),
        FormatArg::UInt(it) => Some(i128::from(*it)),
        FormatArg::Char(it) => Some(i128::from(u32::from(*it))),
        FormatArg::Rgb(it) => Some(i128::from(it.as_u24())),
        _ => None,
    }
}

/// Negative integers wrap to their two's complement, as in C.
#[allow(clippy::cast_sign_loss)]
fn unsigned_value(arg: &FormatArg) -> Option<u64> {
    match arg {
        FormatArg::Int(it) => Some(*it as u64),
        FormatArg::UInt(it) => Some(*it),
        FormatArg::Char(it) => Some(u64::from(u32::from(*it))),
        FormatArg::Rgb(it) => Some(u64::from(it.as_u24())),
        _ => None,
    }
}

#[allow(clippy::cast_precision_loss)]
fn float_value(arg: &FormatArg) -> Option<f64> {
    match arg {
        FormatArg::Float(it) => Some(*it),
        FormatArg::Int(it) => Some(*it as f64),
        FormatArg::UInt(it) => Some(*it as f64),
        FormatArg::Rgb(it) => Some(f64::from(it.as_u24())),
        _ => None,
    }
}

/// `%c` writes a char as UTF-8, and an integer as the single byte it truncates to.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn char_bytes(arg: &FormatArg) -> Option<Vec<u8>> {
    match arg {
        FormatArg::Char(it) => Some(it.to_string().into_bytes()),
        FormatArg::Int(it) => Some(vec![*it as u8]),
        FormatArg::UInt(it) => Some(vec![*it as u8]),
        _ => None,
    }
}

fn truncate_at_char_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// The precision of an integer conversion is its minimum digit count. Zero formatted
/// with a precision of zero has no digits at all.
fn apply_integer_precision(digits: String, precision: Option<usize>) -> String {
    match precision {
        Some(0) if digits == "0" => String::new(),
        Some(min) if digits.len() < min => {
            let mut acc = "0".repeat(min - digits.len());
            acc.push_str(&digits);
            acc
        }
        _ => digits,
    }
}

fn unsigned_field(
    conversion: u8,
    value: u64,
    precision: Option<usize>,
    flags: &ConversionFlags,
) -> Field {
    let digits = match conversion {
        b'o' => format!("{value:o}"),
        b'x' => format!("{value:x}"),
        b'X' => format!("{value:X}"),
        _ => value.to_string(),
    };
    let mut digits = apply_integer_precision(digits, precision);
    let mut prefix = InlineString::new();
    if flags.alternate {
        match conversion {
            b'o' if !digits.starts_with('0') => digits.insert(0, '0'),
            b'x' if value != 0 => prefix.push_str("0x"),
            b'X' if value != 0 => prefix.push_str("0X"),
            _ => {}
        }
    }
    Field {
        prefix,
        body: digits.into_bytes(),
        zero_pad_allowed: precision.is_none(),
    }
}

fn float_field(
    conversion: u8,
    value: f64,
    precision: Option<usize>,
    flags: &ConversionFlags,
) -> Field {
    let prefix = sign_prefix(value.is_sign_negative() && !value.is_nan(), flags);
    let magnitude = value.abs();

    let mut body = if magnitude.is_nan() {
        String::from("nan")
    } else if magnitude.is_infinite() {
        String::from("inf")
    } else {
        let precision = precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
        match conversion.to_ascii_lowercase() {
            b'e' => scientific(magnitude, precision, flags.alternate),
            b'g' => general(magnitude, precision, flags.alternate),
            _ => fixed(magnitude, precision, flags.alternate),
        }
    };
    if conversion.is_ascii_uppercase() {
        body.make_ascii_uppercase();
    }

    Field {
        prefix,
        body: body.into_bytes(),
        zero_pad_allowed: magnitude.is_finite(),
    }
}

/// `%f`
fn fixed(magnitude: f64, precision: usize, alternate: bool) -> String {
    let mut acc = format!("{magnitude:.precision$}");
    if alternate && precision == 0 {
        acc.push('.');
    }
    acc
}

/// `%e`, with C's signed two digit minimum exponent (`e+05`).
fn scientific(magnitude: f64, precision: usize, alternate: bool) -> String {
    let (mantissa, exponent) = split_scientific(magnitude, precision);
    let mut acc = mantissa;
    if alternate && precision == 0 {
        acc.push('.');
    }
    acc.push('e');
    acc.push(if exponent < 0 { '-' } else { '+' });
    acc.push_str(&format!("{:02}", exponent.unsigned_abs()));
    acc
}

fn split_scientific(magnitude: f64, precision: usize) -> (String, i64) {
    let raw = format!("{magnitude:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            (mantissa.to_string(), exponent.parse().unwrap_or_default())
        }
        None => (raw, 0),
    }
}

/// `%g`: `%e` or `%f` depending on the exponent, with trailing zeros removed unless
/// `#` is given.
fn general(magnitude: f64, precision: usize, alternate: bool) -> String {
    let significant = precision.max(1);
    let exponent = if magnitude == 0.0 {
        0
    } else {
        split_scientific(magnitude, significant - 1).1
    };
    let significant_i64 = i64::try_from(significant).unwrap_or(i64::MAX);

    let mut acc = if (-4..significant_i64).contains(&exponent) {
        let decimals = usize::try_from(significant_i64 - 1 - exponent).unwrap_or_default();
        fixed(magnitude, decimals, alternate)
    } else {
        scientific(magnitude, significant - 1, alternate)
    };
    if !alternate {
        strip_trailing_zeros(&mut acc);
    }
    acc
}

fn strip_trailing_zeros(text: &mut String) {
    let (mantissa, exponent) = match text.find('e') {
        Some(index) => text.split_at(index),
        None => (text.as_str(), ""),
    };
    if !mantissa.contains('.') {
        return;
    }
    let stripped = mantissa.trim_end_matches('0').trim_end_matches('.');
    *text = format!("{stripped}{exponent}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FormatArgs, tg_args, tg_rgb};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn render(format: &str, args: &FormatArgs) -> String {
        let bytes = PrintfEngine.format_to_vec(format.as_bytes(), args).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test_case("%d", tg_args!(42), "42" ; "decimal")]
    #[test_case("%5d", tg_args!(42), "   42" ; "right aligned")]
    #[test_case("%-5d|", tg_args!(42), "42   |" ; "left aligned")]
    #[test_case("%05d", tg_args!(-42), "-0042" ; "zero padded after sign")]
    #[test_case("%+d", tg_args!(7), "+7" ; "forced sign")]
    #[test_case("% d", tg_args!(7), " 7" ; "space sign")]
    #[test_case("%.3d", tg_args!(7), "007" ; "precision is min digits")]
    #[test_case("%08.3d", tg_args!(7), "     007" ; "precision disables zero flag")]
    #[test_case("[%.0d]", tg_args!(0), "[]" ; "zero with zero precision")]
    #[test_case("%i", tg_args!(i64::MIN), "-9223372036854775808" ; "min i64")]
    #[test_case("%u", tg_args!(-1), "18446744073709551615" ; "negative as unsigned")]
    #[test_case("%x", tg_args!(255), "ff" ; "hex")]
    #[test_case("%#X", tg_args!(255), "0XFF" ; "alternate upper hex")]
    #[test_case("%#x", tg_args!(0), "0" ; "alternate hex of zero")]
    #[test_case("%#o", tg_args!(8), "010" ; "alternate octal")]
    #[test_case("%o", tg_args!(8_u8), "10" ; "octal")]
    #[test_case("%06x", tg_args!(tg_rgb!(255, 128, 0)), "ff8000" ; "packed rgb as hex")]
    #[test_case("%c", tg_args!('A'), "A" ; "char")]
    #[test_case("%c", tg_args!(66), "B" ; "char from int")]
    #[test_case("%3c", tg_args!('x'), "  x" ; "padded char")]
    #[test_case("%s", tg_args!("hello"), "hello" ; "string")]
    #[test_case("%.2s", tg_args!("hello"), "he" ; "truncated string")]
    #[test_case("%-7s|", tg_args!("hi"), "hi     |" ; "left aligned string")]
    #[test_case("[%.1s]", tg_args!("é"), "[]" ; "truncation keeps char boundary")]
    #[test_case("%s", tg_args!('✓'), "✓" ; "char as string")]
    #[test_case("%f", tg_args!(3.14159), "3.141590" ; "fixed")]
    #[test_case("%.2f", tg_args!(2.675), "2.67" ; "fixed precision")]
    #[test_case("%8.3f", tg_args!(-1.5), "  -1.500" ; "fixed width")]
    #[test_case("%+.1f", tg_args!(1.0), "+1.0" ; "fixed forced sign")]
    #[test_case("%#.0f", tg_args!(3.0), "3." ; "fixed alternate")]
    #[test_case("%010.2f", tg_args!(-3.14159), "-000003.14" ; "fixed zero padded")]
    #[test_case("%.1f", tg_args!(3), "3.0" ; "fixed from int")]
    #[test_case("%e", tg_args!(12345.678), "1.234568e+04" ; "scientific")]
    #[test_case("%.2E", tg_args!(0.000123), "1.23E-04" ; "scientific upper")]
    #[test_case("%e", tg_args!(0.0), "0.000000e+00" ; "scientific zero")]
    #[test_case("%g", tg_args!(0.0001), "0.0001" ; "general small")]
    #[test_case("%g", tg_args!(123_456_789.0), "1.23457e+08" ; "general large")]
    #[test_case("%g", tg_args!(100_000.0), "100000" ; "general six digits")]
    #[test_case("%G", tg_args!(1e-10), "1E-10" ; "general tiny upper")]
    #[test_case("%g", tg_args!(0.0), "0" ; "general zero")]
    #[test_case("%#g", tg_args!(1.0), "1.00000" ; "general alternate")]
    #[test_case("%f", tg_args!(f64::INFINITY), "inf" ; "infinity")]
    #[test_case("%F", tg_args!(f64::NEG_INFINITY), "-INF" ; "negative infinity upper")]
    #[test_case("%05f", tg_args!(f64::INFINITY), "  inf" ; "infinity ignores zero flag")]
    #[test_case("%p", tg_args!(4096_u64), "0x1000" ; "pointer")]
    #[test_case("%*d", tg_args!(5, 42), "   42" ; "width from arg")]
    #[test_case("%*d|", tg_args!(-4, 7), "7   |" ; "negative width from arg")]
    #[test_case("%.*f", tg_args!(1, 2.26), "2.3" ; "precision from arg")]
    #[test_case("%.*s", tg_args!(-1, "abc"), "abc" ; "negative precision from arg")]
    #[test_case("100%%", tg_args!(), "100%" ; "percent literal")]
    #[test_case("%ld and %hhu", tg_args!(1, 2), "1 and 2" ; "length modifiers ignored")]
    #[test_case("%d %s!", tg_args!(1, "x", "unused"), "1 x!" ; "extra args ignored")]
    fn conversions(format: &str, args: FormatArgs, expected: &str) {
        assert_eq!(render(format, &args), expected);
    }

    #[test]
    fn escape_bytes_pass_through() {
        let resolved = b"\x1b[48;2;255;255;255m%c\x1b[00m";
        let bytes = PrintfEngine
            .format_to_vec(resolved, &tg_args!('@'))
            .unwrap();
        assert_eq!(bytes, b"\x1b[48;2;255;255;255m@\x1b[00m".to_vec());
    }

    #[test]
    fn missing_argument_is_reported_with_offset() {
        let result = PrintfEngine.format_to_vec(b"ab %d", &[]);
        let Err(TermGlyphError::InvalidScalarFormat { offset, reason }) = &result else {
            panic!("expected InvalidScalarFormat, got {result:?}");
        };
        assert_eq!(*offset, 3);
        assert_eq!(reason.as_str(), "missing argument for '%d'");
    }

    #[test]
    fn mismatched_arguments_are_rejected() {
        let result = PrintfEngine.format_to_vec(b"%d", &tg_args!(1.5));
        let Err(TermGlyphError::InvalidScalarFormat { reason, .. }) = &result else {
            panic!("expected InvalidScalarFormat, got {result:?}");
        };
        assert_eq!(reason.as_str(), "'%d' cannot format a float");

        assert!(PrintfEngine.format_to_vec(b"%f", &tg_args!("x")).is_err());
        assert!(PrintfEngine.format_to_vec(b"%s", &tg_args!(1)).is_err());
        assert!(PrintfEngine.format_to_vec(b"%*d", &tg_args!("x", 1)).is_err());
        assert!(PrintfEngine.format_to_vec(b"50%", &[]).is_err());
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
    }

    #[test]
    fn sink_failures_propagate() {
        let result = PrintfEngine.write_formatted(&mut FailingSink, b"hi", &[]);
        assert!(matches!(
            result,
            Err(TermGlyphError::UnderlyingWriteFailure { .. })
        ));
    }

    #[test]
    fn write_formatted_reports_bytes_delivered() {
        let mut sink = Vec::new();
        let count = PrintfEngine
            .write_formatted(&mut sink, "é%d".as_bytes(), &tg_args!(10))
            .unwrap();
        assert_eq!(count, 4);
        assert_eq!(sink, "é10".as_bytes().to_vec());
    }
}
