// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The directive pass. Walks the format string once, left to right, with three cursors
//! kept in step: the read position in the format string, the write position in the
//! resolved buffer, and the position in the argument list.
//!
//! Literal bytes (including `printf` conversions such as `%5d`) are copied through
//! untouched. Each directive is replaced by its escape sequence, consuming one argument
//! when it is a color directive. The pass always ends by appending a reset-all.

use crate::{
    ClassifiedDirective, DIRECTIVE_ESCAPE, DirectiveToken, EscapeWriter, FormatArg,
    FormatConfig, InlineString, TermGlyphError, TermGlyphResult, classify_directive,
    estimate_buffer_size, try_allocate_buffer,
};

/// The output of [`resolve_directives`]: ready for the scalar format engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFormat {
    pub buffer: Vec<u8>,
    /// How many leading arguments the color directives used up.
    pub consumed_args: usize,
    /// Escape bytes in `buffer`, including the closing reset-all.
    pub injected_escape_bytes: usize,
}

/// # Errors
///
/// Returns an error if:
/// - The escape buffer can't be allocated
/// - A directive is unrecognized and `config` is strict
/// - A color directive has no argument, or one of the wrong type
pub fn resolve_directives(
    format: &str,
    args: &[FormatArg],
    config: &FormatConfig,
) -> TermGlyphResult<ResolvedFormat> {
    let estimate = estimate_buffer_size(format)?;
    let mut writer = EscapeWriter::new(try_allocate_buffer(estimate)?);
    let mut arg_cursor = ArgCursor { args, position: 0 };

    let bytes = format.as_bytes();
    let mut read = 0;
    while read < bytes.len() {
        let run_end = bytes[read..]
            .iter()
            .position(|it| *it == DIRECTIVE_ESCAPE)
            .map_or(bytes.len(), |it| read + it);
        writer.push_literal(&bytes[read..run_end]);
        read = run_end;
        if read == bytes.len() {
            break;
        }

        let offset = read;
        let ClassifiedDirective { token, consumed } = classify_directive(&bytes[read + 1..]);
        read += 1 + consumed;

        match token {
            DirectiveToken::LiteralEscape => writer.push_literal(&[DIRECTIVE_ESCAPE]),
            DirectiveToken::AbsoluteColor(layer) => {
                let arg = arg_cursor.next(offset, token)?;
                let color = arg.as_packed_rgb().ok_or_else(|| {
                    TermGlyphError::DirectiveArgumentMismatch {
                        offset,
                        directive: token,
                        expected: "an RGB color or a packed 0xRRGGBB integer",
                        found: arg.kind_name(),
                    }
                })?;
                writer.push_absolute_color(layer, color);
            }
            DirectiveToken::IndexedColor(layer) => {
                let arg = arg_cursor.next(offset, token)?;
                let color = arg.as_indexed().ok_or_else(|| {
                    TermGlyphError::DirectiveArgumentMismatch {
                        offset,
                        directive: token,
                        expected: "an indexed color",
                        found: arg.kind_name(),
                    }
                })?;
                writer.push_indexed_color(layer, color);
            }
            DirectiveToken::StyleEnable(kind) => writer.push_style(kind),
            DirectiveToken::StyleReset(target) => writer.push_reset(target),
            DirectiveToken::Unrecognized => {
                if config.is_strict() {
                    let found: InlineString = format[offset..].chars().take(2).collect();
                    tracing::warn!(
                        message = "rejected unrecognized directive",
                        offset,
                        found = ?found
                    );
                    return Err(TermGlyphError::UnrecognizedDirective { offset, found });
                }
                writer.push_literal(&[DIRECTIVE_ESCAPE]);
            }
        }
    }

    let (buffer, injected_escape_bytes) = writer.finish();
    debug_assert!(
        buffer.len() <= estimate,
        "resolved {} bytes, estimated {estimate}",
        buffer.len()
    );

    tracing::trace!(
        message = "resolved directives",
        estimate,
        written = buffer.len(),
        injected_escape_bytes,
        consumed_args = arg_cursor.position
    );

    Ok(ResolvedFormat {
        buffer,
        consumed_args: arg_cursor.position,
        injected_escape_bytes,
    })
}

struct ArgCursor<'a> {
    args: &'a [FormatArg],
    position: usize,
}

impl<'a> ArgCursor<'a> {
    fn next(
        &mut self,
        offset: usize,
        directive: DirectiveToken,
    ) -> TermGlyphResult<&'a FormatArg> {
        let arg = self
            .args
            .get(self.position)
            .ok_or(TermGlyphError::MissingDirectiveArgument { offset, directive })?;
        self.position += 1;
        Ok(arg)
    }
}
