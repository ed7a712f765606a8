// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ties the directive pass to a [`ScalarFormatEngine`] and turns the engine's byte count
//! into a visible character count.
//!
//! ```text
//! format ─► estimate ─► allocate ─► resolve directives ─► engine ─► sink
//!                                        │                    │
//!                            injected escape bytes       bytes written
//!                                        └──── visible = written - injected
//! ```
//!
//! Bytes the engine already delivered stay delivered when a later step fails.

use crate::{
    FormatArg, FormatConfig, PrintfEngine, ResolvedFormat, ScalarFormatEngine,
    TermGlyphError, TermGlyphResult, resolve_directives,
};
use std::{borrow::Cow, io::Write};

/// The result of an in-memory compile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledOutput {
    pub bytes: Vec<u8>,
    pub visible: usize,
}

impl StyledOutput {
    #[must_use]
    pub fn as_str_lossy(&self) -> Cow<'_, str> { String::from_utf8_lossy(&self.bytes) }
}

/// Compiles `format` and writes it to `sink` through `engine`. Returns the visible
/// character count.
///
/// # Errors
///
/// Returns an error if:
/// - A directive is unrecognized and `config` is strict
/// - A color directive has no argument, or one of the wrong type
/// - The escape buffer can't be allocated
/// - `engine` fails. Its error is returned unchanged, and bytes it already delivered
///   to `sink` are not taken back
pub fn write_styled_with<E: ScalarFormatEngine + ?Sized>(
    sink: &mut dyn Write,
    format: &str,
    args: &[FormatArg],
    config: &FormatConfig,
    engine: &mut E,
) -> TermGlyphResult<usize> {
    let ResolvedFormat {
        buffer,
        consumed_args,
        injected_escape_bytes,
    } = resolve_directives(format, args, config)?;

    let written = engine.write_formatted(sink, &buffer, &args[consumed_args..])?;
    let visible = written.saturating_sub(injected_escape_bytes);

    tracing::trace!(
        message = "compiled styled output",
        written,
        injected_escape_bytes,
        visible
    );

    Ok(visible)
}

/// [`write_styled_with`] using [`PrintfEngine`] and the default (lenient) config.
///
/// # Errors
///
/// Same as [`write_styled_with`]. [`PrintfEngine`] adds
/// [`TermGlyphError::InvalidScalarFormat`] and [`TermGlyphError::UnderlyingWriteFailure`].
pub fn write_styled(
    sink: &mut dyn Write,
    format: &str,
    args: &[FormatArg],
) -> TermGlyphResult<usize> {
    write_styled_with(sink, format, args, &FormatConfig::default(), &mut PrintfEngine)
}

/// Writes to a locked stdout and flushes it.
///
/// # Errors
///
/// Same as [`write_styled`], and also if stdout can't be flushed.
pub fn print_styled(format: &str, args: &[FormatArg]) -> TermGlyphResult<usize> {
    let stdout = std::io::stdout();
    let mut locked = stdout.lock();
    let visible = write_styled(&mut locked, format, args)?;
    locked
        .flush()
        .map_err(|source| TermGlyphError::UnderlyingWriteFailure { source })?;
    Ok(visible)
}

/// # Errors
///
/// Same as [`format_styled_with`] with a lenient config.
pub fn format_styled(format: &str, args: &[FormatArg]) -> TermGlyphResult<StyledOutput> {
    format_styled_with(format, args, &FormatConfig::default())
}

/// # Errors
///
/// Same as [`write_styled_with`], except that writing to memory does not fail.
pub fn format_styled_with(
    format: &str,
    args: &[FormatArg],
    config: &FormatConfig,
) -> TermGlyphResult<StyledOutput> {
    let mut bytes = Vec::new();
    let visible = write_styled_with(&mut bytes, format, args, config, &mut PrintfEngine)?;
    Ok(StyledOutput { bytes, visible })
}
