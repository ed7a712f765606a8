// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{FormatArg, TermGlyphResult};
use std::io::Write;

/// Renders the `printf` conversions left in a resolved buffer and delivers the result to
/// the sink.
///
/// By the time an engine sees the buffer every color and style directive has already
/// been turned into escape bytes. Those bytes contain no `%`, so the engine copies them
/// through like any other literal text. `args` holds only the arguments the directives
/// did not consume.
pub trait ScalarFormatEngine {
    /// Returns the number of bytes delivered to `sink`. Failures to write must be
    /// reported as [`crate::TermGlyphError::UnderlyingWriteFailure`].
    ///
    /// # Errors
    ///
    /// Returns an error if a conversion can't be formatted or `sink` fails.
    fn write_formatted(
        &mut self,
        sink: &mut dyn Write,
        resolved: &[u8],
        args: &[FormatArg],
    ) -> TermGlyphResult<usize>;
}
