// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every fallible operation in this crate returns [`TermGlyphResult`].
//!
//! The variants map onto four failure families:
//!
//! | Family                   | Variants                                               |
//! |--------------------------|--------------------------------------------------------|
//! | Allocation               | [`TermGlyphError::AllocationFailure`]                  |
//! | Malformed input          | [`TermGlyphError::MalformedInput`]                     |
//! | I/O on the input side    | [`TermGlyphError::Io`]                                 |
//! | Output sink / formatting | [`TermGlyphError::UnderlyingWriteFailure`], [`TermGlyphError::InvalidScalarFormat`] |
//!
//! The directive variants ([`TermGlyphError::UnrecognizedDirective`],
//! [`TermGlyphError::MissingDirectiveArgument`] and
//! [`TermGlyphError::DirectiveArgumentMismatch`]) report a broken caller contract. Since
//! arguments are typed, an argument that does not fit its directive is caught here
//! instead of producing garbage output.
//!
//! Nothing is retried and nothing is rolled back: bytes that already reached the sink
//! stay there when a later step fails.
//!
//! More info on the error handling approach:
//! - [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)

use crate::{DirectiveToken, InlineString};

pub type TermGlyphResult<T> = Result<T, TermGlyphError>;

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum TermGlyphError {
    #[error("🧱 Could not allocate {requested} bytes")]
    #[diagnostic(
        code(termglyph::allocation_failure),
        help("The format string or the bitmap is too large to be buffered in memory")
    )]
    AllocationFailure { requested: usize },

    #[error("🖼️ Malformed bitmap: {0}")]
    #[diagnostic(
        code(termglyph::malformed_input),
        help("Only binary PPM (P6) files with a max sample value of 255 are supported")
    )]
    MalformedInput(MalformedInputKind),

    #[error("📂 Could not read the input")]
    #[diagnostic(code(termglyph::io))]
    Io {
        #[source]
        source: std::io::Error,
    },

    #[error("📤 The output sink failed to accept the formatted bytes")]
    #[diagnostic(code(termglyph::underlying_write_failure))]
    UnderlyingWriteFailure {
        #[source]
        source: std::io::Error,
    },

    #[error("❓ Unrecognized directive '{found}' at byte offset {offset}")]
    #[diagnostic(
        code(termglyph::unrecognized_directive),
        help("Use '##' for a literal '#', or switch to Strictness::Lenient")
    )]
    UnrecognizedDirective { offset: usize, found: InlineString },

    #[error("🕳️ Directive '{directive}' at byte offset {offset} has no matching argument")]
    #[diagnostic(
        code(termglyph::missing_directive_argument),
        help("Color directive arguments come first, in the order their directives appear")
    )]
    MissingDirectiveArgument {
        offset: usize,
        directive: DirectiveToken,
    },

    #[error(
        "🔀 Directive '{directive}' at byte offset {offset} expects {expected}, got {found}"
    )]
    #[diagnostic(
        code(termglyph::directive_argument_mismatch),
        help("Color directive arguments come first, in the order their directives appear")
    )]
    DirectiveArgumentMismatch {
        offset: usize,
        directive: DirectiveToken,
        expected: &'static str,
        found: &'static str,
    },

    #[error("🧮 Invalid scalar format at byte offset {offset}: {reason}")]
    #[diagnostic(code(termglyph::invalid_scalar_format))]
    InvalidScalarFormat {
        offset: usize,
        reason: InlineString,
    },
}

/// What exactly is wrong with a bitmap. Wrapped by [`TermGlyphError::MalformedInput`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInputKind {
    #[error("expected magic 'P6', found {found:?}")]
    BadMagic { found: InlineString },

    #[error("missing header field '{name}'")]
    MissingHeaderToken { name: &'static str },

    #[error("header field '{name}' is not a decimal number: {found:?}")]
    InvalidHeaderToken {
        name: &'static str,
        found: InlineString,
    },

    #[error("max sample value must be 255, found {found}")]
    UnsupportedMaxValue { found: u32 },

    #[error("unusable dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("expected {expected} bytes of pixel data, found {found}")]
    TruncatedPixelData { expected: usize, found: usize },
}

impl From<MalformedInputKind> for TermGlyphError {
    fn from(kind: MalformedInputKind) -> Self { TermGlyphError::MalformedInput(kind) }
}

impl TermGlyphError {
    #[must_use]
    pub fn invalid_scalar_format(offset: usize, reason: &str) -> Self {
        TermGlyphError::InvalidScalarFormat {
            offset,
            reason: reason.into(),
        }
    }
}
