// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # termglyph
//!
//! Styled terminal output through an extended `printf` mini-language, and a renderer
//! that turns a truecolor bitmap (binary PPM) into a grid of colored ASCII glyphs.
//!
//! ## The mini-language
//!
//! A format string mixes ordinary `printf` conversions with color and style
//! directives introduced by `#`. Directives are rewritten into raw terminal escape
//! sequences in a single pass, then the rest of the string is handed to a
//! [`ScalarFormatEngine`] (by default [`PrintfEngine`]).
//!
//! | Directive                  | Effect                                            | Argument          |
//! |----------------------------|---------------------------------------------------|-------------------|
//! | `#df` / `#db`              | 24-bit foreground / background color              | [`RgbColor`] or `0xRRGGBB` |
//! | `#if` / `#ib`              | palette foreground / background color             | [`IndexedColor`]  |
//! | `#o #m #t #u #k #n #w #h #s` | bold, dim, italic, underline, blink, inverse, double underline, hidden, strikethrough | none |
//! | `#0o` ... `#0s`, `#0f`, `#0b` | reset one attribute, or the fg / bg color      | none              |
//! | `#0c`                      | reset both colors                                 | none              |
//! | `#0`                       | reset everything                                  | none              |
//! | `##`                       | a literal `#`                                     | none              |
//!
//! Directive arguments come first, in the order their directives appear, followed by
//! the arguments of the `printf` conversions. Every call ends with a reset-all, and
//! returns the *visible* character count: the bytes written minus the escape bytes that
//! were injected.
//!
//! ```
//! use termglyph::{IndexedColor, tg_format, tg_rgb};
//!
//! let output = tg_format!(
//!     "#o#df%s#0o #ibok",
//!     tg_rgb!(255, 128, 0),
//!     IndexedColor::Green,
//!     "hot"
//! )
//! .unwrap();
//! assert_eq!(output.visible, 6);
//! ```
//!
//! ## Typed segments
//!
//! [`StyledText`] builds the same output from an ordered list of [`Segment`]s, without
//! writing a format string by hand.
//!
//! ## Glyph rendering
//!
//! [`render_ppm`], [`render_ppm_file`] and [`print_ppm`] read a `P6` bitmap, map each
//! pixel's luminance onto the ramp `" .:-=+*#%@"` and emit one colored glyph per pixel.
//!
//! ## Logging
//!
//! The library emits [`tracing`] events. Use [`TracingConfig`] to install a subscriber
//! that writes them to stdout, stderr, a log file, or both.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod compiler;
pub mod config;
pub mod directive;
pub mod error;
pub mod glyph;
pub mod log;
pub mod printf;
pub mod segment;
pub mod sgr;
pub mod stack_alloc_types;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use compiler::*;
pub use config::*;
pub use directive::*;
pub use error::*;
pub use glyph::*;
pub use log::*;
pub use printf::*;
pub use segment::*;
pub use sgr::*;
pub use stack_alloc_types::*;
