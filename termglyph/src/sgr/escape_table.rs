// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixed width SGR (Select Graphic Rendition) sequences, keyed by directive kind.
//!
//! Every parameter is written with a leading zero (`ESC[01m` rather than `ESC[1m`) so
//! that all sequences of one family have the same length. That makes the size of the
//! output buffer predictable from the format string alone.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};
use strum::EnumCount;
use strum_macros::{EnumCount, EnumIter};

pub const ESC: u8 = 0x1b;

/// Introduces every directive in a format string.
pub const DIRECTIVE_ESCAPE: u8 = b'#';

pub const STYLE_SEQUENCE_LEN: usize = 5;
pub const INDEXED_SEQUENCE_LEN: usize = 6;
pub const ABSOLUTE_SEQUENCE_LEN: usize = 19;

/// The longest sequence any single directive expands to.
pub const MAX_DIRECTIVE_EXPANSION: usize = ABSOLUTE_SEQUENCE_LEN;

pub type StyleSequence = [u8; STYLE_SEQUENCE_LEN];

pub const RESET_ALL: &StyleSequence = b"\x1b[00m";
pub const RESET_FOREGROUND: &StyleSequence = b"\x1b[39m";
pub const RESET_BACKGROUND: &StyleSequence = b"\x1b[49m";

/// Whether a color applies to the text itself or the cell behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    /// The digit that selects this layer in `ESC[L8;2;...m`.
    #[must_use]
    pub fn marker(self) -> u8 {
        match self {
            Layer::Foreground => b'3',
            Layer::Background => b'4',
        }
    }

    #[must_use]
    pub fn directive_char(self) -> char {
        match self {
            Layer::Foreground => 'f',
            Layer::Background => 'b',
        }
    }

    #[must_use]
    pub fn from_directive_char(it: u8) -> Option<Self> {
        match it {
            b'f' => Some(Layer::Foreground),
            b'b' => Some(Layer::Background),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_marker(it: u8) -> Option<Self> {
        match it {
            b'3' => Some(Layer::Foreground),
            b'4' => Some(Layer::Background),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum StyleKind {
    Bold,
    Dim,
    Italic,
    Underline,
    DoubleUnderline,
    Blink,
    Inverse,
    Hidden,
    Strikethrough,
}

// Skip rustfmt to preserve the column alignment of the tables.
// https://stackoverflow.com/a/75910283/2085356
#[rustfmt::skip]
mod style_tables {
    use super::*;

    /// Indexed by `StyleKind as usize`.
    pub static STYLE_ENABLE_SEQUENCES: [&StyleSequence; StyleKind::COUNT] = [
        /* Bold            */ b"\x1b[01m",
        /* Dim             */ b"\x1b[02m",
        /* Italic          */ b"\x1b[03m",
        /* Underline       */ b"\x1b[04m",
        /* DoubleUnderline */ b"\x1b[21m",
        /* Blink           */ b"\x1b[05m",
        /* Inverse         */ b"\x1b[07m",
        /* Hidden          */ b"\x1b[08m",
        /* Strikethrough   */ b"\x1b[09m",
    ];

    /// Bold and dim share a reset, so do both underlines.
    pub static STYLE_RESET_SEQUENCES: [&StyleSequence; StyleKind::COUNT] = [
        /* Bold            */ b"\x1b[22m",
        /* Dim             */ b"\x1b[22m",
        /* Italic          */ b"\x1b[23m",
        /* Underline       */ b"\x1b[24m",
        /* DoubleUnderline */ b"\x1b[24m",
        /* Blink           */ b"\x1b[25m",
        /* Inverse         */ b"\x1b[27m",
        /* Hidden          */ b"\x1b[28m",
        /* Strikethrough   */ b"\x1b[29m",
    ];

    pub static STYLE_DIRECTIVE_CHARS: [u8; StyleKind::COUNT] =
        [b'o', b'm', b't', b'u', b'w', b'k', b'n', b'h', b's'];
}
use style_tables::*;

impl StyleKind {
    #[must_use]
    pub fn enable_sequence(self) -> &'static StyleSequence {
        STYLE_ENABLE_SEQUENCES[self as usize]
    }

    #[must_use]
    pub fn reset_sequence(self) -> &'static StyleSequence {
        STYLE_RESET_SEQUENCES[self as usize]
    }

    #[must_use]
    pub fn directive_char(self) -> char { char::from(STYLE_DIRECTIVE_CHARS[self as usize]) }

    #[must_use]
    pub fn from_directive_char(it: u8) -> Option<Self> {
        use strum::IntoEnumIterator;
        StyleKind::iter().find(|kind| STYLE_DIRECTIVE_CHARS[*kind as usize] == it)
    }
}

/// What a `#0` directive turns off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetTarget {
    Style(StyleKind),
    Foreground,
    Background,
    /// Foreground and background, emitted as two sequences.
    Colors,
    All,
}

impl ResetTarget {
    /// Classifies the character after `#0`. `None` means the bare `#0` (reset all) form
    /// applies and the character is not part of the directive.
    #[must_use]
    pub fn from_directive_char(it: u8) -> Option<Self> {
        match it {
            b'f' => Some(ResetTarget::Foreground),
            b'b' => Some(ResetTarget::Background),
            b'c' => Some(ResetTarget::Colors),
            _ => StyleKind::from_directive_char(it).map(ResetTarget::Style),
        }
    }

    #[must_use]
    pub fn directive_char(self) -> Option<char> {
        match self {
            ResetTarget::Style(kind) => Some(kind.directive_char()),
            ResetTarget::Foreground => Some('f'),
            ResetTarget::Background => Some('b'),
            ResetTarget::Colors => Some('c'),
            ResetTarget::All => None,
        }
    }

    #[must_use]
    pub fn sequences(self) -> &'static [&'static StyleSequence] {
        match self {
            ResetTarget::Style(kind) => {
                std::slice::from_ref(&STYLE_RESET_SEQUENCES[kind as usize])
            }
            ResetTarget::Foreground => &[RESET_FOREGROUND],
            ResetTarget::Background => &[RESET_BACKGROUND],
            ResetTarget::Colors => &[RESET_FOREGROUND, RESET_BACKGROUND],
            ResetTarget::All => &[RESET_ALL],
        }
    }
}

impl Display for ResetTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.directive_char() {
            Some(it) => write!(f, "#0{it}"),
            None => write!(f, "#0"),
        }
    }
}
