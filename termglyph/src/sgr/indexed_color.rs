// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 16 color terminal palette.
//!
//! The table only holds foreground sequences. The background form is derived by
//! rewriting the layer digits: `ESC[03Nm` becomes `ESC[04Nm` and the bright
//! `ESC[09Nm` becomes `ESC[10Nm`.

use crate::{INDEXED_SEQUENCE_LEN, Layer};
use strum::EnumCount;
use strum_macros::{EnumCount, EnumIter};

pub type IndexedSequence = [u8; INDEXED_SEQUENCE_LEN];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum IndexedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

#[rustfmt::skip]
static FOREGROUND_SEQUENCES: [&IndexedSequence; IndexedColor::COUNT] = [
    b"\x1b[030m", b"\x1b[031m", b"\x1b[032m", b"\x1b[033m",
    b"\x1b[034m", b"\x1b[035m", b"\x1b[036m", b"\x1b[037m",
    b"\x1b[090m", b"\x1b[091m", b"\x1b[092m", b"\x1b[093m",
    b"\x1b[094m", b"\x1b[095m", b"\x1b[096m", b"\x1b[097m",
];

impl IndexedColor {
    #[must_use]
    pub fn is_bright(self) -> bool { self as usize >= 8 }

    #[must_use]
    pub fn foreground_sequence(self) -> &'static IndexedSequence {
        FOREGROUND_SEQUENCES[self as usize]
    }

    #[must_use]
    pub fn sequence(self, layer: Layer) -> IndexedSequence {
        let mut it = *self.foreground_sequence();
        if layer == Layer::Background {
            if self.is_bright() {
                it[2] = b'1';
                it[3] = b'0';
            } else {
                it[3] = b'4';
            }
        }
        it
    }
}
