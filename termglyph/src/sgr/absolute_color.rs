// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ABSOLUTE_SEQUENCE_LEN, Layer, RgbColor};

/// `ESC[L8;2;RRR;GGG;BBBm`, where `L` is the layer marker and each channel is written
/// as exactly three zero padded decimal digits.
pub const ABSOLUTE_SEQUENCE_TEMPLATE: &[u8; ABSOLUTE_SEQUENCE_LEN] = b"\x1b[08;2;000;000;000m";

const LAYER_OFFSET: usize = 2;
const RED_OFFSET: usize = 7;
const GREEN_OFFSET: usize = 11;
const BLUE_OFFSET: usize = 15;
const CHANNEL_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsoluteColorSequence([u8; ABSOLUTE_SEQUENCE_LEN]);

impl AbsoluteColorSequence {
    #[must_use]
    pub fn new(layer: Layer, color: RgbColor) -> Self {
        let mut it = *ABSOLUTE_SEQUENCE_TEMPLATE;
        it[LAYER_OFFSET] = layer.marker();
        for (offset, value) in [
            (RED_OFFSET, color.red),
            (GREEN_OFFSET, color.green),
            (BLUE_OFFSET, color.blue),
        ] {
            write_zero_padded(&mut it[offset..offset + CHANNEL_WIDTH], u32::from(value));
        }
        Self(it)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; ABSOLUTE_SEQUENCE_LEN] { &self.0 }

    /// Decodes a sequence produced by [`AbsoluteColorSequence::new`].
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Option<(Layer, RgbColor)> {
        if bytes.len() != ABSOLUTE_SEQUENCE_LEN
            || bytes[..LAYER_OFFSET] != ABSOLUTE_SEQUENCE_TEMPLATE[..LAYER_OFFSET]
            || bytes[LAYER_OFFSET + 1..RED_OFFSET]
                != ABSOLUTE_SEQUENCE_TEMPLATE[LAYER_OFFSET + 1..RED_OFFSET]
            || bytes[ABSOLUTE_SEQUENCE_LEN - 1] != b'm'
        {
            return None;
        }
        let layer = Layer::from_marker(bytes[LAYER_OFFSET])?;
        let channel = |offset: usize| -> Option<u8> {
            let digits = &bytes[offset..offset + CHANNEL_WIDTH];
            let value = digits.iter().try_fold(0_u32, |acc, it| {
                it.is_ascii_digit().then(|| acc * 10 + u32::from(it - b'0'))
            })?;
            u8::try_from(value).ok()
        };
        Some((
            layer,
            RgbColor::new(
                channel(RED_OFFSET)?,
                channel(GREEN_OFFSET)?,
                channel(BLUE_OFFSET)?,
            ),
        ))
    }
}

/// Writes `value` into `dst` as decimal digits, left padded with `0` to exactly
/// `dst.len()` digits. `value` must fit.
pub fn write_zero_padded(dst: &mut [u8], mut value: u32) {
    debug_assert!(
        u32::try_from(dst.len())
            .ok()
            .and_then(|width| 10_u32.checked_pow(width))
            .is_none_or(|limit| value < limit),
        "{value} does not fit in {} digits",
        dst.len()
    );
    for slot in dst.iter_mut().rev() {
        // The remainder is always a single digit.
        #[allow(clippy::cast_possible_truncation)]
        let digit = (value % 10) as u8;
        *slot = b'0' + digit;
        value /= 10;
    }
}
