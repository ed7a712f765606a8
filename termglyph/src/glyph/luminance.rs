// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Maps a pixel to a glyph by how bright it looks.
//!
//! Luminance uses the Rec. 709 weights `0.2126 R + 0.7152 G + 0.0722 B`, in fixed point
//! so that pure white lands on exactly 255.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/Relative_luminance>

use crate::RgbColor;

/// Glyphs ordered from least to most visually dense.
pub const GLYPH_RAMP: &[u8] = b" .:-=+*#%@";

const RED_WEIGHT: u32 = 2126;
const GREEN_WEIGHT: u32 = 7152;
const BLUE_WEIGHT: u32 = 722;
const WEIGHT_SCALE: u32 = 10_000;

/// Truncated, never rounded up.
#[must_use]
pub fn luminance(color: RgbColor) -> u8 {
    let weighted = RED_WEIGHT * u32::from(color.red)
        + GREEN_WEIGHT * u32::from(color.green)
        + BLUE_WEIGHT * u32::from(color.blue);
    u8::try_from(weighted / WEIGHT_SCALE).unwrap_or(u8::MAX)
}

#[must_use]
pub fn glyph_for_luminance(luma: u8) -> char {
    let index = usize::from(luma) * (GLYPH_RAMP.len() - 1) / usize::from(u8::MAX);
    char::from(GLYPH_RAMP[index])
}
