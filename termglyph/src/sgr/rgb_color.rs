// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

/// A 24-bit truecolor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Builds an [`RgbColor`] from its three components.
///
/// ```
/// use termglyph::{RgbColor, tg_rgb};
/// assert_eq!(tg_rgb!(1, 2, 3), RgbColor::new(1, 2, 3));
/// ```
#[macro_export]
macro_rules! tg_rgb {
    ($red:expr, $green:expr, $blue:expr $(,)?) => {
        $crate::RgbColor::new($red, $green, $blue)
    };
}

mod rgb_color_impl {
    use super::RgbColor;
    use std::fmt::{Display, Formatter, Result};

    impl RgbColor {
        #[must_use]
        pub const fn new(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

        /// Unpacks `0xRRGGBB`. Bits above the low 24 are ignored.
        #[must_use]
        pub const fn from_u24(packed: u32) -> Self {
            Self {
                red: ((packed >> 16) & 0xFF) as u8,
                green: ((packed >> 8) & 0xFF) as u8,
                blue: (packed & 0xFF) as u8,
            }
        }

        #[must_use]
        pub const fn as_u24(&self) -> u32 {
            ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
        }

        #[must_use]
        pub const fn as_array(&self) -> [u8; 3] { [self.red, self.green, self.blue] }
    }

    impl From<(u8, u8, u8)> for RgbColor {
        fn from((red, green, blue): (u8, u8, u8)) -> Self { Self { red, green, blue } }
    }

    impl From<[u8; 3]> for RgbColor {
        fn from([red, green, blue]: [u8; 3]) -> Self { Self { red, green, blue } }
    }

    impl From<u32> for RgbColor {
        fn from(packed: u32) -> Self { Self::from_u24(packed) }
    }

    impl Display for RgbColor {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        }
    }
}
