// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{IndexedColor, InlineString, InlineVec, RgbColor};

/// One positional call argument. Color directives consume [`FormatArg::Rgb`] /
/// [`FormatArg::Indexed`] values, the `printf` conversions consume the rest.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Rgb(RgbColor),
    Indexed(IndexedColor),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(InlineString),
}

pub type FormatArgs = InlineVec<FormatArg>;

/// Collects heterogenous values into [`FormatArgs`].
///
/// ```
/// use termglyph::{FormatArg, IndexedColor, tg_args};
/// let args = tg_args!(IndexedColor::Red, 42, "x");
/// assert_eq!(args.len(), 3);
/// assert_eq!(args[1], FormatArg::Int(42));
/// ```
#[macro_export]
macro_rules! tg_args {
    ($($arg:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut acc = $crate::FormatArgs::new();
        $(acc.push($crate::FormatArg::from($arg));)*
        acc
    }};
}

impl FormatArg {
    /// Used in error messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            FormatArg::Rgb(_) => "an RGB color",
            FormatArg::Indexed(_) => "an indexed color",
            FormatArg::Int(_) => "an integer",
            FormatArg::UInt(_) => "an unsigned integer",
            FormatArg::Float(_) => "a float",
            FormatArg::Char(_) => "a char",
            FormatArg::Str(_) => "a string",
        }
    }

    /// The color an absolute color directive paints with. Integers are read as
    /// `0xRRGGBB`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_packed_rgb(&self) -> Option<RgbColor> {
        match self {
            FormatArg::Rgb(it) => Some(*it),
            FormatArg::Int(it) => Some(RgbColor::from_u24(*it as u32)),
            FormatArg::UInt(it) => Some(RgbColor::from_u24(*it as u32)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_indexed(&self) -> Option<IndexedColor> {
        match self {
            FormatArg::Indexed(it) => Some(*it),
            _ => None,
        }
    }
}

mod from_impls {
    use super::*;

    macro_rules! impl_from {
        ($variant:ident as $target:ty: $($source:ty),+) => {
            $(
                impl From<$source> for FormatArg {
                    fn from(it: $source) -> Self { FormatArg::$variant(<$target>::from(it)) }
                }
            )+
        };
    }

    impl_from!(Int as i64: i8, i16, i32, i64);
    impl_from!(UInt as u64: u8, u16, u32, u64);
    impl_from!(Float as f64: f32, f64);
    impl_from!(Rgb as RgbColor: RgbColor);
    impl_from!(Indexed as IndexedColor: IndexedColor);
    impl_from!(Char as char: char);

    impl From<isize> for FormatArg {
        fn from(it: isize) -> Self { FormatArg::Int(it as i64) }
    }

    impl From<usize> for FormatArg {
        fn from(it: usize) -> Self { FormatArg::UInt(it as u64) }
    }

    impl From<&str> for FormatArg {
        fn from(it: &str) -> Self { FormatArg::Str(it.into()) }
    }

    impl From<String> for FormatArg {
        fn from(it: String) -> Self { FormatArg::Str(it.as_str().into()) }
    }

    impl From<&String> for FormatArg {
        fn from(it: &String) -> Self { FormatArg::Str(it.as_str().into()) }
    }

    impl From<InlineString> for FormatArg {
        fn from(it: InlineString) -> Self { FormatArg::Str(it) }
    }
}
