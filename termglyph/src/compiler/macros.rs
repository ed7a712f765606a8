// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Variadic front ends. Each argument is converted with `Into<FormatArg>`, so colors,
//! integers, floats, chars and strings can be mixed freely.

/// Compiles a format string to stdout. Returns the visible character count.
///
/// ```no_run
/// use termglyph::{IndexedColor, tg_printf};
/// tg_printf!("#o#if%s#0 done\n", IndexedColor::Green, "ok").unwrap();
/// ```
#[macro_export]
macro_rules! tg_printf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::print_styled($format, &$crate::tg_args!($($arg),*))
    };
}

/// Compiles a format string into any [`std::io::Write`]. Returns the visible character
/// count.
///
/// ```
/// use termglyph::{tg_rgb, tg_write};
/// let mut sink = Vec::new();
/// let visible = tg_write!(&mut sink, "#df%d", tg_rgb!(0, 0, 255), 7).unwrap();
/// assert_eq!(visible, 1);
/// ```
#[macro_export]
macro_rules! tg_write {
    ($sink:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::write_styled($sink, $format, &$crate::tg_args!($($arg),*))
    };
}

/// Compiles a format string in memory into a [`crate::StyledOutput`].
#[macro_export]
macro_rules! tg_format {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::format_styled($format, &$crate::tg_args!($($arg),*))
    };
}

#[cfg(test)]
mod tests {
    use crate::{IndexedColor, StyledOutput, tg_format, tg_rgb, tg_write};
    use pretty_assertions::assert_eq;

    #[test]
    fn tg_format_mixes_argument_kinds() {
        let output = tg_format!("#db%c%5.1f%s", tg_rgb!(0, 0, 0), '*', 2.3_f32, "!").unwrap();
        assert_eq!(
            output,
            StyledOutput {
                bytes: b"\x1b[48;2;000;000;000m*  2.3!\x1b[00m".to_vec(),
                visible: 7,
            }
        );
    }

    #[test]
    fn tg_write_targets_any_writer() {
        let mut sink: Vec<u8> = Vec::new();
        let visible = tg_write!(&mut sink, "#ib[%d]", IndexedColor::Blue, 3).unwrap();
        assert_eq!(sink, b"\x1b[044m[3]\x1b[00m".to_vec());
        assert_eq!(visible, 3);
    }

    #[test]
    fn trailing_commas_are_accepted() {
        let output = tg_format!("x",).unwrap();
        assert_eq!(output.visible, 1);
        let output = tg_format!("%d%d", 1, 2,).unwrap();
        assert_eq!(output.visible, 2);
    }
}
