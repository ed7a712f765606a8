// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{
    ABSOLUTE_SEQUENCE_LEN, Count, EscapeWriter, FormatArg, FormatArgs, INDEXED_SEQUENCE_LEN,
    IndexedColor, InlineString, InlineVec, Layer, PrintfEngine, RESET_ALL, ResetTarget,
    RgbColor, STYLE_SEQUENCE_LEN, ScalarFormatEngine, StyleKind, StyledOutput,
    TermGlyphError, TermGlyphResult, parse_conversion_spec, try_allocate_buffer,
};
use std::io::Write;

/// The typed counterpart of a format string: an ordered list of [`Segment`]s.
///
/// Segments are turned into escape sequences directly, without going through the `#`
/// mini-language, so text never needs escaping. A `Text("#0bold")` segment prints
/// `#0bold` as is, and a `%` in text is printed as a `%`. Every render still ends with
/// a reset-all, and the visible count excludes the escape bytes.
///
/// # Example usage:
///
/// ```
/// use termglyph::{IndexedColor, StyleKind, StyledText, tg_rgb};
///
/// let output = StyledText::default()
///     .style(StyleKind::Bold)
///     .fg(tg_rgb!(255, 128, 0))
///     .text("progress: ")
///     .bg(IndexedColor::Blue)
///     .value("%3d", 42)
///     .text("%")
///     .render()
///     .unwrap();
/// assert_eq!(output.visible, "progress:  42%".len());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledText {
    pub segments: InlineVec<Segment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    Rgb(RgbColor),
    Indexed(IndexedColor),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Text(String),
    Color { layer: Layer, color: ColorSpec },
    Style(StyleKind),
    Reset(ResetTarget),
    /// A single `printf` conversion (eg: `%5.1f`) and the value it formats.
    Value { spec: InlineString, arg: FormatArg },
}

/// String together segments into a [`StyledText`].
#[macro_export]
macro_rules! tg_styled_text {
    (
        $( $segment:expr ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut acc = $crate::StyledText::default();
        $(
            acc.push($segment);
        )*
        acc
    }};
}

mod color_spec_impl {
    use super::*;

    impl From<RgbColor> for ColorSpec {
        fn from(it: RgbColor) -> Self { ColorSpec::Rgb(it) }
    }

    impl From<IndexedColor> for ColorSpec {
        fn from(it: IndexedColor) -> Self { ColorSpec::Indexed(it) }
    }

    impl From<(u8, u8, u8)> for ColorSpec {
        fn from(it: (u8, u8, u8)) -> Self { ColorSpec::Rgb(it.into()) }
    }
}

mod segment_impl {
    use super::*;

    impl From<&str> for Segment {
        fn from(it: &str) -> Self { Segment::Text(it.to_string()) }
    }

    impl From<String> for Segment {
        fn from(it: String) -> Self { Segment::Text(it) }
    }

    impl From<StyleKind> for Segment {
        fn from(it: StyleKind) -> Self { Segment::Style(it) }
    }

    impl From<ResetTarget> for Segment {
        fn from(it: ResetTarget) -> Self { Segment::Reset(it) }
    }

    impl Segment {
        /// Most bytes this segment can add to the resolved buffer.
        pub(super) fn resolved_len_upper_bound(&self) -> Option<usize> {
            match self {
                Segment::Text(text) => text.len().checked_mul(2),
                Segment::Color {
                    color: ColorSpec::Rgb(_),
                    ..
                } => Some(ABSOLUTE_SEQUENCE_LEN),
                Segment::Color {
                    color: ColorSpec::Indexed(_),
                    ..
                } => Some(INDEXED_SEQUENCE_LEN),
                Segment::Style(_) => Some(STYLE_SEQUENCE_LEN),
                Segment::Reset(target) => Some(target.sequences().len() * STYLE_SEQUENCE_LEN),
                Segment::Value { spec, .. } => Some(spec.len()),
            }
        }
    }
}

mod styled_text_impl {
    use super::*;

    /// Builder methods.
    impl StyledText {
        pub fn push(&mut self, segment: impl Into<Segment>) { self.segments.push(segment.into()); }

        #[must_use]
        pub fn text(mut self, text: impl Into<String>) -> Self {
            self.push(Segment::Text(text.into()));
            self
        }

        #[must_use]
        pub fn fg(mut self, color: impl Into<ColorSpec>) -> Self {
            self.push(Segment::Color {
                layer: Layer::Foreground,
                color: color.into(),
            });
            self
        }

        #[must_use]
        pub fn bg(mut self, color: impl Into<ColorSpec>) -> Self {
            self.push(Segment::Color {
                layer: Layer::Background,
                color: color.into(),
            });
            self
        }

        #[must_use]
        pub fn style(mut self, kind: StyleKind) -> Self {
            self.push(Segment::Style(kind));
            self
        }

        #[must_use]
        pub fn reset(mut self, target: ResetTarget) -> Self {
            self.push(Segment::Reset(target));
            self
        }

        #[must_use]
        pub fn value(mut self, spec: &str, arg: impl Into<FormatArg>) -> Self {
            self.push(Segment::Value {
                spec: spec.into(),
                arg: arg.into(),
            });
            self
        }
    }

    /// Output.
    impl StyledText {
        /// # Errors
        ///
        /// Same as [`StyledText::write_to`], except that writing to memory does not fail.
        pub fn render(&self) -> TermGlyphResult<StyledOutput> {
            let mut bytes = Vec::new();
            let visible = self.write_to(&mut bytes)?;
            Ok(StyledOutput { bytes, visible })
        }

        /// Returns the visible character count.
        ///
        /// # Errors
        ///
        /// Same as [`StyledText::write_to_with`] using [`PrintfEngine`].
        pub fn write_to(&self, sink: &mut dyn Write) -> TermGlyphResult<usize> {
            self.write_to_with(sink, &mut PrintfEngine)
        }

        /// # Errors
        ///
        /// Returns an error if:
        /// - The escape buffer can't be allocated
        /// - A value segment holds an unusable conversion
        /// - `engine` fails. Its error is returned unchanged
        pub fn write_to_with<E: ScalarFormatEngine + ?Sized>(
            &self,
            sink: &mut dyn Write,
            engine: &mut E,
        ) -> TermGlyphResult<usize> {
            let (buffer, injected_escape_bytes, args) = self.resolve()?;
            let written = engine.write_formatted(sink, &buffer, &args)?;
            Ok(written.saturating_sub(injected_escape_bytes))
        }

        /// # Errors
        ///
        /// Same as [`StyledText::write_to`], and also if stdout can't be flushed.
        pub fn print(&self) -> TermGlyphResult<usize> {
            let stdout = std::io::stdout();
            let mut locked = stdout.lock();
            let visible = self.write_to(&mut locked)?;
            locked
                .flush()
                .map_err(|source| TermGlyphError::UnderlyingWriteFailure { source })?;
            Ok(visible)
        }

        fn resolve(&self) -> TermGlyphResult<(Vec<u8>, usize, FormatArgs)> {
            let capacity = self
                .segments
                .iter()
                .try_fold(RESET_ALL.len(), |acc, it| {
                    acc.checked_add(it.resolved_len_upper_bound()?)
                })
                .ok_or(TermGlyphError::AllocationFailure {
                    requested: usize::MAX,
                })?;
            let mut writer = EscapeWriter::new(try_allocate_buffer(capacity)?);
            let mut args = FormatArgs::new();

            for segment in &self.segments {
                match segment {
                    Segment::Text(text) => push_text(&mut writer, text),
                    Segment::Color {
                        layer,
                        color: ColorSpec::Rgb(it),
                    } => writer.push_absolute_color(*layer, *it),
                    Segment::Color {
                        layer,
                        color: ColorSpec::Indexed(it),
                    } => writer.push_indexed_color(*layer, *it),
                    Segment::Style(kind) => writer.push_style(*kind),
                    Segment::Reset(target) => writer.push_reset(*target),
                    Segment::Value { spec, arg } => {
                        check_single_conversion(spec, writer.len())?;
                        writer.push_literal(spec.as_bytes());
                        args.push(arg.clone());
                    }
                }
            }

            let (buffer, injected_escape_bytes) = writer.finish();
            debug_assert!(buffer.len() <= capacity);
            Ok((buffer, injected_escape_bytes, args))
        }
    }

    /// Text goes to the engine verbatim, so its `%` must be doubled.
    fn push_text(writer: &mut EscapeWriter, text: &str) {
        let mut parts = text.split('%');
        if let Some(first) = parts.next() {
            writer.push_literal(first.as_bytes());
        }
        for part in parts {
            writer.push_literal(b"%%");
            writer.push_literal(part.as_bytes());
        }
    }

    /// A value segment must hold exactly one conversion that consumes exactly one
    /// argument.
    fn check_single_conversion(spec: &str, offset: usize) -> TermGlyphResult<()> {
        let reject = |reason: &str| {
            Err(TermGlyphError::invalid_scalar_format(
                offset,
                &format!("{spec:?} {reason}"),
            ))
        };
        if !spec.starts_with('%') {
            return reject("is not a conversion");
        }
        let parsed = parse_conversion_spec(spec.as_bytes(), offset)?;
        if parsed.len != spec.len() {
            return reject("must hold exactly one conversion");
        }
        if parsed.is_literal_percent()
            || parsed.width == Some(Count::FromArg)
            || parsed.precision == Some(Count::FromArg)
        {
            return reject("must consume exactly one value");
        }
        Ok(())
    }
}
