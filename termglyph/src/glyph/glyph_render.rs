// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Renders a [`PpmImage`] as rows of glyphs. Every pixel is one call to the styled
//! output compiler, and each row ends with its own `"\n"` call, so the terminal is back
//! in its default state after every cell.

use crate::{
    GlyphConfig, GlyphMode, PpmImage, PrintfEngine, TermGlyphError, TermGlyphResult,
    glyph_for_luminance, luminance, tg_args, write_styled_with,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

const ROW_END: &str = "\n";

/// Returns the visible character count summed over every call.
///
/// # Errors
///
/// Returns an error if:
/// - `sink` rejects a cell ([`TermGlyphError::UnderlyingWriteFailure`]). Cells already
///   written stay written
/// - Compiling a cell fails, see [`write_styled_with`]
pub fn render_image(
    image: &PpmImage,
    sink: &mut dyn Write,
    config: &GlyphConfig,
) -> TermGlyphResult<usize> {
    let pixel_format = config.pixel_format();
    let mut engine = PrintfEngine;
    let mut visible = 0_usize;

    for row in image.rows() {
        for color in row {
            let glyph = glyph_for_luminance(luminance(color));
            let args = match config.mode {
                GlyphMode::Colored => tg_args!(color, glyph),
                GlyphMode::Plain => tg_args!(glyph),
                GlyphMode::ColorOnly => tg_args!(color),
            };
            visible = visible.saturating_add(write_styled_with(
                sink,
                pixel_format,
                &args,
                &config.format,
                &mut engine,
            )?);
        }
        visible = visible.saturating_add(write_styled_with(
            sink,
            ROW_END,
            &[],
            &config.format,
            &mut engine,
        )?);
    }

    tracing::debug!(
        message = "rendered glyph image",
        width = image.width(),
        height = image.height(),
        visible
    );

    Ok(visible)
}

/// Parses a `P6` bitmap from `reader` and renders it. Nothing is written when the
/// bitmap is malformed.
///
/// # Errors
///
/// Returns an error if:
/// - The bitmap can't be parsed, see [`PpmImage::parse`]. Nothing is written
/// - Rendering fails, see [`render_image`]
pub fn render_ppm(
    reader: &mut impl BufRead,
    sink: &mut dyn Write,
    config: &GlyphConfig,
) -> TermGlyphResult<usize> {
    let image = PpmImage::parse(reader)?;
    render_image(&image, sink, config)
}

/// # Errors
///
/// Returns an error if:
/// - `path` can't be opened ([`TermGlyphError::Io`])
/// - Parsing or rendering fails, see [`render_ppm`]
pub fn render_ppm_file(
    path: impl AsRef<Path>,
    sink: &mut dyn Write,
    config: &GlyphConfig,
) -> TermGlyphResult<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        tracing::warn!(message = "could not open bitmap", path = %path.display(), %source);
        TermGlyphError::Io { source }
    })?;
    render_ppm(&mut BufReader::new(file), sink, config)
}

/// Renders the bitmap at `path` to a locked stdout with the default configuration.
///
/// # Errors
///
/// Same as [`render_ppm_file`], and also if stdout can't be flushed.
pub fn print_ppm(path: impl AsRef<Path>) -> TermGlyphResult<usize> {
    let stdout = std::io::stdout();
    let mut locked = stdout.lock();
    let visible = render_ppm_file(path, &mut locked, &GlyphConfig::default())?;
    locked
        .flush()
        .map_err(|source| TermGlyphError::UnderlyingWriteFailure { source })?;
    Ok(visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Layer, MalformedInputKind,
        test_fixtures::{CappedSink, try_create_temp_dir},
    };
    use pretty_assertions::assert_eq;

    const WHITE_2X1: &[u8] = b"P6\n2 1\n255\n\xff\xff\xff\xff\xff\xff";

    fn render(bytes: &[u8], config: &GlyphConfig) -> (String, usize) {
        let mut sink = Vec::new();
        let mut reader = bytes;
        let visible = render_ppm(&mut reader, &mut sink, config).unwrap();
        (String::from_utf8(sink).unwrap(), visible)
    }

    #[test]
    fn white_pixels_become_painted_at_signs() {
        let (output, visible) = render(WHITE_2X1, &GlyphConfig::default());
        assert_eq!(
            output,
            "\x1b[48;2;255;255;255m@\x1b[00m\x1b[48;2;255;255;255m@\x1b[00m\n\x1b[00m"
        );
        assert_eq!(visible, 3);
    }

    #[test]
    fn plain_mode_emits_no_color() {
        let config = GlyphConfig {
            mode: GlyphMode::Plain,
            ..GlyphConfig::default()
        };
        let (output, visible) = render(WHITE_2X1, &config);
        assert_eq!(output, "@\x1b[00m@\x1b[00m\n\x1b[00m");
        assert_eq!(visible, 3);
    }

    #[test]
    fn foreground_layer_and_multiple_rows() {
        let config = GlyphConfig {
            layer: Layer::Foreground,
            ..GlyphConfig::default()
        };
        let bytes = b"P6 1 2 255\n\x00\x00\x00\x80\x80\x80";
        let (output, visible) = render(bytes, &config);
        assert_eq!(
            output,
            concat!(
                "\x1b[38;2;000;000;000m \x1b[00m\n\x1b[00m",
                "\x1b[38;2;128;128;128m=\x1b[00m\n\x1b[00m",
            )
        );
        assert_eq!(visible, 4);
    }

    #[test]
    fn color_only_mode_paints_blank_cells() {
        let config = GlyphConfig {
            mode: GlyphMode::ColorOnly,
            layer: Layer::Foreground,
            ..GlyphConfig::default()
        };
        let (output, visible) = render(WHITE_2X1, &config);
        assert_eq!(
            output,
            "\x1b[48;2;255;255;255m \x1b[00m\x1b[48;2;255;255;255m \x1b[00m\n\x1b[00m"
        );
        assert_eq!(visible, 3);
    }

    #[test]
    fn hand_built_images_render_every_row() {
        let image = PpmImage::try_new(2, 2, vec![255; 12]).unwrap();
        let mut sink = Vec::new();
        let config = GlyphConfig {
            mode: GlyphMode::Plain,
            ..GlyphConfig::default()
        };
        let visible = render_image(&image, &mut sink, &config).unwrap();
        assert_eq!(visible, 6);
        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "@\x1b[00m@\x1b[00m\n\x1b[00m@\x1b[00m@\x1b[00m\n\x1b[00m"
        );
    }

    #[test]
    fn sink_failure_mid_image_keeps_the_first_cell() {
        let first_cell = "\x1b[48;2;255;255;255m@\x1b[00m";
        let mut sink = CappedSink::new(first_cell.len());
        let mut reader = WHITE_2X1;
        let result = render_ppm(&mut reader, &mut sink, &GlyphConfig::default());
        assert!(matches!(
            result,
            Err(TermGlyphError::UnderlyingWriteFailure { .. })
        ));
        assert_eq!(sink.accepted, first_cell.as_bytes().to_vec());
    }

    #[test]
    fn malformed_bitmaps_write_nothing() {
        let mut sink = Vec::new();
        let mut reader: &[u8] = b"P6 2 1 255\n\xff\xff\xff";
        let result = render_ppm(&mut reader, &mut sink, &GlyphConfig::default());
        assert!(matches!(
            result,
            Err(TermGlyphError::MalformedInput(
                MalformedInputKind::TruncatedPixelData { .. }
            ))
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn renders_a_file() {
        let temp_dir = try_create_temp_dir().unwrap();
        let path = temp_dir.join("white.ppm");
        std::fs::write(&path, WHITE_2X1).unwrap();

        let mut sink = Vec::new();
        let visible = render_ppm_file(&path, &mut sink, &GlyphConfig::default()).unwrap();
        assert_eq!(visible, 3);
        assert_eq!(sink.iter().filter(|it| **it == b'@').count(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp_dir = try_create_temp_dir().unwrap();
        let mut sink = Vec::new();
        let result = render_ppm_file(
            temp_dir.join("nope.ppm"),
            &mut sink,
            &GlyphConfig::default(),
        );
        assert!(matches!(result, Err(TermGlyphError::Io { .. })));
        assert!(sink.is_empty());
    }
}
