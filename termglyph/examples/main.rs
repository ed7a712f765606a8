// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `cargo run --example main -- [path/to/image.ppm]`. Without a path, a small
//! generated gradient is rendered instead.

use termglyph::{
    DisplayPreference, GlyphConfig, GlyphMode, IndexedColor, PpmImage, ResetTarget,
    StyleKind, StyledText, TermGlyphResult, TracingConfig, print_ppm, render_image,
    tg_printf, tg_rgb,
};

fn main() -> miette::Result<()> {
    TracingConfig::new_display(DisplayPreference::Stderr)
        .with_level_filter(tracing_core::LevelFilter::INFO)
        .install_global()?;

    // Directives and printf conversions in one format string.
    {
        let visible = tg_printf!(
            "#o#df%s#0o #ibworking#0c on %d of %d files (%.1f%%)\n",
            tg_rgb!(255, 140, 0),
            IndexedColor::Blue,
            "termglyph",
            3,
            4,
            75.0
        )?;
        tg_printf!("#t#if^ %d visible characters#0\n", IndexedColor::BrightBlack, visible)?;
    }

    // The same kind of output from typed segments.
    {
        StyledText::default()
            .style(StyleKind::Underline)
            .fg(IndexedColor::BrightCyan)
            .text("typed segments")
            .reset(ResetTarget::Style(StyleKind::Underline))
            .text(" can print #0 and 100% as is")
            .text("\n")
            .print()?;
    }

    // A bitmap as colored glyphs.
    match std::env::args().nth(1) {
        Some(path) => {
            print_ppm(path)?;
        }
        None => {
            let image = gradient(24, 6)?;
            let mut stdout = std::io::stdout().lock();
            render_image(&image, &mut stdout, &GlyphConfig::default())?;
            render_image(
                &image,
                &mut stdout,
                &GlyphConfig {
                    mode: GlyphMode::Plain,
                    ..GlyphConfig::default()
                },
            )?;
        }
    }

    Ok(())
}

fn gradient(width: usize, height: usize) -> TermGlyphResult<PpmImage> {
    let mut samples = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let red = u8::try_from(x * 255 / (width - 1)).unwrap_or(u8::MAX);
            let blue = u8::try_from(y * 255 / (height - 1)).unwrap_or(u8::MAX);
            samples.extend_from_slice(&[red, 128, blue]);
        }
    }
    PpmImage::try_new(width, height, samples)
}
