// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Call scoped configuration. These are plain values: nothing is read from files or the
//! environment, and nothing is remembered between calls.

use crate::Layer;

/// How the resolver reacts to a `#` that does not start a known directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Emit the `#` literally and resume scanning at the next character.
    #[default]
    Lenient,
    /// Fail with [`crate::TermGlyphError::UnrecognizedDirective`].
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatConfig {
    pub strictness: Strictness,
}

impl FormatConfig {
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
        }
    }

    #[must_use]
    pub fn is_strict(&self) -> bool { self.strictness == Strictness::Strict }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphMode {
    /// Each glyph is painted with its pixel's color.
    #[default]
    Colored,
    /// Glyphs only. No color directives are emitted.
    Plain,
    /// A background painted blank cell per pixel, with no glyph.
    ColorOnly,
}

/// Options for [`crate::render_ppm`] and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphConfig {
    pub mode: GlyphMode,
    /// Which layer the pixel color is painted on in [`GlyphMode::Colored`].
    /// [`GlyphMode::ColorOnly`] always paints the background.
    pub layer: Layer,
    pub format: FormatConfig,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            mode: GlyphMode::Colored,
            layer: Layer::Background,
            format: FormatConfig::default(),
        }
    }
}

impl GlyphConfig {
    /// The per pixel format string for this configuration.
    #[must_use]
    pub fn pixel_format(&self) -> &'static str {
        match (self.mode, self.layer) {
            (GlyphMode::Plain, _) => "%c",
            (GlyphMode::ColorOnly, _) => "#db ",
            (GlyphMode::Colored, Layer::Background) => "#db%c",
            (GlyphMode::Colored, Layer::Foreground) => "#df%c",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn defaults_are_lenient_and_colored_background() {
        let config = GlyphConfig::default();
        assert_eq!(config.mode, GlyphMode::Colored);
        assert_eq!(config.layer, Layer::Background);
        assert!(!config.format.is_strict());
        assert!(FormatConfig::strict().is_strict());
    }

    #[test_case(GlyphMode::Colored, Layer::Background, "#db%c")]
    #[test_case(GlyphMode::Colored, Layer::Foreground, "#df%c")]
    #[test_case(GlyphMode::Plain, Layer::Background, "%c")]
    #[test_case(GlyphMode::Plain, Layer::Foreground, "%c")]
    #[test_case(GlyphMode::ColorOnly, Layer::Foreground, "#db ")]
    fn pixel_format_per_mode(mode: GlyphMode, layer: Layer, expected: &str) {
        let config = GlyphConfig {
            mode,
            layer,
            ..GlyphConfig::default()
        };
        assert_eq!(config.pixel_format(), expected);
    }
}
