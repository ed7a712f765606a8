// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod glyph_render;
pub mod luminance;
pub mod ppm;

// Re-export.
pub use glyph_render::*;
pub use luminance::*;
pub use ppm::*;
