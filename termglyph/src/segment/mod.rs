// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod styled_text;

// Re-export.
pub use styled_text::*;
