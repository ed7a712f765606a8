// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence table: the immutable map from each directive kind to the bytes it
//! expands to.

// Attach sources.
pub mod absolute_color;
pub mod escape_table;
pub mod indexed_color;
pub mod rgb_color;

// Re-export.
pub use absolute_color::*;
pub use escape_table::*;
pub use indexed_color::*;
pub use rgb_color::*;
