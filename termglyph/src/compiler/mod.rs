// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod macros;
pub mod output_compiler;

// Re-export.
pub use output_compiler::*;
