// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scalar formatting: everything that happens to the resolved buffer after the
//! directives are gone.

// Attach sources.
pub mod conversion_spec;
pub mod printf_engine;
pub mod scalar_format_engine;

// Re-export.
pub use conversion_spec::*;
pub use printf_engine::*;
pub use scalar_format_engine::*;
