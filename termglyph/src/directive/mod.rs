// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Estimator, scanner and resolver for the `#` directive mini-language.

// Attach sources.
pub mod escape_writer;
pub mod estimator;
pub mod format_arg;
pub mod resolver;
pub mod scanner;

// Re-export.
pub use escape_writer::*;
pub use estimator::*;
pub use format_arg::*;
pub use resolver::*;
pub use scanner::*;
