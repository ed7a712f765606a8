// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;
use tracing_appender::rolling::RollingFileAppender;

/// Opens (creating it if needed) a log file that is appended to and never rotated.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
/// - The file can't be created or opened for appending
pub fn try_create(path: &Path) -> miette::Result<RollingFileAppender> {
    let parent = path.parent().ok_or_else(|| {
        miette::miette!("Log file {} has no parent folder.", path.display())
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Log file {} has no file name.", path.display())
    })?;

    RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().as_ref())
        .build(parent)
        .map_err(|err| miette::miette!("Can't open log file {}: {err}", path.display()))
}
