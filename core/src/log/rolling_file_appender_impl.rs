// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// The log file is never rotated, since `hc` runs once and exits. The file (and any
/// missing parent folders) are created right away.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
/// - The file or its folder can't be created
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access the folder of log file {}. It might not exist, or you don't have the required permissions.",
            path.display()
        )
    })?;

    // A bare file name like `hc.log` has an empty parent.
    let parent = if parent.as_os_str().is_empty() {
        std::path::Path::new(".")
    } else {
        parent
    };

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access the file name of log file {}. It might not exist, or you don't have the required permissions.",
            path.display()
        )
    })?;

    // Unlike `rolling::never()` the builder reports failures instead of panicking.
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}
