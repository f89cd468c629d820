// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use crate::Channel;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`ColorValueError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Everything that can go wrong while turning user input into a
/// [`crate::ColorValue`].
///
/// Only [`ColorValueError::InvalidLength`] and [`ColorValueError::ParseError`] ever
/// reach the user. [`ColorValueError::ChannelOutOfRange`] is produced by
/// [`crate::ChannelArgs::try_into_rgb`] and the launcher treats it as "channels were not
/// supplied", falling through to hex parsing.
#[derive(thiserror::Error, miette::Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ColorValueError {
    #[error("invalid hex value specified: '{input}' has {len} digits, expected 3 or 6")]
    #[diagnostic(
        code(hc::hex::invalid_length),
        help("Use a short value like `f80` or a full value like `#ff8800`")
    )]
    InvalidLength { input: String, len: usize },

    #[error("invalid hex value specified: '{segment}' in '{input}' is not a hex number")]
    #[diagnostic(
        code(hc::hex::parse_error),
        help("Only the digits 0-9 and the letters a-f (or A-F) are allowed")
    )]
    ParseError { input: String, segment: String },

    #[error("{channel} channel value {value} is outside of 0..=255")]
    #[diagnostic(code(hc::channel::out_of_range))]
    ChannelOutOfRange { channel: Channel, value: i64 },
}
