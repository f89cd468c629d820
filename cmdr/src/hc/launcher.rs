// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::CommandFactory;
use hc_core::{ChannelArgs, ColorValue, ColorValueError, CommonResult, SHORT_HEX_LEN,
              hex_digit_count};
use miette::IntoDiagnostic;

use crate::command_with_build_info;

/// Everything the launcher needs from the command line, independent of which binary
/// parsed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorRequest {
    /// `None` for binaries that don't take channel flags.
    pub channels: Option<ChannelArgs>,
    pub maybe_hex: Option<String>,
    pub maybe_format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Parsed(ColorValue),
    /// Nothing usable was given, so show the usage.
    ShowHelp,
}

/// 1. Channels that are all in range win, and default to the `rgb` format.
/// 2. Otherwise a hex value w/ fewer than 3 digits (or none at all) asks for help.
/// 3. Otherwise the hex value must parse, and defaults to the `hex` format.
///
/// A recognized `maybe_format` overrides the default in cases 1 and 3.
///
/// # Errors
///
/// Returns the hex parser's error in case 3.
pub fn resolve_color(request: &ColorRequest) -> Result<Resolution, ColorValueError> {
    let maybe_format = request.maybe_format.as_deref();

    if let Some(channels) = &request.channels {
        match ColorValue::try_from_channels(channels) {
            Ok(color_value) => {
                return Ok(Resolution::Parsed(
                    color_value.with_format_override(maybe_format),
                ));
            }
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "Channels not usable, trying hex value",
                    error = %error
                );
            }
        }
    }

    let hex = request.maybe_hex.as_deref().unwrap_or_default();
    if hex_digit_count(hex) < SHORT_HEX_LEN {
        tracing::debug!(message = "Hex value too short, showing help", hex = ?hex);
        return Ok(Resolution::ShowHelp);
    }

    let color_value = ColorValue::try_from_hex(hex)?;
    Ok(Resolution::Parsed(color_value.with_format_override(maybe_format)))
}

/// Resolve `request` and print the result: the swatch on stdout, or the help of
/// `T`'s command.
///
/// # Errors
///
/// Returns a [`miette::Report`] for an unparsable hex value, or if help can't be
/// written.
pub fn launch<T: CommandFactory>(request: &ColorRequest) -> CommonResult<()> {
    match resolve_color(request)? {
        Resolution::Parsed(color_value) => {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Resolved color",
                color_value = ?color_value,
                inverted = ?color_value.inverted()
            );
            color_value.to_swatch().println();
        }
        Resolution::ShowHelp => {
            command_with_build_info::<T>().print_help().into_diagnostic()?;
        }
    }
    Ok(())
}
