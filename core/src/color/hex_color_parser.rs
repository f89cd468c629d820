// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string can be in the following formats, the leading `#` is
//! optional:
//! - `#RRGGBB`, eg: `#FF0000` for red.
//! - `#RGB`, eg: `#F00` for red, which is expanded to `#FF0000` before parsing.

use nom::{IResult, Parser, combinator::all_consuming};

use crate::{ColorValueError, RgbValue};

pub const HEX_PREFIX: char = '#';
pub const SHORT_HEX_LEN: usize = 3;
pub const FULL_HEX_LEN: usize = 6;

/// Removes a single leading `#` if there is one.
#[must_use]
pub fn strip_hex_prefix(input: &str) -> &str { input.strip_prefix(HEX_PREFIX).unwrap_or(input) }

/// Number of characters (not bytes) in `input` once the optional `#` is removed. This is
/// what the length rules (`< 3` shows help, only 3 or 6 are parsed) are checked against.
#[must_use]
pub fn hex_digit_count(input: &str) -> usize { strip_hex_prefix(input).chars().count() }

/// Duplicates each character, eg: `abc` -> `aabbcc`.
#[must_use]
pub fn expand_short_hex(digits: &str) -> String {
    digits.chars().flat_map(|it| [it, it]).collect()
}

/// Parse exactly six hex digits (no `#`) into a [`RgbValue`].
///
/// # Errors
///
/// Returns a [`nom::Err`] whose `input` starts at the first segment that is not a valid
/// 2 digit hex number.
pub fn parse_hex_digits(input: &str) -> IResult<&str, RgbValue> {
    let it = (
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
    );
    let (input, (red, green, blue)) = all_consuming(it).parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Parse a user supplied hex color (`f00`, `#f00`, `ff0000`, `#FF0000`).
///
/// # Errors
///
/// - [`ColorValueError::InvalidLength`] if there aren't exactly 3 or 6 characters after
///   the optional `#`.
/// - [`ColorValueError::ParseError`] if any 2 character segment of the (expanded) digits
///   is not a hex number.
pub fn try_parse_hex_color(input: &str) -> Result<RgbValue, ColorValueError> {
    let digits = strip_hex_prefix(input);
    let len = digits.chars().count();

    let expanded = match len {
        SHORT_HEX_LEN => expand_short_hex(digits),
        FULL_HEX_LEN => digits.to_string(),
        _ => {
            return Err(ColorValueError::InvalidLength {
                input: input.to_string(),
                len,
            });
        }
    };

    match parse_hex_digits(&expanded) {
        Ok((_, rgb)) => Ok(rgb),
        Err(nom::Err::Error(error) | nom::Err::Failure(error)) => {
            Err(ColorValueError::ParseError {
                input: input.to_string(),
                segment: error.input.chars().take(2).collect(),
            })
        }
        Err(nom::Err::Incomplete(_)) => Err(ColorValueError::ParseError {
            input: input.to_string(),
            segment: expanded,
        }),
    }
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use nom::{IResult,
              Parser,
              bytes::complete::take_while_m_n,
              combinator::map_res};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// As long as this returns `true` items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}
