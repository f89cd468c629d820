// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>

use crate::RgbValue;

/// Index into the xterm 256 color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnsiValue {
    pub index: u8,
}

impl AnsiValue {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }
}

impl From<RgbValue> for AnsiValue {
    fn from(rgb: RgbValue) -> Self { convert_rgb_into_ansi256(rgb) }
}

mod palette {
    /// Indices 16..=231 are a 6x6x6 color cube.
    pub const CUBE_START: u8 = 16;
    /// Indices 232..=255 are a 24 step grayscale ramp from `rgb(8,8,8)` to
    /// `rgb(238,238,238)` in steps of 10.
    pub const GRAY_RAMP_START: u8 = 232;
    pub const GRAY_RAMP_STEPS: u8 = 24;
    pub const CUBE_BLACK: u8 = 16;
    pub const CUBE_WHITE: u8 = 231;
    /// Colors whose channels are all within this distance of their average use the
    /// grayscale ramp.
    pub const GRAY_TOLERANCE: u8 = 10;
}

/// Nearest entry in the 256 color palette: the grayscale ramp for (almost) neutral
/// colors, the color cube for everything else.
#[must_use]
pub fn convert_rgb_into_ansi256(rgb: RgbValue) -> AnsiValue {
    let RgbValue { red, green, blue } = rgb;
    let sum = u16::from(red) + u16::from(green) + u16::from(blue);
    let avg = u8::try_from(sum / 3).unwrap_or(u8::MAX);
    let max_diff = red
        .abs_diff(avg)
        .max(green.abs_diff(avg))
        .max(blue.abs_diff(avg));

    if max_diff < palette::GRAY_TOLERANCE {
        return gray_level_into_ansi256(avg);
    }

    AnsiValue::new(
        palette::CUBE_START
            + 36 * cube_index(red)
            + 6 * cube_index(green)
            + cube_index(blue),
    )
}

/// Luminance of `rgb` (ITU-R BT.601 weights) mapped onto the grayscale ramp.
#[must_use]
pub fn convert_rgb_into_grayscale(rgb: RgbValue) -> AnsiValue {
    let RgbValue { red, green, blue } = rgb;
    let luma =
        (299 * u32::from(red) + 587 * u32::from(green) + 114 * u32::from(blue)) / 1000;
    gray_level_into_ansi256(u8::try_from(luma).unwrap_or(u8::MAX))
}

/// The 6 cube levels are `0, 95, 135, 175, 215, 255`.
fn cube_index(value: u8) -> u8 {
    match value {
        0..48 => 0,
        48..115 => 1,
        _ => (value - 35) / 40,
    }
}

fn gray_level_into_ansi256(level: u8) -> AnsiValue {
    match level {
        0..8 => AnsiValue::new(palette::CUBE_BLACK),
        247.. => AnsiValue::new(palette::CUBE_WHITE),
        _ => AnsiValue::new(
            palette::GRAY_RAMP_START + ((level - 8) / 10).min(palette::GRAY_RAMP_STEPS - 1),
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case((0, 0, 0), 16)]
    #[test_case((255, 255, 255), 231)]
    #[test_case((0, 128, 255), 33)]
    #[test_case((255, 128, 0), 208)]
    #[test_case((255, 0, 0), 196)]
    #[test_case((0, 255, 255), 51)]
    #[test_case((128, 128, 128), 244)]
    #[test_case((95, 0, 255), 57)]
    fn test_convert_rgb_into_ansi256(rgb: (u8, u8, u8), index: u8) {
        assert_eq!(convert_rgb_into_ansi256(rgb.into()), AnsiValue::new(index));
        assert_eq!(AnsiValue::from(RgbValue::from(rgb)), AnsiValue::new(index));
    }

    #[test_case((0, 0, 0), 16)]
    #[test_case((255, 255, 255), 231)]
    #[test_case((128, 128, 128), 244)]
    #[test_case((255, 0, 0), 238)]
    #[test_case((0, 255, 255), 249)]
    #[test_case((0, 128, 255), 241)]
    fn test_convert_rgb_into_grayscale(rgb: (u8, u8, u8), index: u8) {
        assert_eq!(convert_rgb_into_grayscale(rgb.into()), AnsiValue::new(index));
    }

    #[test]
    fn test_gray_ramp_never_overflows() {
        for level in 0..=u8::MAX {
            let AnsiValue { index } = gray_level_into_ansi256(level);
            assert!(index == 16 || index == 231 || (232..=255).contains(&index));
        }
    }
}
