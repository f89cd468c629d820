// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

use crate::RgbValue;

/// Which representation(s) of a color to print. Parsing is case insensitive, so `RGB`,
/// `Rgb` and `rgb` all select [`DisplayFormat::Rgb`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DisplayFormat {
    #[default]
    All,
    Rgb,
    Hex,
}

pub const ALL_FORMAT_SEPARATOR: &str = " | ";

impl DisplayFormat {
    /// Returns `None` for anything that isn't one of `all`, `rgb`, `hex`.
    #[must_use]
    pub fn try_from_user_str(input: &str) -> Option<Self> { input.parse().ok() }

    #[must_use]
    pub fn format(&self, rgb: &RgbValue) -> String {
        match self {
            DisplayFormat::Rgb => rgb.as_rgb_string(),
            DisplayFormat::Hex => rgb.as_hex_string(),
            DisplayFormat::All => format!(
                "{}{ALL_FORMAT_SEPARATOR}{}",
                rgb.as_rgb_string(),
                rgb.as_hex_string()
            ),
        }
    }

    /// Used in the `--format` help text, eg: `all, rgb, hex`.
    #[must_use]
    pub fn possible_values() -> String {
        use strum::IntoEnumIterator;
        Self::iter()
            .map(|it| it.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("all", Some(DisplayFormat::All))]
    #[test_case("RGB", Some(DisplayFormat::Rgb))]
    #[test_case("Hex", Some(DisplayFormat::Hex))]
    #[test_case("", None)]
    #[test_case("hsl", None)]
    #[test_case(" rgb", None)]
    fn test_try_from_user_str(input: &str, expected: Option<DisplayFormat>) {
        assert_eq!(DisplayFormat::try_from_user_str(input), expected);
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(DisplayFormat::default(), DisplayFormat::All);
    }

    #[test]
    fn test_all_is_rgb_and_hex_joined() {
        let rgb = RgbValue::from_u8(1, 128, 255);
        assert_eq!(
            DisplayFormat::All.format(&rgb),
            format!(
                "{} | {}",
                DisplayFormat::Rgb.format(&rgb),
                DisplayFormat::Hex.format(&rgb)
            )
        );
        assert_eq!(DisplayFormat::All.format(&rgb), "rgb(1,128,255) | 0180ff");
    }

    #[test]
    fn test_possible_values() {
        assert_eq!(DisplayFormat::possible_values(), "all, rgb, hex");
    }
}
