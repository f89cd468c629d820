// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::smallvec;

use crate::{ASTStyle, ASText, ChannelArgs, ColorValueError, DisplayFormat, RgbValue, ast,
            try_parse_hex_color};

/// A parsed color, plus how it should be displayed. Built once per invocation from
/// either channel flags ([`Self::try_from_channels`], defaults to
/// [`DisplayFormat::Rgb`]) or a hex string ([`Self::try_from_hex`], defaults to
/// [`DisplayFormat::Hex`]), and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorValue {
    pub rgb: RgbValue,
    pub format: DisplayFormat,
}

impl ColorValue {
    #[must_use]
    pub fn new(rgb: impl Into<RgbValue>, format: DisplayFormat) -> Self {
        Self {
            rgb: rgb.into(),
            format,
        }
    }

    /// # Errors
    ///
    /// Returns [`ColorValueError::ChannelOutOfRange`] if any channel is outside of
    /// `0..=255`, including the unset sentinel `-1`.
    pub fn try_from_channels(channels: &ChannelArgs) -> Result<Self, ColorValueError> {
        let rgb = channels.try_into_rgb()?;
        Ok(Self::new(rgb, DisplayFormat::Rgb))
    }

    /// # Errors
    ///
    /// See [`try_parse_hex_color`].
    pub fn try_from_hex(input: &str) -> Result<Self, ColorValueError> {
        let rgb = try_parse_hex_color(input)?;
        Ok(Self::new(rgb, DisplayFormat::Hex))
    }

    /// Same format, complemented channels.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self {
            rgb: self.rgb.inverted(),
            format: self.format,
        }
    }

    /// Replace the format if `maybe_format` names one (case insensitive). Anything else,
    /// including `None` and the empty string, keeps the current format.
    #[must_use]
    pub fn with_format_override(self, maybe_format: Option<&str>) -> Self {
        match maybe_format.and_then(DisplayFormat::try_from_user_str) {
            Some(format) => Self { format, ..self },
            None => self,
        }
    }

    #[must_use]
    pub fn formatted(&self) -> String { self.format.format(&self.rgb) }

    /// The formatted value padded w/ a space on each side, painted on a background of
    /// this color w/ the inverted color as the foreground so it stays legible.
    #[must_use]
    pub fn to_swatch(&self) -> ASText {
        ast(
            format!(" {} ", self.formatted()),
            smallvec![
                ASTStyle::Foreground(self.rgb.inverted()),
                ASTStyle::Background(self.rgb),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use test_case::test_case;

    use super::*;
    use crate::{ColorSupport, global_color_support};

    #[test]
    fn test_from_channels_defaults_to_rgb() {
        let value = ColorValue::try_from_channels(&ChannelArgs::new(10, 20, 30)).unwrap();
        assert_eq!(value.format, DisplayFormat::Rgb);
        assert_eq!(value.formatted(), "rgb(10,20,30)");
    }

    #[test]
    fn test_from_unset_channels_fails() {
        assert!(ColorValue::try_from_channels(&ChannelArgs::default()).is_err());
    }

    #[test]
    fn test_from_hex_defaults_to_hex() {
        let value = ColorValue::try_from_hex("f00").unwrap();
        assert_eq!(value.rgb, RgbValue::from_u8(255, 0, 0));
        assert_eq!(value.format, DisplayFormat::Hex);
        assert_eq!(value.formatted(), "ff0000");
    }

    #[test]
    fn test_from_hex_with_rgb_override() {
        let value = ColorValue::try_from_hex("#abcdef")
            .unwrap()
            .with_format_override(Some("rgb"));
        assert_eq!(value.rgb, RgbValue::from_u8(171, 205, 239));
        assert_eq!(value.formatted(), "rgb(171,205,239)");
    }

    #[test_case(Some("ALL"), DisplayFormat::All)]
    #[test_case(Some("hex"), DisplayFormat::Hex)]
    #[test_case(Some("cmyk"), DisplayFormat::Rgb)]
    #[test_case(Some(""), DisplayFormat::Rgb)]
    #[test_case(None, DisplayFormat::Rgb)]
    fn test_with_format_override(maybe_format: Option<&str>, expected: DisplayFormat) {
        let value = ColorValue::new((1, 2, 3), DisplayFormat::Rgb);
        assert_eq!(value.with_format_override(maybe_format).format, expected);
    }

    #[test]
    fn test_inverted_keeps_format() {
        let value = ColorValue::new((0, 100, 255), DisplayFormat::Hex);
        let inverted = value.inverted();
        assert_eq!(inverted, ColorValue::new((255, 155, 0), DisplayFormat::Hex));
        assert_eq!(inverted.inverted(), value);
    }

    #[test]
    #[serial]
    fn test_to_swatch_truecolor() {
        global_color_support::set_override(ColorSupport::Truecolor);
        let value = ColorValue::new((255, 0, 0), DisplayFormat::Hex);
        assert_eq!(
            value.to_swatch().to_string(),
            "\x1b[38;2;0;255;255m\x1b[48;2;255;0;0m ff0000 \x1b[0m"
        );
        global_color_support::clear_override();
    }

    #[test]
    #[serial]
    fn test_to_swatch_no_color() {
        global_color_support::set_override(ColorSupport::NoColor);
        let value = ColorValue::new((255, 0, 0), DisplayFormat::All);
        assert_eq!(value.to_swatch().to_string(), " rgb(255,0,0) | ff0000 ");
        global_color_support::clear_override();
    }
}
