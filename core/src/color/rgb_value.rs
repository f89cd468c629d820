// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A color whose channels are valid by construction. Use
/// [`crate::ChannelArgs::try_into_rgb`] or [`crate::try_parse_hex_color`] to get one from
/// user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Per channel complement (`255 - value`). Applying it twice yields the original
    /// color.
    #[must_use]
    pub const fn inverted(&self) -> Self {
        Self {
            red: u8::MAX - self.red,
            green: u8::MAX - self.green,
            blue: u8::MAX - self.blue,
        }
    }

    /// Eg: `rgb(171,205,239)`.
    #[must_use]
    pub fn as_rgb_string(&self) -> String {
        let Self { red, green, blue } = self;
        format!("rgb({red},{green},{blue})")
    }

    /// Six lowercase hex digits, zero padded per channel, without a leading `#`. Eg:
    /// `abcdef`, `05000a`.
    #[must_use]
    pub fn as_hex_string(&self) -> String {
        let Self { red, green, blue } = self;
        format!("{red:02x}{green:02x}{blue:02x}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_new() {
        let value = RgbValue::from_u8(1, 2, 3);
        assert_eq!((value.red, value.green, value.blue), (1, 2, 3));
        assert_eq!(RgbValue::from((1, 2, 3)), value);
    }

    #[test_case(RgbValue::from_u8(0, 0, 0), RgbValue::from_u8(255, 255, 255))]
    #[test_case(RgbValue::from_u8(255, 0, 0), RgbValue::from_u8(0, 255, 255))]
    #[test_case(RgbValue::from_u8(10, 128, 200), RgbValue::from_u8(245, 127, 55))]
    fn test_inverted(color: RgbValue, expected: RgbValue) {
        assert_eq!(color.inverted(), expected);
    }

    #[test]
    fn test_inverted_is_self_inverse() {
        for red in (0..=255).step_by(15) {
            for green in (0..=255).step_by(17) {
                for blue in [0, 1, 127, 128, 254, 255] {
                    let color = RgbValue::from_u8(red, green, blue);
                    assert_eq!(color.inverted().inverted(), color);
                }
            }
        }
    }

    #[test_case(RgbValue::from_u8(171, 205, 239), "rgb(171,205,239)")]
    #[test_case(RgbValue::from_u8(0, 0, 0), "rgb(0,0,0)")]
    fn test_as_rgb_string(color: RgbValue, expected: &str) {
        assert_eq!(color.as_rgb_string(), expected);
    }

    #[test_case(RgbValue::from_u8(171, 205, 239), "abcdef")]
    #[test_case(RgbValue::from_u8(5, 0, 10), "05000a")]
    #[test_case(RgbValue::from_u8(255, 255, 255), "ffffff")]
    fn test_as_hex_string(color: RgbValue, expected: &str) {
        assert_eq!(color.as_hex_string(), expected);
    }
}
