// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter};

use crate::{ColorValueError, RgbValue};

/// Value the CLI uses for a channel flag that was not passed.
pub const UNSET_CHANNEL: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Raw channel values exactly as they came in from `--red`, `--green`, `--blue`. Any of
/// them may be [`UNSET_CHANNEL`] or otherwise outside of `0..=255`; this is the only type
/// in the crate where such a color can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelArgs {
    pub red: i64,
    pub green: i64,
    pub blue: i64,
}

impl Default for ChannelArgs {
    fn default() -> Self {
        Self {
            red: UNSET_CHANNEL,
            green: UNSET_CHANNEL,
            blue: UNSET_CHANNEL,
        }
    }
}

impl From<RgbValue> for ChannelArgs {
    fn from(RgbValue { red, green, blue }: RgbValue) -> Self {
        Self {
            red: red.into(),
            green: green.into(),
            blue: blue.into(),
        }
    }
}

impl ChannelArgs {
    #[must_use]
    pub fn new(red: i64, green: i64, blue: i64) -> Self { Self { red, green, blue } }

    /// `true` iff all three channels lie in `0..=255`.
    #[must_use]
    pub fn is_valid(&self) -> bool { self.try_into_rgb().is_ok() }

    /// # Errors
    ///
    /// Returns [`ColorValueError::ChannelOutOfRange`] for the first channel (in red,
    /// green, blue order) that does not fit in a `u8`.
    pub fn try_into_rgb(&self) -> Result<RgbValue, ColorValueError> {
        let red = try_channel(Channel::Red, self.red)?;
        let green = try_channel(Channel::Green, self.green)?;
        let blue = try_channel(Channel::Blue, self.blue)?;
        Ok(RgbValue { red, green, blue })
    }
}

fn try_channel(channel: Channel, value: i64) -> Result<u8, ColorValueError> {
    u8::try_from(value).map_err(|_| ColorValueError::ChannelOutOfRange { channel, value })
}
