// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use std::fmt::{Display, Formatter, Result};

/// The subset of SGR (select graphic rendition) codes needed to paint a swatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

pub mod sgr_code_impl {
    use super::{Display, Formatter, Result, SgrCode};

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                    => write!(f, "{CSI}0{SGR}"),
                SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}38;5;{index}{SGR}"),
                SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}48;5;{index}{SGR}"),
                SgrCode::ForegroundRGB(r, g, b)   => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
                SgrCode::BackgroundRGB(r, g, b)   => write!(f, "{CSI}48;2;{r};{g};{b}{SGR}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::SgrCode;

    #[test]
    fn reset() {
        assert_eq!(SgrCode::Reset.to_string(), "\x1b[0m");
    }

    #[test]
    fn fg_color_ansi256() {
        assert_eq!(SgrCode::ForegroundAnsi256(150).to_string(), "\x1b[38;5;150m");
    }

    #[test]
    fn bg_color_ansi256() {
        assert_eq!(SgrCode::BackgroundAnsi256(150).to_string(), "\x1b[48;5;150m");
    }

    #[test]
    fn fg_color_rgb() {
        assert_eq!(
            SgrCode::ForegroundRGB(175, 215, 135).to_string(),
            "\x1b[38;2;175;215;135m"
        );
    }

    #[test]
    fn bg_color_rgb() {
        assert_eq!(
            SgrCode::BackgroundRGB(175, 215, 135).to_string(),
            "\x1b[48;2;175;215;135m"
        );
    }
}
