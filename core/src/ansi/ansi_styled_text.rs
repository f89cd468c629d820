// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;

use crate::{RgbValue, SgrCode};

/// Please don't create this struct directly, use [`ast()`].
///
/// It has two fields:
/// - `text` - the text to print.
/// - `styles` - a list of [`ASTStyle`] to apply to the text. This is owned in a stack
///   allocated buffer, which can spill to the heap if it gets larger than
///   `sizing::MAX_STYLE_ATTRIB_SIZE`.
///
/// How the colors are rendered depends on [`crate::global_color_support::detect()`].
/// When there's no color support, only the text is written.
///
/// # Example usage:
///
/// ```rust
/// use hc_core::{ASTStyle, ast};
/// use smallvec::smallvec;
///
/// let styled_text = ast(
///     " ff0000 ",
///     smallvec![
///         ASTStyle::Foreground((0, 255, 255).into()),
///         ASTStyle::Background((255, 0, 0).into()),
///     ],
/// );
/// styled_text.println();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiStyledText {
    pub text: String,
    pub styles: ASTextStyles,
}

pub type ASText = AnsiStyledText;
pub type ASTextStyles = sizing::InlineVecASTStyles;

pub(in crate::ansi) mod sizing {
    use super::{ASTStyle, SmallVec};

    /// A swatch only ever needs a foreground and a background.
    pub const MAX_STYLE_ATTRIB_SIZE: usize = 2;
    pub type InlineVecASTStyles = SmallVec<[ASTStyle; MAX_STYLE_ATTRIB_SIZE]>;
}

/// Easy to use constructor function, instead of creating a new [`AnsiStyledText`]
/// struct directly.
pub fn ast(arg_text: impl AsRef<str>, arg_styles: impl Into<ASTextStyles>) -> ASText {
    ASText {
        text: arg_text.as_ref().into(),
        styles: arg_styles.into(),
    }
}

mod ansi_styled_text_impl {
    use super::{ASTStyle, ASText, AnsiStyledText, RgbValue};

    impl AnsiStyledText {
        pub fn println(&self) {
            println!("{self}");
        }

        #[must_use]
        pub fn fg_color(mut self, arg_color: impl Into<RgbValue>) -> ASText {
            self.styles.push(ASTStyle::Foreground(arg_color.into()));
            self
        }

        #[must_use]
        pub fn bg_color(mut self, arg_color: impl Into<RgbValue>) -> ASText {
            self.styles.push(ASTStyle::Background(arg_color.into()));
            self
        }
    }
}

/// A single style attribute. Only colors are needed here, and they're always stored
/// as [`RgbValue`], then downgraded at render time to whatever the terminal supports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ASTStyle {
    Foreground(RgbValue),
    Background(RgbValue),
}

mod style_impl {
    use std::fmt::{Display, Formatter, Result};

    use crate::{ASTStyle, ColorSupport, RgbValue, SgrCode, convert_rgb_into_ansi256,
                convert_rgb_into_grayscale, global_color_support};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ColorKind {
        Foreground,
        Background,
    }

    fn fmt_color(
        color: RgbValue,
        color_kind: ColorKind,
        color_support: ColorSupport,
        f: &mut Formatter<'_>,
    ) -> Result {
        match color_support {
            ColorSupport::Ansi256 => {
                let index = convert_rgb_into_ansi256(color).index;
                write!(
                    f,
                    "{}",
                    match color_kind {
                        ColorKind::Foreground => SgrCode::ForegroundAnsi256(index),
                        ColorKind::Background => SgrCode::BackgroundAnsi256(index),
                    }
                )
            }

            ColorSupport::Grayscale => {
                let index = convert_rgb_into_grayscale(color).index;
                write!(
                    f,
                    "{}",
                    match color_kind {
                        ColorKind::Foreground => SgrCode::ForegroundAnsi256(index),
                        ColorKind::Background => SgrCode::BackgroundAnsi256(index),
                    }
                )
            }

            ColorSupport::Truecolor => {
                let RgbValue { red, green, blue } = color;
                write!(
                    f,
                    "{}",
                    match color_kind {
                        ColorKind::Foreground => SgrCode::ForegroundRGB(red, green, blue),
                        ColorKind::Background => SgrCode::BackgroundRGB(red, green, blue),
                    }
                )
            }

            ColorSupport::NoColor => Ok(()),
        }
    }

    impl Display for ASTStyle {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let color_support = global_color_support::detect();
            match self {
                ASTStyle::Foreground(color) => fmt_color(*color, ColorKind::Foreground, color_support, f),
                ASTStyle::Background(color) => fmt_color(*color, ColorKind::Background, color_support, f),
            }
        }
    }
}

mod display_trait_impl {
    use super::{ASText, Display, Formatter, Result, SgrCode};
    use crate::{ColorSupport, global_color_support};

    impl Display for ASText {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            if global_color_support::detect() == ColorSupport::NoColor {
                return write!(f, "{}", self.text);
            }
            for style_item in &self.styles {
                write!(f, "{style_item}")?;
            }
            write!(f, "{}", self.text)?;
            write!(f, "{}", SgrCode::Reset)?;
            Ok(())
        }
    }
}
