// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # hc_core
//!
//! The shared core of the `hc` and `hcx` command line tools. It turns either three
//! channel values or a hex string into a [`ColorValue`], and renders that value as a
//! terminal swatch whose foreground is the inverted background color.
//!
//! - [`color`] parsing, channel validation, inversion, and formatting.
//! - [`ansi`] SGR escape codes, styled text, and terminal color support detection.
//! - [`log`] tracing subscriber setup that the binaries opt into with `-l`.
//! - [`common`] the [`CommonResult`] alias and the [`ColorValueError`] type.
//!
//! # Example
//!
//! ```
//! use hc_core::{ColorValue, DisplayFormat};
//!
//! let color = ColorValue::try_from_hex("#f00").unwrap();
//! assert_eq!(color.format, DisplayFormat::Hex);
//! assert_eq!(color.formatted(), "ff0000");
//! assert_eq!(color.inverted().rgb.as_hex_string(), "00ffff");
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod ansi;
pub mod color;
pub mod common;
pub mod log;

// Re-export.
pub use ansi::*;
pub use color::*;
pub use common::*;
pub use log::*;
