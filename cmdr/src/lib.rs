// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # hc-cmdr
//!
//! Two small binaries built on [`hc_core`]:
//!
//! - `hc` takes either `-r/-g/-b` channel values or a hex value, and prints the color
//!   as `rgb(R,G,B)`, as a 6 digit hex value, or both, on a swatch of that color.
//! - `hcx` does the same for hex values only.
//!
//! ```text
//! $ hc f00 -f hex
//!  ff0000
//! $ hc -r 10 -g 20 -b 30
//!  rgb(10,20,30)
//! $ hcx '#abcdef'
//!  abcdef
//! ```
//!
//! The text is drawn in the inverted color so it stays legible on the swatch. Pass
//! `-l` to log debug output to stderr, or `--log-file [path]` to log to a file.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod common;
pub mod hc;

// Re-export.
pub use common::*;
pub use hc::*;
