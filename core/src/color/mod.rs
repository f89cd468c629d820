// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod channel_args;
pub mod color_value;
pub mod display_format;
pub mod hex_color_parser;
pub mod rgb_value;

// Re-export.
pub use channel_args::*;
pub use color_value::*;
pub use display_format::*;
pub use hex_color_parser::*;
pub use rgb_value::*;
