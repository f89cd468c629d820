// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors from `main() -> CommonResult<()>` are printed to stderr by miette's global
//! report handler. This configures it to match what stderr can display.

use hc_core::{ColorSupport, Stream, examine_env_vars_to_determine_color_support};
use miette::MietteHandlerOpts;

/// The [`miette::ErrorHook`] is lazily evaluated, so nothing is detected unless an
/// error is actually reported.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let color_support = examine_env_vars_to_determine_color_support(Stream::Stderr);
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "miette::set_hook",
            color_support = ?color_support
        );
        Box::new(
            MietteHandlerOpts::new()
                .color(color_support != ColorSupport::NoColor)
                .rgb_colors(match color_support {
                    ColorSupport::Truecolor => miette::RgbColors::Preferred,
                    _ => miette::RgbColors::Never,
                })
                .wrap_lines(true)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
