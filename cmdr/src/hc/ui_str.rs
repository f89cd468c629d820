// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const HC_ABOUT: &str =
    "🎨 Convert between hex and rgb colors, and preview them in the terminal";

pub const HCX_ABOUT: &str = "🎨 Preview a hex color in the terminal, in hex and rgb";

/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
pub const HC_HELP_TEMPLATE: &str = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  hc [options] [hex_value]\n  hc -r <red> -g <green> -b <blue> [options]\n\n{all-args}\n\nCopyright © 2021\n";

pub const HCX_HELP_TEMPLATE: &str = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  hcx [options] [hex_value]\n\n{all-args}\n\nCopyright © 2021\n";

pub const HEX_VALUE_HELP: &str = "Hex color with or without a leading `#`, eg: `f80` or `#ff8800`";

pub fn format_help() -> String {
    format!(
        "Display with one or all formats: {} (unknown values are ignored)",
        hc_core::DisplayFormat::possible_values()
    )
}

pub const ENABLE_LOGGING_HELP: &str = "Log debug output to stderr";

pub const LOG_FILE_HELP: &str =
    "Log debug output to a file, `hc_log.txt` if no path is given";

pub const ISSUES_FOOTER: &str =
    "Run with `--help` to see the accepted hex values and formats.";

pub fn channel_help(channel: hc_core::Channel) -> String {
    format!("Value of the {channel} channel, 0 to 255 (all three are needed)")
}
