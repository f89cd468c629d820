// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, CommandFactory, FromArgMatches, Parser};
use hc_core::{Channel, ChannelArgs, DEFAULT_LOG_FILE_NAME, DisplayPreference,
              TracingConfig, UNSET_CHANNEL, WriterConfig};
use tracing_core::LevelFilter;

use crate::{BUILD_INFO, ColorRequest, hc::ui_str};

/// The `clap::Command` for `T`, w/ the version string from [`BUILD_INFO`]. This is
/// used both to parse the args, and to print help when there's nothing to show.
pub fn command_with_build_info<T: CommandFactory>() -> clap::Command {
    T::command().version(BUILD_INFO.version_line.as_str())
}

/// Same as [`Parser::parse`], except that the version string is built at runtime. On
/// failure (or `--help`, `--version`) this prints a message and exits the process, w/
/// the code from [`clap_error_exit_code`].
#[must_use]
pub fn parse_cli_arg<T: CommandFactory + FromArgMatches>() -> T {
    command_with_build_info::<T>()
        .try_get_matches()
        .and_then(|matches| T::from_arg_matches(&matches))
        .unwrap_or_else(|error| exit_with_clap_error(&error))
}

/// `--help` and `--version` are reported by clap as errors that go to stdout, and
/// those exit w/ 0. Every real usage error (unknown flag, bad channel number, missing
/// format value) exits w/ 1, the same as an unparsable hex value.
#[must_use]
pub fn clap_error_exit_code(error: &clap::Error) -> i32 {
    i32::from(error.use_stderr())
}

fn exit_with_clap_error(error: &clap::Error) -> ! {
    // Nothing else to report to if stdout or stderr is gone.
    error.print().ok();
    std::process::exit(clap_error_exit_code(error))
}

/// `hc [OPTIONS] [HEX_VALUE]`. Channel flags win over the hex value when all three are
/// in range.
///
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
#[derive(Debug, Parser)]
#[command(name = "hc", bin_name = "hc")]
#[command(about = ui_str::HC_ABOUT)]
#[command(next_line_help = true)]
#[command(help_template = ui_str::HC_HELP_TEMPLATE)]
pub struct HcCliArg {
    // Only the first one is used, the rest are ignored.
    #[arg(value_name = "hex_value", num_args = 0.., help = ui_str::HEX_VALUE_HELP)]
    pub hex_values: Vec<String>,

    #[arg(
        long = "format",
        visible_alias = "fmt",
        short = 'f',
        value_name = "format",
        help = ui_str::format_help()
    )]
    pub maybe_format: Option<String>,

    #[arg(
        long,
        short = 'r',
        value_name = "red",
        default_value_t = UNSET_CHANNEL,
        allow_negative_numbers = true,
        hide_default_value = true,
        help = ui_str::channel_help(Channel::Red)
    )]
    pub red: i64,

    #[arg(
        long,
        short = 'g',
        value_name = "green",
        default_value_t = UNSET_CHANNEL,
        allow_negative_numbers = true,
        hide_default_value = true,
        help = ui_str::channel_help(Channel::Green)
    )]
    pub green: i64,

    #[arg(
        long,
        short = 'b',
        value_name = "blue",
        default_value_t = UNSET_CHANNEL,
        allow_negative_numbers = true,
        hide_default_value = true,
        help = ui_str::channel_help(Channel::Blue)
    )]
    pub blue: i64,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

/// `hcx [OPTIONS] [HEX_VALUE]`. The hex only variant of [`HcCliArg`].
#[derive(Debug, Parser)]
#[command(name = "hcx", bin_name = "hcx")]
#[command(about = ui_str::HCX_ABOUT)]
#[command(next_line_help = true)]
#[command(help_template = ui_str::HCX_HELP_TEMPLATE)]
pub struct HexOnlyCliArg {
    // Only the first one is used, the rest are ignored.
    #[arg(value_name = "hex_value", num_args = 0.., help = ui_str::HEX_VALUE_HELP)]
    pub hex_values: Vec<String>,

    #[arg(
        long = "format",
        visible_alias = "fmt",
        short = 'f',
        value_name = "format",
        help = ui_str::format_help()
    )]
    pub maybe_format: Option<String>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(global = true, long, short = 'l', help = ui_str::ENABLE_LOGGING_HELP)]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long = "log-file",
        value_name = "path",
        num_args = 0..=1,
        default_missing_value = DEFAULT_LOG_FILE_NAME,
        help = ui_str::LOG_FILE_HELP
    )]
    pub maybe_log_file: Option<String>,
}

impl GlobalOption {
    /// Logging is off unless `-l` or `--log-file` is passed. Stdout is never used,
    /// since that is where the swatch goes.
    #[must_use]
    pub fn get_tracing_config(&self) -> TracingConfig {
        let mut it = TracingConfig::from(LevelFilter::OFF);

        if self.enable_logging {
            it = it
                + TracingConfig::from(LevelFilter::DEBUG)
                + DisplayPreference::Stderr.into();
        }

        if let Some(log_file) = &self.maybe_log_file {
            it = it
                + TracingConfig::from(LevelFilter::DEBUG)
                + WriterConfig::File(log_file.clone()).into();
        }

        it
    }
}

impl From<&HcCliArg> for ColorRequest {
    fn from(cli_arg: &HcCliArg) -> Self {
        Self {
            channels: Some(ChannelArgs::new(cli_arg.red, cli_arg.green, cli_arg.blue)),
            maybe_hex: cli_arg.hex_values.first().cloned(),
            maybe_format: cli_arg.maybe_format.clone(),
        }
    }
}

impl From<&HexOnlyCliArg> for ColorRequest {
    fn from(cli_arg: &HexOnlyCliArg) -> Self {
        Self {
            channels: None,
            maybe_hex: cli_arg.hex_values.first().cloned(),
            maybe_format: cli_arg.maybe_format.clone(),
        }
    }
}
