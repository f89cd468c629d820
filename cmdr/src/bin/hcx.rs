// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use hc_cmdr::{ColorRequest, HexOnlyCliArg, launch, parse_cli_arg,
              setup_default_miette_global_report_handler, ui_str};
use hc_core::{CommonResult, try_initialize_logging_global};

fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(ui_str::ISSUES_FOOTER);

    let cli_arg: HexOnlyCliArg = parse_cli_arg();

    try_initialize_logging_global(cli_arg.global_options.get_tracing_config())?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    launch::<HexOnlyCliArg>(&ColorRequest::from(&cli_arg))
}
