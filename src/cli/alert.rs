// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use clap::Args;
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::io::Write;

use crate::cli::{self, GlobalOptions, OutputFormat};
use cibconf::dto::CibAlert;
use cibconf::render::alert::{alerts_to_cmd, alerts_to_text};

#[derive(Args, Debug)]
pub struct Arguments {
    /// Select the output format.
    #[arg(long, value_enum, default_value_t=OutputFormat::Text, display_order=0)]
    output_format: OutputFormat,
}

#[derive(Serialize)]
struct AlertsOutput<'a> {
    alerts: &'a [CibAlert],
}

/// Show alerts.
pub fn config<W: Write>(
    options: &GlobalOptions,
    args: &Arguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Showing alerts.");

    let snapshot = cli::open_snapshot(options)?;
    match args.output_format {
        OutputFormat::Text => cli::write_lines(output, &alerts_to_text(&snapshot.alerts))?,
        OutputFormat::Cmd => {
            let mut warnings = Vec::new();
            let cmds = alerts_to_cmd(&snapshot.alerts, &mut warnings);
            cli::emit_warnings(&mut warnings);
            cli::write_cmds(output, &cmds)?;
        }
        OutputFormat::Json => cli::write_json(
            output,
            &AlertsOutput {
                alerts: &snapshot.alerts,
            },
        )?,
    }

    Ok(())
}
