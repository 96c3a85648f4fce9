// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use clap::Args;
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::io::Write;

use crate::cli::{self, GlobalOptions, OutputFormat};
use cibconf::dto::CibNvset;
use cibconf::render::defaults::{defaults_to_cmd, defaults_to_text, DefaultsKind};

#[derive(Args, Debug)]
pub struct Arguments {
    /// Show also sets whose rule has expired.
    #[arg(long, display_order = 0)]
    all: bool,

    /// Show rule ids.
    #[arg(long, display_order = 0)]
    full: bool,

    /// Select the output format.
    #[arg(long, value_enum, default_value_t=OutputFormat::Text, display_order=0)]
    output_format: OutputFormat,
}

#[derive(Serialize)]
struct NvsetsOutput<'a> {
    nvsets: &'a [CibNvset],
}

/// Show resource or operation defaults.
pub fn defaults<W: Write>(
    options: &GlobalOptions,
    kind: DefaultsKind,
    args: &Arguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Showing {kind:?} defaults.");

    let snapshot = cli::open_snapshot(options)?;
    let nvsets = match kind {
        DefaultsKind::Resource => &snapshot.resource_defaults,
        DefaultsKind::Operation => &snapshot.operation_defaults,
    };

    match args.output_format {
        OutputFormat::Text => {
            cli::write_lines(output, &defaults_to_text(nvsets, args.full, args.all))?;
        }
        OutputFormat::Cmd => cli::write_cmds(output, &defaults_to_cmd(kind, nvsets))?,
        OutputFormat::Json => cli::write_json(output, &NvsetsOutput { nvsets })?,
    }

    Ok(())
}
