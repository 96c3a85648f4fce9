// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use clap::Args;
use log::debug;
use std::error::Error;
use std::io::Write;

use crate::cli::{self, resource, GlobalOptions, OutputFormat};
use cibconf::facade::ResourcesConfigurationFacade;

#[derive(Args, Debug)]
pub struct Arguments {
    /// Stonith devices to show (defaults to all).
    ids: Vec<String>,

    /// Select the output format.
    #[arg(long, value_enum, default_value_t=OutputFormat::Text, display_order=0)]
    output_format: OutputFormat,
}

/// Show stonith devices.
pub fn config<W: Write>(
    options: &GlobalOptions,
    args: &Arguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Showing stonith devices.");

    let snapshot = cli::open_snapshot(options)?;
    let facade =
        ResourcesConfigurationFacade::from_resources(snapshot.resources)?.filter_stonith(true)?;
    resource::show(facade, &args.ids, args.output_format, output)
}
