// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use clap::Args;
use log::debug;
use std::error::Error;
use std::io::Write;

use crate::cli::{self, GlobalOptions, OutputFormat};
use cibconf::facade::ResourcesConfigurationFacade;
use cibconf::render::resource::{resources_to_cmd, resources_to_text, resources_utilization_to_lines};
use cibconf::settings::Configuration;

#[derive(Args, Debug)]
pub struct Arguments {
    /// Resources to show (defaults to all).
    ids: Vec<String>,

    /// Select the output format.
    #[arg(long, value_enum, default_value_t=OutputFormat::Text, display_order=0)]
    output_format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct UtilizationArguments {
    /// Show only this resource and the resources nested in it.
    resource: Option<String>,

    /// Show only this utilization attribute.
    name: Option<String>,
}

/// Render resources of a facade in the selected format.
///
/// Selects `ids` and their descendants first when `ids` is not empty.
///
pub(crate) fn show<W: Write>(
    facade: ResourcesConfigurationFacade,
    ids: &[String],
    output_format: OutputFormat,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    let mut warnings = Vec::new();
    let facade = if ids.is_empty() {
        facade
    } else {
        let result = facade.filter_resources(ids, &mut warnings);
        cli::emit_warnings(&mut warnings);
        result?
    };

    match output_format {
        OutputFormat::Text => cli::write_lines(output, &resources_to_text(&facade)?)?,
        OutputFormat::Cmd => {
            let settings = Configuration::open()?;
            let cmds = resources_to_cmd(&facade, &settings, &mut warnings)?;
            cli::emit_warnings(&mut warnings);
            cli::write_cmds(output, &cmds)?;
        }
        OutputFormat::Json => cli::write_json(output, &facade.to_resources())?,
    }

    Ok(())
}

/// Show resources that are not stonith devices.
pub fn config<W: Write>(
    options: &GlobalOptions,
    args: &Arguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Showing resources.");

    let snapshot = cli::open_snapshot(options)?;
    let facade =
        ResourcesConfigurationFacade::from_resources(snapshot.resources)?.filter_stonith(false)?;
    show(facade, &args.ids, args.output_format, output)
}

/// Show utilization attributes of resources.
pub fn utilization<W: Write>(
    options: &GlobalOptions,
    args: &UtilizationArguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Showing resource utilization.");

    let snapshot = cli::open_snapshot(options)?;
    let mut facade =
        ResourcesConfigurationFacade::from_resources(snapshot.resources)?.filter_stonith(false)?;
    if let Some(resource) = &args.resource {
        let mut warnings = Vec::new();
        let result = facade.filter_resources(&[resource], &mut warnings);
        cli::emit_warnings(&mut warnings);
        facade = result?;
    }

    cli::write_lines(
        output,
        &resources_utilization_to_lines(&facade, args.name.as_deref()),
    )?;
    Ok(())
}
