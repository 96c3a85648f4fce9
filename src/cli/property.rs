// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use clap::Args;
use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::io::Write;

use crate::cli::{self, DescribeFormat, GlobalOptions, OutputFormat};
use cibconf::dto::{CibNvset, ResourceAgentParameter};
use cibconf::facade::PropertyConfigurationFacade;
use cibconf::render::property::{
    cluster_property_metadata_to_text, properties_defaults_to_text, properties_to_cmd,
    properties_to_text, properties_to_text_with_default_mark,
};
use cibconf::settings::Configuration;

#[derive(Args, Debug)]
pub struct ConfigArguments {
    /// Properties to show (implies the `--all` view).
    names: Vec<String>,

    /// Show configured values and the default values of unset properties.
    #[arg(long, group = "select", display_order = 0)]
    all: bool,

    /// Show only default values.
    #[arg(long, group = "select", display_order = 0)]
    defaults: bool,

    /// Select the output format.
    #[arg(long, value_enum, default_value_t=OutputFormat::Text, display_order=0)]
    output_format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct DefaultsArguments {
    /// Properties to show.
    names: Vec<String>,

    /// Show also advanced properties.
    #[arg(long, display_order = 0)]
    full: bool,
}

#[derive(Args, Debug)]
pub struct DescribeArguments {
    /// Properties to describe.
    names: Vec<String>,

    /// Describe also advanced properties.
    #[arg(long, display_order = 0)]
    full: bool,

    /// Select the output format.
    #[arg(long, value_enum, default_value_t=DescribeFormat::Text, display_order=0)]
    output_format: DescribeFormat,
}

#[derive(Serialize)]
struct NvsetsOutput<'a> {
    nvsets: &'a [CibNvset],
}

#[derive(Serialize)]
struct MetadataOutput<'a> {
    properties_metadata: Vec<&'a ResourceAgentParameter>,
    readonly_properties: &'a BTreeSet<String>,
}

/// Build the property facade from the snapshot and the settings.
fn open_facade(options: &GlobalOptions) -> Result<PropertyConfigurationFacade, Box<dyn Error>> {
    let settings = Configuration::open()?;
    let snapshot = cli::open_snapshot(options)?;
    let metadata = snapshot.properties_metadata;

    Ok(PropertyConfigurationFacade::new(
        snapshot.properties,
        metadata.properties_metadata,
        settings
            .property
            .readonly
            .into_iter()
            .chain(metadata.readonly_properties),
    ))
}

fn names_filter(names: &[String]) -> Option<&[String]> {
    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

/// Advanced properties are selected by name or with `--full`.
fn advanced_filter(names: &[String], full: bool) -> Result<Option<bool>, cibconf::Error> {
    match (names.is_empty(), full) {
        (false, true) => Err(cibconf::Error::Usage(None)),
        (true, false) => Ok(Some(false)),
        _ => Ok(None),
    }
}

/// Show cluster properties.
pub fn config<W: Write>(
    options: &GlobalOptions,
    args: &ConfigArguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Showing cluster properties.");

    if args.output_format != OutputFormat::Text
        && (!args.names.is_empty() || args.all || args.defaults)
    {
        return Err(cibconf::Error::Usage(Some(
            "Output formats other than 'text' are not supported together with property names, '--all' or '--defaults'".into(),
        ))
        .into());
    }

    let facade = open_facade(options)?;
    let names = names_filter(&args.names);

    match args.output_format {
        OutputFormat::Text if args.defaults => {
            cli::write_lines(
                output,
                &properties_defaults_to_text(&facade.get_defaults(names, None)),
            )?;
        }
        OutputFormat::Text if args.all || names.is_some() => {
            cli::write_lines(output, &properties_to_text_with_default_mark(&facade, names))?;
        }
        OutputFormat::Text => cli::write_lines(output, &properties_to_text(&facade))?,
        OutputFormat::Cmd => cli::write_lines(output, &properties_to_cmd(&facade))?,
        OutputFormat::Json => cli::write_json(
            output,
            &NvsetsOutput {
                nvsets: facade.properties(),
            },
        )?,
    }

    Ok(())
}

/// Show default values of cluster properties.
pub fn defaults<W: Write>(
    options: &GlobalOptions,
    args: &DefaultsArguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Showing cluster property defaults.");

    let advanced = advanced_filter(&args.names, args.full)?;
    let facade = open_facade(options)?;
    cli::write_lines(
        output,
        &properties_defaults_to_text(&facade.get_defaults(names_filter(&args.names), advanced)),
    )?;
    Ok(())
}

/// Describe cluster properties.
pub fn describe<W: Write>(
    options: &GlobalOptions,
    args: &DescribeArguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Describing cluster properties.");

    let advanced = advanced_filter(&args.names, args.full)?;
    let facade = open_facade(options)?;
    let metadata = facade.get_properties_metadata(names_filter(&args.names), advanced);

    let mut warnings: Vec<String> = args
        .names
        .iter()
        .filter(|name| !metadata.iter().any(|m| &m.name == *name))
        .map(|name| format!("Unable to find property '{name}'"))
        .collect();
    cli::emit_warnings(&mut warnings);

    match args.output_format {
        DescribeFormat::Text => {
            cli::write_lines(output, &cluster_property_metadata_to_text(&metadata))?;
        }
        DescribeFormat::Json => cli::write_json(
            output,
            &MetadataOutput {
                properties_metadata: metadata,
                readonly_properties: facade.readonly_properties(),
            },
        )?,
    }

    Ok(())
}
