// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use clap::Args;
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::io::Write;

use crate::cli::{self, GlobalOptions, OutputFormat};
use cibconf::dto::CibNode;
use cibconf::facade::NodesConfigurationFacade;
use cibconf::render::node::{
    nodes_attributes_to_lines, nodes_to_cmd, nodes_to_text, nodes_utilization_to_lines,
};

#[derive(Args, Debug)]
pub struct ConfigArguments {
    /// Nodes to show (defaults to all).
    names: Vec<String>,

    /// Select the output format.
    #[arg(long, value_enum, default_value_t=OutputFormat::Text, display_order=0)]
    output_format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct SummaryArguments {
    /// Show only this node.
    node: Option<String>,

    /// Show only this attribute.
    name: Option<String>,
}

/// Which summary `node attribute` and `node utilization` show.
#[derive(Clone, Copy, Debug)]
pub enum Summary {
    Attributes,
    Utilization,
}

#[derive(Serialize)]
struct NodesOutput<'a> {
    nodes: &'a [CibNode],
}

fn select_nodes<S: AsRef<str>>(
    options: &GlobalOptions,
    names: &[S],
) -> Result<NodesConfigurationFacade, Box<dyn Error>> {
    let snapshot = cli::open_snapshot(options)?;
    let facade = NodesConfigurationFacade::new(snapshot.nodes);
    if names.is_empty() {
        return Ok(facade);
    }

    let mut warnings = Vec::new();
    let result = facade.filter_nodes(names, &mut warnings);
    cli::emit_warnings(&mut warnings);
    Ok(result?)
}

/// Show nodes.
pub fn config<W: Write>(
    options: &GlobalOptions,
    args: &ConfigArguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Showing nodes.");

    let facade = select_nodes(options, &args.names)?;
    match args.output_format {
        OutputFormat::Text => cli::write_lines(output, &nodes_to_text(facade.nodes()))?,
        OutputFormat::Cmd => cli::write_cmds(output, &nodes_to_cmd(facade.nodes()))?,
        OutputFormat::Json => cli::write_json(
            output,
            &NodesOutput {
                nodes: facade.nodes(),
            },
        )?,
    }

    Ok(())
}

/// Show node attributes or utilization.
pub fn summary<W: Write>(
    options: &GlobalOptions,
    summary: Summary,
    args: &SummaryArguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Showing node {summary:?}.");

    let names: Vec<&str> = args.node.iter().map(String::as_str).collect();
    let facade = select_nodes(options, &names)?;
    let name = args.name.as_deref();
    let lines = match summary {
        Summary::Attributes => nodes_attributes_to_lines(facade.nodes(), name),
        Summary::Utilization => nodes_utilization_to_lines(facade.nodes(), name),
    };
    cli::write_lines(output, &lines)?;
    Ok(())
}
