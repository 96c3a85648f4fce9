// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

pub mod alert;
pub mod defaults;
pub mod node;
pub mod property;
pub mod resource;
pub mod settings;
pub mod stonith;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{trace, warn};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use cibconf::render::cmds_to_string;
use cibconf::snapshot::Snapshot;
use cibconf::DEFAULT_SNAPSHOT_FILE_NAME;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, subcommand_required = true)]
pub struct Options {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Read the cluster configuration snapshot from FILE ('-' reads stdin).
    #[arg(short, long, value_name="FILE", default_value=DEFAULT_SNAPSHOT_FILE_NAME, global=true, env="CIBCONF_FILE", display_order=2)]
    pub file: PathBuf,

    /// When to print colored output.
    #[arg(long, value_name="WHEN", value_enum, default_value_t=ColorMode::Auto, global=true, env="CIBCONF_COLOR", display_order=2)]
    pub color: ColorMode,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum ColorMode {
    /// Automatically detect when to print colored output.
    Auto,

    /// Always print colored output.
    Always,

    /// Never print colored output.
    Never,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text.
    Text,

    /// pcs commands that recreate the configuration.
    Cmd,

    /// JSON.
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DescribeFormat {
    /// Human readable text.
    Text,

    /// JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum ResourceCommands {
    /// Show the configuration of resources.
    ///
    /// `cibconf resource config` prints primitives, groups, clones, and
    /// bundles. Stonith devices are shown only when they are members of a
    /// group, clone, or bundle. Resources nested in the selected resources are
    /// printed with them.
    ///
    /// EXAMPLES
    ///
    /// * Show all resources:
    ///
    ///   cibconf resource config
    ///
    /// * Show specific resources:
    ///
    ///   cibconf resource config R1 G1
    ///
    /// * Print pcs commands that recreate the resources:
    ///
    ///   cibconf resource config --output-format=cmd
    ///
    Config(resource::Arguments),

    /// Show utilization attributes of resources.
    ///
    /// EXAMPLES
    ///
    /// * Show the utilization of all resources:
    ///
    ///   cibconf resource utilization
    ///
    /// * Show the `cpu` utilization of resource R1:
    ///
    ///   cibconf resource utilization R1 cpu
    ///
    Utilization(resource::UtilizationArguments),

    /// Show resource defaults.
    ///
    /// Sets whose rule has expired are hidden unless `--all` is given.
    ///
    /// EXAMPLES
    ///
    /// * Show resource defaults with rule ids:
    ///
    ///   cibconf resource defaults --full
    ///
    Defaults(defaults::Arguments),

    /// Show resource operation defaults.
    ///
    /// EXAMPLES
    ///
    /// * Show all operation defaults including expired ones:
    ///
    ///   cibconf resource op-defaults --all
    ///
    OpDefaults(defaults::Arguments),
}

#[derive(Subcommand, Debug)]
pub enum StonithCommands {
    /// Show the configuration of stonith devices.
    ///
    /// EXAMPLES
    ///
    /// * Show all stonith devices:
    ///
    ///   cibconf stonith config
    ///
    /// * Show stonith devices as JSON:
    ///
    ///   cibconf stonith config --output-format=json
    ///
    Config(stonith::Arguments),
}

#[derive(Subcommand, Debug)]
pub enum PropertyCommands {
    /// Show cluster properties.
    ///
    /// `cibconf property config` prints the configured cluster properties.
    /// Pass `--all` to also print default values of properties that are not
    /// set, or `--defaults` to print only the default values.
    ///
    /// EXAMPLES
    ///
    /// * Show configured properties:
    ///
    ///   cibconf property config
    ///
    /// * Show the effective value of specific properties:
    ///
    ///   cibconf property config stonith-enabled maintenance-mode
    ///
    /// * Print a pcs command that sets the properties:
    ///
    ///   cibconf property config --output-format=cmd
    ///
    Config(property::ConfigArguments),

    /// Show default values of cluster properties.
    ///
    /// Advanced properties are listed only with `--full` or by name.
    ///
    /// EXAMPLES
    ///
    /// * Show default values:
    ///
    ///   cibconf property defaults
    ///
    Defaults(property::DefaultsArguments),

    /// Describe cluster properties.
    ///
    /// EXAMPLES
    ///
    /// * Describe a property:
    ///
    ///   cibconf property describe no-quorum-policy
    ///
    /// * Describe all properties including advanced ones as JSON:
    ///
    ///   cibconf property describe --full --output-format=json
    ///
    Describe(property::DescribeArguments),
}

#[derive(Subcommand, Debug)]
pub enum AlertCommands {
    /// Show alerts and their recipients.
    ///
    /// EXAMPLES
    ///
    /// * Show all alerts:
    ///
    ///   cibconf alert config
    ///
    Config(alert::Arguments),
}

#[derive(Subcommand, Debug)]
pub enum NodeCommands {
    /// Show the configuration of nodes.
    ///
    /// EXAMPLES
    ///
    /// * Show all nodes:
    ///
    ///   cibconf node config
    ///
    /// * Print pcs commands that set the attributes of node1:
    ///
    ///   cibconf node config node1 --output-format=cmd
    ///
    Config(node::ConfigArguments),

    /// Show node attributes.
    ///
    /// EXAMPLES
    ///
    /// * Show the `site` attribute of node1:
    ///
    ///   cibconf node attribute node1 site
    ///
    Attribute(node::SummaryArguments),

    /// Show node utilization attributes.
    ///
    /// EXAMPLES
    ///
    /// * Show the utilization of all nodes:
    ///
    ///   cibconf node utilization
    ///
    Utilization(node::SummaryArguments),
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show resources and resource defaults.
    #[command(subcommand)]
    Resource(ResourceCommands),

    /// Show stonith devices.
    #[command(subcommand)]
    Stonith(StonithCommands),

    /// Show cluster properties.
    #[command(subcommand)]
    Property(PropertyCommands),

    /// Show alerts.
    #[command(subcommand)]
    Alert(AlertCommands),

    /// Show nodes.
    #[command(subcommand)]
    Node(NodeCommands),

    /// Show the settings.
    ///
    /// Print the effective settings in TOML format: the built-in settings
    /// merged with `$HOME/.config/cibconf/settings.toml`.
    ///
    /// EXAMPLES
    ///
    /// * Show the settings:
    ///
    ///   cibconf settings
    ///
    Settings(settings::Arguments),
}

/// Open the snapshot selected by the global options.
pub fn open_snapshot(options: &GlobalOptions) -> Result<Snapshot, cibconf::Error> {
    Snapshot::open(&options.file)
}

/// Log and clear the collected warnings.
pub fn emit_warnings(warnings: &mut Vec<String>) {
    for message in warnings.drain(..) {
        warn!("{message}");
    }
}

/// Write text lines.
pub fn write_lines<W: Write>(output: &mut W, lines: &[String]) -> Result<(), std::io::Error> {
    for line in lines {
        writeln!(output, "{line}")?;
    }
    Ok(())
}

/// Write commands separated by `;`.
pub fn write_cmds<W: Write>(output: &mut W, cmds: &[Vec<String>]) -> Result<(), std::io::Error> {
    if cmds.is_empty() {
        trace!("No commands to write.");
        return Ok(());
    }
    writeln!(output, "{}", cmds_to_string(cmds))
}

/// Write a value as JSON.
pub fn write_json<W: Write, T: Serialize>(output: &mut W, value: &T) -> Result<(), cibconf::Error> {
    let json = serde_json::to_string(value).map_err(cibconf::Error::JSONSerialize)?;
    writeln!(output, "{json}")?;
    Ok(())
}
