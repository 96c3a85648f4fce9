// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

#![warn(clippy::pedantic)]

use clap::Parser;
use log::{error, info};
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

mod cli;

use cibconf::render::defaults::DefaultsKind;
use cli::node::Summary;
use cli::{
    AlertCommands, ColorMode, Commands, NodeCommands, Options, PropertyCommands,
    ResourceCommands, StonithCommands,
};

fn main_detail() -> Result<(), Box<dyn Error>> {
    let instant = Instant::now();
    let options = Options::parse();

    let log_style = match options.global.color {
        ColorMode::Never => "never",
        ColorMode::Always => "always",
        ColorMode::Auto => "auto",
    };

    let log_level = match options.verbose.log_level_filter() {
        clap_verbosity_flag::LevelFilter::Off => "off",
        clap_verbosity_flag::LevelFilter::Error => "error",
        clap_verbosity_flag::LevelFilter::Warn => "warn",

        clap_verbosity_flag::LevelFilter::Info => "info",
        clap_verbosity_flag::LevelFilter::Debug => "debug",
        clap_verbosity_flag::LevelFilter::Trace => "trace",
    };

    let env = env_logger::Env::default()
        .filter_or("CIBCONF_LOG", log_level)
        .write_style_or("CIBCONF_LOG_STYLE", log_style);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()?;

    let mut output = io::stdout().lock();

    match options.command {
        Some(Commands::Resource(resource)) => match resource {
            ResourceCommands::Config(args) => {
                cli::resource::config(&options.global, &args, &mut output)?;
            }
            ResourceCommands::Utilization(args) => {
                cli::resource::utilization(&options.global, &args, &mut output)?;
            }
            ResourceCommands::Defaults(args) => cli::defaults::defaults(
                &options.global,
                DefaultsKind::Resource,
                &args,
                &mut output,
            )?,
            ResourceCommands::OpDefaults(args) => cli::defaults::defaults(
                &options.global,
                DefaultsKind::Operation,
                &args,
                &mut output,
            )?,
        },
        Some(Commands::Stonith(StonithCommands::Config(args))) => {
            cli::stonith::config(&options.global, &args, &mut output)?;
        }
        Some(Commands::Property(property)) => match property {
            PropertyCommands::Config(args) => {
                cli::property::config(&options.global, &args, &mut output)?;
            }
            PropertyCommands::Defaults(args) => {
                cli::property::defaults(&options.global, &args, &mut output)?;
            }
            PropertyCommands::Describe(args) => {
                cli::property::describe(&options.global, &args, &mut output)?;
            }
        },
        Some(Commands::Alert(AlertCommands::Config(args))) => {
            cli::alert::config(&options.global, &args, &mut output)?;
        }
        Some(Commands::Node(node)) => match node {
            NodeCommands::Config(args) => {
                cli::node::config(&options.global, &args, &mut output)?;
            }
            NodeCommands::Attribute(args) => {
                cli::node::summary(&options.global, Summary::Attributes, &args, &mut output)?;
            }
            NodeCommands::Utilization(args) => {
                cli::node::summary(&options.global, Summary::Utilization, &args, &mut output)?;
            }
        },
        Some(Commands::Settings(args)) => cli::settings::settings(&args, &mut output)?,
        None => (),
    }

    output.flush()?;

    info!("Completed in {:.3?}.", instant.elapsed());

    Ok(())
}

fn main() -> ExitCode {
    if let Err(error) = main_detail() {
        error!("{error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
