// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use clap::Args;
use log::{debug, info};
use std::error::Error;
use std::io::Write;

use cibconf::settings::Configuration;

#[derive(Args, Debug)]
pub struct Arguments {}

/// Show the settings.
///
/// Print the settings to stdout in toml format.
///
pub fn settings<W: Write>(_args: &Arguments, output: &mut W) -> Result<(), Box<dyn Error>> {
    debug!("Showing settings.");

    let settings = Configuration::open()?;
    info!("Effective settings:");
    write!(output, "{}", &toml::to_string_pretty(&settings)?)?;

    Ok(())
}
