// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

pub(crate) mod builtin;
pub mod dto;
pub mod facade;
pub mod render;
pub mod settings;
pub mod snapshot;

use std::io;
use std::path::PathBuf;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";
pub const DEFAULT_SNAPSHOT_FILE_NAME: &str = "cib.json";

/// Message shown for usage errors that carry no message of their own.
const GENERIC_USAGE_MESSAGE: &str = "Invalid usage, execute with '--help' to see the usage.";

/// Errors that may be encountered when using the cibconf crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No home directory")]
    NoHome(),

    // IO errors
    #[error("I/O error: {0}")]
    IO(#[from] io::Error),

    #[error("Unable to read '{0}': {1}")]
    FileRead(PathBuf, #[source] io::Error),

    // serialization errors
    #[error("Unable to parse '{0}'.\n{1}")]
    TOMLParse(PathBuf, #[source] toml::de::Error),

    #[error("Unable to parse '{0}'\n{1}")]
    JSONParse(PathBuf, #[source] serde_json::Error),

    #[error("Unable to serialize JSON output: {0}")]
    JSONSerialize(#[source] serde_json::Error),

    // user input errors
    #[error("{}", .0.as_deref().unwrap_or(GENERIC_USAGE_MESSAGE))]
    Usage(Option<String>),

    #[error("No resource/stonith device found")]
    NoResourceFound,

    #[error("No node found")]
    NoNodeFound,

    // internal consistency errors
    #[error("Invalid data: resource '{0}' has more than one parent: '{1}', '{2}'")]
    ResourceMultipleParents(String, String, String),

    #[error("Invalid data: {0} '{1}' has no children")]
    ResourceMissingChild(&'static str, String),

    #[error("Invalid data: group '{0}' member '{1}' not found")]
    ResourceMissingMember(String, String),
}
