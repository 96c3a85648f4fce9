// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use log::{info, trace};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::builtin::BuiltIn;
use crate::dto::CibResourceBundleContainerType;
use crate::{Error, SETTINGS_FILE_NAME};

/// Settings
///
/// `Configuration` stores the user settings merged over the built-in
/// defaults.
///
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    /// Cluster property settings.
    #[serde(default)]
    pub property: PropertySettings,

    /// Bundle settings.
    #[serde(default)]
    pub bundle: BundleSettings,
}

/// Cluster property settings.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PropertySettings {
    /// Properties managed by the cluster itself. They are never exported as
    /// `pcs property set` commands.
    #[serde(default)]
    pub readonly: Vec<String>,
}

/// Bundle settings.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BundleSettings {
    /// Container types that `pcs resource bundle create` accepts.
    #[serde(default)]
    pub cmd_container_types: Vec<String>,
}

impl Configuration {
    /// Open the settings
    ///
    /// Open `$HOME/.config/cibconf/settings.toml` if it exists and merge it
    /// with the built-in configuration.
    ///
    /// # Errors
    /// Returns `Err(cibconf::Error)` when the file cannot be read or if there
    /// is a parse error.
    ///
    pub fn open() -> Result<Self, Error> {
        let home = match env::var("CIBCONF_HOME") {
            Ok(cibconf_home) => PathBuf::from(cibconf_home),
            Err(_) => home::home_dir().ok_or_else(Error::NoHome)?,
        };
        let settings_toml_path = home
            .join(".config")
            .join("cibconf")
            .join(SETTINGS_FILE_NAME);
        Self::open_from_path(settings_toml_path)
    }

    fn open_from_path(settings_toml_path: PathBuf) -> Result<Self, Error> {
        let mut settings = Self::built_in();

        let settings_file = match File::open(&settings_toml_path) {
            Ok(file) => file,
            Err(error) => match error.kind() {
                io::ErrorKind::NotFound => {
                    trace!(
                        "'{}' does not exist, using built-in settings.",
                        &settings_toml_path.display()
                    );
                    return Ok(settings);
                }
                _ => return Err(Error::FileRead(settings_toml_path, error)),
            },
        };

        let mut buffer = BufReader::new(settings_file);
        let mut settings_string = String::new();
        buffer
            .read_to_string(&mut settings_string)
            .map_err(|e| Error::FileRead(settings_toml_path.clone(), e))?;

        info!("Reading settings from '{}'.", &settings_toml_path.display());
        let user_config = Self::parse_str(&settings_toml_path, &settings_string)?;
        settings.merge(&user_config);
        Ok(settings)
    }

    /// Parse a `Configuration` from a TOML string
    ///
    /// Does *NOT* merge with the built-in configuration.
    ///
    pub(crate) fn parse_str(path: &Path, toml: &str) -> Result<Self, Error> {
        let settings: Configuration =
            toml::from_str(toml).map_err(|e| Error::TOMLParse(path.into(), e))?;
        Ok(settings)
    }

    /// Merge entries from another configuration into this one.
    ///
    /// Entries of `b` missing from self are appended after the existing ones.
    ///
    fn merge(&mut self, b: &Self) {
        merge_list(&mut self.property.readonly, &b.property.readonly);
        merge_list(
            &mut self.bundle.cmd_container_types,
            &b.bundle.cmd_container_types,
        );
    }

    /// Check if `pcs` commands can recreate a bundle with the container type.
    pub fn is_cmd_container_type(&self, container_type: CibResourceBundleContainerType) -> bool {
        self.bundle
            .cmd_container_types
            .iter()
            .any(|t| t == container_type.as_str())
    }
}

fn merge_list(a: &mut Vec<String>, b: &[String]) {
    for item in b {
        if !a.contains(item) {
            a.push(item.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use serial_test::{parallel, serial};

    use super::*;

    fn setup() {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::max())
            .is_test(true)
            .try_init();
    }

    #[test]
    #[parallel]
    fn open_no_file() {
        setup();
        let temp = TempDir::new().unwrap().child("settings.toml");
        let settings = Configuration::open_from_path(temp.path().into()).expect("valid settings");
        assert_eq!(settings, Configuration::built_in());
    }

    #[test]
    #[parallel]
    fn open_empty_file() {
        setup();
        let temp = TempDir::new().unwrap().child("settings.toml");
        temp.write_str("").unwrap();
        let settings = Configuration::open_from_path(temp.path().into()).expect("valid settings");
        assert_eq!(settings, Configuration::built_in());
    }

    #[test]
    #[parallel]
    fn merge_user_settings() {
        setup();
        let temp = TempDir::new().unwrap().child("settings.toml");
        temp.write_str(
            r#"
[property]
readonly = ["dc-version", "my-readonly"]

[bundle]
cmd_container_types = ["rkt"]
"#,
        )
        .unwrap();
        let settings = Configuration::open_from_path(temp.path().into()).unwrap();
        let built_in = Configuration::built_in();

        assert_eq!(
            settings.property.readonly.len(),
            built_in.property.readonly.len() + 1
        );
        assert_eq!(
            settings.property.readonly.last().map(String::as_str),
            Some("my-readonly")
        );
        assert_eq!(
            settings.bundle.cmd_container_types,
            vec!["docker", "podman", "rkt"]
        );
        assert!(settings.is_cmd_container_type(CibResourceBundleContainerType::Rkt));
    }

    #[test]
    #[parallel]
    fn unknown_key() {
        setup();
        let temp = TempDir::new().unwrap().child("settings.toml");
        temp.write_str("[cluster]\nname = \"a\"\n").unwrap();
        let result = Configuration::open_from_path(temp.path().into());
        assert!(matches!(result, Err(Error::TOMLParse(_, _))));
    }

    #[test]
    #[serial]
    fn open_from_home() {
        setup();
        let temp = TempDir::new().unwrap();
        temp.child(".config")
            .child("cibconf")
            .child(SETTINGS_FILE_NAME)
            .write_str("[bundle]\ncmd_container_types = [\"rkt\"]\n")
            .unwrap();

        env::set_var("CIBCONF_HOME", temp.path());
        let settings = Configuration::open();
        env::remove_var("CIBCONF_HOME");

        assert!(settings
            .unwrap()
            .is_cmd_container_type(CibResourceBundleContainerType::Rkt));
    }
}
