// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::dto::{CibAlert, CibNode, CibNvset, CibResources, ClusterPropertyMetadata};
use crate::Error;

/// Cluster configuration snapshot.
///
/// `Snapshot` holds every DTO collection that the CIB reading layer exports,
/// as read from one JSON document. All members are optional.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    /// Primitives, groups, clones and bundles (including stonith devices).
    #[serde(default)]
    pub resources: CibResources,

    /// Cluster property sets. Only the first one is in effect.
    #[serde(default)]
    pub properties: Vec<CibNvset>,

    /// Metadata of the cluster properties.
    #[serde(default)]
    pub properties_metadata: ClusterPropertyMetadata,

    /// Resource defaults (`rsc_defaults` meta attribute sets).
    #[serde(default)]
    pub resource_defaults: Vec<CibNvset>,

    /// Operation defaults (`op_defaults` meta attribute sets).
    #[serde(default)]
    pub operation_defaults: Vec<CibNvset>,

    #[serde(default)]
    pub alerts: Vec<CibAlert>,

    #[serde(default)]
    pub nodes: Vec<CibNode>,
}

impl Snapshot {
    /// Open a snapshot file.
    ///
    /// A path of `-` reads the snapshot from standard input.
    ///
    /// # Errors
    /// Returns `Err(cibconf::Error)` when the file cannot be read or is not a
    /// valid snapshot.
    ///
    pub fn open(path: &Path) -> Result<Self, Error> {
        let contents = if path == Path::new("-") {
            trace!("Reading snapshot from stdin.");
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .map_err(|e| Error::FileRead(path.into(), e))?;
            contents
        } else {
            info!("Reading snapshot '{}'.", path.display());
            fs::read_to_string(path).map_err(|e| Error::FileRead(path.into(), e))?
        };

        Self::parse_str(path, &contents)
    }

    /// Parse a `Snapshot` from a JSON string.
    pub(crate) fn parse_str(path: &Path, json: &str) -> Result<Self, Error> {
        let snapshot: Snapshot =
            serde_json::from_str(json).map_err(|e| Error::JSONParse(PathBuf::from(path), e))?;
        debug!(
            "Snapshot has {} primitive(s), {} group(s), {} clone(s), {} bundle(s).",
            snapshot.resources.primitives.len(),
            snapshot.resources.groups.len(),
            snapshot.resources.clones.len(),
            snapshot.resources.bundles.len()
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use serial_test::parallel;

    use super::*;
    use crate::dto::CibRuleExpressionType;

    fn setup() {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::max())
            .is_test(true)
            .try_init();
    }

    #[test]
    #[parallel]
    fn empty_document() {
        setup();
        let snapshot = Snapshot::parse_str(Path::new("cib.json"), "{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    #[parallel]
    fn missing_file() {
        setup();
        let temp = TempDir::new().unwrap();
        let result = Snapshot::open(&temp.path().join("cib.json"));
        assert!(matches!(result, Err(Error::FileRead(_, _))));
    }

    #[test]
    #[parallel]
    fn invalid_json() {
        setup();
        let temp = TempDir::new().unwrap().child("cib.json");
        temp.write_str(r#"{"resources": {"primitives": "#).unwrap();
        let result = Snapshot::open(temp.path());
        assert!(matches!(result, Err(Error::JSONParse(_, _))));
    }

    #[test]
    #[parallel]
    fn unknown_member() {
        setup();
        let result = Snapshot::parse_str(Path::new("cib.json"), r#"{"constraints": []}"#);
        assert!(matches!(result, Err(Error::JSONParse(_, _))));
    }

    #[test]
    #[parallel]
    fn read_file() {
        setup();
        let temp = TempDir::new().unwrap().child("cib.json");
        temp.write_str(
            r#"
{
  "resources": {
    "primitives": [
      {
        "id": "R1",
        "agent_name": {"standard": "ocf", "provider": "pacemaker", "type": "Dummy"},
        "description": null,
        "operations": [],
        "meta_attributes": [],
        "instance_attributes": [],
        "utilization": []
      }
    ]
  },
  "resource_defaults": [
    {
      "id": "rsc-set",
      "options": {"score": "10"},
      "rule": {
        "id": "rsc-set-rule",
        "type": "RULE",
        "in_effect": "EXPIRED",
        "options": {"boolean-op": "and"},
        "expressions": [],
        "as_string": ""
      },
      "nvpairs": [{"id": "rsc-set-a", "name": "a", "value": "b"}]
    }
  ]
}
"#,
        )
        .unwrap();

        let snapshot = Snapshot::open(temp.path()).unwrap();
        assert_eq!(snapshot.resources.primitives.len(), 1);
        assert_eq!(
            snapshot.resources.primitives[0].agent_name.to_string(),
            "ocf:pacemaker:Dummy"
        );
        assert_eq!(snapshot.resource_defaults.len(), 1);
        assert!(snapshot.resource_defaults[0].is_expired());
        assert_eq!(
            snapshot.resource_defaults[0]
                .rule
                .as_ref()
                .map(|r| r.expression_type),
            Some(CibRuleExpressionType::Rule)
        );
    }
}
