use serde::{Deserialize, Serialize};

use crate::dto::agent::ResourceAgentName;
use crate::dto::nvset::CibNvset;

/// A single managed resource.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibResourcePrimitive {
    pub id: String,
    pub agent_name: ResourceAgentName,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub operations: Vec<CibResourceOperation>,

    #[serde(default)]
    pub meta_attributes: Vec<CibNvset>,

    #[serde(default)]
    pub instance_attributes: Vec<CibNvset>,

    #[serde(default)]
    pub utilization: Vec<CibNvset>,
}

/// An operation defined for a primitive.
///
/// At most one of `start_delay` and `interval_origin` is set.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibResourceOperation {
    pub id: String,
    pub name: String,
    pub interval: String,

    #[serde(default)]
    pub start_delay: Option<String>,

    #[serde(default)]
    pub interval_origin: Option<String>,

    #[serde(default)]
    pub timeout: Option<String>,

    #[serde(default)]
    pub enabled: Option<bool>,

    #[serde(default)]
    pub record_pending: Option<bool>,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub on_fail: Option<String>,

    #[serde(default)]
    pub meta_attributes: Vec<CibNvset>,

    #[serde(default)]
    pub instance_attributes: Vec<CibNvset>,
}

/// An ordered collection of primitives.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibResourceGroup {
    pub id: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Primitive ids in start order.
    pub member_ids: Vec<String>,

    #[serde(default)]
    pub meta_attributes: Vec<CibNvset>,

    #[serde(default)]
    pub instance_attributes: Vec<CibNvset>,
}

/// A clone of exactly one primitive or group.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibResourceClone {
    pub id: String,

    #[serde(default)]
    pub description: Option<String>,

    pub member_id: String,

    #[serde(default)]
    pub meta_attributes: Vec<CibNvset>,

    #[serde(default)]
    pub instance_attributes: Vec<CibNvset>,
}

/// Container runtime of a bundle.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CibResourceBundleContainerType {
    Docker,
    Podman,
    Rkt,
}

impl CibResourceBundleContainerType {
    /// Name used in the CIB and on the pcs command line.
    pub fn as_str(self) -> &'static str {
        match self {
            CibResourceBundleContainerType::Docker => "docker",
            CibResourceBundleContainerType::Podman => "podman",
            CibResourceBundleContainerType::Rkt => "rkt",
        }
    }

    /// Label used in text output.
    pub fn label(self) -> &'static str {
        match self {
            CibResourceBundleContainerType::Docker => "Docker",
            CibResourceBundleContainerType::Podman => "Podman",
            CibResourceBundleContainerType::Rkt => "Rkt",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibResourceBundleContainerOptions {
    pub image: String,

    #[serde(default)]
    pub replicas: Option<u32>,

    #[serde(default)]
    pub replicas_per_host: Option<u32>,

    #[serde(default)]
    pub promoted_max: Option<u32>,

    #[serde(default)]
    pub run_command: Option<String>,

    #[serde(default)]
    pub network: Option<String>,

    #[serde(default)]
    pub options: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibResourceBundleNetworkOptions {
    #[serde(default)]
    pub ip_range_start: Option<String>,

    #[serde(default)]
    pub control_port: Option<u32>,

    #[serde(default)]
    pub host_interface: Option<String>,

    #[serde(default)]
    pub host_netmask: Option<u32>,

    #[serde(default)]
    pub add_host: Option<bool>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibResourceBundlePortMapping {
    pub id: String,

    #[serde(default)]
    pub port: Option<u32>,

    #[serde(default)]
    pub internal_port: Option<u32>,

    #[serde(default)]
    pub range: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibResourceBundleStorageMapping {
    pub id: String,

    #[serde(default)]
    pub source_dir: Option<String>,

    #[serde(default)]
    pub source_dir_root: Option<String>,

    pub target_dir: String,

    #[serde(default)]
    pub options: Option<String>,
}

/// A containerized resource wrapper with at most one primitive inside.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibResourceBundle {
    pub id: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub member_id: Option<String>,

    #[serde(default)]
    pub container_type: Option<CibResourceBundleContainerType>,

    #[serde(default)]
    pub container_options: Option<CibResourceBundleContainerOptions>,

    #[serde(default)]
    pub network: Option<CibResourceBundleNetworkOptions>,

    #[serde(default)]
    pub port_mappings: Vec<CibResourceBundlePortMapping>,

    #[serde(default)]
    pub storage_mappings: Vec<CibResourceBundleStorageMapping>,

    #[serde(default)]
    pub meta_attributes: Vec<CibNvset>,

    #[serde(default)]
    pub instance_attributes: Vec<CibNvset>,
}

/// All resources of a CIB, as flat lists.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibResources {
    #[serde(default)]
    pub primitives: Vec<CibResourcePrimitive>,

    #[serde(default)]
    pub groups: Vec<CibResourceGroup>,

    #[serde(default)]
    pub clones: Vec<CibResourceClone>,

    #[serde(default)]
    pub bundles: Vec<CibResourceBundle>,
}
