use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard used by fencing agents.
pub const STONITH_STANDARD: &str = "stonith";

/// Full name of a resource agent.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceAgentName {
    pub standard: String,

    #[serde(default)]
    pub provider: Option<String>,

    #[serde(rename = "type")]
    pub agent_type: String,
}

impl ResourceAgentName {
    /// Check if the agent is a fencing (stonith) agent.
    pub fn is_stonith(&self) -> bool {
        self.standard == STONITH_STANDARD
    }
}

/// Formats as `standard[:provider]:type`, e.g. `ocf:pacemaker:Dummy`.
impl fmt::Display for ResourceAgentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.provider {
            Some(provider) => write!(f, "{}:{}:{}", self.standard, provider, self.agent_type),
            None => write!(f, "{}:{}", self.standard, self.agent_type),
        }
    }
}

/// Metadata of one agent parameter or cluster property.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceAgentParameter {
    pub name: String,

    #[serde(default)]
    pub shortdesc: Option<String>,

    #[serde(default)]
    pub longdesc: Option<String>,

    #[serde(rename = "type")]
    pub parameter_type: String,

    #[serde(default)]
    pub default: Option<String>,

    #[serde(default)]
    pub enum_values: Option<Vec<String>>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub advanced: bool,

    #[serde(default)]
    pub deprecated: bool,

    #[serde(default)]
    pub deprecated_by: Vec<String>,

    #[serde(default)]
    pub deprecated_desc: Option<String>,

    #[serde(default)]
    pub unique_group: Option<String>,

    #[serde(default)]
    pub reloadable: bool,
}

/// Cluster property metadata as supplied by the agent metadata provider.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterPropertyMetadata {
    #[serde(default)]
    pub properties_metadata: Vec<ResourceAgentParameter>,

    #[serde(default)]
    pub readonly_properties: Vec<String>,
}
