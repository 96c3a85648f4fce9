use serde::{Deserialize, Serialize};

use crate::dto::nvset::CibNvset;

/// A cluster node entry of the CIB `nodes` section.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibNode {
    pub id: String,
    pub uname: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub score: Option<String>,

    #[serde(rename = "type", default)]
    pub node_type: Option<String>,

    #[serde(default)]
    pub instance_attributes: Vec<CibNvset>,

    #[serde(default)]
    pub utilization: Vec<CibNvset>,
}
