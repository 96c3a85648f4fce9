use serde::{Deserialize, Serialize};

use crate::dto::nvset::CibNvset;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibAlertSelectAttribute {
    pub id: String,
    pub name: String,
}

/// Events an alert agent is notified about.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibAlertSelect {
    #[serde(default)]
    pub nodes: bool,

    #[serde(default)]
    pub fencing: bool,

    #[serde(default)]
    pub resources: bool,

    #[serde(default)]
    pub attributes: bool,

    /// Restricts `attributes` to the listed node attributes.
    #[serde(default)]
    pub attributes_select: Vec<CibAlertSelectAttribute>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibAlertRecipient {
    pub id: String,
    pub value: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub meta_attributes: Vec<CibNvset>,

    #[serde(default)]
    pub instance_attributes: Vec<CibNvset>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibAlert {
    pub id: String,
    pub path: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub recipients: Vec<CibAlertRecipient>,

    #[serde(default)]
    pub select: Option<CibAlertSelect>,

    #[serde(default)]
    pub meta_attributes: Vec<CibNvset>,

    #[serde(default)]
    pub instance_attributes: Vec<CibNvset>,
}
