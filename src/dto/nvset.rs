use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dto::rule::CibRuleExpression;

/// Kind of attribute block an nvset comes from.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CibNvsetType {
    /// `instance_attributes`
    Instance,
    /// `meta_attributes`
    Meta,
}

/// One configuration attribute.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibNvpair {
    pub id: String,
    pub name: String,
    pub value: String,
}

/// A set of name-value pairs, optionally restricted by a rule.
///
/// `options` are set-level attributes (such as `score`), distinct from the
/// pairs the set contains.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibNvset {
    pub id: String,

    /// Utilization and cluster property sets carry no type.
    #[serde(rename = "type", default)]
    pub nvset_type: Option<CibNvsetType>,

    #[serde(default)]
    pub options: BTreeMap<String, String>,

    #[serde(default)]
    pub rule: Option<CibRuleExpression>,

    #[serde(default)]
    pub nvpairs: Vec<CibNvpair>,
}

impl CibNvset {
    /// True when the set is restricted by a rule that is no longer in effect.
    pub fn is_expired(&self) -> bool {
        self.rule.as_ref().is_some_and(CibRuleExpression::is_expired)
    }

    /// Iterate over the pairs as `(name, value)`.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nvpairs
            .iter()
            .map(|nvpair| (nvpair.name.as_str(), nvpair.value.as_str()))
    }
}
