use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Variant tag of a rule expression node.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CibRuleExpressionType {
    Rule,
    Expression,
    DateExpression,
    OpExpression,
    RscExpression,
}

/// Whether a rule applies at the time the CIB was read.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CibRuleInEffectStatus {
    InEffect,
    Expired,
    NotYetInEffect,
    #[default]
    Unknown,
}

impl CibRuleInEffectStatus {
    /// The label printed next to rules and nvsets in this state.
    pub fn label(self) -> Option<&'static str> {
        match self {
            CibRuleInEffectStatus::Expired => Some("expired"),
            CibRuleInEffectStatus::NotYetInEffect => Some("not yet in effect"),
            CibRuleInEffectStatus::InEffect | CibRuleInEffectStatus::Unknown => None,
        }
    }
}

/// `date_spec` and `duration` elements of a date expression.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibRuleDateCommon {
    pub id: String,

    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

/// A node of a rule expression tree.
///
/// Only `RULE` nodes have child `expressions`. `as_string` is the expression
/// pre-rendered by the CIB reading layer in rule syntax.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CibRuleExpression {
    pub id: String,

    #[serde(rename = "type")]
    pub expression_type: CibRuleExpressionType,

    #[serde(default)]
    pub in_effect: CibRuleInEffectStatus,

    #[serde(default)]
    pub options: BTreeMap<String, String>,

    #[serde(default)]
    pub date_spec: Option<CibRuleDateCommon>,

    #[serde(default)]
    pub duration: Option<CibRuleDateCommon>,

    #[serde(default)]
    pub expressions: Vec<CibRuleExpression>,

    #[serde(default)]
    pub as_string: String,
}

impl CibRuleExpression {
    pub fn is_expired(&self) -> bool {
        self.in_effect == CibRuleInEffectStatus::Expired
    }
}
