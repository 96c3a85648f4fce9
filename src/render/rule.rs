// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use crate::dto::{CibRuleExpression, CibRuleExpressionType};
use crate::render::{format_name_value_sorted, indent};

fn id_part(parts: &mut Vec<String>, id: &str, with_ids: bool) {
    if with_ids {
        parts.push(format!("(id:{id})"));
    }
}

/// Render a rule expression tree.
///
/// With `with_ids = false` the output equals the `with_ids = true` output
/// with every ` (id:...)` suffix removed.
///
pub fn rule_expression_dto_to_lines(rule: &CibRuleExpression, with_ids: bool) -> Vec<String> {
    match rule.expression_type {
        CibRuleExpressionType::Rule => rule_to_lines(rule, with_ids),
        CibRuleExpressionType::DateExpression => date_expression_to_lines(rule, with_ids),
        CibRuleExpressionType::Expression
        | CibRuleExpressionType::OpExpression
        | CibRuleExpressionType::RscExpression => simple_expression_to_lines(rule, with_ids),
    }
}

fn rule_to_lines(rule: &CibRuleExpression, with_ids: bool) -> Vec<String> {
    let mut heading = vec![match rule.in_effect.label() {
        Some(label) => format!("Rule ({label}):"),
        None => "Rule:".to_string(),
    }];
    heading.extend(format_name_value_sorted(
        rule.options.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    ));
    id_part(&mut heading, &rule.id, with_ids);

    let children = rule
        .expressions
        .iter()
        .flat_map(|child| rule_expression_dto_to_lines(child, with_ids));

    let mut lines = vec![heading.join(" ")];
    lines.extend(indent(children, 1));
    lines
}

fn date_expression_to_lines(rule: &CibRuleExpression, with_ids: bool) -> Vec<String> {
    let operation = rule.options.get("operation").map(String::as_str);

    match (operation, &rule.date_spec, &rule.duration) {
        (Some("date_spec"), date_spec, _) => {
            let mut heading = vec!["Expression:".to_string()];
            id_part(&mut heading, &rule.id, with_ids);

            let mut body = vec!["Date Spec:".to_string()];
            if let Some(date_spec) = date_spec {
                body.extend(format_name_value_sorted(
                    date_spec.options.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                ));
                id_part(&mut body, &date_spec.id, with_ids);
            }

            let mut lines = vec![heading.join(" ")];
            lines.extend(indent([body.join(" ")], 1));
            lines
        }
        (Some("in_range"), _, Some(duration)) => {
            let mut heading = vec!["Expression:".to_string(), "date in_range".to_string()];
            if let Some(start) = rule.options.get("start") {
                heading.push(start.clone());
            }
            heading.push("to duration".to_string());
            id_part(&mut heading, &rule.id, with_ids);

            let mut body = vec!["Duration:".to_string()];
            body.extend(format_name_value_sorted(
                duration.options.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            ));
            id_part(&mut body, &duration.id, with_ids);

            let mut lines = vec![heading.join(" ")];
            lines.extend(indent([body.join(" ")], 1));
            lines
        }
        _ => simple_expression_to_lines(rule, with_ids),
    }
}

fn simple_expression_to_lines(rule: &CibRuleExpression, with_ids: bool) -> Vec<String> {
    let mut parts = vec!["Expression:".to_string(), rule.as_string.clone()];
    id_part(&mut parts, &rule.id, with_ids);
    vec![parts.join(" ")]
}
