// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use crate::dto::CibNvset;
use crate::render::rule::rule_expression_dto_to_lines;
use crate::render::{format_name_value_sorted, indent, pairs_to_cmd};

/// Drop sets whose rule has expired.
pub fn filter_out_expired_nvset(nvsets: &[CibNvset]) -> Vec<&CibNvset> {
    nvsets.iter().filter(|nvset| !nvset.is_expired()).collect()
}

/// Render one nvset: a heading, its sorted pairs and its rule.
///
/// The heading is `{label}: {id}` followed by the set options. A rule that is
/// not in effect adds its state to the label.
///
pub fn nvset_dto_to_lines(nvset: &CibNvset, label: &str, with_ids: bool) -> Vec<String> {
    let state = nvset
        .rule
        .as_ref()
        .and_then(|rule| rule.in_effect.label())
        .map(|state| format!(" ({state})"))
        .unwrap_or_default();

    let mut heading = vec![format!("{label}{state}: {}", nvset.id)];
    heading.extend(format_name_value_sorted(
        nvset.options.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    ));

    let mut body = format_name_value_sorted(nvset.pairs());
    if let Some(rule) = &nvset.rule {
        body.extend(rule_expression_dto_to_lines(rule, with_ids));
    }

    let mut lines = vec![heading.join(" ")];
    lines.extend(indent(body, 1));
    lines
}

/// Render every set of a listing.
pub fn nvset_dto_list_to_lines(
    nvsets: &[CibNvset],
    label: &str,
    with_ids: bool,
    include_expired: bool,
) -> Vec<String> {
    let nvsets = if include_expired {
        nvsets.iter().collect()
    } else {
        filter_out_expired_nvset(nvsets)
    };
    nvsets
        .into_iter()
        .flat_map(|nvset| nvset_dto_to_lines(nvset, label, with_ids))
        .collect()
}

/// Render the attribute block of an element.
///
/// Only the first set is rendered. Nothing is rendered when that set has no
/// pairs.
///
pub fn nvsets_to_lines(label: &str, nvsets: &[CibNvset]) -> Vec<String> {
    match nvsets.first() {
        Some(nvset) if !nvset.nvpairs.is_empty() => nvset_dto_to_lines(nvset, label, false),
        _ => Vec::new(),
    }
}

/// Shell quoted `name=value` tokens of the first set, in set order.
pub fn nvsets_to_cmd_pairs(nvsets: &[CibNvset]) -> Vec<String> {
    nvsets
        .first()
        .map(|nvset| pairs_to_cmd(nvset.pairs()))
        .unwrap_or_default()
}

/// Render a one line per element summary of attribute sets.
///
/// Each element contributes `{id}: name=value ...` built from its first set,
/// restricted to `name` when given. Elements without matching pairs are
/// skipped, the heading is always rendered.
///
pub fn nvsets_summary_to_lines<'a, I>(heading: &str, elements: I, name: Option<&str>) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a [CibNvset])>,
{
    let mut lines = vec![heading.to_string()];
    for (id, nvsets) in elements {
        let Some(nvset) = nvsets.first() else {
            continue;
        };
        let tokens = format_name_value_sorted(
            nvset
                .pairs()
                .filter(|(pair_name, _)| name.map_or(true, |name| name == *pair_name)),
        );
        if !tokens.is_empty() {
            lines.push(format!("  {id}: {}", tokens.join(" ")));
        }
    }
    lines
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::json;

    use super::*;

    pub(crate) fn nvset(id: &str, pairs: &[(&str, &str)]) -> CibNvset {
        serde_json::from_value(json!({
            "id": id,
            "nvpairs": pairs
                .iter()
                .map(|(name, value)| json!({"id": format!("{id}-{name}"), "name": name, "value": value}))
                .collect::<Vec<_>>(),
        }))
        .unwrap()
    }

    fn nvset_with_rule(id: &str, in_effect: &str) -> CibNvset {
        serde_json::from_value(json!({
            "id": id,
            "type": "META",
            "options": {"score": "10"},
            "rule": {
                "id": format!("{id}-rule"),
                "type": "RULE",
                "in_effect": in_effect,
                "options": {"boolean-op": "and"},
                "expressions": [{
                    "id": format!("{id}-rule-expr"),
                    "type": "RSC_EXPRESSION",
                    "as_string": "resource ::Dummy",
                }],
                "as_string": "resource ::Dummy",
            },
            "nvpairs": [
                {"id": format!("{id}-b"), "name": "b", "value": "2 3"},
                {"id": format!("{id}-a"), "name": "a", "value": "1"},
            ],
        }))
        .unwrap()
    }

    #[test]
    fn no_rule() {
        assert_eq!(
            nvset_dto_to_lines(&nvset("nvset-no-rule", &[("b", "2"), ("a", "1")]), "Meta Attrs", true),
            vec!["Meta Attrs: nvset-no-rule", "  a=1", "  b=2"]
        );
    }

    #[test]
    fn empty_set() {
        let mut empty = nvset("nvset-empty", &[]);
        empty.options.insert("score".into(), "5".into());
        assert_eq!(
            nvset_dto_to_lines(&empty, "Cluster Properties", true),
            vec!["Cluster Properties: nvset-empty score=5"]
        );
        assert!(nvsets_to_lines("Attributes", &[empty]).is_empty());
        assert!(nvsets_to_lines("Attributes", &[]).is_empty());
    }

    #[test]
    fn first_set_only() {
        let lines = nvsets_to_lines(
            "Attributes",
            &[nvset("first", &[("a", "1")]), nvset("second", &[("b", "2")])],
        );
        assert_eq!(lines, vec!["Attributes: first", "  a=1"]);

        let lines = nvsets_to_lines(
            "Attributes",
            &[nvset("first", &[]), nvset("second", &[("b", "2")])],
        );
        assert!(lines.is_empty());
    }

    #[test]
    fn with_rule() {
        let expired = nvset_with_rule("set1", "EXPIRED");
        assert_eq!(
            nvset_dto_to_lines(&expired, "Meta Attrs", true),
            vec![
                "Meta Attrs (expired): set1 score=10",
                "  a=1",
                "  b=\"2 3\"",
                "  Rule (expired): boolean-op=and (id:set1-rule)",
                "    Expression: resource ::Dummy (id:set1-rule-expr)",
            ]
        );
        assert_eq!(
            nvset_dto_to_lines(&expired, "Meta Attrs", false),
            vec![
                "Meta Attrs (expired): set1 score=10",
                "  a=1",
                "  b=\"2 3\"",
                "  Rule (expired): boolean-op=and",
                "    Expression: resource ::Dummy",
            ]
        );
    }

    #[test]
    fn list_expired() {
        let nvsets = vec![
            nvset_with_rule("set1", "EXPIRED"),
            nvset_with_rule("set2", "IN_EFFECT"),
        ];
        assert_eq!(filter_out_expired_nvset(&nvsets).len(), 1);

        let lines = nvset_dto_list_to_lines(&nvsets, "Meta Attrs", false, false);
        assert_eq!(lines[0], "Meta Attrs: set2 score=10");
        assert_eq!(lines.len(), 5);

        let lines = nvset_dto_list_to_lines(&nvsets, "Meta Attrs", false, true);
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[5], "Meta Attrs: set2 score=10");
    }

    #[test]
    fn cmd_pairs() {
        assert_eq!(
            nvsets_to_cmd_pairs(&[nvset("set", &[("b", "x y"), ("a", "1")])]),
            vec!["'b=x y'", "a=1"]
        );
        assert!(nvsets_to_cmd_pairs(&[]).is_empty());
    }

    #[test]
    fn summary() {
        let first = vec![nvset("n1-utilization", &[("mem", "10"), ("cpu", "2")])];
        let second = vec![nvset("n2-utilization", &[("mem", "20")])];
        let elements = [
            ("node1", first.as_slice()),
            ("node2", second.as_slice()),
            ("node3", &[][..]),
        ];

        assert_eq!(
            nvsets_summary_to_lines("Node Utilization:", elements, None),
            vec!["Node Utilization:", "  node1: cpu=2 mem=10", "  node2: mem=20"]
        );
        assert_eq!(
            nvsets_summary_to_lines("Node Utilization:", elements, Some("cpu")),
            vec!["Node Utilization:", "  node1: cpu=2"]
        );
        assert_eq!(
            nvsets_summary_to_lines("Node Utilization:", elements, Some("disk")),
            vec!["Node Utilization:"]
        );
    }
}
