// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use crate::dto::CibNode;
use crate::render::nvset::{nvsets_summary_to_lines, nvsets_to_cmd_pairs, nvsets_to_lines};
use crate::render::{indent, shell_quote};

/// Render one node entry.
pub fn node_dto_to_lines(node: &CibNode) -> Vec<String> {
    let mut body = Vec::new();
    if let Some(description) = node.description.as_ref().filter(|d| !d.is_empty()) {
        body.push(format!("Description: {description}"));
    }
    if let Some(node_type) = &node.node_type {
        body.push(format!("Type: {node_type}"));
    }
    if let Some(score) = &node.score {
        body.push(format!("Score: {score}"));
    }
    body.extend(nvsets_to_lines("Attributes", &node.instance_attributes));
    body.extend(nvsets_to_lines("Utilization", &node.utilization));

    let mut lines = vec![format!("Node: {} (id={})", node.uname, node.id)];
    lines.extend(indent(body, 1));
    lines
}

pub fn nodes_to_text(nodes: &[CibNode]) -> Vec<String> {
    nodes.iter().flat_map(node_dto_to_lines).collect()
}

/// Render `pcs node attribute` and `pcs node utilization` commands.
pub fn nodes_to_cmd(nodes: &[CibNode]) -> Vec<Vec<String>> {
    let mut cmds = Vec::new();
    for node in nodes {
        let attributes = nvsets_to_cmd_pairs(&node.instance_attributes);
        if !attributes.is_empty() {
            cmds.push(vec![format!(
                "pcs node attribute {} {}",
                shell_quote(&node.uname),
                attributes.join(" ")
            )]);
        }
        let utilization = nvsets_to_cmd_pairs(&node.utilization);
        if !utilization.is_empty() {
            cmds.push(vec![format!(
                "pcs node utilization {} {}",
                shell_quote(&node.uname),
                utilization.join(" ")
            )]);
        }
    }
    cmds
}

/// Render the `Node Attributes:` summary.
pub fn nodes_attributes_to_lines(nodes: &[CibNode], name: Option<&str>) -> Vec<String> {
    nvsets_summary_to_lines(
        "Node Attributes:",
        nodes
            .iter()
            .map(|node| (node.uname.as_str(), node.instance_attributes.as_slice())),
        name,
    )
}

/// Render the `Node Utilization:` summary.
pub fn nodes_utilization_to_lines(nodes: &[CibNode], name: Option<&str>) -> Vec<String> {
    nvsets_summary_to_lines(
        "Node Utilization:",
        nodes
            .iter()
            .map(|node| (node.uname.as_str(), node.utilization.as_slice())),
        name,
    )
}
