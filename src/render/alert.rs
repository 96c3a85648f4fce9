// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use crate::dto::{CibAlert, CibAlertRecipient, CibAlertSelect, CibNvset};
use crate::render::nvset::{nvsets_to_cmd_pairs, nvsets_to_lines};
use crate::render::{indent, pairs_to_cmd, shell_quote};

fn description_to_lines(description: Option<&String>) -> Vec<String> {
    description
        .filter(|description| !description.is_empty())
        .map(|description| vec![format!("Description: {description}")])
        .unwrap_or_default()
}

fn select_to_lines(select: &CibAlertSelect) -> Vec<String> {
    let mut events = Vec::new();
    if select.nodes {
        events.push("nodes".to_string());
    }
    if select.fencing {
        events.push("fencing".to_string());
    }
    if select.resources {
        events.push("resources".to_string());
    }
    if select.attributes {
        if select.attributes_select.is_empty() {
            events.push("attributes".to_string());
        } else {
            let names: Vec<&str> = select
                .attributes_select
                .iter()
                .map(|attribute| attribute.name.as_str())
                .collect();
            events.push(format!("attributes: {}", names.join(", ")));
        }
    }

    let mut lines = vec!["Receives:".to_string()];
    lines.extend(indent(events, 1));
    lines
}

fn recipient_to_lines(recipient: &CibAlertRecipient) -> Vec<String> {
    let mut body = description_to_lines(recipient.description.as_ref());
    body.extend(nvsets_to_lines("Attributes", &recipient.instance_attributes));
    body.extend(nvsets_to_lines("Meta Attributes", &recipient.meta_attributes));

    let mut lines = vec![format!(
        "Recipient: {} (value={})",
        recipient.id, recipient.value
    )];
    lines.extend(indent(body, 1));
    lines
}

/// Render one alert with its event selection and recipients.
pub fn alert_dto_to_lines(alert: &CibAlert) -> Vec<String> {
    let mut body = description_to_lines(alert.description.as_ref());
    body.extend(nvsets_to_lines("Attributes", &alert.instance_attributes));
    body.extend(nvsets_to_lines("Meta Attributes", &alert.meta_attributes));
    if let Some(select) = &alert.select {
        body.extend(select_to_lines(select));
    }
    if !alert.recipients.is_empty() {
        body.push("Recipients:".into());
        body.extend(indent(
            alert.recipients.iter().flat_map(recipient_to_lines),
            1,
        ));
    }

    let mut lines = vec![format!("Alert: {} (path={})", alert.id, alert.path)];
    lines.extend(indent(body, 1));
    lines
}

/// Render all alerts.
pub fn alerts_to_text(alerts: &[CibAlert]) -> Vec<String> {
    if alerts.is_empty() {
        return vec!["No alerts defined".to_string()];
    }
    alerts.iter().flat_map(alert_dto_to_lines).collect()
}

fn options_meta_to_cmd(
    cmd: &mut Vec<String>,
    instance_attributes: &[CibNvset],
    meta_attributes: &[CibNvset],
) {
    let options = nvsets_to_cmd_pairs(instance_attributes);
    if !options.is_empty() {
        cmd.push(format!("  options {}", options.join(" ")));
    }
    let meta = nvsets_to_cmd_pairs(meta_attributes);
    if !meta.is_empty() {
        cmd.push(format!("  meta {}", meta.join(" ")));
    }
}

fn head_to_cmd(command: &str, pairs: &[(&str, &str)], description: Option<&String>) -> String {
    let mut tokens = vec![command.to_string()];
    tokens.extend(pairs_to_cmd(pairs.iter().copied()));
    if let Some(description) = description {
        tokens.extend(pairs_to_cmd([("description", description.as_str())]));
    }
    tokens.join(" ")
}

/// Render `pcs alert` commands that recreate the alerts.
///
/// Event selection cannot be set with `pcs`. Alerts that use it are exported
/// without it and a message is added to `warnings`.
///
pub fn alerts_to_cmd(alerts: &[CibAlert], warnings: &mut Vec<String>) -> Vec<Vec<String>> {
    let mut cmds = Vec::new();
    for alert in alerts {
        if alert.select.is_some() {
            warnings.push(format!(
                "Alert '{}' selects the events it receives, which cannot be set with pcs commands, exporting it to receive all events",
                alert.id
            ));
        }

        let mut cmd = vec![head_to_cmd(
            "pcs alert create",
            &[("path", alert.path.as_str()), ("id", alert.id.as_str())],
            alert.description.as_ref(),
        )];
        options_meta_to_cmd(&mut cmd, &alert.instance_attributes, &alert.meta_attributes);
        cmds.push(cmd);

        for recipient in &alert.recipients {
            let command = format!("pcs alert recipient add {}", shell_quote(&alert.id));
            let mut cmd = vec![head_to_cmd(
                &command,
                &[("value", recipient.value.as_str()), ("id", recipient.id.as_str())],
                recipient.description.as_ref(),
            )];
            options_meta_to_cmd(
                &mut cmd,
                &recipient.instance_attributes,
                &recipient.meta_attributes,
            );
            cmds.push(cmd);
        }
    }
    cmds
}
