// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use log::trace;
use std::collections::HashSet;

use crate::dto::{
    CibResourceBundle, CibResourceBundleContainerOptions, CibResourceBundleNetworkOptions,
    CibResourceBundlePortMapping, CibResourceBundleStorageMapping, CibResourceClone,
    CibResourceGroup, CibResourceOperation, CibResourcePrimitive, ResourceAgentName,
};
use crate::facade::{CibResource, ResourcesConfigurationFacade};
use crate::render::nvset::{nvsets_summary_to_lines, nvsets_to_cmd_pairs, nvsets_to_lines};
use crate::render::{bool_to_cli_value, format_name_value_list, indent, pairs_to_cmd, shell_quote};
use crate::settings::Configuration;
use crate::Error;

type Pairs = Vec<(&'static str, String)>;

fn as_str_pairs(pairs: &Pairs) -> impl Iterator<Item = (&str, &str)> {
    pairs.iter().map(|(name, value)| (*name, value.as_str()))
}

fn push_some<T: ToString>(pairs: &mut Pairs, name: &'static str, value: Option<T>) {
    if let Some(value) = value {
        pairs.push((name, value.to_string()));
    }
}

fn description_to_lines(description: Option<&String>) -> Vec<String> {
    match description {
        Some(description) if !description.is_empty() => vec![format!("Description: {description}")],
        _ => Vec::new(),
    }
}

fn agent_name_to_text(agent_name: &ResourceAgentName) -> String {
    let mut pairs = vec![("class", agent_name.standard.as_str())];
    if let Some(provider) = &agent_name.provider {
        pairs.push(("provider", provider.as_str()));
    }
    pairs.push(("type", agent_name.agent_type.as_str()));
    format_name_value_list(pairs).join(" ")
}

fn operation_pairs(operation: &CibResourceOperation) -> Pairs {
    let mut pairs = vec![("interval", operation.interval.clone())];
    push_some(&mut pairs, "interval-origin", operation.interval_origin.as_ref());
    push_some(&mut pairs, "start-delay", operation.start_delay.as_ref());
    push_some(&mut pairs, "timeout", operation.timeout.as_ref());
    push_some(&mut pairs, "enabled", operation.enabled.map(bool_to_cli_value));
    push_some(
        &mut pairs,
        "record-pending",
        operation.record_pending.map(bool_to_cli_value),
    );
    push_some(&mut pairs, "role", operation.role.as_ref());
    push_some(&mut pairs, "on-fail", operation.on_fail.as_ref());
    pairs
}

fn container_pairs(options: &CibResourceBundleContainerOptions) -> Pairs {
    let mut pairs = vec![("image", options.image.clone())];
    push_some(&mut pairs, "replicas", options.replicas);
    push_some(&mut pairs, "replicas-per-host", options.replicas_per_host);
    push_some(&mut pairs, "promoted-max", options.promoted_max);
    push_some(&mut pairs, "run-command", options.run_command.as_ref());
    push_some(&mut pairs, "network", options.network.as_ref());
    push_some(&mut pairs, "options", options.options.as_ref());
    pairs
}

fn network_pairs(network: &CibResourceBundleNetworkOptions) -> Pairs {
    let mut pairs = Vec::new();
    push_some(&mut pairs, "ip-range-start", network.ip_range_start.as_ref());
    push_some(&mut pairs, "control-port", network.control_port);
    push_some(&mut pairs, "host-interface", network.host_interface.as_ref());
    push_some(&mut pairs, "host-netmask", network.host_netmask);
    push_some(&mut pairs, "add-host", network.add_host.map(bool_to_cli_value));
    pairs
}

fn port_mapping_pairs(port_mapping: &CibResourceBundlePortMapping) -> Pairs {
    let mut pairs = vec![("id", port_mapping.id.clone())];
    push_some(&mut pairs, "port", port_mapping.port);
    push_some(&mut pairs, "internal-port", port_mapping.internal_port);
    push_some(&mut pairs, "range", port_mapping.range.as_ref());
    pairs
}

fn storage_mapping_pairs(storage_mapping: &CibResourceBundleStorageMapping) -> Pairs {
    let mut pairs = vec![("id", storage_mapping.id.clone())];
    push_some(&mut pairs, "source-dir", storage_mapping.source_dir.as_ref());
    push_some(
        &mut pairs,
        "source-dir-root",
        storage_mapping.source_dir_root.as_ref(),
    );
    pairs.push(("target-dir", storage_mapping.target_dir.clone()));
    push_some(&mut pairs, "options", storage_mapping.options.as_ref());
    pairs
}

fn operation_to_lines(operation: &CibResourceOperation) -> Vec<String> {
    let mut body = vec![format_name_value_list(as_str_pairs(&operation_pairs(operation))).join(" ")];
    body.extend(nvsets_to_lines("Attributes", &operation.instance_attributes));
    body.extend(nvsets_to_lines("Meta Attributes", &operation.meta_attributes));

    let mut lines = vec![format!("{}: {}", operation.name, operation.id)];
    lines.extend(indent(body, 1));
    lines
}

/// Render a primitive with its attributes and operations.
pub fn primitive_to_lines(primitive: &CibResourcePrimitive) -> Vec<String> {
    let mut body = description_to_lines(primitive.description.as_ref());
    body.extend(nvsets_to_lines("Attributes", &primitive.instance_attributes));
    body.extend(nvsets_to_lines("Meta Attributes", &primitive.meta_attributes));
    body.extend(nvsets_to_lines("Utilization", &primitive.utilization));
    if !primitive.operations.is_empty() {
        body.push("Operations:".into());
        body.extend(indent(
            primitive.operations.iter().flat_map(operation_to_lines),
            1,
        ));
    }

    let mut lines = vec![format!(
        "Resource: {} ({})",
        primitive.id,
        agent_name_to_text(&primitive.agent_name)
    )];
    lines.extend(indent(body, 1));
    lines
}

/// Render a group with its member primitives.
///
/// # Errors
/// `Err(cibconf::Error::ResourceMissingMember)` when a member is not a known
/// primitive.
///
pub fn group_to_lines(
    group: &CibResourceGroup,
    facade: &ResourcesConfigurationFacade,
) -> Result<Vec<String>, Error> {
    let mut body = description_to_lines(group.description.as_ref());
    body.extend(nvsets_to_lines("Attributes", &group.instance_attributes));
    body.extend(nvsets_to_lines("Meta Attributes", &group.meta_attributes));
    for member_id in &group.member_ids {
        let primitive = facade
            .get_primitive_dto(member_id)
            .ok_or_else(|| Error::ResourceMissingMember(group.id.clone(), member_id.clone()))?;
        body.extend(primitive_to_lines(primitive));
    }

    let mut lines = vec![format!("Group: {}", group.id)];
    lines.extend(indent(body, 1));
    Ok(lines)
}

/// Render a clone with its member primitive or group.
///
/// # Errors
/// `Err(cibconf::Error::ResourceMissingChild)` when the member is neither a
/// known primitive nor a known group.
///
pub fn clone_to_lines(
    clone: &CibResourceClone,
    facade: &ResourcesConfigurationFacade,
) -> Result<Vec<String>, Error> {
    let mut body = description_to_lines(clone.description.as_ref());
    body.extend(nvsets_to_lines("Attributes", &clone.instance_attributes));
    body.extend(nvsets_to_lines("Meta Attributes", &clone.meta_attributes));
    match facade.get_resource(&clone.member_id) {
        Some(CibResource::Primitive(primitive)) => body.extend(primitive_to_lines(primitive)),
        Some(CibResource::Group(group)) => body.extend(group_to_lines(group, facade)?),
        _ => return Err(Error::ResourceMissingChild("clone", clone.id.clone())),
    }

    let mut lines = vec![format!("Clone: {}", clone.id)];
    lines.extend(indent(body, 1));
    Ok(lines)
}

/// Render a bundle with its container settings and member primitive.
///
/// # Errors
/// `Err(cibconf::Error::ResourceMissingChild)` when the bundle names a member
/// that is not a known primitive.
///
pub fn bundle_to_lines(
    bundle: &CibResourceBundle,
    facade: &ResourcesConfigurationFacade,
) -> Result<Vec<String>, Error> {
    let mut body = description_to_lines(bundle.description.as_ref());
    if let Some(options) = &bundle.container_options {
        let label = bundle.container_type.map_or("Container", |t| t.label());
        body.push(format!(
            "{label}: {}",
            format_name_value_list(as_str_pairs(&container_pairs(options))).join(" ")
        ));
    }
    if let Some(network) = &bundle.network {
        let pairs = network_pairs(network);
        if !pairs.is_empty() {
            body.push(format!(
                "Network: {}",
                format_name_value_list(as_str_pairs(&pairs)).join(" ")
            ));
        }
    }
    if !bundle.port_mappings.is_empty() {
        body.push("Port Mapping:".into());
        body.extend(indent(
            bundle.port_mappings.iter().map(|port_mapping| {
                format_name_value_list(as_str_pairs(&port_mapping_pairs(port_mapping))).join(" ")
            }),
            1,
        ));
    }
    if !bundle.storage_mappings.is_empty() {
        body.push("Storage Mapping:".into());
        body.extend(indent(
            bundle.storage_mappings.iter().map(|storage_mapping| {
                format_name_value_list(as_str_pairs(&storage_mapping_pairs(storage_mapping)))
                    .join(" ")
            }),
            1,
        ));
    }
    body.extend(nvsets_to_lines("Attributes", &bundle.instance_attributes));
    body.extend(nvsets_to_lines("Meta Attributes", &bundle.meta_attributes));
    if let Some(member_id) = &bundle.member_id {
        let primitive = facade
            .get_primitive_dto(member_id)
            .ok_or_else(|| Error::ResourceMissingChild("bundle", bundle.id.clone()))?;
        body.extend(primitive_to_lines(primitive));
    }

    let mut lines = vec![format!("Bundle: {}", bundle.id)];
    lines.extend(indent(body, 1));
    Ok(lines)
}

/// Render all top level resources of a facade and their descendants.
///
/// # Errors
/// Returns `Err(cibconf::Error)` when a group, clone or bundle refers to a
/// resource the facade does not contain.
///
pub fn resources_to_text(facade: &ResourcesConfigurationFacade) -> Result<Vec<String>, Error> {
    let mut lines = Vec::new();
    for primitive in facade.primitives() {
        if facade.is_root(&primitive.id) {
            lines.extend(primitive_to_lines(primitive));
        }
    }
    for group in facade.groups() {
        if facade.is_root(&group.id) {
            lines.extend(group_to_lines(group, facade)?);
        }
    }
    for clone in facade.clones() {
        if facade.is_root(&clone.id) {
            lines.extend(clone_to_lines(clone, facade)?);
        }
    }
    for bundle in facade.bundles() {
        if facade.is_root(&bundle.id) {
            lines.extend(bundle_to_lines(bundle, facade)?);
        }
    }
    Ok(lines)
}

/// Render the `Resource Utilization:` summary of primitives.
pub fn resources_utilization_to_lines(
    facade: &ResourcesConfigurationFacade,
    name: Option<&str>,
) -> Vec<String> {
    nvsets_summary_to_lines(
        "Resource Utilization:",
        facade
            .primitives()
            .iter()
            .map(|primitive| (primitive.id.as_str(), primitive.utilization.as_slice())),
        name,
    )
}

fn operation_to_cmd(operation: &CibResourceOperation) -> String {
    let mut pairs = operation_pairs(operation);
    pairs.insert(1, ("id", operation.id.clone()));

    let mut tokens = vec![shell_quote(&operation.name).into_owned()];
    tokens.extend(pairs_to_cmd(as_str_pairs(&pairs)));
    tokens.extend(nvsets_to_cmd_pairs(&operation.instance_attributes));
    tokens.extend(nvsets_to_cmd_pairs(&operation.meta_attributes));
    tokens.join(" ")
}

fn primitive_to_cmd(primitive: &CibResourcePrimitive, bundle_id: Option<&str>) -> Vec<String> {
    let (command, agent) = if primitive.agent_name.is_stonith() {
        ("pcs stonith create", primitive.agent_name.agent_type.clone())
    } else {
        ("pcs resource create", primitive.agent_name.to_string())
    };
    let mut cmd = vec![format!(
        "{command} --no-default-ops --force -- {} {}",
        shell_quote(&primitive.id),
        shell_quote(&agent)
    )];

    let mut options = Vec::new();
    if let Some(description) = &primitive.description {
        options.extend(pairs_to_cmd([("description", description.as_str())]));
    }
    options.extend(nvsets_to_cmd_pairs(&primitive.instance_attributes));
    if !options.is_empty() {
        cmd.push(format!("  {}", options.join(" ")));
    }

    if !primitive.operations.is_empty() {
        cmd.push("  op".into());
        cmd.extend(
            primitive
                .operations
                .iter()
                .map(|operation| format!("    {}", operation_to_cmd(operation))),
        );
    }

    let meta = nvsets_to_cmd_pairs(&primitive.meta_attributes);
    if !meta.is_empty() {
        cmd.push(format!("  meta {}", meta.join(" ")));
    }

    if let Some(bundle_id) = bundle_id {
        cmd.push(format!("  bundle {}", shell_quote(bundle_id)));
    }
    cmd
}

fn utilization_to_cmd(primitive: &CibResourcePrimitive) -> Option<Vec<String>> {
    let pairs = nvsets_to_cmd_pairs(&primitive.utilization);
    if pairs.is_empty() {
        return None;
    }
    Some(vec![format!(
        "pcs resource utilization {} {}",
        shell_quote(&primitive.id),
        pairs.join(" ")
    )])
}

fn bundle_to_cmd(bundle: &CibResourceBundle, container_type: &str) -> Vec<String> {
    let mut cmd = vec![format!(
        "pcs resource bundle create --force -- {}",
        shell_quote(&bundle.id)
    )];

    let mut container = vec!["container".to_string(), shell_quote(container_type).into_owned()];
    if let Some(options) = &bundle.container_options {
        container.extend(pairs_to_cmd(as_str_pairs(&container_pairs(options))));
    }
    cmd.push(format!("  {}", container.join(" ")));

    if let Some(network) = &bundle.network {
        let pairs = network_pairs(network);
        if !pairs.is_empty() {
            cmd.push(format!(
                "  network {}",
                pairs_to_cmd(as_str_pairs(&pairs)).join(" ")
            ));
        }
    }
    for port_mapping in &bundle.port_mappings {
        cmd.push(format!(
            "  port-map {}",
            pairs_to_cmd(as_str_pairs(&port_mapping_pairs(port_mapping))).join(" ")
        ));
    }
    for storage_mapping in &bundle.storage_mappings {
        cmd.push(format!(
            "  storage-map {}",
            pairs_to_cmd(as_str_pairs(&storage_mapping_pairs(storage_mapping))).join(" ")
        ));
    }

    let meta = nvsets_to_cmd_pairs(&bundle.meta_attributes);
    if !meta.is_empty() {
        cmd.push(format!("  meta {}", meta.join(" ")));
    }
    cmd
}

/// Ids of stonith primitives at or below `resource_id`, sorted.
fn stonith_ids(facade: &ResourcesConfigurationFacade, resource_id: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut to_process = vec![resource_id];
    while let Some(id) = to_process.pop() {
        if let Some(primitive) = facade.get_primitive_dto(id) {
            if primitive.agent_name.is_stonith() {
                result.push(primitive.id.clone());
            }
        }
        to_process.extend(facade.get_child_ids(id).iter().map(String::as_str));
    }
    result.sort_unstable();
    result
}

fn quoted_list(ids: &[String]) -> String {
    ids.iter()
        .map(|id| format!("'{id}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn omitted_warning(kind: &str, id: &str, reason: &str) -> String {
    format!(
        "{kind} '{id}' {reason}, therefore it is not possible to display its configuration as pcs commands"
    )
}

/// Render `pcs` commands that recreate the resources of a facade.
///
/// Bundles come first, each followed by its member primitive. Remaining
/// primitives follow, then groups, then clones. Structures that `pcs` cannot
/// create are left out with a message added to `warnings`.
///
/// # Errors
/// `Err(cibconf::Error::ResourceMissingMember)` when a group member is not a
/// known primitive.
///
pub fn resources_to_cmd(
    facade: &ResourcesConfigurationFacade,
    settings: &Configuration,
    warnings: &mut Vec<String>,
) -> Result<Vec<Vec<String>>, Error> {
    let mut cmds = Vec::new();
    let mut bundle_member_ids = HashSet::new();

    for bundle in facade.bundles() {
        let member = match &bundle.member_id {
            Some(member_id) => {
                bundle_member_ids.insert(member_id.as_str());
                Some(
                    facade
                        .get_primitive_dto(member_id)
                        .ok_or_else(|| Error::ResourceMissingChild("bundle", bundle.id.clone()))?,
                )
            }
            None => None,
        };

        let container_type = match bundle.container_type {
            Some(container_type) if settings.is_cmd_container_type(container_type) => {
                container_type
            }
            _ => {
                warnings.push(omitted_warning(
                    "Bundle",
                    &bundle.id,
                    "uses unsupported container type",
                ));
                continue;
            }
        };
        if let Some(member) = member.filter(|member| member.agent_name.is_stonith()) {
            warnings.push(omitted_warning(
                "Bundle",
                &bundle.id,
                &format!("contains stonith resource(s): '{}'", member.id),
            ));
            continue;
        }

        cmds.push(bundle_to_cmd(bundle, container_type.as_str()));
        if let Some(member) = member {
            cmds.push(primitive_to_cmd(member, Some(&bundle.id)));
            cmds.extend(utilization_to_cmd(member));
        }
    }

    for primitive in facade.primitives() {
        if bundle_member_ids.contains(primitive.id.as_str()) {
            continue;
        }
        if primitive.agent_name.is_stonith() && facade.get_parent_id(&primitive.id).is_some() {
            trace!("Skipping nested stonith resource '{}'.", primitive.id);
            continue;
        }
        cmds.push(primitive_to_cmd(primitive, None));
        cmds.extend(utilization_to_cmd(primitive));
    }

    let mut omitted_group_ids = HashSet::new();
    for group in facade.groups() {
        let stonith = stonith_ids(facade, &group.id);
        if !stonith.is_empty() {
            warnings.push(omitted_warning(
                "Group",
                &group.id,
                &format!("contains stonith resource(s): {}", quoted_list(&stonith)),
            ));
            omitted_group_ids.insert(group.id.as_str());
            continue;
        }

        let mut add = vec![
            "pcs resource group add".to_string(),
            shell_quote(&group.id).into_owned(),
        ];
        for member_id in &group.member_ids {
            if facade.get_primitive_dto(member_id).is_none() {
                return Err(Error::ResourceMissingMember(
                    group.id.clone(),
                    member_id.clone(),
                ));
            }
            add.push(shell_quote(member_id).into_owned());
        }
        cmds.push(vec![add.join(" ")]);

        let meta = nvsets_to_cmd_pairs(&group.meta_attributes);
        if !meta.is_empty() {
            cmds.push(vec![
                format!("pcs resource meta {}", shell_quote(&group.id)),
                format!("  {}", meta.join(" ")),
            ]);
        }
    }

    for clone in facade.clones() {
        if omitted_group_ids.contains(clone.member_id.as_str()) {
            trace!(
                "Skipping clone '{}' of omitted group '{}'.",
                clone.id,
                clone.member_id
            );
            continue;
        }
        let stonith = stonith_ids(facade, &clone.member_id);
        if !stonith.is_empty() {
            warnings.push(omitted_warning(
                "Clone",
                &clone.id,
                &format!("contains stonith resource(s): {}", quoted_list(&stonith)),
            ));
            continue;
        }

        let mut cmd = vec![format!(
            "pcs resource clone {} {}",
            shell_quote(&clone.member_id),
            shell_quote(&clone.id)
        )];
        let meta = nvsets_to_cmd_pairs(&clone.meta_attributes);
        if !meta.is_empty() {
            cmd.push(format!("  meta {}", meta.join(" ")));
        }
        cmds.push(cmd);
    }

    Ok(cmds)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::builtin::BuiltIn;
    use crate::dto::CibResources;

    fn facade(resources: serde_json::Value) -> ResourcesConfigurationFacade {
        let resources: CibResources = serde_json::from_value(resources).unwrap();
        ResourcesConfigurationFacade::from_resources(resources).unwrap()
    }

    fn nvset(id: &str, pairs: &[(&str, &str)]) -> serde_json::Value {
        json!([{
            "id": id,
            "nvpairs": pairs
                .iter()
                .map(|(name, value)| json!({"id": format!("{id}-{name}"), "name": name, "value": value}))
                .collect::<Vec<_>>(),
        }])
    }

    fn dummy(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "agent_name": {"standard": "ocf", "provider": "pacemaker", "type": "Dummy"},
        })
    }

    fn fence(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "agent_name": {"standard": "stonith", "provider": null, "type": "fence_xvm"},
        })
    }

    fn full_primitive() -> serde_json::Value {
        json!({
            "id": "R7",
            "agent_name": {"standard": "ocf", "provider": "pacemaker", "type": "Dummy"},
            "description": "test description",
            "operations": [
                {
                    "id": "R7-monitor-interval-10s",
                    "name": "monitor",
                    "interval": "10s",
                    "timeout": "20s",
                    "enabled": false,
                    "on_fail": "restart",
                    "instance_attributes": nvset("R7-op-attrs", &[("OCF_CHECK_LEVEL", "1")]),
                },
                {
                    "id": "R7-start-interval-0s",
                    "name": "start",
                    "interval": "0s",
                    "start_delay": "5s",
                },
            ],
            "instance_attributes": nvset("R7-instance_attributes", &[("fake", "some value"), ("envfile", "/dev/null")]),
            "meta_attributes": nvset("R7-meta_attributes", &[("target-role", "Stopped")]),
            "utilization": nvset("R7-utilization", &[("cpu", "2")]),
        })
    }

    #[test]
    fn primitive_text() {
        let facade = facade(json!({"primitives": [full_primitive()]}));
        assert_eq!(
            resources_to_text(&facade).unwrap(),
            vec![
                "Resource: R7 (class=ocf provider=pacemaker type=Dummy)",
                "  Description: test description",
                "  Attributes: R7-instance_attributes",
                "    envfile=/dev/null",
                "    fake=\"some value\"",
                "  Meta Attributes: R7-meta_attributes",
                "    target-role=Stopped",
                "  Utilization: R7-utilization",
                "    cpu=2",
                "  Operations:",
                "    monitor: R7-monitor-interval-10s",
                "      interval=10s timeout=20s enabled=0 on-fail=restart",
                "      Attributes: R7-op-attrs",
                "        OCF_CHECK_LEVEL=1",
                "    start: R7-start-interval-0s",
                "      interval=0s start-delay=5s",
            ]
        );
    }

    #[test]
    fn primitive_cmd() {
        let facade = facade(json!({"primitives": [full_primitive(), fence("S1")]}));
        let mut warnings = Vec::new();
        let cmds = resources_to_cmd(&facade, &Configuration::built_in(), &mut warnings).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(
            cmds,
            vec![
                vec![
                    "pcs resource create --no-default-ops --force -- R7 ocf:pacemaker:Dummy",
                    "  'description=test description' 'fake=some value' envfile=/dev/null",
                    "  op",
                    "    monitor interval=10s id=R7-monitor-interval-10s timeout=20s enabled=0 on-fail=restart OCF_CHECK_LEVEL=1",
                    "    start interval=0s id=R7-start-interval-0s start-delay=5s",
                    "  meta target-role=Stopped",
                ],
                vec!["pcs resource utilization R7 cpu=2"],
                vec!["pcs stonith create --no-default-ops --force -- S1 fence_xvm"],
            ]
        );
    }

    fn composite_fixture() -> ResourcesConfigurationFacade {
        facade(json!({
            "primitives": [dummy("R1"), dummy("R2"), dummy("R3"), dummy("R4"), fence("S1"), fence("S2")],
            "groups": [
                {"id": "G1", "member_ids": ["R1", "R2"], "meta_attributes": nvset("G1-meta", &[("a", "b")])},
                {"id": "G2", "member_ids": ["R3", "S2", "S1"]},
            ],
            "clones": [
                {"id": "G1-clone", "member_id": "G1"},
                {"id": "G2-clone", "member_id": "G2"},
            ],
            "bundles": [
                {
                    "id": "B1",
                    "member_id": "R4",
                    "container_type": "podman",
                    "container_options": {"image": "pcs:test", "replicas": 2},
                    "network": {"control_port": 4000, "add_host": true},
                    "port_mappings": [{"id": "B1-port-map-80", "port": 80}],
                    "storage_mappings": [{"id": "B1-storage", "source_dir": "/tmp/a b", "target_dir": "/tmp/c"}],
                },
                {
                    "id": "B2",
                    "container_type": "rkt",
                    "container_options": {"image": "pcs:test"},
                },
            ],
        }))
    }

    #[test]
    fn composite_text() {
        let lines = resources_to_text(&composite_fixture()).unwrap();
        assert_eq!(
            lines,
            vec![
                "Clone: G1-clone",
                "  Group: G1",
                "    Meta Attributes: G1-meta",
                "      a=b",
                "    Resource: R1 (class=ocf provider=pacemaker type=Dummy)",
                "    Resource: R2 (class=ocf provider=pacemaker type=Dummy)",
                "Clone: G2-clone",
                "  Group: G2",
                "    Resource: R3 (class=ocf provider=pacemaker type=Dummy)",
                "    Resource: S2 (class=stonith type=fence_xvm)",
                "    Resource: S1 (class=stonith type=fence_xvm)",
                "Bundle: B1",
                "  Podman: image=pcs:test replicas=2",
                "  Network: control-port=4000 add-host=1",
                "  Port Mapping:",
                "    id=B1-port-map-80 port=80",
                "  Storage Mapping:",
                "    id=B1-storage source-dir=\"/tmp/a b\" target-dir=/tmp/c",
                "  Resource: R4 (class=ocf provider=pacemaker type=Dummy)",
                "Bundle: B2",
                "  Rkt: image=pcs:test",
            ]
        );
    }

    #[test]
    fn filtered_text() {
        let mut warnings = Vec::new();
        let facade = composite_fixture()
            .filter_resources(&["R2", "B1"], &mut warnings)
            .unwrap();
        let lines = resources_to_text(&facade).unwrap();
        assert_eq!(lines[0], "Resource: R2 (class=ocf provider=pacemaker type=Dummy)");
        assert_eq!(lines[1], "Bundle: B1");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn composite_cmd() {
        let mut warnings = Vec::new();
        let cmds = resources_to_cmd(
            &composite_fixture(),
            &Configuration::built_in(),
            &mut warnings,
        )
        .unwrap();

        assert_eq!(
            cmds,
            vec![
                vec![
                    "pcs resource bundle create --force -- B1",
                    "  container podman image=pcs:test replicas=2",
                    "  network control-port=4000 add-host=1",
                    "  port-map id=B1-port-map-80 port=80",
                    "  storage-map id=B1-storage 'source-dir=/tmp/a b' target-dir=/tmp/c",
                ],
                vec![
                    "pcs resource create --no-default-ops --force -- R4 ocf:pacemaker:Dummy",
                    "  bundle B1",
                ],
                vec!["pcs resource create --no-default-ops --force -- R1 ocf:pacemaker:Dummy"],
                vec!["pcs resource create --no-default-ops --force -- R2 ocf:pacemaker:Dummy"],
                vec!["pcs resource create --no-default-ops --force -- R3 ocf:pacemaker:Dummy"],
                vec!["pcs resource group add G1 R1 R2"],
                vec!["pcs resource meta G1", "  a=b"],
                vec!["pcs resource clone G1 G1-clone"],
            ]
        );
        assert_eq!(
            warnings,
            vec![
                "Bundle 'B2' uses unsupported container type, therefore it is not possible to display its configuration as pcs commands",
                "Group 'G2' contains stonith resource(s): 'S1', 'S2', therefore it is not possible to display its configuration as pcs commands",
            ]
        );
    }

    #[test]
    fn group_with_stonith_cmd() {
        let facade = facade(json!({
            "primitives": [dummy("R1"), fence("S1")],
            "groups": [{"id": "G1", "member_ids": ["R1", "S1"]}],
        }));
        let mut warnings = Vec::new();
        let cmds = resources_to_cmd(&facade, &Configuration::built_in(), &mut warnings).unwrap();
        assert_eq!(
            cmds,
            vec![vec![
                "pcs resource create --no-default-ops --force -- R1 ocf:pacemaker:Dummy"
            ]]
        );
        assert_eq!(
            warnings,
            vec!["Group 'G1' contains stonith resource(s): 'S1', therefore it is not possible to display its configuration as pcs commands"]
        );
    }

    #[test]
    fn clone_of_stonith_cmd() {
        let facade = facade(json!({
            "primitives": [fence("S1")],
            "clones": [{"id": "S1-clone", "member_id": "S1"}],
        }));
        let mut warnings = Vec::new();
        let cmds = resources_to_cmd(&facade, &Configuration::built_in(), &mut warnings).unwrap();
        assert!(cmds.is_empty());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Clone 'S1-clone' contains stonith resource(s): 'S1'"));
    }

    #[test]
    fn bundle_of_stonith_cmd() {
        let facade = facade(json!({
            "primitives": [dummy("R1"), fence("S1")],
            "bundles": [{
                "id": "B",
                "member_id": "S1",
                "container_type": "podman",
                "container_options": {"image": "pcs:test"},
            }],
        }));
        let mut warnings = Vec::new();
        let cmds = resources_to_cmd(&facade, &Configuration::built_in(), &mut warnings).unwrap();
        assert_eq!(
            cmds,
            vec![vec![
                "pcs resource create --no-default-ops --force -- R1 ocf:pacemaker:Dummy"
            ]]
        );
        assert_eq!(
            warnings,
            vec!["Bundle 'B' contains stonith resource(s): 'S1', therefore it is not possible to display its configuration as pcs commands"]
        );
    }

    #[test]
    fn missing_children() {
        let facade = facade(json!({
            "primitives": [dummy("R1")],
            "groups": [{"id": "G1", "member_ids": ["R1", "R9"]}],
        }));
        assert!(matches!(
            resources_to_text(&facade),
            Err(Error::ResourceMissingMember(group, member)) if group == "G1" && member == "R9"
        ));

        let facade = self::facade(json!({"clones": [{"id": "C1", "member_id": "R9"}]}));
        let error = resources_to_text(&facade).unwrap_err();
        assert_eq!(error.to_string(), "Invalid data: clone 'C1' has no children");
    }

    #[test]
    fn utilization_summary() {
        let facade = facade(json!({"primitives": [full_primitive(), dummy("R1")]}));
        assert_eq!(
            resources_utilization_to_lines(&facade, None),
            vec!["Resource Utilization:", "  R7: cpu=2"]
        );
        assert_eq!(
            resources_utilization_to_lines(&facade, Some("mem")),
            vec!["Resource Utilization:"]
        );
    }
}
