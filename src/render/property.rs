// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use crate::dto::ResourceAgentParameter;
use crate::facade::PropertyConfigurationFacade;
use crate::render::nvset::nvset_dto_to_lines;
use crate::render::{cmd_to_lines, format_name_value_list, indent, pairs_to_cmd};

const LABEL: &str = "Cluster Properties";

/// Render the active property set.
pub fn properties_to_text(facade: &PropertyConfigurationFacade) -> Vec<String> {
    facade
        .properties()
        .first()
        .map(|nvset| nvset_dto_to_lines(nvset, LABEL, false))
        .unwrap_or_default()
}

/// Render configured and default values, marking the defaults.
///
/// `names` restricts the listing to the given properties.
///
pub fn properties_to_text_with_default_mark(
    facade: &PropertyConfigurationFacade,
    names: Option<&[String]>,
) -> Vec<String> {
    let heading = match facade.properties().first() {
        Some(nvset) => format!("{LABEL}: {}", nvset.id),
        None => format!("{LABEL}:"),
    };

    let mut values = facade.get_name_value_default_list();
    values.retain(|value| names.map_or(true, |names| names.contains(&value.name)));
    values.sort_by(|a, b| a.name.cmp(&b.name));

    let body = values.iter().map(|value| {
        let mut line = format_name_value_list([(value.name.as_str(), value.value.as_str())])
            .concat();
        if value.is_default {
            line.push_str(" (default)");
        }
        line
    });

    let mut lines = vec![heading];
    lines.extend(indent(body, 1));
    lines
}

/// Render `name=default` lines sorted by name.
pub fn properties_defaults_to_text<'a, I>(defaults: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut defaults: Vec<(&str, &str)> = defaults
        .into_iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    defaults.sort_unstable();
    format_name_value_list(defaults)
}

fn parameter_to_lines(parameter: &ResourceAgentParameter) -> Vec<String> {
    let mut heading = parameter.name.clone();
    if parameter.advanced {
        heading.push_str(" (advanced use only)");
    }
    if parameter.deprecated {
        heading.push_str(" (deprecated)");
    }

    let mut body = Vec::new();
    let description = parameter
        .longdesc
        .as_deref()
        .or(parameter.shortdesc.as_deref())
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "));
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        body.push(format!("Description: {description}"));
    }
    match &parameter.enum_values {
        Some(values) if !values.is_empty() => body.push(format!(
            "Allowed values: {}",
            values
                .iter()
                .map(|value| format!("'{value}'"))
                .collect::<Vec<_>>()
                .join(", ")
        )),
        _ => body.push(format!("Type: {}", parameter.parameter_type)),
    }
    if let Some(default) = &parameter.default {
        body.push(format!("Default: {default}"));
    }
    if !parameter.deprecated_by.is_empty() {
        body.push(format!(
            "Deprecated by: {}",
            parameter.deprecated_by.join(", ")
        ));
    }
    if let Some(deprecated_desc) = &parameter.deprecated_desc {
        body.push(format!("Deprecated: {deprecated_desc}"));
    }

    let mut lines = vec![heading];
    lines.extend(indent(body, 1));
    lines
}

/// Describe properties from their metadata, sorted by name.
pub fn cluster_property_metadata_to_text(metadata: &[&ResourceAgentParameter]) -> Vec<String> {
    let mut metadata = metadata.to_vec();
    metadata.sort_by(|a, b| a.name.cmp(&b.name));
    metadata.into_iter().flat_map(parameter_to_lines).collect()
}

/// Render a `pcs property set` command for the active property set.
///
/// Read-only properties are left out. Nothing is rendered when no property
/// remains.
///
pub fn properties_to_cmd(facade: &PropertyConfigurationFacade) -> Vec<String> {
    let Some(nvset) = facade.properties().first() else {
        return Vec::new();
    };
    let pairs = pairs_to_cmd(nvset.pairs().filter(|(name, _)| !facade.is_readonly(name)));
    if pairs.is_empty() {
        return Vec::new();
    }

    let mut cmd = vec!["pcs property set --force --".to_string()];
    cmd.extend(indent(pairs, 1));
    cmd_to_lines(&cmd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::properties::tests::{parameter, property_set};

    fn fixture() -> PropertyConfigurationFacade {
        PropertyConfigurationFacade::new(
            vec![property_set(
                "cib-bootstrap-options",
                &[
                    ("stonith-enabled", "false"),
                    ("cluster-name", "HA cluster"),
                    ("dc-version", "2.1.6"),
                ],
            )],
            vec![
                parameter("stonith-enabled", Some("true"), false),
                parameter("maintenance-mode", Some("false"), false),
                parameter("node-health-base", Some("0"), true),
                parameter("batch-limit", None, false),
            ],
            ["cluster-name", "dc-version"],
        )
    }

    #[test]
    fn text() {
        assert_eq!(
            properties_to_text(&fixture()),
            vec![
                "Cluster Properties: cib-bootstrap-options",
                "  cluster-name=\"HA cluster\"",
                "  dc-version=2.1.6",
                "  stonith-enabled=false",
            ]
        );
    }

    #[test]
    fn empty_cluster_property_set() {
        let facade = PropertyConfigurationFacade::new(
            vec![property_set("id1", &[])],
            Vec::new(),
            Vec::<String>::new(),
        );
        assert_eq!(properties_to_text(&facade), vec!["Cluster Properties: id1"]);
        assert!(properties_to_cmd(&facade).is_empty());

        let facade =
            PropertyConfigurationFacade::new(Vec::new(), Vec::new(), Vec::<String>::new());
        assert!(properties_to_text(&facade).is_empty());
    }

    #[test]
    fn text_with_default_mark() {
        assert_eq!(
            properties_to_text_with_default_mark(&fixture(), None),
            vec![
                "Cluster Properties: cib-bootstrap-options",
                "  cluster-name=\"HA cluster\"",
                "  dc-version=2.1.6",
                "  maintenance-mode=false (default)",
                "  node-health-base=0 (default)",
                "  stonith-enabled=false",
            ]
        );

        let names = vec!["maintenance-mode".to_string(), "stonith-enabled".to_string()];
        assert_eq!(
            properties_to_text_with_default_mark(&fixture(), Some(&names)),
            vec![
                "Cluster Properties: cib-bootstrap-options",
                "  maintenance-mode=false (default)",
                "  stonith-enabled=false",
            ]
        );
    }

    #[test]
    fn defaults_text() {
        let facade = fixture();
        assert_eq!(
            properties_defaults_to_text(&facade.get_defaults(None, Some(false))),
            vec!["maintenance-mode=false", "stonith-enabled=true"]
        );
    }

    #[test]
    fn describe() {
        let mut parameters = vec![
            parameter("stonith-enabled", Some("true"), false),
            parameter("node-health-base", Some("0"), true),
        ];
        parameters[0].parameter_type = "boolean".into();
        parameters[0].longdesc = Some("If false,\n  unresponsive nodes\nare not fenced.".into());
        parameters[1].parameter_type = "integer".into();
        parameters[1].deprecated = true;
        parameters[1].deprecated_by = vec!["node-health-strategy".into()];
        parameters.push(parameter("no-quorum-policy", Some("stop"), false));
        parameters[2].parameter_type = "select".into();
        parameters[2].enum_values = Some(vec!["stop".into(), "freeze".into()]);

        assert_eq!(
            cluster_property_metadata_to_text(&parameters.iter().collect::<Vec<_>>()),
            vec![
                "no-quorum-policy",
                "  Description: Short description of no-quorum-policy",
                "  Allowed values: 'stop', 'freeze'",
                "  Default: stop",
                "node-health-base (advanced use only) (deprecated)",
                "  Description: Short description of node-health-base",
                "  Type: integer",
                "  Default: 0",
                "  Deprecated by: node-health-strategy",
                "stonith-enabled",
                "  Description: If false, unresponsive nodes are not fenced.",
                "  Type: boolean",
                "  Default: true",
            ]
        );
    }

    #[test]
    fn cmd_skips_readonly() {
        assert_eq!(
            properties_to_cmd(&fixture()),
            vec!["pcs property set --force -- \\", "  stonith-enabled=false"]
        );
    }

    #[test]
    fn cmd_with_duplicate_metadata() {
        let facade = PropertyConfigurationFacade::new(
            vec![property_set("set", &[("property_name", "value1")])],
            vec![
                parameter("property_name", Some("duplicate_default"), false),
                parameter("property_name", Some("default"), false),
                parameter("property_advanced", Some("default"), true),
            ],
            Vec::<String>::new(),
        );
        assert_eq!(
            properties_to_cmd(&facade),
            vec!["pcs property set --force -- \\", "  property_name=value1"]
        );
    }

    #[test]
    fn cmd_multiple_properties() {
        let facade = PropertyConfigurationFacade::new(
            vec![property_set("set", &[("a", "1"), ("b", "x y")])],
            Vec::new(),
            Vec::<String>::new(),
        );
        assert_eq!(
            properties_to_cmd(&facade),
            vec!["pcs property set --force -- \\", "  a=1 \\", "  'b=x y'"]
        );
    }
}
