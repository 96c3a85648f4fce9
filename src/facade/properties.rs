// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use log::trace;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::dto::{CibNvpair, CibNvset, ResourceAgentParameter};

/// Cluster properties merged with their metadata.
///
/// Only the first property set is in effect. The remaining sets are kept
/// for display.
///
#[derive(Clone, Debug)]
pub struct PropertyConfigurationFacade {
    properties: Vec<CibNvset>,
    properties_metadata: Vec<ResourceAgentParameter>,
    readonly_properties: BTreeSet<String>,
    name_nvpair: HashMap<String, CibNvpair>,
    defaults: BTreeMap<String, String>,
}

/// One row of the effective property listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyValue {
    pub name: String,
    pub value: String,
    pub is_default: bool,
}

fn filter_names_advanced(
    metadata: &ResourceAgentParameter,
    names: Option<&[String]>,
    advanced: Option<bool>,
) -> bool {
    names.map_or(true, |names| names.contains(&metadata.name))
        && advanced.map_or(true, |advanced| advanced == metadata.advanced)
}

impl PropertyConfigurationFacade {
    pub fn new<I, S>(
        properties: Vec<CibNvset>,
        properties_metadata: Vec<ResourceAgentParameter>,
        readonly_properties: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name_nvpair = properties
            .first()
            .map(|nvset| {
                nvset
                    .nvpairs
                    .iter()
                    .map(|nvpair| (nvpair.name.clone(), nvpair.clone()))
                    .collect()
            })
            .unwrap_or_default();

        let defaults = properties_metadata
            .iter()
            .filter_map(|metadata| {
                metadata
                    .default
                    .as_ref()
                    .map(|default| (metadata.name.clone(), default.clone()))
            })
            .collect();

        let facade = PropertyConfigurationFacade {
            properties,
            properties_metadata,
            readonly_properties: readonly_properties.into_iter().map(Into::into).collect(),
            name_nvpair,
            defaults,
        };
        trace!(
            "{} configured property(ies), {} with a default value.",
            facade.name_nvpair.len(),
            facade.defaults.len()
        );
        facade
    }

    pub fn properties(&self) -> &[CibNvset] {
        &self.properties
    }

    pub fn properties_metadata(&self) -> &[ResourceAgentParameter] {
        &self.properties_metadata
    }

    pub fn readonly_properties(&self) -> &BTreeSet<String> {
        &self.readonly_properties
    }

    pub fn is_readonly(&self, name: &str) -> bool {
        self.readonly_properties.contains(name)
    }

    /// The configured value, or `custom_default` when the property is not set.
    pub fn get_property_value<'a>(
        &'a self,
        name: &str,
        custom_default: Option<&'a str>,
    ) -> Option<&'a str> {
        self.name_nvpair
            .get(name)
            .map(|nvpair| nvpair.value.as_str())
            .or(custom_default)
    }

    /// The configured value, then the metadata default, then `custom_default`.
    pub fn get_property_value_or_default<'a>(
        &'a self,
        name: &str,
        custom_default: Option<&'a str>,
    ) -> Option<&'a str> {
        self.get_property_value(name, None)
            .or_else(|| self.defaults.get(name).map(String::as_str))
            .or(custom_default)
    }

    /// Default values of the selected properties that have one.
    ///
    /// `names = None` selects all properties. `advanced = None` selects both
    /// advanced and regular properties.
    ///
    pub fn get_defaults(
        &self,
        names: Option<&[String]>,
        advanced: Option<bool>,
    ) -> BTreeMap<String, String> {
        self.properties_metadata
            .iter()
            .filter(|metadata| filter_names_advanced(metadata, names, advanced))
            .filter_map(|metadata| {
                metadata
                    .default
                    .as_ref()
                    .map(|default| (metadata.name.clone(), default.clone()))
            })
            .collect()
    }

    /// Metadata of the selected properties, in metadata order.
    pub fn get_properties_metadata(
        &self,
        names: Option<&[String]>,
        advanced: Option<bool>,
    ) -> Vec<&ResourceAgentParameter> {
        self.properties_metadata
            .iter()
            .filter(|metadata| filter_names_advanced(metadata, names, advanced))
            .collect()
    }

    /// Configured properties followed by defaults of unset properties.
    ///
    /// Configured properties keep their set order. Defaults follow in name
    /// order. Each name appears once.
    ///
    pub fn get_name_value_default_list(&self) -> Vec<PropertyValue> {
        let mut result: Vec<PropertyValue> = Vec::new();
        let mut seen = BTreeSet::new();
        if let Some(nvset) = self.properties.first() {
            for nvpair in &nvset.nvpairs {
                if seen.insert(nvpair.name.as_str()) {
                    result.push(PropertyValue {
                        name: nvpair.name.clone(),
                        value: self.name_nvpair[&nvpair.name].value.clone(),
                        is_default: false,
                    });
                }
            }
        }
        for (name, default) in &self.defaults {
            if !self.name_nvpair.contains_key(name) {
                result.push(PropertyValue {
                    name: name.clone(),
                    value: default.clone(),
                    is_default: true,
                });
            }
        }
        result
    }
}
