// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use log::{debug, trace};
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::dto::{
    CibResourceBundle, CibResourceClone, CibResourceGroup, CibResourcePrimitive, CibResources,
};
use crate::Error;

/// A resource of any kind, borrowed from a facade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CibResource<'a> {
    Primitive(&'a CibResourcePrimitive),
    Group(&'a CibResourceGroup),
    Clone(&'a CibResourceClone),
    Bundle(&'a CibResourceBundle),
}

impl<'a> CibResource<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            CibResource::Primitive(primitive) => &primitive.id,
            CibResource::Group(group) => &group.id,
            CibResource::Clone(clone) => &clone.id,
            CibResource::Bundle(bundle) => &bundle.id,
        }
    }
}

/// Navigable forest over flat lists of primitives, groups, clones and bundles.
///
/// The CIB schema guarantees the resource hierarchy is acyclic and that ids
/// are unique, neither is checked here. Each resource has at most one parent;
/// construction fails when a second parent is found.
///
#[derive(Clone, Debug)]
pub struct ResourcesConfigurationFacade {
    primitives: Vec<CibResourcePrimitive>,
    groups: Vec<CibResourceGroup>,
    clones: Vec<CibResourceClone>,
    bundles: Vec<CibResourceBundle>,

    /// Ids requested by `filter_resources` that were found.
    filtered_ids: BTreeSet<String>,

    primitive_index: HashMap<String, usize>,
    group_index: HashMap<String, usize>,
    clone_index: HashMap<String, usize>,
    bundle_index: HashMap<String, usize>,

    child_parent: HashMap<String, String>,
    parent_children: HashMap<String, Vec<String>>,
}

fn index_by_id<T>(items: &[T], id: impl Fn(&T) -> &str) -> HashMap<String, usize> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (id(item).to_string(), i))
        .collect()
}

impl ResourcesConfigurationFacade {
    /// Build the facade and its parent/child index.
    ///
    /// # Errors
    /// `Err(cibconf::Error::ResourceMultipleParents)` when a resource is a
    /// member of more than one group, clone or bundle.
    ///
    pub fn new(
        primitives: Vec<CibResourcePrimitive>,
        groups: Vec<CibResourceGroup>,
        clones: Vec<CibResourceClone>,
        bundles: Vec<CibResourceBundle>,
    ) -> Result<Self, Error> {
        Self::with_filtered_ids(primitives, groups, clones, bundles, BTreeSet::new())
    }

    fn with_filtered_ids(
        primitives: Vec<CibResourcePrimitive>,
        groups: Vec<CibResourceGroup>,
        clones: Vec<CibResourceClone>,
        bundles: Vec<CibResourceBundle>,
        filtered_ids: BTreeSet<String>,
    ) -> Result<Self, Error> {
        trace!(
            "Indexing {} primitive(s), {} group(s), {} clone(s), {} bundle(s).",
            primitives.len(),
            groups.len(),
            clones.len(),
            bundles.len()
        );

        let mut facade = ResourcesConfigurationFacade {
            primitive_index: index_by_id(&primitives, |p| &p.id),
            group_index: index_by_id(&groups, |g| &g.id),
            clone_index: index_by_id(&clones, |c| &c.id),
            bundle_index: index_by_id(&bundles, |b| &b.id),
            primitives,
            groups,
            clones,
            bundles,
            filtered_ids,
            child_parent: HashMap::new(),
            parent_children: HashMap::new(),
        };

        let mut relations = Vec::new();
        for bundle in &facade.bundles {
            if let Some(member_id) = &bundle.member_id {
                relations.push((member_id.clone(), bundle.id.clone()));
            }
        }
        for clone in &facade.clones {
            relations.push((clone.member_id.clone(), clone.id.clone()));
        }
        for group in &facade.groups {
            for member_id in &group.member_ids {
                relations.push((member_id.clone(), group.id.clone()));
            }
        }
        for (child_id, parent_id) in relations {
            facade.set_parent(child_id, parent_id)?;
        }

        Ok(facade)
    }

    /// Build the facade from the snapshot's resource lists.
    ///
    /// # Errors
    /// See `ResourcesConfigurationFacade::new`.
    ///
    pub fn from_resources(resources: CibResources) -> Result<Self, Error> {
        Self::new(
            resources.primitives,
            resources.groups,
            resources.clones,
            resources.bundles,
        )
    }

    fn set_parent(&mut self, child_id: String, parent_id: String) -> Result<(), Error> {
        if let Some(existing_parent_id) = self.child_parent.get(&child_id) {
            return Err(Error::ResourceMultipleParents(
                child_id,
                existing_parent_id.clone(),
                parent_id,
            ));
        }
        self.parent_children
            .entry(parent_id.clone())
            .or_default()
            .push(child_id.clone());
        self.child_parent.insert(child_id, parent_id);
        Ok(())
    }

    pub fn primitives(&self) -> &[CibResourcePrimitive] {
        &self.primitives
    }

    pub fn groups(&self) -> &[CibResourceGroup] {
        &self.groups
    }

    pub fn clones(&self) -> &[CibResourceClone] {
        &self.clones
    }

    pub fn bundles(&self) -> &[CibResourceBundle] {
        &self.bundles
    }

    /// Ids requested by the last `filter_resources` call that were found.
    pub fn filtered_ids(&self) -> &BTreeSet<String> {
        &self.filtered_ids
    }

    pub fn get_parent_id(&self, resource_id: &str) -> Option<&str> {
        self.child_parent.get(resource_id).map(String::as_str)
    }

    /// Ids of the resources directly contained in `resource_id`.
    pub fn get_child_ids(&self, resource_id: &str) -> &[String] {
        self.parent_children
            .get(resource_id)
            .map_or(&[], Vec::as_slice)
    }

    pub fn get_primitive_dto(&self, resource_id: &str) -> Option<&CibResourcePrimitive> {
        self.primitive_index
            .get(resource_id)
            .map(|&i| &self.primitives[i])
    }

    pub fn get_group_dto(&self, resource_id: &str) -> Option<&CibResourceGroup> {
        self.group_index.get(resource_id).map(|&i| &self.groups[i])
    }

    pub fn get_clone_dto(&self, resource_id: &str) -> Option<&CibResourceClone> {
        self.clone_index.get(resource_id).map(|&i| &self.clones[i])
    }

    pub fn get_bundle_dto(&self, resource_id: &str) -> Option<&CibResourceBundle> {
        self.bundle_index.get(resource_id).map(|&i| &self.bundles[i])
    }

    /// Find a resource of any kind.
    pub fn get_resource(&self, resource_id: &str) -> Option<CibResource<'_>> {
        self.get_primitive_dto(resource_id)
            .map(CibResource::Primitive)
            .or_else(|| self.get_group_dto(resource_id).map(CibResource::Group))
            .or_else(|| self.get_clone_dto(resource_id).map(CibResource::Clone))
            .or_else(|| self.get_bundle_dto(resource_id).map(CibResource::Bundle))
    }

    /// Check if a resource is printed at the top level of a listing.
    ///
    /// Without a filter, resources without a parent are printed at the top
    /// level. After `filter_resources`, exactly the requested resources are.
    ///
    pub fn is_root(&self, resource_id: &str) -> bool {
        if self.filtered_ids.is_empty() {
            self.get_parent_id(resource_id).is_none()
        } else {
            self.filtered_ids.contains(resource_id)
        }
    }

    /// Split off stonith or non-stonith resources.
    ///
    /// `allow_stonith = true` keeps all primitives with a stonith agent and
    /// drops every group, clone and bundle. `allow_stonith = false` keeps all
    /// groups, clones and bundles and every primitive except top level
    /// stonith primitives.
    ///
    /// # Errors
    /// Propagates construction errors of the new facade.
    ///
    pub fn filter_stonith(&self, allow_stonith: bool) -> Result<Self, Error> {
        debug!(
            "Selecting {} resources.",
            if allow_stonith { "stonith" } else { "non-stonith" }
        );

        if allow_stonith {
            let primitives = self
                .primitives
                .iter()
                .filter(|p| p.agent_name.is_stonith())
                .cloned()
                .collect();
            return Self::new(primitives, Vec::new(), Vec::new(), Vec::new());
        }

        let primitives = self
            .primitives
            .iter()
            .filter(|p| !p.agent_name.is_stonith() || self.get_parent_id(&p.id).is_some())
            .cloned()
            .collect();
        Self::new(
            primitives,
            self.groups.clone(),
            self.clones.clone(),
            self.bundles.clone(),
        )
    }

    /// Select resources by id, including all their descendants.
    ///
    /// Each requested id that is not found adds a warning to `warnings`.
    ///
    /// # Errors
    /// `Err(cibconf::Error::NoResourceFound)` when none of the ids is found.
    ///
    pub fn filter_resources<S: AsRef<str>>(
        &self,
        resource_ids: &[S],
        warnings: &mut Vec<String>,
    ) -> Result<Self, Error> {
        let mut requested = HashSet::new();
        let mut found = BTreeSet::new();
        for resource_id in resource_ids.iter().map(AsRef::as_ref) {
            if !requested.insert(resource_id) {
                continue;
            }
            if self.get_resource(resource_id).is_some() {
                found.insert(resource_id.to_string());
            } else {
                warnings.push(format!(
                    "Unable to find resource/stonith device '{resource_id}'"
                ));
            }
        }

        if found.is_empty() {
            return Err(Error::NoResourceFound);
        }

        let mut selected: HashSet<&str> = HashSet::new();
        let mut to_process: Vec<&str> = found.iter().map(String::as_str).collect();
        while let Some(resource_id) = to_process.pop() {
            if selected.insert(resource_id) {
                to_process.extend(self.get_child_ids(resource_id).iter().map(String::as_str));
            }
        }
        trace!("Selected {} resource(s).", selected.len());

        Self::with_filtered_ids(
            self.primitives
                .iter()
                .filter(|p| selected.contains(p.id.as_str()))
                .cloned()
                .collect(),
            self.groups
                .iter()
                .filter(|g| selected.contains(g.id.as_str()))
                .cloned()
                .collect(),
            self.clones
                .iter()
                .filter(|c| selected.contains(c.id.as_str()))
                .cloned()
                .collect(),
            self.bundles
                .iter()
                .filter(|b| selected.contains(b.id.as_str()))
                .cloned()
                .collect(),
            found,
        )
    }

    /// The facade's resources as DTO lists.
    pub fn to_resources(&self) -> CibResources {
        CibResources {
            primitives: self.primitives.clone(),
            groups: self.groups.clone(),
            clones: self.clones.clone(),
            bundles: self.bundles.clone(),
        }
    }
}
