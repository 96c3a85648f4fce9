// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use log::trace;
use std::collections::{HashMap, HashSet};

use crate::dto::CibNode;
use crate::Error;

/// Nodes of the CIB `nodes` section, addressed by name.
#[derive(Clone, Debug)]
pub struct NodesConfigurationFacade {
    nodes: Vec<CibNode>,
    name_index: HashMap<String, usize>,
}

impl NodesConfigurationFacade {
    pub fn new(nodes: Vec<CibNode>) -> Self {
        let name_index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.uname.clone(), i))
            .collect();
        NodesConfigurationFacade { nodes, name_index }
    }

    pub fn nodes(&self) -> &[CibNode] {
        &self.nodes
    }

    pub fn get_node(&self, name: &str) -> Option<&CibNode> {
        self.name_index.get(name).map(|&i| &self.nodes[i])
    }

    /// Select nodes by name, keeping the input order.
    ///
    /// Each name that is not found adds a warning to `warnings`.
    ///
    /// # Errors
    /// `Err(cibconf::Error::NoNodeFound)` when none of the names is found.
    ///
    pub fn filter_nodes<S: AsRef<str>>(
        &self,
        names: &[S],
        warnings: &mut Vec<String>,
    ) -> Result<Self, Error> {
        let mut requested = HashSet::new();
        let mut found = HashSet::new();
        for name in names.iter().map(AsRef::as_ref) {
            if !requested.insert(name) {
                continue;
            }
            if self.name_index.contains_key(name) {
                found.insert(name);
            } else {
                warnings.push(format!("Unable to find node '{name}'"));
            }
        }

        if found.is_empty() {
            return Err(Error::NoNodeFound);
        }
        trace!("Selected {} node(s).", found.len());

        Ok(Self::new(
            self.nodes
                .iter()
                .filter(|node| found.contains(node.uname.as_str()))
                .cloned()
                .collect(),
        ))
    }
}
