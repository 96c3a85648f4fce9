// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

//! Read-only views over DTO collections.
//!
//! Facades are built once per command from the snapshot, never modified, and
//! every filtering operation returns a new facade.

pub mod nodes;
pub mod properties;
pub mod resources;

pub use nodes::NodesConfigurationFacade;
pub use properties::PropertyConfigurationFacade;
pub use resources::{CibResource, ResourcesConfigurationFacade};
