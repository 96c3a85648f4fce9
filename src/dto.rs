// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

//! Plain data records mirroring fragments of the Pacemaker CIB.
//!
//! The records carry no behavior beyond small classification helpers. They
//! serialize to and from the same dictionary form the CIB reading layer
//! produces, which is also the form `--output-format=json` prints.

pub mod agent;
pub mod alert;
pub mod node;
pub mod nvset;
pub mod resource;
pub mod rule;

pub use agent::{ClusterPropertyMetadata, ResourceAgentName, ResourceAgentParameter};
pub use alert::{CibAlert, CibAlertRecipient, CibAlertSelect, CibAlertSelectAttribute};
pub use node::CibNode;
pub use nvset::{CibNvpair, CibNvset, CibNvsetType};
pub use resource::{
    CibResourceBundle, CibResourceBundleContainerOptions, CibResourceBundleContainerType,
    CibResourceBundleNetworkOptions, CibResourceBundlePortMapping,
    CibResourceBundleStorageMapping, CibResourceClone, CibResourceGroup, CibResourceOperation,
    CibResourcePrimitive, CibResources,
};
pub use rule::{CibRuleDateCommon, CibRuleExpression, CibRuleExpressionType, CibRuleInEffectStatus};
