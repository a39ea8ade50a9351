// Copyright (c) 2025 - Cowboy AI, Inc.
//! Managed Object Kind Taxonomy
//!
//! Defines the closed set of vCenter inventory kinds this engine can
//! classify, and the MOID prefix table that maps an opaque identifier to
//! its kind. vCenter encodes the managed object type in the identifier
//! prefix (`vm-`, `datastore-`, `domain-c`, ...), which makes
//! classification a pure string operation with no inventory round trip.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{InventoryError, InventoryResult};

/// Inventory resource kind taxonomy
///
/// This enum is the complete set of managed object kinds the resolution
/// engine understands. Every valid MOID prefix maps to exactly one kind;
/// anything else fails classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Resource pool under a cluster or standalone host
    ResourcePool,
    /// Cluster compute resource
    Cluster,
    /// Standalone host compute resource
    HostComputeResource,
    /// Datastore
    Datastore,
    /// Inventory folder
    Folder,
    /// Virtual machine
    VirtualMachine,
    /// Datacenter
    Datacenter,
    /// Standard network
    Network,
    /// Distributed virtual port group
    DistributedPortGroup,
    /// Distributed virtual switch
    DistributedSwitch,
}

/// MOID prefix table. Prefixes are mutually exclusive, so a single pass
/// over the table classifies any identifier.
const MOID_PREFIXES: &[(&str, ResourceKind)] = &[
    ("resgroup-", ResourceKind::ResourcePool),
    ("clustercomputeresource-", ResourceKind::Cluster),
    ("domain-c", ResourceKind::Cluster),
    ("domain-s", ResourceKind::HostComputeResource),
    ("datastore-", ResourceKind::Datastore),
    ("group-", ResourceKind::Folder),
    ("folder-", ResourceKind::Folder),
    ("vm-", ResourceKind::VirtualMachine),
    ("datacenter-", ResourceKind::Datacenter),
    ("dvportgroup-", ResourceKind::DistributedPortGroup),
    ("dvs-", ResourceKind::DistributedSwitch),
    ("network-", ResourceKind::Network),
];

impl ResourceKind {
    /// Classify a MOID by its prefix
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::UnrecognizedMoid`] when no prefix in the
    /// table matches.
    pub fn classify(moid: &str) -> InventoryResult<Self> {
        MOID_PREFIXES
            .iter()
            .find(|(prefix, _)| moid.starts_with(prefix))
            .map(|(_, kind)| *kind)
            .ok_or_else(|| InventoryError::UnrecognizedMoid(moid.to_string()))
    }

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResourcePool => "resource_pool",
            Self::Cluster => "cluster",
            Self::HostComputeResource => "host_compute_resource",
            Self::Datastore => "datastore",
            Self::Folder => "folder",
            Self::VirtualMachine => "virtual_machine",
            Self::Datacenter => "datacenter",
            Self::Network => "network",
            Self::DistributedPortGroup => "distributed_port_group",
            Self::DistributedSwitch => "distributed_switch",
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ResourcePool => "Resource Pool",
            Self::Cluster => "Cluster",
            Self::HostComputeResource => "Host Compute Resource",
            Self::Datastore => "Datastore",
            Self::Folder => "Folder",
            Self::VirtualMachine => "Virtual Machine",
            Self::Datacenter => "Datacenter",
            Self::Network => "Network",
            Self::DistributedPortGroup => "Distributed Port Group",
            Self::DistributedSwitch => "Distributed Switch",
        }
    }

    /// Get the vSphere managed object type name for this kind
    ///
    /// Session implementations need this to address the object through the
    /// property collector and finder APIs.
    pub fn vim_type(&self) -> &'static str {
        match self {
            Self::ResourcePool => "ResourcePool",
            Self::Cluster => "ClusterComputeResource",
            Self::HostComputeResource => "ComputeResource",
            Self::Datastore => "Datastore",
            Self::Folder => "Folder",
            Self::VirtualMachine => "VirtualMachine",
            Self::Datacenter => "Datacenter",
            Self::Network => "Network",
            Self::DistributedPortGroup => "DistributedVirtualPortgroup",
            Self::DistributedSwitch => "VmwareDistributedVirtualSwitch",
        }
    }

    /// Check if this kind belongs to the network finder family
    ///
    /// Standard networks and distributed port groups are both addressable
    /// as networks in path lookups.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network | Self::DistributedPortGroup)
    }

    /// Check if this is a compute resource container (cluster or host)
    pub fn is_compute_resource(&self) -> bool {
        matches!(self, Self::Cluster | Self::HostComputeResource)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
