// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Listing Projections
//!
//! Read-only projections of inventory state returned to callers. Both
//! types are recomputed on every listing call; nothing here is persisted
//! or cached.

use serde::{Deserialize, Serialize};

use crate::domain::{Moid, ResourceKind};

/// One resolved inventory object with its position in the hierarchy
///
/// `parent_moid` is `None` either for top-level objects or when the true
/// parent is a hidden per-datacenter system folder, which is never
/// reported as an ownership level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNode {
    /// Managed object identifier
    pub moid: Moid,

    /// Leaf display name
    pub name: String,

    /// Parent identifier, elided for children of hidden system folders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_moid: Option<Moid>,

    /// Classified kind
    pub resource_type: ResourceKind,

    /// Slash-joined path from the datacenter root, e.g. `/DC0/host/DC0_C0`
    pub path: String,
}

/// One network with a datacenter-unique name
///
/// `name` is the caller-facing identifier and is unique within one
/// datacenter listing; `display_name` stays human-readable and may embed
/// the MOID when disambiguation degraded to identifier-based naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEntry {
    /// Managed object identifier
    pub moid: Moid,

    /// Unique name within the datacenter
    pub name: String,

    /// Human-readable display name
    pub display_name: String,
}
