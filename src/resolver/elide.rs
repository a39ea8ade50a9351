// Copyright (c) 2025 - Cowboy AI, Inc.
//! Structural Level Elision
//!
//! vCenter interposes implicit levels between an object and its logical
//! owner: a hidden per-datacenter folder for each object kind, and a root
//! resource pool under every cluster and standalone host. Reporting those
//! levels would break every consumer that expects, say, resource pools to
//! be direct children of clusters. Both rewrites are the same operation,
//! re-attaching children of an elided object to a replacement parent, so it
//! lives here once.

use std::collections::HashMap;

use crate::domain::{Moid, ResourceNode};

/// Re-parent every node whose parent is one of the elided objects.
///
/// `replacements` maps an elided object's identifier to the parent its
/// children should report instead; `None` detaches them (children of a
/// hidden system folder hang directly off the datacenter root).
pub(crate) fn reparent_elided(
    nodes: &mut [ResourceNode],
    replacements: &HashMap<Moid, Option<Moid>>,
) {
    if replacements.is_empty() {
        return;
    }

    for node in nodes.iter_mut() {
        let replacement = node
            .parent_moid
            .as_ref()
            .and_then(|parent| replacements.get(parent));
        if let Some(replacement) = replacement {
            node.parent_moid = replacement.clone();
        }
    }
}
