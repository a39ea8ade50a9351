// Copyright (c) 2025 - Cowboy AI, Inc.
//! Parent-Chain Path Resolution
//!
//! Reconstructs the hierarchical inventory path of a managed object by
//! walking its parent references up to the inventory root, one blocking
//! round trip per level. Resolving N objects of average depth D therefore
//! costs O(N·D) sequential round trips; nothing is batched or cached
//! across calls.
//!
//! # Hidden folder elision
//!
//! vCenter always interposes an invisible per-datacenter folder between a
//! datacenter and its clusters/hosts/VMs/datastores/networks. The walk
//! detects that folder (a `Folder` whose immediate parent is a
//! `Datacenter`) and detaches its children, so sibling objects appear to
//! hang directly off their real owner.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{ManagedObjectRef, Moid, ResourceKind, ResourceNode};
use crate::errors::{InventoryError, InventoryResult};
use crate::resolver::elide::reparent_elided;
use crate::session::InventorySession;

/// Configuration for the parent-chain walk
#[derive(Debug, Clone, Copy)]
pub struct ResolverConfig {
    /// Upper bound on walked levels; a malformed or cyclic parent graph
    /// fails with [`InventoryError::DepthExceeded`] instead of looping.
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        // vCenter folder nesting stays in the single digits; 64 is far
        // beyond anything a well-formed inventory produces.
        Self { max_depth: 64 }
    }
}

/// Result of resolving one managed object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Slash-joined path from the datacenter root, exclusive of the
    /// implicit top-level root segment, e.g. `/DC0/host/DC0_C0`
    pub path: String,

    /// Every non-datacenter object on the walked chain, leaf first, each
    /// carrying its own prefix path
    pub ancestors: Vec<ResourceNode>,
}

/// One visited level of the parent chain, recorded leaf first
struct Visited {
    moid: Moid,
    name: String,
    parent: Option<Moid>,
    kind: ResourceKind,
}

/// Walks parent-reference chains against an inventory session
pub struct PathResolver<'a> {
    session: &'a dyn InventorySession,
    config: ResolverConfig,
}

impl<'a> PathResolver<'a> {
    /// Create a resolver with the default configuration
    pub fn new(session: &'a dyn InventorySession) -> Self {
        Self::with_config(session, ResolverConfig::default())
    }

    /// Create a resolver with an explicit configuration
    pub fn with_config(session: &'a dyn InventorySession, config: ResolverConfig) -> Self {
        Self { session, config }
    }

    /// Resolve the full inventory path and ancestor chain of a MOID
    ///
    /// Two calls with no intervening inventory mutation return identical
    /// results; the output is a pure function of current inventory state.
    ///
    /// # Errors
    ///
    /// - [`InventoryError::PathResolution`] for an empty identifier or an
    ///   object that is not reachable under any datacenter
    /// - [`InventoryError::UnrecognizedMoid`] when the object or any
    ///   ancestor fails classification
    /// - [`InventoryError::DepthExceeded`] when the chain runs past the
    ///   configured bound
    /// - session errors from the name/parent property fetches, propagated
    pub async fn resolve(&self, moid: &Moid) -> InventoryResult<ResolvedPath> {
        if moid.as_str().is_empty() {
            return Err(InventoryError::PathResolution {
                moid: String::new(),
                reason: "empty managed object id".to_string(),
            });
        }

        let chain = self.walk(moid).await?;

        // Names root-first; the walk records leaf-first.
        let names: Vec<&str> = chain.iter().rev().map(|level| level.name.as_str()).collect();

        // Drop the implicit top-level root segment. Anything shorter than
        // datacenter + one owned segment is not reachable under a
        // datacenter.
        if names.len() < 3 {
            return Err(InventoryError::PathResolution {
                moid: moid.to_string(),
                reason: "object is not reachable under a datacenter".to_string(),
            });
        }
        let path = format!("/{}", names[1..].join("/"));

        let total = chain.len();
        let mut ancestors: Vec<ResourceNode> = chain
            .iter()
            .enumerate()
            .filter(|(_, level)| level.kind != ResourceKind::Datacenter)
            .map(|(offset, level)| {
                let index = total - 1 - offset;
                let prefix = if index >= 1 {
                    format!("/{}", names[1..=index].join("/"))
                } else {
                    String::new()
                };
                ResourceNode {
                    moid: level.moid.clone(),
                    name: level.name.clone(),
                    parent_moid: level.parent.clone(),
                    resource_type: level.kind,
                    path: prefix,
                }
            })
            .collect();

        if let Some(folder) = detect_default_folder(&chain) {
            debug!("Eliding hidden system folder {} from parent links", folder);
            let replacements = HashMap::from([(folder, None)]);
            reparent_elided(&mut ancestors, &replacements);
        }

        Ok(ResolvedPath { path, ancestors })
    }

    /// Walk the parent chain from `moid` to the inventory root
    async fn walk(&self, moid: &Moid) -> InventoryResult<Vec<Visited>> {
        let mut chain: Vec<Visited> = Vec::new();
        let mut cursor = moid.clone();

        loop {
            if chain.len() >= self.config.max_depth {
                return Err(InventoryError::DepthExceeded {
                    moid: moid.to_string(),
                    max_depth: self.config.max_depth,
                });
            }

            let obj = ManagedObjectRef::classify(&cursor)?;
            let name = self.session.object_name(&obj).await?;
            let parent = self.session.parent_of(&obj).await?;

            chain.push(Visited {
                moid: cursor,
                name,
                parent: parent.clone(),
                kind: obj.kind(),
            });

            match parent {
                Some(next) => cursor = next,
                None => break,
            }
        }

        Ok(chain)
    }
}

/// Find the hidden per-datacenter system folder on a walked chain: a
/// folder whose immediate parent is a datacenter.
fn detect_default_folder(chain: &[Visited]) -> Option<Moid> {
    chain
        .iter()
        .find(|level| {
            level.kind == ResourceKind::Folder
                && level.parent.as_ref().is_some_and(|parent| {
                    matches!(
                        ResourceKind::classify(parent.as_str()),
                        Ok(ResourceKind::Datacenter)
                    )
                })
        })
        .map(|level| level.moid.clone())
}
