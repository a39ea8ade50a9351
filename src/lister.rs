// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Listing Facade
//!
//! Enumerates raw objects of a kind scoped to one datacenter and drives
//! path resolution (and, for networks, name disambiguation) over them.
//!
//! # Failure policy
//!
//! Partial results beat total failure: an object whose path cannot be
//! resolved is dropped from the listing and the rest is returned. Session
//! failures (the scoped retrieval itself) abort the listing and are
//! returned wrapped with the operation's context string.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{ManagedObjectRef, Moid, NetworkEntry, ResourceKind, ResourceNode};
use crate::errors::InventoryResult;
use crate::resolver::elide::reparent_elided;
use crate::resolver::network::NetworkNameResolver;
use crate::resolver::path::{PathResolver, ResolverConfig};
use crate::session::{InventorySession, RetrievedObject};

/// Lists inventory objects within a datacenter scope
pub struct InventoryLister<'a> {
    session: &'a dyn InventorySession,
    config: ResolverConfig,
}

impl<'a> InventoryLister<'a> {
    /// Create a lister with the default resolver configuration
    pub fn new(session: &'a dyn InventorySession) -> Self {
        Self::with_config(session, ResolverConfig::default())
    }

    /// Create a lister with an explicit resolver configuration
    pub fn with_config(session: &'a dyn InventorySession, config: ResolverConfig) -> Self {
        Self { session, config }
    }

    /// List objects of one kind under a datacenter
    ///
    /// Resource pool listings are routed through
    /// [`Self::list_resource_pools`] so the root-pool elision always
    /// applies. Networks have their own entry point,
    /// [`Self::list_networks`], because their result type differs.
    ///
    /// # Errors
    ///
    /// Fails only when the scoped retrieval itself fails; per-object
    /// resolution failures drop the object.
    pub async fn list(
        &self,
        kind: ResourceKind,
        datacenter: &ManagedObjectRef,
    ) -> InventoryResult<Vec<ResourceNode>> {
        if kind == ResourceKind::ResourcePool {
            return self.list_resource_pools(datacenter).await;
        }

        let objects = self.retrieve(datacenter, &[kind]).await?;
        Ok(self.resolve_nodes(objects).await)
    }

    /// List networks under a datacenter with datacenter-unique names
    ///
    /// Enumerates standard networks and distributed port groups, then
    /// disambiguates colliding names.
    pub async fn list_networks(
        &self,
        datacenter: &ManagedObjectRef,
    ) -> InventoryResult<Vec<NetworkEntry>> {
        let objects = self
            .retrieve(
                datacenter,
                &[ResourceKind::Network, ResourceKind::DistributedPortGroup],
            )
            .await?;

        let resolver = NetworkNameResolver::with_config(self.session, self.config);
        Ok(resolver.resolve_names(objects).await)
    }

    /// List resource pools under a datacenter, eliding root pools
    ///
    /// Every cluster and standalone host owns an implicit root resource
    /// pool. That pool is reported with its owner's path and never as a
    /// parent level: sub-pools are re-attached directly under the owning
    /// cluster or host.
    pub async fn list_resource_pools(
        &self,
        datacenter: &ManagedObjectRef,
    ) -> InventoryResult<Vec<ResourceNode>> {
        let objects = self
            .retrieve(datacenter, &[ResourceKind::ResourcePool])
            .await?;
        let mut pools = self.resolve_nodes(objects).await;

        let mut replacements: HashMap<Moid, Option<Moid>> = HashMap::new();
        for pool in &mut pools {
            if !has_compute_resource_parent(pool) {
                continue;
            }
            replacements.insert(pool.moid.clone(), pool.parent_moid.clone());
            // Report the root pool at its owner's path; the trailing
            // segment is the pool itself.
            if let Some((owner_path, _)) = pool.path.rsplit_once('/') {
                pool.path = owner_path.to_string();
            }
        }
        reparent_elided(&mut pools, &replacements);

        Ok(pools)
    }

    /// Scoped retrieval with listing-level error context
    async fn retrieve(
        &self,
        datacenter: &ManagedObjectRef,
        kinds: &[ResourceKind],
    ) -> InventoryResult<Vec<RetrievedObject>> {
        self.session
            .retrieve_objects(datacenter, kinds)
            .await
            .map_err(|err| {
                let kind_list = kinds
                    .iter()
                    .map(|kind| kind.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                err.in_operation(format!(
                    "retrieve {} objects under {}",
                    kind_list,
                    datacenter.moid()
                ))
            })
    }

    /// Resolve each retrieved object to its leaf node, dropping failures
    async fn resolve_nodes(&self, objects: Vec<RetrievedObject>) -> Vec<ResourceNode> {
        let resolver = PathResolver::with_config(self.session, self.config);

        let mut nodes = Vec::with_capacity(objects.len());
        for object in objects {
            match resolver.resolve(&object.moid).await {
                Ok(resolved) => {
                    // Ancestors are leaf first; the head is the object
                    // itself.
                    if let Some(node) = resolved.ancestors.into_iter().next() {
                        nodes.push(node);
                    }
                }
                Err(err) => {
                    debug!("Skipping {} with unresolvable path: {}", object.moid, err);
                }
            }
        }
        nodes
    }
}

/// Check whether a pool hangs directly off a cluster or standalone host,
/// which marks it as that compute resource's root pool.
fn has_compute_resource_parent(pool: &ResourceNode) -> bool {
    pool.parent_moid.as_ref().is_some_and(|parent| {
        ResourceKind::classify(parent.as_str())
            .map(|kind| kind.is_compute_resource())
            .unwrap_or(false)
    })
}
