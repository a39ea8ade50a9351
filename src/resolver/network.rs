// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Name Disambiguation
//!
//! Sibling networks legitimately share display names, most commonly
//! distributed port groups created from the same template on different
//! switches. Callers need one identifier per network that is unique
//! within the datacenter, so duplicate path names are rewritten: port
//! groups get a switch-qualified path when that provably resolves to one
//! object, and everything else degrades to the MOID, which is unique by
//! construction. The whole pass is total; it never fails a listing.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{ManagedObjectRef, Moid, NetworkEntry, ResourceKind};
use crate::resolver::path::{PathResolver, ResolverConfig};
use crate::session::{InventorySession, PathLookup, RetrievedObject};

/// Resolves datacenter-unique names for a sibling set of networks
pub struct NetworkNameResolver<'a> {
    session: &'a dyn InventorySession,
    config: ResolverConfig,
}

impl<'a> NetworkNameResolver<'a> {
    /// Create a resolver with the default configuration
    pub fn new(session: &'a dyn InventorySession) -> Self {
        Self::with_config(session, ResolverConfig::default())
    }

    /// Create a resolver with an explicit configuration
    pub fn with_config(session: &'a dyn InventorySession, config: ResolverConfig) -> Self {
        Self { session, config }
    }

    /// Turn raw network objects into entries with unique names
    ///
    /// Names start as resolved inventory paths (falling back to the raw
    /// display name when resolution fails). Entries whose name collides
    /// with a sibling are disambiguated; all returned names are pairwise
    /// distinct within the input set.
    pub async fn resolve_names(&self, raw: Vec<RetrievedObject>) -> Vec<NetworkEntry> {
        let resolver = PathResolver::with_config(self.session, self.config);

        let mut entries = Vec::with_capacity(raw.len());
        for object in raw {
            let name = match resolver.resolve(&object.moid).await {
                Ok(resolved) => resolved.path,
                Err(err) => {
                    debug!(
                        "Falling back to display name for network {}: {}",
                        object.moid, err
                    );
                    object.name.clone()
                }
            };
            entries.push(NetworkEntry {
                moid: object.moid,
                name: name.clone(),
                display_name: name,
            });
        }

        let duplicated = duplicated_names(&entries);
        for entry in &mut entries {
            if !duplicated.contains(entry.name.as_str()) {
                continue;
            }

            if let Some(candidate) = self.switch_qualified_name(&entry.moid, &entry.name).await {
                let probe = self
                    .session
                    .find_by_path(ResourceKind::Network, &candidate)
                    .await;
                if matches!(probe, Ok(PathLookup::Unique(_))) {
                    entry.name = candidate.clone();
                    entry.display_name = candidate;
                    continue;
                }
            }

            // MOIDs are globally unique, so this always terminates the
            // disambiguation.
            entry.display_name = format!("{}({})", entry.name, entry.moid);
            entry.name = entry.moid.to_string();
        }

        entries
    }

    /// Build the switch-qualified path candidate for a distributed port
    /// group: `.../network/<switch>/<leaf>`. Returns `None` for other
    /// kinds, when the switch cannot be fetched, or when the current name
    /// has no path structure to splice into.
    async fn switch_qualified_name(&self, moid: &Moid, path: &str) -> Option<String> {
        let object = ManagedObjectRef::classify(moid).ok()?;
        if object.kind() != ResourceKind::DistributedPortGroup {
            return None;
        }

        let switch = self.session.owning_switch_of(&object).await.ok()??;
        let switch_name = self.session.object_name(&switch).await.ok()?;
        splice_before_leaf(path, &switch_name)
    }
}

/// Names occurring more than once in the entry set
fn duplicated_names(entries: &[NetworkEntry]) -> HashSet<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.name.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Insert a segment immediately before the leaf of a slash path
fn splice_before_leaf(path: &str, segment: &str) -> Option<String> {
    let (prefix, leaf) = path.rsplit_once('/')?;
    if prefix.is_empty() || leaf.is_empty() {
        return None;
    }
    Some(format!("{}/{}/{}", prefix, segment, leaf))
}
