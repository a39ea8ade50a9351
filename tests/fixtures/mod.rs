// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for vsphere-inventory
//!
//! Provides a deterministic in-memory inventory session. All MOIDs are
//! fixed constants so tests are reproducible, and the fixture is the only
//! place that wires up inventory trees - tests use the builders here,
//! never ad-hoc session stubs.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use anyhow::anyhow;
use async_trait::async_trait;

use vsphere_inventory::{
    InventoryError, InventoryResult, InventorySession, ManagedObjectRef, Moid, PathLookup,
    ResourceKind, RetrievedObject,
};

// Fixed inventory MOIDs (shapes follow real vCenter identifiers)
pub const ROOT_FOLDER: &str = "group-d1";
pub const DATACENTER: &str = "datacenter-2";
pub const HOST_FOLDER: &str = "group-h4";
pub const VM_FOLDER: &str = "group-v3";
pub const DATASTORE_FOLDER: &str = "group-s6";
pub const NETWORK_FOLDER: &str = "group-n5";
pub const CLUSTER: &str = "domain-c7";
pub const ROOT_POOL: &str = "resgroup-8";
pub const CHILD_POOL: &str = "resgroup-20";
pub const VM: &str = "vm-44";
pub const DATASTORE: &str = "datastore-15";
pub const STD_NETWORK: &str = "network-40";
pub const DVS_A: &str = "dvs-30";
pub const DVS_B: &str = "dvs-32";
pub const DVPG_A: &str = "dvportgroup-31";
pub const DVPG_B: &str = "dvportgroup-33";

/// Parse a fixed MOID constant into a typed reference
pub fn object_ref(moid: &str) -> ManagedObjectRef {
    ManagedObjectRef::classify(&Moid::from(moid)).expect("Invalid MOID in test fixture")
}

/// The datacenter scope used by most tests
pub fn dc0() -> ManagedObjectRef {
    object_ref(DATACENTER)
}

/// One stored inventory object
#[derive(Debug, Clone)]
struct FakeObject {
    name: String,
    parent: Option<String>,
    switch: Option<String>,
}

/// Deterministic in-memory implementation of [`InventorySession`]
#[derive(Debug, Clone, Default)]
pub struct FakeInventorySession {
    objects: HashMap<String, FakeObject>,
    unnamed: HashSet<String>,
    retrieval_down: bool,
}

impl FakeInventorySession {
    pub fn builder() -> FakeInventoryBuilder {
        FakeInventoryBuilder {
            inner: Self::default(),
        }
    }

    fn object(&self, moid: &str) -> InventoryResult<&FakeObject> {
        self.objects
            .get(moid)
            .ok_or_else(|| InventoryError::session(anyhow!("no such managed object: {}", moid)))
    }

    /// Parent-chain path of an object, root segment dropped
    fn full_path(&self, moid: &str) -> Option<String> {
        let mut names = Vec::new();
        let mut cursor = Some(moid.to_string());
        while let Some(current) = cursor {
            let object = self.objects.get(&current)?;
            names.insert(0, object.name.clone());
            cursor = object.parent.clone();
        }
        if names.len() < 2 {
            return None;
        }
        Some(format!("/{}", names[1..].join("/")))
    }

    /// All inventory paths addressing an object; port groups are also
    /// addressable through their owning switch, as the real finder allows.
    fn lookup_paths(&self, moid: &str, object: &FakeObject) -> Vec<String> {
        let mut paths = Vec::new();
        if let Some(base) = self.full_path(moid) {
            if let Some(switch_name) = object
                .switch
                .as_ref()
                .and_then(|switch| self.objects.get(switch))
                .map(|switch| switch.name.clone())
            {
                if let Some((prefix, leaf)) = base.rsplit_once('/') {
                    paths.push(format!("{}/{}/{}", prefix, switch_name, leaf));
                }
            }
            paths.push(base);
        }
        paths
    }

    fn is_under(&self, moid: &str, root: &str) -> bool {
        let mut cursor = self
            .objects
            .get(moid)
            .and_then(|object| object.parent.clone());
        let mut hops = 0;
        while let Some(parent) = cursor {
            if parent == root {
                return true;
            }
            hops += 1;
            if hops > 64 {
                return false;
            }
            cursor = self
                .objects
                .get(&parent)
                .and_then(|object| object.parent.clone());
        }
        false
    }
}

#[async_trait]
impl InventorySession for FakeInventorySession {
    async fn object_name(&self, obj: &ManagedObjectRef) -> InventoryResult<String> {
        let moid = obj.moid().as_str();
        if self.unnamed.contains(moid) {
            return Err(InventoryError::session(anyhow!(
                "name property unavailable for {}",
                moid
            )));
        }
        Ok(self.object(moid)?.name.clone())
    }

    async fn parent_of(&self, obj: &ManagedObjectRef) -> InventoryResult<Option<Moid>> {
        Ok(self
            .object(obj.moid().as_str())?
            .parent
            .clone()
            .map(Moid::from))
    }

    async fn owning_switch_of(
        &self,
        obj: &ManagedObjectRef,
    ) -> InventoryResult<Option<ManagedObjectRef>> {
        match self.object(obj.moid().as_str())?.switch.clone() {
            Some(switch) => Ok(Some(ManagedObjectRef::classify(&Moid::from(switch))?)),
            None => Ok(None),
        }
    }

    async fn retrieve_objects(
        &self,
        root: &ManagedObjectRef,
        kinds: &[ResourceKind],
    ) -> InventoryResult<Vec<RetrievedObject>> {
        if self.retrieval_down {
            return Err(InventoryError::session(anyhow!(
                "container view unavailable"
            )));
        }

        let mut retrieved: Vec<RetrievedObject> = self
            .objects
            .iter()
            .filter(|(moid, _)| {
                ResourceKind::classify(moid.as_str())
                    .map(|kind| kinds.contains(&kind))
                    .unwrap_or(false)
            })
            .filter(|(moid, _)| self.is_under(moid.as_str(), root.moid().as_str()))
            .map(|(moid, object)| RetrievedObject {
                moid: Moid::from(moid.as_str()),
                name: object.name.clone(),
            })
            .collect();
        retrieved.sort_by(|a, b| a.moid.as_str().cmp(b.moid.as_str()));
        Ok(retrieved)
    }

    async fn find_by_path(&self, kind: ResourceKind, path: &str) -> InventoryResult<PathLookup> {
        let mut matches = Vec::new();
        for (moid, object) in &self.objects {
            let object_kind = match ResourceKind::classify(moid) {
                Ok(object_kind) => object_kind,
                Err(_) => continue,
            };
            let family_match = if kind.is_network() {
                object_kind.is_network()
            } else {
                object_kind == kind
            };
            if !family_match {
                continue;
            }
            if self.lookup_paths(moid, object).iter().any(|p| p == path) {
                matches.push(moid.clone());
            }
        }

        match matches.len() {
            0 => Ok(PathLookup::None),
            1 => Ok(PathLookup::Unique(ManagedObjectRef::classify(&Moid::from(
                matches.remove(0),
            ))?)),
            count => Ok(PathLookup::Multiple(count)),
        }
    }
}

/// Builder for fake inventory trees
pub struct FakeInventoryBuilder {
    inner: FakeInventorySession,
}

impl FakeInventoryBuilder {
    /// Add an object with an optional parent
    pub fn object(mut self, moid: &str, name: &str, parent: Option<&str>) -> Self {
        self.inner.objects.insert(
            moid.to_string(),
            FakeObject {
                name: name.to_string(),
                parent: parent.map(str::to_string),
                switch: None,
            },
        );
        self
    }

    /// Add a distributed port group backed by a switch
    pub fn portgroup(mut self, moid: &str, name: &str, parent: &str, switch: &str) -> Self {
        self.inner.objects.insert(
            moid.to_string(),
            FakeObject {
                name: name.to_string(),
                parent: Some(parent.to_string()),
                switch: Some(switch.to_string()),
            },
        );
        self
    }

    /// Make name fetches fail for one object
    pub fn broken_name(mut self, moid: &str) -> Self {
        self.inner.unnamed.insert(moid.to_string());
        self
    }

    /// Make every scoped retrieval fail
    pub fn retrieval_down(mut self) -> Self {
        self.inner.retrieval_down = true;
        self
    }

    pub fn build(self) -> FakeInventorySession {
        self.inner
    }
}

/// The canonical DC0 inventory used across the test suite:
///
/// ```text
/// Datacenters (hidden root)
/// └── DC0
///     ├── host/        DC0_C0 ── Resources ── ChildPool
///     ├── vm/          DC0_C0_RP0_VM0
///     ├── datastore/   LocalDS_0
///     └── network/     VM Network, DVS-A, DVS-B,
///                      DC0_DVPG0 (on DVS-A), DC0_DVPG0 (on DVS-B)
/// ```
pub fn dc0_inventory() -> FakeInventoryBuilder {
    FakeInventorySession::builder()
        .object(ROOT_FOLDER, "Datacenters", None)
        .object(DATACENTER, "DC0", Some(ROOT_FOLDER))
        .object(HOST_FOLDER, "host", Some(DATACENTER))
        .object(CLUSTER, "DC0_C0", Some(HOST_FOLDER))
        .object(ROOT_POOL, "Resources", Some(CLUSTER))
        .object(CHILD_POOL, "ChildPool", Some(ROOT_POOL))
        .object(VM_FOLDER, "vm", Some(DATACENTER))
        .object(VM, "DC0_C0_RP0_VM0", Some(VM_FOLDER))
        .object(DATASTORE_FOLDER, "datastore", Some(DATACENTER))
        .object(DATASTORE, "LocalDS_0", Some(DATASTORE_FOLDER))
        .object(NETWORK_FOLDER, "network", Some(DATACENTER))
        .object(STD_NETWORK, "VM Network", Some(NETWORK_FOLDER))
        .object(DVS_A, "DVS-A", Some(NETWORK_FOLDER))
        .object(DVS_B, "DVS-B", Some(NETWORK_FOLDER))
        .portgroup(DVPG_A, "DC0_DVPG0", NETWORK_FOLDER, DVS_A)
        .portgroup(DVPG_B, "DC0_DVPG0", NETWORK_FOLDER, DVS_B)
}
