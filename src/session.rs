//! Inventory session capability surface
//!
//! This crate consumes, not implements, an authenticated inventory
//! session. The trait below is the minimal capability set the resolution
//! engine needs; the surrounding application supplies an implementation
//! over its SOAP/REST bindings and passes it explicitly into every
//! component; there is no global session state.
//!
//! Every method is one blocking round trip to the inventory service. All
//! reads are idempotent; cancelling the caller's future between awaits
//! aborts an in-flight walk.

use async_trait::async_trait;

use crate::domain::{ManagedObjectRef, Moid, ResourceKind};
use crate::errors::InventoryResult;

/// Raw enumeration unit returned by a scoped retrieval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedObject {
    /// Managed object identifier
    pub moid: Moid,

    /// Display name as stored in the inventory
    pub name: String,
}

/// Outcome of an exact-path lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathLookup {
    /// No object exists at the given path
    None,
    /// Exactly one object matched
    Unique(ManagedObjectRef),
    /// The path is ambiguous; carries the match count
    Multiple(usize),
}

/// Capability trait over an authenticated inventory session
///
/// Implementations are expected to be read-only with respect to the
/// inventory and safe to share between concurrent callers.
#[async_trait]
pub trait InventorySession: Send + Sync {
    /// Fetch the leaf display name of a managed object
    ///
    /// # Errors
    ///
    /// Returns a session error when the object does not exist or the
    /// property fetch fails.
    async fn object_name(&self, obj: &ManagedObjectRef) -> InventoryResult<String>;

    /// Fetch the `parent` property of a managed object
    ///
    /// Returns `None` for the inventory root. This is the single generic
    /// property the resolution engine reads during a parent-chain walk.
    async fn parent_of(&self, obj: &ManagedObjectRef) -> InventoryResult<Option<Moid>>;

    /// Fetch the distributed switch backing a port group
    ///
    /// Reads `config.distributedVirtualSwitch`; returns `None` when the
    /// object carries no switch reference. Only meaningful for
    /// [`ResourceKind::DistributedPortGroup`] objects and only used by
    /// network name disambiguation.
    async fn owning_switch_of(
        &self,
        obj: &ManagedObjectRef,
    ) -> InventoryResult<Option<ManagedObjectRef>>;

    /// Enumerate objects of the given kinds under a root object
    ///
    /// Implementations create a container view rooted at `root`, retrieve
    /// the `name` property for the requested kinds, and destroy the view.
    ///
    /// # Errors
    ///
    /// View creation and retrieval failures are both fatal to the calling
    /// listing operation.
    async fn retrieve_objects(
        &self,
        root: &ManagedObjectRef,
        kinds: &[ResourceKind],
    ) -> InventoryResult<Vec<RetrievedObject>>;

    /// Look up an object by its exact inventory path
    ///
    /// `kind` selects the finder family; for network probes any kind with
    /// [`ResourceKind::is_network`] matches. Used only by the
    /// disambiguation probe.
    async fn find_by_path(&self, kind: ResourceKind, path: &str) -> InventoryResult<PathLookup>;
}
