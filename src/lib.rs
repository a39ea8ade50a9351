//! vCenter inventory path resolution and name disambiguation
//!
//! Given an opaque managed object identifier (MOID) and an authenticated
//! inventory session, this crate reconstructs the object's hierarchical
//! inventory path (e.g. `/DC0/host/DC0_C0/Resources/ChildPool`) while
//! eliding the hidden structural levels vCenter interposes. For networks
//! that share display names it also produces identifiers that stay unique
//! within their datacenter.
//!
//! # Architecture
//!
//! ```text
//! InventoryLister ── per object ──▶ PathResolver ──▶ ResourceKind::classify
//!        │                              │                (per ancestor level)
//!        └── networks only ──▶ NetworkNameResolver
//!                                       │
//!                              InventorySession (supplied by the caller)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use vsphere_inventory::{InventoryLister, ManagedObjectRef, Moid, ResourceKind};
//!
//! let session = connect()?; // application-owned InventorySession impl
//! let datacenter = ManagedObjectRef::classify(&Moid::from("datacenter-2"))?;
//!
//! let lister = InventoryLister::new(&session);
//! let pools = lister.list(ResourceKind::ResourcePool, &datacenter).await?;
//! let networks = lister.list_networks(&datacenter).await?;
//! ```

pub mod domain;
pub mod errors;
pub mod lister;
pub mod resolver;
pub mod session;

// Re-export commonly used types
pub use domain::{ManagedObjectRef, Moid, NetworkEntry, ResourceKind, ResourceNode};
pub use errors::{InventoryError, InventoryResult};
pub use lister::InventoryLister;
pub use resolver::{NetworkNameResolver, PathResolver, ResolvedPath, ResolverConfig};
pub use session::{InventorySession, PathLookup, RetrievedObject};
