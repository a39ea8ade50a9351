// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Domain Models
//!
//! Core domain concepts for inventory resolution: opaque managed object
//! identifiers, the closed kind taxonomy derived from identifier prefixes,
//! and the read-only projections handed back to callers.
//!
//! # Value Objects
//!
//! - [`Moid`] - opaque, type-prefixed managed object identifier
//! - [`ManagedObjectRef`] - classified (kind, identifier) pair
//! - [`ResourceKind`] - closed managed-object kind taxonomy
//!
//! # Projections
//!
//! - [`ResourceNode`] - resolved object with parent link and full path
//! - [`NetworkEntry`] - network with a datacenter-unique name

pub mod kind;
pub mod moid;
pub mod objects;

// Re-export value objects
pub use kind::ResourceKind;
pub use moid::{ManagedObjectRef, Moid};
pub use objects::{NetworkEntry, ResourceNode};
