// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Path Resolution
//!
//! Walks parent-reference chains to reconstruct hierarchical inventory
//! paths, with elision of the structural levels vCenter interposes
//! (hidden per-datacenter system folders, root resource pools) and
//! disambiguation of colliding network names.

pub(crate) mod elide;
pub mod network;
pub mod path;

pub use network::NetworkNameResolver;
pub use path::{PathResolver, ResolvedPath, ResolverConfig};
