// Copyright (c) 2025 - Cowboy AI, Inc.
//! Managed Object Identifier Value Objects
//!
//! A MOID is an opaque, type-prefixed identifier issued by vCenter for any
//! managed entity. This engine never invents identifiers; it only carries
//! the ones the inventory hands out, and derives their kind by
//! classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::ResourceKind;
use crate::errors::InventoryResult;

/// Opaque managed object identifier (e.g. `vm-44`, `domain-c7`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Moid(String);

impl Moid {
    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Moid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Moid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Moid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Typed reference to a managed object
///
/// Pairs a classified [`ResourceKind`] with the opaque identifier. The pair
/// is what a session needs to address property queries, so classification
/// is the only way to construct one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManagedObjectRef {
    kind: ResourceKind,
    moid: Moid,
}

impl ManagedObjectRef {
    /// Classify a MOID into a typed reference
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::InventoryError::UnrecognizedMoid`] when the
    /// identifier prefix matches no known kind.
    pub fn classify(moid: &Moid) -> InventoryResult<Self> {
        let kind = ResourceKind::classify(moid.as_str())?;
        Ok(Self {
            kind,
            moid: moid.clone(),
        })
    }

    /// Get the classified kind
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Get the identifier
    pub fn moid(&self) -> &Moid {
        &self.moid
    }
}

impl fmt::Display for ManagedObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.vim_type(), self.moid)
    }
}
