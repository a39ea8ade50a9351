//! Error types for inventory resolution operations

use thiserror::Error;

/// Errors that can occur while resolving or listing inventory objects
#[derive(Debug, Error)]
pub enum InventoryError {
    /// MOID prefix matches no known managed object kind
    #[error("unrecognized managed object id `{0}`")]
    UnrecognizedMoid(String),

    /// The inventory path for an object could not be reconstructed
    #[error("cannot resolve inventory path for `{moid}`: {reason}")]
    PathResolution { moid: String, reason: String },

    /// Parent chain ran past the configured depth bound
    #[error("parent chain for `{moid}` exceeded {max_depth} levels")]
    DepthExceeded { moid: String, max_depth: usize },

    /// The backing inventory session failed
    #[error("inventory session error: {0}")]
    Session(anyhow::Error),

    /// A listing-level operation against the inventory failed
    #[error("{operation}: {source}")]
    Listing {
        operation: String,
        source: Box<InventoryError>,
    },
}

impl InventoryError {
    /// Wrap a backing-session failure in the session variant.
    ///
    /// Session implementations use this to surface their transport errors
    /// (SOAP faults, connection resets, ...) without this crate knowing
    /// their concrete types.
    pub fn session(err: impl Into<anyhow::Error>) -> Self {
        Self::Session(err.into())
    }

    /// Attach the context string of the listing operation that failed.
    pub fn in_operation(self, operation: impl Into<String>) -> Self {
        Self::Listing {
            operation: operation.into(),
            source: Box::new(self),
        }
    }
}

/// Result type for inventory resolution operations
pub type InventoryResult<T> = Result<T, InventoryError>;
