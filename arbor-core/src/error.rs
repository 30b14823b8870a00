//! Error types for the arbor core library.
//!
//! Defines the error enum exposed by the public API, its stable machine
//! readable codes, and a convenient result alias.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors returned while computing a minimum spanning tree/forest.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MstError {
    /// Prim's start-vertex selection has no vertex to pick from.
    #[error("cannot compute a spanning tree for a graph with no vertices")]
    EmptyGraph,
    /// An edge referenced a vertex absent from the graph's node list.
    #[error("edge references vertex `{vertex}`, which is not in the node list")]
    UnknownVertex {
        /// The unregistered vertex referenced by an edge.
        vertex: VertexId,
    },
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{MstError, MstErrorCode};
    ///
    /// assert_eq!(MstError::EmptyGraph.code(), MstErrorCode::EmptyGraph);
    /// ```
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::EmptyGraph => MstErrorCode::EmptyGraph,
            Self::UnknownVertex { .. } => MstErrorCode::UnknownVertex,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstErrorCode {
    /// The graph had no vertices to start from.
    EmptyGraph,
    /// An edge referenced a vertex absent from the graph's node list.
    UnknownVertex,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::MstErrorCode;
    ///
    /// assert_eq!(MstErrorCode::UnknownVertex.as_str(), "UNKNOWN_VERTEX");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "EMPTY_GRAPH",
            Self::UnknownVertex => "UNKNOWN_VERTEX",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
