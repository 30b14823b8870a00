//! Graph value types shared by both MST algorithms.
//!
//! Graphs are immutable inputs: the external loader constructs them once and
//! the algorithms only read them. Edges are undirected in meaning but keep a
//! `from`/`to` direction so reports can show the traversal direction that
//! accepted them.

use std::fmt;
use std::sync::Arc;

/// Identifier of a graph vertex.
///
/// Vertex labels are opaque tokens compared and hashed by value. Uniqueness
/// within a graph is assumed, not validated. The `Ord` implementation orders
/// by label and backs the documented tie-break in [`crate::prim`].
///
/// # Examples
/// ```
/// use arbor_core::VertexId;
///
/// let a = VertexId::from("A");
/// assert_eq!(a.as_str(), "A");
/// assert_eq!(a, VertexId::from("A"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(Arc<str>);

impl VertexId {
    /// Returns the underlying label.
    #[rustfmt::skip]
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for VertexId {
    fn from(label: &str) -> Self {
        Self(Arc::from(label))
    }
}

impl From<String> for VertexId {
    fn from(label: String) -> Self {
        Self(Arc::from(label))
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A weighted edge between two vertices.
///
/// The stored direction is display-only; the graph itself is undirected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    from: VertexId,
    to: VertexId,
    weight: i64,
}

impl Edge {
    /// Creates an edge from `from` to `to` with the given weight.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, VertexId};
    ///
    /// let edge = Edge::new(VertexId::from("A"), VertexId::from("B"), 4);
    /// assert_eq!(edge.weight(), 4);
    /// ```
    #[must_use]
    pub const fn new(from: VertexId, to: VertexId, weight: i64) -> Self {
        Self { from, to, weight }
    }

    /// Returns the traversal origin.
    #[rustfmt::skip]
    #[must_use]
    pub const fn from(&self) -> &VertexId { &self.from }

    /// Returns the traversal destination.
    #[rustfmt::skip]
    #[must_use]
    pub const fn to(&self) -> &VertexId { &self.to }

    /// Returns the edge weight.
    #[rustfmt::skip]
    #[must_use]
    pub const fn weight(&self) -> i64 { self.weight }
}

/// An immutable weighted undirected graph.
///
/// Every edge's endpoints should appear in `nodes`. The core does not enforce
/// this; a violation surfaces as [`crate::MstError::UnknownVertex`] when an
/// algorithm touches the offending edge.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, VertexId};
///
/// let graph = Graph::new(
///     7,
///     vec![VertexId::from("A"), VertexId::from("B")],
///     vec![Edge::new(VertexId::from("A"), VertexId::from("B"), 1)],
/// );
/// assert_eq!(graph.id(), 7);
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    id: u64,
    nodes: Vec<VertexId>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph from its identifier, node list, and edge list.
    #[must_use]
    pub const fn new(id: u64, nodes: Vec<VertexId>, edges: Vec<Edge>) -> Self {
        Self { id, nodes, edges }
    }

    /// Returns the graph identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn id(&self) -> u64 { self.id }

    /// Returns the ordered node list. The first entry is Prim's start vertex.
    #[rustfmt::skip]
    #[must_use]
    pub fn nodes(&self) -> &[VertexId] { &self.nodes }

    /// Returns the edge list in input order.
    #[rustfmt::skip]
    #[must_use]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
