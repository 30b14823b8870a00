//! Kruskal's minimum spanning tree algorithm.
//!
//! Edges are stable-sorted by ascending weight, so equal-weight edges are
//! examined in their original input order, then greedily accepted whenever a
//! union-find shows their endpoints in different components. Disconnected
//! inputs yield a minimum spanning forest rather than an error.

mod disjoint_set;

use std::time::Instant;

use crate::{error::Result, graph::Graph, result::AlgorithmRun};

pub use self::disjoint_set::DisjointSet;

/// Computes a minimum spanning forest of `graph`.
///
/// When the graph is connected the forest is a single minimum spanning tree;
/// otherwise one tree per connected component is produced. An empty vertex
/// set degenerates to an empty zero-cost run. The reported operation count is
/// one per edge examined plus every operation charged by the union-find.
///
/// # Errors
/// Returns [`crate::MstError::UnknownVertex`] when an edge references a
/// vertex absent from the graph's node list.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, VertexId, kruskal};
///
/// let graph = Graph::new(
///     1,
///     vec![VertexId::from("A"), VertexId::from("B"), VertexId::from("C")],
///     vec![
///         Edge::new(VertexId::from("A"), VertexId::from("B"), 1),
///         Edge::new(VertexId::from("B"), VertexId::from("C"), 2),
///         Edge::new(VertexId::from("A"), VertexId::from("C"), 3),
///     ],
/// );
/// let run = kruskal::minimum_spanning_forest(&graph)?;
/// assert_eq!(run.total_cost(), 3);
/// assert_eq!(run.edges().len(), 2);
/// # Ok::<(), arbor_core::MstError>(())
/// ```
pub fn minimum_spanning_forest(graph: &Graph) -> Result<AlgorithmRun> {
    let started = Instant::now();

    let mut edges = graph.edges().to_vec();
    // Stable sort: equal-weight edges keep their input order, which decides
    // which of them is examined first.
    edges.sort_by_key(|edge| edge.weight());

    let mut set = DisjointSet::new(graph.nodes().iter().cloned());
    let mut accepted = Vec::new();
    let mut total_cost = 0_i64;
    let mut examined = 0_u64;

    for edge in edges {
        examined += 1;
        if set.find(edge.from())? != set.find(edge.to())? {
            set.union(edge.from(), edge.to())?;
            total_cost += edge.weight();
            accepted.push(edge);
        }
    }

    let operations = examined + set.operations();
    Ok(AlgorithmRun::new(
        accepted,
        total_cost,
        operations,
        started.elapsed(),
    ))
}
