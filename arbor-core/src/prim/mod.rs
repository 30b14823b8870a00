//! Prim's minimum spanning tree algorithm.
//!
//! Grows a tree from the first vertex of the graph's node list using a
//! min-heap of frontier edges. The adjacency map is a derived, disposable
//! structure rebuilt on every call: each input edge contributes a forward
//! traversal edge and a synthesized reverse edge, so the `from`/`to` labels
//! on accepted edges reflect traversal direction rather than input order.


use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use crate::{
    error::{MstError, Result},
    graph::{Edge, Graph, VertexId},
    result::AlgorithmRun,
};

/// A frontier edge ordered by `(weight, from, to)`.
///
/// The derived ordering is the documented tie-break: among equal-weight
/// candidates the heap yields the edge with the lexicographically smallest
/// vertex labels, independent of insertion order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEdge {
    weight: i64,
    from: VertexId,
    to: VertexId,
}

impl FrontierEdge {
    fn forward(edge: &Edge) -> Self {
        Self {
            weight: edge.weight(),
            from: edge.from().clone(),
            to: edge.to().clone(),
        }
    }

    fn reverse(edge: &Edge) -> Self {
        Self {
            weight: edge.weight(),
            from: edge.to().clone(),
            to: edge.from().clone(),
        }
    }

    fn into_edge(self) -> Edge {
        Edge::new(self.from, self.to, self.weight)
    }
}

type Adjacency = HashMap<VertexId, Vec<FrontierEdge>>;

fn build_adjacency(graph: &Graph) -> Result<Adjacency> {
    let mut adjacency: Adjacency = graph
        .nodes()
        .iter()
        .map(|node| (node.clone(), Vec::new()))
        .collect();
    for edge in graph.edges() {
        push_frontier(&mut adjacency, FrontierEdge::forward(edge))?;
        push_frontier(&mut adjacency, FrontierEdge::reverse(edge))?;
    }
    Ok(adjacency)
}

fn push_frontier(adjacency: &mut Adjacency, edge: FrontierEdge) -> Result<()> {
    let slot = adjacency
        .get_mut(&edge.from)
        .ok_or_else(|| MstError::UnknownVertex {
            vertex: edge.from.clone(),
        })?;
    slot.push(edge);
    Ok(())
}

/// Computes a minimum spanning tree of `graph` starting from the first vertex
/// in its node list.
///
/// When the graph is disconnected the queue drains before `|nodes| - 1` edges
/// are accepted and the run holds a partial tree spanning only the start
/// vertex's component; this is not an error. The reported operation count is
/// one per edge popped from the queue, discarded pops included.
///
/// # Errors
/// Returns [`crate::MstError::EmptyGraph`] when the node list is empty and
/// [`crate::MstError::UnknownVertex`] when an edge references a vertex absent
/// from the node list.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, VertexId, prim};
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
/// let run = prim::minimum_spanning_tree(&graph)?;
/// assert_eq!(run.total_cost(), 3);
/// assert_eq!(run.edges().len(), 2);
/// # Ok::<(), arbor_core::MstError>(())
/// ```
pub fn minimum_spanning_tree(graph: &Graph) -> Result<AlgorithmRun> {
    let started = Instant::now();

    let adjacency = build_adjacency(graph)?;
    let start = graph
        .nodes()
        .first()
        .cloned()
        .ok_or(MstError::EmptyGraph)?;

    let mut visited = HashSet::new();
    visited.insert(start.clone());

    let mut queue = BinaryHeap::new();
    if let Some(frontier) = adjacency.get(&start) {
        queue.extend(frontier.iter().cloned().map(Reverse));
    }

    let target = graph.nodes().len().saturating_sub(1);
    let mut accepted = Vec::new();
    let mut total_cost = 0_i64;
    let mut operations = 0_u64;

    while accepted.len() < target {
        let Some(Reverse(edge)) = queue.pop() else {
            break;
        };
        operations += 1;
        if visited.contains(&edge.to) {
            continue;
        }
        visited.insert(edge.to.clone());

        // Every queued destination was validated as an adjacency key when
        // build_adjacency pushed its reverse twin, so the lookup is total.
        let frontier = adjacency.get(&edge.to).map_or(&[][..], Vec::as_slice);
        for next in frontier {
            if !visited.contains(&next.to) {
                queue.push(Reverse(next.clone()));
            }
        }

        total_cost += edge.weight;
        accepted.push(edge.into_edge());
    }

    Ok(AlgorithmRun::new(
        accepted,
        total_cost,
        operations,
        started.elapsed(),
    ))
}
