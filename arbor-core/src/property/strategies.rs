//! proptest strategies shared by the property suite.

use proptest::prelude::*;

use crate::{Edge, Graph, VertexId};

fn vertex(index: usize) -> VertexId {
    VertexId::from(format!("v{index}"))
}

/// Generates a connected graph: a spanning spine attaching each vertex to an
/// earlier one, plus a handful of extra edges.
pub(super) fn connected_graph() -> impl Strategy<Value = Graph> {
    (2_usize..9).prop_flat_map(|n| {
        let spine = proptest::collection::vec((any::<usize>(), 1_i64..100), n - 1);
        let extras = proptest::collection::vec((any::<usize>(), any::<usize>(), 1_i64..100), 0..10);
        (Just(n), spine, extras).prop_map(|(n, spine, extras)| {
            let nodes: Vec<VertexId> = (0..n).map(vertex).collect();
            let mut edges = Vec::new();
            for (child, (pick, weight)) in spine.into_iter().enumerate() {
                let child = child + 1;
                edges.push(Edge::new(vertex(pick % child), vertex(child), weight));
            }
            for (a, b, weight) in extras {
                let (a, b) = (a % n, b % n);
                if a != b {
                    edges.push(Edge::new(vertex(a), vertex(b), weight));
                }
            }
            Graph::new(0, nodes, edges)
        })
    })
}
