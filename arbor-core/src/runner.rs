//! Per-graph orchestration over the two MST algorithms.
//!
//! The runner is a thin layer: it invokes Prim and Kruskal on the same
//! immutable graph value and assembles the per-graph report. The two runs
//! share no state, so a higher layer could parallelise across graphs without
//! locking; this crate keeps execution sequential.

use tracing::{info, instrument};

use crate::{
    error::Result,
    graph::Graph,
    kruskal, prim,
    result::{GraphReport, InputStats},
};

/// Runs both algorithms against `graph` and assembles the per-graph report.
///
/// # Errors
/// Propagates any [`crate::MstError`] raised by either algorithm; a failure
/// is fatal for the graph.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, VertexId, run_graph};
///
/// let graph = Graph::new(
///     3,
///     vec![VertexId::from("A"), VertexId::from("B")],
///     vec![Edge::new(VertexId::from("A"), VertexId::from("B"), 2)],
/// );
/// let report = run_graph(&graph)?;
/// assert_eq!(report.graph_id(), 3);
/// assert_eq!(report.kruskal().total_cost(), report.prim().total_cost());
/// # Ok::<(), arbor_core::MstError>(())
/// ```
#[instrument(
    name = "runner.run_graph",
    err,
    skip(graph),
    fields(
        graph_id = graph.id(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
    ),
)]
pub fn run_graph(graph: &Graph) -> Result<GraphReport> {
    let stats = InputStats::new(graph.vertex_count(), graph.edge_count());
    let prim = prim::minimum_spanning_tree(graph)?;
    let kruskal = kruskal::minimum_spanning_forest(graph)?;
    info!(
        prim_cost = prim.total_cost(),
        kruskal_cost = kruskal.total_cost(),
        "graph processed"
    );
    Ok(GraphReport::new(graph.id(), stats, prim, kruskal))
}

/// Runs every graph sequentially, preserving input order in the output.
///
/// # Errors
/// Returns the first [`crate::MstError`] encountered; remaining graphs are
/// not processed.
pub fn run_graphs(graphs: &[Graph]) -> Result<Vec<GraphReport>> {
    graphs.iter().map(run_graph).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, MstError, VertexId};

    fn v(label: &str) -> VertexId {
        VertexId::from(label)
    }

    fn triangle(id: u64) -> Graph {
        Graph::new(
            id,
            vec![v("A"), v("B"), v("C")],
            vec![
                Edge::new(v("A"), v("B"), 1),
                Edge::new(v("B"), v("C"), 2),
                Edge::new(v("A"), v("C"), 3),
            ],
        )
    }

    #[test]
    fn report_carries_identity_and_stats() {
        let report = run_graph(&triangle(42)).expect("valid graph");
        assert_eq!(report.graph_id(), 42);
        assert_eq!(report.input_stats().vertices(), 3);
        assert_eq!(report.input_stats().edges(), 3);
    }

    #[test]
    fn both_algorithms_agree_on_connected_graphs() {
        let report = run_graph(&triangle(1)).expect("valid graph");
        assert_eq!(report.kruskal().total_cost(), 3);
        assert_eq!(report.prim().total_cost(), 3);
        assert_eq!(report.kruskal().edges().len(), 2);
        assert_eq!(report.prim().edges().len(), 2);
    }

    #[test]
    fn batch_preserves_input_order() {
        let graphs = vec![triangle(2), triangle(7)];
        let reports = run_graphs(&graphs).expect("valid graphs");
        let ids: Vec<u64> = reports.iter().map(GraphReport::graph_id).collect();
        assert_eq!(ids, vec![2, 7]);
    }

    #[test]
    fn batch_aborts_on_first_failure() {
        let broken = Graph::new(5, Vec::new(), Vec::new());
        let graphs = vec![triangle(1), broken];
        let err = run_graphs(&graphs).expect_err("empty graph must fail Prim");
        assert_eq!(err, MstError::EmptyGraph);
    }
}
