//! Result records produced by the MST algorithms and the graph runner.

use std::time::Duration;

use crate::graph::Edge;

/// The outcome of one algorithm invocation on one graph.
///
/// Edges appear in acceptance order, not sorted. The operation count follows
/// the counting contract documented on each algorithm; elapsed time is
/// measured with a monotonic clock around the full computation.
#[derive(Clone, Debug, PartialEq)]
pub struct AlgorithmRun {
    edges: Vec<Edge>,
    total_cost: i64,
    operations: u64,
    elapsed: Duration,
}

impl AlgorithmRun {
    pub(crate) const fn new(
        edges: Vec<Edge>,
        total_cost: i64,
        operations: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            edges,
            total_cost,
            operations,
            elapsed,
        }
    }

    /// Returns the accepted edges in acceptance order.
    #[rustfmt::skip]
    #[must_use]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the summed weight of the accepted edges.
    #[rustfmt::skip]
    #[must_use]
    pub const fn total_cost(&self) -> i64 { self.total_cost }

    /// Returns the number of internal algorithmic operations performed.
    #[rustfmt::skip]
    #[must_use]
    pub const fn operations(&self) -> u64 { self.operations }

    /// Returns the measured wall-clock duration of the computation.
    #[rustfmt::skip]
    #[must_use]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the measured duration in fractional milliseconds.
    #[must_use]
    pub fn execution_time_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

/// Size statistics of an input graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputStats {
    vertices: usize,
    edges: usize,
}

impl InputStats {
    pub(crate) const fn new(vertices: usize, edges: usize) -> Self {
        Self { vertices, edges }
    }

    /// Returns the number of vertices in the input graph.
    #[rustfmt::skip]
    #[must_use]
    pub const fn vertices(&self) -> usize { self.vertices }

    /// Returns the number of edges in the input graph.
    #[rustfmt::skip]
    #[must_use]
    pub const fn edges(&self) -> usize { self.edges }
}

/// Per-graph report combining both algorithm runs and input statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphReport {
    graph_id: u64,
    input_stats: InputStats,
    prim: AlgorithmRun,
    kruskal: AlgorithmRun,
}

impl GraphReport {
    pub(crate) const fn new(
        graph_id: u64,
        input_stats: InputStats,
        prim: AlgorithmRun,
        kruskal: AlgorithmRun,
    ) -> Self {
        Self {
            graph_id,
            input_stats,
            prim,
            kruskal,
        }
    }

    /// Returns the identifier of the reported graph.
    #[rustfmt::skip]
    #[must_use]
    pub const fn graph_id(&self) -> u64 { self.graph_id }

    /// Returns the input size statistics.
    #[rustfmt::skip]
    #[must_use]
    pub const fn input_stats(&self) -> InputStats { self.input_stats }

    /// Returns the Prim run.
    #[rustfmt::skip]
    #[must_use]
    pub const fn prim(&self) -> &AlgorithmRun { &self.prim }

    /// Returns the Kruskal run.
    #[rustfmt::skip]
    #[must_use]
    pub const fn kruskal(&self) -> &AlgorithmRun { &self.kruskal }
}
