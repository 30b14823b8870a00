//! Arbor core library: minimum spanning tree computation and reporting.
//!
//! Computes the MST of weighted undirected graphs with both Kruskal's and
//! Prim's algorithms and reports, per run, the accepted edges, total cost,
//! an internal operation count, and wall-clock execution time. I/O belongs
//! to external collaborators; this crate consumes in-memory [`Graph`] values
//! and produces in-memory [`GraphReport`] values.

pub mod kruskal;
pub mod prim;

mod error;
mod graph;
#[cfg(test)]
mod property;
mod result;
mod runner;

pub use crate::{
    error::{MstError, MstErrorCode, Result},
    graph::{Edge, Graph, VertexId},
    result::{AlgorithmRun, GraphReport, InputStats},
    runner::{run_graph, run_graphs},
};
