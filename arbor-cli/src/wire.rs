//! JSON wire documents for the arbor CLI.
//!
//! The decoder turns an input document holding a `graphs` array into core
//! [`Graph`] values; the encoder serialises per-graph reports back out as a
//! pretty-printed `results` document. Field names and nesting follow the
//! report shapes the core guarantees.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use arbor_core::{AlgorithmRun, Edge, Graph, GraphReport, InputStats, VertexId};

/// Top-level input document.
#[derive(Debug, Deserialize)]
pub struct InputDoc {
    /// Graphs to process, in order.
    pub graphs: Vec<GraphDoc>,
}

/// One graph description from the input document.
#[derive(Debug, Deserialize)]
pub struct GraphDoc {
    /// Graph identifier echoed into the report.
    pub id: u64,
    /// Vertex labels; the first is Prim's start vertex.
    pub nodes: Vec<String>,
    /// Weighted edges.
    pub edges: Vec<EdgeDoc>,
}

/// One weighted edge on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDoc {
    /// Traversal origin label.
    pub from: String,
    /// Traversal destination label.
    pub to: String,
    /// Edge weight.
    pub weight: i64,
}

/// Top-level output document.
#[derive(Debug, Serialize)]
pub struct ReportDoc {
    /// Per-graph reports, in input order.
    pub results: Vec<GraphReportDoc>,
}

/// Per-graph section of the output document.
#[derive(Debug, Serialize)]
pub struct GraphReportDoc {
    /// Identifier of the reported graph.
    pub graph_id: u64,
    /// Input size statistics.
    pub input_stats: InputStatsDoc,
    /// Prim run.
    pub prim: AlgorithmRunDoc,
    /// Kruskal run.
    pub kruskal: AlgorithmRunDoc,
}

/// Input size statistics on the wire.
#[derive(Debug, Serialize)]
pub struct InputStatsDoc {
    /// Vertex count.
    pub vertices: usize,
    /// Edge count.
    pub edges: usize,
}

/// Per-algorithm section of the output document.
#[derive(Debug, Serialize)]
pub struct AlgorithmRunDoc {
    /// Accepted edges in acceptance order.
    pub mst_edges: Vec<EdgeDoc>,
    /// Summed weight of the accepted edges.
    pub total_cost: i64,
    /// Internal operation count.
    pub operations_count: u64,
    /// Wall-clock execution time in fractional milliseconds.
    pub execution_time_ms: f64,
}

impl From<&Edge> for EdgeDoc {
    fn from(edge: &Edge) -> Self {
        Self {
            from: edge.from().as_str().to_owned(),
            to: edge.to().as_str().to_owned(),
            weight: edge.weight(),
        }
    }
}

impl From<InputStats> for InputStatsDoc {
    fn from(stats: InputStats) -> Self {
        Self {
            vertices: stats.vertices(),
            edges: stats.edges(),
        }
    }
}

impl From<&AlgorithmRun> for AlgorithmRunDoc {
    fn from(run: &AlgorithmRun) -> Self {
        Self {
            mst_edges: run.edges().iter().map(EdgeDoc::from).collect(),
            total_cost: run.total_cost(),
            operations_count: run.operations(),
            execution_time_ms: run.execution_time_ms(),
        }
    }
}

impl From<&GraphReport> for GraphReportDoc {
    fn from(report: &GraphReport) -> Self {
        Self {
            graph_id: report.graph_id(),
            input_stats: report.input_stats().into(),
            prim: report.prim().into(),
            kruskal: report.kruskal().into(),
        }
    }
}

/// Decodes the `graphs` array of an input document into core graph values.
///
/// # Errors
/// Returns the underlying [`serde_json::Error`] when the document is not
/// valid JSON or does not match the expected shape.
pub fn decode_graphs(reader: impl Read) -> Result<Vec<Graph>, serde_json::Error> {
    let doc: InputDoc = serde_json::from_reader(reader)?;
    Ok(doc.graphs.into_iter().map(graph_from_doc).collect())
}

fn graph_from_doc(doc: GraphDoc) -> Graph {
    Graph::new(
        doc.id,
        doc.nodes.into_iter().map(VertexId::from).collect(),
        doc.edges
            .into_iter()
            .map(|edge| Edge::new(VertexId::from(edge.from), VertexId::from(edge.to), edge.weight))
            .collect(),
    )
}

/// Assembles the output document from per-graph reports.
#[must_use]
pub fn report_doc(reports: &[GraphReport]) -> ReportDoc {
    ReportDoc {
        results: reports.iter().map(GraphReportDoc::from).collect(),
    }
}

/// Encodes `report` as pretty-printed JSON with a trailing newline.
///
/// # Errors
/// Returns the underlying [`serde_json::Error`] when serialisation or the
/// write itself fails.
pub fn encode_report(report: &ReportDoc, mut writer: impl Write) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;

    use arbor_core::run_graphs;

    const INPUT: &str = r#"{
        "graphs": [
            {
                "id": 1,
                "nodes": ["A", "B", "C"],
                "edges": [
                    {"from": "A", "to": "B", "weight": 1},
                    {"from": "B", "to": "C", "weight": 2},
                    {"from": "A", "to": "C", "weight": 3}
                ]
            }
        ]
    }"#;

    #[test]
    fn decode_builds_core_graphs() {
        let graphs = decode_graphs(INPUT.as_bytes()).expect("valid document");
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].id(), 1);
        assert_eq!(graphs[0].vertex_count(), 3);
        assert_eq!(graphs[0].edges()[0].weight(), 1);
    }

    #[test]
    fn decode_rejects_malformed_documents() {
        assert!(decode_graphs("not json".as_bytes()).is_err());
        assert!(decode_graphs(r#"{"graphs": [{"id": 1}]}"#.as_bytes()).is_err());
    }

    #[test]
    fn encode_produces_the_report_shape() {
        let graphs = decode_graphs(INPUT.as_bytes()).expect("valid document");
        let reports = run_graphs(&graphs).expect("valid graphs");
        let doc = report_doc(&reports);

        let mut buffer = Vec::new();
        encode_report(&doc, &mut buffer).expect("encoding succeeds");
        let value: serde_json::Value =
            serde_json::from_slice(&buffer).expect("encoder output is valid JSON");

        let entry = &value["results"][0];
        assert_eq!(entry["graph_id"], 1);
        assert_eq!(entry["input_stats"]["vertices"], 3);
        assert_eq!(entry["input_stats"]["edges"], 3);
        for algorithm in ["prim", "kruskal"] {
            assert_eq!(entry[algorithm]["total_cost"], 3);
            assert_eq!(
                entry[algorithm]["mst_edges"]
                    .as_array()
                    .expect("edge array")
                    .len(),
                2
            );
            assert!(entry[algorithm]["execution_time_ms"].is_f64());
            assert!(entry[algorithm]["operations_count"].is_u64());
        }
    }
}
