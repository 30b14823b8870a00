//! Property tests over both MST algorithms.
//!
//! Random connected graphs are built from a spanning spine plus extra edges,
//! so the agreement properties hold by construction.

mod strategies;

use proptest::prelude::*;

use crate::{kruskal, prim, run_graph};

use self::strategies::connected_graph;

proptest! {
    #[test]
    fn costs_agree_on_connected_graphs(graph in connected_graph()) {
        let kruskal_run = kruskal::minimum_spanning_forest(&graph).expect("valid graph");
        let prim_run = prim::minimum_spanning_tree(&graph).expect("valid graph");

        prop_assert_eq!(kruskal_run.total_cost(), prim_run.total_cost());
        prop_assert_eq!(kruskal_run.edges().len(), graph.vertex_count() - 1);
        prop_assert_eq!(prim_run.edges().len(), graph.vertex_count() - 1);
    }

    #[test]
    fn reruns_are_idempotent(graph in connected_graph()) {
        let first = kruskal::minimum_spanning_forest(&graph).expect("valid graph");
        let second = kruskal::minimum_spanning_forest(&graph).expect("valid graph");
        prop_assert_eq!(first.edges(), second.edges());
        prop_assert_eq!(first.total_cost(), second.total_cost());
        prop_assert_eq!(first.operations(), second.operations());

        let first = prim::minimum_spanning_tree(&graph).expect("valid graph");
        let second = prim::minimum_spanning_tree(&graph).expect("valid graph");
        prop_assert_eq!(first.edges(), second.edges());
        prop_assert_eq!(first.total_cost(), second.total_cost());
        prop_assert_eq!(first.operations(), second.operations());
    }

    #[test]
    fn kruskal_acceptance_prefixes_are_acyclic(graph in connected_graph()) {
        let run = kruskal::minimum_spanning_forest(&graph).expect("valid graph");

        let mut oracle = kruskal::DisjointSet::new(graph.nodes().iter().cloned());
        for edge in run.edges() {
            let left = oracle.find(edge.from()).expect("registered vertex");
            let right = oracle.find(edge.to()).expect("registered vertex");
            prop_assert_ne!(left, right, "accepted edge closed a cycle");
            oracle.union(edge.from(), edge.to()).expect("registered vertices");
        }
    }

    #[test]
    fn report_pairs_both_runs(graph in connected_graph()) {
        let report = run_graph(&graph).expect("valid graph");
        prop_assert_eq!(report.input_stats().vertices(), graph.vertex_count());
        prop_assert_eq!(report.input_stats().edges(), graph.edge_count());
        prop_assert_eq!(
            report.kruskal().total_cost(),
            report.prim().total_cost()
        );
    }
}
