//! Mutable weighted graphs together with classical traversal algorithms.
//!
//! [EditGraph](editgraph::EditGraph) stores vertices and edges with ids, weights and
//! arbitrary payloads. Algorithms are provided for every [Graph](graph::Graph) through
//! the [GraphAlgorithms](algorithms::GraphAlgorithms) trait.
//!
//! ```rust
//! use graphkit::graph::*;
//! use graphkit::editgraph::EditGraph;
//! use graphkit::algorithms::GraphAlgorithms;
//!
//! fn main() {
//!     let mut graph:EditGraph = EditGraph::new();
//!     graph.add_vertices(0..4).unwrap();
//!     graph.add_undirected_edge(0, 1, 1.0).unwrap();
//!     graph.add_undirected_edge(1, 2, 1.0).unwrap();
//!     graph.add_undirected_edge(0, 2, 5.0).unwrap();
//!     graph.add_arc(2, 3, 0.5).unwrap();
//!
//!     let lookup = graph.shortest_paths(0).unwrap();
//!     assert_eq!(lookup.path_length_to(3), 2.5);
//!     assert_eq!(lookup.vertices_to(3).unwrap(), vec![0, 1, 2, 3]);
//!
//!     assert!(graph.is_connected());
//!     assert_eq!(graph.adjacency_matrix().get(0, 2).unwrap(), 1);
//! }
//! ```
#![allow(non_snake_case)]

pub mod graph;
pub mod entity;
pub mod error;
pub mod iterators;
pub mod editgraph;
pub mod operations;
pub mod compare;
pub mod matrix;
pub mod algorithms;
