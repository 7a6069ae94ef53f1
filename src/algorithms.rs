use tracing::{debug, instrument, trace};
use union_find_rs::prelude::*;

use crate::editgraph::EditGraph;
use crate::error::Result;
use crate::graph::*;
use crate::matrix::AdjacencyMatrix;
use crate::operations::GraphOperations;

pub mod cycles;
pub mod scc;
pub mod shortest_paths;

pub use cycles::CycleOptions;
pub use shortest_paths::ShortestPathLookup;

/// Algorithms available on every [Graph]. None of them modify the graph; scratch state
/// (visited marks, discovery indices) is allocated per call, so any number of
/// algorithms can run over a shared reference to the same graph.
pub trait GraphAlgorithms: Graph {
    /// The edge-multiplicity matrix of the graph, see [AdjacencyMatrix].
    fn adjacency_matrix(&self) -> AdjacencyMatrix;

    /// Runs Dijkstra's algorithm from `source`. See [shortest_paths::dijkstra].
    fn shortest_paths(&self, source:VertexId) -> Result<ShortestPathLookup<'_, Self>> where Self: Sized;

    /// All vertices connected to `start` by a path, ignoring edge directions.
    fn reachable_from(&self, start:VertexId) -> Result<VertexSet>;

    /// A copy of the connected component containing `start`.
    fn connected_subgraph(&self, start:VertexId) -> Result<EditGraph<Self::VertexData, Self::EdgeData>>
        where Self::VertexData: Clone, Self::EdgeData: Clone;

    /// Whether every vertex can be reached from every other one when edge directions
    /// are ignored. Graphs with fewer than two vertices are connected.
    fn is_connected(&self) -> bool;

    /// The connected components of the graph, ignoring edge directions.
    fn components(&self) -> Vec<VertexSet>;

    /// Cycle detection with default [CycleOptions].
    fn has_cycle(&self) -> Result<bool>;
    fn has_cycle_with(&self, options:&CycleOptions) -> Result<bool>;

    /// See [scc::tarjan].
    fn strongly_connected_components(&self) -> Vec<Vec<VertexId>>;
}

impl<G> GraphAlgorithms for G where G: Graph {
    fn adjacency_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from_graph(self)
    }

    #[instrument(level = "debug", skip(self))]
    fn shortest_paths(&self, source:VertexId) -> Result<ShortestPathLookup<'_, G>> {
        shortest_paths::dijkstra(self, source)
    }

    #[instrument(level = "debug", skip(self))]
    fn reachable_from(&self, start:VertexId) -> Result<VertexSet> {
        let mut seen = VertexSet::default();
        let mut stack = vec![start];
        seen.insert(start);

        while let Some(u) = stack.pop() {
            for (_, v) in self.incident(u)? {
                if seen.insert(v) {
                    stack.push(v);
                }
            }
        }

        debug!(reached = seen.len(), "depth-first search finished");
        Ok(seen)
    }

    fn connected_subgraph(&self, start:VertexId) -> Result<EditGraph<G::VertexData, G::EdgeData>>
        where G::VertexData: Clone, G::EdgeData: Clone {
        let reached = self.reachable_from(start)?;
        self.subgraph(reached)
    }

    fn is_connected(&self) -> bool {
        match self.vertices().map(|v| v.id()).min() {
            Some(start) => self.reachable_from(start)
                               .map_or(false, |seen| seen.len() == self.num_vertices()),
            None => true
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn components(&self) -> Vec<VertexSet> {
        let mut dsets:DisjointSets<VertexId> = DisjointSets::new();

        for v in self.vertices() {
            // Vertex ids are unique, so no id is added twice
            if let Err(err) = dsets.make_set(v.id()) {
                trace!(vertex = v.id(), ?err, "vertex already in a set");
            }
        }

        for e in self.edges() {
            // Joining two elements of the same set trips an assertion inside
            // union-find-rs, so only distinct representatives are merged.
            let (u, v) = e.endpoints();
            match (dsets.find_set(&u), dsets.find_set(&v)) {
                (Ok(a), Ok(b)) if a != b => {
                    if let Err(err) = dsets.union(&a, &b) {
                        trace!(edge = e.id(), ?err, "could not merge endpoint sets");
                    }
                },
                (Ok(_), Ok(_)) => {},
                _ => trace!(edge = e.id(), "edge endpoint missing from disjoint sets"),
            }
        }

        let mut res:Vec<VertexSet> = Vec::new();
        for comp in dsets {
            res.push(comp.iter().cloned().collect())
        }
        debug!(components = res.len(), "union-find finished");
        res
    }

    fn has_cycle(&self) -> Result<bool> {
        self.has_cycle_with(&CycleOptions::default())
    }

    #[instrument(level = "debug", skip(self))]
    fn has_cycle_with(&self, options:&CycleOptions) -> Result<bool> {
        cycles::has_cycle(self, options)
    }

    #[instrument(level = "debug", skip(self))]
    fn strongly_connected_components(&self) -> Vec<Vec<VertexId>> {
        scc::tarjan(self)
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
