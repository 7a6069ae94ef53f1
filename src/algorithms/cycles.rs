//! Cycle detection.
//!
//! Which algorithm runs depends on the kinds of edges in the graph, which are checked
//! once up front:
//!
//! - only directed edges: a cycle exists iff there is a self-loop or fewer strongly
//!   connected components than vertices;
//! - only undirected edges (or [CycleOptions::treat_as_undirected]): a depth-first search
//!   over edges reports a cycle as soon as it meets an edge whose endpoints were both
//!   visited already;
//! - both kinds: [GraphError::MixedEdgeKinds].
use tracing::debug;

use crate::algorithms::scc::tarjan;
use crate::error::{GraphError, Result};
use crate::graph::*;

/// Options for [has_cycle].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleOptions {
    /// Ignore edge directions and run the undirected search on any graph.
    pub treat_as_undirected: bool,
}

impl CycleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn treat_as_undirected(mut self) -> Self {
        self.treat_as_undirected = true;
        self
    }
}

pub fn has_cycle<G:Graph>(graph:&G, options:&CycleOptions) -> Result<bool> {
    if options.treat_as_undirected {
        return Ok(undirected_cycle(graph));
    }

    match graph.edge_kinds() {
        EdgeKinds::NoEdges => Ok(false),
        EdgeKinds::AllDirected => Ok(directed_cycle(graph)),
        EdgeKinds::AllUndirected => Ok(undirected_cycle(graph)),
        EdgeKinds::Mixed => {
            debug!("cycle detection refused on graph with mixed edge kinds");
            Err(GraphError::MixedEdgeKinds)
        }
    }
}

fn directed_cycle<G:Graph>(graph:&G) -> bool {
    // A self-loop forms a component of its own and would go unnoticed below
    if graph.edges().any(|e| e.is_loop()) {
        return true;
    }
    let comps = tarjan(graph);
    debug!(components = comps.len(), vertices = graph.num_vertices(), "strongly connected components");
    comps.len() < graph.num_vertices()
}

fn undirected_cycle<G:Graph>(graph:&G) -> bool {
    let mut visited = VertexSet::default();
    let mut processed = EdgeSet::default();
    let mut stack:Vec<EdgeId> = Vec::new();

    let push_edges = |u:VertexId, processed:&EdgeSet, stack:&mut Vec<EdgeId>| {
        if let Ok(vertex) = graph.vertex(u) {
            stack.extend(vertex.edge_ids().iter().filter(|e| !processed.contains(*e)));
        }
    };

    for root in graph.vertex_ids() {
        if !visited.insert(root) {
            continue;
        }
        push_edges(root, &processed, &mut stack);

        while let Some(e) = stack.pop() {
            if !processed.insert(e) {
                continue;
            }
            let (a, b) = match graph.edge(e) {
                Ok(edge) => edge.endpoints(),
                Err(_) => continue,
            };

            let next = match (visited.contains(&a), visited.contains(&b)) {
                (true, true) => {
                    debug!(edge = e, "edge closes a cycle");
                    return true;
                },
                (true, false) => b,
                (false, true) => a,
                (false, false) => continue,
            };
            visited.insert(next);
            push_edges(next, &processed, &mut stack);
        }
    }

    false
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
