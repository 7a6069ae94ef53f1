use itertools::Itertools;
use tracing::{debug, instrument};

use crate::editgraph::EditGraph;
use crate::error::{GraphError, Result};
use crate::graph::*;

pub trait GraphOperations: Graph {
    /// Copies the vertices in `ids` together with all edges that have both endpoints
    /// in `ids` into a new, independent [EditGraph]. Vertex and edge ids, weights and
    /// payloads are preserved; incident edge lists are rebuilt from the retained edges.
    ///
    /// Fails with [GraphError::VertexNotFound] if an id is not part of the graph.
    fn subgraph<I>(&self, ids:I) -> Result<EditGraph<Self::VertexData, Self::EdgeData>>
        where I: IntoIterator<Item=VertexId>, Self::VertexData: Clone, Self::EdgeData: Clone;
}

impl<G> GraphOperations for G where G: Graph {
    #[instrument(level = "debug", skip_all)]
    fn subgraph<I>(&self, ids:I) -> Result<EditGraph<G::VertexData, G::EdgeData>>
        where I: IntoIterator<Item=VertexId>, G::VertexData: Clone, G::EdgeData: Clone {
        let keep:VertexSet = ids.into_iter().collect();
        if let Some(u) = keep.iter().filter(|u| !self.contains(**u)).min() {
            return Err(GraphError::VertexNotFound(*u));
        }

        let mut res = EditGraph::with_capacity(keep.len());
        for u in keep.iter().sorted() {
            res.insert_vertex(self.vertex(*u)?.detached());
        }

        let retained = self.edges()
                           .filter(|e| keep.contains(&e.source()) && keep.contains(&e.target()))
                           .sorted_by_key(|e| e.id());
        for edge in retained {
            res.insert_edge(edge.clone());
        }

        debug!(vertices = res.num_vertices(), edges = res.num_edges(), "extracted subgraph");
        Ok(res)
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
