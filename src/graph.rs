//! The capability surface that all algorithms in this crate are written against.
//!
//! A type implementing [Graph] exposes enumeration and id-based lookup of its
//! vertices and edges. The algorithms in [crate::algorithms] only ever use this trait,
//! so alternative storage back-ends can be plugged in by implementing it. Editing
//! operations live in the separate [MutableGraph] trait.
use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use crate::entity::{Edge, Vertex};
use crate::error::{GraphError, Result};
use crate::iterators::{Incident, Traversals};

pub type VertexId = u32;
pub type EdgeId = u64;
pub type VertexMap<T> = FxHashMap<VertexId, T>;
pub type VertexSet = FxHashSet<VertexId>;
pub type EdgeSet = FxHashSet<EdgeId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Directed,
    Undirected,
}

/// Summary of which edge kinds occur in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKinds {
    NoEdges,
    AllDirected,
    AllUndirected,
    Mixed,
}

pub trait Graph {
    type VertexData;
    type EdgeData;

    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;

    fn contains(&self, u:VertexId) -> bool;
    fn contains_edge(&self, e:EdgeId) -> bool;

    /// Returns the vertex with id `u` or [GraphError::VertexNotFound].
    fn vertex(&self, u:VertexId) -> Result<&Vertex<Self::VertexData>>;

    /// Returns the edge with id `e` or [GraphError::EdgeNotFound].
    fn edge(&self, e:EdgeId) -> Result<&Edge<Self::EdgeData>>;

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a Vertex<Self::VertexData>> + 'a>;
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item=&'a Edge<Self::EdgeData>> + 'a>;

    fn len(&self) -> usize {
        self.num_vertices()
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    /// All vertex ids in ascending order.
    fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices().map(|v| v.id()).sorted().collect()
    }

    fn degree(&self, u:VertexId) -> Result<usize> {
        Ok(self.vertex(u)?.edge_ids().len())
    }

    /// Iterates over the edges that can be used to leave `u` together with the vertex
    /// they lead to. Directed edges count only at their source.
    fn traversals(&self, u:VertexId) -> Result<Traversals<'_, Self>> where Self: Sized {
        let vertex = self.vertex(u)?;
        Ok(Traversals::new(self, vertex))
    }

    /// Iterates over all edges incident to `u` together with their opposite endpoint,
    /// ignoring direction.
    fn incident(&self, u:VertexId) -> Result<Incident<'_, Self>> where Self: Sized {
        let vertex = self.vertex(u)?;
        Ok(Incident::new(self, vertex))
    }

    /// All edges with endpoints `u` and `v`, in either orientation.
    fn edges_between(&self, u:VertexId, v:VertexId) -> Result<Vec<&Edge<Self::EdgeData>>> where Self: Sized {
        if !self.contains(v) {
            return Err(GraphError::VertexNotFound(v));
        }
        Ok(self.incident(u)?.filter(|(_, w)| *w == v).map(|(e, _)| e).collect())
    }

    fn edge_kinds(&self) -> EdgeKinds {
        let mut directed = false;
        let mut undirected = false;
        for e in self.edges() {
            match e.kind() {
                EdgeKind::Directed => directed = true,
                EdgeKind::Undirected => undirected = true,
            }
            if directed && undirected {
                return EdgeKinds::Mixed
            }
        }

        match (directed, undirected) {
            (true, _) => EdgeKinds::AllDirected,
            (false, true) => EdgeKinds::AllUndirected,
            (false, false) => EdgeKinds::NoEdges,
        }
    }
}

/// Structural editing. Every operation leaves the graph consistent before it returns:
/// edge endpoints exist and each vertex lists exactly its incident edges.
pub trait MutableGraph: Graph {
    fn new() -> Self;
    fn with_capacity(n_guess:usize) -> Self;

    /// Adds a vertex under the next free id and returns that id.
    fn add_vertex(&mut self, data:Self::VertexData) -> Result<VertexId>;

    /// Adds a vertex under a caller-chosen id. Fails if the id is taken.
    fn add_vertex_with_id(&mut self, u:VertexId, data:Self::VertexData) -> Result<()>;

    /// Adds an edge under the next free id. Both endpoints must exist.
    fn add_edge(&mut self, u:VertexId, v:VertexId, weight:f64, kind:EdgeKind, data:Self::EdgeData) -> Result<EdgeId>;

    fn add_edge_with_id(&mut self, e:EdgeId, u:VertexId, v:VertexId, weight:f64, kind:EdgeKind, data:Self::EdgeData) -> Result<()>;

    /// Removes `u` and every edge incident to it.
    fn remove_vertex(&mut self, u:VertexId) -> Result<Vertex<Self::VertexData>>;
    fn remove_edge(&mut self, e:EdgeId) -> Result<Edge<Self::EdgeData>>;

    fn set_vertex_weight(&mut self, u:VertexId, weight:f64) -> Result<()>;
    fn set_edge_weight(&mut self, e:EdgeId, weight:f64) -> Result<()>;
    fn vertex_data_mut(&mut self, u:VertexId) -> Result<&mut Self::VertexData>;
    fn edge_data_mut(&mut self, e:EdgeId) -> Result<&mut Self::EdgeData>;

    fn remove_loops(&mut self) -> usize {
        let cands:Vec<EdgeId> = self.edges().filter(|e| e.is_loop()).map(|e| e.id()).collect();

        let res = cands.len();
        for e in cands {
            // Ids were just collected from the graph itself.
            let _ = self.remove_edge(e);
        }

        res
    }

    fn remove_isolates(&mut self) -> usize {
        let cands:Vec<VertexId> = self.vertices()
                                      .filter(|v| v.edge_ids().is_empty())
                                      .map(|v| v.id())
                                      .collect();
        let res = cands.len();
        for u in cands {
            let _ = self.remove_vertex(u);
        }

        res
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
