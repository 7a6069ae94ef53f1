//!
//! A general-purpose mutable graph that stores vertices and edges in hash maps keyed by
//! their ids. Parallel edges, self-loops and a mix of directed and undirected edges are
//! all allowed; every vertex and edge carries a weight and a payload.
//!
//! ## Identifiers
//!
//! Each graph keeps one counter for vertex ids and one for edge ids. [MutableGraph::add_vertex]
//! and [MutableGraph::add_edge] hand out the current counter value. The `_with_id` variants accept
//! a caller-chosen id, reject it if it is in use and move the counter past it. Counters never
//! decrease, so an id freed by a removal is not handed out again automatically.
//!
//! ```rust
//! use graphkit::graph::*;
//! use graphkit::editgraph::EditGraph;
//!
//! fn main() {
//!     let mut graph:EditGraph<&str, ()> = EditGraph::new();
//!     let a = graph.add_vertex("a").unwrap();
//!     let b = graph.add_vertex("b").unwrap();
//!     graph.add_vertex_with_id(10, "c").unwrap();
//!     assert_eq!((a, b), (0, 1));
//!     assert_eq!(graph.add_vertex("d").unwrap(), 11);
//!
//!     let e = graph.add_edge(a, 10, 2.5, EdgeKind::Undirected, ()).unwrap();
//!     assert_eq!(graph.vertex(10).unwrap().edge_ids(), &[e]);
//!
//!     graph.remove_vertex(a).unwrap();
//!     assert!(!graph.contains_edge(e));
//!     assert!(graph.vertex(10).unwrap().edge_ids().is_empty());
//! }
//! ```
//!
//! ## Named graphs
//!
//! ```rust
//! use graphkit::graph::*;
//! use graphkit::editgraph::EditGraph;
//!
//! fn main() {
//!     let graph = EditGraph::path(5);
//!     assert_eq!((graph.num_vertices(), graph.num_edges()), (5, 4));
//!
//!     let graph = EditGraph::clique(4);
//!     assert_eq!(graph.num_edges(), 6);
//!
//!     let graph = EditGraph::directed_cycle(3);
//!     assert_eq!(graph.edge_kinds(), EdgeKinds::AllDirected);
//! }
//! ```

use fxhash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::entity::{Edge, Vertex};
use crate::error::{GraphError, Result};
use crate::graph::*;

/// An implementation of the [MutableGraph] trait with additional convenient editing and generating functions.
#[derive(Debug, Clone)]
pub struct EditGraph<V = (), E = ()> {
    vertices: FxHashMap<VertexId, Vertex<V>>,
    edges: FxHashMap<EdgeId, Edge<E>>,
    next_vertex: Option<VertexId>,
    next_edge: Option<EdgeId>,
}

impl<V:PartialEq, E:PartialEq> PartialEq for EditGraph<V, E> {
    /// Two graphs are equal if they have the same vertices and edges (ids, weights,
    /// payloads, endpoints and kinds). The order of incident edge lists and the
    /// state of the id counters are ignored.
    fn eq(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() {
            return false
        }
        if self.num_edges() != other.num_edges() {
            return false
        }
        if self.edges != other.edges {
            return false
        }

        self.vertices.iter().all(|(u, x)| {
            match other.vertices.get(u) {
                Some(y) => {
                    let N:FxHashSet<&EdgeId> = x.edge_ids().iter().collect();
                    let M:FxHashSet<&EdgeId> = y.edge_ids().iter().collect();
                    x.weight() == y.weight() && x.data() == y.data() && N == M
                },
                None => false
            }
        })
    }
}

impl<V, E> Default for EditGraph<V, E> {
    fn default() -> Self {
        EditGraph::with_capacity(0)
    }
}

impl<V, E> Graph for EditGraph<V, E> {
    type VertexData = V;
    type EdgeData = E;

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn contains(&self, u:VertexId) -> bool {
        self.vertices.contains_key(&u)
    }

    fn contains_edge(&self, e:EdgeId) -> bool {
        self.edges.contains_key(&e)
    }

    fn vertex(&self, u:VertexId) -> Result<&Vertex<V>> {
        self.vertices.get(&u).ok_or(GraphError::VertexNotFound(u))
    }

    fn edge(&self, e:EdgeId) -> Result<&Edge<E>> {
        self.edges.get(&e).ok_or(GraphError::EdgeNotFound(e))
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a Vertex<V>> + 'a> {
        Box::new(self.vertices.values())
    }

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item=&'a Edge<E>> + 'a> {
        Box::new(self.edges.values())
    }
}

impl<V, E> MutableGraph for EditGraph<V, E> {
    fn new() -> Self {
        EditGraph::with_capacity(0)
    }

    fn with_capacity(n_guess:usize) -> Self {
        EditGraph {
            vertices: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            edges: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            next_vertex: Some(0),
            next_edge: Some(0),
        }
    }

    fn add_vertex(&mut self, data:V) -> Result<VertexId> {
        let u = self.next_vertex.ok_or(GraphError::IdSpaceExhausted{ entity: "vertex" })?;
        self.insert_vertex(Vertex::new(u, data));
        Ok(u)
    }

    fn add_vertex_with_id(&mut self, u:VertexId, data:V) -> Result<()> {
        if self.contains(u) {
            return Err(GraphError::DuplicateVertex(u));
        }
        self.insert_vertex(Vertex::new(u, data));
        Ok(())
    }

    fn add_edge(&mut self, u:VertexId, v:VertexId, weight:f64, kind:EdgeKind, data:E) -> Result<EdgeId> {
        self.check_endpoints(u, v)?;
        let e = self.next_edge.ok_or(GraphError::IdSpaceExhausted{ entity: "edge" })?;
        self.insert_edge(Edge::new(e, u, v, weight, kind, data));
        Ok(e)
    }

    fn add_edge_with_id(&mut self, e:EdgeId, u:VertexId, v:VertexId, weight:f64, kind:EdgeKind, data:E) -> Result<()> {
        if self.contains_edge(e) {
            return Err(GraphError::DuplicateEdge(e));
        }
        self.check_endpoints(u, v)?;
        self.insert_edge(Edge::new(e, u, v, weight, kind, data));
        Ok(())
    }

    fn remove_vertex(&mut self, u:VertexId) -> Result<Vertex<V>> {
        let incident = self.vertex(u)?.edge_ids().to_vec();
        for e in &incident {
            if let Some(edge) = self.edges.remove(e) {
                if let Some(w) = edge.other(u).filter(|w| *w != u) {
                    if let Some(x) = self.vertices.get_mut(&w) {
                        x.detach(*e);
                    }
                }
            }
        }
        trace!(vertex = u, edges = incident.len(), "removed vertex");

        self.vertices.remove(&u).ok_or(GraphError::VertexNotFound(u))
    }

    fn remove_edge(&mut self, e:EdgeId) -> Result<Edge<E>> {
        let edge = self.edges.remove(&e).ok_or(GraphError::EdgeNotFound(e))?;
        for x in [edge.source(), edge.target()] {
            if let Some(vertex) = self.vertices.get_mut(&x) {
                vertex.detach(e);
            }
        }

        Ok(edge)
    }

    fn set_vertex_weight(&mut self, u:VertexId, weight:f64) -> Result<()> {
        let vertex = self.vertices.get_mut(&u).ok_or(GraphError::VertexNotFound(u))?;
        vertex.set_weight(weight);
        Ok(())
    }

    fn set_edge_weight(&mut self, e:EdgeId, weight:f64) -> Result<()> {
        let edge = self.edges.get_mut(&e).ok_or(GraphError::EdgeNotFound(e))?;
        edge.set_weight(weight);
        Ok(())
    }

    fn vertex_data_mut(&mut self, u:VertexId) -> Result<&mut V> {
        self.vertices.get_mut(&u)
                     .map(|vertex| vertex.data_mut())
                     .ok_or(GraphError::VertexNotFound(u))
    }

    fn edge_data_mut(&mut self, e:EdgeId) -> Result<&mut E> {
        self.edges.get_mut(&e)
                  .map(|edge| edge.data_mut())
                  .ok_or(GraphError::EdgeNotFound(e))
    }
}

impl<V, E> EditGraph<V, E> {
    /// Inserts a vertex whose id is known to be free. The vertex must not list any
    /// incident edges yet.
    pub(crate) fn insert_vertex(&mut self, vertex:Vertex<V>) {
        debug_assert!(vertex.edge_ids().is_empty());
        let u = vertex.id();
        if self.next_vertex.map_or(false, |next| u >= next) {
            self.next_vertex = u.checked_add(1);
        }
        self.vertices.insert(u, vertex);
    }

    /// Inserts an edge whose id is free and whose endpoints exist.
    pub(crate) fn insert_edge(&mut self, edge:Edge<E>) {
        let e = edge.id();
        for x in [edge.source(), edge.target()] {
            if let Some(vertex) = self.vertices.get_mut(&x) {
                vertex.attach(e);
            }
        }
        if self.next_edge.map_or(false, |next| e >= next) {
            self.next_edge = e.checked_add(1);
        }
        self.edges.insert(e, edge);
    }

    fn check_endpoints(&self, u:VertexId, v:VertexId) -> Result<()> {
        for x in [u, v] {
            if !self.contains(x) {
                return Err(GraphError::VertexNotFound(x));
            }
        }
        Ok(())
    }
}

impl<V:Default, E> EditGraph<V, E> {
    /// Adds a vertex with default payload for every id in `ids`. Stops at the first
    /// id that is already taken.
    pub fn add_vertices<I>(&mut self, ids:I) -> Result<()> where I: IntoIterator<Item=VertexId> {
        for u in ids {
            self.add_vertex_with_id(u, V::default())?;
        }
        Ok(())
    }
}

impl<V, E:Default> EditGraph<V, E> {
    /// Adds an undirected edge with default payload.
    pub fn add_undirected_edge(&mut self, u:VertexId, v:VertexId, weight:f64) -> Result<EdgeId> {
        self.add_edge(u, v, weight, EdgeKind::Undirected, E::default())
    }

    /// Adds a directed edge from `u` to `v` with default payload.
    pub fn add_arc(&mut self, u:VertexId, v:VertexId, weight:f64) -> Result<EdgeId> {
        self.add_edge(u, v, weight, EdgeKind::Directed, E::default())
    }
}

impl EditGraph {
    /// Builds a graph from `(u, v, weight)` triples, creating vertices as needed.
    /// Edges receive the ids `0, 1, 2, ...` in input order.
    pub fn from_weighted_edges<I>(edges:I, kind:EdgeKind) -> EditGraph where I: IntoIterator<Item=(VertexId, VertexId, f64)> {
        let mut res:EditGraph = EditGraph::new();
        for (e, (u, v, w)) in edges.into_iter().enumerate() {
            res.link(e as EdgeId, u, v, w, kind);
        }
        res
    }

    /// Generates a path on `n` vertices.
    pub fn path(n:u32) -> EditGraph {
        EditGraph::chain(n, EdgeKind::Undirected, false)
    }

    /// Generates a cycle on `n` vertices.
    pub fn cycle(n:u32) -> EditGraph {
        EditGraph::chain(n, EdgeKind::Undirected, true)
    }

    /// Generates a directed path `0 -> 1 -> ... -> n-1`.
    pub fn directed_path(n:u32) -> EditGraph {
        EditGraph::chain(n, EdgeKind::Directed, false)
    }

    /// Generates a directed cycle `0 -> 1 -> ... -> n-1 -> 0`.
    pub fn directed_cycle(n:u32) -> EditGraph {
        EditGraph::chain(n, EdgeKind::Directed, true)
    }

    /// Generates a complete graph (clique) on `n` vertices.
    pub fn clique(n:u32) -> EditGraph {
        let mut res:EditGraph = EditGraph::with_capacity(n as usize);
        res.isolates(n);
        let mut e = 0;
        for u in 0..n {
            for v in (u+1)..n {
                res.link(e, u, v, 1.0, EdgeKind::Undirected);
                e += 1;
            }
        }

        res
    }

    /// Generates a complete bipartite graph (biclique) on `s`+`t` vertices. Fails with
    /// [GraphError::IdSpaceExhausted] if `s`+`t` does not fit into a [VertexId].
    pub fn biclique(s:u32, t:u32) -> Result<EditGraph> {
        let n = s.checked_add(t).ok_or(GraphError::IdSpaceExhausted{ entity: "vertex" })?;
        let mut res:EditGraph = EditGraph::with_capacity(n as usize);
        res.isolates(n);
        let mut e = 0;
        for u in 0..s {
            for v in s..n {
                res.link(e, u, v, 1.0, EdgeKind::Undirected);
                e += 1;
            }
        }

        Ok(res)
    }

    fn chain(n:u32, kind:EdgeKind, close:bool) -> EditGraph {
        let mut res:EditGraph = EditGraph::with_capacity(n as usize);
        res.isolates(n);
        for u in 1..n {
            res.link((u-1) as EdgeId, u-1, u, 1.0, kind);
        }
        if close && n > 0 {
            res.link((n-1) as EdgeId, n-1, 0, 1.0, kind);
        }

        res
    }

    fn isolates(&mut self, n:u32) {
        for u in 0..n {
            self.insert_vertex(Vertex::new(u, ()));
        }
    }

    fn link(&mut self, e:EdgeId, u:VertexId, v:VertexId, weight:f64, kind:EdgeKind) {
        for x in [u, v] {
            if !self.contains(x) {
                self.insert_vertex(Vertex::new(x, ()));
            }
        }
        self.insert_edge(Edge::new(e, u, v, weight, kind, ()));
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;

    /// Checks that edge endpoints exist and incident lists match the edge set exactly.
    fn assert_consistent<V, E>(G:&EditGraph<V, E>) {
        for edge in G.edges() {
            assert!(G.contains(edge.source()));
            assert!(G.contains(edge.target()));
        }
        for vertex in G.vertices() {
            let listed:EdgeSet = vertex.edge_ids().iter().cloned().collect();
            assert_eq!(listed.len(), vertex.edge_ids().len());
            let actual:EdgeSet = G.edges()
                                  .filter(|e| e.other(vertex.id()).is_some())
                                  .map(|e| e.id())
                                  .collect();
            assert_eq!(listed, actual);
        }
    }

    #[test]
    fn basic_operations() {
        let mut G:EditGraph = EditGraph::new();
        G.add_vertices(0..3).unwrap();
        assert_eq!(G.num_edges(), 0);

        let e01 = G.add_undirected_edge(0, 1, 1.0).unwrap();
        assert_eq!(G.degree(0).unwrap(), 1);
        assert_eq!(G.degree(1).unwrap(), 1);
        assert_eq!(G.degree(2).unwrap(), 0);
        assert_eq!(G.num_vertices(), 3);
        assert_eq!(G.num_edges(), 1);

        G.remove_edge(e01).unwrap();
        assert_eq!(G.degree(0).unwrap(), 0);
        assert_eq!(G.degree(1).unwrap(), 0);
        assert_eq!(G.num_edges(), 0);

        G.add_undirected_edge(0, 1, 1.0).unwrap();
        G.add_undirected_edge(0, 2, 1.0).unwrap();
        G.add_arc(1, 2, 1.0).unwrap();
        assert_eq!(G.degree(0).unwrap(), 2);
        assert_eq!(G.num_edges(), 3);
        assert_consistent(&G);

        G.remove_vertex(2).unwrap();
        assert_eq!(G.degree(0).unwrap(), 1);
        assert_eq!(G.num_vertices(), 2);
        assert_eq!(G.num_edges(), 1);
        assert_consistent(&G);

        G.remove_vertex(1).unwrap();
        assert_eq!(G.degree(0).unwrap(), 0);
        assert_eq!(G.num_vertices(), 1);
        assert_eq!(G.num_edges(), 0);

        G.remove_vertex(0).unwrap();
        assert!(G.is_empty());
        assert_eq!(G.num_edges(), 0);
    }

    #[test]
    fn id_allocation() {
        let mut G:EditGraph<u8, ()> = EditGraph::new();
        assert_eq!(G.add_vertex(0).unwrap(), 0);
        assert_eq!(G.add_vertex(1).unwrap(), 1);
        G.add_vertex_with_id(7, 7).unwrap();
        assert_eq!(G.add_vertex(8).unwrap(), 8);

        // Lower caller ids are fine as long as they are free
        G.add_vertex_with_id(3, 3).unwrap();
        assert_eq!(G.add_vertex(9).unwrap(), 9);

        assert_eq!(G.add_vertex_with_id(7, 0), Err(GraphError::DuplicateVertex(7)));

        // Removed ids are not handed out again
        G.remove_vertex(9).unwrap();
        assert_eq!(G.add_vertex(10).unwrap(), 10);

        let e = G.add_edge(0, 1, 1.0, EdgeKind::Undirected, ()).unwrap();
        assert_eq!(e, 0);
        G.add_edge_with_id(5, 1, 3, 1.0, EdgeKind::Directed, ()).unwrap();
        assert_eq!(G.add_edge(3, 7, 1.0, EdgeKind::Directed, ()).unwrap(), 6);
        assert_eq!(G.add_edge_with_id(5, 0, 1, 1.0, EdgeKind::Directed, ()), Err(GraphError::DuplicateEdge(5)));
    }

    #[test]
    fn id_exhaustion() {
        let mut G:EditGraph = EditGraph::new();
        G.add_vertex_with_id(VertexId::MAX, ()).unwrap();
        let err = G.add_vertex(()).unwrap_err();
        assert_eq!(err, GraphError::IdSpaceExhausted{ entity: "vertex" });
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        // Free ids can still be claimed explicitly
        G.add_vertex_with_id(0, ()).unwrap();
    }

    #[test]
    fn missing_entities() {
        let mut G:EditGraph = EditGraph::path(3);
        assert_eq!(G.vertex(5).unwrap_err(), GraphError::VertexNotFound(5));
        assert_eq!(G.edge(17).unwrap_err(), GraphError::EdgeNotFound(17));
        assert_eq!(G.add_undirected_edge(0, 9, 1.0), Err(GraphError::VertexNotFound(9)));
        assert_eq!(G.remove_vertex(9).unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(G.remove_edge(9).unwrap_err().kind(), ErrorKind::NotFound);
        assert!(G.set_vertex_weight(4, 1.0).is_err());
        assert_eq!(G.num_edges(), 2);
    }

    #[test]
    fn cascading_removal() {
        let mut G:EditGraph = EditGraph::new();
        G.add_vertices(0..4).unwrap();
        G.add_undirected_edge(0, 1, 1.0).unwrap();
        G.add_undirected_edge(0, 1, 2.0).unwrap();
        G.add_arc(2, 0, 1.0).unwrap();
        G.add_arc(0, 0, 1.0).unwrap();
        G.add_arc(2, 3, 1.0).unwrap();
        assert_eq!(G.degree(0).unwrap(), 4);
        assert_consistent(&G);

        let removed = G.remove_vertex(0).unwrap();
        assert_eq!(removed.edge_ids().len(), 4);
        assert_eq!(G.num_edges(), 1);
        assert_eq!(G.degree(1).unwrap(), 0);
        assert_eq!(G.degree(2).unwrap(), 1);
        assert_consistent(&G);
    }

    #[test]
    fn payloads_and_weights() {
        let mut G:EditGraph<String, u32> = EditGraph::new();
        let a = G.add_vertex("a".to_string()).unwrap();
        let b = G.add_vertex("b".to_string()).unwrap();
        let e = G.add_edge(a, b, -1.5, EdgeKind::Directed, 42).unwrap();

        assert_eq!(G.vertex(a).unwrap().weight(), 1.0);
        G.set_vertex_weight(a, 3.0).unwrap();
        assert_eq!(G.vertex(a).unwrap().weight(), 3.0);

        G.vertex_data_mut(b).unwrap().push('!');
        assert_eq!(G.vertex(b).unwrap().data(), "b!");

        *G.edge_data_mut(e).unwrap() += 1;
        G.set_edge_weight(e, 2.0).unwrap();
        let edge = G.edge(e).unwrap();
        assert_eq!((*edge.data(), edge.weight()), (43, 2.0));
    }

    #[test]
    fn equality() {
        let G = EditGraph::cycle(4);
        let mut H = G.clone();
        assert_eq!(G, H);

        let e = H.add_undirected_edge(0, 2, 1.0).unwrap();
        assert_ne!(G, H);
        H.remove_edge(e).unwrap();
        assert_eq!(G, H);

        H.set_edge_weight(0, 2.0).unwrap();
        assert_ne!(G, H);
    }

    #[test]
    fn generators() {
        let P = EditGraph::path(5);
        assert_eq!((P.num_vertices(), P.num_edges()), (5, 4));
        assert_consistent(&P);

        let C = EditGraph::cycle(5);
        assert_eq!((C.num_vertices(), C.num_edges()), (5, 5));
        assert_eq!(C.degree(0).unwrap(), 2);

        let K = EditGraph::clique(5);
        assert_eq!(K.num_edges(), 10);
        assert_consistent(&K);

        let B = EditGraph::biclique(2, 3).unwrap();
        assert_eq!((B.num_vertices(), B.num_edges()), (5, 6));
        assert_eq!(B.degree(0).unwrap(), 3);
        assert_eq!(B.degree(4).unwrap(), 2);
        assert_consistent(&B);

        let D = EditGraph::directed_cycle(3);
        assert_eq!(D.edge_kinds(), EdgeKinds::AllDirected);
        assert_eq!(D.traversals(2).unwrap().map(|(_, v)| v).collect::<Vec<_>>(), vec![0]);

        assert!(EditGraph::path(0).is_empty());
        assert_eq!(EditGraph::path(1).num_edges(), 0);

        // Counters continue after generated ids
        let mut P = EditGraph::path(3);
        assert_eq!(P.add_vertex(()).unwrap(), 3);
        assert_eq!(P.add_undirected_edge(0, 3, 1.0).unwrap(), 2);
    }

    #[test]
    fn biclique_size_limit() {
        let err = EditGraph::biclique(VertexId::MAX, 1).unwrap_err();
        assert_eq!(err, GraphError::IdSpaceExhausted{ entity: "vertex" });
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let B = EditGraph::biclique(0, 3).unwrap();
        assert_eq!((B.num_vertices(), B.num_edges()), (3, 0));
    }

    #[test]
    fn weighted_edges() {
        let G = EditGraph::from_weighted_edges(vec![(0, 1, 2.0), (1, 5, 0.5)], EdgeKind::Directed);
        assert_eq!(G.vertex_ids(), vec![0, 1, 5]);
        assert_eq!(G.edge(1).unwrap().endpoints(), (1, 5));
        assert_eq!(G.edge(1).unwrap().weight(), 0.5);
        assert_consistent(&G);
    }
}
