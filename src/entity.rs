//! The records stored by a graph container.
//!
//! Both records carry a numeric id, a scalar weight and an arbitrary payload. Structural
//! fields (ids, endpoints, incident edge lists) can only be changed by the owning
//! container, which keeps them consistent with each other.

use crate::graph::{EdgeId, EdgeKind, VertexId};

/// A vertex together with the ids of all edges incident to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<V> {
    id: VertexId,
    weight: f64,
    edge_ids: Vec<EdgeId>,
    data: V,
}

impl<V> Vertex<V> {
    pub(crate) fn new(id:VertexId, data:V) -> Self {
        Vertex { id, weight: 1.0, edge_ids: Vec::new(), data }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The vertex cost. Defaults to `1.0` and is ignored by shortest-path search.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight:f64) {
        self.weight = weight;
    }

    /// Ids of incident edges in the order they were attached. A self-loop appears once.
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_ids
    }

    pub fn data(&self) -> &V {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut V {
        &mut self.data
    }

    pub fn into_data(self) -> V {
        self.data
    }

    /// Returns a copy of this vertex with an empty incident edge list, ready to be
    /// inserted into another graph which rebuilds the list from its own edges.
    pub fn detached(&self) -> Self where V: Clone {
        Vertex {
            id: self.id,
            weight: self.weight,
            edge_ids: Vec::new(),
            data: self.data.clone()
        }
    }

    pub(crate) fn attach(&mut self, e:EdgeId) {
        if !self.edge_ids.contains(&e) {
            self.edge_ids.push(e);
        }
    }

    pub(crate) fn detach(&mut self, e:EdgeId) {
        self.edge_ids.retain(|&x| x != e);
    }
}

/// An edge between `source` and `target`. Directed edges lead from `source` to `target`,
/// undirected ones can be traversed either way.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<E> {
    id: EdgeId,
    source: VertexId,
    target: VertexId,
    weight: f64,
    kind: EdgeKind,
    data: E,
}

impl<E> Edge<E> {
    pub(crate) fn new(id:EdgeId, source:VertexId, target:VertexId, weight:f64, kind:EdgeKind, data:E) -> Self {
        Edge { id, source, target, weight, kind, data }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.source, self.target)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight:f64) {
        self.weight = weight;
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == EdgeKind::Directed
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn data(&self) -> &E {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut E {
        &mut self.data
    }

    /// Returns the endpoint opposite to `u`, or `None` if `u` is not an endpoint.
    pub fn other(&self, u:VertexId) -> Option<VertexId> {
        if self.source == u {
            Some(self.target)
        } else if self.target == u {
            Some(self.source)
        } else {
            None
        }
    }

    /// Returns the vertex reached when leaving `u` along this edge, honouring direction:
    /// a directed edge can only be left from its source.
    pub fn traverse_from(&self, u:VertexId) -> Option<VertexId> {
        if self.source == u {
            Some(self.target)
        } else if self.target == u && self.kind == EdgeKind::Undirected {
            Some(self.source)
        } else {
            None
        }
    }

    /// Whether this edge leads from `u` to `v` under the direction rule.
    pub fn leads(&self, u:VertexId, v:VertexId) -> bool {
        (self.source == u && self.target == v)
            || (self.kind == EdgeKind::Undirected && self.source == v && self.target == u)
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
