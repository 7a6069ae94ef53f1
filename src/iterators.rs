use crate::entity::{Edge, Vertex};
use crate::graph::{EdgeId, Graph, VertexId};

/*
    Iterator over the edges incident to a vertex `u` that can be used
    to leave `u`. At each step it returns a pair (e, v) where v is the
    vertex reached along e.
*/
pub struct Traversals<'a, G: Graph> {
    graph: &'a G,
    from: VertexId,
    edge_it: std::slice::Iter<'a, EdgeId>,
}

impl<'a, G: Graph> Traversals<'a, G> {
    pub fn new(graph: &'a G, vertex: &'a Vertex<G::VertexData>) -> Traversals<'a, G> {
        Traversals {
            graph,
            from: vertex.id(),
            edge_it: vertex.edge_ids().iter(),
        }
    }
}

impl<'a, G: Graph> Iterator for Traversals<'a, G> {
    type Item = (&'a Edge<G::EdgeData>, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        for e in self.edge_it.by_ref() {
            // Incident lists only ever reference live edges
            let edge = match self.graph.edge(*e) {
                Ok(edge) => edge,
                Err(_) => continue,
            };
            if let Some(v) = edge.traverse_from(self.from) {
                return Some((edge, v));
            }
        }

        None
    }
}

/*
    Iterator over all edges incident to a vertex `u`, regardless of
    direction. At each step it returns a pair (e, v) where v is the
    endpoint of e opposite to u (u itself for a loop).
*/
pub struct Incident<'a, G: Graph> {
    graph: &'a G,
    center: VertexId,
    edge_it: std::slice::Iter<'a, EdgeId>,
}

impl<'a, G: Graph> Incident<'a, G> {
    pub fn new(graph: &'a G, vertex: &'a Vertex<G::VertexData>) -> Incident<'a, G> {
        Incident {
            graph,
            center: vertex.id(),
            edge_it: vertex.edge_ids().iter(),
        }
    }
}

impl<'a, G: Graph> Iterator for Incident<'a, G> {
    type Item = (&'a Edge<G::EdgeData>, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        for e in self.edge_it.by_ref() {
            let edge = match self.graph.edge(*e) {
                Ok(edge) => edge,
                Err(_) => continue,
            };
            if let Some(v) = edge.other(self.center) {
                return Some((edge, v));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.edge_it.len()))
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
