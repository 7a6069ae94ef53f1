use fxhash::FxHashMap;

use crate::entity::Edge;
use crate::graph::*;

/// The possible results of comparing two graphs under the subgraph relation.
#[derive(Debug, PartialEq)]
pub enum SubgraphRel {
    Sub,
    Eq,
    Sup,
    Incomp
}

/// Compares graphs structurally. Vertices are matched by id and weight. Edges are matched
/// by endpoints, kind and weight irrespective of their ids, counting parallel edges with
/// multiplicity. Payloads are not compared.
pub trait SubgraphComparable<H> where H: Graph {
    fn compare_subgraph(&self, other:&H) -> SubgraphRel;
}

impl<G, H> SubgraphComparable<H> for G where G: Graph, H: Graph {
    fn compare_subgraph(&self, other:&H) -> SubgraphRel {
        let is_sub = contained_in(self, other);
        let is_super = contained_in(other, self);

        match (is_sub, is_super) {
            (true, true) => SubgraphRel::Eq,
            (true, false) => SubgraphRel::Sub,
            (false, true) => SubgraphRel::Sup,
            (false, false) => SubgraphRel::Incomp,
        }
    }
}

type EdgeKey = (VertexId, VertexId, EdgeKind, u64);

fn edge_key<E>(e:&Edge<E>) -> EdgeKey {
    let (u, v) = e.endpoints();
    let (u, v) = match e.kind() {
        EdgeKind::Directed => (u, v),
        EdgeKind::Undirected => (u.min(v), u.max(v)),
    };
    (u, v, e.kind(), e.weight().to_bits())
}

fn contained_in<G:Graph, H:Graph>(small:&G, large:&H) -> bool {
    let vertices = small.vertices().all(|x| {
        match large.vertex(x.id()) {
            Ok(y) => x.weight() == y.weight(),
            Err(_) => false
        }
    });
    if !vertices {
        return false
    }

    let mut available:FxHashMap<EdgeKey, usize> = FxHashMap::default();
    for f in large.edges() {
        *available.entry(edge_key(f)).or_insert(0) += 1;
    }

    small.edges().all(|e| {
        match available.get_mut(&edge_key(e)) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            },
            _ => false
        }
    })
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
