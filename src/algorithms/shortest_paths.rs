//! Single-source shortest paths over non-negative edge weights.
//!
//! [dijkstra] settles vertices in order of increasing tentative distance; among vertices
//! with equal distance the one with the smallest id is settled first. When no unsettled
//! vertex with a finite tentative distance is left the search stops, so vertices that are
//! not reachable from the source simply end up without a distance. A vertex is only
//! reached along a path of finite total weight, so infinite weights act like missing edges. Edges are followed in
//! direction `source -> target`, undirected edges also in reverse.
//!
//! The result is a [ShortestPathLookup] which borrows the graph and rebuilds concrete
//! paths on request.
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::entity::Edge;
use crate::error::{GraphError, Result};
use crate::graph::*;

/// Frontier entry. The ordering is reversed so that a max-heap yields the smallest
/// distance first, and on equal distances the smallest vertex id.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tentative {
    dist: f64,
    vertex: VertexId,
}

impl Eq for Tentative {}

impl Ord for Tentative {
    fn cmp(&self, other:&Self) -> Ordering {
        other.dist.total_cmp(&self.dist)
             .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Tentative {
    fn partial_cmp(&self, other:&Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes shortest distances from `source` to every vertex reachable from it.
///
/// Fails with [GraphError::VertexNotFound] if `source` is not in the graph and with
/// [GraphError::NegativeWeight] if any edge of the graph has a negative (or NaN) weight,
/// whether or not that edge could lie on a shortest path.
pub fn dijkstra<G:Graph>(graph:&G, source:VertexId) -> Result<ShortestPathLookup<'_, G>> {
    if !graph.contains(source) {
        return Err(GraphError::VertexNotFound(source));
    }

    // NaN fails this check as well
    if let Some(edge) = graph.edges().filter(|e| !(e.weight() >= 0.0)).min_by_key(|e| e.id()) {
        debug!(edge = edge.id(), weight = edge.weight(), "rejecting negative edge weight");
        return Err(GraphError::NegativeWeight{ edge: edge.id(), weight: edge.weight() });
    }

    let mut distances:VertexMap<f64> = VertexMap::default();
    let mut backtrace:VertexMap<VertexId> = VertexMap::default();
    let mut settled = VertexSet::default();
    let mut frontier = BinaryHeap::new();

    distances.insert(source, 0.0);
    frontier.push(Tentative{ dist: 0.0, vertex: source });

    while let Some(Tentative{ dist, vertex: u }) = frontier.pop() {
        if !settled.insert(u) {
            // Outdated entry, u was settled with a smaller distance
            continue;
        }

        for (edge, v) in graph.traversals(u)? {
            if settled.contains(&v) {
                continue;
            }
            let alt = dist + edge.weight();
            if !alt.is_finite() {
                // Infinite weights (or sums overflowing to infinity) do not reach v
                trace!(edge = edge.id(), "skipping edge with infinite path length");
                continue;
            }
            if distances.get(&v).map_or(true, |&known| alt < known) {
                distances.insert(v, alt);
                backtrace.insert(v, u);
                frontier.push(Tentative{ dist: alt, vertex: v });
            }
        }
    }

    if settled.len() < graph.num_vertices() {
        debug!(reached = settled.len(), total = graph.num_vertices(), "frontier exhausted before all vertices were reached");
    }

    Ok(ShortestPathLookup { graph, source, backtrace, distances })
}

/// The outcome of one shortest-path search from a fixed source.
///
/// The lookup holds a shared borrow of the graph it was computed on, so the graph
/// cannot be modified while the lookup is alive.
pub struct ShortestPathLookup<'g, G:Graph> {
    graph: &'g G,
    source: VertexId,
    backtrace: VertexMap<VertexId>,
    distances: VertexMap<f64>,
}

impl<'g, G:Graph> fmt::Debug for ShortestPathLookup<'g, G> {
    fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortestPathLookup")
         .field("source", &self.source)
         .field("backtrace", &self.backtrace)
         .field("distances", &self.distances)
         .finish()
    }
}

impl<'g, G:Graph> ShortestPathLookup<'g, G> {
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Length of a shortest path from the source to `target`. Returns positive
    /// infinity if `target` was not reached (or is not part of the graph).
    pub fn path_length_to(&self, target:VertexId) -> f64 {
        self.distances.get(&target).copied().unwrap_or(f64::INFINITY)
    }

    pub fn is_reachable(&self, target:VertexId) -> bool {
        self.distances.contains_key(&target)
    }

    /// The vertex preceding `target` on its shortest path, `None` for the source and
    /// for unreached vertices.
    pub fn predecessor(&self, target:VertexId) -> Option<VertexId> {
        self.backtrace.get(&target).copied()
    }

    /// All reached vertices with their distance, in ascending order of vertex id.
    pub fn distances(&self) -> impl Iterator<Item=(VertexId, f64)> + '_ {
        self.distances.iter()
                      .map(|(u, d)| (*u, *d))
                      .sorted_by_key(|(u, _)| *u)
    }

    /// The vertices of a shortest path from the source to `target`, both included.
    pub fn vertices_to(&self, target:VertexId) -> Result<Vec<VertexId>> {
        if !self.graph.contains(target) {
            return Err(GraphError::VertexNotFound(target));
        }

        let mut res = vec![target];
        let mut curr = target;
        while curr != self.source {
            curr = self.predecessor(curr).ok_or(GraphError::Unreachable{ target })?;
            res.push(curr);
        }
        res.reverse();

        Ok(res)
    }

    /// The edges of a shortest path from the source to `target`, in walking order. The
    /// path to the source itself is empty.
    ///
    /// The path is rebuilt from the predecessor of each vertex. If several edges lead from
    /// a predecessor to its successor, the one with the smallest weight is chosen (then the
    /// smallest id), which need not be the edge that was relaxed during the search. The
    /// total weight is the same either way.
    pub fn path_to(&self, target:VertexId) -> Result<Vec<&'g Edge<G::EdgeData>>> {
        let vertices = self.vertices_to(target)?;
        let graph = self.graph;

        let mut res = Vec::with_capacity(vertices.len().saturating_sub(1));
        for (u, v) in vertices.into_iter().tuple_windows() {
            let edge = graph.traversals(u)?
                            .filter(|(_, w)| *w == v)
                            .map(|(e, _)| e)
                            .min_by(|a, b| a.weight().total_cmp(&b.weight()).then(a.id().cmp(&b.id())))
                            .ok_or(GraphError::Unreachable{ target })?;
            res.push(edge);
        }

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

#[cfg(test)]
mod test {
    use super::*;
    use crate::editgraph::EditGraph;
    use crate::error::ErrorKind;

    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    /// Shortest distance over all simple paths, by exhaustive search.
    fn brute_force<G:Graph>(graph:&G, source:VertexId) -> VertexMap<f64> {
        fn explore<G:Graph>(graph:&G, u:VertexId, dist:f64, on_path:&mut VertexSet, best:&mut VertexMap<f64>) {
            let entry = best.entry(u).or_insert(f64::INFINITY);
            if dist < *entry {
                *entry = dist;
            }
            for (edge, v) in graph.traversals(u).unwrap() {
                if on_path.insert(v) {
                    explore(graph, v, dist + edge.weight(), on_path, best);
                    on_path.remove(&v);
                }
            }
        }

        let mut best = VertexMap::default();
        let mut on_path = VertexSet::default();
        on_path.insert(source);
        explore(graph, source, 0.0, &mut on_path, &mut best);
        best
    }

    fn random_graph(rng:&mut ChaCha8Rng, n:u32, m:usize) -> EditGraph {
        let mut G:EditGraph = EditGraph::new();
        G.add_vertices(0..n).unwrap();
        for _ in 0..m {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            let w = rng.gen_range(0..10) as f64;
            let kind = if rng.gen_bool(0.5) { EdgeKind::Directed } else { EdgeKind::Undirected };
            G.add_edge(u, v, w, kind, ()).unwrap();
        }
        G
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let n = rng.gen_range(1..8);
            let m = rng.gen_range(0..14);
            let G = random_graph(&mut rng, n, m);
            let source = rng.gen_range(0..n);

            let lookup = dijkstra(&G, source).unwrap();
            let expected = brute_force(&G, source);

            for u in G.vertex_ids() {
                let dist = lookup.path_length_to(u);
                match expected.get(&u) {
                    Some(d) => {
                        assert_eq!(dist, *d);
                        let path = lookup.path_to(u).unwrap();
                        let total:f64 = path.iter().map(|e| e.weight()).sum();
                        assert_eq!(total, dist);
                    },
                    None => {
                        assert_eq!(dist, f64::INFINITY);
                        assert_eq!(lookup.path_to(u).unwrap_err().kind(), ErrorKind::Unreachable);
                    }
                }
            }
        }
    }

    #[test]
    fn source_path_is_empty() {
        let G = EditGraph::cycle(4);
        let lookup = dijkstra(&G, 2).unwrap();
        assert_eq!(lookup.source(), 2);
        assert_eq!(lookup.path_length_to(2), 0.0);
        assert!(lookup.path_to(2).unwrap().is_empty());
        assert_eq!(lookup.vertices_to(2).unwrap(), vec![2]);
        assert_eq!(lookup.predecessor(2), None);
    }

    #[test]
    fn weighted_example() {
        //      1       2
        //  0 ----- 1 ----- 3
        //  |               |
        //  +------ 2 ------+
        //      1       1
        let G = EditGraph::from_weighted_edges(
            vec![(0, 1, 1.0), (1, 3, 2.0), (0, 2, 1.0), (2, 3, 1.0)], EdgeKind::Undirected);
        let lookup = dijkstra(&G, 0).unwrap();

        assert_eq!(lookup.path_length_to(3), 2.0);
        assert_eq!(lookup.vertices_to(3).unwrap(), vec![0, 2, 3]);
        let ids:Vec<EdgeId> = lookup.path_to(3).unwrap().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![2, 3]);

        let dists:Vec<(VertexId, f64)> = lookup.distances().collect();
        assert_eq!(dists, vec![(0, 0.0), (1, 1.0), (2, 1.0), (3, 2.0)]);
    }

    #[test]
    fn directed_edges_are_one_way() {
        let G = EditGraph::directed_path(3);
        let lookup = dijkstra(&G, 1).unwrap();

        assert_eq!(lookup.path_length_to(2), 1.0);
        assert_eq!(lookup.path_length_to(0), f64::INFINITY);
        assert!(!lookup.is_reachable(0));
        assert_eq!(lookup.path_to(0).unwrap_err(), GraphError::Unreachable{ target: 0 });
    }

    #[test]
    fn disconnected_graph() {
        let mut G:EditGraph = EditGraph::new();
        G.add_vertices(0..4).unwrap();
        G.add_undirected_edge(0, 1, 3.0).unwrap();
        G.add_undirected_edge(2, 3, 1.0).unwrap();

        let lookup = dijkstra(&G, 0).unwrap();
        assert_eq!(lookup.path_length_to(1), 3.0);
        assert_eq!(lookup.path_length_to(2), f64::INFINITY);
        assert_eq!(lookup.path_length_to(3), f64::INFINITY);
        assert_eq!(lookup.distances().count(), 2);

        // Ids outside the graph
        assert_eq!(lookup.path_length_to(99), f64::INFINITY);
        assert_eq!(lookup.path_to(99).unwrap_err(), GraphError::VertexNotFound(99));
    }

    #[test]
    fn infinite_lengths_are_unreachable() {
        let mut G:EditGraph = EditGraph::new();
        G.add_vertices(0..4).unwrap();
        G.add_arc(0, 1, f64::INFINITY).unwrap();
        G.add_arc(0, 2, f64::MAX).unwrap();
        G.add_arc(2, 1, f64::MAX).unwrap();
        G.add_undirected_edge(0, 3, 2.0).unwrap();

        let lookup = dijkstra(&G, 0).unwrap();
        assert_eq!(lookup.path_length_to(2), f64::MAX);
        assert_eq!(lookup.path_length_to(3), 2.0);

        assert_eq!(lookup.path_length_to(1), f64::INFINITY);
        assert!(!lookup.is_reachable(1));
        assert_eq!(lookup.predecessor(1), None);
        assert_eq!(lookup.path_to(1).unwrap_err(), GraphError::Unreachable{ target: 1 });

        // Infinite length and failing reconstruction always go together
        for u in G.vertex_ids() {
            let infinite = lookup.path_length_to(u) == f64::INFINITY;
            assert_eq!(infinite, !lookup.is_reachable(u));
            assert_eq!(infinite, lookup.path_to(u).is_err());
        }
        assert_eq!(lookup.distances().count(), 3);
    }

    #[test]
    fn cheapest_parallel_edge() {
        let mut G:EditGraph = EditGraph::new();
        G.add_vertices(0..2).unwrap();
        G.add_undirected_edge(0, 1, 5.0).unwrap();
        let cheap = G.add_undirected_edge(1, 0, 2.0).unwrap();
        G.add_undirected_edge(0, 1, 2.0).unwrap();
        G.add_arc(0, 1, 1.0).unwrap();
        G.add_arc(1, 0, 0.5).unwrap();

        let lookup = dijkstra(&G, 0).unwrap();
        assert_eq!(lookup.path_length_to(1), 1.0);
        let path = lookup.path_to(1).unwrap();
        assert_eq!(path.len(), 1);
        assert!(path[0].is_directed());
        assert_eq!(path[0].endpoints(), (0, 1));

        // Without the arc the cheaper of the two equal undirected edges has the lower id
        let mut H = G.clone();
        H.remove_edge(3).unwrap();
        let lookup = dijkstra(&H, 0).unwrap();
        assert_eq!(lookup.path_to(1).unwrap()[0].id(), cheap);
    }

    #[test]
    fn equal_distances_settle_lowest_id() {
        // 0 reaches 1 and 2 at the same cost; both lead to 3 at the same cost.
        // Vertex 1 is settled first and becomes the predecessor of 3.
        let mut G:EditGraph = EditGraph::new();
        G.add_vertices(0..4).unwrap();
        G.add_arc(0, 2, 1.0).unwrap();
        G.add_arc(0, 1, 1.0).unwrap();
        G.add_arc(2, 3, 1.0).unwrap();
        G.add_arc(1, 3, 1.0).unwrap();

        let lookup = dijkstra(&G, 0).unwrap();
        assert_eq!(lookup.predecessor(3), Some(1));
    }

    #[test]
    fn rejects_negative_weights() {
        let mut G:EditGraph = EditGraph::new();
        G.add_vertices(0..4).unwrap();
        G.add_undirected_edge(0, 1, 1.0).unwrap();
        // Not reachable from 0, but still rejected
        let bad = G.add_arc(2, 3, -0.5).unwrap();

        let err = dijkstra(&G, 0).unwrap_err();
        assert_eq!(err, GraphError::NegativeWeight{ edge: bad, weight: -0.5 });
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        G.set_edge_weight(bad, f64::NAN).unwrap();
        assert_eq!(dijkstra(&G, 0).unwrap_err().kind(), ErrorKind::InvalidInput);

        G.set_edge_weight(bad, 0.0).unwrap();
        assert!(dijkstra(&G, 0).is_ok());
    }

    #[test]
    fn unknown_source() {
        let G = EditGraph::path(2);
        let err = dijkstra(&G, 5).unwrap_err();
        assert_eq!(err, GraphError::VertexNotFound(5));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
