//! Dense edge-multiplicity matrices.
//!
//! Rows and columns are indexed by the graph's vertex ids in ascending order, mapped onto
//! `0..n`. Every edge adds one to both `[i][j]` and `[j][i]` regardless of its direction, so
//! the matrix is symmetric and parallel edges show up as entries larger than one. A
//! self-loop adds two to its diagonal cell.
use std::ops::Index;

use crate::error::{GraphError, Result};
use crate::graph::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    order: Vec<VertexId>,
    index: VertexMap<usize>,
    counts: Vec<Vec<u32>>,
}

impl AdjacencyMatrix {
    pub fn from_graph<G:Graph>(graph:&G) -> AdjacencyMatrix {
        let order = graph.vertex_ids();
        let index:VertexMap<usize> = order.iter().enumerate().map(|(i, u)| (*u, i)).collect();
        let n = order.len();
        let mut counts = vec![vec![0; n]; n];

        for edge in graph.edges() {
            if let (Some(&i), Some(&j)) = (index.get(&edge.source()), index.get(&edge.target())) {
                counts[i][j] += 1;
                counts[j][i] += 1;
            }
        }

        AdjacencyMatrix { order, index, counts }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The vertex id belonging to each row/column.
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    pub fn position(&self, u:VertexId) -> Result<usize> {
        self.index.get(&u).copied().ok_or(GraphError::VertexNotFound(u))
    }

    /// Number of edges between the vertices `u` and `v`.
    pub fn get(&self, u:VertexId, v:VertexId) -> Result<u32> {
        let i = self.position(u)?;
        let j = self.position(v)?;
        Ok(self.counts[i][j])
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.counts
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (i..n).all(|j| self.counts[i][j] == self.counts[j][i]))
    }
}

impl Index<(usize, usize)> for AdjacencyMatrix {
    type Output = u32;

    fn index(&self, (i, j):(usize, usize)) -> &u32 {
        &self.counts[i][j]
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
