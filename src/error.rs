//! Error type shared by the graph container and the algorithms.
//!
//! Every failure maps onto one of three coarse kinds (see [ErrorKind]) so that callers
//! can tell a missing id apart from bad input or an unreachable target without matching
//! on every variant. Partial results of traversals (e.g. vertices that a shortest-path
//! search never reached) are not errors.

use crate::graph::{EdgeId, VertexId};

pub type Result<T> = std::result::Result<T, GraphError>;

/// The coarse classification of a [GraphError].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("vertex id {0} is already in use")]
    DuplicateVertex(VertexId),

    #[error("edge id {0} is already in use")]
    DuplicateEdge(EdgeId),

    /// Raised for weights below zero and for NaN weights.
    #[error("edge {edge} has unsupported negative weight {weight}")]
    NegativeWeight { edge: EdgeId, weight: f64 },

    #[error("unsupported mixed edge kind: graph contains directed and undirected edges")]
    MixedEdgeKinds,

    #[error("vertex {target} is unreachable from the source")]
    Unreachable { target: VertexId },

    #[error("no free {entity} ids left")]
    IdSpaceExhausted { entity: &'static str },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::VertexNotFound(_) | GraphError::EdgeNotFound(_) => ErrorKind::NotFound,
            GraphError::DuplicateVertex(_)
            | GraphError::DuplicateEdge(_)
            | GraphError::NegativeWeight { .. }
            | GraphError::MixedEdgeKinds
            | GraphError::IdSpaceExhausted { .. } => ErrorKind::InvalidInput,
            GraphError::Unreachable { .. } => ErrorKind::Unreachable,
        }
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
