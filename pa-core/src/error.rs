use crate::types::NodeId;
use thiserror::Error;

/// Errors raised when a caller breaks the growth contract.
///
/// Every operation that returns one of these leaves the network untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrowthError {
    #[error("network has not been seeded")]
    NotSeeded,

    #[error("network is already seeded")]
    AlreadySeeded,

    #[error("growth has finished; the network is read-only")]
    Finished,

    #[error("node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("self-loop on node {0}")]
    SelfLoop(NodeId),

    #[error("no candidate nodes to attach to")]
    NoCandidates,

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
