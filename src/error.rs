use thiserror::Error;

/// errors reported by graph construction and shortest path queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {

    /// a vertex key was referenced before being registered
    #[error("vertex not found: {0}")]
    VertexNotFound(String),
}
