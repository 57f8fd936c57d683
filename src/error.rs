use thiserror::Error;

/// Errors raised while building a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("A graph needs at least one vertex")]
    InvalidVertexCount,

    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
}

/// Join vertex ids with arrows, e.g. `8 -> 4 -> 8`
pub fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GraphError>;
