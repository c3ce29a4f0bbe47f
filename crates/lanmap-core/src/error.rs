/// Errors that can occur within the core graph model.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("invalid edge {origin} -> {destination}: {reason}")]
    InvalidEdge {
        origin: String,
        destination: String,
        reason: String,
    },
}
