/// Crate-wide result type.
///
/// Typed failures are raised as `VexError` and travel inside `anyhow::Error`;
/// callers that need the category downcast at the edge.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
