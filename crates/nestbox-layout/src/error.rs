// ABOUTME: Error type for layout computation and request parsing.

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid layout tree: {0}")]
    InvalidLayoutTree(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LayoutError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        LayoutError::InvalidLayoutTree(msg.into())
    }
}
