#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),

    #[error("Include path contains no segments")]
    EmptyIncludePath,
}
