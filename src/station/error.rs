use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StationError {
    #[error("Expected {expected} horizon elevations, got: {actual}")]
    InvalidArgument { expected: usize, actual: usize },
}
