use thiserror::Error;

/// Category of a failed graph operation, for callers that only branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidWeight,
    UnknownNode,
    NoPath,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A route was added with a negative distance.
    #[error("Invalid distance {weight} for route {from} -> {to}: distances must be non-negative.")]
    InvalidWeight { from: String, to: String, weight: i64 },

    /// The departure or destination airport is not part of the network.
    #[error("Invalid airport names.")]
    UnknownNode { start: String, end: String },

    /// Both airports exist but lie in different connected components.
    #[error("No path exists between {start} and {end}.")]
    NoPath { start: String, end: String },
}

impl RouteError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RouteError::InvalidWeight { .. } => FailureKind::InvalidWeight,
            RouteError::UnknownNode { .. } => FailureKind::UnknownNode,
            RouteError::NoPath { .. } => FailureKind::NoPath,
        }
    }
}
