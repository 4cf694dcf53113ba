use thiserror::Error;

/// Recoverable error conditions signaled by a collaborator service or by
/// input validation. Every fault is handled at its call site and surfaced to
/// the user as readable text; none of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// The remote service rejected the request and said why.
    #[error("{0}")]
    Service(String),

    /// The request never got a usable response (connect failure, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The response arrived but did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Protocol(String),

    /// Input rejected before any network call was made.
    #[error("{0}")]
    Invalid(String),

    /// An operation that needs a signed-in user was called without one.
    #[error("Not signed in")]
    NotAuthenticated,
}

impl From<Fault> for String {
    fn from(fault: Fault) -> Self {
        fault.to_string()
    }
}
