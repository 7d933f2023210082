use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the codec, the simulation and the reduction stages.
/// There is no local recovery: callers abort the run and report the message.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed graph or vertex-set file
    #[error("invalid input: {0}")]
    InputFormat(String),

    /// A count is outside its permitted bounds
    #[error("{what} must be between {min} and {max}, got {value}")]
    DomainConstraint {
        what: &'static str,
        min: usize,
        max: usize,
        value: usize,
    },

    /// A random walk reached a vertex without outgoing edges; the component
    /// passed to the simulator was not strongly connected
    #[error("the component is not strongly connected: a walk reached a vertex with out-degree 0")]
    NotStronglyConnected,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
