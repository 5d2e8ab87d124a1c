//! Benchmark setup error type.

use graphkit_core::GraphError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building a graph or running an algorithm failed.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
}
