//! Error types for the graphkit core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by graph construction, union-find and shortest-path
/// queries.
///
/// Elements and nodes are caller-supplied types, so they are captured in
/// their [`Debug`] rendering.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An operation referenced an element outside the known universe.
    #[error("element `{element}` is not part of the universe")]
    UnknownElement {
        /// Debug rendering of the unknown element.
        element: Arc<str>,
    },
    /// The element sequence supplied at construction repeated an element.
    #[error("element `{element}` appears more than once")]
    DuplicateElement {
        /// Debug rendering of the repeated element.
        element: Arc<str>,
    },
    /// An edge carried a weight that is NaN or infinite.
    #[error("edge ({origin}, {destination}) has non-finite weight")]
    NonFiniteWeight {
        /// Debug rendering of the edge origin.
        origin: Arc<str>,
        /// Debug rendering of the edge destination.
        destination: Arc<str>,
    },
    /// An edge carried a negative weight where only non-negative weights are
    /// accepted.
    #[error("edge ({origin}, {destination}) has negative weight {weight}")]
    NegativeWeight {
        /// Debug rendering of the edge origin.
        origin: Arc<str>,
        /// Debug rendering of the edge destination.
        destination: Arc<str>,
        /// Debug rendering of the offending weight.
        weight: Arc<str>,
    },
    /// The sum of all edge weights does not fit in the weight type, so no
    /// unreachable sentinel can be chosen.
    #[error("sum of {edges} edge weights overflows the weight type")]
    WeightOverflow {
        /// Number of edges in the offending graph.
        edges: usize,
    },
    /// The graph has more nodes than the configured limit.
    #[error("graph has {nodes} nodes but the configured limit is {limit}")]
    TooManyNodes {
        /// Number of nodes in the graph.
        nodes: usize,
        /// Configured node limit.
        limit: usize,
    },
    /// A node limit of zero was configured.
    #[error("max_nodes must be at least 1 (got {got})")]
    InvalidMaxNodes {
        /// The invalid limit supplied by the caller.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An operation referenced an element outside the known universe.
        UnknownElement => UnknownElement { .. } => "GRAPH_UNKNOWN_ELEMENT",
        /// The element sequence supplied at construction repeated an element.
        DuplicateElement => DuplicateElement { .. } => "GRAPH_DUPLICATE_ELEMENT",
        /// An edge carried a weight that is NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// An edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// The sum of all edge weights overflows the weight type.
        WeightOverflow => WeightOverflow { .. } => "GRAPH_WEIGHT_OVERFLOW",
        /// The graph has more nodes than the configured limit.
        TooManyNodes => TooManyNodes { .. } => "GRAPH_TOO_MANY_NODES",
        /// A node limit of zero was configured.
        InvalidMaxNodes => InvalidMaxNodes { .. } => "GRAPH_INVALID_MAX_NODES",
    }
}

impl GraphError {
    pub(crate) fn unknown_element(element: &impl fmt::Debug) -> Self {
        Self::UnknownElement {
            element: render(element),
        }
    }

    pub(crate) fn duplicate_element(element: &impl fmt::Debug) -> Self {
        Self::DuplicateElement {
            element: render(element),
        }
    }

    /// Returns `true` when the error reports an element outside the universe.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownElement { .. })
    }
}

pub(crate) fn render(value: &impl fmt::Debug) -> Arc<str> {
    Arc::from(format!("{value:?}"))
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
