//! Error types for the spreadsim core library.
//!
//! Defines error enums exposed by the public API, their stable codes, and a
//! convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing a graph adapter.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint referenced a node outside the graph.
    #[error("node {node} is out of bounds for a graph with {node_count} nodes")]
    NodeOutOfBounds {
        /// The offending node index.
        node: usize,
        /// Number of nodes in the graph under construction.
        node_count: usize,
    },
    /// A flat adjacency matrix did not hold `node_count²` cells.
    #[error("adjacency matrix has {cells} cells but {node_count} nodes need a square matrix")]
    DimensionMismatch {
        /// Number of cells supplied by the caller.
        cells: usize,
        /// Number of nodes implied by the caller.
        node_count: usize,
    },
    /// The adjacency relation listed `from -> to` without `to -> from`.
    #[error("adjacency is not symmetric: {from} lists {to} but not the reverse")]
    AsymmetricAdjacency {
        /// Node whose neighbour list contains `to`.
        from: usize,
        /// Node missing the reverse entry.
        to: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint referenced a node outside the graph.
        NodeOutOfBounds => NodeOutOfBounds { .. } => "GRAPH_NODE_OUT_OF_BOUNDS",
        /// A flat adjacency matrix was not square.
        DimensionMismatch => DimensionMismatch { .. } => "GRAPH_DIMENSION_MISMATCH",
        /// The adjacency relation was not symmetric.
        AsymmetricAdjacency => AsymmetricAdjacency { .. } => "GRAPH_ASYMMETRIC_ADJACENCY",
    }
}

/// An error produced when topology generator parameters are invalid.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// The generator needs more nodes than were requested.
    #[error("generator requires at least {minimum} nodes (got {got})")]
    TooFewNodes {
        /// Smallest node count the generator accepts.
        minimum: usize,
        /// Node count supplied by the caller.
        got: usize,
    },
    /// An edge or rewiring probability fell outside `[0, 1]`.
    #[error("{parameter} must lie within [0, 1] (got {got})")]
    InvalidProbability {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value supplied by the caller.
        got: f64,
    },
    /// Preferential attachment needs `1 <= m < n`.
    #[error("attachment edges must satisfy 1 <= m < n (m = {edges}, n = {nodes})")]
    InvalidAttachment {
        /// Edges added per new node.
        edges: usize,
        /// Total node count.
        nodes: usize,
    },
    /// The ring lattice neighbourhood must be smaller than the node count.
    #[error("lattice neighbourhood must satisfy k < n (k = {neighbours}, n = {nodes})")]
    InvalidNeighbourhood {
        /// Neighbours joined per node before rewiring.
        neighbours: usize,
        /// Total node count.
        nodes: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The generator needs more nodes than were requested.
        TooFewNodes => TooFewNodes { .. } => "GENERATOR_TOO_FEW_NODES",
        /// An edge or rewiring probability fell outside `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "GENERATOR_INVALID_PROBABILITY",
        /// Preferential attachment parameters were inconsistent.
        InvalidAttachment => InvalidAttachment { .. } => "GENERATOR_INVALID_ATTACHMENT",
        /// Ring lattice parameters were inconsistent.
        InvalidNeighbourhood => InvalidNeighbourhood { .. } => "GENERATOR_INVALID_NEIGHBOURHOOD",
    }
}

/// Error type produced by seed selection, simulation, and experiments.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SpreadError {
    /// Seed selection was asked to pick from a graph with no nodes.
    #[error("cannot select a seed from an empty graph")]
    EmptyGraph,
    /// The seeding strategy tag was not recognised.
    #[error("unknown seeding strategy `{tag}`; expected `random` or `hub`")]
    UnknownStrategy {
        /// Raw tag supplied by the caller.
        tag: Arc<str>,
    },
    /// The starting node is not a member of the graph.
    #[error("start node {node} is not a member of the graph")]
    UnknownStartNode {
        /// Debug rendering of the rejected node.
        node: Arc<str>,
    },
    /// Infection probability fell outside `[0, 1]`.
    #[error("infection probability must lie within [0, 1] (got {got})")]
    InvalidProbability {
        /// Probability supplied by the caller.
        got: f64,
    },
    /// The round cap must be at least one.
    #[error("max_rounds must be at least 1 (got {got})")]
    InvalidMaxRounds {
        /// Round cap supplied by the caller.
        got: usize,
    },
    /// A graph adapter rejected its input.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// A topology generator rejected its parameters.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

define_error_codes! {
    /// Stable codes describing [`SpreadError`] variants.
    enum SpreadErrorCode for SpreadError {
        /// Seed selection was asked to pick from a graph with no nodes.
        EmptyGraph => EmptyGraph => "SPREADSIM_EMPTY_GRAPH",
        /// The seeding strategy tag was not recognised.
        UnknownStrategy => UnknownStrategy { .. } => "SPREADSIM_UNKNOWN_STRATEGY",
        /// The starting node is not a member of the graph.
        UnknownStartNode => UnknownStartNode { .. } => "SPREADSIM_UNKNOWN_START_NODE",
        /// Infection probability fell outside `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "SPREADSIM_INVALID_PROBABILITY",
        /// The round cap must be at least one.
        InvalidMaxRounds => InvalidMaxRounds { .. } => "SPREADSIM_INVALID_MAX_ROUNDS",
        /// A graph adapter rejected its input.
        GraphFailure => Graph(..) => "SPREADSIM_GRAPH_FAILURE",
        /// A topology generator rejected its parameters.
        GeneratorFailure => Generator(..) => "SPREADSIM_GENERATOR_FAILURE",
    }
}

impl SpreadError {
    /// Reports whether the error stems from a caller-supplied argument that
    /// failed validation.
    ///
    /// # Examples
    /// ```
    /// use spreadsim_core::SpreadError;
    ///
    /// assert!(SpreadError::InvalidMaxRounds { got: 0 }.is_invalid_argument());
    /// ```
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::Graph(_) | Self::Generator(_))
    }

    /// Retrieve the inner [`GraphErrorCode`] when the error originated in a
    /// graph adapter.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`GeneratorErrorCode`] when the error originated in
    /// a topology generator.
    #[must_use]
    pub const fn generator_code(&self) -> Option<GeneratorErrorCode> {
        match self {
            Self::Generator(error) => Some(error.code()),
            _ => None,
        }
    }

    pub(crate) fn unknown_start_node(node: &impl fmt::Debug) -> Self {
        Self::UnknownStartNode {
            node: Arc::from(format!("{node:?}")),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SpreadError>;
