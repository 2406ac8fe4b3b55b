use std::collections::TryReserveError;
use std::fmt;

/// Machine-readable error codes for scripted callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    InvalidArgument,
    IndexSpaceExhausted,
    AllocationFailure,
    CorruptGraph,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::InvalidArgument => "E2001",
            Self::IndexSpaceExhausted => "E2002",
            Self::AllocationFailure => "E5001",
            Self::CorruptGraph => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::InvalidArgument => "Invalid argument",
            Self::IndexSpaceExhausted => "Vertex index space exhausted",
            Self::AllocationFailure => "Memory allocation failed",
            Self::CorruptGraph => "Graph invariant violated",
        }
    }

    /// Optional remediation hint that can be surfaced to the user.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in graphgen/config.toml and retry."),
            Self::InvalidArgument => None,
            Self::IndexSpaceExhausted => {
                Some("Delete vertices first; a graph holds at most 65535 vertices.")
            }
            Self::AllocationFailure => Some("Free memory or work with a smaller graph."),
            Self::CorruptGraph => Some("Report a bug with the command history that led here."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors returned by graph store operations.
///
/// Out-of-range indices passed to `delete` and `connect` are not errors; those
/// operations report zero affected items instead.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A growth step could not obtain memory. The graph is unchanged.
    #[error("allocation failed while growing {what}")]
    AllocationFailure {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    /// Non-positive capacity, malformed operation code, or an index that
    /// does not name a live vertex.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Every usable 16-bit index is already taken by a live vertex.
    #[error("vertex index space exhausted ({max} vertices)")]
    IndexSpaceExhausted { max: usize },

    /// `check_invariants` found a broken data-model invariant.
    #[error("graph invariant violated: {0}")]
    Corrupt(String),
}

impl GraphError {
    pub(crate) fn invalid<T: Into<String>>(msg: T) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) const fn alloc(what: &'static str, source: TryReserveError) -> Self {
        Self::AllocationFailure { what, source }
    }

    /// The stable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::AllocationFailure { .. } => ErrorCode::AllocationFailure,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::IndexSpaceExhausted { .. } => ErrorCode::IndexSpaceExhausted,
            Self::Corrupt(_) => ErrorCode::CorruptGraph,
        }
    }

    /// Whether a caller should treat the error as unrecoverable.
    ///
    /// The store itself never aborts; this only encodes the shell's policy.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::InvalidArgument(_))
    }
}
