//! Error types for the core rules.

/// Errors that can occur when building dice from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A die value outside 1-6.
    #[error("die value {0} is out of range (expected 1-6)")]
    PipOutOfRange(u32),

    /// A triplet string could not be parsed.
    #[error("invalid triplet: {0}")]
    InvalidTriplet(String),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
