//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from I/O and routing errors.

/// Domain-level errors for connection validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Travel time must be positive
    #[error("connection time must be greater than zero")]
    ZeroTime,

    /// Comfort rating outside 1..=10
    #[error("comfort rating {0} is outside 1-10")]
    ComfortOutOfRange(u8),
}
