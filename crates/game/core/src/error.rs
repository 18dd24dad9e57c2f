//! Common error infrastructure for battle-core.
//!
//! This module provides the shared classification used by every error type in
//! the crate. Domain-specific errors (e.g. [`crate::engine::ActionError`]) are
//! defined next to the operations they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure mode is its own variant, never a log line
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Visible Rejections**: Rejected actions are returned to the host, which
//!   shows them to the player

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: The action is illegal right now but may be retried later
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with the same action on a later turn.
    ///
    /// Examples: not the player's turn, special attack on cooldown
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: item cannot be used in battle, item stack is empty
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: inventory reported a count it could not honour
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
