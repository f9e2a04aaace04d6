//! Common error infrastructure for bowling-core.
//!
//! Domain-specific errors (`ThrowParseError`, `FrameError`, `EngineError`,
//! `CorrectionError`) live next to the rules they enforce. This module holds
//! the shared classification every one of them implements.
//!
//! # Taxonomy
//!
//! - **Recoverable**: bad input for the current throw; the caller re-prompts.
//! - **Validation**: a rejected frame correction; stored data is untouched.
//! - **Pending**: a score that cannot be computed yet. Not a failure.
//! - **Internal**: the caller drove the engine past its terminal state.

/// Severity level of an error, used for recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Input rejected for the current throw; retry with a different token.
    Recoverable,

    /// A full frame violates the rules; the edit is refused.
    Validation,

    /// A value is not available yet (lookahead throws missing).
    Pending,

    /// The caller misused the API, e.g. submitting after the game ended.
    Internal,
}

impl ErrorSeverity {
    /// Returns true if the caller should simply ask again.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Pending)
    }

    /// Returns true if this error indicates a bug in the caller.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all bowling-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
