//! The two-branch [`Outcome`] sum type and its combinators.
//!
//! Exactly one variant is active for the lifetime of a value. Combinators
//! consume the outcome and preserve the failure branch unchanged: `map` and
//! `and_then` never run their transform on a failure, `fold` invokes
//! exactly one of its two branches, and `get_or_else` falls back to a
//! supplier rather than exposing the error.

use std::fmt;

use crate::codes;

/// Alias for outcomes whose error payload is a rendered message.
///
/// This is the shape returned by the routing tree's resolution entry
/// point, where the caller only needs the human-readable description.
pub type OutcomeMsg<T> = Outcome<T, String>;

/// Container for a success value or a typed error, annotated with a
/// status code and message.
///
/// # Example
///
/// ```
/// use switchyard_outcome::{Outcome, codes};
///
/// let outcome: Outcome<&str, String> = Outcome::success("ready");
/// assert!(outcome.is_success());
/// assert_eq!(outcome.code(), codes::SUCCESS);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// The operation concluded with a value.
    Success {
        /// The produced value.
        value: T,
        /// Status code, [`codes::SUCCESS`] unless set explicitly.
        code: i32,
        /// Optional human-readable note, empty unless set explicitly.
        msg: String,
    },
    /// The operation concluded with an error.
    Failure {
        /// The error payload.
        error: E,
        /// Status code, [`codes::FAILURE`] unless set explicitly.
        code: i32,
        /// Human-readable description of the failure.
        msg: String,
    },
}

impl<T, E> Outcome<T, E> {
    /// Creates a success with the canonical code and an empty message.
    #[must_use]
    pub fn success(value: T) -> Self {
        Self::Success {
            value,
            code: codes::SUCCESS,
            msg: String::new(),
        }
    }

    /// Creates a success with an explicit code and message.
    #[must_use]
    pub fn success_with(value: T, code: i32, msg: impl Into<String>) -> Self {
        Self::Success {
            value,
            code,
            msg: msg.into(),
        }
    }

    /// Creates a failure with an explicit code and message.
    #[must_use]
    pub fn failure(error: E, code: i32, msg: impl Into<String>) -> Self {
        Self::Failure {
            error,
            code,
            msg: msg.into(),
        }
    }

    /// Returns `true` when the success branch is active.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the status code of the active branch.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Success { code, .. } | Self::Failure { code, .. } => *code,
        }
    }

    /// Returns the message of the active branch.
    #[must_use]
    pub const fn msg(&self) -> &str {
        match self {
            Self::Success { msg, .. } | Self::Failure { msg, .. } => msg.as_str(),
        }
    }

    /// Returns the success value, or `None` on the failure branch.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the error payload, or `None` on the success branch.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    /// Transforms the success value, preserving its code and message.
    ///
    /// A failure passes through unchanged and `f` is not invoked.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success { value, code, msg } => Outcome::Success {
                value: f(value),
                code,
                msg,
            },
            Self::Failure { error, code, msg } => Outcome::Failure { error, code, msg },
        }
    }

    /// Replaces the whole outcome with the result of `f` on success.
    ///
    /// A failure passes through unchanged and `f` is not invoked.
    #[must_use]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success { value, .. } => f(value),
            Self::Failure { error, code, msg } => Outcome::Failure { error, code, msg },
        }
    }

    /// Collapses both branches into a common type.
    ///
    /// Exactly one of `on_success` and `on_error` is invoked, matching the
    /// active branch.
    pub fn fold<U, S, F>(self, on_success: S, on_error: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Success { value, .. } => on_success(value),
            Self::Failure { error, .. } => on_error(error),
        }
    }

    /// Returns the success value, or the supplier's fallback on failure.
    #[must_use]
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success { value, .. } => value,
            Self::Failure { .. } => f(),
        }
    }

    /// Converts into a plain [`Result`], discarding code and message.
    ///
    /// # Errors
    ///
    /// Returns the error payload when the failure branch is active.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success { value, .. } => Ok(value),
            Self::Failure { error, .. } => Err(error),
        }
    }
}

impl<T> Outcome<T, String> {
    /// Creates a bad-request failure whose error payload is the message.
    #[must_use]
    pub fn bad_request(msg: impl Into<String>) -> Self {
        let text = msg.into();
        Self::Failure {
            error: text.clone(),
            code: codes::BAD_REQUEST,
            msg: text,
        }
    }

    /// Creates a not-found failure whose error payload is the message.
    #[must_use]
    pub fn not_found(msg: impl Into<String>) -> Self {
        let text = msg.into();
        Self::Failure {
            error: text.clone(),
            code: codes::NOT_FOUND,
            msg: text,
        }
    }

    /// Creates a generic failure whose error payload is the message.
    #[must_use]
    pub fn unexpected(msg: impl Into<String>) -> Self {
        let text = msg.into();
        Self::Failure {
            error: text.clone(),
            code: codes::FAILURE,
            msg: text,
        }
    }

    /// Runs `f`, wrapping a fault's rendering as both payload and message.
    ///
    /// The lossy counterpart of [`Outcome::attempt`]: the original fault
    /// object is discarded after rendering.
    pub fn of<F, E2>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E2>,
        E2: fmt::Display,
    {
        match f() {
            Ok(value) => Self::success(value),
            Err(fault) => Self::unexpected(fault.to_string()),
        }
    }
}

impl<T, E: fmt::Display> Outcome<T, E> {
    /// Runs `f`, keeping the original fault object as the error payload.
    ///
    /// The message is the fault's rendering, so callers that only report
    /// text need not touch the payload.
    pub fn attempt<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        match f() {
            Ok(value) => Self::success(value),
            Err(fault) => {
                let text = fault.to_string();
                Self::Failure {
                    error: fault,
                    code: codes::FAILURE,
                    msg: text,
                }
            }
        }
    }
}
