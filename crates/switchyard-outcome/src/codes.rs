//! Canonical status sentinels attached to outcomes.
//!
//! The codes mirror the conventional HTTP numbering so a transport layer
//! can forward them without translation, but nothing in this crate
//! interprets them beyond equality.

/// The operation concluded successfully.
pub const SUCCESS: i32 = 200;

/// The caller supplied an incomplete or malformed request.
pub const BAD_REQUEST: i32 = 400;

/// The addressed resource does not exist.
pub const NOT_FOUND: i32 = 404;

/// The operation failed for an unspecified reason.
pub const FAILURE: i32 = 500;
