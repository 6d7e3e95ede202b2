//! Naming normalization for route registration.
//!
//! A [`Namer`] rewrites raw area, api, and action names into a canonical
//! form before they are inserted as registry keys. The routing tree stores
//! the namer so registration collaborators can share one convention, but
//! resolution always matches the literal keys that were inserted; the
//! namer is never re-applied at lookup time.
//!
//! # Example
//!
//! ```
//! use switchyard_naming::{Convention, Namer};
//!
//! let namer = Convention::LowerHyphen;
//! assert_eq!(namer.rename("SampleREST"), "sample-rest");
//! assert_eq!(namer.label(), "lower-hyphen");
//! ```

pub mod convention;

pub use self::convention::{Convention, Namer};
