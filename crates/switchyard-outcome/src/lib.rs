//! Uniform success/failure propagation for the Switchyard routing core.
//!
//! Every operation built on top of the routing tree reports its conclusion
//! through [`Outcome`]: a two-branch sum carrying either a success value or
//! a typed error, each annotated with a status code and a human-readable
//! message. Failures short-circuit through the combinator chain unchanged,
//! so a transform supplied for the success path is never invoked on the
//! failure path and vice versa.
//!
//! # Example
//!
//! ```
//! use switchyard_outcome::{Outcome, OutcomeMsg, codes};
//!
//! let found: OutcomeMsg<u64> = Outcome::success(42);
//! let doubled = found.map(|id| id * 2);
//! assert_eq!(doubled.value(), Some(&84));
//! assert_eq!(doubled.code(), codes::SUCCESS);
//!
//! let missing: OutcomeMsg<u64> = Outcome::not_found("movie 7 not found");
//! let untouched = missing.map(|id| id * 2);
//! assert_eq!(untouched.code(), codes::NOT_FOUND);
//! ```

pub mod codes;
pub mod outcome;

pub use self::outcome::{Outcome, OutcomeMsg};
