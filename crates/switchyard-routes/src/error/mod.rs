//! Domain errors raised by route registration and instance construction.
//!
//! All errors use `thiserror`-derived enums with structured context so
//! callers can inspect the failure programmatically. Structural resolution
//! failures (bad request, route not found) are not errors in this sense:
//! they travel in the failure branch of
//! [`switchyard_outcome::Outcome`] at the resolution boundary.

use thiserror::Error;

/// Fault raised by a handler factory while constructing an instance.
pub type FactoryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors arising from building the routing tree or acquiring instances.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A registry key was registered a second time.
    #[error("'{key}' is already registered")]
    Duplicate {
        /// Key that collided.
        key: String,
    },

    /// A handler factory failed while constructing an instance.
    #[error("handler for api '{api}' failed to construct: {message}")]
    Construction {
        /// Name of the api whose handler was being constructed.
        api: String,
        /// Rendering of the underlying fault.
        message: String,
    },
}
