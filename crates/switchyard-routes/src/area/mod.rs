//! Top-level namespaces grouping related apis.

use crate::api::Api;
use crate::registry::{Keyed, Registry};

/// Name of the default area.
///
/// Apis registered under an area with this name are reachable through the
/// 1- and 2-segment fallbacks of
/// [`Routes::check`](crate::routes::Routes::check) without naming an area
/// explicitly. Fully-qualified 3-segment addresses never consult the
/// default area.
pub const DEFAULT_AREA: &str = "";

/// Named group of apis; the top level of the routing tree.
pub struct Area<C> {
    name: String,
    apis: Registry<Api<C>>,
}

impl<C> Area<C> {
    /// Creates an area holding `apis`.
    ///
    /// An area named [`DEFAULT_AREA`] is the default area.
    #[must_use]
    pub fn new(name: impl Into<String>, apis: Registry<Api<C>>) -> Self {
        Self {
            name: name.into(),
            apis,
        }
    }

    /// Returns the area name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the apis registered in this area.
    #[must_use]
    pub const fn apis(&self) -> &Registry<Api<C>> {
        &self.apis
    }
}

impl<C> Keyed for Area<C> {
    fn key(&self) -> &str {
        self.name()
    }
}
