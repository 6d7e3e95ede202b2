//! The routing tree: the full `area.api.action` address space.
//!
//! [`Routes`] composes areas into the routing tree and owns the two
//! cross-cutting hooks: the naming convention shared by registration
//! collaborators and the instance-created observer. The tree is assembled
//! once and never mutates afterwards, so lookups and shared-instance reuse
//! need no locking; the only work at resolution time is registry lookups
//! and, at worst, one handler construction.
//!
//! Address format: `{area}.{api}.{action}`, e.g.
//!
//! ```text
//! app
//!   - movies
//!       - getAll
//!       - getById
//!   - tickets
//!       - create
//! ```

use std::sync::Arc;

use tracing::debug;

use switchyard_naming::Namer;
use switchyard_outcome::{Outcome, OutcomeMsg};

use crate::action::Action;
use crate::api::{Api, Instance};
use crate::area::{Area, DEFAULT_AREA};
use crate::error::RouteError;
use crate::registry::Registry;

/// Tracing target for resolution and instance acquisition.
const ROUTES_TARGET: &str = "switchyard_routes::routes";

/// Observer invoked with every instance the tree produces.
///
/// An observation point, not a veto point: the observer cannot reject or
/// replace the instance.
pub type InstanceObserver = Arc<dyn Fn(&Instance) + Send + Sync>;

/// Resolved reference produced by a successful resolution.
///
/// Bundles the api and action descriptors with the acquired handler
/// instance; a downstream invocation layer decodes arguments and calls
/// [`Action::handler_ref`] on the instance.
pub struct ApiRef<'a, C> {
    api: &'a Api<C>,
    action: &'a Action,
    instance: Instance,
}

impl<'a, C> ApiRef<'a, C> {
    const fn new(api: &'a Api<C>, action: &'a Action, instance: Instance) -> Self {
        Self {
            api,
            action,
            instance,
        }
    }

    /// Returns the resolved api descriptor.
    #[must_use]
    pub const fn api(&self) -> &'a Api<C> {
        self.api
    }

    /// Returns the resolved action descriptor.
    #[must_use]
    pub const fn action(&self) -> &'a Action {
        self.action
    }

    /// Returns the acquired handler instance.
    #[must_use]
    pub const fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Consumes the reference, keeping only the handler instance.
    #[must_use]
    pub fn into_instance(self) -> Instance {
        self.instance
    }
}

/// The root of the routing tree.
///
/// # Example
///
/// ```
/// use switchyard_routes::{Action, Api, Area, Instantiation, Registry, Routes, Verb};
///
/// struct Movies;
///
/// let actions = Registry::from_items([Action::new("getAll", "get_all", Verb::Get)])
///     .expect("unique action names");
/// let mut apis = Registry::new();
/// apis.register(Api::new("movies", "Movies", Instantiation::shared(Movies), actions))
///     .expect("unique api names");
/// let mut areas = Registry::new();
/// areas.register(Area::new("app", apis)).expect("unique area names");
///
/// let routes: Routes<()> = Routes::new(areas);
/// assert!(routes.contains_action("app", "movies", "getAll"));
/// assert!(!routes.check("app.movies.missing"));
/// ```
pub struct Routes<C> {
    areas: Registry<Area<C>>,
    namer: Option<Arc<dyn Namer>>,
    on_instance_created: Option<InstanceObserver>,
}

impl<C> Routes<C> {
    /// Creates a tree over `areas`, with no namer and no observer.
    #[must_use]
    pub const fn new(areas: Registry<Area<C>>) -> Self {
        Self {
            areas,
            namer: None,
            on_instance_created: None,
        }
    }

    /// Stores the naming convention registration collaborators applied
    /// when building keys.
    ///
    /// The tree itself never re-applies it: resolution matches literal
    /// keys.
    #[must_use]
    pub fn with_namer(mut self, namer: Arc<dyn Namer>) -> Self {
        self.namer = Some(namer);
        self
    }

    /// Installs the instance-created observer.
    ///
    /// Installing an observer immediately notifies it once per pre-bound
    /// shared instance already in the tree, so an observer installed after
    /// the apis were assembled still sees every instance the tree holds.
    #[must_use]
    pub fn with_observer(mut self, observer: InstanceObserver) -> Self {
        let mut observed = 0_u32;
        self.visit_apis(|_area, api| {
            if let Some(instance) = api.shared_instance() {
                observer(instance);
                observed += 1;
            }
        });
        debug!(
            target: ROUTES_TARGET,
            observed,
            "notified observer of pre-bound handler instances"
        );
        self.on_instance_created = Some(observer);
        self
    }

    /// Returns the stored naming convention, if any.
    #[must_use]
    pub fn namer(&self) -> Option<&dyn Namer> {
        self.namer.as_deref()
    }

    /// Returns the registered areas.
    #[must_use]
    pub const fn areas(&self) -> &Registry<Area<C>> {
        &self.areas
    }

    /// Checks whether a dot-delimited path names a registered node.
    ///
    /// A 1-segment path matches an area, or an api under the default
    /// area. A 2-segment path matches `(area, api)`, or
    /// `(api, action)` under the default area. A 3-segment path matches
    /// only the exact `(area, api, action)` triple; the default-area
    /// fallback applies to 1- and 2-segment paths only. Anything longer
    /// is false.
    #[must_use]
    pub fn check(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('.').collect();
        match parts.as_slice() {
            [area] => self.contains(area) || self.contains_api(DEFAULT_AREA, area),
            [area, api] => {
                self.contains_api(area, api) || self.contains_action(DEFAULT_AREA, area, api)
            }
            [area, api, action] => self.contains_action(area, api, action),
            _ => false,
        }
    }

    /// Returns `true` when an area with the supplied name exists.
    #[must_use]
    pub fn contains(&self, area: &str) -> bool {
        self.areas.contains(area)
    }

    /// Returns `true` when the api exists in the supplied area.
    #[must_use]
    pub fn contains_api(&self, area: &str, api: &str) -> bool {
        self.areas.get(area).is_some_and(|node| node.apis().contains(api))
    }

    /// Returns `true` when the exact `(area, api, action)` triple exists.
    #[must_use]
    pub fn contains_action(&self, area: &str, api: &str, action: &str) -> bool {
        self.api(area, api)
            .is_some_and(|node| node.actions().contains(action))
    }

    /// Looks up the api registered under `area.name`.
    #[must_use]
    pub fn api(&self, area: &str, name: &str) -> Option<&Api<C>> {
        self.areas.get(area).and_then(|node| node.apis().get(name))
    }

    /// Resolves `area.name.action` to a reference ready for invocation.
    ///
    /// Validates that every segment is supplied, that the triple exists,
    /// and acquires the handler instance; the outcome's failure branch
    /// reports what was missing or not found. A handler-construction
    /// fault is folded into the failure branch as well, so this entry
    /// point never panics on registered routes.
    pub fn resolve(&self, area: &str, name: &str, action: &str, ctx: &C) -> OutcomeMsg<ApiRef<'_, C>> {
        if area.is_empty() {
            return Outcome::bad_request("area not supplied");
        }
        if name.is_empty() {
            return Outcome::bad_request("api not supplied");
        }
        if action.is_empty() {
            return Outcome::bad_request("action not supplied");
        }
        let missing = || Outcome::not_found(format!("api route {area} {name} {action} not found"));
        if !self.contains_action(area, name, action) {
            debug!(
                target: ROUTES_TARGET,
                area,
                api = name,
                action,
                "route not found"
            );
            return missing();
        }
        let Some(api) = self.api(area, name) else {
            return missing();
        };
        let Some(act) = api.actions().get(action) else {
            return missing();
        };
        match self.instance(area, name, ctx) {
            Ok(Some(instance)) => Outcome::success(ApiRef::new(api, act, instance)),
            Ok(None) => missing(),
            Err(fault) => Outcome::unexpected(fault.to_string()),
        }
    }

    /// Acquires an instance of the handler bound to `area.name`.
    ///
    /// A pre-bound shared instance is returned unchanged; otherwise the
    /// api's factory builds a fresh instance, with the execution context
    /// as sole argument when the strategy calls for it. The observer, if
    /// installed, fires once per call with the produced instance,
    /// shared or fresh, before it is returned. Returns `Ok(None)` only
    /// when the api itself does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Construction`] when the factory faults.
    pub fn instance(&self, area: &str, name: &str, ctx: &C) -> Result<Option<Instance>, RouteError> {
        let Some(api) = self.api(area, name) else {
            return Ok(None);
        };
        let instance = api
            .instantiation()
            .acquire(ctx)
            .map_err(|fault| RouteError::Construction {
                api: api.name().to_owned(),
                message: fault.to_string(),
            })?;
        debug!(
            target: ROUTES_TARGET,
            area,
            api = api.name(),
            strategy = api.instantiation().strategy(),
            "acquired handler instance"
        );
        if let Some(observer) = &self.on_instance_created {
            observer(&instance);
        }
        Ok(Some(instance))
    }

    /// Visits every `(area, api)` pair in registry insertion order.
    pub fn visit_apis(&self, mut visitor: impl FnMut(&Area<C>, &Api<C>)) {
        for area in self.areas.items() {
            for api in area.apis().items() {
                visitor(area, api);
            }
        }
    }

    /// Visits every `(area, api, action)` triple in registry insertion
    /// order.
    pub fn visit_actions(&self, mut visitor: impl FnMut(&Area<C>, &Api<C>, &Action)) {
        for area in self.areas.items() {
            for api in area.apis().items() {
                for action in api.actions().items() {
                    visitor(area, api, action);
                }
            }
        }
    }
}
