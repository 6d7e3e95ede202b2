//! Dynamic routing and dispatch core for three-part hierarchical addresses.
//!
//! The `switchyard-routes` crate resolves an `area.api.action` address to
//! an invocable unit of behaviour. The address space is a tree of
//! registries: a [`Routes`] tree owns [`Area`]s, an area owns [`Api`]s, and
//! an api owns [`Action`]s together with the instantiation strategy for the
//! handler those actions live on. Resolution validates the address, locates
//! the action, acquires (or reuses) the handler instance, and hands back an
//! [`ApiRef`] for a downstream invocation layer to call.
//!
//! The tree is built once and is read-only afterwards; the only allocation
//! at resolution time is a per-request handler construction for apis
//! without a pre-bound shared instance. Structural failures are reported as
//! [`switchyard_outcome::Outcome`] values, never panics.
//!
//! # Example
//!
//! ```
//! use switchyard_routes::{Action, Api, Area, Instantiation, Registry, Routes, Verb};
//!
//! struct Movies;
//!
//! let actions = Registry::from_items([
//!     Action::new("getAll", "get_all", Verb::Get),
//!     Action::new("getById", "get_by_id", Verb::Get),
//! ])
//! .expect("unique action names");
//!
//! let api = Api::new("movies", "Movies", Instantiation::shared(Movies), actions);
//! let mut apis = Registry::new();
//! apis.register(api).expect("unique api names");
//! let mut areas = Registry::new();
//! areas.register(Area::new("app", apis)).expect("unique area names");
//!
//! let routes: Routes<()> = Routes::new(areas);
//! assert!(routes.check("app.movies.getById"));
//!
//! let resolved = routes.resolve("app", "movies", "getById", &());
//! assert!(resolved.is_success());
//! ```

pub mod action;
pub mod api;
pub mod area;
pub mod error;
pub mod registry;
pub mod routes;

pub use self::action::{Action, Verb};
pub use self::api::{Api, ContextFactory, Factory, Instance, Instantiation};
pub use self::area::{Area, DEFAULT_AREA};
pub use self::error::{FactoryError, RouteError};
pub use self::registry::{Keyed, Registry};
pub use self::routes::{ApiRef, InstanceObserver, Routes};
