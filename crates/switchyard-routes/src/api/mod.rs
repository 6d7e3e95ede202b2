//! Api descriptors and handler-instance lifecycle.
//!
//! An [`Api`] groups actions bound to a single handler type and carries
//! the [`Instantiation`] strategy for that handler: a pre-bound shared
//! instance reused by every resolution, or a factory that builds a fresh
//! instance per acquisition, with or without the caller's execution
//! context. The strategy is chosen once at registration, so resolution
//! never inspects the handler type.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::action::Action;
use crate::error::FactoryError;
use crate::registry::{Keyed, Registry};

/// Opaque handler object produced by instance acquisition.
///
/// The downstream invocation layer downcasts this to the concrete handler
/// type named by the api's [`Action::handler_ref`] mapping.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Factory building a fresh handler instance with no arguments.
pub type Factory = Arc<dyn Fn() -> Result<Instance, FactoryError> + Send + Sync>;

/// Factory building a fresh handler instance from the execution context.
pub type ContextFactory<C> = Arc<dyn Fn(&C) -> Result<Instance, FactoryError> + Send + Sync>;

/// Per-api instantiation strategy, chosen at registration time.
///
/// Exactly one strategy applies to an api: a pre-bound instance is always
/// reused; otherwise every acquisition constructs a fresh instance. Any
/// caching of fresh instances is the caller's concern.
pub enum Instantiation<C> {
    /// A pre-bound instance shared by every resolution for the tree's
    /// lifetime. The handler must be stateless or internally
    /// synchronized; the tree provides no locking.
    Shared(Instance),
    /// A fresh instance built per acquisition, no arguments.
    Fresh(Factory),
    /// A fresh instance built per acquisition, with the execution context
    /// as the sole argument.
    FreshWithContext(ContextFactory<C>),
}

impl<C> Instantiation<C> {
    /// Wraps a pre-built handler as the shared instance.
    #[must_use]
    pub fn shared<H>(handler: H) -> Self
    where
        H: Any + Send + Sync,
    {
        Self::Shared(Arc::new(handler))
    }

    /// Builds the strategy from a no-argument factory.
    #[must_use]
    pub fn fresh<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Instance, FactoryError> + Send + Sync + 'static,
    {
        Self::Fresh(Arc::new(factory))
    }

    /// Builds the strategy from a context-taking factory.
    #[must_use]
    pub fn fresh_with_context<F>(factory: F) -> Self
    where
        F: Fn(&C) -> Result<Instance, FactoryError> + Send + Sync + 'static,
    {
        Self::FreshWithContext(Arc::new(factory))
    }

    /// Acquires an instance according to the strategy.
    ///
    /// # Errors
    ///
    /// Returns the factory's fault when fresh construction fails; a shared
    /// instance never fails.
    pub fn acquire(&self, ctx: &C) -> Result<Instance, FactoryError> {
        match self {
            Self::Shared(instance) => Ok(Arc::clone(instance)),
            Self::Fresh(factory) => factory(),
            Self::FreshWithContext(factory) => factory(ctx),
        }
    }

    /// Returns the pre-bound instance, if this strategy has one.
    #[must_use]
    pub const fn shared_instance(&self) -> Option<&Instance> {
        match self {
            Self::Shared(instance) => Some(instance),
            Self::Fresh(_) | Self::FreshWithContext(_) => None,
        }
    }

    /// Returns the strategy's label, for diagnostics.
    #[must_use]
    pub const fn strategy(&self) -> &'static str {
        match self {
            Self::Shared(_) => "shared",
            Self::Fresh(_) => "fresh",
            Self::FreshWithContext(_) => "fresh-with-context",
        }
    }
}

impl<C> Clone for Instantiation<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Shared(instance) => Self::Shared(Arc::clone(instance)),
            Self::Fresh(factory) => Self::Fresh(Arc::clone(factory)),
            Self::FreshWithContext(factory) => Self::FreshWithContext(Arc::clone(factory)),
        }
    }
}

impl<C> fmt::Debug for Instantiation<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strategy())
    }
}

/// Named group of actions bound to one handler type.
///
/// # Example
///
/// ```
/// use switchyard_routes::{Action, Api, Instantiation, Registry, Verb};
///
/// struct Movies;
///
/// let actions = Registry::from_items([Action::new("getAll", "get_all", Verb::Get)])
///     .expect("unique action names");
/// let api: Api<()> = Api::new("movies", "Movies", Instantiation::shared(Movies), actions)
///     .with_desc("movie catalogue");
/// assert_eq!(api.name(), "movies");
/// assert!(api.shared_instance().is_some());
/// ```
pub struct Api<C> {
    name: String,
    handler: String,
    desc: String,
    roles: Vec<String>,
    instantiation: Instantiation<C>,
    actions: Registry<Action>,
}

impl<C> Api<C> {
    /// Creates an api binding `actions` to the handler type labelled
    /// `handler`, instantiated per `instantiation`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        handler: impl Into<String>,
        instantiation: Instantiation<C>,
        actions: Registry<Action>,
    ) -> Self {
        Self {
            name: name.into(),
            handler: handler.into(),
            desc: String::new(),
            roles: Vec::new(),
            instantiation,
            actions,
        }
    }

    /// Attaches a human-readable description.
    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Declares the roles allowed to reach this api.
    #[must_use]
    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }

    /// Returns the api name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the handler type label, for diagnostics.
    #[must_use]
    pub const fn handler(&self) -> &str {
        self.handler.as_str()
    }

    /// Returns the description.
    #[must_use]
    pub const fn desc(&self) -> &str {
        self.desc.as_str()
    }

    /// Returns the roles allowed to reach this api.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Returns the instantiation strategy.
    #[must_use]
    pub const fn instantiation(&self) -> &Instantiation<C> {
        &self.instantiation
    }

    /// Returns the actions registered on this api.
    #[must_use]
    pub const fn actions(&self) -> &Registry<Action> {
        &self.actions
    }

    /// Returns the pre-bound shared instance, if the api carries one.
    #[must_use]
    pub const fn shared_instance(&self) -> Option<&Instance> {
        self.instantiation.shared_instance()
    }
}

impl<C> Keyed for Api<C> {
    fn key(&self) -> &str {
        self.name()
    }
}
