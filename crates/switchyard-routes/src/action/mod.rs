//! Leaf descriptors for invocable operations.
//!
//! An [`Action`] describes one operation on an api's handler: its public
//! name, the handler method it maps to, and the verb/role requirements a
//! transport or auth layer may enforce. Resolution treats everything
//! beyond the name as opaque metadata.

use serde::{Deserialize, Serialize};

use crate::registry::Keyed;

/// Transport verb an action expects.
///
/// `Auto` defers the choice to the hosting container's conventions.
///
/// # Example
///
/// ```
/// use switchyard_routes::Verb;
///
/// assert_eq!(Verb::Get.as_str(), "get");
/// assert_eq!(Verb::default(), Verb::Auto);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verb {
    /// Defer to the container's verb conventions.
    #[default]
    Auto,
    /// Read access.
    Get,
    /// Creation.
    Post,
    /// Full replacement.
    Put,
    /// Partial update.
    Patch,
    /// Removal.
    Delete,
}

impl Verb {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of a single invocable operation within an api.
///
/// Identity is the pair of owning api and name; two apis may each carry a
/// `getAll` without colliding. Immutable once built.
///
/// # Example
///
/// ```
/// use switchyard_routes::{Action, Verb};
///
/// let action = Action::new("getById", "get_by_id", Verb::Get)
///     .with_desc("fetch one movie by id");
/// assert_eq!(action.name(), "getById");
/// assert_eq!(action.handler_ref(), "get_by_id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    name: String,
    handler_ref: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    verb: Verb,
    #[serde(default)]
    roles: Vec<String>,
}

impl Action {
    /// Creates an action mapping `name` to the handler method
    /// `handler_ref`.
    #[must_use]
    pub fn new(name: impl Into<String>, handler_ref: impl Into<String>, verb: Verb) -> Self {
        Self {
            name: name.into(),
            handler_ref: handler_ref.into(),
            desc: String::new(),
            verb,
            roles: Vec::new(),
        }
    }

    /// Attaches a human-readable description.
    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Declares the roles allowed to invoke this action.
    #[must_use]
    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }

    /// Returns the public action name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the identifier of the handler method this action maps to.
    #[must_use]
    pub const fn handler_ref(&self) -> &str {
        self.handler_ref.as_str()
    }

    /// Returns the description.
    #[must_use]
    pub const fn desc(&self) -> &str {
        self.desc.as_str()
    }

    /// Returns the expected verb.
    #[must_use]
    pub const fn verb(&self) -> Verb {
        self.verb
    }

    /// Returns the roles allowed to invoke this action.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

impl Keyed for Action {
    fn key(&self) -> &str {
        self.name()
    }
}

#[cfg(test)]
mod tests;
