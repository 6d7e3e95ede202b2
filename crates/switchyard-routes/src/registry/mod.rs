//! Ordered registries keyed by node name.
//!
//! Every level of the routing tree stores its children in a
//! [`Registry`]: an insertion-order-preserving map with unique keys and
//! exact-match lookup. Registries are mutated only while the tree is being
//! assembled; once a [`Routes`](crate::routes::Routes) takes ownership the
//! structure is frozen, which is what makes lock-free concurrent lookups
//! sound.

use indexmap::IndexMap;

use crate::error::RouteError;

/// Supplies the registration key for a tree node.
///
/// Areas, apis, and actions all key themselves by name, so a registry can
/// derive the key from the value instead of asking callers to pass both.
pub trait Keyed {
    /// Returns the key this value registers under.
    fn key(&self) -> &str;
}

/// Insertion-ordered mapping from a unique key to a tree node.
///
/// Lookup is case-exact against the registered key; normalization, if any,
/// is applied by the registration side before insertion. The empty string
/// is a legal key: the default-area convention registers an area named
/// `""`.
///
/// # Example
///
/// ```
/// use switchyard_routes::{Action, Registry, Verb};
///
/// let mut registry = Registry::new();
/// registry
///     .register(Action::new("getAll", "get_all", Verb::Get))
///     .expect("unique name");
/// assert!(registry.contains("getAll"));
/// assert!(registry.get("getall").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Registry<V> {
    entries: IndexMap<String, V>,
}

impl<V> Registry<V> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Looks up a value by exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns `true` when the key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over values in insertion order.
    ///
    /// The iterator is restartable: calling this again yields the same
    /// sequence.
    pub fn items(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of registered values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Keyed> Registry<V> {
    /// Registers a value under its own key.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Duplicate`] if the key is already registered.
    pub fn register(&mut self, value: V) -> Result<(), RouteError> {
        let key = value.key().to_owned();
        if self.entries.contains_key(&key) {
            return Err(RouteError::Duplicate { key });
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Builds a registry from a sequence of values.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Duplicate`] on the first repeated key.
    pub fn from_items<I>(items: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = V>,
    {
        let mut registry = Self::new();
        for item in items {
            registry.register(item)?;
        }
        Ok(registry)
    }
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}
