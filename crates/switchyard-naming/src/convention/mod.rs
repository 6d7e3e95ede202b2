//! The [`Namer`] contract and stock case conventions.

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

/// Rewrites raw names into a canonical registration form.
///
/// Implementations must be cheap and deterministic: the same raw name
/// always yields the same key. The trait is object-safe so a routing tree
/// can hold `Arc<dyn Namer>` without knowing the convention.
pub trait Namer: Send + Sync {
    /// Returns the canonical form of `raw`.
    fn rename(&self, raw: &str) -> String;

    /// Returns the convention's label, e.g. `lower-hyphen`.
    fn label(&self) -> &'static str;
}

/// Stock case conventions for route names.
///
/// # Example
///
/// ```
/// use switchyard_naming::{Convention, Namer};
///
/// assert_eq!(Convention::LowerUnderscore.rename("getById"), "get_by_id");
/// assert_eq!(Convention::UpperCamel.rename("get_by_id"), "GetById");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Convention {
    /// Lowercases the name without reshaping word boundaries.
    Lower,
    /// Hyphenated lowercase words, e.g. `sample-rest`.
    LowerHyphen,
    /// Underscored lowercase words, e.g. `sample_rest`.
    LowerUnderscore,
    /// Camel case with a lowercase head, e.g. `sampleRest`.
    LowerCamel,
    /// Camel case with an uppercase head, e.g. `SampleRest`.
    UpperCamel,
}

impl Convention {
    /// Returns the canonical label for this convention.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::LowerHyphen => "lower-hyphen",
            Self::LowerUnderscore => "lower-underscore",
            Self::LowerCamel => "lower-camel",
            Self::UpperCamel => "upper-camel",
        }
    }
}

impl std::fmt::Display for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Namer for Convention {
    fn rename(&self, raw: &str) -> String {
        match self {
            Self::Lower => raw.to_lowercase(),
            Self::LowerHyphen => raw.to_kebab_case(),
            Self::LowerUnderscore => raw.to_snake_case(),
            Self::LowerCamel => raw.to_lower_camel_case(),
            Self::UpperCamel => raw.to_upper_camel_case(),
        }
    }

    fn label(&self) -> &'static str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests;
