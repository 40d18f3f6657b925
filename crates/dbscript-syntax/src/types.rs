//! Type references and parameters on method declarations

use serde::{Deserialize, Serialize};

/// A type reference as written in source, with an optional resolved identity.
///
/// The raw text is always present. The resolved named-type name is filled in
/// by whatever semantic facility built the tree; hosts without a binder leave
/// it empty and downstream checks treat the reference as unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    text: String,
    resolved: Option<String>,
}

impl TypeRef {
    /// Unresolved type reference from raw source text
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            resolved: None,
        }
    }

    /// Attach the resolved named-type name
    #[inline]
    #[must_use]
    pub fn with_resolution(mut self, name: impl Into<String>) -> Self {
        self.resolved = Some(name.into());
        self
    }

    /// Raw source text of the reference
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Resolved named-type name, if the host resolved one
    #[inline]
    #[must_use]
    pub fn resolved_name(&self) -> Option<&str> {
        self.resolved.as_deref()
    }
}

/// A method parameter: identifier plus full declaration text (e.g. `int id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    identifier: String,
    text: String,
}

impl Parameter {
    /// Create a parameter from its identifier and full declaration text
    #[inline]
    #[must_use]
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            text: text.into(),
        }
    }

    /// Parameter name
    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Full declaration text, type included
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
