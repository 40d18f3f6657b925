//! Annotations attached to method declarations

use crate::location::SourceLocation;
use serde::{Deserialize, Serialize};

/// An annotation usage as written on a method.
///
/// Carries the textual name the host saw (short or fully-qualified) and the
/// raw argument texts, if an argument list was present at all. `None`
/// arguments means the list itself was missing (`@DbScriptFile` with no
/// parentheses), which is distinct from an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationUsage {
    name: String,
    arguments: Option<Vec<String>>,
    location: SourceLocation,
}

impl AnnotationUsage {
    /// Annotation with an argument list
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        arguments: impl IntoIterator<Item = String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            name: name.into(),
            arguments: Some(arguments.into_iter().collect()),
            location,
        }
    }

    /// Annotation written without any argument list
    #[must_use]
    pub fn without_arguments(name: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            name: name.into(),
            arguments: None,
            location,
        }
    }

    /// Textual name as written in source
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw argument texts, or `None` if no argument list was written
    #[inline]
    #[must_use]
    pub fn arguments(&self) -> Option<&[String]> {
        self.arguments.as_deref()
    }

    /// Whether an argument list was written at all
    #[inline]
    #[must_use]
    pub fn has_argument_list(&self) -> bool {
        self.arguments.is_some()
    }

    /// Raw text of the whole argument list, comma separated.
    ///
    /// Empty when the list is missing; downstream treats that as an
    /// empty/invalid script path rather than an analysis failure.
    #[must_use]
    pub fn arguments_text(&self) -> String {
        match &self.arguments {
            Some(args) => args.join(", "),
            None => String::new(),
        }
    }

    /// Where the annotation appears in source
    #[inline]
    #[must_use]
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}
