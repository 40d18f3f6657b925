//! Annotation matching
//!
//! Recognition is textual: a usage matches when its written name equals the
//! short or fully-qualified annotation name from `dbscript-runtime`.

use dbscript_runtime::ScriptFileAnnotation;
use dbscript_syntax::{AnnotationUsage, MethodData};

/// Finds recognized `DbScriptFile` usages on a method.
///
/// Exactly one match is required for anything downstream to proceed. Zero
/// matches means "not a candidate" and is silent. More than one match also
/// yields no candidate and, by current behavior, no diagnostic either —
/// repetition silently disables generation for that method.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationMatcher;

impl AnnotationMatcher {
    /// Create a matcher
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Iterate recognized annotations in source order
    pub fn recognized<'a>(
        &self,
        method: &'a MethodData,
    ) -> impl Iterator<Item = &'a AnnotationUsage> {
        method
            .annotations()
            .iter()
            .filter(|a| ScriptFileAnnotation::matches(a.name()))
    }

    /// The single recognized annotation, if there is exactly one
    #[must_use]
    pub fn single<'a>(&self, method: &'a MethodData) -> Option<&'a AnnotationUsage> {
        let mut matches = self.recognized(method);
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first)
    }
}
