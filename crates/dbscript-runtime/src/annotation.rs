//! The `DbScriptFile` annotation surface
//!
//! One annotation kind, attachable to methods only, not inheritable, not
//! designed to be repeated. It accepts exactly one string argument: the
//! relative path to a script file. Repeating the annotation on a method
//! silently disables generation for that method.

/// Short name as written at use sites: `DbScriptFile`
pub const SHORT_NAME: &str = "DbScriptFile";

/// Fully-qualified form: `DbScriptFileAttribute`
pub const FULL_NAME: &str = "DbScriptFileAttribute";

/// Descriptor for the recognized annotation surface.
///
/// Matching is textual: a usage is recognized when its written name equals
/// the short or fully-qualified form. A host with a semantic binder should
/// resolve annotation identity instead and only fall back to this textual
/// match; textual matching is a known precision limitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptFileAnnotation;

impl ScriptFileAnnotation {
    /// Whether a written annotation name matches this surface
    #[inline]
    #[must_use]
    pub fn matches(name: &str) -> bool {
        name == SHORT_NAME || name == FULL_NAME
    }

    /// Expected number of arguments (the script path)
    pub const ARGUMENT_COUNT: usize = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_short_and_full_names() {
        assert!(ScriptFileAnnotation::matches("DbScriptFile"));
        assert!(ScriptFileAnnotation::matches("DbScriptFileAttribute"));
    }

    #[test]
    fn rejects_other_names() {
        assert!(!ScriptFileAnnotation::matches("ScriptFile"));
        assert!(!ScriptFileAnnotation::matches("dbscriptfile"));
        assert!(!ScriptFileAnnotation::matches(""));
    }
}
