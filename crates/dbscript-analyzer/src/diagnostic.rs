//! Diagnostic descriptors and instances
//!
//! Four fixed diagnostics: two warnings that suppress generation for the
//! method they name, and two errors that are informative only. Diagnostics
//! are created during validation, handed to the host immediately, and never
//! persisted.

use dbscript_syntax::SourceLocation;
use std::fmt::{self, Display, Formatter};

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Suppresses generation for the offending method
    Warning,
    /// Informative; does not by itself suppress generation
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// Static description of one diagnostic kind.
///
/// The message template uses positional `{0}`/`{1}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticDescriptor {
    /// Stable diagnostic code
    pub code: &'static str,
    /// Short title
    pub title: &'static str,
    /// Message template with positional placeholders
    pub template: &'static str,
    /// Severity
    pub severity: Severity,
}

impl DiagnosticDescriptor {
    /// Render the message template with positional arguments
    #[must_use]
    pub fn message(&self, args: &[&str]) -> String {
        let mut message = self.template.to_string();
        for (i, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{i}}}"), arg);
        }
        message
    }

    /// Instantiate a diagnostic at a source location
    #[must_use]
    pub fn at(&self, location: SourceLocation, args: &[&str]) -> Diagnostic {
        Diagnostic {
            code: self.code,
            severity: self.severity,
            message: self.message(args),
            location,
        }
    }
}

/// Method is not extendable (gates generation)
pub const METHOD_NOT_EXTENDABLE: DiagnosticDescriptor = DiagnosticDescriptor {
    code: "DSR1001",
    title: "Method is not extendable",
    template: "Method {0} is not extendable, it has modifiers other than public, protected, private, internal or is not partial. Skipped.",
    severity: Severity::Warning,
};

/// Class hierarchy is not extendable (gates generation)
pub const CLASS_NOT_EXTENDABLE: DiagnosticDescriptor = DiagnosticDescriptor {
    code: "DSR1002",
    title: "Class is not extendable",
    template: "Class {0} is not extendable, it (or its containing classes) has modifiers other than public, protected, private, internal or is not partial. Skipped.",
    severity: Severity::Warning,
};

/// Return type does not resolve to a string type (informative only)
pub const INVALID_RETURN_TYPE: DiagnosticDescriptor = DiagnosticDescriptor {
    code: "DSR2001",
    title: "Invalid return type",
    template: "Method {1} has invalid return type: {0}. Should be string.",
    severity: Severity::Error,
};

/// Annotation is missing its argument list (informative only)
pub const MISSING_ARGUMENTS: DiagnosticDescriptor = DiagnosticDescriptor {
    code: "DSR2002",
    title: "Missing arguments list",
    template: "Attribute {0} is missing an arguments list.",
    severity: Severity::Error,
};

/// All supported diagnostics, in check order
pub const DESCRIPTORS: [DiagnosticDescriptor; 4] = [
    METHOD_NOT_EXTENDABLE,
    CLASS_NOT_EXTENDABLE,
    INVALID_RETURN_TYPE,
    MISSING_ARGUMENTS,
];

/// A single reported rule violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Stable diagnostic code (e.g. `DSR1001`)
    pub code: &'static str,
    /// Severity
    pub severity: Severity,
    /// Rendered, user-facing message
    pub message: String,
    /// Where the violation occurred
    pub location: SourceLocation,
}

impl Diagnostic {
    /// Whether this diagnostic suppresses generation for its method
    #[inline]
    #[must_use]
    pub fn gates_generation(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] at {}",
            self.severity, self.message, self.code, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_substitutes_positional_args() {
        let msg = INVALID_RETURN_TYPE.message(&["int", "Load"]);
        assert_eq!(msg, "Method Load has invalid return type: int. Should be string.");
    }

    #[test]
    fn at_builds_full_diagnostic() {
        let loc = SourceLocation::new("repo.cs", 3, 1);
        let d = METHOD_NOT_EXTENDABLE.at(loc.clone(), &["Load"]);
        assert_eq!(d.code, "DSR1001");
        assert_eq!(d.severity, Severity::Warning);
        assert!(d.gates_generation());
        assert!(d.message.contains("Load"));
        assert_eq!(d.location, loc);
    }

    #[test]
    fn errors_do_not_gate() {
        let loc = SourceLocation::new("repo.cs", 3, 1);
        let d = MISSING_ARGUMENTS.at(loc, &["DbScriptFile"]);
        assert!(!d.gates_generation());
    }

    #[test]
    fn descriptor_codes_are_distinct() {
        let codes: Vec<_> = DESCRIPTORS.iter().map(|d| d.code).collect();
        let mut dedup = codes.clone();
        dedup.dedup();
        assert_eq!(codes, dedup);
        assert_eq!(codes, vec!["DSR1001", "DSR1002", "DSR2001", "DSR2002"]);
    }
}
