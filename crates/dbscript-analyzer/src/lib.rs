//! dbscript Analyzer
//!
//! Decides which annotated methods are legal to extend and reports why the
//! rest are not.
//!
//! # Overview
//!
//! - [`AnnotationMatcher`]: finds `DbScriptFile` usages by name
//! - [`ExtendabilityValidator`]: the four per-method checks
//! - [`Candidate`]: a method + class + annotation triple that passed gating
//! - [`DiagnosticReporter`]: the independent diagnostics pass
//!
//! Diagnostics and candidate production are deliberately decoupled: the
//! reporter emits all four diagnostics for an annotated method whether or
//! not generation goes ahead, while candidate evaluation re-checks the two
//! gating rules without emitting anything. A declaration can produce a
//! diagnostic without producing an artifact and vice versa.

#![warn(missing_docs)]

pub mod candidate;
pub mod diagnostic;
pub mod extendability;
pub mod matcher;
pub mod reporter;

// Re-exports
pub use candidate::Candidate;
pub use diagnostic::{Diagnostic, DiagnosticDescriptor, Severity, DESCRIPTORS};
pub use extendability::ExtendabilityValidator;
pub use matcher::AnnotationMatcher;
pub use reporter::DiagnosticReporter;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for analysis
    pub use crate::{
        AnnotationMatcher, Candidate, Diagnostic, DiagnosticReporter, ExtendabilityValidator,
        Severity,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
