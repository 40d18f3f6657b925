//! dbscript Pipeline
//!
//! Orchestrates discovery → validation → modeling → synthesis as a pure,
//! cancellable function of the declaration tree.
//!
//! # Overview
//!
//! - [`Pipeline`]: the three-stage incremental generation pass
//! - [`OutputSet`]: artifacts emitted by one run
//! - [`PipelineError`]: cancellation and the one fatal template failure
//!
//! The diagnostics pass ([`dbscript_analyzer::DiagnosticReporter`]) runs
//! independently over the same tree; neither pass reads the other's output.
//!
//! # Example
//!
//! ```rust
//! use dbscript_pipeline::Pipeline;
//! use dbscript_syntax::CancellationToken;
//! use dbscript_test_utils::TreeFixture;
//!
//! # fn main() -> Result<(), dbscript_pipeline::PipelineError> {
//! let fixture = TreeFixture::annotated_method("init.sql");
//! let pipeline = Pipeline::new()?;
//! let output = pipeline.run(fixture.tree(), &CancellationToken::new())?;
//! assert_eq!(output.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod output;
pub mod pipeline;

// Re-exports
pub use error::PipelineError;
pub use output::OutputSet;
pub use pipeline::Pipeline;

// The diagnostics pass lives in the analyzer; surfaced here since hosts
// drive both passes together.
pub use dbscript_analyzer::DiagnosticReporter;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the pipeline
    pub use crate::{DiagnosticReporter, OutputSet, Pipeline, PipelineError};
    pub use dbscript_syntax::CancellationToken;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
