//! dbscript Code Generation
//!
//! Turns validated candidates into generated companion source text.
//!
//! # Overview
//!
//! - [`HierarchyDescriptor`]: the reconstructed wrapper nesting a companion
//!   must be placed in
//! - [`DeclarationModel`]: the flat record fed to the template
//! - [`CodeSynthesizer`]: renders models against the shared cached template
//! - [`GeneratedArtifact`]: rendered source plus a per-run unique hint name
//!
//! The template is process-wide state: loaded and validated once, immutable
//! afterward, safe for concurrent readers. Failing to validate it is the
//! single fatal condition of the whole system — nothing can be generated
//! without it, so the failure aborts the run instead of being reported per
//! declaration.

#![warn(missing_docs)]

pub mod hierarchy;
pub mod model;
pub mod synthesizer;

// Re-exports
pub use hierarchy::{HierarchyDescriptor, Wrapper};
pub use model::{DeclarationModel, DeclarationModelBuilder};
pub use synthesizer::{CodeSynthesizer, GeneratedArtifact, SynthesisError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for code generation
    pub use crate::{
        CodeSynthesizer, DeclarationModel, DeclarationModelBuilder, GeneratedArtifact,
        HierarchyDescriptor, SynthesisError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
