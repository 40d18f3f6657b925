//! dbscript Syntax Model
//!
//! Read-only declaration tree consumed by the dbscript analysis and
//! generation pipeline.
//!
//! # Overview
//!
//! The syntax model provides:
//! - **`DeclarationTree`**: arena-owned immutable tree of declarations
//! - **`ModifierSet`**: ordered modifier keywords with the extendability rule
//! - **`AnnotationUsage`**: attached annotations with raw argument text
//! - **`CancellationToken`**: cooperative cancellation polled by traversals
//!
//! The tree is built once (by a host front end or the `TreeBuilder` fixtures
//! in `dbscript-test-utils`) and only read afterward. Nodes hold an index
//! back-reference to their parent; no node owns its ancestors.
//!
//! # Example
//!
//! ```rust
//! use dbscript_syntax::{DeclarationTreeBuilder, ModifierSet, Modifier};
//!
//! let mut builder = DeclarationTreeBuilder::new("lib.cs");
//! let ns = builder.namespace("Data").unwrap();
//! let class = builder
//!     .class("Repository", ModifierSet::from_iter([Modifier::Public, Modifier::Partial]), Some(ns))
//!     .unwrap();
//! let tree = builder.finish();
//! assert_eq!(tree.get(class).unwrap().identifier(), "Repository");
//! ```

#![warn(missing_docs)]

pub mod annotation;
pub mod cancel;
pub mod location;
pub mod modifier;
pub mod tree;
pub mod types;

// Re-exports
pub use annotation::AnnotationUsage;
pub use cancel::{Cancelled, CancellationToken};
pub use location::SourceLocation;
pub use modifier::{Modifier, ModifierSet};
pub use tree::{
    Declaration, DeclarationId, DeclarationKind, DeclarationTree, DeclarationTreeBuilder,
    MethodData, TreeError,
};
pub use types::{Parameter, TypeRef};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with declaration trees
    pub use crate::{
        AnnotationUsage, CancellationToken, Cancelled, Declaration, DeclarationId,
        DeclarationKind, DeclarationTree, DeclarationTreeBuilder, Modifier, ModifierSet,
        Parameter, SourceLocation, TypeRef,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
