//! dbscript Runtime Boundary
//!
//! The contract between generated code and the host application. The
//! analysis/generation core never opens a connection or reads a script file
//! itself; generated companions do that through the traits defined here.
//!
//! # Overview
//!
//! - [`annotation`]: the recognized annotation surface (`DbScriptFile`)
//! - [`ScriptSource`]: resolves the base directory for script paths
//! - [`ConnectionProvider`] / [`DataConnection`]: live data connections
//!
//! Everything here is deliberately thin: it is the boundary of the system,
//! not part of the validation-and-synthesis core.

#![warn(missing_docs)]

pub mod annotation;
pub mod connection;

pub use annotation::ScriptFileAnnotation;
pub use connection::{ConnectionProvider, DataConnection, DataError, ScriptSource};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
