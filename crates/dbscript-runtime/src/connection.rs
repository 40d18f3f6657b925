//! Data-access traits used by generated companions
//!
//! Generated code resolves the script path against [`ScriptSource`], loads
//! the script text, and executes it against the connection handed out by a
//! [`ConnectionProvider`]. The provider also says whether the generated code
//! is responsible for releasing the connection after use.

use std::path::PathBuf;

/// Error surfaced by a data connection while executing a script
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The script could not be read from disk
    #[error("failed to read script {path}: {source}")]
    ScriptRead {
        /// Resolved script path
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// The connection rejected the script
    #[error("script execution failed: {0}")]
    Execution(String),
}

/// A live data connection capable of executing script text
pub trait DataConnection: Send {
    /// Execute the script and return its textual result
    ///
    /// # Errors
    /// Returns [`DataError::Execution`] when the underlying store rejects
    /// the script.
    fn execute(&mut self, script: &str) -> Result<String, DataError>;
}

/// Resolves the base directory for script paths.
///
/// Implemented by the host type whose methods carry the annotation.
pub trait ScriptSource {
    /// Base directory to resolve script paths from.
    ///
    /// `None` means scripts are placed alongside the built output.
    fn directory(&self) -> Option<PathBuf>;
}

/// Hands out the connection a generated companion should run against
pub trait ConnectionProvider {
    /// Current connection, plus whether the caller must release it when done
    fn connection(&mut self) -> (Box<dyn DataConnection>, bool);
}
