//! Pipeline errors

use dbscript_codegen::SynthesisError;
use dbscript_syntax::Cancelled;

/// Errors that abort a pipeline run.
///
/// Per-candidate validation failures are not errors — a failing candidate
/// is simply dropped from generation. Only cancellation and the fatal
/// template failure stop a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// The run was cancelled cooperatively; no partial output was emitted
    #[error(transparent)]
    Cancelled(#[from] Cancelled),

    /// Synthesis failed — template failures are fatal for the whole run
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_converts() {
        let err: PipelineError = Cancelled.into();
        assert_eq!(err, PipelineError::Cancelled(Cancelled));
        assert_eq!(err.to_string(), "operation was cancelled");
    }

    #[test]
    fn synthesis_error_converts() {
        let err: PipelineError = SynthesisError::Template("broken".to_string()).into();
        assert!(matches!(err, PipelineError::Synthesis(_)));
        assert!(err.to_string().contains("broken"));
    }
}
