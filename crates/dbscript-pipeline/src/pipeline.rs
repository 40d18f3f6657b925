//! The incremental generation pipeline
//!
//! Three stages, mirroring how an interactive host drives them:
//!
//! 1. **Discovery** — [`Pipeline::is_candidate_node`]: a cheap,
//!    allocation-free predicate run on every fine-grained edit; no
//!    semantic work happens here.
//! 2. **Evaluation** — [`Pipeline::evaluate`]: matching, gating validation,
//!    hierarchy reconstruction, and model building for one declaration. A
//!    pure function of the tree and the id, so hosts can memoize it per
//!    declaration and skip re-invocation on unchanged input.
//! 3. **Emission** — synthesis of every surviving model into the output
//!    set.
//!
//! All stages poll the cancellation token; a cancelled run returns an
//! error and emits nothing.

use crate::error::PipelineError;
use crate::output::OutputSet;
use dbscript_analyzer::Candidate;
use dbscript_codegen::{CodeSynthesizer, DeclarationModel, DeclarationModelBuilder};
use dbscript_syntax::{CancellationToken, Cancelled, DeclarationId, DeclarationTree};
use rayon::prelude::*;

/// The full discovery → validation → modeling → synthesis pass.
///
/// Holds no mutable state; the only process-wide state behind it is the
/// immutable cached template, so one pipeline value can serve many runs
/// and many threads.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    synthesizer: CodeSynthesizer,
}

impl Pipeline {
    /// Create a pipeline, initializing the shared template on first use.
    ///
    /// # Errors
    /// Returns [`PipelineError::Synthesis`] when the companion template
    /// fails validation. This is the single fatal condition of the system:
    /// nothing can be generated without the template, so the run aborts
    /// here instead of reporting per declaration.
    pub fn new() -> Result<Self, PipelineError> {
        Ok(Self {
            synthesizer: CodeSynthesizer::new()?,
        })
    }

    /// Stage 1: cheap discovery predicate.
    ///
    /// True when the declaration is a method carrying at least one
    /// annotation of any name. Runs on every fine-grained edit in an
    /// interactive host, so it allocates nothing and resolves nothing.
    ///
    /// # Errors
    /// Returns [`Cancelled`] if cancellation was requested.
    pub fn is_candidate_node(
        tree: &DeclarationTree,
        id: DeclarationId,
        token: &CancellationToken,
    ) -> Result<bool, Cancelled> {
        token.checkpoint()?;
        Ok(tree
            .get(id)
            .and_then(|decl| decl.as_method())
            .is_some_and(|method| !method.annotations().is_empty()))
    }

    /// Stage 2: evaluate one discovered declaration into a model.
    ///
    /// Pure function of `(tree, id)`: reads nothing else, writes nothing,
    /// emits no diagnostics. `Ok(None)` means the declaration did not
    /// survive gating.
    ///
    /// # Errors
    /// Returns [`Cancelled`] if cancellation was requested at any
    /// traversal step.
    pub fn evaluate(
        tree: &DeclarationTree,
        id: DeclarationId,
        token: &CancellationToken,
    ) -> Result<Option<DeclarationModel>, Cancelled> {
        let Some(candidate) = Candidate::evaluate(tree, id, token)? else {
            return Ok(None);
        };
        DeclarationModelBuilder::new().build(tree, &candidate, token)
    }

    /// Run all three stages sequentially over the tree.
    ///
    /// # Errors
    /// Returns [`PipelineError::Cancelled`] on cooperative cancellation
    /// (with no partial output) or [`PipelineError::Synthesis`] on a
    /// binding failure.
    pub fn run(
        &self,
        tree: &DeclarationTree,
        token: &CancellationToken,
    ) -> Result<OutputSet, PipelineError> {
        let mut output = OutputSet::new();

        for id in tree.ids() {
            if !Self::is_candidate_node(tree, id, token)? {
                continue;
            }
            if let Some(model) = Self::evaluate(tree, id, token)? {
                output.add(self.synthesizer.synthesize(&model)?);
            }
        }

        tracing::info!(artifacts = output.len(), "pipeline run complete");
        Ok(output)
    }

    /// Run with stage 2 and 3 spread across rayon workers.
    ///
    /// Candidates are independent and share no mutable state, so the
    /// parallel pass produces the same artifacts as [`Pipeline::run`]
    /// (modulo identity fragments), in the same candidate order.
    ///
    /// # Errors
    /// Same contract as [`Pipeline::run`].
    pub fn run_parallel(
        &self,
        tree: &DeclarationTree,
        token: &CancellationToken,
    ) -> Result<OutputSet, PipelineError> {
        let discovered: Vec<DeclarationId> = tree
            .ids()
            .map(|id| Ok((id, Self::is_candidate_node(tree, id, token)?)))
            .filter_map(|r: Result<_, Cancelled>| match r {
                Ok((id, true)) => Some(Ok(id)),
                Ok((_, false)) => None,
                Err(e) => Some(Err(e)),
            })
            .collect::<Result<_, _>>()?;

        let artifacts: Vec<_> = discovered
            .into_par_iter()
            .map(|id| -> Result<_, PipelineError> {
                match Self::evaluate(tree, id, token)? {
                    Some(model) => Ok(Some(self.synthesizer.synthesize(&model)?)),
                    None => Ok(None),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let output: OutputSet = artifacts.into_iter().flatten().collect();
        tracing::info!(artifacts = output.len(), "parallel pipeline run complete");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbscript_test_utils::TreeFixture;

    fn token() -> CancellationToken {
        CancellationToken::new()
    }

    #[test]
    fn discovery_accepts_any_annotated_method() {
        // Discovery is syntactic only: even a method that will fail every
        // gating check is discovered.
        let fixture = TreeFixture::builder()
            .method_modifiers([dbscript_syntax::Modifier::Static])
            .build();
        assert!(Pipeline::is_candidate_node(fixture.tree(), fixture.method(), &token()).unwrap());
    }

    #[test]
    fn discovery_skips_unannotated_methods_and_classes() {
        let fixture = TreeFixture::builder().no_annotations().build();
        assert!(!Pipeline::is_candidate_node(fixture.tree(), fixture.method(), &token()).unwrap());
        assert!(
            !Pipeline::is_candidate_node(fixture.tree(), fixture.inner_class(), &token()).unwrap()
        );
    }

    #[test]
    fn evaluate_is_pure_across_calls() {
        let fixture = TreeFixture::annotated_method("init.sql");
        let first = Pipeline::evaluate(fixture.tree(), fixture.method(), &token())
            .unwrap()
            .expect("model");
        let second = Pipeline::evaluate(fixture.tree(), fixture.method(), &token())
            .unwrap()
            .expect("model");
        assert_eq!(first, second);
    }

    #[test]
    fn evaluate_drops_gated_methods() {
        let fixture = TreeFixture::builder()
            .method_modifiers([dbscript_syntax::Modifier::Static])
            .build();
        let model = Pipeline::evaluate(fixture.tree(), fixture.method(), &token()).unwrap();
        assert!(model.is_none());
    }
}
