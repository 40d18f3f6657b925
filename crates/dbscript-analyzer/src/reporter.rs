//! The diagnostics pass
//!
//! A traversal over the whole tree that reports validation diagnostics for
//! every annotated method occurrence. Runs independently of generation:
//! neither pass reads the other's output, and a declaration can produce a
//! diagnostic without producing an artifact and vice versa.

use crate::diagnostic::Diagnostic;
use crate::extendability::ExtendabilityValidator;
use dbscript_syntax::{CancellationToken, Cancelled, DeclarationTree};

/// Tree-wide diagnostics reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticReporter {
    validator: ExtendabilityValidator,
}

impl DiagnosticReporter {
    /// Create a reporter
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report diagnostics for every method in the tree, in arena order.
    ///
    /// # Errors
    /// Returns [`Cancelled`] if cancellation was requested; no partial
    /// diagnostics are returned in that case.
    pub fn run(
        &self,
        tree: &DeclarationTree,
        token: &CancellationToken,
    ) -> Result<Vec<Diagnostic>, Cancelled> {
        let mut diagnostics = Vec::new();

        for (id, decl) in tree.iter() {
            token.checkpoint()?;
            if !decl.is_method() {
                continue;
            }
            diagnostics.extend(self.validator.check(tree, id, token)?);
        }

        tracing::debug!(count = diagnostics.len(), "diagnostics pass complete");
        Ok(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbscript_test_utils::TreeFixture;
    use dbscript_syntax::Modifier;

    #[test]
    fn clean_tree_reports_nothing() {
        let fixture = TreeFixture::annotated_method("init.sql");
        let diags = DiagnosticReporter::new()
            .run(fixture.tree(), &CancellationToken::new())
            .unwrap();
        assert!(diags.is_empty());
    }

    #[test]
    fn reports_for_each_offending_method() {
        let fixture = TreeFixture::builder()
            .method_modifiers([Modifier::Public, Modifier::Async, Modifier::Partial])
            .sibling_method("LoadOrder", "order.sql")
            .build();
        let diags = DiagnosticReporter::new()
            .run(fixture.tree(), &CancellationToken::new())
            .unwrap();

        // Both the fixture method and its sibling carry the async modifier.
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.code == "DSR1001"));
    }

    #[test]
    fn cancelled_run_returns_no_partial_output() {
        let fixture = TreeFixture::annotated_method("init.sql");
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(
            DiagnosticReporter::new().run(fixture.tree(), &token),
            Err(Cancelled)
        );
    }
}
