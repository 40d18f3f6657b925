//! Candidate evaluation
//!
//! A [`Candidate`] is a method + innermost class + annotation triple that
//! survived both gating checks. Evaluation is a pure function of the tree
//! and the method id: it reads nothing else and emits no diagnostics, so a
//! host can memoize it per declaration.

use crate::extendability::ExtendabilityValidator;
use crate::matcher::AnnotationMatcher;
use dbscript_syntax::{
    AnnotationUsage, CancellationToken, Cancelled, DeclarationId, DeclarationTree,
};

/// A validated generation candidate.
///
/// Only produced when the method and its entire class hierarchy are
/// extendable and the method carries exactly one recognized annotation.
/// The non-gating checks (return type, argument list) do not participate
/// here; their diagnostics surface through the reporter pass instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    method: DeclarationId,
    class: DeclarationId,
    annotation: AnnotationUsage,
}

impl Candidate {
    /// Evaluate one declaration into a candidate, or nothing.
    ///
    /// Mirrors the gating sequence: method kind, class parent, method
    /// extendability, hierarchy extendability, exactly one recognized
    /// annotation. Any miss yields `Ok(None)` silently.
    ///
    /// # Errors
    /// Returns [`Cancelled`] if cancellation was requested during a
    /// modifier scan or the hierarchy walk.
    pub fn evaluate(
        tree: &DeclarationTree,
        method_id: DeclarationId,
        token: &CancellationToken,
    ) -> Result<Option<Self>, Cancelled> {
        token.checkpoint()?;

        let Some(method_decl) = tree.get(method_id) else {
            return Ok(None);
        };
        let Some(method) = method_decl.as_method() else {
            return Ok(None);
        };
        let Some(class_id) = tree.enclosing_class(method_id) else {
            return Ok(None);
        };

        if !method_decl.modifiers().is_extendable(token)? {
            return Ok(None);
        }

        let validator = ExtendabilityValidator::new();
        if !validator.hierarchy_is_extendable(tree, class_id, token)? {
            return Ok(None);
        }

        let Some(annotation) = AnnotationMatcher::new().single(method) else {
            return Ok(None);
        };

        Ok(Some(Self {
            method: method_id,
            class: class_id,
            annotation: annotation.clone(),
        }))
    }

    /// The candidate method
    #[inline]
    #[must_use]
    pub fn method(&self) -> DeclarationId {
        self.method
    }

    /// The innermost enclosing class
    #[inline]
    #[must_use]
    pub fn class(&self) -> DeclarationId {
        self.class
    }

    /// The single recognized annotation
    #[inline]
    #[must_use]
    pub fn annotation(&self) -> &AnnotationUsage {
        &self.annotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbscript_test_utils::TreeFixture;
    use dbscript_syntax::Modifier;

    fn token() -> CancellationToken {
        CancellationToken::new()
    }

    #[test]
    fn happy_path_produces_candidate() {
        let fixture = TreeFixture::annotated_method("init.sql");
        let candidate = Candidate::evaluate(fixture.tree(), fixture.method(), &token())
            .unwrap()
            .expect("candidate");

        assert_eq!(candidate.method(), fixture.method());
        assert_eq!(candidate.class(), fixture.inner_class());
        assert_eq!(candidate.annotation().arguments_text(), "\"init.sql\"");
    }

    #[test]
    fn non_extendable_method_is_rejected() {
        let fixture = TreeFixture::builder()
            .method_modifiers([Modifier::Public, Modifier::Static, Modifier::Partial])
            .build();
        let candidate = Candidate::evaluate(fixture.tree(), fixture.method(), &token()).unwrap();
        assert!(candidate.is_none());
    }

    #[test]
    fn non_extendable_ancestor_is_rejected() {
        let fixture = TreeFixture::builder()
            .outer_class_modifiers([Modifier::Public, Modifier::Sealed, Modifier::Partial])
            .build();
        let candidate = Candidate::evaluate(fixture.tree(), fixture.method(), &token()).unwrap();
        assert!(candidate.is_none());
    }

    #[test]
    fn repeated_annotation_is_rejected_silently() {
        let fixture = TreeFixture::builder().repeated_annotation().build();
        let candidate = Candidate::evaluate(fixture.tree(), fixture.method(), &token()).unwrap();
        assert!(candidate.is_none());
    }

    #[test]
    fn missing_argument_list_still_produces_candidate() {
        // The missing-arguments check is informative only; gating ignores it.
        let fixture = TreeFixture::builder().without_annotation_arguments().build();
        let candidate = Candidate::evaluate(fixture.tree(), fixture.method(), &token())
            .unwrap()
            .expect("candidate despite missing arguments");
        assert_eq!(candidate.annotation().arguments_text(), "");
    }

    #[test]
    fn invalid_return_type_still_produces_candidate() {
        let fixture = TreeFixture::builder().return_type_text("int").build();
        let candidate = Candidate::evaluate(fixture.tree(), fixture.method(), &token()).unwrap();
        assert!(candidate.is_some());
    }

    #[test]
    fn class_declaration_is_not_a_candidate() {
        let fixture = TreeFixture::annotated_method("init.sql");
        let candidate =
            Candidate::evaluate(fixture.tree(), fixture.inner_class(), &token()).unwrap();
        assert!(candidate.is_none());
    }

    #[test]
    fn evaluation_observes_cancellation() {
        let fixture = TreeFixture::annotated_method("init.sql");
        let token = CancellationToken::new();
        token.cancel();
        let result = Candidate::evaluate(fixture.tree(), fixture.method(), &token);
        assert_eq!(result, Err(Cancelled));
    }
}
