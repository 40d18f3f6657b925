//! Extendability validation
//!
//! Four independent checks per annotated method occurrence, all evaluated
//! unconditionally — no short-circuiting between them — each producing at
//! most one diagnostic:
//!
//! 1. method modifiers permit extension (warning, gates generation)
//! 2. every enclosing class permits extension (warning, gates generation)
//! 3. the return type resolves to `String` (error, informative only)
//! 4. the annotation carries an argument list (error, informative only)
//!
//! The hierarchy diagnostic is always attributed to the innermost enclosing
//! class identifier, even when an outer ancestor is the actual violation.

use crate::diagnostic::{
    Diagnostic, CLASS_NOT_EXTENDABLE, INVALID_RETURN_TYPE, METHOD_NOT_EXTENDABLE,
    MISSING_ARGUMENTS,
};
use crate::matcher::AnnotationMatcher;
use dbscript_syntax::{CancellationToken, Cancelled, DeclarationId, DeclarationTree};

/// Resolved type name a script-backed method must return
const STRING_TYPE_NAME: &str = "String";

/// Per-method extendability validation.
///
/// Stateless; safe to share across parallel workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendabilityValidator;

impl ExtendabilityValidator {
    /// Create a validator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Whether a single declaration's modifiers permit extension
    ///
    /// # Errors
    /// Returns [`Cancelled`] if cancellation was requested.
    pub fn declaration_is_extendable(
        &self,
        tree: &DeclarationTree,
        id: DeclarationId,
        token: &CancellationToken,
    ) -> Result<bool, Cancelled> {
        match tree.get(id) {
            Some(decl) => decl.modifiers().is_extendable(token),
            None => Ok(false),
        }
    }

    /// Whether a class and every enclosing ancestor class permit extension.
    ///
    /// Walks outward from `class_id` through parent links; the walk stops at
    /// the first non-class ancestor (usually a namespace or the file root).
    /// Polls the token at each level.
    ///
    /// # Errors
    /// Returns [`Cancelled`] if cancellation was requested mid-walk.
    pub fn hierarchy_is_extendable(
        &self,
        tree: &DeclarationTree,
        class_id: DeclarationId,
        token: &CancellationToken,
    ) -> Result<bool, Cancelled> {
        let mut current = Some(class_id);

        while let Some(id) = current {
            let Some(decl) = tree.get(id) else { break };
            if !decl.is_class() {
                break;
            }

            token.checkpoint()?;

            if !decl.modifiers().is_extendable(token)? {
                return Ok(false);
            }
            current = decl.parent();
        }

        Ok(true)
    }

    /// Run all four checks for one method occurrence.
    ///
    /// Returns an empty vector when the declaration is not an analysis
    /// subject at all: not a method, not directly inside a class, or not
    /// carrying exactly one recognized annotation. (Zero or repeated
    /// annotations are silent by design.)
    ///
    /// # Errors
    /// Returns [`Cancelled`] if cancellation was requested.
    pub fn check(
        &self,
        tree: &DeclarationTree,
        method_id: DeclarationId,
        token: &CancellationToken,
    ) -> Result<Vec<Diagnostic>, Cancelled> {
        let Some(method_decl) = tree.get(method_id) else {
            return Ok(Vec::new());
        };
        let Some(method) = method_decl.as_method() else {
            return Ok(Vec::new());
        };
        let Some(class_id) = tree.enclosing_class(method_id) else {
            return Ok(Vec::new());
        };
        if method.annotations().is_empty() {
            return Ok(Vec::new());
        }
        let Some(annotation) = AnnotationMatcher::new().single(method) else {
            return Ok(Vec::new());
        };

        // All four checks run unconditionally; none suppresses another.
        let mut diagnostics = Vec::new();

        if !method_decl.modifiers().is_extendable(token)? {
            diagnostics.push(METHOD_NOT_EXTENDABLE.at(
                method_decl.location().clone(),
                &[method_decl.identifier()],
            ));
        }

        if !self.hierarchy_is_extendable(tree, class_id, token)? {
            // Attribution stays on the innermost class regardless of which
            // ancestor violated the rule.
            if let Some(class_decl) = tree.get(class_id) {
                diagnostics.push(CLASS_NOT_EXTENDABLE.at(
                    class_decl.location().clone(),
                    &[class_decl.identifier()],
                ));
            }
        }

        let return_type = method.return_type();
        if return_type.resolved_name() != Some(STRING_TYPE_NAME) {
            diagnostics.push(INVALID_RETURN_TYPE.at(
                method_decl.location().clone(),
                &[return_type.text(), method_decl.identifier()],
            ));
        }

        if !annotation.has_argument_list() {
            diagnostics.push(
                MISSING_ARGUMENTS.at(annotation.location().clone(), &[annotation.name()]),
            );
        }

        Ok(diagnostics)
    }
}
