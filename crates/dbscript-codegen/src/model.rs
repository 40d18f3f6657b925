//! Declaration models
//!
//! A [`DeclarationModel`] is the flat record a candidate collapses into
//! before rendering: plain verbatim text extracted from the syntax nodes,
//! built once and consumed once. No semantic validation happens here — the
//! gating checks already passed by the time a candidate exists.

use crate::hierarchy::HierarchyDescriptor;
use dbscript_analyzer::Candidate;
use dbscript_syntax::{CancellationToken, Cancelled, DeclarationTree, Parameter};
use serde::Serialize;

/// Flat, immutable description of one generation candidate.
///
/// Field values are verbatim source text; the template binds them by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclarationModel {
    /// Identifier of the innermost enclosing class
    pub class_name: String,
    /// Identifier of the annotated method
    pub method_name: String,
    /// Return type text as written
    pub method_return_type: String,
    /// Original modifier text of the method
    pub method_modifiers: String,
    /// Modifier text for the generated member, extend marker removed
    pub new_method_modifiers: String,
    /// Comma-separated parameter names
    pub parameter_names: String,
    /// Parameter declarations with the enclosing delimiters stripped
    pub parameter_declarations: String,
    /// Raw script-path argument text (may be empty when the list is missing)
    pub script_path: String,
    /// Reconstructed wrapper header, outermost first
    pub class_header: String,
    /// Matching closing braces, one per wrapper
    pub class_footer: String,
}

/// Builds [`DeclarationModel`]s from validated candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationModelBuilder;

impl DeclarationModelBuilder {
    /// Create a builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Flatten a candidate into a model.
    ///
    /// Returns `None` when the candidate's ids no longer resolve in the
    /// tree — possible only if the caller mixed candidates across trees.
    ///
    /// # Errors
    /// Returns [`Cancelled`] if cancellation was requested during the
    /// hierarchy walk.
    pub fn build(
        &self,
        tree: &DeclarationTree,
        candidate: &Candidate,
        token: &CancellationToken,
    ) -> Result<Option<DeclarationModel>, Cancelled> {
        let Some(method_decl) = tree.get(candidate.method()) else {
            return Ok(None);
        };
        let Some(class_decl) = tree.get(candidate.class()) else {
            return Ok(None);
        };
        let Some(method) = method_decl.as_method() else {
            return Ok(None);
        };

        let hierarchy = HierarchyDescriptor::reconstruct(tree, candidate.class(), token)?;

        let parameter_names = method
            .parameters()
            .iter()
            .map(Parameter::identifier)
            .collect::<Vec<_>>()
            .join(", ");

        let parameter_declarations = method
            .parameters()
            .iter()
            .map(Parameter::text)
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Some(DeclarationModel {
            class_name: class_decl.identifier().to_string(),
            method_name: method_decl.identifier().to_string(),
            method_return_type: method.return_type().text().to_string(),
            method_modifiers: method_decl.modifiers().render(),
            new_method_modifiers: method_decl.modifiers().render_without_extend_marker(),
            parameter_names,
            parameter_declarations,
            script_path: candidate.annotation().arguments_text(),
            class_header: hierarchy.header_text(),
            class_footer: hierarchy.footer_text(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbscript_test_utils::TreeFixture;
    use dbscript_syntax::{Modifier, Parameter};

    fn token() -> CancellationToken {
        CancellationToken::new()
    }

    fn model_for(fixture: &TreeFixture) -> DeclarationModel {
        let candidate = Candidate::evaluate(fixture.tree(), fixture.method(), &token())
            .unwrap()
            .expect("candidate");
        DeclarationModelBuilder::new()
            .build(fixture.tree(), &candidate, &token())
            .unwrap()
            .expect("model")
    }

    #[test]
    fn happy_path_model_fields() {
        let fixture = TreeFixture::annotated_method("init.sql");
        let model = model_for(&fixture);

        assert_eq!(model.class_name, "Repository");
        assert_eq!(model.method_name, "LoadUser");
        assert_eq!(model.method_return_type, "string");
        assert_eq!(model.method_modifiers, "public partial");
        assert_eq!(model.new_method_modifiers, "public");
        assert_eq!(model.parameter_names, "id");
        assert_eq!(model.parameter_declarations, "int id");
        assert_eq!(model.script_path, "\"init.sql\"");
        assert_eq!(model.class_header, "public partial class Repository\n{");
        assert_eq!(model.class_footer, "}");
    }

    #[test]
    fn extend_marker_is_stripped_from_new_modifiers_only() {
        let fixture = TreeFixture::builder()
            .method_modifiers([Modifier::Protected, Modifier::Internal, Modifier::Partial])
            .build();
        let model = model_for(&fixture);

        assert_eq!(model.method_modifiers, "protected internal partial");
        assert_eq!(model.new_method_modifiers, "protected internal");
    }

    #[test]
    fn multiple_parameters_join_with_commas() {
        let fixture = TreeFixture::builder()
            .parameters([
                Parameter::new("id", "int id"),
                Parameter::new("name", "string name"),
            ])
            .build();
        let model = model_for(&fixture);

        assert_eq!(model.parameter_names, "id, name");
        assert_eq!(model.parameter_declarations, "int id, string name");
    }

    #[test]
    fn missing_argument_list_leaves_script_path_empty() {
        let fixture = TreeFixture::builder().without_annotation_arguments().build();
        let model = model_for(&fixture);
        assert_eq!(model.script_path, "");
    }

    #[test]
    fn nested_hierarchy_flows_into_header_and_footer() {
        let fixture = TreeFixture::builder()
            .nesting_depth(2)
            .with_namespace("Data")
            .build();
        let model = model_for(&fixture);

        assert!(model.class_header.starts_with("namespace Data"));
        assert_eq!(model.class_footer, "}}}");
    }

    #[test]
    fn build_observes_cancellation() {
        let fixture = TreeFixture::annotated_method("init.sql");
        let candidate = Candidate::evaluate(fixture.tree(), fixture.method(), &token())
            .unwrap()
            .expect("candidate");

        let cancelled = CancellationToken::new();
        cancelled.cancel();
        let result = DeclarationModelBuilder::new().build(fixture.tree(), &candidate, &cancelled);
        assert_eq!(result, Err(Cancelled));
    }
}
