//! Testing utilities for the dbscript workspace
//!
//! Shared declaration-tree fixtures so analyzer, codegen, and pipeline tests
//! build the same shapes without repeating builder plumbing.

#![allow(missing_docs)]

use dbscript_syntax::{
    AnnotationUsage, DeclarationId, DeclarationTree, DeclarationTreeBuilder, MethodData, Modifier,
    ModifierSet, Parameter, SourceLocation, TypeRef,
};

/// Default identifier of the innermost class in every fixture
pub const INNER_CLASS: &str = "Repository";

/// Default identifier of the fixture method
pub const METHOD: &str = "LoadUser";

/// A built tree plus the ids tests care about.
#[derive(Debug)]
pub struct TreeFixture {
    tree: DeclarationTree,
    namespace: Option<DeclarationId>,
    classes: Vec<DeclarationId>,
    method: DeclarationId,
    siblings: Vec<DeclarationId>,
}

impl TreeFixture {
    /// Happy path: `public partial class Repository` with one extendable
    /// annotated method returning a resolved string type.
    pub fn annotated_method(script_path: &str) -> Self {
        Self::builder().script_path(script_path).build()
    }

    pub fn builder() -> FixtureBuilder {
        FixtureBuilder::default()
    }

    pub fn tree(&self) -> &DeclarationTree {
        &self.tree
    }

    pub fn method(&self) -> DeclarationId {
        self.method
    }

    /// Sibling annotated methods added via the builder
    pub fn sibling_methods(&self) -> &[DeclarationId] {
        &self.siblings
    }

    /// Innermost enclosing class of the fixture method
    pub fn inner_class(&self) -> DeclarationId {
        *self.classes.last().expect("fixture always has a class")
    }

    /// Class chain, outermost first
    pub fn classes(&self) -> &[DeclarationId] {
        &self.classes
    }

    pub fn namespace(&self) -> Option<DeclarationId> {
        self.namespace
    }

    pub fn method_name(&self) -> &str {
        self.tree
            .get(self.method)
            .expect("fixture method exists")
            .identifier()
    }

    pub fn inner_class_name(&self) -> &str {
        self.tree
            .get(self.inner_class())
            .expect("fixture class exists")
            .identifier()
    }
}

/// What annotations the fixture method carries
#[derive(Debug, Clone, PartialEq, Eq)]
enum AnnotationShape {
    WithPath(String),
    MissingArguments,
    Repeated,
    None,
}

/// Configurable fixture builder.
///
/// Defaults to the happy path: one `public partial` class, one
/// `public partial` method returning `string` (resolved to `String`),
/// annotated `DbScriptFile("init.sql")`, with one `int id` parameter.
#[derive(Debug)]
pub struct FixtureBuilder {
    namespace: Option<String>,
    depth: usize,
    outer_modifiers: ModifierSet,
    inner_modifiers: ModifierSet,
    method_modifiers: ModifierSet,
    return_type: TypeRef,
    annotation: AnnotationShape,
    parameters: Vec<Parameter>,
    siblings: Vec<(String, String)>,
}

impl Default for FixtureBuilder {
    fn default() -> Self {
        Self {
            namespace: None,
            depth: 1,
            outer_modifiers: ModifierSet::from_iter([Modifier::Public, Modifier::Partial]),
            inner_modifiers: ModifierSet::from_iter([Modifier::Public, Modifier::Partial]),
            method_modifiers: ModifierSet::from_iter([Modifier::Public, Modifier::Partial]),
            return_type: TypeRef::new("string").with_resolution("String"),
            annotation: AnnotationShape::WithPath("init.sql".to_string()),
            parameters: vec![Parameter::new("id", "int id")],
            siblings: Vec::new(),
        }
    }
}

impl FixtureBuilder {
    /// Wrap the class chain in a namespace
    #[must_use]
    pub fn with_namespace(mut self, name: &str) -> Self {
        self.namespace = Some(name.to_string());
        self
    }

    /// Nest the inner class inside one outer class
    #[must_use]
    pub fn nested(mut self) -> Self {
        self.depth = self.depth.max(2);
        self
    }

    /// Nest the inner class `depth` classes deep (>= 1)
    #[must_use]
    pub fn nesting_depth(mut self, depth: usize) -> Self {
        self.depth = depth.max(1);
        self
    }

    /// Modifiers of every wrapper class above the innermost one.
    ///
    /// Implies a nesting depth of at least two.
    #[must_use]
    pub fn outer_class_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.outer_modifiers = ModifierSet::from_iter(modifiers);
        self.depth = self.depth.max(2);
        self
    }

    /// Modifiers of the innermost class
    #[must_use]
    pub fn inner_class_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.inner_modifiers = ModifierSet::from_iter(modifiers);
        self
    }

    /// Modifiers of the fixture method
    #[must_use]
    pub fn method_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.method_modifiers = ModifierSet::from_iter(modifiers);
        self
    }

    /// Raw return type text, left unresolved
    #[must_use]
    pub fn return_type_text(mut self, text: &str) -> Self {
        self.return_type = TypeRef::new(text);
        self
    }

    /// Script path inside the annotation argument
    #[must_use]
    pub fn script_path(mut self, path: &str) -> Self {
        self.annotation = AnnotationShape::WithPath(path.to_string());
        self
    }

    /// Annotation written without any argument list
    #[must_use]
    pub fn without_annotation_arguments(mut self) -> Self {
        self.annotation = AnnotationShape::MissingArguments;
        self
    }

    /// Two recognized annotations on the same method
    #[must_use]
    pub fn repeated_annotation(mut self) -> Self {
        self.annotation = AnnotationShape::Repeated;
        self
    }

    /// Method without any annotation at all
    #[must_use]
    pub fn no_annotations(mut self) -> Self {
        self.annotation = AnnotationShape::None;
        self
    }

    /// Replace the method parameter list
    #[must_use]
    pub fn parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters = parameters.into_iter().collect();
        self
    }

    /// Add another annotated sibling method to the innermost class
    #[must_use]
    pub fn sibling_method(mut self, name: &str, script_path: &str) -> Self {
        self.siblings.push((name.to_string(), script_path.to_string()));
        self
    }

    fn annotations(&self, line: u32) -> Vec<AnnotationUsage> {
        let loc = SourceLocation::new("repo.cs", line, 5);
        match &self.annotation {
            AnnotationShape::WithPath(path) => vec![AnnotationUsage::new(
                "DbScriptFile",
                vec![format!("\"{path}\"")],
                loc,
            )],
            AnnotationShape::MissingArguments => {
                vec![AnnotationUsage::without_arguments("DbScriptFile", loc)]
            }
            AnnotationShape::Repeated => vec![
                AnnotationUsage::new("DbScriptFile", vec!["\"a.sql\"".to_string()], loc.clone()),
                AnnotationUsage::new("DbScriptFile", vec!["\"b.sql\"".to_string()], loc),
            ],
            AnnotationShape::None => Vec::new(),
        }
    }

    pub fn build(self) -> TreeFixture {
        let mut builder = DeclarationTreeBuilder::new("repo.cs");

        let namespace = self
            .namespace
            .as_ref()
            .map(|name| builder.namespace(name).expect("namespace insert"));

        let mut classes = Vec::new();
        let mut parent = namespace;
        for level in 0..self.depth {
            let innermost = level == self.depth - 1;
            let (name, modifiers) = if innermost {
                (INNER_CLASS.to_string(), self.inner_modifiers.clone())
            } else {
                (format!("Wrapper{level}"), self.outer_modifiers.clone())
            };
            let id = builder
                .class(name, modifiers, parent)
                .expect("class insert");
            classes.push(id);
            parent = Some(id);
        }
        let inner = *classes.last().expect("at least one class");

        let method = builder
            .method(
                METHOD,
                self.method_modifiers.clone(),
                MethodData::new(
                    self.return_type.clone(),
                    self.parameters.clone(),
                    self.annotations(10),
                ),
                inner,
            )
            .expect("method insert");

        let mut siblings = Vec::new();
        for (i, (name, path)) in self.siblings.iter().enumerate() {
            let line = 20 + i as u32;
            let id = builder
                .method(
                    name,
                    self.method_modifiers.clone(),
                    MethodData::new(
                        self.return_type.clone(),
                        self.parameters.clone(),
                        vec![AnnotationUsage::new(
                            "DbScriptFile",
                            vec![format!("\"{path}\"")],
                            SourceLocation::new("repo.cs", line, 5),
                        )],
                    ),
                    inner,
                )
                .expect("sibling insert");
            siblings.push(id);
        }

        TreeFixture {
            tree: builder.finish(),
            namespace,
            classes,
            method,
            siblings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fixture_shape() {
        let fixture = TreeFixture::annotated_method("init.sql");
        assert_eq!(fixture.classes().len(), 1);
        assert_eq!(fixture.method_name(), METHOD);
        assert_eq!(fixture.inner_class_name(), INNER_CLASS);
        assert_eq!(fixture.tree().enclosing_class(fixture.method()), Some(fixture.inner_class()));
    }

    #[test]
    fn nesting_depth_produces_chain() {
        let fixture = TreeFixture::builder().nesting_depth(3).with_namespace("Data").build();
        assert_eq!(fixture.classes().len(), 3);
        assert!(fixture.namespace().is_some());

        // Innermost class's ancestors run outward to the namespace.
        let ancestors: Vec<_> = fixture.tree().ancestors(fixture.inner_class()).collect();
        assert_eq!(ancestors.len(), 3);
    }

    #[test]
    fn sibling_methods_share_the_class() {
        let fixture = TreeFixture::builder()
            .sibling_method("LoadOrder", "order.sql")
            .build();
        assert_eq!(fixture.sibling_methods().len(), 1);
        let sibling = fixture.sibling_methods()[0];
        assert_eq!(fixture.tree().enclosing_class(sibling), Some(fixture.inner_class()));
    }
}
