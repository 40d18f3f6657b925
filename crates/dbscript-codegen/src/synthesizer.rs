//! Code synthesis
//!
//! Renders declaration models against the fixed companion template. The
//! parsed template is process-wide state: initialized lazily, at most once,
//! immutable afterward, safe for concurrent readers. A template that fails
//! validation aborts the run — no declaration can be generated without it,
//! so per-declaration reporting would be noise.

use crate::model::DeclarationModel;
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::collections::BTreeSet;

/// Embedded companion template text
const TEMPLATE_TEXT: &str = include_str!("templates/companion.txt");

/// Shared parsed template, initialized on first use
static TEMPLATE: OnceCell<Template> = OnceCell::new();

/// Errors raised during synthesis
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthesisError {
    /// The template failed validation — fatal for the whole run
    #[error("companion template is invalid: {0}")]
    Template(String),

    /// The model could not be bound to the template fields
    #[error("failed to bind model fields: {0}")]
    Bind(String),
}

/// A parsed and validated companion template.
///
/// Placeholders are written `{{ field }}` and must each name a
/// [`DeclarationModel`] field.
#[derive(Debug)]
struct Template {
    text: &'static str,
    placeholders: Vec<String>,
}

impl Template {
    /// Fields every usable template must reference
    const REQUIRED: [&'static str; 3] = ["class_header", "method_name", "class_footer"];

    fn parse(text: &'static str) -> Result<Self, SynthesisError> {
        let known = DeclarationModel::field_names();
        let mut placeholders = BTreeSet::new();

        let mut rest = text;
        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                return Err(SynthesisError::Template(
                    "unterminated placeholder".to_string(),
                ));
            };
            let name = after[..end].trim();
            if name.is_empty() {
                return Err(SynthesisError::Template("empty placeholder".to_string()));
            }
            if !known.contains(&name) {
                return Err(SynthesisError::Template(format!(
                    "unknown placeholder: {name}"
                )));
            }
            placeholders.insert(name.to_string());
            rest = &after[end + 2..];
        }

        for required in Self::REQUIRED {
            if !placeholders.contains(required) {
                return Err(SynthesisError::Template(format!(
                    "missing required placeholder: {required}"
                )));
            }
        }

        Ok(Self {
            text,
            placeholders: placeholders.into_iter().collect(),
        })
    }

    /// The shared instance, parsed on first call.
    ///
    /// # Errors
    /// Returns [`SynthesisError::Template`] if the embedded template is
    /// invalid; every subsequent call fails identically.
    fn shared() -> Result<&'static Self, SynthesisError> {
        TEMPLATE.get_or_try_init(|| Self::parse(TEMPLATE_TEXT))
    }

    fn render(&self, model: &DeclarationModel) -> Result<String, SynthesisError> {
        let bound = serde_json::to_value(model)
            .map_err(|e| SynthesisError::Bind(e.to_string()))?;
        let Value::Object(fields) = bound else {
            return Err(SynthesisError::Bind("model is not a field map".to_string()));
        };

        let mut rendered = String::with_capacity(self.text.len());
        let mut rest = self.text;
        while let Some(start) = rest.find("{{") {
            rendered.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            // Parsing guaranteed every placeholder is terminated and known.
            let end = after
                .find("}}")
                .ok_or_else(|| SynthesisError::Bind("unterminated placeholder".to_string()))?;
            let name = after[..end].trim();
            match fields.get(name) {
                Some(Value::String(value)) => rendered.push_str(value),
                _ => return Err(SynthesisError::Bind(format!("missing field: {name}"))),
            }
            rest = &after[end + 2..];
        }
        rendered.push_str(rest);

        Ok(rendered)
    }
}

impl DeclarationModel {
    /// Names of every bindable model field
    fn field_names() -> BTreeSet<&'static str> {
        BTreeSet::from([
            "class_name",
            "method_name",
            "method_return_type",
            "method_modifiers",
            "new_method_modifiers",
            "parameter_names",
            "parameter_declarations",
            "script_path",
            "class_header",
            "class_footer",
        ])
    }
}

/// Synthesized companion source plus its output identity.
///
/// Created fresh every run for every surviving candidate; never patched
/// incrementally, always fully replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    hint_name: String,
    content: String,
}

impl GeneratedArtifact {
    /// Output naming key: `{Class}/{Method}_{8hex}.g.cs`
    #[inline]
    #[must_use]
    pub fn hint_name(&self) -> &str {
        &self.hint_name
    }

    /// Rendered source text
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Renders declaration models into generated artifacts
#[derive(Debug, Clone, Copy)]
pub struct CodeSynthesizer {
    template: &'static Template,
}

impl CodeSynthesizer {
    /// Create a synthesizer over the shared template.
    ///
    /// # Errors
    /// Returns [`SynthesisError::Template`] when the template fails to
    /// validate. Callers should treat this as fatal for the entire run.
    pub fn new() -> Result<Self, SynthesisError> {
        Ok(Self {
            template: Template::shared()?,
        })
    }

    /// Render one model into an artifact.
    ///
    /// The hint name carries a short random fragment so candidates sharing
    /// a class/method name cannot collide within a run. This is a
    /// uniqueness scheme, not a determinism guarantee: re-running on
    /// unchanged input yields content-equal artifacts with distinct names.
    ///
    /// # Errors
    /// Returns [`SynthesisError::Bind`] if a template field cannot be
    /// bound from the model.
    pub fn synthesize(&self, model: &DeclarationModel) -> Result<GeneratedArtifact, SynthesisError> {
        let content = self.template.render(model)?;
        let unique = hex::encode(rand::random::<[u8; 4]>());
        let hint_name = format!("{}/{}_{}.g.cs", model.class_name, model.method_name, unique);

        tracing::debug!(%hint_name, "synthesized companion");
        Ok(GeneratedArtifact { hint_name, content })
    }
}
