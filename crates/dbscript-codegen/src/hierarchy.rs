//! Hierarchy reconstruction
//!
//! A generated companion composes with its original only when both share the
//! exact same enclosing types, so the wrapper nesting around the original is
//! rebuilt verbatim: every enclosing class outward from the innermost one,
//! plus the enclosing namespace if the outermost class sits in one. Wrapper
//! modifiers and identifiers are preserved as written; none of the original
//! members are duplicated.

use dbscript_syntax::{CancellationToken, Cancelled, DeclarationId, DeclarationTree};

/// One enclosing wrapper (class or namespace), captured verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    modifiers: String,
    keyword: &'static str,
    identifier: String,
}

impl Wrapper {
    /// Wrapper modifier text, space separated (may be empty)
    #[inline]
    #[must_use]
    pub fn modifiers(&self) -> &str {
        &self.modifiers
    }

    /// `class` or `namespace`
    #[inline]
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    /// Wrapper identifier as written
    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.identifier.as_str()
    }

    /// Opening unit: `modifiers keyword identifier` followed by a brace
    #[must_use]
    pub fn opening(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if !self.modifiers.is_empty() {
            parts.push(self.modifiers.as_str());
        }
        parts.push(self.keyword);
        parts.push(self.identifier.as_str());
        format!("{}\n{{", parts.join(" "))
    }

    /// Closing unit — generic braces close uniformly regardless of wrapper
    #[inline]
    #[must_use]
    pub const fn closing(&self) -> &'static str {
        "}"
    }
}

/// The reconstructed nesting structure around a candidate.
///
/// Wrappers are held innermost to outermost. Invariant: the number of
/// closing fragments always equals the number of opening fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyDescriptor {
    wrappers: Vec<Wrapper>,
}

impl HierarchyDescriptor {
    /// Rebuild the nesting around `class_id` by chasing parent links.
    ///
    /// Walks through every enclosing class; if the outermost class is
    /// enclosed by a namespace, that namespace becomes the final wrapper.
    /// Polls `token` at each level.
    ///
    /// # Errors
    /// Returns [`Cancelled`] if cancellation was requested mid-walk.
    pub fn reconstruct(
        tree: &DeclarationTree,
        class_id: DeclarationId,
        token: &CancellationToken,
    ) -> Result<Self, Cancelled> {
        let mut wrappers = Vec::new();
        let mut current = Some(class_id);

        while let Some(id) = current {
            token.checkpoint()?;

            let Some(decl) = tree.get(id) else { break };
            if !decl.is_class() {
                break;
            }

            wrappers.push(Wrapper {
                modifiers: decl.modifiers().render(),
                keyword: "class",
                identifier: decl.identifier().to_string(),
            });
            current = decl.parent();
        }

        if let Some(id) = current {
            if let Some(decl) = tree.get(id) {
                if decl.is_namespace() {
                    token.checkpoint()?;
                    wrappers.push(Wrapper {
                        modifiers: decl.modifiers().render(),
                        keyword: "namespace",
                        identifier: decl.identifier().to_string(),
                    });
                }
            }
        }

        Ok(Self { wrappers })
    }

    /// Wrappers, innermost first
    #[inline]
    #[must_use]
    pub fn wrappers(&self) -> &[Wrapper] {
        &self.wrappers
    }

    /// Nesting depth (classes plus optional namespace)
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.wrappers.len()
    }

    /// Opening units ordered outermost-first, for valid textual nesting
    #[must_use]
    pub fn opening_fragments(&self) -> Vec<String> {
        self.wrappers.iter().rev().map(Wrapper::opening).collect()
    }

    /// Closing units, one per wrapper
    #[must_use]
    pub fn closing_fragments(&self) -> Vec<&'static str> {
        self.wrappers.iter().map(Wrapper::closing).collect()
    }

    /// Full header text placed above the generated member
    #[must_use]
    pub fn header_text(&self) -> String {
        self.opening_fragments().join("\n")
    }

    /// Full footer text placed below the generated member
    #[must_use]
    pub fn footer_text(&self) -> String {
        "}".repeat(self.depth())
    }
}
