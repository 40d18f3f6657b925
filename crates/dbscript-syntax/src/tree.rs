//! The declaration tree
//!
//! An arena-owned, immutable tree of declarations. Nodes are addressed by
//! [`DeclarationId`] and hold only an index back-reference to their parent;
//! traversal chases parent links and never mutates the tree. The tree is
//! owned by the host that built it; this workspace only reads it.

use crate::annotation::AnnotationUsage;
use crate::location::SourceLocation;
use crate::modifier::ModifierSet;
use crate::types::{Parameter, TypeRef};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Index of a declaration within its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeclarationId(u32);

impl DeclarationId {
    /// Raw arena index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for DeclarationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a declaration is, plus kind-specific payload
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationKind {
    /// An enclosing namespace
    Namespace,
    /// A class (possibly nested)
    Class,
    /// A method, with its signature and annotations
    Method(MethodData),
}

impl DeclarationKind {
    /// Keyword used when re-emitting this declaration as a wrapper
    #[inline]
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            DeclarationKind::Namespace => "namespace",
            DeclarationKind::Class => "class",
            DeclarationKind::Method(_) => "method",
        }
    }
}

/// Signature data carried by method declarations
#[derive(Debug, Clone, PartialEq)]
pub struct MethodData {
    return_type: TypeRef,
    parameters: Vec<Parameter>,
    annotations: Vec<AnnotationUsage>,
}

impl MethodData {
    /// Create method payload
    #[must_use]
    pub fn new(
        return_type: TypeRef,
        parameters: impl IntoIterator<Item = Parameter>,
        annotations: impl IntoIterator<Item = AnnotationUsage>,
    ) -> Self {
        Self {
            return_type,
            parameters: parameters.into_iter().collect(),
            annotations: annotations.into_iter().collect(),
        }
    }

    /// Declared return type
    #[inline]
    #[must_use]
    pub fn return_type(&self) -> &TypeRef {
        &self.return_type
    }

    /// Parameters in declaration order
    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Attached annotations in source order
    #[inline]
    #[must_use]
    pub fn annotations(&self) -> &[AnnotationUsage] {
        &self.annotations
    }
}

/// A single node of the declaration tree
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    kind: DeclarationKind,
    identifier: String,
    modifiers: ModifierSet,
    parent: Option<DeclarationId>,
    location: SourceLocation,
}

impl Declaration {
    /// Declaration kind and payload
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &DeclarationKind {
        &self.kind
    }

    /// Declared identifier
    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Modifier keywords in source order
    #[inline]
    #[must_use]
    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    /// Enclosing declaration, if any
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<DeclarationId> {
        self.parent
    }

    /// Source position
    #[inline]
    #[must_use]
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// Method payload, if this is a method
    #[inline]
    #[must_use]
    pub fn as_method(&self) -> Option<&MethodData> {
        match &self.kind {
            DeclarationKind::Method(data) => Some(data),
            _ => None,
        }
    }

    /// Whether this is a method
    #[inline]
    #[must_use]
    pub fn is_method(&self) -> bool {
        matches!(self.kind, DeclarationKind::Method(_))
    }

    /// Whether this is a class
    #[inline]
    #[must_use]
    pub fn is_class(&self) -> bool {
        matches!(self.kind, DeclarationKind::Class)
    }

    /// Whether this is a namespace
    #[inline]
    #[must_use]
    pub fn is_namespace(&self) -> bool {
        matches!(self.kind, DeclarationKind::Namespace)
    }
}

/// Errors raised while building a tree
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    /// Parent id does not exist in the arena
    #[error("unknown parent declaration: {0}")]
    UnknownParent(DeclarationId),

    /// The child kind cannot nest under the parent kind
    #[error("a {child} cannot be declared inside a {parent}")]
    InvalidNesting {
        /// Kind being inserted
        child: &'static str,
        /// Kind of the requested parent
        parent: &'static str,
    },
}

/// Arena-owned immutable declaration tree
#[derive(Debug, Clone, Default)]
pub struct DeclarationTree {
    nodes: Vec<Declaration>,
}

impl DeclarationTree {
    /// Look up a declaration by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: DeclarationId) -> Option<&Declaration> {
        self.nodes.get(id.index())
    }

    /// Parent of a declaration, if any
    #[inline]
    #[must_use]
    pub fn parent_of(&self, id: DeclarationId) -> Option<DeclarationId> {
        self.get(id).and_then(Declaration::parent)
    }

    /// Iterate all declaration ids in arena order
    pub fn ids(&self) -> impl Iterator<Item = DeclarationId> + '_ {
        (0..self.nodes.len()).map(|i| DeclarationId(i as u32))
    }

    /// Iterate ids together with their declarations
    pub fn iter(&self) -> impl Iterator<Item = (DeclarationId, &Declaration)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, d)| (DeclarationId(i as u32), d))
    }

    /// Number of declarations
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no declarations
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Chase parent links from `id` outward (excluding `id` itself)
    pub fn ancestors(&self, id: DeclarationId) -> impl Iterator<Item = DeclarationId> + '_ {
        let mut current = self.parent_of(id);
        std::iter::from_fn(move || {
            let next = current?;
            current = self.parent_of(next);
            Some(next)
        })
    }

    /// Innermost enclosing class of a declaration.
    ///
    /// Only the immediate parent is considered: a method whose parent is not
    /// a class has no enclosing class and never becomes a candidate.
    #[must_use]
    pub fn enclosing_class(&self, id: DeclarationId) -> Option<DeclarationId> {
        let parent = self.parent_of(id)?;
        self.get(parent).filter(|d| d.is_class()).map(|_| parent)
    }
}

/// Builder producing an immutable [`DeclarationTree`].
///
/// Enforces nesting rules at insertion time: namespaces are root-only,
/// classes nest under namespaces or classes, methods only under classes.
/// Locations are synthesized from the file name and insertion order; hosts
/// with real positions use the `*_at` variants.
#[derive(Debug)]
pub struct DeclarationTreeBuilder {
    file: String,
    nodes: Vec<Declaration>,
}

impl DeclarationTreeBuilder {
    /// Start building a tree for one source file
    #[must_use]
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            nodes: Vec::new(),
        }
    }

    fn next_location(&self) -> SourceLocation {
        SourceLocation::new(self.file.clone(), self.nodes.len() as u32 + 1, 1)
    }

    fn push(
        &mut self,
        kind: DeclarationKind,
        identifier: String,
        modifiers: ModifierSet,
        parent: Option<DeclarationId>,
        location: SourceLocation,
    ) -> Result<DeclarationId, TreeError> {
        if let Some(parent_id) = parent {
            let parent_decl = self
                .nodes
                .get(parent_id.index())
                .ok_or(TreeError::UnknownParent(parent_id))?;

            let legal = match kind {
                DeclarationKind::Namespace => false,
                DeclarationKind::Class => {
                    matches!(parent_decl.kind, DeclarationKind::Namespace | DeclarationKind::Class)
                }
                DeclarationKind::Method(_) => matches!(parent_decl.kind, DeclarationKind::Class),
            };
            if !legal {
                return Err(TreeError::InvalidNesting {
                    child: kind.keyword(),
                    parent: parent_decl.kind.keyword(),
                });
            }
        } else if matches!(kind, DeclarationKind::Method(_)) {
            return Err(TreeError::InvalidNesting {
                child: "method",
                parent: "file",
            });
        }

        let id = DeclarationId(self.nodes.len() as u32);
        self.nodes.push(Declaration {
            kind,
            identifier,
            modifiers,
            parent,
            location,
        });
        Ok(id)
    }

    /// Add a root-level namespace
    ///
    /// # Errors
    /// Never fails today; kept fallible for symmetry with the other inserts.
    pub fn namespace(&mut self, name: impl Into<String>) -> Result<DeclarationId, TreeError> {
        let location = self.next_location();
        self.push(
            DeclarationKind::Namespace,
            name.into(),
            ModifierSet::new(),
            None,
            location,
        )
    }

    /// Add a class under an optional parent (namespace, class, or file root)
    ///
    /// # Errors
    /// Returns [`TreeError`] if the parent is unknown or cannot contain a class.
    pub fn class(
        &mut self,
        name: impl Into<String>,
        modifiers: ModifierSet,
        parent: Option<DeclarationId>,
    ) -> Result<DeclarationId, TreeError> {
        let location = self.next_location();
        self.push(DeclarationKind::Class, name.into(), modifiers, parent, location)
    }

    /// Add a method under a class
    ///
    /// # Errors
    /// Returns [`TreeError`] if the parent is unknown or is not a class.
    pub fn method(
        &mut self,
        name: impl Into<String>,
        modifiers: ModifierSet,
        data: MethodData,
        parent: DeclarationId,
    ) -> Result<DeclarationId, TreeError> {
        let location = self.next_location();
        self.push(
            DeclarationKind::Method(data),
            name.into(),
            modifiers,
            Some(parent),
            location,
        )
    }

    /// Add a method at an explicit source location
    ///
    /// # Errors
    /// Returns [`TreeError`] if the parent is unknown or is not a class.
    pub fn method_at(
        &mut self,
        name: impl Into<String>,
        modifiers: ModifierSet,
        data: MethodData,
        parent: DeclarationId,
        location: SourceLocation,
    ) -> Result<DeclarationId, TreeError> {
        self.push(
            DeclarationKind::Method(data),
            name.into(),
            modifiers,
            Some(parent),
            location,
        )
    }

    /// Freeze into an immutable tree
    #[must_use]
    pub fn finish(self) -> DeclarationTree {
        DeclarationTree { nodes: self.nodes }
    }
}
