//! Declaration modifiers and the extendability rule
//!
//! A declaration is *extendable* when its modifier set contains the extend
//! marker (`partial`) and every other modifier is a plain visibility keyword.
//! Any other modifier (finality, concurrency, and so on) is mutually
//! exclusive with extension and voids the whole set.

use crate::cancel::{Cancelled, CancellationToken};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A single modifier keyword on a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `internal`
    Internal,
    /// `partial` — the extend marker
    Partial,
    /// `static`
    Static,
    /// `abstract`
    Abstract,
    /// `sealed`
    Sealed,
    /// `virtual`
    Virtual,
    /// `override`
    Override,
    /// `async`
    Async,
    /// `readonly`
    Readonly,
    /// `unsafe`
    Unsafe,
    /// `extern`
    Extern,
    /// `new`
    New,
}

impl Modifier {
    /// Keyword text as it appears in source
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Internal => "internal",
            Modifier::Partial => "partial",
            Modifier::Static => "static",
            Modifier::Abstract => "abstract",
            Modifier::Sealed => "sealed",
            Modifier::Virtual => "virtual",
            Modifier::Override => "override",
            Modifier::Async => "async",
            Modifier::Readonly => "readonly",
            Modifier::Unsafe => "unsafe",
            Modifier::Extern => "extern",
            Modifier::New => "new",
        }
    }

    /// Whether this is one of the plain visibility keywords
    #[inline]
    #[must_use]
    pub const fn is_visibility(self) -> bool {
        matches!(
            self,
            Modifier::Public | Modifier::Protected | Modifier::Private | Modifier::Internal
        )
    }

    /// Whether this is the extend marker (`partial`)
    #[inline]
    #[must_use]
    pub const fn is_extend_marker(self) -> bool {
        matches!(self, Modifier::Partial)
    }
}

impl Display for Modifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of modifiers on a declaration.
///
/// Preserves source order; duplicate keywords collapse to the first
/// occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModifierSet {
    modifiers: IndexSet<Modifier>,
}

impl ModifierSet {
    /// Empty modifier set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the set contains a modifier
    #[inline]
    #[must_use]
    pub fn contains(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Iterate modifiers in source order
    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.modifiers.iter().copied()
    }

    /// Number of distinct modifiers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    /// Whether the set is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Decide whether this modifier set permits extension.
    ///
    /// The set must contain the extend marker, and every other modifier must
    /// be a visibility keyword. The scan polls `token` per element since a
    /// host may cancel between any two keywords.
    ///
    /// # Errors
    /// Returns [`Cancelled`] if cancellation was requested mid-scan.
    pub fn is_extendable(&self, token: &CancellationToken) -> Result<bool, Cancelled> {
        let mut has_marker = false;

        for modifier in self.iter() {
            token.checkpoint()?;

            if modifier.is_extend_marker() {
                has_marker = true;
                continue;
            }
            if modifier.is_visibility() {
                continue;
            }
            // Contains some disallowed modifier.
            return Ok(false);
        }

        Ok(has_marker)
    }

    /// Source text of the set, space separated
    #[must_use]
    pub fn render(&self) -> String {
        self.iter()
            .map(Modifier::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Source text of the set with the extend marker removed.
    ///
    /// The generated counterpart is a plain member, so the marker must not
    /// appear on it.
    #[must_use]
    pub fn render_without_extend_marker(&self) -> String {
        self.iter()
            .filter(|m| !m.is_extend_marker())
            .map(Modifier::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<T: IntoIterator<Item = Modifier>>(iter: T) -> Self {
        Self {
            modifiers: iter.into_iter().collect(),
        }
    }
}

impl Display for ModifierSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
