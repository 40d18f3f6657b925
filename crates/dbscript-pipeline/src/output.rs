//! Output set of one pipeline run

use dbscript_codegen::GeneratedArtifact;

/// Artifacts emitted by a single pipeline run.
///
/// Artifacts are appended in candidate order for the sequential pass; the
/// parallel pass preserves the same order by construction. Every run
/// produces a fresh set — artifacts are always fully replaced, never
/// patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSet {
    artifacts: Vec<GeneratedArtifact>,
}

impl OutputSet {
    /// Empty output set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one artifact
    #[inline]
    pub fn add(&mut self, artifact: GeneratedArtifact) {
        self.artifacts.push(artifact);
    }

    /// Emitted artifacts in candidate order
    #[inline]
    #[must_use]
    pub fn artifacts(&self) -> &[GeneratedArtifact] {
        &self.artifacts
    }

    /// Consume into the artifact list
    #[inline]
    #[must_use]
    pub fn into_artifacts(self) -> Vec<GeneratedArtifact> {
        self.artifacts
    }

    /// Number of artifacts
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether the run produced nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Hint names of every artifact, in order
    #[must_use]
    pub fn hint_names(&self) -> Vec<&str> {
        self.artifacts.iter().map(GeneratedArtifact::hint_name).collect()
    }
}

impl FromIterator<GeneratedArtifact> for OutputSet {
    fn from_iter<T: IntoIterator<Item = GeneratedArtifact>>(iter: T) -> Self {
        Self {
            artifacts: iter.into_iter().collect(),
        }
    }
}
