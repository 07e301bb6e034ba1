//! Lexical concept extraction.

use concord_core::error::Result;
use concord_core::types::{ConceptSet, PartOfSpeech};
use tracing::trace;

use crate::tagger::Tagger;

/// Maps a sentence to the set of its noun-lemma concepts.
///
/// Stateless apart from the tagger it wraps: every call recomputes from the
/// sentence text, so the result is deterministic whenever the tagger is.
/// Callers that compare many sentence pairs should cache the returned sets
/// per sentence index (the graph builder does).
pub struct ConceptExtractor<T: Tagger> {
    tagger: T,
}

impl<T: Tagger> ConceptExtractor<T> {
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    /// Extract the distinct lowercase noun lemmas of `text`.
    ///
    /// Empty or whitespace-only text yields an empty set, not an error.
    pub fn extract(&self, text: &str) -> Result<ConceptSet> {
        if text.trim().is_empty() {
            return Ok(ConceptSet::new());
        }

        let concepts: ConceptSet = self
            .tagger
            .tag(text)?
            .into_iter()
            .filter(|t| t.pos == PartOfSpeech::Noun)
            .map(|t| t.lemma)
            .collect();

        trace!(concepts = concepts.len(), "Extracted concept set");
        Ok(concepts)
    }
}
