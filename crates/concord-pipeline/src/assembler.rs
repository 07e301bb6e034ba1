//! Final output assembly.

use concord_core::types::{CauseEffectMarker, Sentence, StructuredOutput};
use concord_graph::RelationGraph;

/// Packages the per-component results into one [`StructuredOutput`].
///
/// Pure packaging, no transformation: each field keeps the ordering of the
/// component that produced it (sentence order, ascending (i, j) edges,
/// first-sentence-first preview).
pub struct OutputAssembler {
    preview_components: usize,
}

impl OutputAssembler {
    /// `preview_components` is the number of leading components of the first
    /// sentence's quantized embedding to expose (10 in the default config).
    pub fn new(preview_components: usize) -> Self {
        Self { preview_components }
    }

    pub fn assemble(
        &self,
        sentences: &[Sentence],
        markers: &[CauseEffectMarker],
        graph: &RelationGraph,
        memory_reference: String,
        quantized: &[Vec<u8>],
    ) -> StructuredOutput {
        // Truncated to the embedding dimension when D < preview_components;
        // empty when there are no sentences at all.
        let preview: Vec<u8> = quantized
            .first()
            .map(|q| q.iter().take(self.preview_components).copied().collect())
            .unwrap_or_default();

        StructuredOutput {
            segmented_sentences: sentences.iter().map(|s| s.text.clone()).collect(),
            cause_effect_sentences: markers.iter().map(|m| m.text.clone()).collect(),
            graph_edges: graph.edges(),
            memory_reference,
            quantized_embeddings_preview: preview,
        }
    }
}

impl Default for OutputAssembler {
    fn default() -> Self {
        Self::new(10)
    }
}
