//! Pipeline orchestration.
//!
//! One call to [`ConceptPipeline::process`] runs the whole batch for one
//! input text: segment, encode, relate, detect, remember, quantize,
//! assemble. There are no retries and no partial results — a run either
//! returns a full [`StructuredOutput`] or fails with the first error.

use concord_core::config::PipelineConfig;
use concord_core::error::Result;
use concord_core::types::StructuredOutput;
use concord_graph::RelationGraphBuilder;
use concord_nlp::segmenter::Segmenter;
use concord_nlp::tagger::Tagger;
use concord_vector::encoder::ConceptEncoder;
use concord_vector::quantizer::quantize_batch;
use tracing::{debug, info};

use crate::assembler::OutputAssembler;
use crate::memory::ContextMemory;
use crate::pattern::PatternDetector;

/// The concept-model pipeline.
///
/// Owns its collaborators and its context memory. The memory slot is scoped
/// to this instance: separate pipelines never share state, and concurrent
/// callers sharing one instance are serialized at the slot's mutex.
pub struct ConceptPipeline<S: Segmenter, T: Tagger, E: ConceptEncoder> {
    segmenter: S,
    encoder: E,
    graph_builder: RelationGraphBuilder<T>,
    detector: PatternDetector,
    assembler: OutputAssembler,
    memory: ContextMemory,
    memory_key: String,
}

impl<S: Segmenter, T: Tagger, E: ConceptEncoder> ConceptPipeline<S, T, E> {
    /// Assemble a pipeline from its collaborators and behavior settings.
    pub fn new(segmenter: S, tagger: T, encoder: E, config: PipelineConfig) -> Self {
        Self {
            segmenter,
            encoder,
            graph_builder: RelationGraphBuilder::new(tagger),
            detector: PatternDetector::new(config.cause_marker.as_str()),
            assembler: OutputAssembler::new(config.preview_components),
            memory: ContextMemory::new(),
            memory_key: config.memory_key,
        }
    }

    /// Run the full pipeline for one input text.
    ///
    /// Zero sentences after segmentation is not an error: the result has
    /// every sequence field empty and `memory_reference` set to the trimmed
    /// input. Segmentation and encoding failures propagate before the
    /// memory slot is touched.
    pub async fn process(&self, text: &str) -> Result<StructuredOutput> {
        let trimmed = text.trim();

        // Step 1: sentence segmentation.
        let sentences = self.segmenter.segment(trimmed)?;
        debug!(sentences = sentences.len(), "Segmentation complete");

        if sentences.is_empty() {
            self.memory.store(&self.memory_key, trimmed);
            let memory_reference = self.memory.fetch(&self.memory_key).unwrap_or_default();
            info!("Pipeline run completed on empty input");
            return Ok(StructuredOutput {
                memory_reference,
                ..StructuredOutput::default()
            });
        }

        // Step 2: concept embeddings, one per sentence.
        let texts: Vec<String> = sentences.iter().map(|s| s.text.clone()).collect();
        let embeddings = self.encoder.encode_batch(&texts).await?;
        debug!(
            embeddings = embeddings.len(),
            dimensions = self.encoder.dimensions(),
            "Encoding complete"
        );

        // Step 3: relation graph over shared lexical concepts.
        let graph = self.graph_builder.build(&sentences)?;

        // Step 4: cause-effect trigger scan.
        let markers = self.detector.detect(&sentences);

        // Step 5: remember the input paragraph.
        self.memory.store(&self.memory_key, trimmed);
        let memory_reference = self.memory.fetch(&self.memory_key).unwrap_or_default();

        // Step 6: quantize every embedding.
        let quantized = quantize_batch(&embeddings);

        // Step 7: package the structured output.
        let output =
            self.assembler
                .assemble(&sentences, &markers, &graph, memory_reference, &quantized);

        info!(
            sentences = output.segmented_sentences.len(),
            edges = output.graph_edges.len(),
            flagged = output.cause_effect_sentences.len(),
            "Pipeline run completed"
        );
        Ok(output)
    }

    /// The pipeline's context memory (read access for callers).
    pub fn memory(&self) -> &ContextMemory {
        &self.memory
    }

    /// The key under which the input text is remembered.
    pub fn memory_key(&self) -> &str {
        &self.memory_key
    }
}
