//! Concord pipeline crate - orchestration of the concept-model pipeline.
//!
//! Combines segmentation, concept encoding, the relation graph, the
//! cause-effect trigger scan, the single-slot context memory, and u8
//! quantization into one structured output per input text.

pub mod assembler;
pub mod memory;
pub mod pattern;
pub mod pipeline;

pub use assembler::OutputAssembler;
pub use memory::ContextMemory;
pub use pattern::PatternDetector;
pub use pipeline::ConceptPipeline;
