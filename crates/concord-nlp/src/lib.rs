//! Concord NLP crate - sentence segmentation, POS tagging, and lexical
//! concept extraction.
//!
//! The segmenter and tagger are trait seams: the shipped rule/lexicon
//! implementations are deterministic stand-ins that a model-backed service
//! can replace without touching downstream components.

pub mod concept;
pub mod segmenter;
pub mod tagger;

pub use concept::ConceptExtractor;
pub use segmenter::{RuleSegmenter, Segmenter};
pub use tagger::{LexiconTagger, Tagger};
