use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// =============================================================================
// Sentences and tokens
// =============================================================================

/// One segmented sentence.
///
/// `index` is the 0-based position in segmentation order, dense and stable
/// for the lifetime of one run. `text` is trimmed. Sentences are produced
/// once by the segmenter and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub index: usize,
    pub text: String,
}

impl Sentence {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Coarse part-of-speech classes emitted by the tagger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Numeral,
    Other,
}

/// One token as classified by the tagger: a lowercase lemma plus its
/// part-of-speech class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub lemma: String,
    pub pos: PartOfSpeech,
}

impl TaggedToken {
    pub fn new(lemma: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
        }
    }
}

/// The set of distinct lowercase noun lemmas for one sentence.
///
/// Derived from sentence text via the tagger, never stored independently.
/// A `BTreeSet` keeps iteration order deterministic.
pub type ConceptSet = BTreeSet<String>;

// =============================================================================
// Markers and output
// =============================================================================

/// A sentence flagged by the lexical cause-effect trigger.
///
/// Present iff the lowercased sentence text contains the marker substring
/// ("because" by default). The text preserves original casing and trimming.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseEffectMarker {
    pub index: usize,
    pub text: String,
}

/// The terminal aggregate produced once per run.
///
/// Field ordering follows each producing component: sentence order for
/// `segmented_sentences` and `cause_effect_sentences`, ascending (i, j)
/// pairs for `graph_edges`, and the first sentence's quantized embedding
/// (first 10 components, truncated to the embedding dimension when smaller)
/// for the preview. `memory_reference` is the trimmed input text stored in
/// the context memory, or the empty string when the slot is absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredOutput {
    pub segmented_sentences: Vec<String>,
    pub cause_effect_sentences: Vec<String>,
    pub graph_edges: Vec<(usize, usize)>,
    pub memory_reference: String,
    pub quantized_embeddings_preview: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_new() {
        let s = Sentence::new(2, "Machines are learning.");
        assert_eq!(s.index, 2);
        assert_eq!(s.text, "Machines are learning.");
    }

    #[test]
    fn test_tagged_token_equality() {
        let a = TaggedToken::new("mat", PartOfSpeech::Noun);
        let b = TaggedToken::new("mat", PartOfSpeech::Noun);
        assert_eq!(a, b);
        assert_ne!(a, TaggedToken::new("mat", PartOfSpeech::Verb));
    }

    #[test]
    fn test_structured_output_default_is_empty() {
        let out = StructuredOutput::default();
        assert!(out.segmented_sentences.is_empty());
        assert!(out.cause_effect_sentences.is_empty());
        assert!(out.graph_edges.is_empty());
        assert_eq!(out.memory_reference, "");
        assert!(out.quantized_embeddings_preview.is_empty());
    }

    #[test]
    fn test_structured_output_serde_round_trip() {
        let out = StructuredOutput {
            segmented_sentences: vec!["Cats sit on mats.".to_string()],
            cause_effect_sentences: vec![],
            graph_edges: vec![(0, 1)],
            memory_reference: "Cats sit on mats.".to_string(),
            quantized_embeddings_preview: vec![0, 127, 255],
        };
        let json = serde_json::to_string(&out).unwrap();
        assert!(json.contains("\"segmented_sentences\""));
        assert!(json.contains("\"memory_reference\""));
        let back: StructuredOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, out);
    }

    #[test]
    fn test_pos_serde_snake_case() {
        let json = serde_json::to_string(&PartOfSpeech::Noun).unwrap();
        assert_eq!(json, "\"noun\"");
    }
}
