//! Sentence boundary detection.
//!
//! The pipeline consumes segmentation through the [`Segmenter`] trait so the
//! rule-based splitter can be swapped for a model-backed service without
//! touching downstream components.

use concord_core::error::Result;
use concord_core::types::Sentence;
use tracing::debug;

/// Service that splits raw text into an ordered sequence of sentences.
///
/// Implementations must emit non-empty, whitespace-trimmed sentence strings
/// in source order, with dense 0-based indices. Zero sentences (e.g. for
/// empty input) is a valid result, not an error.
pub trait Segmenter: Send + Sync {
    /// Split `text` into sentences.
    fn segment(&self, text: &str) -> Result<Vec<Sentence>>;
}

/// Rule-based sentence splitter.
///
/// Splits on `.` `!` `?` followed by whitespace or end of input, folding
/// runs of terminators ("?!", "...") into a single boundary. A short
/// abbreviation guard avoids splitting after single-letter initials and a
/// handful of common abbreviations ("e.g.", "Mr."). This is a pragmatic
/// stand-in for a model-backed segmentation service, not a full tokenizer.
#[derive(Debug, Clone, Default)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl Segmenter for RuleSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Sentence>> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut prev_terminator = false;

        for (i, c) in text.char_indices() {
            let is_terminator = matches!(c, '.' | '!' | '?');
            if prev_terminator && !is_terminator {
                if c.is_whitespace() {
                    push_sentence(&mut sentences, &text[start..i]);
                    start = i;
                }
                prev_terminator = false;
            }
            if is_terminator && !splits_abbreviation(&text[start..i], c) {
                prev_terminator = true;
            }
        }
        push_sentence(&mut sentences, &text[start..]);

        debug!(sentences = sentences.len(), "Segmented input text");
        Ok(sentences)
    }
}

/// Trim and append a candidate sentence, skipping whitespace-only spans.
fn push_sentence(sentences: &mut Vec<Sentence>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        let index = sentences.len();
        sentences.push(Sentence::new(index, trimmed));
    }
}

/// Returns true when the terminator ends an abbreviation rather than a
/// sentence: a single-letter initial ("J.") or a known short form.
fn splits_abbreviation(preceding: &str, terminator: char) -> bool {
    if terminator != '.' {
        return false;
    }
    let last_word = preceding
        .rsplit(|c: char| c.is_whitespace())
        .next()
        .unwrap_or("");
    if last_word.len() == 1 && last_word.chars().all(|c| c.is_alphabetic()) {
        return true;
    }
    matches!(
        last_word,
        "Mr" | "Mrs" | "Ms" | "Dr" | "Prof" | "St" | "vs" | "etc" | "e.g" | "i.e"
    )
}
