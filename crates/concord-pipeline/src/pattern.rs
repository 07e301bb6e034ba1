//! Lexical cause-effect detection.

use concord_core::types::{CauseEffectMarker, Sentence};
use tracing::debug;

/// Flags sentences containing a literal cause-effect trigger.
///
/// Matching is a case-insensitive substring check against the marker
/// ("because" by default). No stemming and no synonym handling ("since",
/// "due to") — a named limitation of the lexical approach, not inference.
pub struct PatternDetector {
    marker: String,
}

impl PatternDetector {
    /// Create a detector for the given marker. The marker is lowercased
    /// once here; sentence text is lowercased per check.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into().to_lowercase(),
        }
    }

    /// Scan `sentences` in order and return one marker per flagged sentence.
    ///
    /// Returned text preserves the original casing and trimming of the
    /// segmented sentence.
    pub fn detect(&self, sentences: &[Sentence]) -> Vec<CauseEffectMarker> {
        let markers: Vec<CauseEffectMarker> = sentences
            .iter()
            .filter(|s| s.text.to_lowercase().contains(&self.marker))
            .map(|s| CauseEffectMarker {
                index: s.index,
                text: s.text.clone(),
            })
            .collect();

        debug!(flagged = markers.len(), "Scanned for cause-effect trigger");
        markers
    }
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self::new("because")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(i, *t))
            .collect()
    }

    #[test]
    fn test_detects_lowercase_marker() {
        let markers = PatternDetector::default().detect(&sentences(&[
            "Cats sit on mats.",
            "Mats are soft because cats nap there.",
        ]));
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].index, 1);
        assert_eq!(markers[0].text, "Mats are soft because cats nap there.");
    }

    #[test]
    fn test_case_insensitive_matching() {
        let markers = PatternDetector::default().detect(&sentences(&[
            "X happened Because Y.",
            "Z happened becausE of W.",
        ]));
        assert_eq!(markers.len(), 2);
        // Original casing is preserved in the output.
        assert_eq!(markers[0].text, "X happened Because Y.");
    }

    #[test]
    fn test_partial_word_does_not_match() {
        let markers =
            PatternDetector::default().detect(&sentences(&["The caus was unknown."]));
        assert!(markers.is_empty());
    }

    #[test]
    fn test_order_follows_sentence_order() {
        let markers = PatternDetector::default().detect(&sentences(&[
            "A because B.",
            "No trigger here.",
            "C because D.",
        ]));
        let indices: Vec<usize> = markers.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_no_sentences_no_markers() {
        assert!(PatternDetector::default().detect(&[]).is_empty());
    }

    #[test]
    fn test_custom_marker() {
        let detector = PatternDetector::new("Therefore");
        let markers = detector.detect(&sentences(&["It rained, therefore we stayed."]));
        assert_eq!(markers.len(), 1);
    }
}
