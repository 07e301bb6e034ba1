//! Relation graph construction from shared lexical concepts.

use concord_core::error::Result;
use concord_core::types::{ConceptSet, Sentence};
use concord_nlp::concept::ConceptExtractor;
use concord_nlp::tagger::Tagger;
use petgraph::graph::{NodeIndex, UnGraph};
use tracing::debug;

/// Undirected graph over sentence indices.
///
/// Every sentence of a run is a node (carrying its text as the node label),
/// including sentences that share no concept with anything. An edge (i, j),
/// i < j, exists iff the two sentences' concept sets intersect. Edges carry
/// no weight and the graph is built once per run; it is not incrementally
/// updatable.
#[derive(Debug, Clone)]
pub struct RelationGraph {
    graph: UnGraph<String, ()>,
}

impl RelationGraph {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The sentence text stored as the node label, if the index exists.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.graph
            .node_weight(NodeIndex::new(index))
            .map(|s| s.as_str())
    }

    /// True when sentences `i` and `j` are connected (order-insensitive).
    pub fn contains_edge(&self, i: usize, j: usize) -> bool {
        i < self.node_count()
            && j < self.node_count()
            && self
                .graph
                .contains_edge(NodeIndex::new(i), NodeIndex::new(j))
    }

    /// Edges as (i, j) pairs with i < j, in the builder's nested iteration
    /// order (ascending i, then ascending j).
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| (a.index(), b.index()))
            .collect()
    }
}

/// Builds a [`RelationGraph`] from the full sentence sequence of one run.
///
/// Concept sets are computed once per sentence index and cached for the
/// pairwise pass; observable edges are identical to recomputing per pair.
/// The pairwise comparison is quadratic in the number of sentences, which
/// is fine for paragraphs; long documents hit this as a scaling limit.
pub struct RelationGraphBuilder<T: Tagger> {
    extractor: ConceptExtractor<T>,
}

impl<T: Tagger> RelationGraphBuilder<T> {
    pub fn new(tagger: T) -> Self {
        Self {
            extractor: ConceptExtractor::new(tagger),
        }
    }

    /// Build the relation graph over `sentences`.
    pub fn build(&self, sentences: &[Sentence]) -> Result<RelationGraph> {
        let mut graph =
            UnGraph::<String, ()>::with_capacity(sentences.len(), sentences.len());

        // Node i must be the sentence with index i; segmentation emits
        // dense, ordered indices, so insertion order preserves this.
        for sentence in sentences {
            graph.add_node(sentence.text.clone());
        }

        let concept_sets: Vec<ConceptSet> = sentences
            .iter()
            .map(|s| self.extractor.extract(&s.text))
            .collect::<Result<_>>()?;

        for i in 0..sentences.len() {
            for j in (i + 1)..sentences.len() {
                if !concept_sets[i].is_disjoint(&concept_sets[j]) {
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built relation graph"
        );
        Ok(RelationGraph { graph })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_nlp::tagger::LexiconTagger;

    fn builder() -> RelationGraphBuilder<LexiconTagger> {
        RelationGraphBuilder::new(LexiconTagger::new())
    }

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(i, *t))
            .collect()
    }

    #[test]
    fn test_shared_noun_creates_edge() {
        let graph = builder()
            .build(&sentences(&["Cats sit on mats.", "Mats are soft."]))
            .unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edges(), vec![(0, 1)]);
    }

    #[test]
    fn test_no_shared_noun_no_edge() {
        let graph = builder()
            .build(&sentences(&["Cats sit on mats.", "Dogs chase birds."]))
            .unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_single_sentence_one_node_zero_edges() {
        let graph = builder()
            .build(&sentences(&["Machines are learning languages."]))
            .unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_empty_input() {
        let graph = builder().build(&[]).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_node_set_includes_isolated_sentences() {
        // The middle sentence has no nouns and can never join an edge, but
        // it still appears as a node.
        let graph = builder()
            .build(&sentences(&[
                "Cats sit on mats.",
                "They are very soft.",
                "Mats are everywhere in the house.",
            ]))
            .unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edges(), vec![(0, 2)]);
        assert_eq!(graph.label(1), Some("They are very soft."));
    }

    #[test]
    fn test_edges_ascending_pair_order() {
        let graph = builder()
            .build(&sentences(&[
                "The team shipped the project.",
                "The project needed a plan.",
                "The plan came from the team.",
            ]))
            .unwrap();
        let edges = graph.edges();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2)]);
        for (i, j) in edges {
            assert!(i < j);
        }
    }

    #[test]
    fn test_symmetric_and_irreflexive() {
        let graph = builder()
            .build(&sentences(&["Cats sit on mats.", "Mats are soft."]))
            .unwrap();
        assert!(graph.contains_edge(0, 1));
        assert!(graph.contains_edge(1, 0));
        assert!(!graph.contains_edge(0, 0));
        assert!(!graph.contains_edge(1, 1));
    }

    #[test]
    fn test_edge_indices_bounded_by_node_count() {
        let graph = builder()
            .build(&sentences(&[
                "AI is transforming industries.",
                "Machines are learning human languages.",
                "This development will create opportunities in industries.",
            ]))
            .unwrap();
        for (i, j) in graph.edges() {
            assert!(i < graph.node_count());
            assert!(j < graph.node_count());
        }
    }

    #[test]
    fn test_duplicate_sentences_connect() {
        // Identical text yields identical concept sets under the
        // deterministic tagger, so duplicates with any noun connect.
        let graph = builder()
            .build(&sentences(&["Cats sit on mats.", "Cats sit on mats."]))
            .unwrap();
        assert_eq!(graph.edges(), vec![(0, 1)]);
    }

    #[test]
    fn test_labels_preserve_text() {
        let graph = builder()
            .build(&sentences(&["Cats sit on mats."]))
            .unwrap();
        assert_eq!(graph.label(0), Some("Cats sit on mats."));
        assert_eq!(graph.label(7), None);
    }
}
