//! Concord graph crate - the sentence relation graph.
//!
//! Connects sentences that share at least one lexical concept (noun lemma).
//! This is a raw co-occurrence graph: no weights, no transitive closure,
//! no clustering.

pub mod builder;

pub use builder::{RelationGraph, RelationGraphBuilder};
