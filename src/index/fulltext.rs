//! Fulltext index boundary
//!
//! Tokenizing and scoring belong to the index implementation; the core only
//! fixes the shape of what comes back.

use crate::graph::ElementId;
use serde::{Deserialize, Serialize};

/// One matched element with its relevance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulltextHit {
    pub element: ElementId,
    pub score: f64,
    /// Matched fragments, in the order the index reports them
    pub highlights: Vec<String>,
}

/// Fulltext answer: hits plus the best score among them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FulltextResult {
    pub max_score: f64,
    pub hits: Vec<FulltextHit>,
}

impl FulltextResult {
    /// Build from hits, deriving `max_score`
    pub fn from_hits(hits: Vec<FulltextHit>) -> Self {
        let max_score = hits.iter().map(|hit| hit.score).fold(0.0, f64::max);
        Self { max_score, hits }
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// A fulltext index maintained outside the element core
pub trait FulltextIndex: Send + Sync {
    /// `None` when nothing matches
    fn search(&self, query: &str) -> Option<FulltextResult>;
}
