//! Read query contract
//!
//! What the element core offers to query planning:
//! - Exact-match search by property id or name with a comparison operator
//! - Range search with inclusive/exclusive bounds
//! - Fulltext and spatial search delegated to registered indices
//!
//! Searches are read-only and never treat "no results" as an error.

pub mod contract;
pub mod error;
pub mod operator;
pub mod scan;

// Re-export main types
pub use contract::{FulltextMatches, Matches, PropertyRef, RangeQuery, ReadQuery, ScoredElement};
pub use error::{QueryError, QueryResult};
pub use operator::BinaryOperator;
pub use scan::ScanQueryEngine;
