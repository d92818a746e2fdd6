//! Samyama Element Core
//!
//! The concurrency-safe unit underneath the Samyama graph engine: a single
//! vertex or edge, its typed properties, and the locking discipline that lets
//! many threads read and write it without corrupting it.
//!
//! # Architecture
//!
//! - Every element owns a try-acquire reader/writer guard. Contention is
//!   reported as [`ElementError::Collision`] instead of blocking; the caller
//!   decides whether to retry, back off or abort.
//! - Properties are kept in an insertion-ordered store keyed by integer
//!   [`PropertyId`]s; names are resolved by a [`PropertySchema`].
//! - Vertices and edges share [`GraphElement`] and differ in their
//!   [`ElementKind`], which also supplies kind-specific trimming.
//! - Query planning talks to collections through the [`ReadQuery`] contract.
//!
//! ## Example Usage
//!
//! ```rust
//! use samyama_element::graph::{ElementError, PropertyId, VertexKind, VertexSpace};
//!
//! let vertices = VertexSpace::new();
//! let alice = vertices.create(VertexKind, Vec::new());
//!
//! let name = PropertyId::new(0);
//! assert_eq!(alice.try_add_property(name, "Alice"), Ok(false));
//! assert_eq!(alice.try_add_property(name, "Alicia"), Ok(true));
//!
//! // Callers own the retry policy
//! let value = loop {
//!     match alice.try_get_property::<String>(name) {
//!         Err(ElementError::Collision { .. }) => std::thread::yield_now(),
//!         other => break other.unwrap(),
//!     }
//! };
//! assert_eq!(value.as_deref(), Some("Alicia"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod graph;
pub mod index;
pub mod query;

// Re-export main types for convenience
pub use config::ElementConfig;

pub use graph::{
    Edge, EdgeKind, EdgeSpace, EdgeType, ElementError, ElementId, ElementKind, ElementResult,
    ElementSpace, GraphElement, PropertyId, PropertyMap, PropertySchema, PropertyValue,
    ResourceGuard, Timestamp, Vertex, VertexKind, VertexSpace,
};

pub use index::{FulltextIndex, FulltextResult, Geometry, IndexRegistry, SpatialIndex};

pub use query::{
    BinaryOperator, PropertyRef, QueryError, QueryResult, RangeQuery, ReadQuery, ScanQueryEngine,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
