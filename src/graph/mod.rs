//! Graph element core
//!
//! This module implements the concurrency-safe element model:
//! - Try-acquire reader/writer guards that report contention as collisions
//! - Ordered, per-element property stores
//! - Vertices and edges sharing one guarded element type
//! - Owning element spaces and a property name schema

pub mod edge;
pub mod element;
pub mod error;
pub mod guard;
pub mod node;
pub mod property;
pub mod schema;
pub mod space;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::{Edge, EdgeKind};
pub use element::{ElementKind, GraphElement, Properties};
pub use error::{ElementError, ElementResult};
pub use guard::{Access, ReadSection, ResourceGuard, WriteSection};
pub use node::{Adjacency, Vertex, VertexKind};
pub use property::{FromPropertyValue, PropertyMap, PropertyValue};
pub use schema::PropertySchema;
pub use space::{EdgeSpace, ElementSpace, TrimReport, VertexSpace};
pub use store::{PropertyEntry, PropertyStore};
pub use types::{EdgeType, ElementId, PropertyId, Timestamp};
