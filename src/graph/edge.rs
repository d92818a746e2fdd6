//! Edge kind
//!
//! Edge endpoints and type are fixed at creation and readable without the
//! guard. Edges keep no mutable kind state, so their trim only compacts the
//! property store.

use super::element::{ElementKind, GraphElement};
use super::property::PropertyValue;
use super::types::{EdgeType, ElementId, PropertyId};
use serde::{Deserialize, Serialize};

/// Immutable header of a directed edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeKind {
    /// Source vertex (edge goes FROM this vertex)
    pub source: ElementId,
    /// Target vertex (edge goes TO this vertex)
    pub target: ElementId,
    pub edge_type: EdgeType,
}

impl EdgeKind {
    pub fn new(source: ElementId, target: ElementId, edge_type: impl Into<EdgeType>) -> Self {
        Self {
            source,
            target,
            edge_type: edge_type.into(),
        }
    }
}

impl ElementKind for EdgeKind {
    const KIND: &'static str = "edge";
    type State = ();

    fn trim(&self, _state: &mut ()) {}
}

/// A directed edge in the property graph
pub type Edge = GraphElement<EdgeKind>;

impl GraphElement<EdgeKind> {
    /// Create a directed edge with no properties
    pub fn edge(
        id: ElementId,
        source: ElementId,
        target: ElementId,
        edge_type: impl Into<EdgeType>,
    ) -> Self {
        GraphElement::new(id, EdgeKind::new(source, target, edge_type))
    }

    /// Create a directed edge with properties
    pub fn edge_with_properties<I>(
        id: ElementId,
        source: ElementId,
        target: ElementId,
        edge_type: impl Into<EdgeType>,
        properties: I,
    ) -> Self
    where
        I: IntoIterator<Item = (PropertyId, PropertyValue)>,
    {
        GraphElement::new_with_properties(id, EdgeKind::new(source, target, edge_type), properties)
    }

    pub fn source(&self) -> ElementId {
        self.kind().source
    }

    pub fn target(&self) -> ElementId {
        self.kind().target
    }

    pub fn edge_type(&self) -> &EdgeType {
        &self.kind().edge_type
    }

    /// Check if this edge connects two vertices (in either direction)
    pub fn connects(&self, a: ElementId, b: ElementId) -> bool {
        (self.source() == a && self.target() == b) || (self.source() == b && self.target() == a)
    }

    /// Check if this edge goes FROM a specific vertex
    pub fn starts_from(&self, vertex: ElementId) -> bool {
        self.source() == vertex
    }

    /// Check if this edge goes TO a specific vertex
    pub fn ends_at(&self, vertex: ElementId) -> bool {
        self.target() == vertex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::edge(ElementId::new(1), ElementId::new(1), ElementId::new(2), "KNOWS");

        assert_eq!(edge.id(), ElementId::new(1));
        assert_eq!(edge.source(), ElementId::new(1));
        assert_eq!(edge.target(), ElementId::new(2));
        assert_eq!(edge.edge_type().as_str(), "KNOWS");
    }

    #[test]
    fn test_edge_direction() {
        let edge = Edge::edge(ElementId::new(2), ElementId::new(10), ElementId::new(20), "FOLLOWS");

        assert!(edge.starts_from(ElementId::new(10)));
        assert!(edge.ends_at(ElementId::new(20)));
        assert!(!edge.starts_from(ElementId::new(20)));
        assert!(edge.connects(ElementId::new(20), ElementId::new(10)));
        assert!(!edge.connects(ElementId::new(10), ElementId::new(30)));
    }

    #[test]
    fn test_endpoints_readable_while_write_locked() {
        let edge = Edge::edge_with_properties(
            ElementId::new(3),
            ElementId::new(1),
            ElementId::new(2),
            "KNOWS",
            vec![(PropertyId::new(1), 2020i64.into())],
        );
        let _iter = edge.get_all_properties().unwrap();
        // Header reads never touch the guard
        assert_eq!(edge.source(), ElementId::new(1));
        assert!(edge.try_add_property(PropertyId::new(2), 0.5).is_err());
    }

    #[test]
    fn test_edge_trim_keeps_properties() {
        let edge = Edge::edge_with_properties(
            ElementId::new(4),
            ElementId::new(5),
            ElementId::new(6),
            "RELATED_TO",
            vec![(PropertyId::new(1), 10i64.into()), (PropertyId::new(2), "important".into())],
        );
        let before = edge.try_property_map().unwrap();
        edge.trim().unwrap();
        assert_eq!(edge.try_property_map().unwrap(), before);
    }
}
