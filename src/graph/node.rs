//! Vertex kind
//!
//! A vertex carries no immutable header beyond its identity. Its kind state
//! is the adjacency bookkeeping (ids of outgoing and incoming edges), which
//! lives under the element's guard and is compacted by trim.

use super::element::{ElementKind, GraphElement};
use super::error::ElementResult;
use super::types::ElementId;
use serde::{Deserialize, Serialize};

/// Marker kind for vertices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexKind;

/// Edge ids attached to a vertex
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjacency {
    /// Edges going FROM this vertex
    pub outgoing: Vec<ElementId>,
    /// Edges coming TO this vertex
    pub incoming: Vec<ElementId>,
}

impl ElementKind for VertexKind {
    const KIND: &'static str = "vertex";
    type State = Adjacency;

    fn trim(&self, state: &mut Adjacency) {
        state.outgoing.shrink_to_fit();
        state.incoming.shrink_to_fit();
    }
}

/// A vertex in the property graph
pub type Vertex = GraphElement<VertexKind>;

fn remove_id(list: &mut Vec<ElementId>, edge: ElementId) -> bool {
    match list.iter().position(|id| *id == edge) {
        Some(pos) => {
            list.swap_remove(pos);
            true
        }
        None => false,
    }
}

impl GraphElement<VertexKind> {
    /// Create a vertex with no properties
    pub fn vertex(id: ElementId) -> Self {
        GraphElement::new(id, VertexKind)
    }

    pub fn try_add_out_edge(&self, edge: ElementId) -> ElementResult<()> {
        self.try_with_state_mut(|adj| {
            adj.outgoing.push(edge);
            ((), true)
        })
    }

    pub fn try_add_in_edge(&self, edge: ElementId) -> ElementResult<()> {
        self.try_with_state_mut(|adj| {
            adj.incoming.push(edge);
            ((), true)
        })
    }

    /// Returns whether the edge was attached
    pub fn try_remove_out_edge(&self, edge: ElementId) -> ElementResult<bool> {
        self.try_with_state_mut(|adj| {
            let removed = remove_id(&mut adj.outgoing, edge);
            (removed, removed)
        })
    }

    pub fn try_remove_in_edge(&self, edge: ElementId) -> ElementResult<bool> {
        self.try_with_state_mut(|adj| {
            let removed = remove_id(&mut adj.incoming, edge);
            (removed, removed)
        })
    }

    pub fn try_out_degree(&self) -> ElementResult<usize> {
        self.try_with_state(|adj| adj.outgoing.len())
    }

    pub fn try_in_degree(&self) -> ElementResult<usize> {
        self.try_with_state(|adj| adj.incoming.len())
    }

    /// Copy of the adjacency lists
    pub fn try_adjacency(&self) -> ElementResult<Adjacency> {
        self.try_with_state(Adjacency::clone)
    }
}
