//! Owning collections for graph elements
//!
//! An [`ElementSpace`] hands out unique ids for one kind of element and owns
//! the shared handles. Removal only drops the space's handle; callers still
//! holding an `Arc` keep a usable (but unreachable) element.

use super::edge::EdgeKind;
use super::element::{ElementKind, GraphElement};
use super::node::VertexKind;
use super::property::PropertyValue;
use super::types::{ElementId, PropertyId, Timestamp};
use crate::config::ElementConfig;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of a compaction sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimReport {
    pub trimmed: usize,
    /// Elements skipped because their guard was busy
    pub collided: usize,
}

pub struct ElementSpace<K: ElementKind> {
    elements: RwLock<FxHashMap<ElementId, Arc<GraphElement<K>>>>,
    next_id: AtomicU64,
    config: ElementConfig,
}

pub type VertexSpace = ElementSpace<VertexKind>;
pub type EdgeSpace = ElementSpace<EdgeKind>;

impl<K: ElementKind> ElementSpace<K> {
    pub fn new() -> Self {
        Self::with_config(ElementConfig::default())
    }

    pub fn with_config(config: ElementConfig) -> Self {
        Self {
            elements: RwLock::new(FxHashMap::default()),
            next_id: AtomicU64::new(1),
            config,
        }
    }

    pub fn config(&self) -> &ElementConfig {
        &self.config
    }

    /// Create an element under a fresh id
    pub fn create<I>(&self, kind: K, properties: I) -> Arc<GraphElement<K>>
    where
        I: IntoIterator<Item = (PropertyId, PropertyValue)>,
    {
        let id = ElementId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let element = Arc::new(GraphElement::with_config(id, kind, properties, &self.config));
        self.elements.write().insert(id, Arc::clone(&element));
        debug!("Created {} {}", K::KIND, id);
        element
    }

    /// Re-insert an element with known id and timestamps (e.g. on recovery).
    ///
    /// Returns `false` and leaves the space unchanged if the id is taken.
    pub fn restore<I>(
        &self,
        id: ElementId,
        kind: K,
        properties: I,
        creation_date: Timestamp,
        modification_date: Timestamp,
    ) -> bool
    where
        I: IntoIterator<Item = (PropertyId, PropertyValue)>,
    {
        let mut elements = self.elements.write();
        if elements.contains_key(&id) {
            return false;
        }
        let element = GraphElement::restore(
            id,
            kind,
            properties,
            creation_date,
            modification_date,
            &self.config,
        );
        elements.insert(id, Arc::new(element));
        self.next_id.fetch_max(id.0.saturating_add(1), Ordering::Relaxed);
        true
    }

    pub fn get(&self, id: ElementId) -> Option<Arc<GraphElement<K>>> {
        self.elements.read().get(&id).cloned()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.read().contains_key(&id)
    }

    pub fn remove(&self, id: ElementId) -> Option<Arc<GraphElement<K>>> {
        let removed = self.elements.write().remove(&id);
        if removed.is_some() {
            debug!("Removed {} {}", K::KIND, id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.elements.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.read().is_empty()
    }

    /// Handles to every element, ordered by id
    pub fn snapshot(&self) -> Vec<Arc<GraphElement<K>>> {
        let mut all: Vec<_> = self.elements.read().values().cloned().collect();
        all.sort_by_key(|element| element.id());
        all
    }

    /// Trim every element. Busy elements are skipped, not waited on.
    pub fn trim_all(&self) -> TrimReport {
        let mut report = TrimReport::default();
        for element in self.snapshot() {
            match element.trim() {
                Ok(()) => report.trimmed += 1,
                Err(_) => report.collided += 1,
            }
        }
        info!(
            "Trimmed {} {} elements ({} busy)",
            report.trimmed,
            K::KIND,
            report.collided
        );
        report
    }
}

impl<K: ElementKind> Default for ElementSpace<K> {
    fn default() -> Self {
        Self::new()
    }
}
