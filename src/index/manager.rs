//! Registry of externally maintained indices
//!
//! Handles registration, removal and lookup of fulltext and spatial indices
//! by their identifier.

use super::fulltext::FulltextIndex;
use super::spatial::SpatialIndex;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::info;

/// Registry for all fulltext and spatial indices
#[derive(Default)]
pub struct IndexRegistry {
    fulltext: RwLock<FxHashMap<String, Arc<dyn FulltextIndex>>>,
    spatial: RwLock<FxHashMap<String, Arc<dyn SpatialIndex>>>,
}

impl IndexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fulltext index, replacing any previous one with that id
    pub fn register_fulltext(&self, index_id: impl Into<String>, index: Arc<dyn FulltextIndex>) {
        let index_id = index_id.into();
        info!("Registered fulltext index '{}'", index_id);
        self.fulltext.write().insert(index_id, index);
    }

    pub fn register_spatial(&self, index_id: impl Into<String>, index: Arc<dyn SpatialIndex>) {
        let index_id = index_id.into();
        info!("Registered spatial index '{}'", index_id);
        self.spatial.write().insert(index_id, index);
    }

    /// Drop an index of either kind. Returns whether anything was removed.
    pub fn drop_index(&self, index_id: &str) -> bool {
        let fulltext = self.fulltext.write().remove(index_id).is_some();
        let spatial = self.spatial.write().remove(index_id).is_some();
        fulltext || spatial
    }

    pub fn has_index(&self, index_id: &str) -> bool {
        self.fulltext.read().contains_key(index_id) || self.spatial.read().contains_key(index_id)
    }

    pub fn fulltext(&self, index_id: &str) -> Option<Arc<dyn FulltextIndex>> {
        self.fulltext.read().get(index_id).cloned()
    }

    pub fn spatial(&self, index_id: &str) -> Option<Arc<dyn SpatialIndex>> {
        self.spatial.read().get(index_id).cloned()
    }
}
