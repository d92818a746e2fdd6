//! Property name registry
//!
//! Maps property names to the dense [`PropertyId`]s stored on elements.
//! Ids are assigned in registration order and never reused.

use super::types::PropertyId;
use indexmap::IndexSet;
use parking_lot::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
pub struct PropertySchema {
    names: RwLock<IndexSet<String>>,
}

impl PropertySchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for `name`, registering it on first use
    pub fn get_or_register(&self, name: &str) -> PropertyId {
        if let Some(id) = self.resolve(name) {
            return id;
        }
        let mut names = self.names.write();
        let (index, inserted) = names.insert_full(name.to_string());
        if inserted {
            debug!("Registered property '{}' as {}", name, index);
        }
        PropertyId(index as u32)
    }

    /// Id for an already registered name
    pub fn resolve(&self, name: &str) -> Option<PropertyId> {
        self.names
            .read()
            .get_index_of(name)
            .map(|index| PropertyId(index as u32))
    }

    pub fn name(&self, id: PropertyId) -> Option<String> {
        self.names.read().get_index(id.0 as usize).cloned()
    }

    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let schema = PropertySchema::new();
        assert!(schema.is_empty());

        let name = schema.get_or_register("name");
        let age = schema.get_or_register("age");
        assert_ne!(name, age);
        assert_eq!(schema.get_or_register("name"), name);

        assert_eq!(schema.resolve("age"), Some(age));
        assert_eq!(schema.resolve("missing"), None);
        assert_eq!(schema.name(name).as_deref(), Some("name"));
        assert_eq!(schema.name(PropertyId::new(99)), None);
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_concurrent_registration_is_consistent() {
        let schema = PropertySchema::new();
        let ids: Vec<PropertyId> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| schema.get_or_register("shared")))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(ids.iter().all(|id| *id == ids[0]));
        assert_eq!(schema.len(), 1);
    }
}
