//! Ordered property storage owned by a single graph element
//!
//! Not thread-safe on its own: every access happens while the owning
//! element's guard section is held.

use super::property::{PropertyMap, PropertyValue};
use super::types::PropertyId;
use serde::{Deserialize, Serialize};

/// One property slot. A `Null` value marks the slot as logically absent;
/// such slots only arrive through deserialized stores and are purged by trim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub property_id: PropertyId,
    pub value: PropertyValue,
}

impl PropertyEntry {
    pub fn new(property_id: PropertyId, value: impl Into<PropertyValue>) -> Self {
        Self {
            property_id,
            value: value.into(),
        }
    }

    pub fn is_live(&self) -> bool {
        !self.value.is_null()
    }
}

/// Insertion-ordered property entries, at most one per property id.
///
/// `entries` stays `None` until the first property is written so that
/// property-less elements do not allocate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyStore {
    entries: Option<Vec<PropertyEntry>>,
    #[serde(skip)]
    initial_capacity: usize,
}

impl PropertyStore {
    /// Absent store that allocates `initial_capacity` slots on first write
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            entries: None,
            initial_capacity,
        }
    }

    /// Build from an initial property set; later duplicates win.
    pub fn from_entries<I>(entries: I, initial_capacity: usize) -> Self
    where
        I: IntoIterator<Item = (PropertyId, PropertyValue)>,
    {
        let mut store = Self::new(initial_capacity);
        for (id, value) in entries {
            store.upsert(id, value);
        }
        store
    }

    /// Whether backing storage has ever been allocated
    pub fn is_present(&self) -> bool {
        self.entries.is_some()
    }

    fn position(&self, property_id: PropertyId) -> Option<usize> {
        self.entries
            .as_ref()?
            .iter()
            .position(|entry| entry.property_id == property_id)
    }

    /// Live value for `property_id`
    pub fn get(&self, property_id: PropertyId) -> Option<&PropertyValue> {
        self.entries
            .as_ref()?
            .iter()
            .find(|entry| entry.property_id == property_id && entry.is_live())
            .map(|entry| &entry.value)
    }

    /// Live entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PropertyEntry> + '_ {
        self.entries
            .iter()
            .flat_map(|entries| entries.iter())
            .filter(|entry| entry.is_live())
    }

    /// Live entry at raw slot `index`, skipping forward over dead slots.
    ///
    /// Returns the entry and the slot to resume from.
    pub(crate) fn live_from(&self, index: usize) -> Option<(&PropertyEntry, usize)> {
        let entries = self.entries.as_ref()?;
        entries
            .iter()
            .enumerate()
            .skip(index)
            .find(|(_, entry)| entry.is_live())
            .map(|(i, entry)| (entry, i + 1))
    }

    /// Replace or append. Returns `true` if a live value was overwritten.
    ///
    /// Writing `Null` deletes the entry instead of storing a placeholder, and
    /// reports whether a live value was removed.
    pub fn upsert(&mut self, property_id: PropertyId, value: PropertyValue) -> bool {
        if value.is_null() {
            return self.remove(property_id);
        }
        match self.position(property_id) {
            Some(pos) => {
                let slot = &mut self.entries.get_or_insert_with(Vec::new)[pos];
                let was_live = slot.is_live();
                slot.value = value;
                was_live
            }
            None => {
                let capacity = self.initial_capacity;
                self.entries
                    .get_or_insert_with(|| Vec::with_capacity(capacity))
                    .push(PropertyEntry { property_id, value });
                false
            }
        }
    }

    /// Delete the entry for `property_id`. Returns `true` only if it was live.
    pub fn remove(&mut self, property_id: PropertyId) -> bool {
        match (self.position(property_id), self.entries.as_mut()) {
            (Some(pos), Some(entries)) => entries.remove(pos).is_live(),
            _ => false,
        }
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocated slot capacity, zero when absent
    pub fn capacity(&self) -> usize {
        self.entries.as_ref().map_or(0, Vec::capacity)
    }

    /// Drop dead slots and release excess capacity. A present store stays
    /// present even when it ends up empty.
    pub fn trim(&mut self) {
        if let Some(entries) = self.entries.as_mut() {
            entries.retain(PropertyEntry::is_live);
            entries.shrink_to_fit();
        }
    }

    /// Live entries as an unordered map
    pub fn to_map(&self) -> PropertyMap {
        self.iter()
            .map(|entry| (entry.property_id, entry.value.clone()))
            .collect()
    }

    /// Structural equality: both absent, or both present with the same live
    /// entries regardless of order.
    pub fn equals(&self, other: &PropertyStore) -> bool {
        match (self.is_present(), other.is_present()) {
            (false, false) => true,
            (true, true) => {
                self.len() == other.len()
                    && self
                        .iter()
                        .all(|entry| other.get(entry.property_id) == Some(&entry.value))
            }
            _ => false,
        }
    }

    /// Same comparison against a raw property set, `None` meaning absent.
    pub fn equals_map(&self, other: Option<&PropertyMap>) -> bool {
        match other {
            None => !self.is_present(),
            Some(map) => {
                self.is_present()
                    && self.len() == map.values().filter(|v| !v.is_null()).count()
                    && self
                        .iter()
                        .all(|entry| map.get(&entry.property_id) == Some(&entry.value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: u32) -> PropertyId {
        PropertyId::new(id)
    }

    #[test]
    fn test_absent_until_first_write() {
        let mut store = PropertyStore::new(4);
        assert!(!store.is_present());
        assert_eq!(store.capacity(), 0);
        assert!(store.get(pid(1)).is_none());
        assert_eq!(store.iter().count(), 0);

        assert!(!store.upsert(pid(1), "a".into()));
        assert!(store.is_present());
        assert!(store.capacity() >= 4);
    }

    #[test]
    fn test_upsert_reports_update() {
        let mut store = PropertyStore::new(0);
        assert!(!store.upsert(pid(10), "x".into()));
        assert!(store.upsert(pid(10), "y".into()));
        assert_eq!(store.get(pid(10)), Some(&PropertyValue::from("y")));
        assert_eq!(store.len(), 1);
    }

    /// Store holding a dead slot for property 1 and a live one for property 2
    fn with_dead_slot() -> PropertyStore {
        serde_json::from_str(
            r#"{"entries":[{"property_id":1,"value":"Null"},{"property_id":2,"value":{"Integer":5}}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_null_entries_are_invisible() {
        let mut store = with_dead_slot();

        assert!(store.get(pid(1)).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().map(|e| e.property_id).collect::<Vec<_>>(), vec![pid(2)]);

        // Overwriting a dead slot is not an update
        assert!(!store.upsert(pid(1), "back".into()));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_is_immediate() {
        let mut store = PropertyStore::new(0);
        store.upsert(pid(1), "a".into());
        assert!(store.remove(pid(1)));
        assert!(!store.remove(pid(1)));
        assert!(store.get(pid(1)).is_none());
        assert!(store.is_present());
        assert!(store.is_empty());

        assert!(!store.remove(pid(99)));

        let mut dead = with_dead_slot();
        assert!(!dead.remove(pid(1)));
        assert_eq!(dead.len(), 1);
    }

    #[test]
    fn test_null_upsert_deletes() {
        let mut store = PropertyStore::new(0);
        // Nothing to delete: stays absent
        assert!(!store.upsert(pid(1), PropertyValue::Null));
        assert!(!store.is_present());

        store.upsert(pid(1), "a".into());
        assert!(store.upsert(pid(1), PropertyValue::Null));
        assert!(store.get(pid(1)).is_none());
        assert!(!store.remove(pid(1)));
        // No placeholder left behind
        assert!(store.is_present());
        assert!(store.live_from(0).is_none());
        assert!(!store.upsert(pid(1), PropertyValue::Null));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = PropertyStore::new(0);
        for id in [3, 1, 2] {
            store.upsert(pid(id), (id as i64).into());
        }
        store.remove(pid(1));
        let order: Vec<_> = store.iter().map(|e| e.property_id.as_u32()).collect();
        assert_eq!(order, vec![3, 2]);
    }

    #[test]
    fn test_trim_keeps_contents() {
        let mut store = PropertyStore::new(64);
        store.upsert(pid(1), "a".into());
        let before = store.to_map();

        store.trim();
        assert_eq!(store.to_map(), before);
        assert!(store.capacity() < 64);
        assert!(store.is_present());

        let mut dead = with_dead_slot();
        dead.trim();
        assert_eq!(dead.len(), 1);
        let (entry, next) = dead.live_from(0).unwrap();
        assert_eq!((entry.property_id, next), (pid(2), 1));
    }

    #[test]
    fn test_from_entries_last_wins() {
        let store = PropertyStore::from_entries(
            vec![(pid(1), "a".into()), (pid(1), "b".into())],
            0,
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(pid(1)), Some(&PropertyValue::from("b")));
    }

    #[test]
    fn test_equality_is_order_independent() {
        let a = PropertyStore::from_entries(vec![(pid(1), "a".into()), (pid(2), "b".into())], 0);
        let b = PropertyStore::from_entries(vec![(pid(2), "b".into()), (pid(1), "a".into())], 0);
        let c = PropertyStore::from_entries(vec![(pid(1), "a".into())], 0);
        assert!(a.equals(&b));
        assert!(!a.equals(&c));
        assert!(!c.equals(&a));
    }

    #[test]
    fn test_equality_absent_vs_empty() {
        let absent = PropertyStore::new(0);
        let mut empty = PropertyStore::new(0);
        empty.upsert(pid(1), "a".into());
        empty.remove(pid(1));

        assert!(absent.equals(&PropertyStore::new(8)));
        assert!(!absent.equals(&empty));
        assert!(absent.equals_map(None));
        assert!(!empty.equals_map(None));
        assert!(empty.equals_map(Some(&PropertyMap::default())));
    }

    #[test]
    fn test_equals_map() {
        let store = PropertyStore::from_entries(vec![(pid(1), "a".into()), (pid(2), "b".into())], 0);
        let mut map = PropertyMap::default();
        map.insert(pid(2), "b".into());
        map.insert(pid(1), "a".into());
        assert!(store.equals_map(Some(&map)));

        map.insert(pid(1), "z".into());
        assert!(!store.equals_map(Some(&map)));
    }

    #[test]
    fn test_live_from_skips_dead_slots() {
        let store = with_dead_slot();
        let (entry, next) = store.live_from(0).unwrap();
        assert_eq!(entry.property_id, pid(2));
        assert_eq!(next, 2);
        assert!(store.live_from(next).is_none());
    }
}
