//! Graph element: identity, timestamps and a guarded property set
//!
//! Every operation first tries to acquire the element's [`ResourceGuard`].
//! If that fails the operation returns [`ElementError::Collision`] and has
//! changed nothing; retrying is the caller's decision.
//!
//! Vertices and edges differ only in their [`ElementKind`], which carries the
//! immutable kind header (edge endpoints) and the guarded kind state (vertex
//! adjacency), and supplies the kind-specific half of trimming.

use super::error::{ElementError, ElementResult};
use super::guard::{Access, ReadSection, ResourceGuard, WriteSection};
use super::property::{FromPropertyValue, PropertyMap, PropertyValue};
use super::store::PropertyStore;
use super::types::{ElementId, PropertyId, Timestamp};
use crate::config::ElementConfig;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::{debug, trace};

/// Kind-specific behaviour of a graph element
pub trait ElementKind {
    /// Short name used in logs ("vertex", "edge")
    const KIND: &'static str;

    /// Mutable kind state, guarded together with the properties
    type State: Default;

    /// Release excess capacity held by the kind state.
    ///
    /// Called with the element's write section held; must not change
    /// logical contents.
    fn trim(&self, state: &mut Self::State);
}

/// Everything behind the guard
#[derive(Debug)]
pub(crate) struct ElementState<S> {
    pub(crate) properties: PropertyStore,
    pub(crate) kind: S,
}

/// A vertex or edge with a concurrency-safe property set
pub struct GraphElement<K: ElementKind> {
    id: ElementId,
    kind: K,
    creation_date: Timestamp,
    /// Microseconds; only advanced while the write section is held
    modification_date: AtomicI64,
    state: ResourceGuard<ElementState<K::State>>,
}

impl<K: ElementKind> GraphElement<K> {
    /// Create an element with no properties and default configuration
    pub fn new(id: ElementId, kind: K) -> Self {
        Self::with_config(id, kind, Vec::new(), &ElementConfig::default())
    }

    /// Create an element with an initial property set
    pub fn new_with_properties<I>(id: ElementId, kind: K, properties: I) -> Self
    where
        I: IntoIterator<Item = (PropertyId, PropertyValue)>,
    {
        Self::with_config(id, kind, properties, &ElementConfig::default())
    }

    pub fn with_config<I>(id: ElementId, kind: K, properties: I, config: &ElementConfig) -> Self
    where
        I: IntoIterator<Item = (PropertyId, PropertyValue)>,
    {
        let now = Timestamp::now();
        Self::restore(id, kind, properties, now, now, config)
    }

    /// Rebuild an element with previously recorded timestamps.
    ///
    /// A modification date earlier than the creation date is raised to it.
    pub fn restore<I>(
        id: ElementId,
        kind: K,
        properties: I,
        creation_date: Timestamp,
        modification_date: Timestamp,
        config: &ElementConfig,
    ) -> Self
    where
        I: IntoIterator<Item = (PropertyId, PropertyValue)>,
    {
        let state = ElementState {
            properties: PropertyStore::from_entries(properties, config.initial_property_capacity),
            kind: K::State::default(),
        };

        GraphElement {
            id,
            kind,
            creation_date,
            modification_date: AtomicI64::new(modification_date.max(creation_date).as_micros()),
            state: ResourceGuard::with_timeout(state, config.lock_timeout()),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Immutable kind header
    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn creation_date(&self) -> Timestamp {
        self.creation_date
    }

    pub fn modification_date(&self) -> Timestamp {
        Timestamp(self.modification_date.load(Ordering::Acquire))
    }

    fn collision(&self, access: Access) -> ElementError {
        debug!("Collision acquiring {} section on {} {}", access, K::KIND, self.id);
        ElementError::Collision { id: self.id, access }
    }

    fn read(&self) -> ElementResult<ReadSection<'_, ElementState<K::State>>> {
        self.state.try_read().ok_or_else(|| self.collision(Access::Read))
    }

    fn write(&self) -> ElementResult<WriteSection<'_, ElementState<K::State>>> {
        self.state.try_write().ok_or_else(|| self.collision(Access::Write))
    }

    /// Advance the modification date; caller holds the write section, so
    /// there is no concurrent writer between the load and the store.
    fn touch(&self) {
        let prev = self.modification_date.load(Ordering::Acquire);
        let next = Timestamp::now().as_micros().max(prev.saturating_add(1));
        self.modification_date.store(next, Ordering::Release);
    }

    /// Add or overwrite a property. Returns `true` if a live value was replaced.
    ///
    /// Adding `Null` removes the property instead; the result then tells
    /// whether a live value was removed, as with [`try_remove_property`].
    ///
    /// [`try_remove_property`]: GraphElement::try_remove_property
    pub fn try_add_property(
        &self,
        property_id: PropertyId,
        value: impl Into<PropertyValue>,
    ) -> ElementResult<bool> {
        let value = value.into();
        let deletes = value.is_null();
        let mut section = self.write()?;
        let was_update = section.properties.upsert(property_id, value);
        if was_update || !deletes {
            self.touch();
        }
        trace!("{} {} set {} (update: {})", K::KIND, self.id, property_id, was_update);
        Ok(was_update)
    }

    /// Remove a property. Returns `true` if a live value was removed.
    pub fn try_remove_property(&self, property_id: PropertyId) -> ElementResult<bool> {
        let mut section = self.write()?;
        let removed = section.properties.remove(property_id);
        if removed {
            self.touch();
            trace!("{} {} removed {}", K::KIND, self.id, property_id);
        }
        Ok(removed)
    }

    /// Typed lookup; a stored value of another variant is a type mismatch.
    pub fn try_get_property<T: FromPropertyValue>(
        &self,
        property_id: PropertyId,
    ) -> ElementResult<Option<T>> {
        let section = self.read()?;
        match section.properties.get(property_id) {
            None => Ok(None),
            Some(value) => T::from_property_value(value).map(Some).ok_or(
                ElementError::TypeMismatch {
                    property: property_id,
                    expected: T::TYPE_NAME,
                    found: value.type_name(),
                },
            ),
        }
    }

    pub fn try_get_property_value(
        &self,
        property_id: PropertyId,
    ) -> ElementResult<Option<PropertyValue>> {
        let section = self.read()?;
        Ok(section.properties.get(property_id).cloned())
    }

    /// Lazily enumerate live properties.
    ///
    /// The returned iterator holds the read section until it is exhausted or
    /// dropped, whichever comes first.
    pub fn get_all_properties(&self) -> ElementResult<Properties<'_, K::State>> {
        let section = self.read()?;
        Ok(Properties {
            section: Some(section),
            cursor: 0,
        })
    }

    /// Copy of the live properties, taken under one read section
    pub fn try_property_map(&self) -> ElementResult<PropertyMap> {
        let section = self.read()?;
        Ok(section.properties.to_map())
    }

    pub fn try_property_count(&self) -> ElementResult<usize> {
        let section = self.read()?;
        Ok(section.properties.len())
    }

    pub(crate) fn try_property_capacity(&self) -> ElementResult<usize> {
        let section = self.read()?;
        Ok(section.properties.capacity())
    }

    /// Read the guarded kind state
    pub fn try_with_state<R>(&self, f: impl FnOnce(&K::State) -> R) -> ElementResult<R> {
        let section = self.read()?;
        Ok(f(&section.kind))
    }

    /// Mutate the guarded kind state.
    ///
    /// `f` returns its result and whether it changed anything; only a change
    /// advances the modification date.
    pub fn try_with_state_mut<R>(
        &self,
        f: impl FnOnce(&mut K::State) -> (R, bool),
    ) -> ElementResult<R> {
        let mut section = self.write()?;
        let (result, changed) = f(&mut section.kind);
        if changed {
            self.touch();
        }
        Ok(result)
    }

    /// Compact property storage and kind state without changing contents
    pub(crate) fn trim(&self) -> ElementResult<()> {
        let mut section = self.write()?;
        let state = &mut *section;
        state.properties.trim();
        self.kind.trim(&mut state.kind);
        trace!("Trimmed {} {}", K::KIND, self.id);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn hold_write(&self) -> WriteSection<'_, ElementState<K::State>> {
        self.state.try_write().expect("uncontended write section")
    }

    /// Structural property equality with another element of any kind
    pub fn equals_properties<O: ElementKind>(&self, other: &GraphElement<O>) -> ElementResult<bool> {
        if std::ptr::eq(self as *const Self as *const (), other as *const GraphElement<O> as *const ()) {
            return Ok(true);
        }
        let mine = self.read()?;
        let theirs = other.read()?;
        Ok(mine.properties.equals(&theirs.properties))
    }

    /// Structural equality against a raw property set; `None` means absent.
    pub fn equals_property_map(&self, other: Option<&PropertyMap>) -> ElementResult<bool> {
        let section = self.read()?;
        Ok(section.properties.equals_map(other))
    }
}

impl<K: ElementKind + fmt::Debug> fmt::Debug for GraphElement<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphElement")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("creation_date", &self.creation_date)
            .field("modification_date", &self.modification_date())
            .finish_non_exhaustive()
    }
}

impl<K: ElementKind> PartialEq for GraphElement<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K: ElementKind> Eq for GraphElement<K> {}

impl<K: ElementKind> std::hash::Hash for GraphElement<K> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Live properties of one element, yielded as owned copies
pub struct Properties<'a, S> {
    section: Option<ReadSection<'a, ElementState<S>>>,
    /// Next raw slot to inspect
    cursor: usize,
}

impl<S> Properties<'_, S> {
    /// Whether the read section is still held
    pub fn is_active(&self) -> bool {
        self.section.is_some()
    }
}

impl<S> Iterator for Properties<'_, S> {
    type Item = (PropertyId, PropertyValue);

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.section.as_ref().and_then(|section| {
            section
                .properties
                .live_from(self.cursor)
                .map(|(entry, next)| (entry.property_id, entry.value.clone(), next))
        });
        match found {
            Some((id, value, next)) => {
                self.cursor = next;
                Some((id, value))
            }
            None => {
                // Exhausted: release the read section now
                self.section = None;
                None
            }
        }
    }
}
