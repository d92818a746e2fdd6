//! Scan-based implementation of the read query contract
//!
//! Exact-match and range searches walk every element of the space under
//! short read sections. Fulltext and spatial searches delegate to the
//! registered indices and resolve the returned ids against the space;
//! ids of elements no longer in the space are dropped.

use super::contract::{FulltextMatches, Matches, PropertyRef, RangeQuery, ReadQuery, ScoredElement};
use super::error::{QueryError, QueryResult};
use super::operator::BinaryOperator;
use crate::graph::{ElementKind, ElementSpace, PropertyId, PropertySchema, PropertyValue};
use crate::index::{Geometry, IndexRegistry};
use std::sync::Arc;
use tracing::debug;

fn found<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

pub struct ScanQueryEngine<K: ElementKind> {
    space: Arc<ElementSpace<K>>,
    schema: Arc<PropertySchema>,
    indices: Arc<IndexRegistry>,
}

impl<K: ElementKind> ScanQueryEngine<K> {
    pub fn new(
        space: Arc<ElementSpace<K>>,
        schema: Arc<PropertySchema>,
        indices: Arc<IndexRegistry>,
    ) -> Self {
        Self {
            space,
            schema,
            indices,
        }
    }

    pub fn space(&self) -> &Arc<ElementSpace<K>> {
        &self.space
    }

    /// Elements whose live value for `property` satisfies `predicate`,
    /// ordered by id. A collision on any element aborts the scan.
    fn scan(
        &self,
        property: PropertyId,
        predicate: impl Fn(&PropertyValue) -> bool,
    ) -> QueryResult<Option<Matches<K>>> {
        let mut matches = Vec::new();
        for element in self.space.snapshot() {
            if let Some(value) = element.try_get_property_value(property)? {
                if predicate(&value) {
                    matches.push(element);
                }
            }
        }
        Ok(found(matches))
    }
}

impl<K: ElementKind> ReadQuery<K> for ScanQueryEngine<K> {
    fn exact_match(
        &self,
        property: &PropertyRef,
        literal: &PropertyValue,
        op: BinaryOperator,
    ) -> QueryResult<Option<Matches<K>>> {
        let property = match property {
            PropertyRef::Id(id) => *id,
            PropertyRef::Name(name) => match self.schema.resolve(name) {
                Some(id) => id,
                None => {
                    debug!("Property '{}' is not registered; nothing can match", name);
                    return Ok(None);
                }
            },
        };
        debug!("Exact match on {} {} {}", property, op, literal);
        self.scan(property, |value| op.evaluate(value, literal))
    }

    fn range(&self, query: &RangeQuery) -> QueryResult<Option<Matches<K>>> {
        debug!("Range scan on {}", query.property);
        self.scan(query.property, |value| query.contains(value))
    }

    fn fulltext(&self, index_id: &str, query: &str) -> QueryResult<Option<FulltextMatches<K>>> {
        let index = self
            .indices
            .fulltext(index_id)
            .ok_or_else(|| QueryError::UnknownIndex(index_id.to_string()))?;

        let Some(result) = index.search(query) else {
            return Ok(None);
        };

        let hits: Vec<ScoredElement<K>> = result
            .hits
            .into_iter()
            .filter_map(|hit| {
                self.space.get(hit.element).map(|element| ScoredElement {
                    element,
                    score: hit.score,
                    highlights: hit.highlights,
                })
            })
            .collect();

        if hits.is_empty() {
            return Ok(None);
        }
        let max_score = hits.iter().map(|hit| hit.score).fold(0.0, f64::max);
        Ok(Some(FulltextMatches { max_score, hits }))
    }

    fn spatial(
        &self,
        index_id: &str,
        geometry: &Geometry,
        max_distance: Option<f64>,
    ) -> QueryResult<Option<Matches<K>>> {
        let index = self
            .indices
            .spatial(index_id)
            .ok_or_else(|| QueryError::UnknownIndex(index_id.to_string()))?;

        let Some(ids) = index.search(geometry, max_distance) else {
            return Ok(None);
        };

        let mut matches: Matches<K> = ids.into_iter().filter_map(|id| self.space.get(id)).collect();
        matches.sort_by_key(|element| element.id());
        matches.dedup_by_key(|element| element.id());
        Ok(found(matches))
    }
}
