//! Read query contract
//!
//! The four search shapes a query planner may ask of an element collection.
//! All of them are read-only and answer `Ok(None)` when nothing matches;
//! errors are reserved for collisions and unknown indices.

use super::error::QueryResult;
use super::operator::BinaryOperator;
use crate::graph::{ElementKind, GraphElement, PropertyId, PropertyValue};
use crate::index::Geometry;
use std::ops::Bound;
use std::sync::Arc;

/// Property addressed by id or by schema name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyRef {
    Id(PropertyId),
    Name(String),
}

impl From<PropertyId> for PropertyRef {
    fn from(id: PropertyId) -> Self {
        PropertyRef::Id(id)
    }
}

impl From<&str> for PropertyRef {
    fn from(name: &str) -> Self {
        PropertyRef::Name(name.to_string())
    }
}

impl From<String> for PropertyRef {
    fn from(name: String) -> Self {
        PropertyRef::Name(name)
    }
}

/// Range predicate over one property
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuery {
    pub property: PropertyId,
    pub left: Bound<PropertyValue>,
    pub right: Bound<PropertyValue>,
}

impl RangeQuery {
    /// Range with both bounds present and explicit inclusivity
    pub fn new(
        property: PropertyId,
        left: impl Into<PropertyValue>,
        right: impl Into<PropertyValue>,
        include_left: bool,
        include_right: bool,
    ) -> Self {
        let bound = |value: PropertyValue, inclusive: bool| {
            if inclusive {
                Bound::Included(value)
            } else {
                Bound::Excluded(value)
            }
        };
        Self {
            property,
            left: bound(left.into(), include_left),
            right: bound(right.into(), include_right),
        }
    }

    /// Whether `value` lies within both bounds. Values that cannot be ordered
    /// against a bound are outside the range.
    pub fn contains(&self, value: &PropertyValue) -> bool {
        let above_left = match &self.left {
            Bound::Unbounded => true,
            Bound::Included(left) => BinaryOperator::GreaterOrEquals.evaluate(value, left),
            Bound::Excluded(left) => BinaryOperator::Greater.evaluate(value, left),
        };
        let below_right = match &self.right {
            Bound::Unbounded => true,
            Bound::Included(right) => BinaryOperator::LowerOrEquals.evaluate(value, right),
            Bound::Excluded(right) => BinaryOperator::Lower.evaluate(value, right),
        };
        above_left && below_right
    }
}

/// Elements satisfying a predicate
pub type Matches<K> = Vec<Arc<GraphElement<K>>>;

/// One fulltext match resolved to its element
#[derive(Debug)]
pub struct ScoredElement<K: ElementKind> {
    pub element: Arc<GraphElement<K>>,
    pub score: f64,
    pub highlights: Vec<String>,
}

/// Fulltext answer resolved against an element collection
#[derive(Debug)]
pub struct FulltextMatches<K: ElementKind> {
    pub max_score: f64,
    pub hits: Vec<ScoredElement<K>>,
}

/// Search surface exposed to query planning
pub trait ReadQuery<K: ElementKind> {
    /// Elements whose `property` satisfies `value <op> literal`
    fn exact_match(
        &self,
        property: &PropertyRef,
        literal: &PropertyValue,
        op: BinaryOperator,
    ) -> QueryResult<Option<Matches<K>>>;

    /// Elements whose property lies within the range
    fn range(&self, query: &RangeQuery) -> QueryResult<Option<Matches<K>>>;

    /// Fulltext search against the index registered as `index_id`
    fn fulltext(&self, index_id: &str, query: &str) -> QueryResult<Option<FulltextMatches<K>>>;

    /// Spatial search against the index registered as `index_id`
    fn spatial(
        &self,
        index_id: &str,
        geometry: &Geometry,
        max_distance: Option<f64>,
    ) -> QueryResult<Option<Matches<K>>>;
}
