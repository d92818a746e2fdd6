//! Property value types for graph elements
//!
//! Values are a closed tagged union; typed reads go through
//! [`FromPropertyValue`] and fail with a type mismatch instead of casting.

use super::types::PropertyId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Property value type supporting multiple data types
///
/// Supports:
/// - String
/// - Integer (i64)
/// - Float (f64)
/// - Boolean
/// - DateTime (as i64 timestamp)
/// - Array (Vec<PropertyValue>)
/// - Map (HashMap<String, PropertyValue>)
///
/// `Null` marks a logically absent property: an entry holding it is invisible
/// to lookup, enumeration and equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(i64), // Unix timestamp in milliseconds
    Array(Vec<PropertyValue>),
    Map(HashMap<String, PropertyValue>),
    Null,
}

impl PropertyValue {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get datetime value if this is a datetime
    pub fn as_datetime(&self) -> Option<i64> {
        match self {
            PropertyValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Get array value if this is an array
    pub fn as_array(&self) -> Option<&Vec<PropertyValue>> {
        match self {
            PropertyValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get map value if this is a map
    pub fn as_map(&self) -> Option<&HashMap<String, PropertyValue>> {
        match self {
            PropertyValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "String",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Float(_) => "Float",
            PropertyValue::Boolean(_) => "Boolean",
            PropertyValue::DateTime(_) => "DateTime",
            PropertyValue::Array(_) => "Array",
            PropertyValue::Map(_) => "Map",
            PropertyValue::Null => "Null",
        }
    }

    /// Order two values of compatible kinds.
    ///
    /// Integers and floats compare numerically with each other. Arrays, maps
    /// and nulls are not ordered; mixed kinds yield `None`.
    pub fn compare(&self, other: &PropertyValue) -> Option<Ordering> {
        match (self, other) {
            (PropertyValue::String(a), PropertyValue::String(b)) => Some(a.cmp(b)),
            (PropertyValue::Integer(a), PropertyValue::Integer(b)) => Some(a.cmp(b)),
            (PropertyValue::Float(a), PropertyValue::Float(b)) => a.partial_cmp(b),
            (PropertyValue::Integer(a), PropertyValue::Float(b)) => compare_int_float(*a, *b),
            (PropertyValue::Float(a), PropertyValue::Integer(b)) => {
                compare_int_float(*b, *a).map(Ordering::reverse)
            }
            (PropertyValue::Boolean(a), PropertyValue::Boolean(b)) => Some(a.cmp(b)),
            (PropertyValue::DateTime(a), PropertyValue::DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Exact integer/float ordering, without rounding the integer through f64
fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63, the first float above every i64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if float.is_nan() {
        return None;
    }
    if float >= LIMIT {
        return Some(Ordering::Less);
    }
    if float < -LIMIT {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0f64.partial_cmp(&(float - whole)),
        ordering => Some(ordering),
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "\"{}\"", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(fl) => write!(f, "{}", fl),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::DateTime(dt) => write!(f, "DateTime({})", dt),
            PropertyValue::Array(arr) => {
                write!(f, "[")?;
                for (i, val) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            PropertyValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, val)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, val)?;
                }
                write!(f, "}}")
            }
            PropertyValue::Null => write!(f, "null"),
        }
    }
}

// Convenience conversions
impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(arr: Vec<PropertyValue>) -> Self {
        PropertyValue::Array(arr)
    }
}

impl From<HashMap<String, PropertyValue>> for PropertyValue {
    fn from(map: HashMap<String, PropertyValue>) -> Self {
        PropertyValue::Map(map)
    }
}

/// Typed extraction from a stored value.
///
/// Returns `None` when the stored variant does not match `Self`; callers turn
/// that into [`ElementError::TypeMismatch`](super::ElementError::TypeMismatch).
pub trait FromPropertyValue: Sized {
    /// Variant name reported on mismatch
    const TYPE_NAME: &'static str;

    fn from_property_value(value: &PropertyValue) -> Option<Self>;
}

impl FromPropertyValue for PropertyValue {
    const TYPE_NAME: &'static str = "Any";

    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromPropertyValue for String {
    const TYPE_NAME: &'static str = "String";

    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        value.as_string().map(str::to_string)
    }
}

impl FromPropertyValue for i64 {
    const TYPE_NAME: &'static str = "Integer";

    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        value.as_integer()
    }
}

impl FromPropertyValue for f64 {
    const TYPE_NAME: &'static str = "Float";

    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        value.as_float()
    }
}

impl FromPropertyValue for bool {
    const TYPE_NAME: &'static str = "Boolean";

    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        value.as_boolean()
    }
}

impl FromPropertyValue for Vec<PropertyValue> {
    const TYPE_NAME: &'static str = "Array";

    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        value.as_array().cloned()
    }
}

impl FromPropertyValue for HashMap<String, PropertyValue> {
    const TYPE_NAME: &'static str = "Map";

    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        value.as_map().cloned()
    }
}

/// `DateTime` values hold milliseconds since the Unix epoch
impl FromPropertyValue for chrono::DateTime<chrono::Utc> {
    const TYPE_NAME: &'static str = "DateTime";

    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        value
            .as_datetime()
            .and_then(chrono::DateTime::from_timestamp_millis)
    }
}

/// Raw, unordered property set keyed by property id
pub type PropertyMap = FxHashMap<PropertyId, PropertyValue>;
