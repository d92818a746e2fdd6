//! Binary comparison operators for exact-match searches

use crate::graph::PropertyValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    /// Equal to (=)
    Equals,
    /// Not equal to (<>)
    NotEquals,
    /// Greater than (>)
    Greater,
    /// Greater than or equal to (>=)
    GreaterOrEquals,
    /// Less than (<)
    Lower,
    /// Less than or equal to (<=)
    LowerOrEquals,
}

impl BinaryOperator {
    /// Evaluate `value <op> literal`.
    ///
    /// Ordering operators are false for kinds that cannot be ordered against
    /// each other; equality falls back to structural equality for arrays and maps.
    pub fn evaluate(&self, value: &PropertyValue, literal: &PropertyValue) -> bool {
        let ordering = value.compare(literal);
        match self {
            BinaryOperator::Equals => ordering == Some(Ordering::Equal) || value == literal,
            BinaryOperator::NotEquals => !BinaryOperator::Equals.evaluate(value, literal),
            BinaryOperator::Greater => ordering == Some(Ordering::Greater),
            BinaryOperator::GreaterOrEquals => {
                matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
            }
            BinaryOperator::Lower => ordering == Some(Ordering::Less),
            BinaryOperator::LowerOrEquals => {
                matches!(ordering, Some(Ordering::Less | Ordering::Equal))
            }
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOperator::Equals => "=",
            BinaryOperator::NotEquals => "<>",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterOrEquals => ">=",
            BinaryOperator::Lower => "<",
            BinaryOperator::LowerOrEquals => "<=",
        };
        write!(f, "{}", symbol)
    }
}
