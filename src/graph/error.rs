//! Errors raised by guard-mediated element operations

use super::guard::Access;
use super::types::{ElementId, PropertyId};
use thiserror::Error;

/// Errors that can occur during graph element operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// The element's guard could not be acquired; nothing was changed
    #[error("Collision acquiring {access} section on {id}")]
    Collision { id: ElementId, access: Access },

    #[error("Property {property} holds {found}, expected {expected}")]
    TypeMismatch {
        property: PropertyId,
        expected: &'static str,
        found: &'static str,
    },
}

impl ElementError {
    pub fn is_collision(&self) -> bool {
        matches!(self, ElementError::Collision { .. })
    }
}

pub type ElementResult<T> = Result<T, ElementError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_message() {
        let err = ElementError::Collision {
            id: ElementId::new(3),
            access: Access::Write,
        };
        assert!(err.is_collision());
        assert_eq!(err.to_string(), "Collision acquiring write section on ElementId(3)");
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = ElementError::TypeMismatch {
            property: PropertyId::new(1),
            expected: "Integer",
            found: "String",
        };
        assert!(!err.is_collision());
        assert_eq!(
            err.to_string(),
            "Property PropertyId(1) holds String, expected Integer"
        );
    }
}
