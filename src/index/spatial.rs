//! Spatial index boundary

use crate::graph::ElementId;
use serde::{Deserialize, Serialize};

/// Query geometry handed to a spatial index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point { x: f64, y: f64 },
    Rectangle { min_x: f64, min_y: f64, max_x: f64, max_y: f64 },
}

impl Geometry {
    pub fn point(x: f64, y: f64) -> Self {
        Geometry::Point { x, y }
    }

    /// Rectangle from two opposite corners in any order
    pub fn rectangle(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Geometry::Rectangle {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    /// (min_x, min_y, max_x, max_y)
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        match *self {
            Geometry::Point { x, y } => (x, y, x, y),
            Geometry::Rectangle { min_x, min_y, max_x, max_y } => (min_x, min_y, max_x, max_y),
        }
    }
}

/// A spatial index maintained outside the element core
pub trait SpatialIndex: Send + Sync {
    /// Elements satisfying the index's predicate against `geometry`,
    /// optionally limited to `max_distance`. `None` when nothing matches.
    fn search(&self, geometry: &Geometry, max_distance: Option<f64>) -> Option<Vec<ElementId>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_normalizes_corners() {
        let rect = Geometry::rectangle(5.0, 1.0, 2.0, 4.0);
        assert_eq!(rect.bounding_box(), (2.0, 1.0, 5.0, 4.0));
    }

    #[test]
    fn test_point_bounding_box() {
        assert_eq!(Geometry::point(1.0, 2.0).bounding_box(), (1.0, 2.0, 1.0, 2.0));
    }
}
