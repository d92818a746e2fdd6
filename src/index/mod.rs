//! Index boundary module
//!
//! Fulltext and spatial indices are built and maintained by collaborators
//! outside the element core; this module defines what they must answer and
//! where queries find them.

pub mod fulltext;
pub mod manager;
pub mod spatial;

pub use fulltext::{FulltextHit, FulltextIndex, FulltextResult};
pub use manager::IndexRegistry;
pub use spatial::{Geometry, SpatialIndex};
