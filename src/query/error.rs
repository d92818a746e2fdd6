//! Query errors
//!
//! "Nothing matched" is not an error; searches report it as `Ok(None)`.

use crate::graph::ElementError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// An element guard collided while the query was reading it
    #[error("Element error: {0}")]
    Element(#[from] ElementError),

    /// No fulltext or spatial index registered under this id
    #[error("Unknown index: {0}")]
    UnknownIndex(String),
}

pub type QueryResult<T> = Result<T, QueryError>;
