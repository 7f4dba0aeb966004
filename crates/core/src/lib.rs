//! Domain primitives shared by the storage and HTTP layers.
//!
//! Nothing in this crate touches the database; it holds the error taxonomy,
//! field validation rules and the storage-location resolver.

pub mod error;
pub mod storage;
pub mod types;
pub mod validation;
