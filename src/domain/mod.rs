//! # Domain Layer
//!
//! Conversation models, wire types, and the error taxonomy.
//! Nothing here performs I/O; HTTP status codes are borrowed from `reqwest`.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
