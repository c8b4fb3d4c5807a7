//! # Application Layer
//!
//! The conversation service and the interfaces it depends on.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
