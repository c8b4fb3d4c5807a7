//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion over HTTP (Groq, OpenAI-compatible)
//! - Offline echo client for `--mock` runs and tests
//! - Terminal wiring (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
