//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory session repository
//! - `catalog` - Question catalog loading from YAML
//! - `http` - Axum REST API

pub mod catalog;
pub mod http;
pub mod memory;

pub use memory::InMemorySessionRepository;
