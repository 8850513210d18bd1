//! HTTP adapters - REST API implementations.
//!
//! - `consultation` - Questions, answer submission and prescription decisions
//! - `router` - Application router with cross-cutting layers

pub mod consultation;
mod router;

pub use consultation::{consultation_routes, ConsultationAppState};
pub use router::app_router;
