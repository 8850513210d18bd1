//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `consultation` - Questions, answers and consultation sessions
//! - `prescription` - Pure rule engine producing prescription decisions

pub mod consultation;
pub mod foundation;
pub mod prescription;
