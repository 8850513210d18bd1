//! Consultation Service - Online consultation with prescription safety rules
//!
//! Patients answer a short questionnaire tied to a session id; a pure rule
//! engine then decides whether a prescription is likely to be issued and
//! explains why not.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
