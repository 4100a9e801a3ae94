//! Networking modules for the clinic REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls behind the `ClinicApi` seam, and `types` defines
//! the wire schema for pets and appointments.

pub mod api;
pub mod types;
