//! Networking modules for the rating backend's REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the `/auth/*` calls, `error` classifies their failures, and
//! `types` defines the JSON wire schema.

pub mod api;
pub mod error;
pub mod types;
