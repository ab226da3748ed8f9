//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wrap page content with cross-cutting behavior while reading
//! shared state from Leptos context providers.

pub mod protected_route;
