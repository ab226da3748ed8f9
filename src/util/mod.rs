//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing decisions and browser event plumbing from
//! page and component logic to improve reuse and testability.

pub mod auth;
pub mod click_outside;
pub mod guard;
