//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and reads the session through
//! the injected `SessionContext`.

pub mod dashboard;
pub mod login;
