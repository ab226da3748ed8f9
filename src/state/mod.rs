//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `dashboard`) so individual
//! components can depend on small focused models. `storage` holds the
//! persistence seam the session lifecycle writes through.

pub mod dashboard;
pub mod session;
pub mod storage;

#[cfg(test)]
pub(crate) mod fakes;
