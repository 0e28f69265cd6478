//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `settings`, `ui`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod settings;
pub mod ui;
