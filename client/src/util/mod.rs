//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure view logic
//! from page and component code to improve reuse and testability.

pub mod auth;
pub mod dark_mode;
pub mod format;
pub mod mock_data;
pub mod timer;
pub mod validation;
