//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Authenticated pages render inside
//! [`crate::components::app_shell::AppShell`].

pub mod dashboard;
pub mod home;
pub mod leaderboard;
pub mod login;
pub mod profile;
pub mod register;
pub mod settings;
pub mod tasks;
