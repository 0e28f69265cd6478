//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the authenticated chrome (shell, sidebar, navbar) and
//! the cards and badges shared by the dashboard, task and leaderboard pages,
//! reading shared state from Leptos context providers.

pub mod app_shell;
pub mod category_badge;
pub mod loading_spinner;
pub mod navbar;
pub mod sidebar;
pub mod stat_card;
pub mod task_card;
