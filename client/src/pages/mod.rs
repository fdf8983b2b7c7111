//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages under `/app` render inside
//! [`crate::components::app_shell::AppShell`].

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod settings;
