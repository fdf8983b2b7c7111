//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome (header, sidebar, logout) and the account
//! surfaces (summary, email badge, profile form). Each account-aware component
//! holds its own subscription to the shared snapshot.

pub mod app_shell;
pub mod avatar;
pub mod logout_button;
pub mod profile_form;
pub mod profile_summary;
pub mod sidebar_nav;
pub mod status_message;
pub mod user_email_badge;
pub mod user_header;
