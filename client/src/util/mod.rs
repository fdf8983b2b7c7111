//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, time, files, build-time
//! config) from page and component logic.

pub mod auth;
pub mod bridge;
pub mod clock;
pub mod config;
#[cfg(feature = "csr")]
pub mod file;
pub mod logging;
pub mod storage;
