//! # linkbio-client
//!
//! Leptos + WASM frontend for Linkbio: login, dashboard, profile editor and
//! settings, rendered client-side over the `linkbio` core.
//!
//! All data access goes through [`linkbio::services::AppServices`], provided
//! once as context by [`app::App`]. Views subscribe to the shared account
//! snapshot through [`util::bridge::use_account`].

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    util::logging::init();
    leptos::mount::mount_to_body(app::App);
}
