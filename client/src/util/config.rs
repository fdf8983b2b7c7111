//! Build-time backend configuration for the browser bundle.
//!
//! The browser has no process environment, so the project URL and anon key
//! are baked in when the bundle is compiled (`SUPABASE_URL=... trunk build`).

use linkbio::config::{AppConfig, ConfigError};

/// Config from the variables present at compile time.
///
/// # Errors
///
/// Returns an error when the URL or key was not set at build time.
pub fn browser_config() -> Result<AppConfig, ConfigError> {
    config_from(|key| match key {
        "SUPABASE_URL" => option_env!("SUPABASE_URL"),
        "SUPABASE_ANON_KEY" => option_env!("SUPABASE_ANON_KEY"),
        "LINKBIO_PROFILES_TABLE" => option_env!("LINKBIO_PROFILES_TABLE"),
        "LINKBIO_AVATAR_BUCKET" => option_env!("LINKBIO_AVATAR_BUCKET"),
        _ => None,
    })
}

fn config_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<&'static str>,
{
    AppConfig::from_lookup(|key| lookup(key).map(str::to_owned))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
