//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components under `/app` apply identical unauthenticated redirect
//! behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use linkbio::state::AccountSnapshot;
use linkbio::view::{Route, should_redirect_to_login};

/// Redirect to `/login` whenever the account has resolved with nobody signed in.
pub fn install_unauth_redirect<F>(account: ReadSignal<AccountSnapshot>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if account.with(should_redirect_to_login) {
            navigate(Route::Login.path(), NavigateOptions::default());
        }
    });
}
