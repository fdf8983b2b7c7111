//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};
use linkbio::backend::Backend;
use linkbio::backend::supabase::SupabaseBackend;
use linkbio::clock::Clock;
use linkbio::services::AppServices;

use crate::components::app_shell::AppShell;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, profile::ProfilePage, settings::SettingsPage};
use crate::util::bridge::spawn_ui;
use crate::util::clock::BrowserClock;
use crate::util::config::browser_config;
use crate::util::storage::LocalStorageSessionStore;

/// Root application component.
///
/// Builds the services once, starts the account listener, and provides the
/// services as context to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (services, backend) = match connect() {
        Ok(connected) => connected,
        Err(message) => {
            return view! {
                <div class="config-error">
                    <h1>"Linkbio"</h1>
                    <p>{message}</p>
                </div>
            }
            .into_any();
        }
    };
    start_account(&services, backend);
    provide_context(services);

    view! {
        <Title text="Linkbio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("app") view=AppShell>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </ParentRoute>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/app"/> }/>
            </Routes>
        </Router>
    }
    .into_any()
}

fn connect() -> Result<(AppServices, Arc<SupabaseBackend>), String> {
    let config = browser_config().map_err(|e| format!("Backend is not configured: {e}"))?;
    let backend = SupabaseBackend::with_store(&config, Box::new(LocalStorageSessionStore))
        .map(Arc::new)
        .map_err(|e| format!("Backend client failed to start: {e}"))?;
    let services = AppServices::with_clock(backend.clone(), &config, Arc::new(BrowserClock));
    Ok((services, backend))
}

/// Refresh a restored session that has expired, resolve the account once,
/// then follow auth-state changes for the lifetime of the page.
fn start_account(services: &AppServices, backend: Arc<SupabaseBackend>) {
    let account = Arc::clone(&services.account);
    let events = services.auth_events();
    spawn_ui(async move {
        let expired = backend
            .session()
            .await
            .is_some_and(|session| session.is_expired(BrowserClock.now_secs()));
        if expired {
            if let Err(e) = backend.refresh_session().await {
                tracing::warn!(error = %e, "session refresh failed");
            }
        }
        account.load().await;
        account.run(events).await;
    });
}
