//! Layout for every `/app` route: top bar, sidebar, and the routed page.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::logout_button::LogoutButton;
use crate::components::sidebar_nav::SidebarNav;
use crate::components::user_header::UserHeader;
use crate::util::auth::install_unauth_redirect;
use crate::util::bridge::use_account;

/// Authenticated layout. Redirects to `/login` once the account resolves with
/// nobody signed in.
#[component]
pub fn AppShell() -> impl IntoView {
    install_unauth_redirect(use_account(), use_navigate());

    view! {
        <div class="app-shell">
            <header class="app-shell__topbar">
                <div class="app-shell__brand">
                    <span class="app-shell__logo">"LB"</span>
                    <UserHeader/>
                </div>
                <LogoutButton/>
            </header>
            <div class="app-shell__body">
                <aside class="app-shell__sidebar">
                    <SidebarNav/>
                </aside>
                <main class="app-shell__main">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
