//! Logout button in the top bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use linkbio::services::AppServices;
use linkbio::view::Route;

use crate::util::bridge::spawn_ui;

/// Signs out (the local session is dropped even if the server call fails),
/// then goes to `/login`.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_click = move |_: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let auth = services.auth.clone();
        let navigate = navigate.clone();
        spawn_ui(async move {
            auth.sign_out().await;
            busy.try_set(false);
            navigate(Route::Login.path(), NavigateOptions::default());
        });
    };

    view! {
        <button class="btn logout-button" on:click=on_click disabled=move || busy.get()>
            "Logout"
        </button>
    }
}
