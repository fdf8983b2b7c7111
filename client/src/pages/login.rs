//! Login page with an email + password form that toggles between sign-in and
//! sign-up.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use linkbio::editor::StatusLine;
use linkbio::services::AppServices;
use linkbio::services::auth::{AuthMode, SubmitOutcome};
use linkbio::view::Route;

use crate::components::status_message::StatusMessage;
use crate::util::bridge::spawn_ui;

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<StatusLine>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        message.set(None);

        let auth = services.auth.clone();
        let navigate = navigate.clone();
        let current = mode.get();
        let email_value = email.get();
        let password_value = password.get();
        spawn_ui(async move {
            match auth.submit(current, &email_value, &password_value).await {
                Ok(SubmitOutcome::SignedIn(_)) => {
                    busy.try_set(false);
                    navigate(Route::Dashboard.path(), NavigateOptions::default());
                    return;
                }
                Ok(outcome @ SubmitOutcome::AccountCreated(_)) => {
                    message.try_set(outcome.message().map(|text| StatusLine::Success(text.to_owned())));
                    mode.try_set(AuthMode::Login);
                }
                Err(e) => {
                    message.try_set(Some(StatusLine::Error(e.to_string())));
                }
            }
            busy.try_set(false);
        });
    };

    let on_toggle = move |_: leptos::ev::MouseEvent| {
        mode.update(|m| *m = m.toggled());
        message.set(None);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"LinkBio"</h1>
                <p class="login-card__subtitle">{move || mode.get().title()}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait…" } else { mode.get().submit_label() }}
                    </button>
                </form>
                <StatusMessage status=message on_dismiss=Callback::new(move |()| message.set(None))/>
                <div class="login-divider"></div>
                <button class="login-toggle" type="button" on:click=on_toggle disabled=move || busy.get()>
                    {move || mode.get().toggle_label()}
                </button>
            </div>
        </div>
    }
}
