use leptos::prelude::*;

/// Placeholder until account settings exist.
#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <p class="settings-page__empty">"Nothing to configure yet."</p>
        </div>
    }
}
