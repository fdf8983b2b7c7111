//! Dashboard card showing the cached profile.

use leptos::prelude::*;
use linkbio::view::ProfileSummaryView;

use crate::util::bridge::use_account;

#[component]
pub fn ProfileSummary() -> impl IntoView {
    let account = use_account();
    let summary = Memo::new(move |_| account.with(ProfileSummaryView::from_snapshot));

    view! {
        <section class="profile-summary">
            <h2 class="profile-summary__title">"Your profile"</h2>
            <Show
                when=move || !summary.get().loading
                fallback=|| view! { <p class="profile-summary__loading">"Loading…"</p> }
            >
                <dl class="profile-summary__fields">
                    <dt>"Username"</dt>
                    <dd>{move || summary.get().username}</dd>
                    <dt>"Bio"</dt>
                    <dd>{move || summary.get().bio}</dd>
                    <dt>"Avatar"</dt>
                    <dd>{move || summary.get().avatar_label()}</dd>
                </dl>
            </Show>
        </section>
    }
}
