use leptos::prelude::*;
use linkbio::view::EmailBadgeView;

use crate::util::bridge::use_account;

#[component]
pub fn UserEmailBadge() -> impl IntoView {
    let account = use_account();
    let email = move || account.with(EmailBadgeView::from_snapshot).email;

    view! { <span class="email-badge">{email}</span> }
}
