//! Top-bar identity badge.

use leptos::prelude::*;
use linkbio::view::IdentityBadge;

use crate::components::avatar::Avatar;
use crate::util::bridge::use_account;

#[component]
pub fn UserHeader() -> impl IntoView {
    let account = use_account();
    let badge = Memo::new(move |_| account.with(IdentityBadge::header));

    view! {
        <div class="user-header">
            <Avatar avatar=Signal::derive(move || badge.get().avatar) class="user-header__avatar"/>
            <div class="user-header__text">
                <div class="user-header__name">{move || badge.get().display_name}</div>
                <div class="user-header__email">{move || badge.get().email}</div>
            </div>
        </div>
    }
}
