//! Sidebar: mini profile card plus navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use linkbio::view::{IdentityBadge, nav_items};

use crate::components::avatar::Avatar;
use crate::util::bridge::use_account;

#[component]
pub fn SidebarNav() -> impl IntoView {
    let account = use_account();
    let badge = Memo::new(move |_| account.with(IdentityBadge::sidebar));
    let location = use_location();

    view! {
        <div class="sidebar">
            <div class="sidebar__profile">
                <Avatar avatar=Signal::derive(move || badge.get().avatar) class="sidebar__avatar"/>
                <div class="sidebar__profile-text">
                    <div class="sidebar__name">{move || badge.get().display_name}</div>
                    <div class="sidebar__email">{move || badge.get().email}</div>
                </div>
            </div>

            <div class="sidebar__heading">"Navigation"</div>
            <nav class="sidebar__nav">
                {move || {
                    nav_items(&location.pathname.get())
                        .into_iter()
                        .map(|item| {
                            let class = if item.active { "sidebar__link sidebar__link--active" } else { "sidebar__link" };
                            view! { <a href=item.href class=class>{item.label}</a> }
                        })
                        .collect_view()
                }}
            </nav>
        </div>
    }
}
