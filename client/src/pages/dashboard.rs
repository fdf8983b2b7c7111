//! Dashboard: read-only summary of the signed-in account.

use leptos::prelude::*;

use crate::components::profile_summary::ProfileSummary;
use crate::components::user_email_badge::UserEmailBadge;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <UserEmailBadge/>
            </div>
            <ProfileSummary/>
        </div>
    }
}
