use leptos::prelude::*;

use crate::components::profile_form::ProfileForm;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <ProfileForm/>
        </div>
    }
}
