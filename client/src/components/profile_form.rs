//! Profile editor form: username, bio, avatar upload.

use std::sync::Arc;

use leptos::prelude::*;
use linkbio::editor::{Activity, EditorState};
use linkbio::services::AppServices;

use crate::components::status_message::StatusMessage;
use crate::util::bridge::{spawn_ui, use_watch};

#[component]
pub fn ProfileForm() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let editor = Arc::new(services.profile_editor());
    let state = use_watch(editor.subscribe());

    on_cleanup({
        let editor = Arc::clone(&editor);
        move || editor.unmount()
    });

    {
        let editor = Arc::clone(&editor);
        spawn_ui(async move {
            let _ = editor.load().await;
        });
    }

    let busy = move || state.with(EditorState::is_busy);
    let activity = move || state.with(|s| s.activity);

    let on_save = {
        let editor = Arc::clone(&editor);
        let account = Arc::clone(&services.account);
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let editor = Arc::clone(&editor);
            let account = Arc::clone(&account);
            spawn_ui(async move {
                if editor.save().await.is_ok() {
                    account.load().await;
                }
            });
        }
    };

    let on_reload = {
        let editor = Arc::clone(&editor);
        move |_: leptos::ev::MouseEvent| {
            let editor = Arc::clone(&editor);
            spawn_ui(async move {
                let _ = editor.load().await;
            });
        }
    };

    let on_file = {
        let editor = Arc::clone(&editor);
        let account = Arc::clone(&services.account);
        move |ev: leptos::ev::Event| {
            #[cfg(feature = "csr")]
            {
                let editor = Arc::clone(&editor);
                let account = Arc::clone(&account);
                spawn_ui(async move {
                    let Some(file) = crate::util::file::picked_file(&ev).await else {
                        return;
                    };
                    if editor.upload_avatar(&file).await.is_ok() {
                        account.load().await;
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (ev, &editor, &account);
        }
    };

    let on_username = {
        let editor = Arc::clone(&editor);
        move |ev: leptos::ev::Event| editor.set_username(event_target_value(&ev))
    };
    let on_bio = {
        let editor = Arc::clone(&editor);
        move |ev: leptos::ev::Event| editor.set_bio(event_target_value(&ev))
    };
    let on_dismiss = {
        let editor = Arc::clone(&editor);
        Callback::new(move |()| editor.dismiss_status())
    };

    view! {
        <form class="profile-form" on:submit=on_save>
            <div class="profile-form__avatar">
                {move || {
                    let url = state.with(|s| s.avatar_url.clone());
                    if url.is_empty() {
                        view! { <div class="profile-form__avatar-empty">"No avatar"</div> }.into_any()
                    } else {
                        view! { <img class="profile-form__avatar-img" src=url alt="avatar"/> }.into_any()
                    }
                }}
                <label class="btn profile-form__upload">
                    {move || if activity() == Activity::Uploading { "Uploading…" } else { "Upload avatar" }}
                    <input type="file" accept="image/*" style="display: none" on:change=on_file disabled=busy/>
                </label>
            </div>

            <label class="profile-form__label">
                "Username"
                <input
                    class="profile-form__input"
                    type="text"
                    prop:value=move || state.with(|s| s.username.clone())
                    on:input=on_username
                    disabled=busy
                />
            </label>

            <label class="profile-form__label">
                "Bio"
                <textarea
                    class="profile-form__textarea"
                    rows="4"
                    prop:value=move || state.with(|s| s.bio.clone())
                    on:input=on_bio
                    disabled=busy
                ></textarea>
            </label>

            <StatusMessage status=Signal::derive(move || state.with(|s| s.status.clone())) on_dismiss=on_dismiss/>

            <div class="profile-form__actions">
                <button class="btn btn--primary" type="submit" disabled=move || busy() || activity() == Activity::Loading>
                    {move || if activity() == Activity::Saving { "Saving…" } else { "Save" }}
                </button>
                <button class="btn" type="button" on:click=on_reload disabled=busy>
                    "Reload"
                </button>
            </div>
        </form>
    }
}
