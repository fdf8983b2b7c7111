//! Dismissible success / error line.

use leptos::prelude::*;
use linkbio::editor::StatusLine;

#[component]
pub fn StatusMessage(#[prop(into)] status: Signal<Option<StatusLine>>, on_dismiss: Callback<()>) -> impl IntoView {
    move || {
        status.get().map(|line| {
            let class = if line.is_error() { "status status--error" } else { "status status--success" };
            view! {
                <div class=class role="status">
                    <span class="status__text">{line.text().to_owned()}</span>
                    <button class="status__dismiss" type="button" aria-label="Dismiss" on:click=move |_| on_dismiss.run(())>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
