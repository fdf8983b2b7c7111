//! Avatar image with a text fallback.

use leptos::prelude::*;
use linkbio::view::AvatarDisplay;

#[component]
pub fn Avatar(#[prop(into)] avatar: Signal<AvatarDisplay>, class: &'static str) -> impl IntoView {
    move || match avatar.get() {
        AvatarDisplay::Image(url) => view! { <img class=class src=url alt="avatar"/> }.into_any(),
        AvatarDisplay::Glyph(glyph) => view! { <div class=format!("{class} {class}--empty")>{glyph}</div> }.into_any(),
    }
}
