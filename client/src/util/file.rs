//! Reading a picked `<input type="file">` into an [`AvatarFile`].

use linkbio::services::avatar::AvatarFile;

/// First file selected in the input that fired `ev`, read into memory.
/// `None` when nothing was picked or the read failed.
#[cfg(feature = "csr")]
pub async fn picked_file(ev: &leptos::ev::Event) -> Option<AvatarFile> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    let name = file.name();
    let buffer = match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => buffer,
        Err(e) => {
            log::warn!("reading {name} failed: {e:?}");
            return None;
        }
    };
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    // Reset so picking the same file again still fires `change`.
    input.set_value("");
    Some(AvatarFile::new(name, bytes))
}
