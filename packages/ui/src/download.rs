//! Client-side "save as" for generated text files.

/// Offer `contents` as a plain-text download named `filename`.
///
/// In the browser this clicks a temporary object-URL link; on desktop the file
/// is written to the user's download directory.
#[cfg(target_arch = "wasm32")]
pub fn save_text_file(filename: &str, contents: &str) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};

    let js_err = |e: JsValue| format!("{e:?}");

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "failed to create link".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_text_file(filename: &str, contents: &str) -> Result<(), String> {
    let dir = dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    let path = dir.join(filename);
    std::fs::write(&path, contents).map_err(|e| e.to_string())?;
    tracing::info!("Saved {}", path.display());
    Ok(())
}
