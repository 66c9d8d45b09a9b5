//! Hands an encoded export to the user: a file on native, a download in the browser.

use std::path::Path;

use crate::error::ExportError;

/// How long the object URL of a browser download stays alive after the click.
#[cfg(target_arch = "wasm32")]
const REVOKE_DELAY_MS: i32 = 40_000;

#[cfg(not(target_arch = "wasm32"))]
pub fn deliver_png(bytes: &[u8], file_name: &str, dir: &Path) -> Result<(), ExportError> {
    let path = dir.join(file_name);
    std::fs::write(&path, bytes)?;
    log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn deliver_png(bytes: &[u8], file_name: &str, _dir: &Path) -> Result<(), ExportError> {
    use eframe::wasm_bindgen::JsCast as _;
    use eframe::wasm_bindgen::closure::Closure;

    let failed = |err: eframe::wasm_bindgen::JsValue| ExportError::Download(format!("{err:?}"));

    let window = web_sys::window().ok_or_else(|| ExportError::Download("no window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(failed)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(failed)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(failed)?
        .dyn_into()
        .map_err(|_| ExportError::Download("not an anchor element".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // Revoking right after the click can cancel the download in some browsers.
    let revoke = Closure::once_into_js(move || {
        if let Err(err) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke export URL: {err:?}");
        }
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(revoke.unchecked_ref(), REVOKE_DELAY_MS)
        .map_err(failed)?;
    log::info!("Downloaded {file_name} ({} bytes)", bytes.len());
    Ok(())
}
