use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offer `bytes` to the user as a file download by clicking a temporary
/// anchor pointing at an object URL.
pub fn save_bytes(bytes: &[u8], filename: &str, mime_type: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "Failed to build download blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create download URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document available".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Failed to create download link".to_string())?
        .dyn_into()
        .map_err(|_| "Failed to create download link".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}
