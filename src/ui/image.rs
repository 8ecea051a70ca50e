/// Object URLs for images returned by the backend

use crate::report::ImageBlob;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

/// Wrap image bytes in a Blob and hand back a URL usable as `<img src>`
pub fn object_url(image: &ImageBlob) -> Result<String, JsValue> {
    let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);

    let options = BlobPropertyBag::new();
    options.set_type(&image.content_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    Url::create_object_url_with_blob(&blob)
}

pub fn revoke_object_url(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("Failed to revoke {}: {:?}", url, e);
    }
}
