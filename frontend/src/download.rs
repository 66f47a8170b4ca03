use shared::ReportError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offers `bytes` to the user as a PDF download named `file_name`.
pub fn save_pdf(bytes: &[u8], file_name: &str) -> Result<(), ReportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ReportError::Render("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| ReportError::Render("no document body".to_string()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| ReportError::Render("not an anchor element".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error)?;
    Url::revoke_object_url(&url).map_err(js_error)
}

fn js_error(err: JsValue) -> ReportError {
    ReportError::Render(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
