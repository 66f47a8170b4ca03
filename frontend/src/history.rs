//! Browser history: pushing page paths and hearing about Back/Forward.
//! Off wasm both are inert so the update loop can be tested natively.

#[cfg(target_arch = "wasm32")]
pub fn push_path(path: &str) {
    let Some(window) = web_sys::window() else { return };
    if window.location().pathname().ok().as_deref() == Some(path) {
        return;
    }
    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn push_path(_path: &str) {}

/// Resolves with the new pathname on the next `popstate`. `None` when there is
/// no window to listen on.
#[cfg(target_arch = "wasm32")]
pub async fn next_move() -> Option<String> {
    use wasm_bindgen_futures::JsFuture;
    use web_sys::AddEventListenerOptions;

    let window = web_sys::window()?;
    let mut registered = false;
    let moved = js_sys::Promise::new(&mut |resolve, _reject| {
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        registered = window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "popstate", &resolve, &options,
            )
            .is_ok();
    });
    if !registered {
        return None;
    }
    JsFuture::from(moved).await.ok()?;
    window.location().pathname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn next_move() -> Option<String> {
    None
}
