/// Non-blocking toast notifications.
///
/// Replaces the old blocking `alert` acknowledgement. The contract kept from
/// the page is "exactly one user-visible message per successful call".

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

const TOAST_MS: i32 = 4_000;

const TOAST_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; \
    padding: 12px 20px; background-color: #323232; color: white; \
    border-radius: 4px; font-size: 14px; z-index: 1000;";

/// Show a transient message. If the DOM is unavailable the message goes to
/// the log instead, so an acknowledgement is never silently lost.
pub fn toast(message: &str) {
    if let Err(e) = show(message) {
        log::warn!("toast unavailable ({e}); message was: {message}");
    }
}

fn show(message: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let document = window
        .document()
        .ok_or_else(|| "no document".to_string())?;
    let body = document.body().ok_or_else(|| "no body".to_string())?;

    let node = document
        .create_element("div")
        .map_err(|e| format!("create_element failed: {e:?}"))?;
    node.set_class_name("catalog-toast");
    node.set_text_content(Some(message));
    node.set_attribute("style", TOAST_STYLE)
        .map_err(|e| format!("set_attribute failed: {e:?}"))?;
    body.append_child(&node)
        .map_err(|e| format!("append_child failed: {e:?}"))?;

    let handle = node.clone();
    let remove: js_sys::Function = Closure::once_into_js(move || {
        handle.remove();
    })
    .unchecked_into();

    // Without a timer the toast would stay on screen forever; take it back
    // down before reporting the failure.
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(&remove, TOAST_MS)
    {
        node.remove();
        return Err(format!("set_timeout failed: {e:?}"));
    }

    Ok(())
}
