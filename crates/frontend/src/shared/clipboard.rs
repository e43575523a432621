//! Clipboard access through the Web Clipboard API.

use wasm_bindgen_futures::JsFuture;

/// Copy text; `Err` carries a user-facing reason
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No browser window".to_string())?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|_| "Clipboard access was denied".to_string())
}
