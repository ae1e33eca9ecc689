use super::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn browser_window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window is unavailable".to_string())
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    browser_window()?
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(js_error_to_string)
}

pub async fn fetch_text(url: &str) -> Result<TextResponse, String> {
    let window = browser_window()?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error_to_string)?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch resolved to a non-Response value".to_string())?;
    let status = response.status();
    let body = JsFuture::from(response.text().map_err(js_error_to_string)?)
        .await
        .map_err(js_error_to_string)?
        .as_string()
        .unwrap_or_default();
    Ok(TextResponse { status, body })
}
